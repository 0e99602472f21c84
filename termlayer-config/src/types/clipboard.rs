//! Clipboard types.

use serde::{Deserialize, Serialize};

/// A rich-text format that can accompany plain text on copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CopyFormatKind {
    Html,
    Rtf,
}

/// Which rich-text formats are placed on the clipboard on copy.
///
/// Settings accept either a bool (`true` = every format, `false` = plain text
/// only) or an array of format names. Serialized as the array form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "CopyFormatRepr", into = "Vec<CopyFormatKind>")]
pub struct CopyFormat {
    pub html: bool,
    pub rtf: bool,
}

impl CopyFormat {
    pub const NONE: CopyFormat = CopyFormat {
        html: false,
        rtf: false,
    };
    pub const ALL: CopyFormat = CopyFormat {
        html: true,
        rtf: true,
    };

    pub fn contains(&self, kind: CopyFormatKind) -> bool {
        match kind {
            CopyFormatKind::Html => self.html,
            CopyFormatKind::Rtf => self.rtf,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CopyFormatRepr {
    Flag(bool),
    Formats(Vec<CopyFormatKind>),
}

impl From<CopyFormatRepr> for CopyFormat {
    fn from(repr: CopyFormatRepr) -> Self {
        match repr {
            CopyFormatRepr::Flag(true) => CopyFormat::ALL,
            CopyFormatRepr::Flag(false) => CopyFormat::NONE,
            CopyFormatRepr::Formats(kinds) => CopyFormat {
                html: kinds.contains(&CopyFormatKind::Html),
                rtf: kinds.contains(&CopyFormatKind::Rtf),
            },
        }
    }
}

impl From<CopyFormat> for Vec<CopyFormatKind> {
    fn from(format: CopyFormat) -> Self {
        let mut kinds = Vec::new();
        if format.html {
            kinds.push(CopyFormatKind::Html);
        }
        if format.rtf {
            kinds.push(CopyFormatKind::Rtf);
        }
        kinds
    }
}
