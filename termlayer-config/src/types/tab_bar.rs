//! Tab bar types.

use serde::{Deserialize, Serialize};

/// How tab headers share the width of the tab row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub enum TabWidthMode {
    /// Every tab gets the same width (default)
    #[default]
    Equal,
    /// Tabs are as wide as their titles
    TitleLength,
    /// Inactive tabs shrink to their icon
    Compact,
}

impl TabWidthMode {
    /// Display name for UI
    pub fn display_name(&self) -> &'static str {
        match self {
            TabWidthMode::Equal => "Equal",
            TabWidthMode::TitleLength => "Size to content",
            TabWidthMode::Compact => "Compact",
        }
    }
}
