//! Non-fatal problems found while loading settings.

use serde::Serialize;
use std::fmt;

/// A recoverable problem found while loading settings.
///
/// Warnings never abort a load. They are collected in encounter order and
/// surfaced to the user once the whole settings tree has been built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SettingsLoadWarning {
    /// A binding listed more than one key chord in its `keys` array.
    TooManyKeysForChord,
    /// A binding's `keys` value could not be parsed as a key chord.
    InvalidKeyChord,
    /// An action was missing an argument it cannot run without.
    MissingRequiredParameter,
    /// The `command` member named an action that does not exist.
    UnknownAction,
    /// A binding or command entry had the wrong shape.
    FailedToParseCommandJson,
    /// A command's nested `commands` member was not an array.
    FailedToParseSubCommands,
    /// The configured default profile matched no known profile.
    MissingDefaultProfile,
    /// Two profiles shared the same GUID.
    DuplicateProfile,
    /// A color scheme entry had no name or an unparseable color.
    InvalidColorScheme,
    /// A profile or command referenced a color scheme that does not exist.
    UnknownColorScheme,
}

impl SettingsLoadWarning {
    /// Message suitable for showing to the user.
    pub fn message(&self) -> &'static str {
        match self {
            Self::TooManyKeysForChord => {
                "Found a keybinding with more than one key chord in its \"keys\" array. Only one chord per binding is supported."
            }
            Self::InvalidKeyChord => "Found a keybinding with a key chord that could not be parsed.",
            Self::MissingRequiredParameter => {
                "Found a keybinding that was missing a required parameter value. This keybinding will be ignored."
            }
            Self::UnknownAction => "Found a keybinding or command for an unknown action.",
            Self::FailedToParseCommandJson => "Found a keybinding or command entry that could not be parsed.",
            Self::FailedToParseSubCommands => "Found a command whose nested \"commands\" value is not a list.",
            Self::MissingDefaultProfile => {
                "Could not find your default profile in your list of profiles - using the first profile."
            }
            Self::DuplicateProfile => {
                "Found multiple profiles with the same GUID in your settings file - ignoring duplicates."
            }
            Self::InvalidColorScheme => "Found a color scheme without a name or with an invalid color.",
            Self::UnknownColorScheme => "Found a reference to a color scheme that could not be found.",
        }
    }
}

impl fmt::Display for SettingsLoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
