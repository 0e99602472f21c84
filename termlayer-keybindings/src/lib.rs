//! Keybinding model for termlayer settings.
//!
//! This crate turns the binding arrays found in settings documents into:
//!
//! - a [`KeyMapping`] from key chords to actions
//! - a table of named [`Command`]s for the command palette
//!
//! Both are built from the same entries. Recoverable problems are reported as
//! [`SettingsLoadWarning`]s instead of errors.

pub mod action;
pub mod command;
pub mod keymap;
pub mod parser;
pub mod warnings;

pub use action::{ActionAndArgs, ActionParseError, ParsedAction, ShortcutAction, parse_action};
pub use command::Command;
pub use keymap::KeyMapping;
pub use parser::{KeyChord, Modifiers, NamedKey, ParseError, ParsedKey, parse_key_chord};
pub use warnings::SettingsLoadWarning;
