//! Settings value types.
//!
//! This module is split into focused sub-modules by domain:
//! - `clipboard`: Copy formatting flags
//! - `tab_bar`: Tab width mode
//! - `window`: Launch mode, launch position, application theme

pub mod clipboard;
pub mod tab_bar;
pub mod window;

pub use clipboard::{CopyFormat, CopyFormatKind};
pub use tab_bar::TabWidthMode;
pub use window::{ElementTheme, LaunchMode, LaunchPosition};
