// Library exports for the termlayer binary and its integration tests.

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod cli;
pub mod debug;
pub mod loader;
pub mod report;

pub use loader::{LoadedSettings, SettingsPaths};
