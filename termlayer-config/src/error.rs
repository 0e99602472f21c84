//! Typed error variants for the termlayer-config crate.
//!
//! Fatal problems abort the operation that hit them and are returned as
//! [`ConfigError`]. Recoverable problems are collected as
//! [`SettingsLoadWarning`](termlayer_keybindings::SettingsLoadWarning)s
//! instead and never show up here.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use termlayer_config::{ConfigError, GlobalAppSettings};
//!
//! let err = GlobalAppSettings::from_json(&json!({"initialRows": "tall"})).unwrap_err();
//! match err {
//!     ConfigError::InvalidValue { key, .. } => assert_eq!(key, "initialRows"),
//!     other => panic!("unexpected error: {other}"),
//! }
//! ```

use thiserror::Error;

/// Errors produced while reading, layering or querying settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading a settings file.
    #[error("I/O error reading settings: {0}")]
    Io(#[from] std::io::Error),

    /// A settings file was not valid JSON.
    #[error("JSON parse error in settings: {0}")]
    Parse(#[from] serde_json::Error),

    /// A recognized key held a value of the wrong type or shape.
    ///
    /// Layering stops at the first such key. Keys processed before it keep
    /// their new values.
    #[error("invalid value for \"{key}\": {source}")]
    InvalidValue {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A settings document (or a section that must be one) was not an object.
    #[error("expected a JSON object for {0}")]
    NotAnObject(&'static str),

    /// The default profile was read before it was resolved to a profile id.
    #[error("the default profile has not been resolved")]
    UnresolvedDefaultProfile,

    /// A layer id did not belong to the layer tree it was used with.
    #[error("unknown settings layer {0}")]
    UnknownLayer(usize),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, ConfigError>;
