//! Layered global settings for the termlayer terminal.
//!
//! This crate provides the settings model the terminal loads at startup:
//!
//! - [`GlobalAppSettings`]: one layer of global settings read from JSON
//! - [`SettingsLayers`]: the inheritance chain of layers and [`LayerView`]
//! - Color schemes, layered by name from the `schemes` array
//! - Profiles, layered from the `profiles` section
//! - Default-profile resolution and color-scheme validation
//!
//! Key chords, actions, the key-binding map and commands come from
//! `termlayer-keybindings` and are re-exported here.

pub mod color_scheme;
pub mod defaults;
pub mod error;
pub mod global_settings;
pub mod json_utils;
pub mod layers;
pub mod profile_types;
pub mod resolve;
pub mod types;

pub use color_scheme::{Color, ColorScheme, layer_color_schemes};
pub use error::{ConfigError, Result};
pub use global_settings::{
    ACTIONS_KEY, DEFAULT_PROFILE_KEY, DefaultProfileState, EffectiveSettings, GlobalAppSettings,
    GlobalScalars, LEGACY_KEYBINDINGS_KEY,
};
pub use layers::{LayerId, LayerView, SettingsLayers};
pub use profile_types::{Profile, ProfileDefaults, ProfileId, ProfileManager};
pub use resolve::{find_profile, resolve_default_profile, validate_color_schemes};
pub use types::{CopyFormat, CopyFormatKind, ElementTheme, LaunchMode, LaunchPosition, TabWidthMode};

// Re-export the key-binding model
pub use termlayer_keybindings::{
    ActionAndArgs, Command, KeyChord, KeyMapping, SettingsLoadWarning, ShortcutAction,
    parse_key_chord,
};
