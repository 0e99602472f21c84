//! The global settings node.
//!
//! A [`GlobalAppSettings`] holds one layer of settings. Every scalar is stored
//! as an `Option` so a layer can tell "set here" apart from "inherited"; the
//! getters fall back to the defaults in [`crate::defaults`]. Walking a chain of
//! layers is done through [`crate::layers::LayerView`].
//!
//! The key-binding map is shared with the node it was inherited from or
//! copied from. It is one map behind a lock: bindings layered into any node
//! that shares it are seen by every other node sharing it.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;
use termlayer_keybindings::{Command, KeyMapping, SettingsLoadWarning};

use crate::color_scheme::ColorScheme;
use crate::defaults;
use crate::error::{ConfigError, Result};
use crate::json_utils::get_value_for_key;
use crate::layers::LayerView;
use crate::profile_types::ProfileId;
use crate::types::{CopyFormat, ElementTheme, LaunchMode, LaunchPosition, TabWidthMode};

pub const DEFAULT_PROFILE_KEY: &str = "defaultProfile";
/// Deprecated name of [`ACTIONS_KEY`], still read before it.
pub const LEGACY_KEYBINDINGS_KEY: &str = "keybindings";
pub const ACTIONS_KEY: &str = "actions";

/// Declares every scalar setting once and generates:
///
/// - the `GlobalScalars` storage struct and its JSON layering
/// - a getter on [`GlobalAppSettings`] that falls back to the default
/// - a getter on [`LayerView`] that walks the parent chain first
/// - the fully resolved [`EffectiveSettings`] snapshot
macro_rules! global_scalars {
    ($(
        $(#[$meta:meta])*
        $field:ident: $ty:ty = $key:literal => $default:path;
    )*) => {
        /// Scalar settings explicitly set in one layer.
        #[derive(Debug, Clone, Default, PartialEq, Serialize)]
        pub struct GlobalScalars {
            $(
                $(#[$meta])*
                #[serde(rename = $key, skip_serializing_if = "Option::is_none")]
                pub $field: Option<$ty>,
            )*
        }

        impl GlobalScalars {
            /// JSON keys of every scalar setting.
            pub const KEYS: &'static [&'static str] = &[$($key),*];

            fn layer_json(&mut self, json: &Value) -> Result<()> {
                $(get_value_for_key(json, $key, &mut self.$field)?;)*
                Ok(())
            }
        }

        /// Every scalar setting with inheritance and defaults applied.
        #[derive(Debug, Clone, PartialEq, Serialize)]
        pub struct EffectiveSettings {
            $(
                #[serde(rename = $key)]
                pub $field: $ty,
            )*
        }

        impl GlobalAppSettings {
            $(
                $(#[$meta])*
                pub fn $field(&self) -> $ty {
                    self.scalars.$field.clone().unwrap_or_else($default)
                }
            )*

            /// Snapshot of this node's scalars, ignoring any parents.
            pub fn effective(&self) -> EffectiveSettings {
                EffectiveSettings {
                    $($field: self.$field(),)*
                }
            }
        }

        impl LayerView<'_> {
            $(
                $(#[$meta])*
                pub fn $field(&self) -> $ty {
                    self.find_scalar(|scalars| scalars.$field.clone())
                        .unwrap_or_else($default)
                }
            )*

            /// Snapshot of the scalars seen through this layer.
            pub fn effective(&self) -> EffectiveSettings {
                EffectiveSettings {
                    $($field: self.$field(),)*
                }
            }
        }
    };
}

global_scalars! {
    /// Show the tab row even with a single tab open
    always_show_tabs: bool = "alwaysShowTabs" => defaults::always_show_tabs;
    /// Ask before closing a window with several tabs
    confirm_close_all_tabs: bool = "confirmCloseAllTabs" => defaults::confirm_close_all_tabs;
    initial_rows: i32 = "initialRows" => defaults::initial_rows;
    initial_cols: i32 = "initialCols" => defaults::initial_cols;
    /// Window position on launch
    initial_position: LaunchPosition = "initialPosition" => defaults::initial_position;
    show_title_in_titlebar: bool = "showTerminalTitleInTitlebar" => defaults::show_title_in_titlebar;
    show_tabs_in_titlebar: bool = "showTabsInTitlebar" => defaults::show_tabs_in_titlebar;
    /// Characters that end a word for double-click selection
    word_delimiters: String = "wordDelimiters" => defaults::word_delimiters;
    copy_on_select: bool = "copyOnSelect" => defaults::copy_on_select;
    /// Rich formats placed on the clipboard alongside plain text
    copy_formatting: CopyFormat = "copyFormatting" => defaults::copy_formatting;
    warn_about_large_paste: bool = "largePasteWarning" => defaults::warn_about_large_paste;
    warn_about_multi_line_paste: bool = "multiLinePasteWarning" => defaults::warn_about_multi_line_paste;
    launch_mode: LaunchMode = "launchMode" => defaults::launch_mode;
    theme: ElementTheme = "theme" => defaults::theme;
    tab_width_mode: TabWidthMode = "tabWidthMode" => defaults::tab_width_mode;
    snap_to_grid_on_resize: bool = "snapToGridOnResize" => defaults::snap_to_grid_on_resize;
    debug_features_enabled: bool = "debugFeatures" => defaults::debug_features_enabled;
    force_full_repaint_rendering: bool = "experimental.rendering.forceFullRepaint" => defaults::force_full_repaint_rendering;
    software_rendering: bool = "experimental.rendering.software" => defaults::software_rendering;
    force_vt_input: bool = "experimental.input.forceVT" => defaults::force_vt_input;
    start_on_user_login: bool = "startOnUserLogin" => defaults::start_on_user_login;
    always_on_top: bool = "alwaysOnTop" => defaults::always_on_top;
    /// Use the tab switcher for next/previous tab
    use_tab_switcher: bool = "useTabSwitcher" => defaults::use_tab_switcher;
    disable_animations: bool = "disableAnimations" => defaults::disable_animations;
}

/// Where a node is in default-profile resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefaultProfileState<'a> {
    /// No identifier has been given and nothing has been resolved
    Unset,
    /// An identifier is waiting to be resolved
    Unresolved(&'a str),
    /// The default profile has been resolved
    Resolved(ProfileId),
}

/// One layer of global settings.
#[derive(Debug, Clone, Default)]
pub struct GlobalAppSettings {
    scalars: GlobalScalars,

    /// `defaultProfile` as written, before it is matched against profiles
    unparsed_default_profile: Option<String>,

    /// Resolved default profile; `None` while it needs resolution
    default_profile: Option<ProfileId>,

    keymap: Arc<RwLock<KeyMapping>>,
    keybindings_warnings: Vec<SettingsLoadWarning>,
    color_schemes: HashMap<String, ColorScheme>,
    commands: HashMap<String, Command>,
}

impl GlobalAppSettings {
    /// Create an empty node: every scalar at its default, no bindings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a node from a single settings document.
    pub fn from_json(json: &Value) -> Result<Self> {
        let mut settings = Self::new();
        settings.layer_json(json)?;
        Ok(settings)
    }

    /// Layer a settings document on top of this node.
    ///
    /// Only keys present in `json` change anything. Problems with individual
    /// binding entries are collected in [`Self::keybindings_warnings`]; a
    /// malformed value for a recognized key stops layering with
    /// [`ConfigError::InvalidValue`], keeping the keys read before it.
    pub fn layer_json(&mut self, json: &Value) -> Result<()> {
        if !json.is_object() {
            return Err(ConfigError::NotAnObject("global settings"));
        }

        if get_value_for_key(json, DEFAULT_PROFILE_KEY, &mut self.unparsed_default_profile)? {
            self.default_profile = None;
        }

        self.scalars.layer_json(json)?;

        for key in [LEGACY_KEYBINDINGS_KEY, ACTIONS_KEY] {
            if let Some(bindings) = json.get(key) {
                self.layer_bindings(bindings);
            }
        }

        Ok(())
    }

    fn layer_bindings(&mut self, bindings: &Value) {
        let mut warnings = self.keymap.write().layer_json(bindings);
        warnings.extend(Command::layer_json(&mut self.commands, bindings));
        if !warnings.is_empty() {
            log::info!("{} problem(s) found in key bindings", warnings.len());
        }
        self.keybindings_warnings.extend(warnings);
    }

    /// A standalone copy of this node.
    ///
    /// Scalars, warnings, color schemes, commands and the default-profile
    /// state are copied; the key-binding map is shared, so bindings layered
    /// into either node show up in both.
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Take on what this node inherits from `parent`.
    ///
    /// Adopts the parent's key-binding map, appends the parent's warnings and
    /// copies in every parent color scheme and command. Meant to be called
    /// once, on a fresh node, before its own document is layered.
    pub fn finalize_inheritance(&mut self, parent: &GlobalAppSettings) {
        self.keymap = Arc::clone(&parent.keymap);
        self.keybindings_warnings
            .extend_from_slice(&parent.keybindings_warnings);

        for (name, scheme) in &parent.color_schemes {
            self.color_schemes.insert(name.clone(), scheme.clone());
        }
        for (name, command) in &parent.commands {
            self.commands.insert(name.clone(), command.clone());
        }
    }

    // ========================================================================
    // Default profile
    // ========================================================================

    /// The resolved default profile.
    ///
    /// Fails with [`ConfigError::UnresolvedDefaultProfile`] until a resolver
    /// has called [`Self::set_default_profile`] since the last identifier
    /// change.
    pub fn default_profile(&self) -> Result<ProfileId> {
        self.default_profile
            .ok_or(ConfigError::UnresolvedDefaultProfile)
    }

    pub fn set_default_profile(&mut self, id: ProfileId) {
        self.default_profile = Some(id);
    }

    pub fn has_unparsed_default_profile(&self) -> bool {
        self.unparsed_default_profile.is_some()
    }

    /// This node's own `defaultProfile` identifier. Use
    /// [`LayerView::unparsed_default_profile`] to include parents.
    pub fn unparsed_default_profile(&self) -> Option<&str> {
        self.unparsed_default_profile.as_deref()
    }

    /// Set the identifier. The resolved profile is dropped only when the
    /// identifier actually changes.
    pub fn set_unparsed_default_profile(&mut self, value: impl Into<String>) {
        let value = value.into();
        if self.unparsed_default_profile.as_deref() != Some(value.as_str()) {
            self.default_profile = None;
        }
        self.unparsed_default_profile = Some(value);
    }

    pub fn clear_unparsed_default_profile(&mut self) {
        self.unparsed_default_profile = None;
    }

    pub fn default_profile_state(&self) -> DefaultProfileState<'_> {
        match (self.default_profile, self.unparsed_default_profile.as_deref()) {
            (Some(id), _) => DefaultProfileState::Resolved(id),
            (None, Some(text)) => DefaultProfileState::Unresolved(text),
            (None, None) => DefaultProfileState::Unset,
        }
    }

    // ========================================================================
    // Key bindings and commands
    // ========================================================================

    /// The key-binding map, possibly shared with other nodes.
    ///
    /// Drop the guard before changing bindings through any node that shares
    /// the map.
    pub fn keymap(&self) -> RwLockReadGuard<'_, KeyMapping> {
        self.keymap.read()
    }

    /// Write access to the key-binding map. Changes are visible to every node
    /// sharing it.
    pub fn keymap_mut(&mut self) -> RwLockWriteGuard<'_, KeyMapping> {
        self.keymap.write()
    }

    /// Whether this node and `other` use the same key-binding map.
    pub fn shares_keymap_with(&self, other: &GlobalAppSettings) -> bool {
        Arc::ptr_eq(&self.keymap, &other.keymap)
    }

    /// Non-fatal problems found while layering bindings, oldest first.
    pub fn keybindings_warnings(&self) -> &[SettingsLoadWarning] {
        &self.keybindings_warnings
    }

    pub fn commands(&self) -> &HashMap<String, Command> {
        &self.commands
    }

    pub fn command(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn command_mut(&mut self, name: &str) -> Option<&mut Command> {
        self.commands.get_mut(name)
    }

    // ========================================================================
    // Color schemes
    // ========================================================================

    pub fn color_schemes(&self) -> &HashMap<String, ColorScheme> {
        &self.color_schemes
    }

    pub fn color_scheme(&self, name: &str) -> Option<&ColorScheme> {
        self.color_schemes.get(name)
    }

    pub fn color_scheme_mut(&mut self, name: &str) -> Option<&mut ColorScheme> {
        self.color_schemes.get_mut(name)
    }

    /// Add a scheme under its own name, replacing any scheme of that name.
    pub fn add_color_scheme(&mut self, scheme: ColorScheme) {
        self.color_schemes.insert(scheme.name.clone(), scheme);
    }

    // ========================================================================
    // Scalars
    // ========================================================================

    /// Scalars set explicitly in this node.
    pub fn scalars(&self) -> &GlobalScalars {
        &self.scalars
    }

    pub fn scalars_mut(&mut self) -> &mut GlobalScalars {
        &mut self.scalars
    }
}
