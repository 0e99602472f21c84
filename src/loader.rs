//! Settings loading: built-in defaults plus the user settings file.
//!
//! The built-in defaults are layered into the root of a [`SettingsLayers`]
//! arena and the user file into a child of it. Each document may also carry
//! `schemes` and `profiles`. Once both are layered the default profile is
//! resolved and color-scheme references are checked.

use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use termlayer_config::{
    ConfigError, GlobalAppSettings, LayerId, LayerView, Profile, ProfileManager, Result,
    SettingsLayers, SettingsLoadWarning, layer_color_schemes, resolve_default_profile,
    validate_color_schemes,
};

/// Settings file name inside the config directory
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// Defaults shipped with the binary
pub const DEFAULT_SETTINGS: &str = include_str!("defaults.json");

const SCHEMES_KEY: &str = "schemes";
const PROFILES_KEY: &str = "profiles";

/// Where to read settings from.
#[derive(Debug, Clone, Default)]
pub struct SettingsPaths {
    /// User settings file; the platform default when `None`
    pub settings: Option<PathBuf>,
    /// Replacement for the built-in defaults
    pub defaults: Option<PathBuf>,
}

impl SettingsPaths {
    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir()
                .map(|dir| dir.join("termlayer"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
        #[cfg(not(target_os = "windows"))]
        {
            // Use XDG convention on all platforms: ~/.config/termlayer
            dirs::home_dir()
                .map(|home| home.join(".config").join("termlayer"))
                .unwrap_or_else(|| PathBuf::from("."))
        }
    }

    /// The user settings file that will be read.
    pub fn settings_path(&self) -> PathBuf {
        self.settings
            .clone()
            .unwrap_or_else(|| Self::config_dir().join(SETTINGS_FILE_NAME))
    }
}

/// Everything produced by a settings load.
#[derive(Debug)]
pub struct LoadedSettings {
    layers: SettingsLayers,
    defaults_layer: LayerId,
    user_layer: LayerId,
    profiles: ProfileManager,
    warnings: Vec<SettingsLoadWarning>,
}

impl LoadedSettings {
    /// Load settings from the files named by `paths`.
    ///
    /// A missing user settings file is not an error; the defaults are used
    /// on their own.
    pub fn load(paths: &SettingsPaths) -> Result<Self> {
        let defaults = match &paths.defaults {
            Some(path) => {
                log::info!("Loading defaults from {:?}", path);
                fs::read_to_string(path)?
            }
            None => DEFAULT_SETTINGS.to_string(),
        };

        let settings_path = paths.settings_path();
        let user = read_optional(&settings_path)?;
        match &user {
            Some(_) => log::info!("Loading user settings from {:?}", settings_path),
            None => log::info!("No user settings at {:?}, using defaults", settings_path),
        }

        Self::from_documents(&defaults, user.as_deref())
    }

    /// Load settings from document text.
    pub fn from_documents(defaults: &str, user: Option<&str>) -> Result<Self> {
        let defaults = parse_document(defaults)?;
        let user = user.map(parse_document).transpose()?;

        let mut warnings = Vec::new();
        let mut profiles = ProfileManager::new();

        let mut root = GlobalAppSettings::from_json(&defaults)?;
        warnings.extend(layer_sections(&mut root, &mut profiles, &defaults)?);

        let mut layers = SettingsLayers::new();
        let defaults_layer = layers.push_root(root);
        let user_layer = layers.create_child(defaults_layer)?;

        if let Some(user) = &user {
            let settings = layers.get_mut(user_layer)?;
            settings.layer_json(user)?;
            warnings.extend(layer_sections(settings, &mut profiles, user)?);
        }

        warnings.extend(resolve_default_profile(&mut layers, user_layer, &profiles)?);

        let settings = layers.get(user_layer)?;
        warnings.extend(validate_color_schemes(settings, &profiles));

        // Binding warnings come first: they were found while layering
        let mut all = settings.keybindings_warnings().to_vec();
        all.extend(warnings);

        log::info!(
            "Loaded {} profile(s), {} color scheme(s), {} key binding(s), {} warning(s)",
            profiles.len(),
            settings.color_schemes().len(),
            settings.keymap().len(),
            all.len()
        );

        Ok(Self {
            layers,
            defaults_layer,
            user_layer,
            profiles,
            warnings: all,
        })
    }

    /// The user layer, which has inherited everything from the defaults.
    pub fn global(&self) -> Result<&GlobalAppSettings> {
        self.layers.get(self.user_layer)
    }

    /// Settings as seen from the user layer.
    pub fn view(&self) -> Result<LayerView<'_>> {
        self.layers.view(self.user_layer)
    }

    pub fn layers(&self) -> &SettingsLayers {
        &self.layers
    }

    pub fn defaults_layer(&self) -> LayerId {
        self.defaults_layer
    }

    pub fn user_layer(&self) -> LayerId {
        self.user_layer
    }

    pub fn profiles(&self) -> &ProfileManager {
        &self.profiles
    }

    /// The resolved default profile, if there was any profile to resolve to.
    pub fn default_profile(&self) -> Option<&Profile> {
        let id = self.global().ok()?.default_profile().ok()?;
        self.profiles.get(&id)
    }

    /// Every non-fatal problem found while loading, in the order found.
    pub fn warnings(&self) -> &[SettingsLoadWarning] {
        &self.warnings
    }
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ConfigError::Io(e)),
    }
}

/// An empty (or whitespace-only) file counts as an empty object.
fn parse_document(text: &str) -> Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Object(serde_json::Map::new()));
    }
    let json: Value = serde_json::from_str(text)?;
    if !json.is_object() {
        return Err(ConfigError::NotAnObject("a settings document"));
    }
    Ok(json)
}

fn layer_sections(
    settings: &mut GlobalAppSettings,
    profiles: &mut ProfileManager,
    json: &Value,
) -> Result<Vec<SettingsLoadWarning>> {
    let mut warnings = Vec::new();
    if let Some(schemes) = json.get(SCHEMES_KEY) {
        warnings.extend(layer_color_schemes(settings, schemes));
    }
    if let Some(section) = json.get(PROFILES_KEY) {
        warnings.extend(profiles.layer_json(section)?);
    }
    Ok(warnings)
}
