//! Color scheme definitions for the terminal.
//!
//! Schemes are read from the `schemes` array of a settings document and are
//! keyed by name. A later document that names an existing scheme only
//! overrides the colors it lists.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use termlayer_keybindings::SettingsLoadWarning;

use crate::defaults::{self, COLOR_TABLE_SIZE};
use crate::error::{ConfigError, Result};
use crate::global_settings::GlobalAppSettings;
use crate::json_utils::get_required_value_for_key;

const NAME_KEY: &str = "name";
const FOREGROUND_KEY: &str = "foreground";
const BACKGROUND_KEY: &str = "background";
const SELECTION_BACKGROUND_KEY: &str = "selectionBackground";
const CURSOR_COLOR_KEY: &str = "cursorColor";

/// JSON names of the 16 ANSI table entries, in table order.
const TABLE_KEYS: [&str; COLOR_TABLE_SIZE] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "purple",
    "cyan",
    "white",
    "brightBlack",
    "brightRed",
    "brightGreen",
    "brightYellow",
    "brightBlue",
    "brightPurple",
    "brightCyan",
    "brightWhite",
];

/// A color in RGB format, written as `#rrggbb` or `#rgb` in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn as_array(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| format!("color \"{s}\" must start with '#'"))?;
        if !hex.is_ascii() {
            return Err(format!("invalid color \"{s}\""));
        }

        let channel = |text: &str| {
            u8::from_str_radix(text, 16).map_err(|_| format!("invalid color \"{s}\""))
        };

        match hex.len() {
            6 => Ok(Color::new(
                channel(&hex[0..2])?,
                channel(&hex[2..4])?,
                channel(&hex[4..6])?,
            )),
            3 => {
                // #abc is shorthand for #aabbcc
                let r = channel(&hex[0..1])?;
                let g = channel(&hex[1..2])?;
                let b = channel(&hex[2..3])?;
                Ok(Color::new(r * 17, g * 17, b * 17))
            }
            _ => Err(format!("invalid color \"{s}\"")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

/// Terminal color scheme with 16 ANSI colors plus foreground/background
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub name: String,
    pub foreground: Color,
    pub background: Color,
    pub selection_background: Color,
    pub cursor_color: Color,
    pub table: [Color; COLOR_TABLE_SIZE],
}

impl ColorScheme {
    /// A scheme called `name` with the default (Campbell) colors.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            foreground: defaults::foreground(),
            background: defaults::background(),
            selection_background: defaults::selection_background(),
            cursor_color: defaults::cursor_color(),
            table: defaults::color_table(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get ANSI color by index (0-15)
    pub fn ansi_color(&self, index: usize) -> Option<Color> {
        self.table.get(index).copied()
    }

    /// Name of the scheme described by `json`, if it has one.
    pub fn name_from_json(json: &Value) -> Option<&str> {
        json.get(NAME_KEY).and_then(Value::as_str)
    }

    /// Build a scheme from a JSON object. The `name` member is required.
    pub fn from_json(json: &Value) -> Result<Self> {
        if !json.is_object() {
            return Err(ConfigError::NotAnObject("a color scheme"));
        }
        let mut name = String::new();
        if !get_required_value_for_key(json, NAME_KEY, &mut name)? || name.is_empty() {
            return Err(ConfigError::InvalidValue {
                key: NAME_KEY.to_string(),
                source: serde::de::Error::custom("a color scheme needs a non-empty name"),
            });
        }
        let mut scheme = ColorScheme::new(name);
        scheme.layer_json(json)?;
        Ok(scheme)
    }

    /// Override the colors present in `json`.
    ///
    /// The name is not changed since schemes are matched by name before
    /// layering.
    pub fn layer_json(&mut self, json: &Value) -> Result<()> {
        get_required_value_for_key(json, FOREGROUND_KEY, &mut self.foreground)?;
        get_required_value_for_key(json, BACKGROUND_KEY, &mut self.background)?;
        get_required_value_for_key(json, SELECTION_BACKGROUND_KEY, &mut self.selection_background)?;
        get_required_value_for_key(json, CURSOR_COLOR_KEY, &mut self.cursor_color)?;

        for (slot, key) in self.table.iter_mut().zip(TABLE_KEYS) {
            get_required_value_for_key(json, key, slot)?;
        }
        Ok(())
    }

    /// JSON form of the scheme, using the same keys it is read from.
    pub fn to_json(&self) -> Value {
        let mut object = serde_json::Map::new();
        object.insert(NAME_KEY.to_string(), Value::String(self.name.clone()));
        let mut put = |key: &str, color: Color| {
            object.insert(key.to_string(), Value::String(color.to_string()));
        };
        put(FOREGROUND_KEY, self.foreground);
        put(BACKGROUND_KEY, self.background);
        put(SELECTION_BACKGROUND_KEY, self.selection_background);
        put(CURSOR_COLOR_KEY, self.cursor_color);
        for (key, color) in TABLE_KEYS.into_iter().zip(self.table) {
            put(key, color);
        }
        Value::Object(object)
    }
}

impl Serialize for ColorScheme {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Layer a `schemes` array into `settings`.
///
/// A scheme whose name already exists is layered onto the existing entry;
/// any other scheme is added. Entries that are not objects, have no name,
/// or contain an invalid color are skipped with
/// [`SettingsLoadWarning::InvalidColorScheme`].
pub fn layer_color_schemes(
    settings: &mut GlobalAppSettings,
    schemes: &Value,
) -> Vec<SettingsLoadWarning> {
    let mut warnings = Vec::new();
    let Some(entries) = schemes.as_array() else {
        log::warn!("Ignoring \"schemes\" value that is not an array");
        warnings.push(SettingsLoadWarning::InvalidColorScheme);
        return warnings;
    };

    for entry in entries {
        let result = match ColorScheme::name_from_json(entry)
            .and_then(|name| settings.color_scheme_mut(name))
        {
            Some(existing) => {
                // Layer onto a scratch copy so a bad color leaves the entry intact.
                let mut layered = existing.clone();
                layered.layer_json(entry).map(|()| *existing = layered)
            }
            None => ColorScheme::from_json(entry).map(|scheme| settings.add_color_scheme(scheme)),
        };

        if let Err(e) = result {
            log::warn!("Skipping invalid color scheme: {e}");
            warnings.push(SettingsLoadWarning::InvalidColorScheme);
        }
    }

    warnings
}
