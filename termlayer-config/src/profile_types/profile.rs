//! Core `Profile` struct and its JSON layering.

use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::error::{ConfigError, Result};
use crate::json_utils::{get_required_value_for_key, get_value_for_key};

/// Unique identifier for a profile
pub type ProfileId = Uuid;

/// Namespace used to derive ids for profiles that only have a name.
pub const PROFILE_NAMESPACE: Uuid = Uuid::from_u128(0x2bde4a90_d05f_401c_9492_e40884ead1d8);

const GUID_KEY: &str = "guid";
const NAME_KEY: &str = "name";
const HIDDEN_KEY: &str = "hidden";
const COMMANDLINE_KEY: &str = "commandline";
const COLOR_SCHEME_KEY: &str = "colorScheme";
const STARTING_DIRECTORY_KEY: &str = "startingDirectory";

/// Parse a profile GUID, with or without surrounding braces.
pub fn parse_profile_id(text: &str) -> Option<ProfileId> {
    let trimmed = text.trim();
    let inner = trimmed
        .strip_prefix('{')
        .and_then(|rest| rest.strip_suffix('}'))
        .unwrap_or(trimmed);
    Uuid::parse_str(inner).ok()
}

/// Settings shared by every profile unless the profile sets its own value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileDefaults {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commandline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_scheme: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub starting_directory: Option<String>,
}

impl ProfileDefaults {
    /// Override the values present in `json`.
    pub fn layer_json(&mut self, json: &Value) -> Result<()> {
        get_value_for_key(json, HIDDEN_KEY, &mut self.hidden)?;
        get_value_for_key(json, COMMANDLINE_KEY, &mut self.commandline)?;
        get_value_for_key(json, COLOR_SCHEME_KEY, &mut self.color_scheme)?;
        get_value_for_key(json, STARTING_DIRECTORY_KEY, &mut self.starting_directory)?;
        Ok(())
    }
}

/// A terminal session profile
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    /// Unique identifier for this profile
    pub guid: ProfileId,

    /// Display name for the profile
    pub name: String,

    /// Values this profile sets itself (unset values fall back to the
    /// manager's profile defaults)
    #[serde(flatten)]
    pub settings: ProfileDefaults,
}

impl Profile {
    /// Create a profile whose id is derived from its name
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::with_id(Self::id_for_name(&name), name)
    }

    /// Create a profile with a specific ID
    pub fn with_id(guid: ProfileId, name: impl Into<String>) -> Self {
        Self {
            guid,
            name: name.into(),
            settings: ProfileDefaults::default(),
        }
    }

    /// Id given to a profile that has a name but no `guid`.
    pub fn id_for_name(name: &str) -> ProfileId {
        Uuid::new_v5(&PROFILE_NAMESPACE, name.as_bytes())
    }

    /// Id of the profile described by `json`: its `guid` when present,
    /// otherwise derived from its `name`.
    pub fn id_from_json(json: &Value) -> Result<ProfileId> {
        if !json.is_object() {
            return Err(ConfigError::NotAnObject("a profile"));
        }

        let mut guid: Option<String> = None;
        if get_value_for_key(json, GUID_KEY, &mut guid)?
            && let Some(text) = guid
        {
            return parse_profile_id(&text).ok_or_else(|| ConfigError::InvalidValue {
                key: GUID_KEY.to_string(),
                source: serde::de::Error::custom(format!("\"{text}\" is not a GUID")),
            });
        }

        let mut name = String::new();
        if get_required_value_for_key(json, NAME_KEY, &mut name)? && !name.is_empty() {
            return Ok(Self::id_for_name(&name));
        }

        Err(ConfigError::InvalidValue {
            key: NAME_KEY.to_string(),
            source: serde::de::Error::custom("a profile needs a \"guid\" or a non-empty \"name\""),
        })
    }

    /// Build a profile from a JSON object.
    pub fn from_json(json: &Value) -> Result<Self> {
        let guid = Self::id_from_json(json)?;
        let mut name = String::new();
        get_required_value_for_key(json, NAME_KEY, &mut name)?;
        let mut profile = Self::with_id(guid, name);
        profile.layer_json(json)?;
        Ok(profile)
    }

    /// Override the values present in `json`. The id never changes.
    pub fn layer_json(&mut self, json: &Value) -> Result<()> {
        get_required_value_for_key(json, NAME_KEY, &mut self.name)?;
        self.settings.layer_json(json)
    }
}
