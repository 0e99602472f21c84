//! Profile collection management.
//!
//! Provides `ProfileManager`, which stores profiles in display order, layers
//! the `profiles` section of settings documents and answers the lookups the
//! default-profile resolver needs.

use serde_json::Value;
use std::collections::{HashMap, HashSet};
use termlayer_keybindings::SettingsLoadWarning;

use super::profile::{Profile, ProfileDefaults, ProfileId};
use crate::error::Result;

const DEFAULTS_KEY: &str = "defaults";
const LIST_KEY: &str = "list";

/// Manages a collection of profiles
#[derive(Debug, Clone, Default)]
pub struct ProfileManager {
    /// All profiles indexed by ID
    profiles: HashMap<ProfileId, Profile>,

    /// Ordered list of profile IDs for display
    order: Vec<ProfileId>,

    /// Values used by profiles that do not set their own
    defaults: ProfileDefaults,
}

impl ProfileManager {
    /// Create a new empty profile manager
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a profile manager from a list of profiles
    pub fn from_profiles(profiles: Vec<Profile>) -> Self {
        let mut manager = Self::new();
        for profile in profiles {
            manager.add(profile);
        }
        manager
    }

    /// Add a profile to the manager, replacing one with the same id
    pub fn add(&mut self, profile: Profile) {
        let id = profile.guid;
        if !self.order.contains(&id) {
            self.order.push(id);
        }
        self.profiles.insert(id, profile);
    }

    /// Get a profile by ID
    pub fn get(&self, id: &ProfileId) -> Option<&Profile> {
        self.profiles.get(id)
    }

    /// Get all profiles in display order
    pub fn profiles_ordered(&self) -> Vec<&Profile> {
        self.order
            .iter()
            .filter_map(|id| self.profiles.get(id))
            .collect()
    }

    /// Get the number of profiles
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Check if there are no profiles
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    pub fn defaults(&self) -> &ProfileDefaults {
        &self.defaults
    }

    /// Find a profile by name. An exact match wins over a case-insensitive one.
    pub fn find_by_name(&self, name: &str) -> Option<&Profile> {
        let ordered = self.profiles_ordered();
        ordered
            .iter()
            .find(|p| p.name == name)
            .or_else(|| {
                let lower = name.to_lowercase();
                ordered.iter().find(|p| p.name.to_lowercase() == lower)
            })
            .copied()
    }

    /// Whether `profile` is hidden, taking profile defaults into account.
    pub fn is_hidden(&self, profile: &Profile) -> bool {
        profile
            .settings
            .hidden
            .or(self.defaults.hidden)
            .unwrap_or(false)
    }

    /// Color scheme used by `profile`, taking profile defaults into account.
    pub fn color_scheme_for<'a>(&'a self, profile: &'a Profile) -> Option<&'a str> {
        profile
            .settings
            .color_scheme
            .as_deref()
            .or(self.defaults.color_scheme.as_deref())
    }

    /// First profile in display order that is not hidden
    pub fn first_visible(&self) -> Option<&Profile> {
        self.profiles_ordered()
            .into_iter()
            .find(|p| !self.is_hidden(p))
    }

    /// Layer the `profiles` section of a settings document.
    ///
    /// Accepts either a plain array of profiles or an object with `defaults`
    /// and `list` members. A listed profile whose id already exists from an
    /// earlier document is layered onto the existing profile. A second entry
    /// with the same id in the same document is skipped with
    /// [`SettingsLoadWarning::DuplicateProfile`].
    pub fn layer_json(&mut self, json: &Value) -> Result<Vec<SettingsLoadWarning>> {
        let mut warnings = Vec::new();

        let list = match json {
            Value::Array(_) => json,
            Value::Object(section) => {
                if let Some(defaults) = section.get(DEFAULTS_KEY) {
                    self.defaults.layer_json(defaults)?;
                }
                match section.get(LIST_KEY) {
                    Some(list) => list,
                    None => return Ok(warnings),
                }
            }
            _ => return Err(crate::error::ConfigError::NotAnObject("\"profiles\"")),
        };

        let Some(entries) = list.as_array() else {
            return Err(crate::error::ConfigError::NotAnObject("\"profiles.list\""));
        };

        let mut seen: HashSet<ProfileId> = HashSet::new();
        for entry in entries {
            let id = Profile::id_from_json(entry)?;
            if !seen.insert(id) {
                log::warn!("Ignoring duplicate profile {id}");
                warnings.push(SettingsLoadWarning::DuplicateProfile);
                continue;
            }

            match self.profiles.get_mut(&id) {
                Some(existing) => {
                    log::debug!("Layering profile '{}' ({id})", existing.name);
                    existing.layer_json(entry)?;
                }
                None => {
                    let profile = Profile::from_json(entry)?;
                    log::debug!("Adding profile '{}' ({id})", profile.name);
                    self.add(profile);
                }
            }
        }

        Ok(warnings)
    }
}
