//! Key chord → action table built from binding documents.

use serde_json::Value;
use std::collections::HashMap;

use crate::action::{ActionAndArgs, ParsedAction, ShortcutAction, parse_action};
use crate::parser::{KeyChord, parse_key_chord};
use crate::warnings::SettingsLoadWarning;

/// Member of a binding entry holding its key chord.
pub const KEYS_KEY: &str = "keys";

/// Member of a binding entry holding its action.
pub const COMMAND_KEY: &str = "command";

/// Reason a `keys` member did not yield a chord.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeysError {
    TooManyKeys,
    Invalid(String),
}

impl KeysError {
    pub(crate) fn warning(&self) -> SettingsLoadWarning {
        match self {
            KeysError::TooManyKeys => SettingsLoadWarning::TooManyKeysForChord,
            KeysError::Invalid(_) => SettingsLoadWarning::InvalidKeyChord,
        }
    }
}

/// Parse a `keys` member: a chord string, or an array holding exactly one.
pub(crate) fn parse_keys(value: &Value) -> Result<KeyChord, KeysError> {
    let text = match value {
        Value::String(text) => text.as_str(),
        Value::Array(items) if items.len() > 1 => return Err(KeysError::TooManyKeys),
        Value::Array(items) => match items.first().and_then(Value::as_str) {
            Some(text) => text,
            None => return Err(KeysError::Invalid(value.to_string())),
        },
        other => return Err(KeysError::Invalid(other.to_string())),
    };
    parse_key_chord(text).map_err(|e| KeysError::Invalid(e.to_string()))
}

/// Bindings from key chords to actions.
///
/// Layering a document only adds, replaces or removes the chords it names, so
/// a user document can override a handful of defaults without restating them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KeyMapping {
    bindings: HashMap<KeyChord, ActionAndArgs>,
}

impl KeyMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mapping from a single binding array.
    pub fn from_json(json: &Value) -> (Self, Vec<SettingsLoadWarning>) {
        let mut mapping = Self::new();
        let warnings = mapping.layer_json(json);
        (mapping, warnings)
    }

    /// Layer a binding array on top of the current bindings.
    ///
    /// Entries without a `keys` member are commands only and are skipped here,
    /// as are entries that are not objects. Problems with individual entries
    /// are returned as warnings in encounter order; the remaining entries are
    /// still applied.
    pub fn layer_json(&mut self, json: &Value) -> Vec<SettingsLoadWarning> {
        let mut warnings = Vec::new();
        let Some(entries) = json.as_array() else {
            log::warn!("Ignoring keybindings value that is not an array: {json}");
            return warnings;
        };

        for entry in entries {
            let Some(object) = entry.as_object() else {
                continue;
            };
            let Some(keys) = object.get(KEYS_KEY) else {
                continue;
            };

            let chord = match parse_keys(keys) {
                Ok(chord) => chord,
                Err(e) => {
                    log::warn!("Skipping keybinding with keys {keys}: {e:?}");
                    warnings.push(e.warning());
                    continue;
                }
            };

            match parse_action(object.get(COMMAND_KEY).unwrap_or(&Value::Null)) {
                Ok(ParsedAction::Bound(action)) => {
                    log::debug!("Bound {} -> {}", chord, action.action().json_name());
                    self.bindings.insert(chord, action);
                }
                Ok(ParsedAction::Unbound) => {
                    if self.bindings.remove(&chord).is_some() {
                        log::debug!("Unbound {}", chord);
                    }
                }
                Err(e) => {
                    log::warn!("Skipping keybinding for {}: {}", chord, e);
                    warnings.push(e.warning());
                }
            }
        }

        warnings
    }

    /// Bind `chord` to `action`, replacing any previous binding.
    pub fn set_binding(&mut self, chord: KeyChord, action: ActionAndArgs) {
        self.bindings.insert(chord, action);
    }

    /// Remove the binding for `chord`, returning what was bound.
    pub fn unbind(&mut self, chord: &KeyChord) -> Option<ActionAndArgs> {
        self.bindings.remove(chord)
    }

    /// Action bound to `chord`, if any.
    pub fn action_for(&self, chord: &KeyChord) -> Option<&ActionAndArgs> {
        self.bindings.get(chord)
    }

    /// A chord that invokes `action`. When several do, the lowest chord in
    /// chord order is returned so the answer is stable.
    pub fn chord_for(&self, action: ShortcutAction) -> Option<&KeyChord> {
        self.bindings
            .iter()
            .filter(|(_, bound)| bound.action() == action)
            .map(|(chord, _)| chord)
            .min()
    }

    /// All bindings, sorted by chord.
    pub fn sorted(&self) -> Vec<(&KeyChord, &ActionAndArgs)> {
        let mut bindings: Vec<_> = self.bindings.iter().collect();
        bindings.sort_by(|a, b| a.0.cmp(b.0));
        bindings
    }

    pub fn iter(&self) -> impl Iterator<Item = (&KeyChord, &ActionAndArgs)> {
        self.bindings.iter()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn chord(text: &str) -> KeyChord {
        parse_key_chord(text).unwrap()
    }

    #[test]
    fn test_empty_mapping() {
        let mapping = KeyMapping::new();
        assert!(mapping.is_empty());
        assert_eq!(mapping.len(), 0);
    }

    #[test]
    fn test_parse_keys_forms() {
        assert_eq!(parse_keys(&json!("ctrl+c")).unwrap(), chord("ctrl+c"));
        assert_eq!(parse_keys(&json!(["ctrl+c"])).unwrap(), chord("ctrl+c"));
        assert_eq!(
            parse_keys(&json!(["ctrl+c", "ctrl+v"])),
            Err(KeysError::TooManyKeys)
        );
        assert!(matches!(parse_keys(&json!([])), Err(KeysError::Invalid(_))));
        assert!(matches!(parse_keys(&json!(5)), Err(KeysError::Invalid(_))));
    }

    #[test]
    fn test_later_entry_overrides_earlier() {
        let (mapping, warnings) = KeyMapping::from_json(&json!([
            {"command": "copy", "keys": "ctrl+c"},
            {"command": "paste", "keys": "ctrl+c"}
        ]));
        assert!(warnings.is_empty());
        assert_eq!(mapping.len(), 1);
        assert_eq!(
            mapping.action_for(&chord("ctrl+c")).map(ActionAndArgs::action),
            Some(ShortcutAction::Paste)
        );
    }

    #[test]
    fn test_chord_for_is_stable() {
        let (mapping, _) = KeyMapping::from_json(&json!([
            {"command": "find", "keys": "ctrl+shift+f"},
            {"command": "find", "keys": "ctrl+f"}
        ]));
        assert_eq!(mapping.chord_for(ShortcutAction::Find), Some(&chord("ctrl+f")));
        assert_eq!(mapping.chord_for(ShortcutAction::Quit), None);
    }
}
