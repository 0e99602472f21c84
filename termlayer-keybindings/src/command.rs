//! Named commands shown in the command palette.
//!
//! Commands are read from the same binding arrays as the key mapping. The
//! key mapping only cares about entries with `keys`; the command table keeps
//! every entry that has (or can generate) a name.

use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::action::{ActionAndArgs, ParsedAction, parse_action};
use crate::keymap::{COMMAND_KEY, KEYS_KEY, parse_keys};
use crate::parser::KeyChord;
use crate::warnings::SettingsLoadWarning;

const NAME_KEY: &str = "name";
const ICON_KEY: &str = "icon";
const SUBCOMMANDS_KEY: &str = "commands";

/// A named command.
///
/// A command either runs an action or, when it has nested commands, opens a
/// sub-menu of further commands.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Command {
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    action: Option<ActionAndArgs>,
    #[serde(skip_serializing_if = "Option::is_none")]
    keys: Option<KeyChord>,
    #[serde(skip_serializing_if = "Option::is_none")]
    icon: Option<String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    subcommands: HashMap<String, Command>,
}

/// What a single entry asks the command table to do.
enum EntryOutcome {
    Insert(Command),
    Remove(String),
    Skip,
}

impl Command {
    /// A command that runs `action` under `name`.
    pub fn new(name: impl Into<String>, action: ActionAndArgs) -> Self {
        Self {
            name: name.into(),
            action: Some(action),
            keys: None,
            icon: None,
            subcommands: HashMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn action(&self) -> Option<&ActionAndArgs> {
        self.action.as_ref()
    }

    pub fn keys(&self) -> Option<&KeyChord> {
        self.keys.as_ref()
    }

    pub fn icon(&self) -> Option<&str> {
        self.icon.as_deref()
    }

    pub fn set_icon(&mut self, icon: Option<String>) {
        self.icon = icon;
    }

    pub fn subcommands(&self) -> &HashMap<String, Command> {
        &self.subcommands
    }

    pub fn has_nested_commands(&self) -> bool {
        !self.subcommands.is_empty()
    }

    /// Layer a binding array into `commands`, keyed by command name.
    ///
    /// Entries are parsed in order. A later entry with the same name replaces
    /// the earlier one, and an explicitly named entry whose action is unbound
    /// removes the command of that name. Entries whose action cannot be parsed
    /// are skipped without a warning since the key-mapping pass reports them.
    pub fn layer_json(
        commands: &mut HashMap<String, Command>,
        json: &Value,
    ) -> Vec<SettingsLoadWarning> {
        let mut warnings = Vec::new();
        let Some(entries) = json.as_array() else {
            return warnings;
        };

        for entry in entries {
            match Self::parse_entry(entry, &mut warnings) {
                EntryOutcome::Insert(command) => {
                    log::debug!("Added command '{}'", command.name);
                    commands.insert(command.name.clone(), command);
                }
                EntryOutcome::Remove(name) => {
                    if commands.remove(&name).is_some() {
                        log::debug!("Removed command '{}'", name);
                    }
                }
                EntryOutcome::Skip => {}
            }
        }

        warnings
    }

    fn parse_entry(entry: &Value, warnings: &mut Vec<SettingsLoadWarning>) -> EntryOutcome {
        let Some(object) = entry.as_object() else {
            return EntryOutcome::Skip;
        };

        let explicit_name = match object.get(NAME_KEY) {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => Some(name.clone()),
            Some(other) => {
                log::warn!("Command name must be a string, found {other}");
                warnings.push(SettingsLoadWarning::FailedToParseCommandJson);
                return EntryOutcome::Skip;
            }
        };
        let icon = object
            .get(ICON_KEY)
            .and_then(Value::as_str)
            .map(str::to_string);

        if let Some(nested) = object.get(SUBCOMMANDS_KEY) {
            let Some(name) = explicit_name else {
                log::warn!("Command with nested commands has no name");
                warnings.push(SettingsLoadWarning::FailedToParseCommandJson);
                return EntryOutcome::Skip;
            };
            if !nested.is_array() {
                log::warn!("Nested commands of '{name}' must be an array");
                warnings.push(SettingsLoadWarning::FailedToParseSubCommands);
                return EntryOutcome::Skip;
            }
            let mut subcommands = HashMap::new();
            warnings.extend(Self::layer_json(&mut subcommands, nested));
            return EntryOutcome::Insert(Command {
                name,
                action: None,
                keys: None,
                icon,
                subcommands,
            });
        }

        let action = match parse_action(object.get(COMMAND_KEY).unwrap_or(&Value::Null)) {
            Ok(ParsedAction::Bound(action)) => action,
            Ok(ParsedAction::Unbound) => {
                return explicit_name.map_or(EntryOutcome::Skip, EntryOutcome::Remove);
            }
            Err(_) => return EntryOutcome::Skip,
        };

        let name = explicit_name.unwrap_or_else(|| action.generate_name());
        let keys = object.get(KEYS_KEY).and_then(|keys| parse_keys(keys).ok());

        EntryOutcome::Insert(Command {
            name,
            action: Some(action),
            keys,
            icon,
            subcommands: HashMap::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::ShortcutAction;
    use serde_json::json;

    #[test]
    fn test_generated_and_explicit_names() {
        let mut commands = HashMap::new();
        let warnings = Command::layer_json(
            &mut commands,
            &json!([
                {"command": "newTab", "keys": "ctrl+shift+t"},
                {"name": "Say hi", "command": {"action": "sendInput", "input": "hi"}}
            ]),
        );
        assert!(warnings.is_empty());
        assert_eq!(commands.len(), 2);

        let new_tab = &commands["New tab"];
        assert_eq!(new_tab.action().map(ActionAndArgs::action), Some(ShortcutAction::NewTab));
        assert_eq!(new_tab.keys().map(ToString::to_string).as_deref(), Some("ctrl+shift+t"));

        assert!(commands.contains_key("Say hi"));
    }

    #[test]
    fn test_unbound_named_command_is_removed() {
        let mut commands = HashMap::new();
        Command::layer_json(&mut commands, &json!([{"name": "Copy it", "command": "copy"}]));
        assert!(commands.contains_key("Copy it"));

        Command::layer_json(&mut commands, &json!([{"name": "Copy it", "command": null}]));
        assert!(!commands.contains_key("Copy it"));
    }

    #[test]
    fn test_nested_commands() {
        let mut commands = HashMap::new();
        let warnings = Command::layer_json(
            &mut commands,
            &json!([{
                "name": "Tabs",
                "commands": [
                    {"command": "nextTab"},
                    {"command": "prevTab"}
                ]
            }]),
        );
        assert!(warnings.is_empty());
        let tabs = &commands["Tabs"];
        assert!(tabs.has_nested_commands());
        assert!(tabs.action().is_none());
        assert_eq!(tabs.subcommands().len(), 2);
    }

    #[test]
    fn test_structural_warnings() {
        let mut commands = HashMap::new();
        let warnings = Command::layer_json(
            &mut commands,
            &json!([
                {"name": 7, "command": "copy"},
                {"name": "Broken", "commands": "nope"},
                {"command": "notAnAction", "keys": "ctrl+q"}
            ]),
        );
        assert_eq!(
            warnings,
            vec![
                SettingsLoadWarning::FailedToParseCommandJson,
                SettingsLoadWarning::FailedToParseSubCommands,
            ]
        );
        assert!(commands.is_empty());
    }
}
