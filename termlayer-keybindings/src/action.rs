//! Shortcut actions and their arguments.
//!
//! A binding's `command` member is either a bare action name
//! (`"copy"`) or an object with an `action` member plus arguments
//! (`{"action": "switchToTab", "index": 2}`). `null` and `"unbound"`
//! both mean "remove whatever is bound here".

use serde::Serialize;
use serde::ser::SerializeMap;
use serde_json::{Map, Value};

use crate::warnings::SettingsLoadWarning;

/// Name used to explicitly remove a binding.
pub const UNBOUND_ACTION: &str = "unbound";

/// Member of an action object that names the action.
pub const ACTION_KEY: &str = "action";

/// Declares every action once and generates the [`ShortcutAction`] enum, the
/// name lookup table and the per-action metadata.
macro_rules! shortcut_actions {
    ($(
        $variant:ident = $json:literal, $display:literal, [$($arg:literal),*];
    )*) => {
        /// Every action a binding or command can invoke.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum ShortcutAction {
            $($variant,)*
        }

        /// JSON name and action, in declaration order.
        const ACTIONS: &[(&str, ShortcutAction)] = &[
            $(($json, ShortcutAction::$variant),)*
        ];

        impl ShortcutAction {
            /// Name used in settings JSON.
            pub fn json_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $json,)*
                }
            }

            /// Human-readable name used when a command does not specify one.
            pub fn display_name(self) -> &'static str {
                match self {
                    $(Self::$variant => $display,)*
                }
            }

            /// Arguments that must be present for the action to be usable.
            pub fn required_args(self) -> &'static [&'static str] {
                match self {
                    $(Self::$variant => &[$($arg),*],)*
                }
            }
        }
    };
}

shortcut_actions! {
    Copy = "copy", "Copy text", [];
    Paste = "paste", "Paste", [];
    NewTab = "newTab", "New tab", [];
    DuplicateTab = "duplicateTab", "Duplicate tab", [];
    CloseWindow = "closeWindow", "Close window", [];
    CloseTab = "closeTab", "Close tab", [];
    ClosePane = "closePane", "Close pane", [];
    NextTab = "nextTab", "Next tab", [];
    PrevTab = "prevTab", "Previous tab", [];
    SwitchToTab = "switchToTab", "Switch to tab", ["index"];
    SplitPane = "splitPane", "Split pane", [];
    MoveFocus = "moveFocus", "Move focus", ["direction"];
    ResizePane = "resizePane", "Resize pane", ["direction"];
    TogglePaneZoom = "togglePaneZoom", "Toggle pane zoom", [];
    SendInput = "sendInput", "Send input", ["input"];
    SetColorScheme = "setColorScheme", "Set color scheme", ["colorScheme"];
    Find = "find", "Find", [];
    OpenSettings = "openSettings", "Open settings", [];
    ToggleFullscreen = "toggleFullscreen", "Toggle fullscreen", [];
    ToggleAlwaysOnTop = "toggleAlwaysOnTop", "Toggle always on top mode", [];
    ToggleCommandPalette = "commandPalette", "Toggle command palette", [];
    OpenNewTabDropdown = "openNewTabDropdown", "Open new tab dropdown", [];
    RenameTab = "renameTab", "Rename tab", [];
    OpenTabColorPicker = "openTabColorPicker", "Open tab color picker", [];
    ScrollUp = "scrollUp", "Scroll up", [];
    ScrollDown = "scrollDown", "Scroll down", [];
    ScrollUpPage = "scrollUpPage", "Scroll up one page", [];
    ScrollDownPage = "scrollDownPage", "Scroll down one page", [];
    ScrollToTop = "scrollToTop", "Scroll to the top of history", [];
    ScrollToBottom = "scrollToBottom", "Scroll to the bottom of history", [];
    AdjustFontSize = "adjustFontSize", "Adjust font size", ["delta"];
    ResetFontSize = "resetFontSize", "Reset font size", [];
    Quit = "quit", "Quit", [];
}

impl ShortcutAction {
    /// Look up an action by its JSON name. Names are case-sensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        ACTIONS
            .iter()
            .find(|(json_name, _)| *json_name == name)
            .map(|(_, action)| *action)
    }

    pub fn all() -> impl Iterator<Item = ShortcutAction> {
        ACTIONS.iter().map(|(_, action)| *action)
    }
}

/// An action together with the arguments it was configured with.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionAndArgs {
    action: ShortcutAction,
    args: Map<String, Value>,
}

impl ActionAndArgs {
    pub fn new(action: ShortcutAction) -> Self {
        Self {
            action,
            args: Map::new(),
        }
    }

    pub fn with_arg(mut self, name: impl Into<String>, value: Value) -> Self {
        self.args.insert(name.into(), value);
        self
    }

    pub fn action(&self) -> ShortcutAction {
        self.action
    }

    pub fn args(&self) -> &Map<String, Value> {
        &self.args
    }

    pub fn arg(&self, name: &str) -> Option<&Value> {
        self.args.get(name)
    }

    /// Name shown in the command palette for commands without an explicit name.
    ///
    /// Actions without arguments use their display name. Arguments are appended
    /// as `name:value` pairs in key order, e.g. "Switch to tab, index:2".
    pub fn generate_name(&self) -> String {
        let mut name = self.action.display_name().to_string();
        for (key, value) in &self.args {
            let rendered = match value {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            name.push_str(&format!(", {key}:{rendered}"));
        }
        name
    }
}

impl Serialize for ActionAndArgs {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.args.is_empty() {
            return serializer.serialize_str(self.action.json_name());
        }
        let mut map = serializer.serialize_map(Some(self.args.len() + 1))?;
        map.serialize_entry(ACTION_KEY, self.action.json_name())?;
        for (key, value) in &self.args {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Outcome of parsing a `command` member.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedAction {
    /// A usable action.
    Bound(ActionAndArgs),
    /// `null` or `"unbound"`: remove the existing binding.
    Unbound,
}

/// Why a `command` member could not be turned into an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionParseError {
    /// The value was neither a string, an object, nor null.
    InvalidShape,
    /// An action object had no string `action` member.
    MissingAction,
    /// The action name is not known.
    UnknownAction(String),
    /// A required argument was absent.
    MissingRequiredParameter {
        action: ShortcutAction,
        parameter: &'static str,
    },
}

impl ActionParseError {
    /// The load warning reported for this failure.
    pub fn warning(&self) -> SettingsLoadWarning {
        match self {
            ActionParseError::InvalidShape | ActionParseError::MissingAction => {
                SettingsLoadWarning::FailedToParseCommandJson
            }
            ActionParseError::UnknownAction(_) => SettingsLoadWarning::UnknownAction,
            ActionParseError::MissingRequiredParameter { .. } => {
                SettingsLoadWarning::MissingRequiredParameter
            }
        }
    }
}

impl std::fmt::Display for ActionParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionParseError::InvalidShape => write!(f, "command must be a string or an object"),
            ActionParseError::MissingAction => write!(f, "command object has no \"action\""),
            ActionParseError::UnknownAction(name) => write!(f, "unknown action '{name}'"),
            ActionParseError::MissingRequiredParameter { action, parameter } => write!(
                f,
                "action '{}' requires the \"{}\" argument",
                action.json_name(),
                parameter
            ),
        }
    }
}

impl std::error::Error for ActionParseError {}

/// Parse a binding's `command` member.
pub fn parse_action(value: &Value) -> Result<ParsedAction, ActionParseError> {
    match value {
        Value::Null => Ok(ParsedAction::Unbound),
        Value::String(name) => bind(name, Map::new()),
        Value::Object(object) => {
            let name = match object.get(ACTION_KEY) {
                Some(Value::String(name)) => name,
                Some(Value::Null) => return Ok(ParsedAction::Unbound),
                _ => return Err(ActionParseError::MissingAction),
            };
            let args = object
                .iter()
                .filter(|(key, _)| key.as_str() != ACTION_KEY)
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            bind(name, args)
        }
        _ => Err(ActionParseError::InvalidShape),
    }
}

fn bind(name: &str, args: Map<String, Value>) -> Result<ParsedAction, ActionParseError> {
    if name == UNBOUND_ACTION {
        return Ok(ParsedAction::Unbound);
    }
    let action = ShortcutAction::from_name(name)
        .ok_or_else(|| ActionParseError::UnknownAction(name.to_string()))?;

    if let Some(parameter) = action
        .required_args()
        .iter()
        .copied()
        .find(|param| args.get(*param).is_none_or(Value::is_null))
    {
        return Err(ActionParseError::MissingRequiredParameter {
            action,
            parameter,
        });
    }

    Ok(ParsedAction::Bound(ActionAndArgs { action, args }))
}
