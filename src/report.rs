//! Text rendering for the CLI subcommands.
//!
//! Each function returns the full output of one subcommand so the binary
//! only has to print it.

use serde_json::Value;
use std::collections::HashMap;
use termlayer_config::{Command, Result};

use crate::loader::LoadedSettings;

/// Effective global settings as pretty JSON, plus the resolved default profile.
pub fn show(loaded: &LoadedSettings) -> anyhow::Result<String> {
    let view = loaded.view()?;
    let mut json = serde_json::to_value(view.effective())?;
    if let (Value::Object(object), Some(profile)) = (&mut json, loaded.default_profile()) {
        object.insert(
            termlayer_config::DEFAULT_PROFILE_KEY.to_string(),
            Value::String(format!("{{{}}}", profile.guid)),
        );
    }
    Ok(serde_json::to_string_pretty(&json)?)
}

/// One `chord<TAB>action` line per binding, sorted by chord.
pub fn keys(loaded: &LoadedSettings) -> Result<String> {
    let global = loaded.global()?;
    let mut out = String::new();
    for (chord, action) in global.keymap().sorted() {
        out.push_str(&format!("{chord}\t{}\n", action.generate_name()));
    }
    Ok(out)
}

/// Command names sorted alphabetically, nested commands indented.
pub fn commands(loaded: &LoadedSettings) -> Result<String> {
    let mut out = String::new();
    write_commands(&mut out, loaded.global()?.commands(), 0);
    Ok(out)
}

fn write_commands(out: &mut String, commands: &HashMap<String, Command>, depth: usize) {
    let mut sorted: Vec<&Command> = commands.values().collect();
    sorted.sort_by(|a, b| a.name().cmp(b.name()));
    for command in sorted {
        let indent = "  ".repeat(depth);
        match command.keys() {
            Some(chord) => out.push_str(&format!("{indent}{}\t{chord}\n", command.name())),
            None => out.push_str(&format!("{indent}{}\n", command.name())),
        }
        write_commands(out, command.subcommands(), depth + 1);
    }
}

/// Color scheme names, sorted.
pub fn schemes(loaded: &LoadedSettings) -> Result<String> {
    let mut names: Vec<&String> = loaded.global()?.color_schemes().keys().collect();
    names.sort();
    Ok(names.iter().map(|name| format!("{name}\n")).collect())
}

/// Load warnings with their user-facing messages, in the order found.
pub fn warnings(loaded: &LoadedSettings) -> String {
    if loaded.warnings().is_empty() {
        return "No warnings\n".to_string();
    }
    loaded
        .warnings()
        .iter()
        .map(|warning| format!("{warning:?}: {warning}\n"))
        .collect()
}
