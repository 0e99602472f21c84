//! Loading settings files from disk.

use std::fs;
use tempfile::TempDir;
use termlayer::{LoadedSettings, SettingsPaths};
use termlayer_config::{ConfigError, ElementTheme, SettingsLoadWarning, parse_key_chord};

fn write_settings(dir: &TempDir, contents: &str) -> SettingsPaths {
    let path = dir.path().join("settings.json");
    fs::write(&path, contents).expect("write settings");
    SettingsPaths {
        settings: Some(path),
        defaults: None,
    }
}

#[test]
fn test_missing_user_file_uses_defaults() {
    let dir = TempDir::new().unwrap();
    let paths = SettingsPaths {
        settings: Some(dir.path().join("does-not-exist.json")),
        defaults: None,
    };
    let loaded = LoadedSettings::load(&paths).unwrap();
    assert!(loaded.warnings().is_empty());
    assert_eq!(loaded.default_profile().map(|p| p.name.as_str()), Some("Shell"));
    assert!(!loaded.global().unwrap().keymap().is_empty());
}

#[test]
fn test_user_file_overrides_defaults() {
    let dir = TempDir::new().unwrap();
    let paths = write_settings(
        &dir,
        r#"{
            "theme": "dark",
            "initialCols": 80,
            "actions": [
                {"command": "quit", "keys": "ctrl+shift+q"},
                {"command": null, "keys": "ctrl+shift+c"}
            ]
        }"#,
    );
    let loaded = LoadedSettings::load(&paths).unwrap();
    let view = loaded.view().unwrap();
    assert_eq!(view.theme(), ElementTheme::Dark);
    assert_eq!(view.initial_cols(), 80);
    assert_eq!(view.initial_rows(), 30);

    let user = loaded.global().unwrap();
    let defaults = loaded.layers().get(loaded.defaults_layer()).unwrap();
    let quit = parse_key_chord("ctrl+shift+q").unwrap();
    let copy = parse_key_chord("ctrl+shift+c").unwrap();
    assert!(user.keymap().action_for(&quit).is_some());
    assert!(user.keymap().action_for(&copy).is_none());

    // The user layer binds into the map it shares with the defaults
    assert!(user.shares_keymap_with(defaults));
    assert!(defaults.keymap().action_for(&quit).is_some());
    assert!(defaults.keymap().action_for(&copy).is_none());
}

#[test]
fn test_user_without_bindings_shares_default_keymap() {
    let dir = TempDir::new().unwrap();
    let paths = write_settings(&dir, r#"{"alwaysOnTop": true}"#);
    let loaded = LoadedSettings::load(&paths).unwrap();
    let user = loaded.global().unwrap();
    let defaults = loaded.layers().get(loaded.defaults_layer()).unwrap();
    assert!(user.shares_keymap_with(defaults));
}

#[test]
fn test_user_schemes_and_profiles() {
    let dir = TempDir::new().unwrap();
    let paths = write_settings(
        &dir,
        r##"{
            "defaultProfile": "Work",
            "schemes": [
                {"name": "Campbell", "background": "#000000"},
                {"name": "Mine", "foreground": "#123456"}
            ],
            "profiles": {
                "list": [
                    {"name": "Work", "colorScheme": "Mine"},
                    {"name": "Shell", "commandline": "bash"}
                ]
            }
        }"##,
    );
    let loaded = LoadedSettings::load(&paths).unwrap();
    assert!(loaded.warnings().is_empty(), "{:?}", loaded.warnings());
    assert_eq!(loaded.default_profile().map(|p| p.name.as_str()), Some("Work"));

    let user = loaded.global().unwrap();
    assert_eq!(user.color_schemes().len(), 4);
    assert_eq!(user.color_scheme("Campbell").unwrap().background.to_string(), "#000000");
    // The user's scheme edits stay in the user layer
    let defaults = loaded.layers().get(loaded.defaults_layer()).unwrap();
    assert_eq!(defaults.color_scheme("Campbell").unwrap().background.to_string(), "#0C0C0C");

    // "Shell" from the user file layered onto the built-in profile
    let shell = loaded.profiles().find_by_name("Shell").unwrap();
    assert_eq!(shell.settings.commandline.as_deref(), Some("bash"));
    assert_eq!(loaded.profiles().len(), 3);
}

#[test]
fn test_warnings_are_collected() {
    let dir = TempDir::new().unwrap();
    let paths = write_settings(
        &dir,
        r##"{
            "defaultProfile": "Nobody",
            "schemes": [{"background": "#000000"}],
            "actions": [
                {"command": {"action": "setColorScheme", "colorScheme": "Nope"}, "keys": "ctrl+k"},
                {"command": "sendInput", "keys": "ctrl+i"}
            ]
        }"##,
    );
    let loaded = LoadedSettings::load(&paths).unwrap();
    assert_eq!(
        loaded.warnings(),
        &[
            SettingsLoadWarning::MissingRequiredParameter,
            SettingsLoadWarning::InvalidColorScheme,
            SettingsLoadWarning::MissingDefaultProfile,
            SettingsLoadWarning::UnknownColorScheme,
        ]
    );
    // Fell back to the first visible profile
    assert_eq!(loaded.default_profile().map(|p| p.name.as_str()), Some("Shell"));
}

#[test]
fn test_invalid_json_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let paths = write_settings(&dir, "{ not json");
    assert!(matches!(LoadedSettings::load(&paths), Err(ConfigError::Parse(_))));
}

#[test]
fn test_bad_value_is_reported_with_its_key() {
    let dir = TempDir::new().unwrap();
    let paths = write_settings(&dir, r#"{"copyOnSelect": "sometimes"}"#);
    match LoadedSettings::load(&paths) {
        Err(ConfigError::InvalidValue { key, .. }) => assert_eq!(key, "copyOnSelect"),
        other => panic!("unexpected result: {other:?}"),
    }
}

#[test]
fn test_custom_defaults_file() {
    let dir = TempDir::new().unwrap();
    let defaults_path = dir.path().join("defaults.json");
    fs::write(
        &defaults_path,
        r#"{"initialRows": 12, "profiles": [{"name": "Only"}]}"#,
    )
    .unwrap();
    let paths = SettingsPaths {
        settings: Some(dir.path().join("missing.json")),
        defaults: Some(defaults_path),
    };
    let loaded = LoadedSettings::load(&paths).unwrap();
    assert_eq!(loaded.view().unwrap().initial_rows(), 12);
    assert_eq!(loaded.default_profile().map(|p| p.name.as_str()), Some("Only"));
    assert!(loaded.global().unwrap().keymap().is_empty());
}

#[test]
fn test_unreadable_defaults_is_io_error() {
    let dir = TempDir::new().unwrap();
    let paths = SettingsPaths {
        settings: None,
        defaults: Some(dir.path().join("nope.json")),
    };
    assert!(matches!(LoadedSettings::load(&paths), Err(ConfigError::Io(_))));
}
