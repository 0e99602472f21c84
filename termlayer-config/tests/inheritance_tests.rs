//! Inheritance, copying and default-profile resolution across layers.

use serde_json::json;
use termlayer_config::{
    ActionAndArgs, Color, ColorScheme, ConfigError, DefaultProfileState, GlobalAppSettings,
    ProfileManager, SettingsLayers, SettingsLoadWarning, ShortcutAction, parse_key_chord,
    resolve_default_profile,
};

fn parent_settings() -> GlobalAppSettings {
    let mut settings = GlobalAppSettings::from_json(&json!({
        "defaultProfile": "Shell",
        "initialRows": 40,
        "actions": [
            {"command": "copy", "keys": "ctrl+c"},
            {"name": "Tabs", "commands": [{"command": "nextTab"}]},
            {"command": "bogus", "keys": "ctrl+b"}
        ]
    }))
    .unwrap();
    settings.add_color_scheme(ColorScheme::new("Campbell"));
    settings.add_color_scheme(ColorScheme::new("One Half Dark"));
    settings
}

// ---------------------------------------------------------------------------
// copy
// ---------------------------------------------------------------------------

#[test]
fn test_copy_scalars_are_independent() {
    let source = parent_settings();
    let mut copy = source.copy();
    assert_eq!(copy.initial_rows(), 40);

    copy.scalars_mut().initial_rows = Some(5);
    assert_eq!(copy.initial_rows(), 5);
    assert_eq!(source.initial_rows(), 40);
}

#[test]
fn test_copy_entries_are_independent_but_keymap_is_shared() {
    let source = parent_settings();
    let mut copy = source.copy();

    assert!(copy.shares_keymap_with(&source));
    assert_eq!(copy.keybindings_warnings(), source.keybindings_warnings());
    assert_eq!(copy.unparsed_default_profile(), Some("Shell"));

    copy.color_scheme_mut("Campbell").unwrap().background = Color::new(1, 2, 3);
    copy.command_mut("Tabs").unwrap().set_name("Renamed");
    assert_eq!(source.color_scheme("Campbell").unwrap().background, ColorScheme::new("x").background);
    assert_eq!(source.command("Tabs").unwrap().name(), "Tabs");
}

#[test]
fn test_copy_keeps_default_profile_state() {
    let mut source = parent_settings();
    let id = termlayer_config::ProfileId::from_u128(42);
    source.set_default_profile(id);

    let copy = source.copy();
    assert_eq!(copy.default_profile_state(), DefaultProfileState::Resolved(id));
    assert_eq!(copy.default_profile().unwrap(), id);
}

// ---------------------------------------------------------------------------
// finalize_inheritance
// ---------------------------------------------------------------------------

#[test]
fn test_finalize_copies_entries_by_value() {
    let parent = parent_settings();
    let mut child = GlobalAppSettings::new();
    child.finalize_inheritance(&parent);

    let mut parent_schemes: Vec<_> = parent.color_schemes().keys().collect();
    let mut child_schemes: Vec<_> = child.color_schemes().keys().collect();
    parent_schemes.sort();
    child_schemes.sort();
    assert_eq!(parent_schemes, child_schemes);

    for (name, scheme) in parent.color_schemes() {
        let inherited = child.color_scheme(name).unwrap();
        assert_eq!(inherited, scheme);
        assert!(!std::ptr::eq(inherited, scheme));
    }
    for (name, command) in parent.commands() {
        let inherited = child.command(name).unwrap();
        assert_eq!(inherited, command);
        assert!(!std::ptr::eq(inherited, command));
    }

    assert!(child.shares_keymap_with(&parent));
    assert_eq!(child.keybindings_warnings(), &[SettingsLoadWarning::UnknownAction]);
}

#[test]
fn test_child_bindings_are_seen_by_parent() {
    let parent = parent_settings();
    let mut child = GlobalAppSettings::new();
    child.finalize_inheritance(&parent);
    child
        .layer_json(&json!({"actions": [{"command": "paste", "keys": "ctrl+v"}]}))
        .unwrap();

    // One map behind both nodes
    assert_eq!(parent.keymap().len(), 2);
    assert_eq!(child.keymap().len(), 2);
    assert!(parent.keymap().action_for(&parse_key_chord("ctrl+v").unwrap()).is_some());

    // Commands are copied by value and stay apart
    assert!(parent.command("Paste").is_none());
    assert!(child.command("Paste").is_some());
}

#[test]
fn test_copy_bindings_are_seen_by_source() {
    let source = parent_settings();
    let mut copy = source.copy();
    let chord = parse_key_chord("ctrl+v").unwrap();
    copy.keymap_mut()
        .set_binding(chord, ActionAndArgs::new(ShortcutAction::Paste));
    assert!(copy.shares_keymap_with(&source));

    assert_eq!(
        source.keymap().action_for(&chord).map(ActionAndArgs::action),
        Some(ShortcutAction::Paste)
    );
}

#[test]
fn test_child_warnings_follow_parent_warnings() {
    let parent = parent_settings();
    let mut child = GlobalAppSettings::new();
    child.finalize_inheritance(&parent);
    child
        .layer_json(&json!({"actions": [{"command": "copy", "keys": "nope+nope"}]}))
        .unwrap();

    assert_eq!(
        child.keybindings_warnings(),
        &[
            SettingsLoadWarning::UnknownAction,
            SettingsLoadWarning::InvalidKeyChord,
        ]
    );
    assert_eq!(parent.keybindings_warnings().len(), 1);
}

// ---------------------------------------------------------------------------
// default profile across layers
// ---------------------------------------------------------------------------

#[test]
fn test_unparsed_default_profile_falls_back_to_parent() {
    let mut layers = SettingsLayers::new();
    let root = layers.push_root(parent_settings());
    let child = layers.create_child(root).unwrap();

    assert_eq!(layers.get(child).unwrap().unparsed_default_profile(), None);
    assert_eq!(layers.unparsed_default_profile(child), Some("Shell"));
    assert_eq!(layers.view(child).unwrap().unparsed_default_profile(), Some("Shell"));

    layers
        .get_mut(child)
        .unwrap()
        .set_unparsed_default_profile("Other");
    assert_eq!(layers.unparsed_default_profile(child), Some("Other"));
    assert_eq!(layers.unparsed_default_profile(root), Some("Shell"));

    layers.get_mut(child).unwrap().clear_unparsed_default_profile();
    assert_eq!(layers.unparsed_default_profile(child), Some("Shell"));
}

#[test]
fn test_resolve_by_name_then_relayer() {
    let mut profiles = ProfileManager::new();
    profiles
        .layer_json(&json!([{"name": "Other"}, {"name": "Shell"}]))
        .unwrap();

    let mut layers = SettingsLayers::new();
    let root = layers.push_root(parent_settings());
    let child = layers.create_child(root).unwrap();

    let warnings = resolve_default_profile(&mut layers, child, &profiles).unwrap();
    assert!(warnings.is_empty());
    let shell = profiles.find_by_name("Shell").unwrap().guid;
    assert_eq!(layers.get(child).unwrap().default_profile().unwrap(), shell);

    // A new identifier discards the resolved handle
    layers
        .get_mut(child)
        .unwrap()
        .layer_json(&json!({"defaultProfile": "Other"}))
        .unwrap();
    assert!(matches!(
        layers.get(child).unwrap().default_profile(),
        Err(ConfigError::UnresolvedDefaultProfile)
    ));
}

#[test]
fn test_resolve_by_guid() {
    let mut profiles = ProfileManager::new();
    profiles
        .layer_json(&json!([
            {"name": "A"},
            {"guid": "{0caa0dad-35be-5f56-a8ff-afceeeaa6101}", "name": "B"}
        ]))
        .unwrap();

    let mut layers = SettingsLayers::new();
    let root = layers.push_root(
        GlobalAppSettings::from_json(&json!({
            "defaultProfile": "0caa0dad-35be-5f56-a8ff-afceeeaa6101"
        }))
        .unwrap(),
    );
    let warnings = resolve_default_profile(&mut layers, root, &profiles).unwrap();
    assert!(warnings.is_empty());
    assert_eq!(
        layers.get(root).unwrap().default_profile().unwrap(),
        profiles.find_by_name("B").unwrap().guid
    );
}

#[test]
fn test_missing_default_profile_falls_back_to_first_visible() {
    let mut profiles = ProfileManager::new();
    profiles
        .layer_json(&json!([
            {"name": "Hidden", "hidden": true},
            {"name": "Visible"}
        ]))
        .unwrap();

    let mut layers = SettingsLayers::new();
    let root = layers.push_root(
        GlobalAppSettings::from_json(&json!({"defaultProfile": "Gone"})).unwrap(),
    );
    let warnings = resolve_default_profile(&mut layers, root, &profiles).unwrap();
    assert_eq!(warnings, vec![SettingsLoadWarning::MissingDefaultProfile]);
    assert_eq!(
        layers.get(root).unwrap().default_profile().unwrap(),
        profiles.find_by_name("Visible").unwrap().guid
    );

    // Nothing given: same fallback, no warning
    let other = layers.push_root(GlobalAppSettings::new());
    let warnings = resolve_default_profile(&mut layers, other, &profiles).unwrap();
    assert!(warnings.is_empty());
    assert!(layers.get(other).unwrap().default_profile().is_ok());
}

#[test]
fn test_scalars_inherit_through_view() {
    let mut layers = SettingsLayers::new();
    let root = layers.push_root(
        GlobalAppSettings::from_json(&json!({"alwaysShowTabs": true, "theme": "light"})).unwrap(),
    );
    let child = layers.create_child(root).unwrap();
    layers
        .get_mut(child)
        .unwrap()
        .layer_json(&json!({"alwaysShowTabs": false, "theme": "dark"}))
        .unwrap();
    let grandchild = layers.create_child(child).unwrap();

    let view = layers.view(grandchild).unwrap();
    assert!(!view.always_show_tabs());
    assert_eq!(view.theme(), termlayer_config::ElementTheme::Dark);
    assert_eq!(view.initial_rows(), 30);

    let root_view = layers.view(root).unwrap();
    assert!(root_view.always_show_tabs());
}
