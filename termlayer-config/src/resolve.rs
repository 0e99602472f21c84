//! Post-load resolution and validation.
//!
//! Runs once every document has been layered: matches the `defaultProfile`
//! identifier against the loaded profiles and checks that color-scheme
//! references point at schemes that exist.

use std::collections::HashMap;
use termlayer_keybindings::{Command, SettingsLoadWarning, ShortcutAction};

use crate::error::Result;
use crate::global_settings::GlobalAppSettings;
use crate::layers::{LayerId, SettingsLayers};
use crate::profile_types::{Profile, ProfileManager, parse_profile_id};

const COLOR_SCHEME_ARG: &str = "colorScheme";

/// Find the profile an identifier refers to.
///
/// An identifier that parses as a GUID (braces optional) only matches by
/// GUID. Anything else is matched against profile names.
pub fn find_profile<'a>(profiles: &'a ProfileManager, identifier: &str) -> Option<&'a Profile> {
    match parse_profile_id(identifier) {
        Some(guid) => profiles.get(&guid),
        None => profiles.find_by_name(identifier),
    }
}

/// Resolve the default profile of layer `id`.
///
/// The nearest `defaultProfile` identifier in the chain is matched with
/// [`find_profile`]. When it matches nothing, or no identifier was given, the
/// first profile that is not hidden is used instead; a given identifier that
/// matched nothing is reported as
/// [`SettingsLoadWarning::MissingDefaultProfile`].
pub fn resolve_default_profile(
    layers: &mut SettingsLayers,
    id: LayerId,
    profiles: &ProfileManager,
) -> Result<Vec<SettingsLoadWarning>> {
    let mut warnings = Vec::new();
    let identifier = layers.unparsed_default_profile(id).map(str::to_owned);

    let matched = identifier
        .as_deref()
        .and_then(|identifier| find_profile(profiles, identifier));

    let chosen = match (matched, identifier.as_deref()) {
        (Some(profile), _) => Some(profile),
        (None, Some(identifier)) => {
            log::warn!("Default profile \"{identifier}\" does not match any profile");
            warnings.push(SettingsLoadWarning::MissingDefaultProfile);
            profiles.first_visible()
        }
        (None, None) => profiles.first_visible(),
    };

    let settings = layers.get_mut(id)?;
    match chosen {
        Some(profile) => {
            log::info!("Default profile is '{}' ({})", profile.name, profile.guid);
            settings.set_default_profile(profile.guid);
        }
        None => log::warn!("No visible profile to use as the default profile"),
    }

    Ok(warnings)
}

/// Check that every color-scheme reference names a known scheme.
///
/// Looks at `setColorScheme` commands (nested ones included) and at each
/// profile's scheme. Reports [`SettingsLoadWarning::UnknownColorScheme`] once
/// no matter how many references are broken.
pub fn validate_color_schemes(
    settings: &GlobalAppSettings,
    profiles: &ProfileManager,
) -> Vec<SettingsLoadWarning> {
    let mut missing: Vec<String> = Vec::new();
    collect_command_schemes(settings.commands(), &mut |scheme: &str| {
        if settings.color_scheme(scheme).is_none() {
            missing.push(scheme.to_string());
        }
    });

    for profile in profiles.profiles_ordered() {
        if let Some(scheme) = profiles.color_scheme_for(profile)
            && settings.color_scheme(scheme).is_none()
        {
            missing.push(scheme.to_string());
        }
    }

    if missing.is_empty() {
        return Vec::new();
    }

    missing.sort();
    missing.dedup();
    log::warn!("Unknown color scheme(s): {}", missing.join(", "));
    vec![SettingsLoadWarning::UnknownColorScheme]
}

fn collect_command_schemes(commands: &HashMap<String, Command>, visit: &mut impl FnMut(&str)) {
    for command in commands.values() {
        if let Some(action) = command.action()
            && action.action() == ShortcutAction::SetColorScheme
            && let Some(scheme) = action.arg(COLOR_SCHEME_ARG).and_then(|v| v.as_str())
        {
            visit(scheme);
        }
        collect_command_schemes(command.subcommands(), visit);
    }
}
