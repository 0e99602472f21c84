//! Profile types and manager.
//!
//! Profiles are only modelled as far as global settings need them: the
//! default-profile identifier is resolved against them, and color-scheme
//! references are validated.
//!
//! ## Sub-modules
//!
//! - [`profile`]: Core `Profile` struct, its JSON layering and id derivation
//! - [`manager`]: `ProfileManager`, ordered collection, `profiles` section layering

pub mod manager;
pub mod profile;

pub use manager::ProfileManager;
pub use profile::{PROFILE_NAMESPACE, Profile, ProfileDefaults, ProfileId, parse_profile_id};
