//! Default values that do not belong to a single focused subsystem.

/// Debug features are on by default in debug builds only.
pub fn debug_features_enabled() -> bool {
    cfg!(debug_assertions)
}

pub fn force_full_repaint_rendering() -> bool {
    false
}

pub fn software_rendering() -> bool {
    false
}

pub fn force_vt_input() -> bool {
    false
}

pub fn start_on_user_login() -> bool {
    false
}
