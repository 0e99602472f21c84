//! Default value functions for settings.
//!
//! A setting that no layer in the inheritance chain sets takes the value of
//! the matching function here. Each sub-module groups related `default_*`
//! style free functions; everything is re-exported from this module.

mod colors;
mod misc;
mod terminal;
mod window;

// ── Window & visual appearance ─────────────────────────────────────────────
pub use window::{
    always_on_top, always_show_tabs, disable_animations, initial_cols, initial_position,
    initial_rows, launch_mode, show_tabs_in_titlebar, show_title_in_titlebar,
    snap_to_grid_on_resize, tab_width_mode, theme, use_tab_switcher,
};

// ── Terminal behaviour ─────────────────────────────────────────────────────
pub use terminal::{
    confirm_close_all_tabs, copy_formatting, copy_on_select, warn_about_large_paste,
    warn_about_multi_line_paste, word_delimiters,
};

// ── Colors ─────────────────────────────────────────────────────────────────
pub use colors::{
    COLOR_TABLE_SIZE, background, color_table, cursor_color, foreground, selection_background,
};

// ── Miscellaneous ──────────────────────────────────────────────────────────
pub use misc::{
    debug_features_enabled, force_full_repaint_rendering, force_vt_input, software_rendering,
    start_on_user_login,
};
