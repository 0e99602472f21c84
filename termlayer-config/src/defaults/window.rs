//! Default values for window and visual-appearance settings.

use crate::types::{ElementTheme, LaunchMode, LaunchPosition, TabWidthMode};

pub fn initial_rows() -> i32 {
    30
}

pub fn initial_cols() -> i32 {
    120
}

pub fn initial_position() -> LaunchPosition {
    LaunchPosition::default() // Let the window system place the window
}

pub fn launch_mode() -> LaunchMode {
    LaunchMode::Default
}

pub fn theme() -> ElementTheme {
    ElementTheme::System
}

pub fn tab_width_mode() -> TabWidthMode {
    TabWidthMode::Equal
}

pub fn always_show_tabs() -> bool {
    true
}

pub fn show_title_in_titlebar() -> bool {
    true
}

pub fn show_tabs_in_titlebar() -> bool {
    true
}

pub fn snap_to_grid_on_resize() -> bool {
    true
}

pub fn always_on_top() -> bool {
    false
}

pub fn use_tab_switcher() -> bool {
    true
}

pub fn disable_animations() -> bool {
    false
}
