//! Default values for terminal behaviour settings.

use crate::types::CopyFormat;

pub fn word_delimiters() -> String {
    // Space, box-drawing vertical bar and common punctuation
    " /\\()\"'-.,:;<>~!@#$%^&*|+=[]{}~?\u{2502}".to_string()
}

pub fn copy_on_select() -> bool {
    false
}

pub fn copy_formatting() -> CopyFormat {
    CopyFormat::NONE
}

pub fn warn_about_large_paste() -> bool {
    true
}

pub fn warn_about_multi_line_paste() -> bool {
    true
}

pub fn confirm_close_all_tabs() -> bool {
    true
}
