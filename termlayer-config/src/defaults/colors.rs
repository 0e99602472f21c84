//! Default colors for color schemes (the Campbell palette).

use crate::color_scheme::Color;

/// Number of entries in a scheme's ANSI color table.
pub const COLOR_TABLE_SIZE: usize = 16;

pub fn foreground() -> Color {
    Color::new(0xCC, 0xCC, 0xCC)
}

pub fn background() -> Color {
    Color::new(0x0C, 0x0C, 0x0C)
}

pub fn selection_background() -> Color {
    Color::new(0xFF, 0xFF, 0xFF)
}

pub fn cursor_color() -> Color {
    Color::new(0xFF, 0xFF, 0xFF)
}

pub fn color_table() -> [Color; COLOR_TABLE_SIZE] {
    [
        Color::new(0x0C, 0x0C, 0x0C), // black
        Color::new(0xC5, 0x0F, 0x1F), // red
        Color::new(0x13, 0xA1, 0x0E), // green
        Color::new(0xC1, 0x9C, 0x00), // yellow
        Color::new(0x00, 0x37, 0xDA), // blue
        Color::new(0x88, 0x17, 0x98), // purple
        Color::new(0x3A, 0x96, 0xDD), // cyan
        Color::new(0xCC, 0xCC, 0xCC), // white
        Color::new(0x76, 0x76, 0x76), // bright black
        Color::new(0xE7, 0x48, 0x56), // bright red
        Color::new(0x16, 0xC6, 0x0C), // bright green
        Color::new(0xF9, 0xF1, 0xA5), // bright yellow
        Color::new(0x3B, 0x78, 0xFF), // bright blue
        Color::new(0xB4, 0x00, 0x9E), // bright purple
        Color::new(0x61, 0xD6, 0xD6), // bright cyan
        Color::new(0xF2, 0xF2, 0xF2), // bright white
    ]
}
