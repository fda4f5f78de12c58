//! Theme constants and colors for the board UI.

use gpui::{Rgba, rgb};

// Layout constants
pub const BOARD_PADDING: f32 = 20.0;
pub const PIECE_SCALE: f32 = 0.98; // piece size relative to square
pub const MIN_SQUARE_SIZE: f32 = 30.0;

// Initial panel sizes
pub const INITIAL_LEFT_PANEL: f32 = 680.0;
pub const INITIAL_RIGHT_PANEL: f32 = 260.0;
pub const INITIAL_HEIGHT: f32 = 680.0;

// Board colors
pub const LIGHT_SQUARE: u32 = 0xEBEBD0;
pub const DARK_SQUARE: u32 = 0x779455;
pub const LAST_MOVE_SQUARE: u32 = 0xBACA44;
pub const SELECTED_SQUARE: u32 = 0xF6F669;
pub const ARROW_COLOR: u32 = 0x15A030CC;

// Panel colors
pub const PANEL_BG: u32 = 0x2a2a2a;
pub const MOVE_LIST_BG: u32 = 0x1e1e1e;
pub const BORDER_COLOR: u32 = 0x4a4a4a;
pub const TEXT_PRIMARY: u32 = 0xffffff;
pub const TEXT_SECONDARY: u32 = 0x888888;
pub const TEXT_ACCENT: u32 = 0xfbbf24;

/// Get the color for a board square from its display row/column
pub fn square_color(row: usize, col: usize) -> Rgba {
    if (row + col) % 2 == 0 {
        rgb(LIGHT_SQUARE)
    } else {
        rgb(DARK_SQUARE)
    }
}
