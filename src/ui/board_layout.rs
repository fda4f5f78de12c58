//! Board layout calculations - sizes the board to the measured panel and
//! hands the coordinate math to [`BoardGeometry`].

use crate::domain::BoardGeometry;
use crate::ui::theme::{
    BOARD_PADDING, INITIAL_HEIGHT, INITIAL_LEFT_PANEL, MIN_SQUARE_SIZE, PIECE_SCALE,
};
use gpui::{Pixels, Size, px};

/// Handles all layout calculations for the chess board
#[derive(Clone, Copy, Debug)]
pub struct BoardLayout {
    pub panel_size: Size<Pixels>,
}

impl BoardLayout {
    pub fn new(panel_size: Size<Pixels>) -> Self {
        Self { panel_size }
    }

    /// Calculate square size from measured panel dimensions
    pub fn square_size(&self) -> f32 {
        let panel_width: f32 = self.panel_size.width.into();
        let panel_height: f32 = self.panel_size.height.into();
        let available_width = panel_width - BOARD_PADDING * 2.0;
        let available_height = panel_height - BOARD_PADDING * 2.0;
        (available_width.min(available_height) / 8.0).max(MIN_SQUARE_SIZE)
    }

    /// Calculate piece size based on square size
    pub fn piece_size(&self) -> f32 {
        self.square_size() * PIECE_SCALE
    }

    /// Get the total size of the board (8 squares)
    pub fn board_total_size(&self) -> f32 {
        self.square_size() * 8.0
    }

    /// Board geometry in panel coordinates (the board starts after the padding)
    pub fn geometry(&self) -> BoardGeometry {
        BoardGeometry::new(BOARD_PADDING, BOARD_PADDING, self.square_size())
    }

    /// Same squares relative to the board's own top-left corner, for overlays
    pub fn local_geometry(&self) -> BoardGeometry {
        BoardGeometry::new(0.0, 0.0, self.square_size())
    }
}

impl Default for BoardLayout {
    fn default() -> Self {
        Self::new(Size {
            width: px(INITIAL_LEFT_PANEL),
            height: px(INITIAL_HEIGHT),
        })
    }
}
