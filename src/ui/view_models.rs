//! View models for rendering the board and the notation panel.
//!
//! Plain data prepared from a [`BoardFrame`](crate::models::BoardFrame);
//! they live in the UI layer, not the domain layer.

use shakmaty::Square;

use crate::domain::Piece;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SquareHighlight {
    None,
    LastMove,
    Selected,
}

/// One board cell in display order
#[derive(Clone, Copy, Debug)]
pub struct SquareView {
    pub square: Square,
    pub row: usize,
    pub col: usize,
    pub piece: Option<Piece>,
    pub highlight: SquareHighlight,
}

/// One line of the notation panel: `12. Nf3 Nc6` or `12... Nc6`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NotationRow {
    pub move_num: u32,
    pub white: Option<String>,
    pub black: Option<String>,
}

/// Header information about the puzzle being replayed
#[derive(Clone, Debug)]
pub struct PuzzleSummary {
    pub id: String,
    pub rating: u32,
    pub url: String,
    pub themes: String,
    /// 1-based position in the file
    pub index: usize,
    pub total: usize,
}
