//! What a renderer needs to draw one frame of the board.

use shakmaty::Square;

use crate::domain::{BoardMove, BoardState, Orientation, PlayedMove};

#[derive(Clone, Copy, Debug)]
pub struct BoardFrame<'a> {
    pub board: &'a BoardState,
    pub orientation: Orientation,
    /// Arrow overlay for annotated playback
    pub arrow: Option<BoardMove>,
    /// Origin square picked during manual play
    pub selected: Option<Square>,
}

impl<'a> BoardFrame<'a> {
    pub fn new(board: &'a BoardState, orientation: Orientation) -> Self {
        Self {
            board,
            orientation,
            arrow: None,
            selected: None,
        }
    }

    pub fn last_move(&self) -> Option<BoardMove> {
        self.board.last_move()
    }

    pub fn notation(&self) -> &'a [PlayedMove] {
        self.board.played()
    }
}

/// Anything that can show a frame. Called after every applied move.
pub trait FrameSink {
    fn draw(&mut self, frame: &BoardFrame<'_>);
}
