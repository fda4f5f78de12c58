//! Click-to-move state machine for manual play.
//!
//! Idle until a square holding a piece of the side to move is activated,
//! then the next activation is submitted as a move. Either way the selection
//! is cleared afterwards; illegal moves are rejected silently.

use shakmaty::Square;

use crate::domain::{BoardMove, BoardState};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InteractionOutcome {
    /// Nothing selectable on the activated square
    Ignored,
    /// The square became the move origin
    Selected(Square),
    /// The move was applied; redraw and update notation
    Moved(BoardMove),
    /// The rules engine refused the move; selection dropped
    Rejected(BoardMove),
}

#[derive(Clone, Debug, Default)]
pub struct InteractionController {
    selection: Option<Square>,
}

impl InteractionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<Square> {
        self.selection
    }

    #[allow(dead_code)]
    pub fn is_idle(&self) -> bool {
        self.selection.is_none()
    }

    /// Handle a click (or any other activation) on `square`
    pub fn activate(&mut self, board: &mut BoardState, square: Square) -> InteractionOutcome {
        match self.selection.take() {
            None => {
                let own_piece = board
                    .piece_at(square)
                    .is_some_and(|piece| piece.color == board.turn());
                if own_piece {
                    tracing::debug!(%square, "square selected");
                    self.selection = Some(square);
                    InteractionOutcome::Selected(square)
                } else {
                    InteractionOutcome::Ignored
                }
            }
            Some(origin) => {
                let candidate = BoardMove::new(origin, square);
                match board.apply_move(candidate) {
                    Ok(_) => InteractionOutcome::Moved(
                        board.last_move().unwrap_or(candidate),
                    ),
                    Err(e) => {
                        tracing::debug!(error = %e, "move rejected");
                        InteractionOutcome::Rejected(candidate)
                    }
                }
            }
        }
    }
}
