//! Display generation for the board and the notation panel.
//!
//! This module transforms frames into display-ready view models.
//! It lives in the UI layer and depends on domain + models, not vice versa.

use crate::domain::{BoardState, GameStatus, PieceColor, PlayedMove, square_at_cell};
use crate::models::{BoardFrame, PlaybackController};
use crate::ui::view_models::{NotationRow, PuzzleSummary, SquareHighlight, SquareView};

/// All 64 cells in display order (row 0 at the top)
pub fn square_views(frame: &BoardFrame<'_>) -> Vec<SquareView> {
    let last_move = frame.last_move();
    let mut views = Vec::with_capacity(64);

    for row in 0..8 {
        for col in 0..8 {
            let Some(square) = square_at_cell(row, col, frame.orientation) else {
                continue;
            };
            let highlight = if frame.selected == Some(square) {
                SquareHighlight::Selected
            } else if last_move.is_some_and(|m| m.from == square || m.to == square) {
                SquareHighlight::LastMove
            } else {
                SquareHighlight::None
            };
            views.push(SquareView {
                square,
                row,
                col,
                piece: frame.board.piece_at(square),
                highlight,
            });
        }
    }

    views
}

/// Pair moves up by move number, starting from whoever moved first
pub fn notation_rows(
    played: &[PlayedMove],
    first_mover: PieceColor,
    starting_fullmove: u32,
) -> Vec<NotationRow> {
    let mut rows: Vec<NotationRow> = Vec::new();
    let mut color = first_mover;
    let mut move_num = starting_fullmove;

    for p in played {
        match color {
            PieceColor::White => {
                rows.push(NotationRow {
                    move_num,
                    white: Some(p.san.clone()),
                    black: None,
                });
                color = PieceColor::Black;
            }
            PieceColor::Black => {
                match rows.last_mut() {
                    Some(row) if row.move_num == move_num && row.black.is_none() => {
                        row.black = Some(p.san.clone());
                    }
                    _ => rows.push(NotationRow {
                        move_num,
                        white: None,
                        black: Some(p.san.clone()),
                    }),
                }
                move_num += 1;
                color = PieceColor::White;
            }
        }
    }

    rows
}

pub fn board_notation(board: &BoardState) -> Vec<NotationRow> {
    notation_rows(board.played(), board.first_mover(), board.starting_fullmove())
}

pub fn status_text(board: &BoardState) -> String {
    let side = board.turn().name();
    match board.status() {
        GameStatus::Ongoing => format!("{side} to move"),
        GameStatus::Check => format!("{side} to move, check"),
        GameStatus::Checkmate => format!("Checkmate, {side} is mated"),
        GameStatus::Stalemate => "Stalemate".to_string(),
    }
}

pub fn puzzle_summary(playback: &PlaybackController) -> Option<PuzzleSummary> {
    let puzzle = playback.current_puzzle()?;
    let (index, total) = playback.progress();
    Some(PuzzleSummary {
        id: puzzle.id.clone(),
        rating: puzzle.rating,
        url: puzzle.url.clone(),
        themes: puzzle.themes.join(", "),
        index,
        total,
    })
}
