//! Authoritative board state: the current position plus the moves that led
//! to it. Legality is always decided by shakmaty.

use shakmaty::fen::Fen;
use shakmaty::san::San;
use shakmaty::{CastlingMode, Chess, File, Move, Position, Role, Square};
use thiserror::Error;

use crate::domain::{BoardMove, Piece, PieceColor, shakmaty_to_piece};

/// Errors that can occur during chess operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Invalid FEN string.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),

    /// Invalid UCI move format.
    #[error("invalid UCI move: {0}")]
    InvalidUciMove(String),

    /// Move is not legal in the current position.
    #[error("illegal move: {0}")]
    IllegalMove(BoardMove),
}

/// A move that has been applied, with its notation as played
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayedMove {
    pub mv: BoardMove,
    /// SAN including the check (`+`) or mate (`#`) suffix
    pub san: String,
}

/// Game state as reported by the rules engine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    Ongoing,
    Check,
    Checkmate,
    Stalemate,
}

#[derive(Clone, Debug)]
pub struct BoardState {
    position: Chess,
    history: Vec<PlayedMove>,
    starting_fullmove: u32,
}

impl BoardState {
    /// Standard starting position
    pub fn new() -> Self {
        Self::from_position(Chess::default())
    }

    pub fn from_position(position: Chess) -> Self {
        let starting_fullmove = position.fullmoves().get();
        Self {
            position,
            history: Vec::new(),
            starting_fullmove,
        }
    }

    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        Ok(Self::from_position(parse_fen(fen)?))
    }

    #[allow(dead_code)]
    pub fn current_position(&self) -> &Chess {
        &self.position
    }

    pub fn turn(&self) -> PieceColor {
        self.position.turn().into()
    }

    pub fn piece_at(&self, square: Square) -> Option<Piece> {
        self.position.board().piece_at(square).map(shakmaty_to_piece)
    }

    /// Fullmove number of the position this state was created from
    pub fn starting_fullmove(&self) -> u32 {
        self.starting_fullmove
    }

    /// Color that made the first recorded move
    pub fn first_mover(&self) -> PieceColor {
        let turn = self.turn();
        if self.history.len() % 2 == 0 {
            turn
        } else {
            match turn {
                PieceColor::White => PieceColor::Black,
                PieceColor::Black => PieceColor::White,
            }
        }
    }

    pub fn last_move(&self) -> Option<BoardMove> {
        self.history.last().map(|p| p.mv)
    }

    /// Moves in the order they were played
    pub fn history(&self) -> Vec<BoardMove> {
        self.history.iter().map(|p| p.mv).collect()
    }

    pub fn played(&self) -> &[PlayedMove] {
        &self.history
    }

    pub fn status(&self) -> GameStatus {
        if self.position.is_checkmate() {
            GameStatus::Checkmate
        } else if self.position.is_stalemate() {
            GameStatus::Stalemate
        } else if self.position.is_check() {
            GameStatus::Check
        } else {
            GameStatus::Ongoing
        }
    }

    /// All legal moves, expressed the way `apply_move` accepts them
    #[allow(dead_code)]
    pub fn legal_moves(&self) -> Vec<BoardMove> {
        self.position
            .legal_moves()
            .iter()
            .filter_map(board_move_of)
            .collect()
    }

    /// Apply a move if the rules engine accepts it.
    ///
    /// On failure nothing changes and `ChessError::IllegalMove` is returned.
    pub fn apply_move(&mut self, candidate: BoardMove) -> Result<&Chess, ChessError> {
        let m = self
            .resolve(candidate)
            .ok_or(ChessError::IllegalMove(candidate))?;

        let san = San::from_move(&self.position, m.clone()).to_string();
        let next = self
            .position
            .clone()
            .play(m.clone())
            .map_err(|_| ChessError::IllegalMove(candidate))?;

        let suffix = if next.is_checkmate() {
            "#"
        } else if next.is_check() {
            "+"
        } else {
            ""
        };

        let played = board_move_of(&m).unwrap_or(candidate);
        tracing::debug!(uci = %played, san = %san, "move applied");

        self.history.push(PlayedMove {
            mv: played,
            san: format!("{san}{suffix}"),
        });
        self.position = next;
        Ok(&self.position)
    }

    /// Find the legal move the candidate stands for
    fn resolve(&self, candidate: BoardMove) -> Option<Move> {
        self.position.legal_moves().into_iter().find(|m| {
            let Some(expressed) = board_move_of(m) else {
                return false;
            };
            if expressed.from != candidate.from || expressed.to != candidate.to {
                return false;
            }
            match candidate.promotion {
                Some(role) => expressed.promotion == Some(role),
                // auto-promote to queen
                None => matches!(expressed.promotion, None | Some(Role::Queen)),
            }
        })
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn parse_fen(fen: &str) -> Result<Chess, ChessError> {
    let parsed: Fen = fen
        .trim()
        .parse()
        .map_err(|e| ChessError::InvalidFen(format!("{e}")))?;
    parsed
        .into_position(CastlingMode::Standard)
        .map_err(|e| ChessError::InvalidFen(format!("{e}")))
}

/// Express a shakmaty move as origin/destination; castling becomes the
/// king's two-square move.
fn board_move_of(m: &Move) -> Option<BoardMove> {
    match m {
        Move::Normal {
            from,
            to,
            promotion,
            ..
        } => Some(BoardMove {
            from: *from,
            to: *to,
            promotion: *promotion,
        }),
        Move::EnPassant { from, to } => Some(BoardMove::new(*from, *to)),
        Move::Castle { king, rook } => {
            let king_dest = if rook.file() == File::H {
                Square::from_coords(File::G, rook.rank())
            } else {
                Square::from_coords(File::C, rook.rank())
            };
            Some(BoardMove::new(*king, king_dest))
        }
        Move::Put { .. } => None,
    }
}
