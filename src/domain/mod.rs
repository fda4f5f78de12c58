//! Chess domain layer: board state, coordinates, puzzles.
//! No GPUI dependencies.

pub mod board;
pub mod chess;
pub mod coords;
pub mod puzzle;

pub use board::{BoardState, ChessError, GameStatus, PlayedMove};
pub use chess::{BoardMove, Orientation, Piece, PieceColor, shakmaty_to_piece};
pub use coords::{ArrowShape, BoardGeometry, square_at_cell};
pub use puzzle::{Puzzle, load_puzzles};
