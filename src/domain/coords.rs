//! Board geometry: maps squares to screen pixels and back, honoring the
//! board orientation. Pure functions over plain data.

use shakmaty::Square;

use crate::domain::{BoardMove, Orientation};

/// Arrowhead wing angle relative to the shaft, in degrees
const ARROW_WING_ANGLE: f32 = 150.0;
/// Arrowhead wing length as a fraction of the square size (30px at 80px squares)
const ARROW_WING_SCALE: f32 = 0.375;
/// Shaft width as a fraction of the square size (15px at 80px squares)
const ARROW_WIDTH_SCALE: f32 = 0.1875;

/// Where the board sits on screen and how big its squares are
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardGeometry {
    pub origin_x: f32,
    pub origin_y: f32,
    pub square_size: f32,
}

/// Line and arrowhead for an annotated move, in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ArrowShape {
    pub tail: (f32, f32),
    pub head: (f32, f32),
    pub left_wing: (f32, f32),
    pub right_wing: (f32, f32),
    pub width: f32,
}

fn file_rank(square: Square) -> (usize, usize) {
    let index = usize::from(square);
    (index % 8, index / 8)
}

fn square_from(file: usize, rank: usize) -> Square {
    Square::new((rank * 8 + file) as u32)
}

/// Display row/column (row 0 at the top) of a square
pub fn display_cell(square: Square, orientation: Orientation) -> (usize, usize) {
    let (file, rank) = file_rank(square);
    match orientation {
        Orientation::WhiteBottom => (7 - rank, file),
        Orientation::BlackBottom => (rank, 7 - file),
    }
}

/// Square shown at a display row/column; `None` outside 0..8
pub fn square_at_cell(row: usize, col: usize, orientation: Orientation) -> Option<Square> {
    if row >= 8 || col >= 8 {
        return None;
    }
    let square = match orientation {
        Orientation::WhiteBottom => square_from(col, 7 - row),
        Orientation::BlackBottom => square_from(7 - col, row),
    };
    Some(square)
}

impl BoardGeometry {
    pub fn new(origin_x: f32, origin_y: f32, square_size: f32) -> Self {
        Self {
            origin_x,
            origin_y,
            square_size,
        }
    }

    #[allow(dead_code)]
    pub fn board_size(&self) -> f32 {
        self.square_size * 8.0
    }

    /// Top-left corner of the square's cell
    pub fn square_to_pixel(&self, square: Square, orientation: Orientation) -> (f32, f32) {
        let (row, col) = display_cell(square, orientation);
        (
            self.origin_x + col as f32 * self.square_size,
            self.origin_y + row as f32 * self.square_size,
        )
    }

    pub fn square_center(&self, square: Square, orientation: Orientation) -> (f32, f32) {
        let (x, y) = self.square_to_pixel(square, orientation);
        let half = self.square_size / 2.0;
        (x + half, y + half)
    }

    /// Square under a pixel, if the pixel lies on the board
    pub fn pixel_to_square(&self, x: f32, y: f32, orientation: Orientation) -> Option<Square> {
        let board_x = x - self.origin_x;
        let board_y = y - self.origin_y;

        // negated so NaN coordinates fall through to None
        if !(board_x >= 0.0 && board_y >= 0.0 && self.square_size > 0.0) {
            return None;
        }

        let col = (board_x / self.square_size) as usize;
        let row = (board_y / self.square_size) as usize;
        square_at_cell(row, col, orientation)
    }

    /// Shaft from the origin square's center to the destination's, with a
    /// two-wing head at the destination
    pub fn arrow_shape(&self, mv: BoardMove, orientation: Orientation) -> ArrowShape {
        let tail = self.square_center(mv.from, orientation);
        let head = self.square_center(mv.to, orientation);
        let wing = self.square_size * ARROW_WING_SCALE;
        let angle = (head.1 - tail.1).atan2(head.0 - tail.0);
        let spread = ARROW_WING_ANGLE.to_radians();

        ArrowShape {
            tail,
            head,
            left_wing: (
                head.0 + wing * (angle + spread).cos(),
                head.1 + wing * (angle + spread).sin(),
            ),
            right_wing: (
                head.0 + wing * (angle - spread).cos(),
                head.1 + wing * (angle - spread).sin(),
            ),
            width: self.square_size * ARROW_WIDTH_SCALE,
        }
    }
}
