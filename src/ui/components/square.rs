//! Square rendering component.

use crate::domain::Piece;
use crate::ui::theme::{LAST_MOVE_SQUARE, SELECTED_SQUARE, square_color};
use crate::ui::view_models::{SquareHighlight, SquareView};
use gpui::{Rgba, div, img, prelude::*, px, rgb};

fn background(view: &SquareView) -> Rgba {
    match view.highlight {
        SquareHighlight::None => square_color(view.row, view.col),
        SquareHighlight::LastMove => rgb(LAST_MOVE_SQUARE),
        SquareHighlight::Selected => rgb(SELECTED_SQUARE),
    }
}

fn piece_image(piece: Piece, piece_size: f32) -> impl IntoElement {
    img(piece.svg_path()).size(px(piece_size))
}

/// Render a single board cell: background by highlight, piece image centered
pub fn render_square(view: &SquareView, square_size: f32, piece_size: f32) -> impl IntoElement {
    div()
        .flex_shrink_0() // never shrink - maintain aspect ratio
        .size(px(square_size))
        .bg(background(view))
        .flex()
        .items_center()
        .justify_center()
        .when_some(view.piece, |el, p| el.child(piece_image(p, piece_size)))
}
