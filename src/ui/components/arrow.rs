//! Arrow overlay for annotated replay.

use gpui::{Bounds, Hsla, PathBuilder, Pixels, Point, canvas, point, prelude::*, px, rgba};

use crate::domain::ArrowShape;
use crate::ui::theme::ARROW_COLOR;

fn to_window(bounds: Bounds<Pixels>, (x, y): (f32, f32)) -> Point<Pixels> {
    point(bounds.origin.x + px(x), bounds.origin.y + px(y))
}

/// Canvas painting `shape` over the board. Coordinates are relative to the
/// board's top-left corner.
pub fn render_arrow(shape: ArrowShape) -> impl IntoElement {
    canvas(
        |_, _, _| {},
        move |bounds, _, window, _cx| {
            let color = Hsla::from(rgba(ARROW_COLOR));

            let mut shaft = PathBuilder::stroke(px(shape.width));
            shaft.move_to(to_window(bounds, shape.tail));
            shaft.line_to(to_window(bounds, shape.head));
            if let Ok(path) = shaft.build() {
                window.paint_path(path, color);
            }

            let mut head = PathBuilder::fill();
            head.move_to(to_window(bounds, shape.head));
            head.line_to(to_window(bounds, shape.left_wing));
            head.line_to(to_window(bounds, shape.right_wing));
            head.close();
            if let Ok(path) = head.build() {
                window.paint_path(path, color);
            }
        },
    )
    .absolute()
    .top_0()
    .left_0()
    .size_full()
}
