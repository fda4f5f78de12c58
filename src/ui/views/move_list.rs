//! Notation panel - numbered move pairs, the game status and, during
//! replay, the current puzzle's details.

use gpui::{App, Div, Entity, div, prelude::*, px, rgb};

use crate::models::GameModel;
use crate::ui::theme::{
    BOARD_PADDING, BORDER_COLOR, MOVE_LIST_BG, PANEL_BG, TEXT_ACCENT, TEXT_PRIMARY, TEXT_SECONDARY,
};
use crate::ui::view_models::{NotationRow, PuzzleSummary};

const MOVE_NUM_WIDTH: f32 = 48.0;

/// Render the notation panel for a given game model.
/// Returns a Div element that can be used as a child.
pub fn render_move_list_panel(model: &Entity<GameModel>, cx: &App) -> Div {
    let game = model.read(cx);
    let rows = game.notation();
    let status = game.status_line();
    let summary = game.puzzle_summary();
    let is_replay = game.is_replay();

    let moves_content = if rows.is_empty() {
        div().text_color(rgb(TEXT_SECONDARY)).child("No moves yet")
    } else {
        div()
            .flex()
            .flex_col()
            .gap_1()
            .children(rows.into_iter().map(render_notation_row))
    };

    let move_list = div()
        .flex_1()
        .flex()
        .flex_col()
        .bg(rgb(MOVE_LIST_BG))
        .border_1()
        .border_color(rgb(BORDER_COLOR))
        .rounded_md()
        .overflow_hidden()
        .when_some(summary, |el, summary| el.child(render_puzzle_header(summary)))
        .child(
            div()
                .p_4()
                .pb_2()
                .text_color(rgb(TEXT_PRIMARY))
                .border_b_1()
                .border_color(rgb(BORDER_COLOR))
                .child("Moves"),
        )
        // Scrollable moves content
        .child(
            div()
                .id("move-list-scroll")
                .flex_1()
                .overflow_y_scroll()
                .p_4()
                .pt_2()
                .child(moves_content),
        )
        .child(
            div()
                .flex()
                .flex_col()
                .gap_1()
                .p_3()
                .border_t_1()
                .border_color(rgb(BORDER_COLOR))
                .text_sm()
                .child(div().text_color(rgb(TEXT_PRIMARY)).child(status))
                .when(is_replay, |el| {
                    el.child(
                        div()
                            .text_color(rgb(TEXT_SECONDARY))
                            .child("Right arrow: skip   Q: quit"),
                    )
                }),
        );

    div()
        .size_full()
        .flex()
        .flex_col()
        .bg(rgb(PANEL_BG))
        .p(px(BOARD_PADDING))
        .child(move_list)
}

fn render_puzzle_header(summary: PuzzleSummary) -> Div {
    div()
        .flex()
        .flex_col()
        .gap_1()
        .p_4()
        .border_b_1()
        .border_color(rgb(BORDER_COLOR))
        .text_sm()
        .child(
            div()
                .text_color(rgb(TEXT_ACCENT))
                .child(format!("Puzzle {} ({}/{})", summary.id, summary.index, summary.total)),
        )
        .child(
            div()
                .text_color(rgb(TEXT_PRIMARY))
                .child(format!("Rating {}", summary.rating)),
        )
        .when(!summary.themes.is_empty(), |el| {
            el.child(div().text_color(rgb(TEXT_SECONDARY)).child(summary.themes))
        })
        .when(!summary.url.is_empty(), |el| {
            el.child(div().text_color(rgb(TEXT_SECONDARY)).child(summary.url))
        })
}

fn render_notation_row(row: NotationRow) -> Div {
    // "12." before White's move, "12..." when the row opens with Black
    let number = if row.white.is_some() {
        format!("{}.", row.move_num)
    } else {
        format!("{}...", row.move_num)
    };

    div()
        .flex()
        .items_center()
        .gap_2()
        .py_1()
        .text_sm()
        .child(
            div()
                .text_color(rgb(TEXT_SECONDARY))
                .w(px(MOVE_NUM_WIDTH))
                .child(number),
        )
        .when_some(row.white, |el, san| {
            el.child(div().text_color(rgb(TEXT_PRIMARY)).flex_1().child(san))
        })
        .when_some(row.black, |el, san| {
            el.child(div().text_color(rgb(TEXT_PRIMARY)).flex_1().child(san))
        })
}
