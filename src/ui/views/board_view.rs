//! Chess board view - the board panel with click-to-move and the replay
//! keyboard controls.

use gpui::{
    App, Context, Entity, FocusHandle, Focusable, MouseButton, MouseDownEvent, Pixels,
    Subscription, Window, actions, canvas, div, prelude::*, px, rgb,
};
use gpui_component::resizable::{h_resizable, resizable_panel};

use crate::models::{GameModel, InteractionOutcome};
use crate::ui::components::{render_arrow, render_square};
use crate::ui::display::square_views;
use crate::ui::theme::{BOARD_PADDING, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL, PANEL_BG};
use crate::ui::views::render_move_list_panel;

actions!(puzzle_board, [SkipWait, Quit]);

/// Key context the replay bindings are registered under
pub const KEY_CONTEXT: &str = "PuzzleBoard";

/// The main chess board view that observes a GameModel
pub struct ChessBoardView {
    model: Entity<GameModel>,
    focus_handle: FocusHandle,
    _subscription: Subscription,
}

impl ChessBoardView {
    pub fn new(model: Entity<GameModel>, window: &mut Window, cx: &mut Context<Self>) -> Self {
        let _subscription = cx.observe(&model, |_, _, cx| cx.notify());
        let focus_handle = cx.focus_handle();
        window.focus(&focus_handle);
        Self {
            model,
            focus_handle,
            _subscription,
        }
    }

    fn skip_wait(&mut self, _: &SkipWait, _window: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |game, _| game.request_skip());
    }

    fn quit(&mut self, _: &Quit, _window: &mut Window, cx: &mut Context<Self>) {
        self.model.update(cx, |game, cx| game.request_quit(cx));
    }
}

impl Focusable for ChessBoardView {
    fn focus_handle(&self, _cx: &App) -> FocusHandle {
        self.focus_handle.clone()
    }
}

impl Render for ChessBoardView {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let model_down = self.model.clone();
        let model_measure = self.model.clone();

        // Snapshot what the board needs so the model borrow ends here
        let (squares, arrow, layout) = {
            let game = self.model.read(cx);
            let layout = game.layout();
            let frame = game.frame();
            let arrow = frame
                .arrow
                .map(|mv| layout.local_geometry().arrow_shape(mv, frame.orientation));
            (square_views(&frame), arrow, layout)
        };

        let square_size = layout.square_size();
        let piece_size = layout.piece_size();
        let board_total_size = layout.board_total_size();

        // Board element with fixed size - always maintains 1:1 aspect ratio
        let board = div()
            .relative()
            .flex_shrink_0()
            .flex()
            .flex_col()
            .w(px(board_total_size))
            .h(px(board_total_size))
            .overflow_hidden()
            .rounded_md()
            .children(squares.chunks(8).map(|row| {
                div()
                    .flex()
                    .flex_shrink_0()
                    .children(row.iter().map(|view| render_square(view, square_size, piece_size)))
            }))
            .when_some(arrow, |el, shape| el.child(render_arrow(shape)));

        let board_panel_content = div()
            .id("board-panel")
            .relative()
            .size_full()
            .overflow_hidden()
            .bg(rgb(PANEL_BG))
            .p(px(BOARD_PADDING))
            .child(board)
            .on_mouse_down(
                MouseButton::Left,
                move |ev: &MouseDownEvent, _window, cx| {
                    model_down.update(cx, |game, cx| {
                        let pos = ev.position;
                        match game.click(pos.x.into(), pos.y.into()) {
                            None | Some(InteractionOutcome::Ignored) => {}
                            Some(_) => cx.notify(),
                        }
                    });
                },
            );

        // Canvas to measure actual panel size
        let measure_canvas = canvas(
            move |bounds, _window, cx| {
                model_measure.update(cx, |game, cx| {
                    if game.panel_size != bounds.size {
                        game.panel_size = bounds.size;
                        cx.notify();
                    }
                });
            },
            |_, _, _, _| {},
        )
        .absolute()
        .top_0()
        .left_0()
        .size_full();

        let board_panel_with_measure = div()
            .relative()
            .size_full()
            .child(measure_canvas)
            .child(board_panel_content);

        let move_list_panel_content = render_move_list_panel(&self.model, cx);

        div()
            .size_full()
            .key_context(KEY_CONTEXT)
            .track_focus(&self.focus_handle)
            .on_action(cx.listener(Self::skip_wait))
            .on_action(cx.listener(Self::quit))
            .child(
                h_resizable("puzzle-board-layout")
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_LEFT_PANEL))
                            .size_range(px(320.)..px(1200.))
                            .child(board_panel_with_measure),
                    )
                    .child(
                        resizable_panel()
                            .size(px(INITIAL_RIGHT_PANEL))
                            .size_range(px(150.)..Pixels::MAX)
                            .child(move_list_panel_content),
                    ),
            )
    }
}
