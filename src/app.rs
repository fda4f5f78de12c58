//! Application setup and window creation.

use anyhow::Result;
use gpui::{App, Bounds, KeyBinding, WindowBounds, WindowOptions, prelude::*, px, size};
use gpui_component::Root;

use crate::models::GameModel;
use crate::ui::theme::{INITIAL_HEIGHT, INITIAL_LEFT_PANEL, INITIAL_RIGHT_PANEL};
use crate::ui::views::{ChessBoardView, KEY_CONTEXT, Quit, SkipWait};

/// Open the board window for `game` and start replay if it has one
pub fn run(game: GameModel, cx: &mut App) -> Result<()> {
    gpui_component::init(cx);

    cx.bind_keys([
        KeyBinding::new("right", SkipWait, Some(KEY_CONTEXT)),
        KeyBinding::new("q", Quit, Some(KEY_CONTEXT)),
    ]);
    // Closing the board ends the session, replay included
    cx.on_window_closed(|cx| cx.quit()).detach();

    let model = cx.new(|cx| {
        let mut game = game;
        game.start_playback(cx);
        game
    });

    let bounds = Bounds::centered(
        None,
        size(px(INITIAL_LEFT_PANEL + INITIAL_RIGHT_PANEL), px(INITIAL_HEIGHT)),
        cx,
    );
    cx.open_window(
        WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            ..Default::default()
        },
        |window, cx| {
            let view = cx.new(|cx| ChessBoardView::new(model, window, cx));
            cx.new(|cx| Root::new(view, window, cx))
        },
    )?;
    Ok(())
}
