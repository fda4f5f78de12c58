//! Session model - the application layer that owns one board session.
//!
//! A session is either interactive play (clicks go through the
//! [`InteractionController`]) or puzzle replay (a background task pumps the
//! [`PlaybackController`] on a timer, like an engine output loop).

use std::time::Instant;

use gpui::{AsyncApp, Context, Pixels, Size, Task, WeakEntity};
use tracing::info;

use crate::domain::{BoardState, Orientation, Puzzle};
use crate::models::frame::BoardFrame;
use crate::models::interaction::{InteractionController, InteractionOutcome};
use crate::models::playback::{
    POLL_INTERVAL, PlaybackConfig, PlaybackController, PumpOutcome, Signal,
};
use crate::ui::board_layout::BoardLayout;
use crate::ui::display;
use crate::ui::view_models::{NotationRow, PuzzleSummary};

enum Session {
    Play {
        board: BoardState,
        interaction: InteractionController,
        orientation: Orientation,
    },
    Replay(PlaybackController),
}

/// The main game model containing the active session
pub struct GameModel {
    session: Session,
    /// Measured panel size from canvas
    pub panel_size: Size<Pixels>,
    /// Latest input not yet handed to the playback controller
    pending: Signal,
    _playback_task: Option<Task<()>>,
}

impl GameModel {
    /// Interactive play from the standard starting position
    pub fn play(orientation: Orientation) -> Self {
        Self::with_session(Session::Play {
            board: BoardState::new(),
            interaction: InteractionController::new(),
            orientation,
        })
    }

    /// Timed replay of `puzzles`; call [`start_playback`](Self::start_playback) to begin
    pub fn replay(puzzles: Vec<Puzzle>, config: PlaybackConfig) -> Self {
        Self::with_session(Session::Replay(PlaybackController::new(puzzles, config)))
    }

    fn with_session(session: Session) -> Self {
        Self {
            session,
            panel_size: BoardLayout::default().panel_size,
            pending: Signal::None,
            _playback_task: None,
        }
    }

    pub fn is_replay(&self) -> bool {
        matches!(self.session, Session::Replay(_))
    }

    /// Spawn the timer task that drives replay. No-op in play mode.
    pub fn start_playback(&mut self, cx: &mut Context<Self>) {
        if !self.is_replay() || self._playback_task.is_some() {
            return;
        }
        let task = cx.spawn(async move |weak_entity: WeakEntity<GameModel>, cx: &mut AsyncApp| {
            Self::run_playback_loop(weak_entity, cx).await;
        });
        self._playback_task = Some(task);
    }

    async fn run_playback_loop(weak_entity: WeakEntity<GameModel>, cx: &mut AsyncApp) {
        loop {
            let should_continue = weak_entity.update(cx, |game, cx| game.tick(cx));
            match should_continue {
                Ok(true) => {}
                _ => break, // playback over or model dropped
            }
            cx.background_executor().timer(POLL_INTERVAL).await;
        }
    }

    /// Advance replay until it has to wait again or something needs drawing.
    /// Returns false once the task should stop.
    fn tick(&mut self, cx: &mut Context<Self>) -> bool {
        let Session::Replay(playback) = &mut self.session else {
            return false;
        };
        match playback.pump(Instant::now(), &mut self.pending) {
            PumpOutcome::Wait => true,
            PumpOutcome::Redraw => {
                cx.notify();
                true
            }
            PumpOutcome::Stop => {
                cx.notify();
                cx.quit();
                false
            }
        }
    }

    /// Everything the board view needs for one render
    pub fn frame(&self) -> BoardFrame<'_> {
        match &self.session {
            Session::Play {
                board,
                interaction,
                orientation,
            } => BoardFrame {
                selected: interaction.selected(),
                ..BoardFrame::new(board, *orientation)
            },
            Session::Replay(playback) => playback.frame(),
        }
    }

    pub fn layout(&self) -> BoardLayout {
        BoardLayout::new(self.panel_size)
    }

    /// Left click at panel coordinates. Only interactive play reacts.
    pub fn click(&mut self, x: f32, y: f32) -> Option<InteractionOutcome> {
        let geometry = self.layout().geometry();
        let Session::Play {
            board,
            interaction,
            orientation,
        } = &mut self.session
        else {
            return None;
        };
        let square = geometry.pixel_to_square(x, y, *orientation)?;
        Some(interaction.activate(board, square))
    }

    /// Cut the current replay wait short
    pub fn request_skip(&mut self) {
        if self.is_replay() {
            self.pending = self.pending.merge(Signal::Skip);
        }
    }

    /// Quit at once in play mode; in replay, at the next poll
    pub fn request_quit(&mut self, cx: &mut Context<Self>) {
        match self.session {
            Session::Play { .. } => {
                info!("quit requested");
                cx.quit();
            }
            Session::Replay(_) => self.pending = self.pending.merge(Signal::Quit),
        }
    }

    pub fn notation(&self) -> Vec<NotationRow> {
        display::board_notation(self.frame().board)
    }

    pub fn status_line(&self) -> String {
        display::status_text(self.frame().board)
    }

    pub fn puzzle_summary(&self) -> Option<PuzzleSummary> {
        match &self.session {
            Session::Play { .. } => None,
            Session::Replay(playback) => display::puzzle_summary(playback),
        }
    }
}

impl Default for GameModel {
    fn default() -> Self {
        Self::play(Orientation::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::BoardMove;
    use crate::ui::theme::BOARD_PADDING;
    use gpui::px;
    use shakmaty::Square;

    fn model_with_80px_squares(orientation: Orientation) -> GameModel {
        let mut game = GameModel::play(orientation);
        game.panel_size = Size {
            width: px(680.0),
            height: px(680.0),
        };
        game
    }

    fn center_of(game: &GameModel, square: Square) -> (f32, f32) {
        let frame = game.frame();
        game.layout().geometry().square_center(square, frame.orientation)
    }

    #[test]
    fn test_clicks_play_a_move() {
        let mut game = model_with_80px_squares(Orientation::WhiteBottom);

        let (x, y) = center_of(&game, Square::E2);
        assert_eq!(game.click(x, y), Some(InteractionOutcome::Selected(Square::E2)));
        assert_eq!(game.frame().selected, Some(Square::E2));

        let (x, y) = center_of(&game, Square::E4);
        assert_eq!(
            game.click(x, y),
            Some(InteractionOutcome::Moved(BoardMove::new(Square::E2, Square::E4)))
        );
        assert_eq!(game.frame().selected, None);
        assert_eq!(game.notation()[0].white.as_deref(), Some("e4"));
        assert_eq!(game.status_line(), "Black to move");
    }

    #[test]
    fn test_clicks_respect_orientation() {
        let mut game = model_with_80px_squares(Orientation::BlackBottom);
        // bottom-left cell is h8 when black is at the bottom
        let x = BOARD_PADDING + 10.0;
        let y = BOARD_PADDING + 7.0 * 80.0 + 10.0;
        assert_eq!(game.click(x, y), Some(InteractionOutcome::Ignored));

        // top-left cell is h1, a white rook
        assert_eq!(
            game.click(BOARD_PADDING + 10.0, BOARD_PADDING + 10.0),
            Some(InteractionOutcome::Selected(Square::H1))
        );
    }

    #[test]
    fn test_click_outside_board_is_noop() {
        let mut game = model_with_80px_squares(Orientation::WhiteBottom);
        assert_eq!(game.click(1.0, 1.0), None);
        assert_eq!(game.frame().selected, None);
    }

    #[test]
    fn test_replay_ignores_clicks_and_buffers_signals() {
        let mut game = GameModel::replay(Vec::new(), PlaybackConfig::default());
        assert!(game.is_replay());
        assert_eq!(game.click(100.0, 100.0), None);
        assert!(game.puzzle_summary().is_none());

        game.request_skip();
        assert_eq!(game.pending, Signal::Skip);
        game.pending = game.pending.merge(Signal::Quit);
        game.request_skip();
        assert_eq!(game.pending, Signal::Quit);
    }

    #[test]
    fn test_play_mode_drops_skip() {
        let mut game = GameModel::default();
        game.request_skip();
        assert_eq!(game.pending, Signal::None);
        assert!(game.puzzle_summary().is_none());
    }
}
