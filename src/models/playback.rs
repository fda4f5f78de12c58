//! Timed replay of puzzle solution lines.
//!
//! One puzzle at a time, in file order:
//! `LoadPuzzle -> Waiting -> Advancing -> Waiting ... -> Done -> LoadPuzzle ... -> Finished`.
//! `Waiting` and `Done` are the only states that consume a [`Signal`]. Both
//! end when their [`Deadline`] passes or on `Skip`; `Quit` ends the whole run.
//! `Done` holds the final position of a puzzle for one step delay.

use std::collections::VecDeque;
use std::thread;
use std::time::{Duration, Instant};

use crate::domain::{BoardMove, BoardState, Orientation, Puzzle};
use crate::models::frame::{BoardFrame, FrameSink};

/// How often a waiting loop checks for signals (~60fps)
pub const POLL_INTERVAL: Duration = Duration::from_millis(16);

pub const DEFAULT_STEP_DELAY: Duration = Duration::from_secs(1);

/// External input observed while waiting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Signal {
    #[default]
    None,
    /// Cut the current wait short
    Skip,
    /// Stop everything now
    Quit,
}

impl Signal {
    /// Combine two pending signals; quit beats skip beats nothing
    pub fn merge(self, other: Signal) -> Signal {
        match (self, other) {
            (Signal::Quit, _) | (_, Signal::Quit) => Signal::Quit,
            (Signal::Skip, _) | (_, Signal::Skip) => Signal::Skip,
            _ => Signal::None,
        }
    }
}

pub trait SignalSource {
    fn poll(&mut self) -> Signal;
}

/// A source that never interrupts
pub struct NoSignals;

impl SignalSource for NoSignals {
    fn poll(&mut self) -> Signal {
        Signal::None
    }
}

/// A point in time after which a wait is over
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Deadline {
    expires_at: Instant,
}

impl Deadline {
    pub fn after(start: Instant, duration: Duration) -> Self {
        Self {
            expires_at: start + duration,
        }
    }

    #[allow(dead_code)]
    pub fn has_elapsed(&self) -> bool {
        self.has_elapsed_at(Instant::now())
    }

    pub fn has_elapsed_at(&self, now: Instant) -> bool {
        now >= self.expires_at
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        self.expires_at.saturating_duration_since(now)
    }
}

/// Fixed before playback starts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlaybackConfig {
    pub step_delay: Duration,
    /// Draw an arrow for every applied move
    pub annotated: bool,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            step_delay: DEFAULT_STEP_DELAY,
            annotated: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlaybackState {
    LoadPuzzle,
    Waiting(Deadline),
    Advancing,
    /// Final position on screen until the deadline
    Done(Deadline),
    Finished,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// A new board is ready to be drawn
    PuzzleLoaded { index: usize, id: String },
    /// A solution move was applied; redraw
    MoveApplied(BoardMove),
    /// The puzzle's data was inconsistent; replay moved on
    PuzzleAborted { id: String, reason: String },
    PuzzleFinished { id: String },
    /// No puzzles left
    Finished,
    /// Quit was signalled while waiting
    Quit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    Completed,
    Quit,
}

/// What a non-blocking driver should do after [`PlaybackController::pump`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PumpOutcome {
    /// Nothing changed; poll again later
    Wait,
    /// The board changed and needs drawing
    Redraw,
    /// Playback finished or was quit
    Stop,
}

pub struct PlaybackController {
    config: PlaybackConfig,
    puzzles: Vec<Puzzle>,
    next_index: usize,
    current: Option<usize>,
    remaining: VecDeque<BoardMove>,
    board: BoardState,
    orientation: Orientation,
    arrow: Option<BoardMove>,
    state: PlaybackState,
    waits: usize,
}

impl PlaybackController {
    pub fn new(puzzles: Vec<Puzzle>, config: PlaybackConfig) -> Self {
        Self {
            config,
            puzzles,
            next_index: 0,
            current: None,
            remaining: VecDeque::new(),
            board: BoardState::new(),
            orientation: Orientation::WhiteBottom,
            arrow: None,
            state: PlaybackState::LoadPuzzle,
            waits: 0,
        }
    }

    #[allow(dead_code)]
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn board(&self) -> &BoardState {
        &self.board
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Arrow for the most recent move, only in annotated mode
    pub fn arrow(&self) -> Option<BoardMove> {
        self.arrow
    }

    pub fn current_puzzle(&self) -> Option<&Puzzle> {
        self.current.and_then(|i| self.puzzles.get(i))
    }

    /// 1-based position of the current puzzle and the total count
    pub fn progress(&self) -> (usize, usize) {
        (self.current.map_or(0, |i| i + 1), self.puzzles.len())
    }

    /// Number of waits entered for the current puzzle
    #[allow(dead_code)]
    pub fn waits_in_puzzle(&self) -> usize {
        self.waits
    }

    #[allow(dead_code)]
    pub fn is_waiting(&self) -> bool {
        matches!(self.state, PlaybackState::Waiting(_))
    }

    /// Deadline of the current pause, between moves or after the last one
    pub fn deadline(&self) -> Option<Deadline> {
        match self.state {
            PlaybackState::Waiting(deadline) | PlaybackState::Done(deadline) => Some(deadline),
            _ => None,
        }
    }

    /// Paused and listening for signals
    pub fn is_paused(&self) -> bool {
        self.deadline().is_some()
    }

    pub fn is_finished(&self) -> bool {
        self.state == PlaybackState::Finished
    }

    pub fn frame(&self) -> BoardFrame<'_> {
        BoardFrame {
            arrow: self.arrow(),
            ..BoardFrame::new(&self.board, self.orientation())
        }
    }

    /// Perform at most one transition. `signal` is only looked at while paused.
    pub fn step(&mut self, now: Instant, signal: Signal) -> Option<PlaybackEvent> {
        match self.state {
            PlaybackState::LoadPuzzle => Some(self.load_next(now)),
            PlaybackState::Waiting(deadline) => match signal {
                Signal::Quit => Some(self.quit()),
                Signal::Skip => {
                    self.state = PlaybackState::Advancing;
                    None
                }
                Signal::None if deadline.has_elapsed_at(now) => {
                    self.state = PlaybackState::Advancing;
                    None
                }
                Signal::None => None,
            },
            PlaybackState::Advancing => Some(self.advance(now)),
            PlaybackState::Done(deadline) => match signal {
                Signal::Quit => Some(self.quit()),
                Signal::Skip => Some(self.finish_puzzle()),
                Signal::None if deadline.has_elapsed_at(now) => Some(self.finish_puzzle()),
                Signal::None => None,
            },
            PlaybackState::Finished => None,
        }
    }

    /// Run transitions until playback has to pause or something needs
    /// drawing. `pending` is consumed only once paused.
    pub fn pump(&mut self, now: Instant, pending: &mut Signal) -> PumpOutcome {
        loop {
            let signal = if self.is_paused() {
                std::mem::take(pending)
            } else {
                Signal::None
            };

            match self.step(now, signal) {
                Some(PlaybackEvent::Quit | PlaybackEvent::Finished) => return PumpOutcome::Stop,
                Some(PlaybackEvent::PuzzleLoaded { .. } | PlaybackEvent::MoveApplied(_)) => {
                    return PumpOutcome::Redraw;
                }
                Some(_) => {}
                None if self.is_finished() => return PumpOutcome::Stop,
                None if self.is_paused() => return PumpOutcome::Wait,
                None => {}
            }
        }
    }

    /// Drive the machine to the end, sleeping between polls while waiting.
    pub fn run<S, F>(&mut self, signals: &mut S, sink: &mut F) -> RunOutcome
    where
        S: SignalSource + ?Sized,
        F: FrameSink + ?Sized,
    {
        loop {
            let signal = if self.is_paused() {
                signals.poll()
            } else {
                Signal::None
            };

            match self.step(Instant::now(), signal) {
                Some(PlaybackEvent::Quit) => return RunOutcome::Quit,
                Some(PlaybackEvent::Finished) => return RunOutcome::Completed,
                Some(PlaybackEvent::PuzzleLoaded { .. } | PlaybackEvent::MoveApplied(_)) => {
                    sink.draw(&self.frame())
                }
                Some(_) => {}
                None => {
                    if let Some(deadline) = self.deadline() {
                        thread::sleep(deadline.remaining_at(Instant::now()).min(POLL_INTERVAL));
                    }
                }
            }
        }
    }

    fn current_id(&self) -> String {
        self.current_puzzle()
            .map(|p| p.id.clone())
            .unwrap_or_default()
    }

    fn enter_wait(&mut self, now: Instant) {
        self.waits += 1;
        self.state = PlaybackState::Waiting(Deadline::after(now, self.config.step_delay));
    }

    fn enter_done(&mut self, now: Instant) {
        self.state = PlaybackState::Done(Deadline::after(now, self.config.step_delay));
    }

    fn quit(&mut self) -> PlaybackEvent {
        tracing::info!("quit during playback");
        self.state = PlaybackState::Finished;
        PlaybackEvent::Quit
    }

    fn finish_puzzle(&mut self) -> PlaybackEvent {
        let id = self.current_id();
        tracing::info!(puzzle = %id, "puzzle finished");
        self.state = PlaybackState::LoadPuzzle;
        PlaybackEvent::PuzzleFinished { id }
    }

    fn load_next(&mut self, now: Instant) -> PlaybackEvent {
        let index = self.next_index;
        let Some(puzzle) = self.puzzles.get(index) else {
            tracing::info!(count = self.puzzles.len(), "playback finished");
            self.state = PlaybackState::Finished;
            return PlaybackEvent::Finished;
        };
        self.next_index += 1;
        self.current = Some(index);

        let board = match BoardState::from_fen(&puzzle.fen) {
            Ok(board) => board,
            Err(e) => {
                tracing::warn!(puzzle = %puzzle.id, error = %e, "skipping puzzle");
                let aborted = PlaybackEvent::PuzzleAborted {
                    id: puzzle.id.clone(),
                    reason: e.to_string(),
                };
                self.state = PlaybackState::LoadPuzzle;
                return aborted;
            }
        };

        tracing::info!(
            puzzle = %puzzle.id,
            rating = puzzle.rating,
            moves = puzzle.solution.len(),
            "puzzle loaded"
        );

        let id = puzzle.id.clone();
        self.remaining = puzzle.solution.iter().copied().collect();
        self.orientation = Orientation::for_side(puzzle.first_mover);
        self.board = board;
        self.arrow = None;
        self.waits = 0;

        if self.remaining.is_empty() {
            self.enter_done(now);
        } else {
            self.enter_wait(now);
        }
        PlaybackEvent::PuzzleLoaded { index, id }
    }

    fn advance(&mut self, now: Instant) -> PlaybackEvent {
        let Some(mv) = self.remaining.pop_front() else {
            return self.finish_puzzle();
        };

        if let Err(e) = self.board.apply_move(mv) {
            let id = self.current_id();
            tracing::warn!(puzzle = %id, error = %e, "solution line rejected, skipping puzzle");
            self.remaining.clear();
            self.state = PlaybackState::LoadPuzzle;
            return PlaybackEvent::PuzzleAborted {
                id,
                reason: e.to_string(),
            };
        }

        let applied = self.board.last_move().unwrap_or(mv);
        if self.config.annotated {
            self.arrow = Some(applied);
        }

        if self.remaining.is_empty() {
            self.enter_done(now);
        } else {
            self.enter_wait(now);
        }
        PlaybackEvent::MoveApplied(applied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::PieceColor;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    fn mv(s: &str) -> BoardMove {
        BoardMove::from_uci(s).unwrap()
    }

    fn puzzle(id: &str, fen: &str, moves: &str) -> Puzzle {
        Puzzle {
            id: id.to_string(),
            fen: fen.to_string(),
            solution: moves.split_whitespace().map(mv).collect(),
            first_mover: PieceColor::White,
            rating: 1500,
            url: String::new(),
            themes: Vec::new(),
        }
    }

    fn instant_config() -> PlaybackConfig {
        PlaybackConfig {
            step_delay: Duration::ZERO,
            annotated: false,
        }
    }

    struct Scripted(VecDeque<Signal>);

    impl SignalSource for Scripted {
        fn poll(&mut self) -> Signal {
            self.0.pop_front().unwrap_or(Signal::None)
        }
    }

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<BoardMove>>,
    }

    impl FrameSink for Recorder {
        fn draw(&mut self, frame: &BoardFrame<'_>) {
            self.frames.push(frame.board.history());
        }
    }

    #[test]
    fn test_three_move_puzzle() {
        let mut ctl = PlaybackController::new(
            vec![puzzle("p1", START, "e2e4 e7e5 g1f3")],
            instant_config(),
        );
        let mut sink = Recorder::default();

        let outcome = ctl.run(&mut NoSignals, &mut sink);

        assert_eq!(outcome, RunOutcome::Completed);
        assert_eq!(ctl.waits_in_puzzle(), 3);
        assert_eq!(ctl.board().history(), vec![mv("e2e4"), mv("e7e5"), mv("g1f3")]);
        assert!(ctl.is_finished());
        // load + one redraw per move, in order
        assert_eq!(sink.frames.len(), 4);
        assert_eq!(sink.frames[1], vec![mv("e2e4")]);
        assert_eq!(sink.frames[2], vec![mv("e2e4"), mv("e7e5")]);
    }

    #[test]
    fn test_step_by_step_transitions() {
        let delay = Duration::from_secs(1);
        let mut ctl = PlaybackController::new(
            vec![puzzle("p1", START, "e2e4 e7e5 g1f3")],
            PlaybackConfig {
                step_delay: delay,
                annotated: false,
            },
        );
        let t0 = Instant::now();

        assert_eq!(
            ctl.step(t0, Signal::None),
            Some(PlaybackEvent::PuzzleLoaded {
                index: 0,
                id: "p1".to_string()
            })
        );
        assert!(ctl.is_waiting());

        // deadline not reached: still waiting
        assert_eq!(ctl.step(t0 + delay / 2, Signal::None), None);
        assert!(ctl.is_waiting());

        let mut t = t0;
        for expected in ["e2e4", "e7e5", "g1f3"] {
            t += delay;
            assert_eq!(ctl.step(t, Signal::None), None);
            assert_eq!(ctl.state(), PlaybackState::Advancing);
            assert_eq!(ctl.step(t, Signal::None), Some(PlaybackEvent::MoveApplied(mv(expected))));
        }
        assert_eq!(ctl.waits_in_puzzle(), 3);
        assert_eq!(ctl.state(), PlaybackState::Done(Deadline::after(t, delay)));
        // the final position stays up for a full delay
        assert_eq!(ctl.step(t, Signal::None), None);
        t += delay;
        assert_eq!(
            ctl.step(t, Signal::None),
            Some(PlaybackEvent::PuzzleFinished {
                id: "p1".to_string()
            })
        );
        assert_eq!(ctl.step(t, Signal::None), Some(PlaybackEvent::Finished));
        assert_eq!(ctl.step(t, Signal::None), None);
        assert_eq!(ctl.waits_in_puzzle(), 3);
    }

    #[test]
    fn test_final_move_held_until_deadline() {
        let delay = Duration::from_secs(1);
        let mut ctl = PlaybackController::new(
            vec![puzzle("p1", START, "e2e4"), puzzle("p2", START, "d2d4")],
            PlaybackConfig {
                step_delay: delay,
                annotated: false,
            },
        );
        let t0 = Instant::now();
        let t1 = t0 + delay;

        ctl.step(t0, Signal::None);
        ctl.step(t1, Signal::None);
        assert_eq!(ctl.step(t1, Signal::None), Some(PlaybackEvent::MoveApplied(mv("e2e4"))));
        assert!(ctl.is_paused());

        // same instant and just before the deadline: board untouched
        assert_eq!(ctl.step(t1, Signal::None), None);
        assert_eq!(ctl.step(t1 + delay / 2, Signal::None), None);
        assert_eq!(ctl.board().history(), vec![mv("e2e4")]);
        assert_eq!(ctl.progress(), (1, 2));

        assert!(matches!(
            ctl.step(t1 + delay, Signal::None),
            Some(PlaybackEvent::PuzzleFinished { .. })
        ));
        assert!(matches!(
            ctl.step(t1 + delay, Signal::None),
            Some(PlaybackEvent::PuzzleLoaded { index: 1, .. })
        ));
    }

    #[test]
    fn test_skip_and_quit_during_final_hold() {
        let config = PlaybackConfig {
            step_delay: Duration::from_secs(60),
            annotated: false,
        };
        let t0 = Instant::now();

        let mut skipped = PlaybackController::new(vec![puzzle("p1", START, "e2e4")], config);
        skipped.step(t0, Signal::None);
        skipped.step(t0, Signal::Skip);
        skipped.step(t0, Signal::None);
        assert!(matches!(skipped.state(), PlaybackState::Done(_)));
        assert!(matches!(
            skipped.step(t0, Signal::Skip),
            Some(PlaybackEvent::PuzzleFinished { .. })
        ));

        let mut quit = PlaybackController::new(vec![puzzle("p1", START, "e2e4")], config);
        quit.step(t0, Signal::None);
        quit.step(t0, Signal::Skip);
        quit.step(t0, Signal::None);
        assert_eq!(quit.step(t0, Signal::Quit), Some(PlaybackEvent::Quit));
        assert!(quit.is_finished());
        assert_eq!(quit.board().history(), vec![mv("e2e4")]);
    }

    #[test]
    fn test_pump_stops_at_redraws_and_pauses() {
        let delay = Duration::from_secs(1);
        let mut ctl = PlaybackController::new(
            vec![puzzle("p1", START, "e2e4 e7e5")],
            PlaybackConfig {
                step_delay: delay,
                annotated: false,
            },
        );
        let t0 = Instant::now();
        // a skip pressed before the first pause stays pending through the load
        let mut pending = Signal::Skip;

        assert_eq!(ctl.pump(t0, &mut pending), PumpOutcome::Redraw);
        assert!(ctl.board().history().is_empty());
        assert_eq!(pending, Signal::Skip);

        assert_eq!(ctl.pump(t0, &mut pending), PumpOutcome::Redraw);
        assert_eq!(pending, Signal::None);
        assert_eq!(ctl.board().history(), vec![mv("e2e4")]);

        assert_eq!(ctl.pump(t0, &mut pending), PumpOutcome::Wait);
        assert_eq!(ctl.pump(t0 + delay, &mut pending), PumpOutcome::Redraw);
        assert_eq!(ctl.board().history(), vec![mv("e2e4"), mv("e7e5")]);

        // final hold, then the end of the list
        assert_eq!(ctl.pump(t0 + delay, &mut pending), PumpOutcome::Wait);
        assert_eq!(ctl.pump(t0 + delay * 2, &mut pending), PumpOutcome::Stop);
        assert!(ctl.is_finished());
        assert_eq!(ctl.pump(t0 + delay * 3, &mut pending), PumpOutcome::Stop);
    }

    #[test]
    fn test_pump_quit_while_waiting() {
        let mut ctl = PlaybackController::new(
            vec![puzzle("p1", START, "e2e4 e7e5")],
            PlaybackConfig {
                step_delay: Duration::from_secs(60),
                annotated: false,
            },
        );
        let t0 = Instant::now();
        let mut pending = Signal::None;

        assert_eq!(ctl.pump(t0, &mut pending), PumpOutcome::Redraw);
        assert_eq!(ctl.pump(t0, &mut pending), PumpOutcome::Wait);

        pending = pending.merge(Signal::Skip).merge(Signal::Quit);
        assert_eq!(ctl.pump(t0, &mut pending), PumpOutcome::Stop);
        assert_eq!(pending, Signal::None);
        assert!(ctl.board().history().is_empty());
        assert!(ctl.is_finished());
    }

    #[test]
    fn test_quit_during_second_wait() {
        let mut ctl = PlaybackController::new(
            vec![
                puzzle("p1", START, "e2e4 e7e5 g1f3"),
                puzzle("p2", START, "d2d4"),
            ],
            PlaybackConfig {
                step_delay: Duration::from_secs(60),
                annotated: false,
            },
        );
        let mut signals = Scripted(VecDeque::from([Signal::Skip, Signal::Quit]));
        let mut sink = Recorder::default();

        let outcome = ctl.run(&mut signals, &mut sink);

        assert_eq!(outcome, RunOutcome::Quit);
        assert_eq!(ctl.board().history(), vec![mv("e2e4")]);
        assert_eq!(ctl.waits_in_puzzle(), 2);
        assert_eq!(ctl.progress(), (1, 2));
    }

    #[test]
    fn test_skip_cuts_wait_short() {
        let mut ctl = PlaybackController::new(
            vec![puzzle("p1", START, "e2e4")],
            PlaybackConfig {
                step_delay: Duration::from_secs(60),
                annotated: false,
            },
        );
        let t0 = Instant::now();
        ctl.step(t0, Signal::None);
        assert_eq!(ctl.step(t0, Signal::Skip), None);
        assert_eq!(ctl.step(t0, Signal::None), Some(PlaybackEvent::MoveApplied(mv("e2e4"))));
    }

    #[test]
    fn test_signals_ignored_outside_wait() {
        let mut ctl = PlaybackController::new(vec![puzzle("p1", START, "e2e4")], instant_config());
        let t0 = Instant::now();
        // quit while loading does nothing
        assert!(matches!(
            ctl.step(t0, Signal::Quit),
            Some(PlaybackEvent::PuzzleLoaded { .. })
        ));
        assert!(ctl.is_waiting());
    }

    #[test]
    fn test_rejected_line_aborts_puzzle_and_continues() {
        let mut ctl = PlaybackController::new(
            vec![
                puzzle("broken", START, "e2e4 e2e4"),
                puzzle("bad-fen", "8/8/8/8 w - - 0 1", "e2e4"),
                puzzle("good", START, "d2d4 d7d5"),
            ],
            instant_config(),
        );
        let t0 = Instant::now();
        let mut events = Vec::new();
        while !ctl.is_finished() {
            if let Some(event) = ctl.step(t0, Signal::None) {
                events.push(event);
            }
        }

        assert!(events.iter().any(|e| matches!(
            e,
            PlaybackEvent::PuzzleAborted { id, .. } if id == "broken"
        )));
        assert!(events.iter().any(|e| matches!(
            e,
            PlaybackEvent::PuzzleAborted { id, .. } if id == "bad-fen"
        )));
        assert!(events.contains(&PlaybackEvent::PuzzleFinished {
            id: "good".to_string()
        }));
        assert!(!events.contains(&PlaybackEvent::PuzzleFinished {
            id: "broken".to_string()
        }));
        assert_eq!(ctl.board().history(), vec![mv("d2d4"), mv("d7d5")]);
    }

    #[test]
    fn test_orientation_follows_first_mover() {
        let black_first = "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1";
        let mut ctl = PlaybackController::new(
            vec![puzzle("w", START, "e2e4"), puzzle("b", black_first, "e7e5")],
            instant_config(),
        );
        let t0 = Instant::now();

        ctl.step(t0, Signal::None);
        assert_eq!(ctl.orientation(), Orientation::WhiteBottom);

        while ctl.current_puzzle().map(|p| p.id.as_str()) != Some("b") {
            ctl.step(t0, Signal::None);
        }
        assert_eq!(ctl.orientation(), Orientation::BlackBottom);
        assert!(ctl.board().history().is_empty());
    }

    #[test]
    fn test_annotated_mode_tracks_last_move() {
        let mut annotated = PlaybackController::new(
            vec![puzzle("p1", START, "e2e4 e7e5")],
            PlaybackConfig {
                step_delay: Duration::ZERO,
                annotated: true,
            },
        );
        annotated.run(&mut NoSignals, &mut Recorder::default());
        assert_eq!(annotated.arrow(), Some(mv("e7e5")));
        assert_eq!(annotated.frame().arrow, Some(mv("e7e5")));

        let mut plain =
            PlaybackController::new(vec![puzzle("p1", START, "e2e4 e7e5")], instant_config());
        plain.run(&mut NoSignals, &mut Recorder::default());
        assert_eq!(plain.arrow(), None);
    }

    #[test]
    fn test_no_puzzles_finishes_immediately() {
        let mut ctl = PlaybackController::new(Vec::new(), instant_config());
        assert_eq!(ctl.run(&mut NoSignals, &mut Recorder::default()), RunOutcome::Completed);
        assert_eq!(ctl.progress(), (0, 0));
    }

    #[test]
    fn test_signal_merge_and_deadline() {
        assert_eq!(Signal::Skip.merge(Signal::Quit), Signal::Quit);
        assert_eq!(Signal::None.merge(Signal::Skip), Signal::Skip);
        assert_eq!(Signal::None.merge(Signal::None), Signal::None);

        let t0 = Instant::now();
        let deadline = Deadline::after(t0, Duration::from_millis(100));
        assert!(!deadline.has_elapsed_at(t0));
        assert!(deadline.has_elapsed_at(t0 + Duration::from_millis(100)));
        assert_eq!(deadline.remaining_at(t0), Duration::from_millis(100));
        assert!(Deadline::after(t0, Duration::ZERO).has_elapsed());
    }
}
