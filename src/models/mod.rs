//! Application layer: the controllers that mutate a board and the session
//! model that hosts them in the window.

pub mod frame;
pub mod game;
pub mod interaction;
pub mod playback;

pub use frame::{BoardFrame, FrameSink};
pub use game::GameModel;
pub use interaction::{InteractionController, InteractionOutcome};
pub use playback::{NoSignals, PlaybackConfig, PlaybackController, RunOutcome};
