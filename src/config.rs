//! Command line options and the session configuration built from them.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Result, bail};
use clap::{Parser, ValueEnum};

use crate::domain::Orientation;
use crate::models::PlaybackConfig;

/// Chessboard with click-to-move play and timed replay of Lichess puzzles.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Replay the puzzles in this Lichess CSV file instead of starting a free game.
    #[arg(long, value_name = "CSV")]
    pub puzzles: Option<PathBuf>,

    /// Draw an arrow for every replayed move.
    #[arg(long, default_value_t = false)]
    pub annotate: bool,

    /// Side shown at the bottom in interactive play.
    ///
    /// Replay always puts the side to move first at the bottom.
    #[arg(long, value_enum, default_value_t = Side::White)]
    pub orientation: Side,

    /// Pause between replayed moves, in milliseconds.
    #[arg(long, value_name = "MS", default_value_t = 1000)]
    pub step_delay_ms: u64,

    /// Replay in the terminal without opening a window.
    #[arg(long, default_value_t = false, requires = "puzzles")]
    pub headless: bool,

    /// Directory containing `assets/<piece>-<color>.svg`.
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Side {
    White,
    Black,
}

impl From<Side> for Orientation {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Orientation::WhiteBottom,
            Side::Black => Orientation::BlackBottom,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Mode {
    Play {
        orientation: Orientation,
    },
    Replay {
        puzzles: PathBuf,
        playback: PlaybackConfig,
        headless: bool,
    },
}

/// Validated options, built once at startup and passed down
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionConfig {
    pub mode: Mode,
    pub assets: Option<PathBuf>,
}

impl SessionConfig {
    pub fn from_cli(cli: Cli) -> Result<Self> {
        let mode = match cli.puzzles {
            Some(puzzles) => Mode::Replay {
                puzzles,
                playback: PlaybackConfig {
                    step_delay: Duration::from_millis(cli.step_delay_ms),
                    annotated: cli.annotate,
                },
                headless: cli.headless,
            },
            None => {
                if cli.annotate {
                    bail!("--annotate needs --puzzles");
                }
                if cli.headless {
                    bail!("--headless needs --puzzles");
                }
                Mode::Play {
                    orientation: cli.orientation.into(),
                }
            }
        };

        Ok(Self {
            mode,
            assets: cli.assets,
        })
    }
}
