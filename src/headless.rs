//! Terminal replay: draws every frame as a text diagram.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use anyhow::Result;

use crate::domain::{load_puzzles, square_at_cell};
use crate::models::{
    BoardFrame, FrameSink, NoSignals, PlaybackConfig, PlaybackController, RunOutcome,
};

const FILES: [char; 8] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

/// 8x8 diagram with coordinates, seen from the frame's orientation
pub fn render_text(frame: &BoardFrame<'_>) -> String {
    let flipped = frame.orientation.is_flipped();
    let files: String = if flipped {
        FILES.iter().rev().map(|f| format!(" {f}")).collect()
    } else {
        FILES.iter().map(|f| format!(" {f}")).collect()
    };

    let mut out = String::new();
    let _ = writeln!(out, " {files}");
    for row in 0..8 {
        let rank = if flipped { row + 1 } else { 8 - row };
        let _ = write!(out, "{rank}");
        for col in 0..8 {
            let symbol = square_at_cell(row, col, frame.orientation)
                .and_then(|sq| frame.board.piece_at(sq))
                .map_or('.', |p| p.symbol());
            let _ = write!(out, " {symbol}");
        }
        let _ = writeln!(out, " {rank}");
    }
    let _ = writeln!(out, " {files}");

    match (frame.last_move(), frame.notation().last()) {
        (Some(mv), Some(played)) => {
            let _ = writeln!(out, "last move: {mv} ({})", played.san);
        }
        _ => {
            let _ = writeln!(out, "{} to move", frame.board.turn().name());
        }
    }
    out
}

/// Writes each frame to any `io::Write`
pub struct TextRenderer<W: Write> {
    out: W,
}

impl<W: Write> TextRenderer<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TextRenderer<W> {
    fn draw(&mut self, frame: &BoardFrame<'_>) {
        let text = render_text(frame);
        if let Err(e) = writeln!(self.out, "{text}").and_then(|_| self.out.flush()) {
            tracing::warn!(error = %e, "failed to write board");
        }
    }
}

/// Replay the puzzle file on stdout without interruption
pub fn run(puzzles: &Path, config: PlaybackConfig) -> Result<RunOutcome> {
    let puzzles = load_puzzles(puzzles)?;
    let mut controller = PlaybackController::new(puzzles, config);
    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock());
    Ok(controller.run(&mut NoSignals, &mut renderer))
}
