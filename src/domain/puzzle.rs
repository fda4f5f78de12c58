//! Puzzle records loaded from a Lichess-style CSV file.
//!
//! Each row is `PuzzleId,FEN,Moves,Rating,RatingDeviation,Popularity,NbPlays,Themes,GameUrl[,OpeningTags]`.
//! A header row is optional. Rows that fail to parse are skipped with a
//! warning; they are never handed to the playback controller.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anyhow::{Context, bail};
use serde::Deserialize;
use shakmaty::Position;
use thiserror::Error;

use crate::domain::board::parse_fen;
use crate::domain::{BoardMove, ChessError, PieceColor};

const HEADER_ID: &str = "PuzzleId";

#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("unreadable record: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing field `{0}`")]
    MissingField(&'static str),

    #[error("invalid rating `{0}`")]
    InvalidRating(String),

    #[error(transparent)]
    Chess(#[from] ChessError),

    #[error("solution line is empty")]
    EmptySolution,
}

/// A row as it appears in the file, by position
#[derive(Debug, Deserialize)]
struct PuzzleRecord {
    id: String,
    fen: String,
    moves: String,
    rating: String,
    #[serde(default)]
    _rating_deviation: Option<String>,
    #[serde(default)]
    _popularity: Option<String>,
    #[serde(default)]
    _plays: Option<String>,
    #[serde(default)]
    themes: Option<String>,
    #[serde(default)]
    url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    pub id: String,
    pub fen: String,
    pub solution: Vec<BoardMove>,
    /// Side to move in `fen`, i.e. who plays the first solution move
    pub first_mover: PieceColor,
    pub rating: u32,
    pub url: String,
    pub themes: Vec<String>,
}

impl Puzzle {
    fn from_record(record: PuzzleRecord) -> Result<Self, PuzzleError> {
        let id = required(record.id, "PuzzleId")?;
        let fen = required(record.fen, "FEN")?;
        let moves = required(record.moves, "Moves")?;
        let rating_field = required(record.rating, "Rating")?;

        let position = parse_fen(&fen)?;
        let solution = moves
            .split_whitespace()
            .map(BoardMove::from_uci)
            .collect::<Result<Vec<_>, _>>()?;
        if solution.is_empty() {
            return Err(PuzzleError::EmptySolution);
        }
        let rating = rating_field
            .trim()
            .parse()
            .map_err(|_| PuzzleError::InvalidRating(rating_field.clone()))?;

        Ok(Self {
            id,
            fen,
            solution,
            first_mover: position.turn().into(),
            rating,
            url: record.url.unwrap_or_default().trim().to_string(),
            themes: record
                .themes
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
        })
    }
}

fn required(value: String, name: &'static str) -> Result<String, PuzzleError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(PuzzleError::MissingField(name))
    } else {
        Ok(trimmed.to_string())
    }
}

/// Parse every puzzle in file order, skipping malformed rows.
pub fn read_puzzles<R: Read>(reader: R) -> Vec<Puzzle> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut puzzles = Vec::new();
    for (index, result) in reader.records().enumerate() {
        let line = index + 1;
        let parsed = result.map_err(PuzzleError::from).and_then(|record| {
            if index == 0 && record.get(0) == Some(HEADER_ID) {
                return Ok(None);
            }
            let raw: PuzzleRecord = record.deserialize(None)?;
            Puzzle::from_record(raw).map(Some)
        });

        match parsed {
            Ok(Some(puzzle)) => puzzles.push(puzzle),
            Ok(None) => tracing::debug!("skipping header row"),
            Err(e) => tracing::warn!(line, error = %e, "skipping malformed puzzle record"),
        }
    }
    puzzles
}

/// Load puzzles from a CSV file. A file without a single usable puzzle is an error.
pub fn load_puzzles(path: &Path) -> anyhow::Result<Vec<Puzzle>> {
    let file = File::open(path)
        .with_context(|| format!("failed to open puzzle file {}", path.display()))?;
    let puzzles = read_puzzles(file);
    if puzzles.is_empty() {
        bail!("no valid puzzles in {}", path.display());
    }
    tracing::info!(count = puzzles.len(), path = %path.display(), "loaded puzzles");
    Ok(puzzles)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROWS: &str = "\
PuzzleId,FEN,Moves,Rating,RatingDeviation,Popularity,NbPlays,Themes,GameUrl,OpeningTags
00sHx,q3k1nr/1pp1nQpp/3p4/1P2p3/4P3/B1PP1b2/B5PP/5K2 b k - 0 17,e8d7 a2e6 d7d8 f7f8,1760,80,83,72,mate mateIn2 middlegame short,https://lichess.org/yyznGmXs/black#34,Italian_Game
00sJ9,r3r1k1/p4ppp/2p2n2/1p6/3P1qb1/2NQR3/PPB2PP1/R1B3K1 w - - 5 18,e3g3 e8e1 g1h2 e1c1 a1c1 f4h6 h2g1 h6c1,2671,105,87,325,advantage attraction fork middlegame sacrifice veryLong,https://lichess.org/gyFeQsOE#35,French_Defense
";

    #[test]
    fn test_reads_records_and_skips_header() {
        let puzzles = read_puzzles(ROWS.as_bytes());
        assert_eq!(puzzles.len(), 2);

        let first = &puzzles[0];
        assert_eq!(first.id, "00sHx");
        assert_eq!(first.first_mover, PieceColor::Black);
        assert_eq!(first.rating, 1760);
        assert_eq!(first.solution.len(), 4);
        assert_eq!(first.solution[0].to_string(), "e8d7");
        assert_eq!(first.url, "https://lichess.org/yyznGmXs/black#34");
        assert!(first.themes.contains(&"mateIn2".to_string()));

        assert_eq!(puzzles[1].first_mover, PieceColor::White);
        assert_eq!(puzzles[1].solution.len(), 8);
    }

    #[test]
    fn test_headerless_file() {
        let data = "abc,rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1,e2e4 e7e5 g1f3,1500,0,0,0,opening,https://example.org/1\n";
        let puzzles = read_puzzles(data.as_bytes());
        assert_eq!(puzzles.len(), 1);
        assert_eq!(puzzles[0].id, "abc");
    }

    #[test]
    fn test_malformed_records_are_skipped() {
        let data = "\
bad-fen,not a fen,e2e4,1500,0,0,0,x,https://example.org/a
bad-move,rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1,e2e4 zz99,1500,0,0,0,x,https://example.org/b
no-moves,rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1,,1500,0,0,0,x,https://example.org/c
bad-rating,rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1,e2e4,high,0,0,0,x,https://example.org/d
short,rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1
good,rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1,e2e4,1500,0,0,0,x,https://example.org/e
";
        let puzzles = read_puzzles(data.as_bytes());
        let ids: Vec<_> = puzzles.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["good"]);
    }

    #[test]
    fn test_load_missing_file_fails() {
        assert!(load_puzzles(Path::new("/nonexistent/puzzles.csv")).is_err());
    }
}
