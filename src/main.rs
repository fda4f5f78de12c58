mod app;
mod config;
mod domain;
mod headless;
mod models;
mod ui;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gpui::{App, Application};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::{Cli, Mode, SessionConfig};
use crate::domain::load_puzzles;
use crate::models::GameModel;
use crate::ui::FileAssets;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("puzzle_board=info")),
        )
        .init();

    let config = SessionConfig::from_cli(Cli::parse())?;

    match config.mode {
        Mode::Replay {
            puzzles,
            playback,
            headless: true,
        } => {
            let outcome = headless::run(&puzzles, playback)?;
            tracing::info!(?outcome, "headless replay over");
            Ok(())
        }
        mode => run_window(mode, config.assets),
    }
}

fn run_window(mode: Mode, assets_dir: Option<PathBuf>) -> Result<()> {
    let assets = match assets_dir {
        Some(dir) => FileAssets::with_base(dir),
        None => FileAssets::new(),
    };
    assets.verify_pieces()?;

    let game = match mode {
        Mode::Play { orientation } => {
            tracing::info!(?orientation, "starting interactive play");
            GameModel::play(orientation)
        }
        Mode::Replay {
            puzzles, playback, ..
        } => {
            let puzzles = load_puzzles(&puzzles)?;
            tracing::info!(
                count = puzzles.len(),
                annotated = playback.annotated,
                "starting replay"
            );
            GameModel::replay(puzzles, playback)
        }
    };

    Application::new()
        .with_assets(assets)
        .run(move |cx: &mut App| {
            if let Err(e) = app::run(game, cx) {
                tracing::error!(error = %e, "failed to open window");
                cx.quit();
            }
        });
    Ok(())
}
