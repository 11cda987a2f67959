//! Gomoku GUI
//!
//! Play five in a row against the computer.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use gomoku::ui::GomokuApp;
use gomoku::{AppConfig, GameState};

#[derive(Parser, Debug)]
#[command(name = "gomoku", about = "Five in a row against the computer")]
struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "gomoku.toml")]
    config: PathBuf,

    /// Board size, overrides the config file
    #[arg(long)]
    size: Option<usize>,

    /// Stones in a row needed to win, overrides the config file
    #[arg(long)]
    run_length: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(size) = cli.size {
        config.board.size = size;
    }
    if let Some(run_length) = cli.run_length {
        config.board.run_length = run_length;
    }

    let game = GameState::from_config(&config).context("invalid configuration")?;
    info!(
        size = config.board.size,
        run_length = config.board.run_length,
        lines = game.catalog().len(),
        "starting game"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, game)))),
    )
    .map_err(|e| anyhow::anyhow!("{e}"))
}
