//! Isolation GUI
//!
//! Play Isolation against the engine or another player.

use std::path::PathBuf;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use isolation::config::{Algorithm, AppConfig, Deepening, HeuristicKind};
use isolation::ui::IsolationApp;

#[derive(Debug, Parser)]
#[command(name = "isolation", version, about = "Play Isolation against a search engine")]
struct Args {
    /// TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Board width (overrides the config file)
    #[arg(long)]
    width: Option<u8>,

    /// Board height (overrides the config file)
    #[arg(long)]
    height: Option<u8>,

    #[arg(long, value_enum)]
    heuristic: Option<HeuristicKind>,

    #[arg(long, value_enum)]
    algorithm: Option<Algorithm>,

    #[arg(long, value_enum)]
    deepening: Option<Deepening>,

    /// Engine time budget per turn in milliseconds
    #[arg(long)]
    turn_ms: Option<u64>,
}

impl Args {
    fn into_config(self) -> Result<AppConfig, isolation::ConfigError> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load(path)?,
            None => AppConfig::default(),
        };

        if let Some(width) = self.width {
            config.board.width = width;
        }
        if let Some(height) = self.height {
            config.board.height = height;
        }
        if let Some(heuristic) = self.heuristic {
            config.engine.heuristic = heuristic;
        }
        if let Some(algorithm) = self.algorithm {
            config.engine.algorithm = algorithm;
        }
        if let Some(deepening) = self.deepening {
            config.engine.deepening = deepening;
        }
        if let Some(turn_ms) = self.turn_ms {
            config.turn_time_ms = turn_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Args::parse().into_config()?;
    let initial = config.board.initial_state()?;
    info!(
        width = config.board.width,
        height = config.board.height,
        algorithm = ?config.engine.algorithm,
        heuristic = ?config.engine.heuristic,
        turn_ms = config.turn_time_ms,
        "starting isolation"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Isolation"),
        ..Default::default()
    };

    eframe::run_native(
        "Isolation",
        options,
        Box::new(move |cc| Ok(Box::new(IsolationApp::new(cc, config, initial)))),
    )?;
    Ok(())
}
