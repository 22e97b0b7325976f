//! Configuration for the engine and the play window
//!
//! Loaded from TOML. Every field has a default, so an empty file (or no
//! file at all) gives a 7x7 placement game against an iterative
//! alpha-beta engine using weighted mobility.
//!
//! ```toml
//! turn_time_ms = 150
//!
//! [board]
//! width = 7
//! height = 7
//!
//! [engine]
//! algorithm = "alphabeta"
//! deepening = "iterative"
//! heuristic = "longest-path"
//! ```

use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::board::{GameState, Pos, DEFAULT_SIZE};
use crate::error::ConfigError;

/// Tree search algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Algorithm {
    #[serde(rename = "minimax")]
    #[value(name = "minimax")]
    Minimax,
    #[serde(rename = "alphabeta")]
    #[value(name = "alphabeta")]
    AlphaBeta,
}

/// How the search depth is chosen each turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Deepening {
    /// Single search at `search_depth`
    FixedDepth,
    /// Deepen one ply at a time until the deadline
    Iterative,
}

/// Position evaluation function
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    LongestPath,
    WeightedMobility,
    CenterDistance,
}

/// Longest path heuristic tuning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LongestPathConfig {
    /// Path search runs only below this many open cells
    pub late_game_blanks: u32,
    /// Longest path explored per player
    pub max_depth: u32,
}

impl Default for LongestPathConfig {
    fn default() -> Self {
        Self {
            late_game_blanks: 15,
            max_depth: 16,
        }
    }
}

/// Engine configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub algorithm: Algorithm,
    pub deepening: Deepening,
    pub heuristic: HeuristicKind,
    /// Depth for fixed-depth search
    pub search_depth: u32,
    /// Upper bound for iterative deepening
    pub max_depth: u32,
    /// Stop searching once less than this much time is left
    pub timer_threshold_ms: u64,
    pub longest_path: LongestPathConfig,
    /// Add the weighted mobility term to the center distance heuristic
    pub center_mobility: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::AlphaBeta,
            deepening: Deepening::Iterative,
            heuristic: HeuristicKind::WeightedMobility,
            search_depth: 3,
            max_depth: 64,
            timer_threshold_ms: 10,
            longest_path: LongestPathConfig::default(),
            center_mobility: true,
        }
    }
}

impl EngineConfig {
    /// Check values that deserialize fine but cannot drive a search
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search_depth == 0 {
            return Err(ConfigError::Invalid("engine.search_depth must be at least 1".into()));
        }
        if self.max_depth == 0 {
            return Err(ConfigError::Invalid("engine.max_depth must be at least 1".into()));
        }
        Ok(())
    }
}

/// Board size and starting cells
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub width: u8,
    pub height: u8,
    /// Fixed start for player one; both starts unset means a placement opening
    pub start_one: Option<Pos>,
    pub start_two: Option<Pos>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            start_one: None,
            start_two: None,
        }
    }
}

impl BoardConfig {
    /// Build the opening position described by this config
    pub fn initial_state(&self) -> Result<GameState, ConfigError> {
        match (self.start_one, self.start_two) {
            (None, None) => Ok(GameState::new(self.width, self.height)?),
            (Some(one), Some(two)) => {
                Ok(GameState::with_positions(self.width, self.height, one, two)?)
            }
            _ => Err(ConfigError::Invalid(
                "board.start_one and board.start_two must be set together".into(),
            )),
        }
    }
}

/// Top-level configuration of the play window
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub engine: EngineConfig,
    /// Wall-clock budget per engine turn
    pub turn_time_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            engine: EngineConfig::default(),
            turn_time_ms: 150,
        }
    }
}

impl AppConfig {
    /// Read and validate a TOML config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()?;
        self.board.initial_state()?;
        if self.turn_time_ms <= self.engine.timer_threshold_ms {
            return Err(ConfigError::Invalid(format!(
                "turn_time_ms ({}) must exceed engine.timer_threshold_ms ({})",
                self.turn_time_ms, self.engine.timer_threshold_ms
            )));
        }
        Ok(())
    }
}
