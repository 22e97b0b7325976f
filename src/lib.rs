//! Isolation game engine
//!
//! Adversarial search for Isolation: two knights on a rectangular board,
//! every visited cell is blocked for good, and the player left without a
//! move loses.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Game state snapshots, bitboard occupancy and move generation
//! - [`eval`]: The `Evaluator` trait and its heuristics
//! - [`search`]: Minimax, alpha-beta and the iterative deepening driver
//! - [`engine`]: Per-turn facade choosing a move under a time budget
//! - [`config`]: TOML configuration
//! - [`ui`]: Desktop play window
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use isolation::{AIEngine, GameState};
//!
//! // 5x5 board, both players place their knight first
//! let mut state = GameState::new(5, 5).unwrap();
//! let engine = AIEngine::new();
//!
//! for _ in 0..4 {
//!     if let Some(mv) = engine.get_move(&state, Duration::from_millis(50)) {
//!         state = state.apply(mv).unwrap();
//!     }
//! }
//! println!("{state}");
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod search;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{GameState, Player, Pos};
pub use config::{AppConfig, EngineConfig};
pub use engine::{AIEngine, MoveResult, SearchType};
pub use error::{ConfigError, IsolationError};
