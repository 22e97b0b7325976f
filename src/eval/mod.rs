//! Position evaluation for Isolation
//!
//! Contains:
//! - The `Evaluator` capability shared by every heuristic
//! - Weighted mobility, center distance and longest path heuristics
//! - Knight-path helpers used by the longest path heuristic

pub mod heuristic;
pub mod paths;

pub use heuristic::{CenterDistance, LongestPath, WeightedMobility};
pub use paths::longest_path;

use crate::board::{GameState, Player};
use crate::config::{EngineConfig, HeuristicKind};

/// Score of a decided game. Larger than any heuristic value can reach on
/// a 384-cell board, so search always prefers a forced win over noise.
pub const WIN_SCORE: f64 = 1.0e12;

/// Position evaluation function.
///
/// `score` must be deterministic, finite and defined for every state,
/// terminal or not. Higher is better for `perspective`.
pub trait Evaluator: Send + Sync {
    fn score(&self, state: &GameState, perspective: Player) -> f64;

    /// Short name for logs and the debug panel
    fn name(&self) -> &'static str;
}

/// Score of a finished game from `perspective`, `None` while play continues.
#[inline]
pub fn terminal_score(state: &GameState, perspective: Player) -> Option<f64> {
    state.winner().map(|winner| {
        if winner == perspective {
            WIN_SCORE
        } else {
            -WIN_SCORE
        }
    })
}

/// Build the evaluator selected by the engine configuration
#[must_use]
pub fn build_evaluator(config: &EngineConfig) -> Box<dyn Evaluator> {
    match config.heuristic {
        HeuristicKind::LongestPath => Box::new(LongestPath {
            late_game_blanks: config.longest_path.late_game_blanks,
            max_depth: config.longest_path.max_depth,
        }),
        HeuristicKind::WeightedMobility => Box::new(WeightedMobility),
        HeuristicKind::CenterDistance => Box::new(CenterDistance {
            with_mobility: config.center_mobility,
        }),
    }
}
