//! Heuristic evaluation functions for Isolation positions
//!
//! Every heuristic first checks for a decided game and returns
//! `±WIN_SCORE`, so the search resolves forced wins and losses the same
//! way whichever heuristic is configured.

use crate::board::{GameState, Player};

use super::paths::longest_path;
use super::{terminal_score, Evaluator};

/// Opponent moves count double
const OPPONENT_MOBILITY_WEIGHT: f64 = 2.0;

#[inline]
fn weighted_mobility(state: &GameState, perspective: Player) -> f64 {
    let own = state.mobility(perspective) as f64;
    let opp = state.mobility(perspective.opponent()) as f64;
    own - OPPONENT_MOBILITY_WEIGHT * opp
}

/// `own moves - 2 * opponent moves`.
///
/// Cheapest to compute and the strongest of the three in practice.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeightedMobility;

impl Evaluator for WeightedMobility {
    fn score(&self, state: &GameState, perspective: Player) -> f64 {
        if let Some(score) = terminal_score(state, perspective) {
            return score;
        }
        weighted_mobility(state, perspective)
    }

    fn name(&self) -> &'static str {
        "weighted-mobility"
    }
}

/// Rewards staying near the middle of the board.
///
/// Without mobility the score is the negated squared distance to the
/// geometric centre. With mobility it becomes
/// `(own - 2 * opp - dist²) * open_cells`, so positional terms weigh more
/// early in the game when many cells are still open.
#[derive(Debug, Clone, Copy)]
pub struct CenterDistance {
    pub with_mobility: bool,
}

impl CenterDistance {
    /// Squared Euclidean distance from `player` to the board centre.
    /// An unplaced player counts as centred.
    fn center_distance(state: &GameState, player: Player) -> f64 {
        let Some(pos) = state.position(player) else {
            return 0.0;
        };
        let center_row = (f64::from(state.height()) - 1.0) / 2.0;
        let center_col = (f64::from(state.width()) - 1.0) / 2.0;
        let dr = f64::from(pos.row) - center_row;
        let dc = f64::from(pos.col) - center_col;
        dr * dr + dc * dc
    }
}

impl Evaluator for CenterDistance {
    fn score(&self, state: &GameState, perspective: Player) -> f64 {
        if let Some(score) = terminal_score(state, perspective) {
            return score;
        }

        let dist = Self::center_distance(state, perspective);
        if !self.with_mobility {
            return -dist;
        }

        let phase = state.blank_count() as f64;
        (weighted_mobility(state, perspective) - dist) * phase
    }

    fn name(&self) -> &'static str {
        "center-distance"
    }
}

/// Compares how long each player could keep moving on their own.
///
/// Exhaustive path search is only affordable late in the game, so while
/// `late_game_blanks` or more cells are open (or a player is not placed
/// yet) this falls back to weighted mobility.
#[derive(Debug, Clone, Copy)]
pub struct LongestPath {
    /// Switch to path search below this many open cells
    pub late_game_blanks: u32,
    /// Cap on the path length explored per player
    pub max_depth: u32,
}

impl Default for LongestPath {
    fn default() -> Self {
        Self {
            late_game_blanks: 15,
            max_depth: 16,
        }
    }
}

impl Evaluator for LongestPath {
    fn score(&self, state: &GameState, perspective: Player) -> f64 {
        if let Some(score) = terminal_score(state, perspective) {
            return score;
        }

        let opponent = perspective.opponent();
        let late_game = state.blank_count() < self.late_game_blanks as usize;
        match (state.position(perspective), state.position(opponent)) {
            (Some(own_pos), Some(opp_pos)) if late_game => {
                let own = longest_path(state, own_pos, self.max_depth);
                let opp = longest_path(state, opp_pos, self.max_depth);
                f64::from(own) - f64::from(opp)
            }
            _ => weighted_mobility(state, perspective),
        }
    }

    fn name(&self) -> &'static str {
        "longest-path"
    }
}
