//! Search module for the Isolation engine
//!
//! Contains:
//! - Time sources the search polls for its deadline
//! - Plain minimax
//! - Alpha-beta pruning over the same tree
//! - The iterative deepening driver
//!
//! All searches score positions from the point of view of the player to
//! move at the root, and break ties in favour of the first move in
//! generation order, so minimax and alpha-beta pick the same move.
//!
//! # Example
//!
//! ```
//! use isolation::board::{GameState, Pos};
//! use isolation::eval::WeightedMobility;
//! use isolation::search::Searcher;
//!
//! let state = GameState::with_positions(5, 5, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
//! let mut searcher = Searcher::unbounded(&WeightedMobility);
//!
//! let result = searcher.alphabeta(&state, 3, f64::NEG_INFINITY, f64::INFINITY).unwrap();
//! assert!(result.best_move.is_some());
//! ```

pub mod alphabeta;
pub mod clock;
pub mod deepening;
pub mod minimax;

pub use clock::{Clock, Countdown, SteppedClock, Unlimited};
pub use deepening::{iterative_deepening, DeepeningResult};

use std::time::Duration;

use crate::board::{GameState, Player, Pos};
use crate::config::Algorithm;
use crate::error::SearchTimeout;
use crate::eval::Evaluator;

/// Search statistics for diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
    /// Nodes cut off by the depth limit while moves remained.
    /// Zero after a completed search means the whole game tree was seen.
    pub horizon_nodes: u64,
}

/// Search result containing the best move found
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Best move found, `None` at depth 0 or when no move exists
    pub best_move: Option<Pos>,
    /// Value of the position for the root player
    pub score: f64,
    /// Depth the search was run at
    pub depth: u32,
    /// Nodes visited by this call
    pub nodes: u64,
}

/// Shared search context: evaluation function, time source and counters.
///
/// `minimax` and `alphabeta` live in their own modules as `impl` blocks
/// on this type.
pub struct Searcher<'a> {
    evaluator: &'a dyn Evaluator,
    clock: &'a dyn Clock,
    /// Abort once less than this much time is left
    threshold: Duration,
    nodes: u64,
    stats: SearchStats,
}

static UNLIMITED: Unlimited = Unlimited;

impl<'a> Searcher<'a> {
    #[must_use]
    pub fn new(evaluator: &'a dyn Evaluator, clock: &'a dyn Clock, threshold: Duration) -> Self {
        Self {
            evaluator,
            clock,
            threshold,
            nodes: 0,
            stats: SearchStats::default(),
        }
    }

    /// Searcher that never runs out of time
    #[must_use]
    pub fn unbounded(evaluator: &'a dyn Evaluator) -> Self {
        Self::new(evaluator, &UNLIMITED, Duration::ZERO)
    }

    /// Nodes visited since construction or the last `reset_counters`
    #[must_use]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    #[must_use]
    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    pub fn reset_counters(&mut self) {
        self.nodes = 0;
        self.stats = SearchStats::default();
    }

    /// True when the deadline is within the safety threshold
    #[inline]
    pub fn out_of_time(&self) -> bool {
        self.clock.time_left() < self.threshold
    }

    #[inline]
    fn check_time(&self) -> Result<(), SearchTimeout> {
        if self.out_of_time() {
            Err(SearchTimeout)
        } else {
            Ok(())
        }
    }

    /// Evaluate a leaf. Counts it as a horizon node when the game goes on.
    #[inline]
    fn leaf(&mut self, state: &GameState, root: Player, at_horizon: bool) -> f64 {
        if at_horizon && !state.is_terminal() {
            self.stats.horizon_nodes += 1;
        }
        self.evaluator.score(state, root)
    }

    /// Run the configured algorithm with a full window
    pub fn search(
        &mut self,
        algorithm: Algorithm,
        state: &GameState,
        depth: u32,
    ) -> Result<SearchResult, SearchTimeout> {
        match algorithm {
            Algorithm::Minimax => self.minimax(state, depth),
            Algorithm::AlphaBeta => self.alphabeta(state, depth, f64::NEG_INFINITY, f64::INFINITY),
        }
    }
}

/// Running best at an interior node. Ties keep the earlier move.
struct Best {
    maximizing: bool,
    score: f64,
    mv: Option<Pos>,
}

impl Best {
    fn new(maximizing: bool) -> Self {
        Self {
            maximizing,
            score: if maximizing { f64::NEG_INFINITY } else { f64::INFINITY },
            mv: None,
        }
    }

    #[inline]
    fn offer(&mut self, score: f64, mv: Pos) {
        let better = if self.maximizing {
            score > self.score
        } else {
            score < self.score
        };
        if self.mv.is_none() || better {
            self.score = score;
            self.mv = Some(mv);
        }
    }
}
