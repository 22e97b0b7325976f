//! Engine facade: one call per turn
//!
//! `AIEngine` combines the configured evaluator, search algorithm and
//! deepening mode behind `get_move`. Whatever happens inside the search,
//! a non-terminal position always yields a legal move.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use isolation::{AIEngine, GameState, Pos};
//!
//! let engine = AIEngine::new();
//! let state = GameState::with_positions(5, 5, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
//!
//! let mv = engine.get_move(&state, Duration::from_millis(100));
//! assert!(mv.is_some_and(|mv| state.is_legal(mv)));
//! ```

use std::time::{Duration, Instant};

use tracing::{info, warn};

use crate::board::{GameState, Pos};
use crate::config::{Algorithm, Deepening, EngineConfig};
use crate::eval::{build_evaluator, Evaluator};
use crate::search::{iterative_deepening, Clock, Countdown, SearchResult, Searcher};

/// What produced the returned move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchType {
    Minimax,
    AlphaBeta,
    /// No search completed in time; first legal move
    Fallback,
}

impl From<Algorithm> for SearchType {
    fn from(algorithm: Algorithm) -> Self {
        match algorithm {
            Algorithm::Minimax => SearchType::Minimax,
            Algorithm::AlphaBeta => SearchType::AlphaBeta,
        }
    }
}

/// Result of a move search with statistics for the debug panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    /// Move to play, `None` only when the side to move is already lost
    pub best_move: Option<Pos>,
    /// Value of the position for the side to move
    pub score: f64,
    pub search_type: SearchType,
    /// Deepest completed search depth
    pub depth: u32,
    pub nodes: u64,
    pub time_ms: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, search_type: SearchType, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            search_type,
            depth: result.depth,
            nodes: result.nodes,
            time_ms,
        }
    }

    #[inline]
    fn fallback(pos: Option<Pos>, nodes: u64, time_ms: u64) -> Self {
        Self {
            best_move: pos,
            score: 0.0,
            search_type: SearchType::Fallback,
            depth: 0,
            nodes,
            time_ms,
        }
    }
}

/// Isolation AI engine.
///
/// Holds the configuration and the evaluator built from it. The engine
/// keeps no state between turns, so one instance can serve both sides.
pub struct AIEngine {
    config: EngineConfig,
    evaluator: Box<dyn Evaluator>,
}

impl AIEngine {
    /// Engine with the default configuration: iterative alpha-beta over
    /// weighted mobility.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            evaluator: build_evaluator(&config),
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Name of the active heuristic
    #[must_use]
    pub fn evaluator_name(&self) -> &'static str {
        self.evaluator.name()
    }

    /// Choose a move with `time_left` on the wall clock.
    ///
    /// Returns `None` only when the active player has no legal move.
    #[must_use]
    pub fn get_move(&self, state: &GameState, time_left: Duration) -> Option<Pos> {
        self.get_move_with_stats(state, time_left).best_move
    }

    /// Like `get_move`, with search statistics
    #[must_use]
    pub fn get_move_with_stats(&self, state: &GameState, time_left: Duration) -> MoveResult {
        let clock = Countdown::new(time_left);
        self.get_move_with_clock(state, &clock)
    }

    /// Choose a move against an arbitrary time source
    #[must_use]
    pub fn get_move_with_clock(&self, state: &GameState, clock: &dyn Clock) -> MoveResult {
        let start = Instant::now();
        let threshold = Duration::from_millis(self.config.timer_threshold_ms);
        let mut searcher = Searcher::new(self.evaluator.as_ref(), clock, threshold);
        let search_type = SearchType::from(self.config.algorithm);

        let result = match self.config.deepening {
            Deepening::FixedDepth => self.fixed_depth(&mut searcher, state, start),
            Deepening::Iterative => {
                let run = iterative_deepening(
                    &mut searcher,
                    state,
                    self.config.algorithm,
                    self.config.max_depth,
                );
                let time_ms = start.elapsed().as_millis() as u64;
                if run.depth == 0 && run.best_move.is_some() {
                    MoveResult::fallback(run.best_move, run.nodes, time_ms)
                } else {
                    MoveResult {
                        best_move: run.best_move,
                        score: run.score,
                        search_type,
                        depth: run.depth,
                        nodes: run.nodes,
                        time_ms,
                    }
                }
            }
        };

        match result.best_move {
            Some(mv) if result.search_type == SearchType::Fallback => {
                warn!(%mv, nodes = result.nodes, "deadline hit before depth 1, playing first legal move");
            }
            Some(mv) => {
                info!(
                    %mv,
                    score = result.score,
                    depth = result.depth,
                    nodes = result.nodes,
                    time_ms = result.time_ms,
                    heuristic = self.evaluator.name(),
                    "engine move"
                );
            }
            None => info!(player = %state.active(), "no legal move"),
        }

        result
    }

    fn fixed_depth(&self, searcher: &mut Searcher<'_>, state: &GameState, start: Instant) -> MoveResult {
        let search_type = SearchType::from(self.config.algorithm);
        let fallback = state.legal_moves().first().copied();

        match searcher.search(self.config.algorithm, state, self.config.search_depth) {
            Ok(result) => {
                let mut result =
                    MoveResult::from_search(result, search_type, start.elapsed().as_millis() as u64);
                result.best_move = result.best_move.or(fallback);
                result
            }
            Err(_) => MoveResult::fallback(
                fallback,
                searcher.nodes(),
                start.elapsed().as_millis() as u64,
            ),
        }
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeuristicKind;
    use crate::eval::WIN_SCORE;
    use crate::search::{SteppedClock, Unlimited};

    fn fixed(algorithm: Algorithm, depth: u32) -> EngineConfig {
        EngineConfig {
            algorithm,
            deepening: Deepening::FixedDepth,
            search_depth: depth,
            ..EngineConfig::default()
        }
    }

    #[test]
    fn test_engine_default() {
        let engine = AIEngine::default();
        assert_eq!(*engine.config(), EngineConfig::default());
        assert_eq!(engine.evaluator_name(), "weighted-mobility");
    }

    #[test]
    fn test_heuristic_from_config() {
        let engine = AIEngine::with_config(EngineConfig {
            heuristic: HeuristicKind::LongestPath,
            ..EngineConfig::default()
        });
        assert_eq!(engine.evaluator_name(), "longest-path");
    }

    #[test]
    fn test_engine_finds_immediate_win() {
        let state = GameState::with_positions(3, 3, Pos::new(0, 0), Pos::new(1, 1)).unwrap();
        let engine = AIEngine::new();

        let result = engine.get_move_with_clock(&state, &Unlimited);
        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
        assert_eq!(result.score, WIN_SCORE);
        assert_eq!(result.search_type, SearchType::AlphaBeta);
    }

    #[test]
    fn test_no_move_when_lost() {
        let state = GameState::with_positions(3, 3, Pos::new(0, 0), Pos::new(1, 1)).unwrap();
        let finished = state.apply(Pos::new(1, 2)).unwrap();

        for deepening in [Deepening::FixedDepth, Deepening::Iterative] {
            let engine = AIEngine::with_config(EngineConfig {
                deepening,
                ..EngineConfig::default()
            });
            assert_eq!(engine.get_move(&finished, Duration::from_secs(1)), None);
        }
    }

    #[test]
    fn test_expired_clock_falls_back() {
        let state = GameState::with_positions(7, 7, Pos::new(3, 3), Pos::new(0, 0)).unwrap();
        let first = state.legal_moves()[0];

        for config in [EngineConfig::default(), fixed(Algorithm::Minimax, 3)] {
            let engine = AIEngine::with_config(config);
            let clock = SteppedClock::new(Duration::from_millis(5), Duration::from_millis(1));
            let result = engine.get_move_with_clock(&state, &clock);
            assert_eq!(result.best_move, Some(first));
            assert_eq!(result.search_type, SearchType::Fallback);
            assert_eq!(result.depth, 0);
        }
    }

    #[test]
    fn test_fixed_depth_matches_direct_search() {
        let state = GameState::with_positions(5, 5, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
        let engine = AIEngine::with_config(fixed(Algorithm::Minimax, 3));

        let result = engine.get_move_with_clock(&state, &Unlimited);
        let mut searcher = Searcher::unbounded(&crate::eval::WeightedMobility);
        let expected = searcher.minimax(&state, 3).unwrap();

        assert_eq!(result.best_move, expected.best_move);
        assert_eq!(result.score, expected.score);
        assert_eq!(result.depth, 3);
        assert_eq!(result.nodes, expected.nodes);
        assert_eq!(result.search_type, SearchType::Minimax);
    }

    #[test]
    fn test_placement_opening_move_is_legal() {
        let state = GameState::new(5, 5).unwrap();
        let engine = AIEngine::with_config(fixed(Algorithm::AlphaBeta, 2));

        let mv = engine.get_move(&state, Duration::from_secs(5)).unwrap();
        assert!(state.is_legal(mv));
    }

    #[test]
    fn test_wall_clock_budget_respected() {
        let state = GameState::with_positions(7, 7, Pos::new(3, 3), Pos::new(0, 0)).unwrap();
        let engine = AIEngine::new();

        let start = Instant::now();
        let result = engine.get_move_with_stats(&state, Duration::from_millis(100));
        assert!(start.elapsed() < Duration::from_millis(150));
        assert!(result.best_move.is_some_and(|mv| state.is_legal(mv)));
        assert!(result.depth >= 1);
    }

    #[test]
    fn test_engine_plays_full_game() {
        let engine = AIEngine::with_config(fixed(Algorithm::AlphaBeta, 2));
        let mut state = GameState::new(4, 4).unwrap();

        while !state.is_terminal() {
            let mv = engine.get_move(&state, Duration::from_secs(5)).unwrap();
            state = state.apply(mv).unwrap();
        }
        assert!(state.winner().is_some());
        assert_eq!(engine.get_move(&state, Duration::from_secs(5)), None);
    }
}
