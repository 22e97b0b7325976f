//! Depth-limited minimax

use crate::board::{GameState, Player, Pos};
use crate::error::SearchTimeout;

use super::{Best, SearchResult, Searcher};

impl Searcher<'_> {
    /// Exhaustive fixed-depth minimax from the active player's point of view.
    ///
    /// Returns `best_move: None` when `depth == 0` or the active player has
    /// no legal move; the score is then the evaluation of `state` itself.
    ///
    /// # Errors
    ///
    /// `SearchTimeout` when the clock runs below the threshold mid-search.
    pub fn minimax(&mut self, state: &GameState, depth: u32) -> Result<SearchResult, SearchTimeout> {
        let start_nodes = self.nodes;
        let (score, best_move) = self.minimax_node(state, depth, state.active())?;
        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes - start_nodes,
        })
    }

    fn minimax_node(
        &mut self,
        state: &GameState,
        depth: u32,
        root: Player,
    ) -> Result<(f64, Option<Pos>), SearchTimeout> {
        self.check_time()?;
        self.nodes += 1;

        if depth == 0 {
            return Ok((self.leaf(state, root, true), None));
        }

        let moves = state.legal_moves();
        if moves.is_empty() {
            return Ok((self.leaf(state, root, false), None));
        }

        let mut best = Best::new(state.active() == root);
        for mv in moves {
            self.check_time()?;
            let (score, _) = self.minimax_node(&state.forecast(mv), depth - 1, root)?;
            best.offer(score, mv);
        }

        Ok((best.score, best.mv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::{Evaluator, WeightedMobility, WIN_SCORE};
    use crate::search::SteppedClock;
    use std::time::Duration;

    #[test]
    fn test_depth_zero_returns_evaluation() {
        let state = GameState::with_positions(5, 5, Pos::new(0, 2), Pos::new(0, 0)).unwrap();
        let mut searcher = Searcher::unbounded(&WeightedMobility);

        let result = searcher.minimax(&state, 0).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, 0.0);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_finds_immediate_win() {
        // Two sits on the dead centre of 3x3; any move by One ends the game
        let state = GameState::with_positions(3, 3, Pos::new(0, 0), Pos::new(1, 1)).unwrap();
        let mut searcher = Searcher::unbounded(&WeightedMobility);

        let result = searcher.minimax(&state, 1).unwrap();
        // Both moves win; first in generation order is kept
        assert_eq!(result.best_move, Some(Pos::new(1, 2)));
        assert_eq!(result.score, WIN_SCORE);
    }

    #[test]
    fn test_terminal_state_has_no_move() {
        let state = GameState::with_positions(3, 3, Pos::new(0, 0), Pos::new(1, 1)).unwrap();
        let finished = state.apply(Pos::new(2, 1)).unwrap();
        let mut searcher = Searcher::unbounded(&WeightedMobility);

        let result = searcher.minimax(&finished, 4).unwrap();
        assert_eq!(result.best_move, None);
        assert_eq!(result.score, -WIN_SCORE);
        assert_eq!(result.nodes, 1);
    }

    #[test]
    fn test_matches_two_ply_definition() {
        let state = GameState::with_positions(5, 5, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
        let eval = WeightedMobility;

        let mut expected: Option<(f64, Pos)> = None;
        for mv in state.legal_moves() {
            let child = state.apply(mv).unwrap();
            let replies = child.legal_moves();
            let value = if replies.is_empty() {
                eval.score(&child, Player::One)
            } else {
                replies
                    .iter()
                    .map(|&reply| eval.score(&child.apply(reply).unwrap(), Player::One))
                    .fold(f64::INFINITY, f64::min)
            };
            if expected.map_or(true, |(best, _)| value > best) {
                expected = Some((value, mv));
            }
        }

        let mut searcher = Searcher::unbounded(&eval);
        let result = searcher.minimax(&state, 2).unwrap();
        let (score, mv) = expected.unwrap();
        assert_eq!(result.best_move, Some(mv));
        assert_eq!(result.score, score);
    }

    #[test]
    fn test_timeout_propagates() {
        let state = GameState::with_positions(7, 7, Pos::new(3, 3), Pos::new(0, 0)).unwrap();
        let clock = SteppedClock::new(Duration::from_millis(20), Duration::from_millis(1));
        let mut searcher = Searcher::new(&WeightedMobility, &clock, Duration::from_millis(10));

        assert_eq!(searcher.minimax(&state, 6), Err(SearchTimeout));
        // Polling stopped right at the threshold
        assert_eq!(clock.polls(), 12);
    }

    #[test]
    fn test_node_count_depth_one() {
        let state = GameState::with_positions(7, 7, Pos::new(3, 3), Pos::new(0, 0)).unwrap();
        let mut searcher = Searcher::unbounded(&WeightedMobility);
        let result = searcher.minimax(&state, 1).unwrap();
        // Root plus eight children
        assert_eq!(result.nodes, 9);
        assert_eq!(searcher.stats().horizon_nodes, 8);
    }
}
