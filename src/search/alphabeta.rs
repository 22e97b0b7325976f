//! Alpha-beta pruning
//!
//! Minimax over the same tree with a `[alpha, beta]` window. Children
//! are visited in move-generation order without reordering, and cutoffs
//! are fail-soft, so with the full window the result (score and move)
//! matches `Searcher::minimax` exactly while visiting a subset of nodes.

use crate::board::{GameState, Player, Pos};
use crate::error::SearchTimeout;

use super::{Best, SearchResult, Searcher};

impl Searcher<'_> {
    /// Depth-limited minimax with alpha-beta pruning.
    ///
    /// Call with `alpha = f64::NEG_INFINITY, beta = f64::INFINITY` for the
    /// minimax value. Scores are from the active player's point of view.
    ///
    /// # Errors
    ///
    /// `SearchTimeout` when the clock runs below the threshold mid-search.
    pub fn alphabeta(
        &mut self,
        state: &GameState,
        depth: u32,
        alpha: f64,
        beta: f64,
    ) -> Result<SearchResult, SearchTimeout> {
        let start_nodes = self.nodes;
        let (score, best_move) = self.alphabeta_node(state, depth, alpha, beta, state.active())?;
        Ok(SearchResult {
            best_move,
            score,
            depth,
            nodes: self.nodes - start_nodes,
        })
    }

    fn alphabeta_node(
        &mut self,
        state: &GameState,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
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

        let maximizing = state.active() == root;
        let mut best = Best::new(maximizing);

        for mv in moves {
            self.check_time()?;
            let (score, _) =
                self.alphabeta_node(&state.forecast(mv), depth - 1, alpha, beta, root)?;
            best.offer(score, mv);

            if maximizing {
                alpha = alpha.max(best.score);
                if alpha >= beta {
                    // Beta cutoff
                    self.stats.cutoffs += 1;
                    break;
                }
            } else {
                beta = beta.min(best.score);
                if beta <= alpha {
                    // Alpha cutoff
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }

        Ok((best.score, best.mv))
    }
}
