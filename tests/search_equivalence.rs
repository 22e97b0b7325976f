//! Minimax and alpha-beta must agree on every position: same score and
//! same move, with alpha-beta never visiting more nodes.

use isolation::eval::{CenterDistance, Evaluator, LongestPath, WeightedMobility};
use isolation::search::Searcher;
use isolation::{GameState, Pos};
use proptest::prelude::*;

/// Random playout: both knights placed, then up to `plies` random moves
fn playout(width: u8, height: u8, choices: &[u8]) -> GameState {
    let mut state = GameState::new(width, height).unwrap();
    for &choice in choices {
        let moves = state.legal_moves();
        if moves.is_empty() {
            break;
        }
        let mv = moves[usize::from(choice) % moves.len()];
        state = state.apply(mv).unwrap();
    }
    state
}

fn evaluator(kind: u8) -> Box<dyn Evaluator> {
    match kind % 4 {
        0 => Box::new(WeightedMobility),
        1 => Box::new(CenterDistance { with_mobility: true }),
        2 => Box::new(CenterDistance { with_mobility: false }),
        _ => Box::new(LongestPath::default()),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn alphabeta_equals_minimax(
        width in 3u8..=6,
        height in 3u8..=6,
        choices in prop::collection::vec(any::<u8>(), 2..12),
        depth in 0u32..=4,
        kind in any::<u8>(),
    ) {
        let state = playout(width, height, &choices);
        let eval = evaluator(kind);

        let mut mm = Searcher::unbounded(eval.as_ref());
        let mut ab = Searcher::unbounded(eval.as_ref());
        let expected = mm.minimax(&state, depth).unwrap();
        let got = ab.alphabeta(&state, depth, f64::NEG_INFINITY, f64::INFINITY).unwrap();

        prop_assert_eq!(got.best_move, expected.best_move, "{}\n{}", eval.name(), state);
        prop_assert_eq!(got.score, expected.score);
        prop_assert!(got.nodes <= expected.nodes);
    }

    #[test]
    fn search_move_is_legal(
        width in 3u8..=7,
        height in 3u8..=7,
        choices in prop::collection::vec(any::<u8>(), 2..20),
        depth in 1u32..=3,
    ) {
        let state = playout(width, height, &choices);
        let mut searcher = Searcher::unbounded(&WeightedMobility);
        let result = searcher.alphabeta(&state, depth, f64::NEG_INFINITY, f64::INFINITY).unwrap();

        match result.best_move {
            Some(mv) => prop_assert!(state.is_legal(mv)),
            None => prop_assert!(state.is_terminal()),
        }
    }
}

#[test]
fn alphabeta_nodes_grow_with_depth() {
    let state = GameState::with_positions(7, 7, Pos::new(2, 3), Pos::new(4, 3)).unwrap();
    let mut previous = 0;

    for depth in 1..=4 {
        let mut searcher = Searcher::unbounded(&WeightedMobility);
        let result = searcher.alphabeta(&state, depth, f64::NEG_INFINITY, f64::INFINITY).unwrap();
        assert!(result.nodes >= previous, "depth {depth}: {} < {previous}", result.nodes);
        previous = result.nodes;
    }
}
