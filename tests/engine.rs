//! End-to-end engine behaviour through the public API

use std::time::Duration;

use isolation::config::{Algorithm, Deepening, HeuristicKind};
use isolation::search::SteppedClock;
use isolation::{AIEngine, EngineConfig, GameState, Player, Pos, SearchType};

fn engine(algorithm: Algorithm, heuristic: HeuristicKind) -> AIEngine {
    AIEngine::with_config(EngineConfig {
        algorithm,
        heuristic,
        ..EngineConfig::default()
    })
}

#[test]
fn test_engine_vs_engine_game_terminates() {
    let one = engine(Algorithm::AlphaBeta, HeuristicKind::WeightedMobility);
    let two = engine(Algorithm::Minimax, HeuristicKind::CenterDistance);
    let mut state = GameState::new(5, 5).unwrap();

    while !state.is_terminal() {
        let mover = match state.active() {
            Player::One => &one,
            Player::Two => &two,
        };
        let mv = mover.get_move(&state, Duration::from_millis(40)).expect("non-terminal state has a move");
        assert!(state.is_legal(mv), "{mv} illegal in\n{state}");
        state = state.apply(mv).unwrap();
    }

    assert!(state.legal_moves().is_empty());
    assert_eq!(state.winner(), Some(state.inactive()));
}

#[test]
fn test_longest_path_engine_endgame() {
    let engine = engine(Algorithm::AlphaBeta, HeuristicKind::LongestPath);
    // 4x4 leaves few open cells, so path search is active from the start
    let state = GameState::with_positions(4, 4, Pos::new(0, 0), Pos::new(3, 3)).unwrap();

    let result = engine.get_move_with_stats(&state, Duration::from_millis(200));
    let mv = result.best_move.unwrap();
    assert!(state.is_legal(mv));
    assert_ne!(result.search_type, SearchType::Fallback);
}

#[test]
fn test_fallback_never_forfeits() {
    let state = GameState::with_positions(7, 7, Pos::new(3, 3), Pos::new(6, 6)).unwrap();

    for deepening in [Deepening::FixedDepth, Deepening::Iterative] {
        let engine = AIEngine::with_config(EngineConfig {
            deepening,
            search_depth: 6,
            ..EngineConfig::default()
        });
        // Threshold is 10ms; the clock starts at 12ms and drops 1ms per poll
        let clock = SteppedClock::new(Duration::from_millis(12), Duration::from_millis(1));
        let result = engine.get_move_with_clock(&state, &clock);

        assert_eq!(result.search_type, SearchType::Fallback);
        assert_eq!(result.best_move, state.legal_moves().first().copied());
    }
}

#[test]
fn test_terminal_state_signals_no_move() {
    let state = GameState::with_positions(3, 3, Pos::new(0, 0), Pos::new(1, 1)).unwrap();
    let lost = state.apply(Pos::new(2, 1)).unwrap();
    assert!(lost.is_terminal());

    let engine = AIEngine::new();
    assert_eq!(engine.get_move(&lost, Duration::from_millis(50)), None);
}
