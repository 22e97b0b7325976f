use super::*;
use crate::error::IsolationError;

#[test]
fn test_player_opponent() {
    assert_eq!(Player::One.opponent(), Player::Two);
    assert_eq!(Player::Two.opponent(), Player::One);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(7), 3 * 7 + 4);
    assert_eq!(Pos::from_index(25, 7), pos);

    // Non-square boards index by width
    let pos = Pos::new(1, 2);
    assert_eq!(pos.to_index(5), 7);
    assert_eq!(Pos::from_index(7, 5), pos);
}

#[test]
fn test_pos_ordering() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_board_dimensions_validated() {
    assert_eq!(
        GameState::new(0, 5),
        Err(IsolationError::EmptyBoard { width: 0, height: 5 })
    );
    assert_eq!(
        GameState::new(20, 20),
        Err(IsolationError::BoardTooLarge { width: 20, height: 20 })
    );
    assert!(GameState::new(16, 24).is_ok());
}

#[test]
fn test_start_positions_validated() {
    assert!(matches!(
        GameState::with_positions(3, 3, Pos::new(0, 0), Pos::new(3, 0)),
        Err(IsolationError::OutOfBounds { .. })
    ));
    assert_eq!(
        GameState::with_positions(3, 3, Pos::new(1, 1), Pos::new(1, 1)),
        Err(IsolationError::SharedStart { pos: Pos::new(1, 1) })
    );
}

#[test]
fn test_corner_knight_moves_on_3x3() {
    let state = GameState::with_positions(3, 3, Pos::new(0, 0), Pos::new(2, 2)).unwrap();
    assert_eq!(state.active(), Player::One);
    assert_eq!(state.legal_moves(), vec![Pos::new(1, 2), Pos::new(2, 1)]);
}

#[test]
fn test_move_generation_order_matches_offsets() {
    let state = GameState::with_positions(7, 7, Pos::new(3, 3), Pos::new(0, 0)).unwrap();
    let expected: Vec<Pos> = KNIGHT_OFFSETS
        .iter()
        .map(|&(dr, dc)| Pos::new((3 + dr) as u8, (3 + dc) as u8))
        .collect();
    assert_eq!(state.legal_moves(), expected);
    assert_eq!(state.mobility(Player::One), 8);
}

#[test]
fn test_apply_transition() {
    let state = GameState::with_positions(5, 5, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
    let next = state.apply(Pos::new(1, 2)).unwrap();

    assert_eq!(next.active(), Player::Two);
    assert_eq!(next.position(Player::One), Some(Pos::new(1, 2)));
    assert!(next.is_blocked(Pos::new(0, 0)), "old cell stays blocked");
    assert!(next.is_blocked(Pos::new(1, 2)), "new cell becomes blocked");
    assert_eq!(next.ply(), 1);

    // Source snapshot untouched
    assert_eq!(state.position(Player::One), Some(Pos::new(0, 0)));
    assert!(!state.is_blocked(Pos::new(1, 2)));
}

#[test]
fn test_apply_rejects_illegal_move() {
    let state = GameState::with_positions(5, 5, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
    assert_eq!(
        state.apply(Pos::new(1, 1)),
        Err(IsolationError::IllegalMove { to: Pos::new(1, 1) })
    );
    // Out of bounds
    assert!(state.apply(Pos::new(9, 9)).is_err());
}

#[test]
fn test_cannot_jump_onto_opponent() {
    let state = GameState::with_positions(5, 5, Pos::new(0, 0), Pos::new(1, 2)).unwrap();
    assert_eq!(state.legal_moves(), vec![Pos::new(2, 1)]);
    assert!(state.apply(Pos::new(1, 2)).is_err());
}

#[test]
fn test_placement_opening() {
    let state = GameState::new(3, 2).unwrap();
    assert_eq!(state.position(Player::One), None);
    assert_eq!(state.legal_moves().len(), 6);

    let next = state.apply(Pos::new(0, 1)).unwrap();
    // Second player may drop anywhere except the occupied cell
    let moves = next.legal_moves();
    assert_eq!(moves.len(), 5);
    assert!(!moves.contains(&Pos::new(0, 1)));
    assert_eq!(next.mobility(Player::Two), 5);
}

#[test]
fn test_terminal_winner_is_opponent_of_active() {
    // On 3x3 the centre has no knight moves at all
    let state = GameState::with_positions(3, 3, Pos::new(0, 0), Pos::new(1, 1)).unwrap();
    assert!(!state.is_terminal());

    let next = state.apply(Pos::new(1, 2)).unwrap();
    assert_eq!(next.active(), Player::Two);
    assert!(next.legal_moves().is_empty());
    assert!(next.is_terminal());
    assert_eq!(next.winner(), Some(Player::One));
    assert!(next.is_winner(Player::One));
    assert!(next.is_loser(Player::Two));
}

#[test]
fn test_winner_undefined_when_not_terminal() {
    let state = GameState::with_positions(5, 5, Pos::new(0, 0), Pos::new(4, 4)).unwrap();
    assert_eq!(state.winner(), None);
    assert!(!state.is_winner(Player::One));
    assert!(!state.is_loser(Player::One));
}

#[test]
fn test_blocked_set_only_grows() {
    let mut state = GameState::new(4, 4).unwrap();
    let mut visited = Vec::new();

    while let Some(&mv) = state.legal_moves().first() {
        let next = state.apply(mv).unwrap();
        assert!(state.blocked().is_subset_of(next.blocked()));
        visited.push(mv);
        state = next;
    }

    for pos in &visited {
        assert!(state.is_blocked(*pos));
    }
    // Nothing blocked except occupied cells
    assert_eq!(state.blocked().count() as usize, visited.len());
}

#[test]
fn test_blank_count() {
    let state = GameState::with_positions(7, 7, Pos::new(0, 0), Pos::new(6, 6)).unwrap();
    assert_eq!(state.blank_count(), 47);
    assert_eq!(state.blank_cells().len(), 47);
}

#[test]
fn test_display() {
    let state = GameState::with_positions(3, 2, Pos::new(0, 0), Pos::new(1, 2)).unwrap();
    assert_eq!(state.to_string(), "1 . .\n. . 2\n");
}
