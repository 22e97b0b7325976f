//! Knight-path search on the movement graph
//!
//! The movement graph has one node per open cell and an edge for every
//! knight jump between open cells. The opponent is treated as frozen, so
//! this measures how long one player could keep moving on their own.

use crate::board::{Bitboard, GameState, Pos, KNIGHT_OFFSETS};

/// Length of the longest non-repeating knight path starting at `from`,
/// capped at `limit` moves.
///
/// Exact when `limit >= state.blank_count()`. Cost is exponential in the
/// number of open cells reachable from `from`, so callers keep it to the
/// late game.
#[must_use]
pub fn longest_path(state: &GameState, from: Pos, limit: u32) -> u32 {
    let mut scratch = *state.blocked();
    extend(state, &mut scratch, from, limit)
}

fn extend(state: &GameState, blocked: &mut Bitboard, from: Pos, remaining: u32) -> u32 {
    if remaining == 0 {
        return 0;
    }

    let mut best = 0;
    for &(dr, dc) in &KNIGHT_OFFSETS {
        let (r, c) = from.offset(dr, dc);
        if !state.in_bounds(r, c) {
            continue;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let to = Pos::new(r as u8, c as u8);
        let idx = state.index_of(to);
        if blocked.get(idx) {
            continue;
        }

        blocked.set(idx);
        let len = 1 + extend(state, blocked, to, remaining - 1);
        blocked.clear(idx);

        best = best.max(len);
        if best == remaining {
            break;
        }
    }
    best
}
