//! Game state snapshot and move rules

use std::fmt;

use super::bitboard::Bitboard;
use super::{Player, Pos, KNIGHT_OFFSETS, MAX_CELLS};
use crate::error::{IsolationError, IsolationResult};

/// Immutable snapshot of an Isolation game.
///
/// The snapshot is `Copy`: applying a move returns a new state and leaves
/// the original untouched, so search can branch without undo bookkeeping.
///
/// Invariants:
/// - every cell a player has ever occupied is in `blocked`
/// - blocked cells never become unblocked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameState {
    width: u8,
    height: u8,
    blocked: Bitboard,
    positions: [Option<Pos>; 2],
    active: Player,
    ply: u32,
}

impl GameState {
    /// Create an empty board where both players still have to place their
    /// knight. `Player::One` moves first.
    pub fn new(width: u8, height: u8) -> IsolationResult<Self> {
        check_dimensions(width, height)?;
        Ok(Self {
            width,
            height,
            blocked: Bitboard::new(),
            positions: [None, None],
            active: Player::One,
            ply: 0,
        })
    }

    /// Create a board with both knights already placed. Both start cells
    /// are blocked and `Player::One` moves first.
    pub fn with_positions(width: u8, height: u8, one: Pos, two: Pos) -> IsolationResult<Self> {
        let mut state = Self::new(width, height)?;
        for pos in [one, two] {
            if !state.contains(pos) {
                return Err(IsolationError::OutOfBounds { pos, width, height });
            }
        }
        if one == two {
            return Err(IsolationError::SharedStart { pos: one });
        }

        state.occupy(Player::One, one);
        state.occupy(Player::Two, two);
        Ok(state)
    }

    #[inline]
    pub fn width(&self) -> u8 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Total number of cells
    #[inline]
    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Player to move
    #[inline]
    pub fn active(&self) -> Player {
        self.active
    }

    /// Player waiting for their turn
    #[inline]
    pub fn inactive(&self) -> Player {
        self.active.opponent()
    }

    /// Current cell of a player, `None` before their placement ply
    #[inline]
    pub fn position(&self, player: Player) -> Option<Pos> {
        self.positions[player.index()]
    }

    /// Number of moves played so far
    #[inline]
    pub fn ply(&self) -> u32 {
        self.ply
    }

    #[inline]
    pub fn blocked(&self) -> &Bitboard {
        &self.blocked
    }

    /// Check raw coordinates against the grid bounds
    #[inline]
    pub fn in_bounds(&self, row: i32, col: i32) -> bool {
        row >= 0 && row < i32::from(self.height) && col >= 0 && col < i32::from(self.width)
    }

    #[inline]
    pub fn contains(&self, pos: Pos) -> bool {
        pos.row < self.height && pos.col < self.width
    }

    #[inline]
    pub fn is_blocked(&self, pos: Pos) -> bool {
        self.blocked.get(pos.to_index(self.width))
    }

    #[inline]
    pub fn index_of(&self, pos: Pos) -> usize {
        pos.to_index(self.width)
    }

    #[inline]
    pub fn pos_at(&self, idx: usize) -> Pos {
        Pos::from_index(idx, self.width)
    }

    /// Number of cells nobody has occupied yet
    #[inline]
    pub fn blank_count(&self) -> usize {
        self.cell_count() - self.blocked.count() as usize
    }

    /// Unblocked cells in row-major order
    pub fn blank_cells(&self) -> Vec<Pos> {
        (0..self.cell_count())
            .filter(|&idx| !self.blocked.get(idx))
            .map(|idx| self.pos_at(idx))
            .collect()
    }

    /// Legal moves of the active player. Empty means the active player lost.
    #[inline]
    pub fn legal_moves(&self) -> Vec<Pos> {
        self.moves_for(self.active)
    }

    /// Moves `player` could make from this position if it were their turn.
    ///
    /// A placed player moves by knight offsets in `KNIGHT_OFFSETS` order;
    /// an unplaced player may drop onto any unblocked cell.
    pub fn moves_for(&self, player: Player) -> Vec<Pos> {
        let Some(from) = self.position(player) else {
            return self.blank_cells();
        };

        let mut moves = Vec::with_capacity(KNIGHT_OFFSETS.len());
        for &(dr, dc) in &KNIGHT_OFFSETS {
            if let Some(to) = self.knight_target(from, dr, dc) {
                moves.push(to);
            }
        }
        moves
    }

    /// Count of `moves_for(player)` without allocating
    pub fn mobility(&self, player: Player) -> usize {
        match self.position(player) {
            Some(from) => KNIGHT_OFFSETS
                .iter()
                .filter(|&&(dr, dc)| self.knight_target(from, dr, dc).is_some())
                .count(),
            None => self.blank_count(),
        }
    }

    /// Destination of a knight jump if it lands on an open cell
    #[inline]
    fn knight_target(&self, from: Pos, dr: i8, dc: i8) -> Option<Pos> {
        let (r, c) = from.offset(dr, dc);
        if !self.in_bounds(r, c) {
            return None;
        }
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let to = Pos::new(r as u8, c as u8);
        (!self.is_blocked(to)).then_some(to)
    }

    /// Check whether the active player may move to `to`
    pub fn is_legal(&self, to: Pos) -> bool {
        if !self.contains(to) || self.is_blocked(to) {
            return false;
        }
        match self.position(self.active) {
            None => true,
            Some(from) => {
                let dr = i32::from(to.row) - i32::from(from.row);
                let dc = i32::from(to.col) - i32::from(from.col);
                KNIGHT_OFFSETS
                    .iter()
                    .any(|&(kr, kc)| i32::from(kr) == dr && i32::from(kc) == dc)
            }
        }
    }

    /// Apply a move for the active player.
    ///
    /// # Errors
    ///
    /// Returns `IsolationError::IllegalMove` if `to` is not in `legal_moves()`.
    pub fn apply(&self, to: Pos) -> IsolationResult<GameState> {
        if !self.is_legal(to) {
            return Err(IsolationError::IllegalMove { to });
        }
        Ok(self.forecast(to))
    }

    /// Ply transition without the legality check. Callers must pass a move
    /// taken from `legal_moves()`.
    #[inline]
    pub(crate) fn forecast(&self, to: Pos) -> GameState {
        debug_assert!(self.is_legal(to), "forecast of illegal move {to}");
        let mut next = *self;
        next.occupy(self.active, to);
        next.active = self.active.opponent();
        next.ply += 1;
        next
    }

    /// Move `player` onto `to` and block the cell. The previous cell was
    /// blocked when it was entered and stays blocked.
    #[inline]
    fn occupy(&mut self, player: Player, to: Pos) {
        self.blocked.set(to.to_index(self.width));
        self.positions[player.index()] = Some(to);
    }

    /// True when the active player has no legal move
    #[inline]
    pub fn is_terminal(&self) -> bool {
        self.mobility(self.active) == 0
    }

    /// Winner of a finished game: the player who is *not* stuck
    pub fn winner(&self) -> Option<Player> {
        self.is_terminal().then(|| self.inactive())
    }

    #[inline]
    pub fn is_winner(&self, player: Player) -> bool {
        self.winner() == Some(player)
    }

    #[inline]
    pub fn is_loser(&self, player: Player) -> bool {
        self.winner() == Some(player.opponent())
    }
}

fn check_dimensions(width: u8, height: u8) -> IsolationResult<()> {
    if width == 0 || height == 0 {
        return Err(IsolationError::EmptyBoard { width, height });
    }
    if width as usize * height as usize > MAX_CELLS {
        return Err(IsolationError::BoardTooLarge { width, height });
    }
    Ok(())
}

/// ASCII rendering: `1`/`2` for the knights, `#` for blocked, `.` for open
impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Pos::new(row, col);
                let ch = if self.position(Player::One) == Some(pos) {
                    '1'
                } else if self.position(Player::Two) == Some(pos) {
                    '2'
                } else if self.is_blocked(pos) {
                    '#'
                } else {
                    '.'
                };
                write!(f, "{ch}")?;
                if col + 1 < self.width {
                    write!(f, " ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
