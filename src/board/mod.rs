//! Board representation for Isolation

pub mod bitboard;
pub mod state;

#[cfg(test)]
mod tests;

// Re-exports
pub use bitboard::Bitboard;
pub use state::GameState;

/// Largest board the bitboard can hold (6 x 64 bits)
pub const MAX_CELLS: usize = 384;

/// Default board edge used by the play window (7x7)
pub const DEFAULT_SIZE: u8 = 7;

/// Knight displacements in move-generation order.
///
/// Search tie-breaks depend on this order, so it must stay fixed.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The two sides of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Player {
    /// Moves first
    One,
    Two,
}

impl Player {
    /// Get the other player
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::One => write!(f, "Player 1"),
            Player::Two => write!(f, "Player 2"),
        }
    }
}

/// Cell on the board. Moves are identified by their destination cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row-major index on a board `width` cells wide
    #[inline]
    pub fn to_index(self, width: u8) -> usize {
        self.row as usize * width as usize + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, width: u8) -> Self {
        Self {
            row: (idx / width as usize) as u8,
            col: (idx % width as usize) as u8,
        }
    }

    /// Apply a displacement, returning the raw (possibly negative) coordinates
    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> (i32, i32) {
        (
            i32::from(self.row) + i32::from(dr),
            i32::from(self.col) + i32::from(dc),
        )
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
