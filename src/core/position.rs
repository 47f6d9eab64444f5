//! Board coordinates and the plus-shaped toggle neighbourhood.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A 0-indexed `(row, col)` cell coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether this position lies on a `size`x`size` board.
    #[must_use]
    pub const fn is_within(self, size: usize) -> bool {
        self.row < size && self.col < size
    }

    /// In-bounds orthogonal neighbours: up, down, left, right.
    ///
    /// No wraparound and no diagonals, so corners have 2, edges 3,
    /// interior cells 4. A position off the board has none.
    #[must_use]
    pub fn neighbors(self, size: usize) -> SmallVec<[Position; 4]> {
        let mut out = SmallVec::new();
        if !self.is_within(size) {
            return out;
        }
        if self.row > 0 {
            out.push(Self::new(self.row - 1, self.col));
        }
        if self.row + 1 < size {
            out.push(Self::new(self.row + 1, self.col));
        }
        if self.col > 0 {
            out.push(Self::new(self.row, self.col - 1));
        }
        if self.col + 1 < size {
            out.push(Self::new(self.row, self.col + 1));
        }
        out
    }

    /// Every cell a toggle at this position flips: itself plus its neighbours.
    ///
    /// Empty when the position is off the board.
    #[must_use]
    pub fn toggle_set(self, size: usize) -> SmallVec<[Position; 5]> {
        let mut out = SmallVec::new();
        if !self.is_within(size) {
            return out;
        }
        out.push(self);
        out.extend(self.neighbors(size));
        out
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
