//! The lit/unlit board.
//!
//! ## Layout
//!
//! Cells live in one flat `Vec<bool>` indexed by `row * size + col`.
//! Cloning a `Grid` copies every cell, so a grid produced by
//! [`Grid::toggled`] never shares storage with the grid it came from.
//!
//! Serialized form is nested rows, the same shape `from_rows` accepts;
//! deserializing re-checks that the rows form a square.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{GridError, Result};
use super::position::Position;
use super::rng::draw_lit;

/// Square board of lights. `true` is lit.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<bool>>", into = "Vec<Vec<bool>>")]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Number of cells on a `size`x`size` board.
    ///
    /// Fails with `InvalidDimension` when N² overflows or exceeds what a
    /// `Vec` can address.
    pub fn cell_count_for(size: usize) -> Result<usize> {
        size.checked_mul(size)
            .filter(|&n| n <= isize::MAX as usize)
            .ok_or_else(|| GridError::dimension(size, size))
    }

    /// Create a `size`x`size` board with every light off.
    pub fn unlit(size: usize) -> Result<Self> {
        let cells = vec![false; Self::cell_count_for(size)?];
        Ok(Self { size, cells })
    }

    /// Build a board from nested rows.
    ///
    /// Every row must be as long as there are rows.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut cells = Vec::with_capacity(Self::cell_count_for(size)?);

        for row in rows {
            let row = row.as_ref();
            if row.len() != size {
                return Err(GridError::dimension(size, row.len()));
            }
            cells.extend_from_slice(row);
        }

        Ok(Self { size, cells })
    }

    /// Build a board with each cell independently lit with probability
    /// `difficulty`.
    ///
    /// Any `rand::Rng` works as the source; pass a seeded
    /// [`GameRng`](super::GameRng) for reproducible boards.
    pub fn random<R: Rng + ?Sized>(size: usize, difficulty: f64, rng: &mut R) -> Result<Self> {
        let cells = (0..Self::cell_count_for(size)?)
            .map(|_| draw_lit(rng, difficulty))
            .collect();
        Ok(Self { size, cells })
    }

    /// Board dimension N.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of cells (N²).
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    fn index(&self, pos: Position) -> Option<usize> {
        pos.is_within(self.size).then(|| pos.row * self.size + pos.col)
    }

    fn checked_index(&self, pos: Position) -> Result<usize> {
        self.index(pos).ok_or_else(|| GridError::position(pos, self.size))
    }

    /// Cell state, or `None` if `pos` is off the board.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<bool> {
        self.index(pos).map(|i| self.cells[i])
    }

    /// Cell state, failing for out-of-bounds positions.
    pub fn is_lit(&self, pos: Position) -> Result<bool> {
        self.checked_index(pos).map(|i| self.cells[i])
    }

    /// Iterate rows as slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks(0) panics; an empty board has no rows anyway
        self.cells.chunks(self.size.max(1))
    }

    /// Copy out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.rows().map(<[bool]>::to_vec).collect()
    }

    /// Number of lit cells.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.cells.iter().filter(|&&lit| lit).count()
    }

    /// Positions of every lit cell in row-major order.
    pub fn lit_positions(&self) -> impl Iterator<Item = Position> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &lit)| lit)
            .map(move |(i, _)| Position::new(i / size, i % size))
    }

    /// Flip the cell at `pos` and its in-bounds orthogonal neighbours.
    ///
    /// The board is left untouched when `pos` is out of bounds.
    pub fn toggle(&mut self, pos: Position) -> Result<()> {
        self.checked_index(pos)?;
        for p in pos.toggle_set(self.size) {
            let i = p.row * self.size + p.col;
            self.cells[i] = !self.cells[i];
        }
        Ok(())
    }

    /// Return a new board with `pos` toggled, leaving `self` as it was.
    pub fn toggled(&self, pos: Position) -> Result<Self> {
        let mut next = self.clone();
        next.toggle(pos)?;
        Ok(next)
    }

    /// True when every light is off. An empty board is trivially won.
    #[must_use]
    pub fn is_won(&self) -> bool {
        !self.cells.iter().any(|&lit| lit)
    }
}

impl TryFrom<Vec<Vec<bool>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<bool>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<Grid> for Vec<Vec<bool>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.rows() {
            for &lit in row {
                f.write_str(if lit { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameRng;

    fn lit(grid: &Grid) -> Vec<Position> {
        grid.lit_positions().collect()
    }

    #[test]
    fn test_unlit_is_won() {
        let grid = Grid::unlit(3).unwrap();
        assert_eq!(grid.size(), 3);
        assert_eq!(grid.cell_count(), 9);
        assert!(grid.is_won());
    }

    #[test]
    fn test_empty_grid_is_won() {
        let grid = Grid::unlit(0).unwrap();
        assert!(grid.is_won());
        assert_eq!(grid.rows().count(), 0);
    }

    #[test]
    fn test_oversized_board_rejected() {
        let huge = 1usize << (usize::BITS / 2);
        assert!(matches!(Grid::cell_count_for(huge), Err(GridError::InvalidDimension { .. })));
        assert!(matches!(Grid::unlit(huge), Err(GridError::InvalidDimension { .. })));
        assert!(Grid::random(huge, 1.0, &mut GameRng::new(1)).is_err());
        assert!(Grid::unlit(usize::MAX).is_err());
    }

    #[test]
    fn test_cell_count_for() {
        assert_eq!(Grid::cell_count_for(0).unwrap(), 0);
        assert_eq!(Grid::cell_count_for(7).unwrap(), 49);
    }

    #[test]
    fn test_from_rows() {
        let grid = Grid::from_rows(&[[true, false], [false, true]]).unwrap();
        assert_eq!(grid.size(), 2);
        assert_eq!(lit(&grid), vec![Position::new(0, 0), Position::new(1, 1)]);
        assert_eq!(grid.to_rows(), vec![vec![true, false], vec![false, true]]);
    }

    #[test]
    fn test_from_rows_rejects_ragged() {
        let rows = vec![vec![true, false], vec![false]];
        let err = Grid::from_rows(&rows).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimension { rows: 2, cols: 1 }));
    }

    #[test]
    fn test_from_rows_rejects_rectangle() {
        let err = Grid::from_rows(&[[true, false, true]]).unwrap_err();
        assert!(matches!(err, GridError::InvalidDimension { .. }));
    }

    #[test]
    fn test_toggle_corner() {
        let mut grid = Grid::unlit(3).unwrap();
        grid.toggle(Position::new(0, 0)).unwrap();
        assert_eq!(
            lit(&grid),
            vec![Position::new(0, 0), Position::new(0, 1), Position::new(1, 0)]
        );
    }

    #[test]
    fn test_toggle_out_of_bounds_leaves_grid() {
        let mut grid = Grid::from_rows(&[[true, false], [false, false]]).unwrap();
        let before = grid.clone();
        let err = grid.toggle(Position::new(2, 0)).unwrap_err();
        assert!(matches!(err, GridError::InvalidPosition { size: 2, .. }));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_toggled_does_not_mutate_source() {
        let grid = Grid::unlit(3).unwrap();
        let next = grid.toggled(Position::new(1, 1)).unwrap();
        assert!(grid.is_won());
        assert_eq!(next.lit_count(), 5);
    }

    #[test]
    fn test_get_and_is_lit() {
        let grid = Grid::from_rows(&[[false, true], [false, false]]).unwrap();
        assert_eq!(grid.get(Position::new(0, 1)), Some(true));
        assert_eq!(grid.get(Position::new(5, 5)), None);
        assert!(!grid.is_lit(Position::new(1, 1)).unwrap());
        assert!(grid.is_lit(Position::new(1, 2)).is_err());
    }

    #[test]
    fn test_random_extremes() {
        let mut rng = GameRng::new(3);
        assert!(Grid::random(4, 0.0, &mut rng).unwrap().is_won());
        assert_eq!(Grid::random(4, 1.0, &mut rng).unwrap().lit_count(), 16);
        assert!(Grid::random(4, -1.0, &mut rng).unwrap().is_won());
        assert_eq!(Grid::random(4, 7.0, &mut rng).unwrap().lit_count(), 16);
    }

    #[test]
    fn test_random_is_seeded() {
        let a = Grid::random(5, 0.5, &mut GameRng::new(99)).unwrap();
        let b = Grid::random(5, 0.5, &mut GameRng::new(99)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_display() {
        let grid = Grid::from_rows(&[[true, false], [false, true]]).unwrap();
        assert_eq!(grid.to_string(), "#.\n.#\n");
    }

    #[test]
    fn test_serde_roundtrip() {
        let grid = Grid::from_rows(&[[true, false], [true, true]]).unwrap();
        let json = serde_json::to_string(&grid).unwrap();
        let back: Grid = serde_json::from_str(&json).unwrap();
        assert_eq!(json, "[[true,false],[true,true]]");
        assert_eq!(grid, back);
    }

    #[test]
    fn test_deserialize_rejects_ragged() {
        let result: std::result::Result<Grid, _> = serde_json::from_str("[[true,false],[true]]");
        assert!(result.is_err());
    }
}
