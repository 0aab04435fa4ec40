//! Grid geometry.
//!
//! The board stores no cells of its own. Occupancy is derived by scanning
//! the unit roster, so there is exactly one source of truth for where a
//! unit stands.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::units::Unit;

/// A board coordinate. Row 0 is the top edge (player B's home row).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    /// Create a cell.
    #[must_use]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The cell `steps` away in `dir`. May be off the board.
    #[must_use]
    pub fn step(self, dir: Direction, steps: i32) -> Cell {
        let (dr, dc) = dir.delta();
        Cell::new(self.row + dr * steps, self.col + dc * steps)
    }

    /// Manhattan distance.
    #[must_use]
    pub fn distance(self, other: Cell) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }

    /// Cardinal direction from `self` to `other`, if they share a row or column.
    ///
    /// ```
    /// use summoner_tactics::board::{Cell, Direction};
    ///
    /// assert_eq!(Cell::new(2, 2).direction_to(Cell::new(2, 5)), Some(Direction::Right));
    /// assert_eq!(Cell::new(2, 2).direction_to(Cell::new(3, 3)), None);
    /// ```
    #[must_use]
    pub fn direction_to(self, other: Cell) -> Option<Direction> {
        match (other.row - self.row, other.col - self.col) {
            (0, 0) => None,
            (dr, 0) if dr < 0 => Some(Direction::Up),
            (_, 0) => Some(Direction::Down),
            (0, dc) if dc < 0 => Some(Direction::Left),
            (0, _) => Some(Direction::Right),
            _ => None,
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// One of the four orthogonal directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions in scan order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// (row, col) offset of one step.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

/// Fixed `rows × cols` board extent.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: i32,
    cols: i32,
}

impl Board {
    /// Create a board.
    ///
    /// Panics if either dimension is not positive. Engines check this up
    /// front through `RulesConfig::validate`.
    #[must_use]
    pub fn new(rows: i32, cols: i32) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");
        Self { rows, cols }
    }

    #[must_use]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> i32 {
        self.cols
    }

    /// Bounds check.
    #[must_use]
    pub fn is_on_board(&self, cell: Cell) -> bool {
        (0..self.rows).contains(&cell.row) && (0..self.cols).contains(&cell.col)
    }

    /// First living unit occupying `cell`, if any.
    ///
    /// Units flagged for removal have zero life and never occupy a cell.
    #[must_use]
    pub fn unit_at<'a>(&self, units: &'a [Unit], cell: Cell) -> Option<&'a Unit> {
        units.iter().find(|u| u.cell == cell && u.is_alive())
    }

    /// Is `cell` on the board and free of living units?
    #[must_use]
    pub fn is_empty(&self, units: &[Unit], cell: Cell) -> bool {
        self.is_on_board(cell) && self.unit_at(units, cell).is_none()
    }

    /// On-board orthogonal neighbors of `cell`, in `Direction::ALL` order.
    #[must_use]
    pub fn neighbors(&self, cell: Cell) -> SmallVec<[Cell; 4]> {
        Direction::ALL
            .iter()
            .map(|&dir| cell.step(dir, 1))
            .filter(|&c| self.is_on_board(c))
            .collect()
    }

    /// Iterate over every cell, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }
}
