//! Board geometry and occupancy queries.
//!
//! - `Cell`: a (row, col) coordinate
//! - `Direction`: the four orthogonal directions
//! - `Board`: the fixed grid extent plus occupancy derived from the roster

mod grid;

pub use grid::{Board, Cell, Direction};
