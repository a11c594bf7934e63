//! Spatial data structures for the hexagonal board
//!
//! This module contains spatial-related functionality including:
//! - Cell coordinates and cell contents
//! - Column-parity neighbour offsets
//! - Board state and mutation
//! - Random letter filling

/// Cell coordinates and the letter-or-empty cell value
pub mod cell;
/// Seeded random letters for empty cells
pub mod fill;
/// Board state, adjacency and mutation
pub mod grid;
/// Neighbour offsets for the staggered layout
pub mod hex;

pub use cell::{Cell, CellIndex};
pub use grid::Grid;
