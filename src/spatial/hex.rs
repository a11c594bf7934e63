//! Neighbour offsets for the staggered hexagonal layout
//!
//! Columns are straight and alternate columns are shifted half a cell, so a
//! 3x4 board is drawn as:
//!
//! ```text
//!     1   3
//!   0   2
//!     1   3
//!   0   2
//!     1   3
//!   0   2
//! ```
//!
//! Odd columns sit half a row higher than even ones, which is why the
//! diagonal neighbours depend on column parity.

/// Maximum number of neighbours a cell can have
pub const MAX_NEIGHBORS: usize = 6;

/// `(row, col)` offsets of the neighbours of a cell in an even column
pub const EVEN_COLUMN_OFFSETS: [(isize, isize); MAX_NEIGHBORS] =
    [(-1, 0), (1, 0), (0, 1), (1, 1), (0, -1), (1, -1)];

/// `(row, col)` offsets of the neighbours of a cell in an odd column
pub const ODD_COLUMN_OFFSETS: [(isize, isize); MAX_NEIGHBORS] =
    [(1, 0), (-1, 0), (-1, 1), (0, 1), (0, -1), (-1, -1)];

/// Offsets that apply to a cell in column `col`
pub const fn offsets_for_column(col: usize) -> &'static [(isize, isize); MAX_NEIGHBORS] {
    if col % 2 == 0 {
        &EVEN_COLUMN_OFFSETS
    } else {
        &ODD_COLUMN_OFFSETS
    }
}
