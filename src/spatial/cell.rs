//! Cell coordinates and cell contents

use std::fmt;
use std::str::FromStr;

use crate::io::error::{HexwordError, invalid_parameter};

/// Position of a cell on the board
///
/// A pure coordinate: equality, ordering and hashing are by `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct CellIndex {
    /// Row, counted from the top
    pub row: usize,
    /// Column, counted from the left
    pub col: usize,
}

impl CellIndex {
    /// The top-left cell
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a coordinate
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a signed `(row, col)` offset, `None` if either axis goes negative
    pub const fn offset(self, (d_row, d_col): (isize, isize)) -> Option<Self> {
        let Some(row) = self.row.checked_add_signed(d_row) else {
            return None;
        };
        let Some(col) = self.col.checked_add_signed(d_col) else {
            return None;
        };
        Some(Self::new(row, col))
    }
}

impl fmt::Display for CellIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Parses `"row,col"`
impl FromStr for CellIndex {
    type Err = HexwordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .ok_or_else(|| invalid_parameter("cell", &s, &"expected ROW,COL"))?;
        let row = row
            .trim()
            .parse()
            .map_err(|e| invalid_parameter("cell", &s, &e))?;
        let col = col
            .trim()
            .parse()
            .map_err(|e| invalid_parameter("cell", &s, &e))?;
        Ok(Self::new(row, col))
    }
}

/// Contents of one board slot
///
/// Kept as its own sum type so that "no letter" can never be confused with a
/// placeholder character during search or dictionary matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    /// No letter placed
    #[default]
    Empty,
    /// A single lowercase ASCII letter
    Letter(char),
}

impl Cell {
    /// Case-fold `ch`; anything outside `a`-`z` becomes [`Cell::Empty`]
    pub const fn from_char(ch: char) -> Self {
        let folded = ch.to_ascii_lowercase();
        if folded.is_ascii_lowercase() {
            Self::Letter(folded)
        } else {
            Self::Empty
        }
    }

    /// The letter held, if any
    pub const fn letter(self) -> Option<char> {
        match self {
            Self::Empty => None,
            Self::Letter(ch) => Some(ch),
        }
    }

    /// Whether no letter is held
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl From<char> for Cell {
    fn from(ch: char) -> Self {
        Self::from_char(ch)
    }
}
