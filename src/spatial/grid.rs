//! Board state for the staggered hexagonal letter grid
//!
//! Cells live in a dense row-major [`Array2`], so the slot of `(row, col)` is
//! `row * cols + col`. Reads never mutate the board; only [`Grid::set_letter`],
//! [`Grid::clear_letter`], [`Grid::collapse`] and the fill helpers do.

use ndarray::Array2;

use crate::io::configuration::{EMPTY_CELL_PLACEHOLDER, MAX_GRID_DIMENSION};
use crate::io::error::{HexwordError, Result};
use crate::spatial::cell::{Cell, CellIndex};
use crate::spatial::fill::RandomLetters;
use crate::spatial::hex::offsets_for_column;

/// Fixed-size hexagonal board holding an optional letter per cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Array2<Cell>,
}

impl Grid {
    /// Create an empty board
    ///
    /// # Errors
    ///
    /// Returns [`HexwordError::InvalidDimensions`] if either side is zero or
    /// larger than [`MAX_GRID_DIMENSION`]
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        validate_dimensions(rows, cols)?;
        Ok(Self {
            cells: Array2::from_elem((rows, cols), Cell::Empty),
        })
    }

    /// Create a board from a flat left-to-right, top-to-bottom string
    ///
    /// Letters are case-folded and anything outside `a`-`z` (including the
    /// `.` placeholder) becomes an empty cell. Short strings are padded with
    /// empty cells and long strings are truncated.
    ///
    /// # Errors
    ///
    /// Returns [`HexwordError::InvalidDimensions`] for rejected dimensions
    pub fn from_contents(rows: usize, cols: usize, contents: &str) -> Result<Self> {
        let mut grid = Self::new(rows, cols)?;
        for (slot, ch) in grid.cells.iter_mut().zip(contents.chars()) {
            *slot = Cell::from_char(ch);
        }
        Ok(grid)
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cells.ncols()
    }

    /// Dimensions as `(rows, cols)`
    pub fn dimensions(&self) -> (usize, usize) {
        self.cells.dim()
    }

    /// Total number of cells
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of cells currently holding a letter
    pub fn letter_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Whether `index` lies on the board
    pub fn contains(&self, index: CellIndex) -> bool {
        index.row < self.rows() && index.col < self.cols()
    }

    /// Row-major slot of `index`, `None` when off the board
    pub fn flat_index(&self, index: CellIndex) -> Option<usize> {
        self.contains(index)
            .then(|| index.row * self.cols() + index.col)
    }

    /// Contents of the cell, `None` when off the board
    pub fn get(&self, index: CellIndex) -> Option<Cell> {
        self.cells.get((index.row, index.col)).copied()
    }

    /// Contents of the cell
    ///
    /// # Errors
    ///
    /// Returns [`HexwordError::IndexOutOfRange`] when `index` is off the board
    pub fn cell_at(&self, index: CellIndex) -> Result<Cell> {
        self.get(index).ok_or_else(|| self.out_of_range(index))
    }

    /// Letter in the cell, `Ok(None)` for an empty cell
    ///
    /// # Errors
    ///
    /// Returns [`HexwordError::IndexOutOfRange`] when `index` is off the board
    pub fn letter_at(&self, index: CellIndex) -> Result<Option<char>> {
        self.cell_at(index).map(Cell::letter)
    }

    /// Overwrite a cell; the character is case-folded and non-letters clear it
    ///
    /// # Errors
    ///
    /// Returns [`HexwordError::IndexOutOfRange`] when `index` is off the board
    pub fn set_letter(&mut self, index: CellIndex, letter: char) -> Result<()> {
        *self.slot_mut(index)? = Cell::from_char(letter);
        Ok(())
    }

    /// Remove the letter in a cell without moving anything else
    ///
    /// # Errors
    ///
    /// Returns [`HexwordError::IndexOutOfRange`] when `index` is off the board
    pub fn clear_letter(&mut self, index: CellIndex) -> Result<()> {
        *self.slot_mut(index)? = Cell::Empty;
        Ok(())
    }

    /// Remove the letter at `index` and let the column above fall one row
    ///
    /// Each cell from `index.row` up to row 1 takes the contents of the cell
    /// directly above it, and row 0 of the column becomes empty.
    ///
    /// # Errors
    ///
    /// Returns [`HexwordError::IndexOutOfRange`] when `index` is off the board
    pub fn collapse(&mut self, index: CellIndex) -> Result<()> {
        if !self.contains(index) {
            return Err(self.out_of_range(index));
        }

        let mut column = self.cells.column_mut(index.col);
        for row in (1..=index.row).rev() {
            let above = column.get(row - 1).copied().unwrap_or_default();
            if let Some(slot) = column.get_mut(row) {
                *slot = above;
            }
        }
        if let Some(top) = column.get_mut(0) {
            *top = Cell::Empty;
        }
        Ok(())
    }

    /// Type `text` starting at `start`, advancing in reading order per character
    ///
    /// Returns the cell the cursor ends on.
    ///
    /// # Errors
    ///
    /// Returns [`HexwordError::IndexOutOfRange`] when `start` is off the board
    pub fn type_letters(&mut self, start: CellIndex, text: &str) -> Result<CellIndex> {
        let mut cursor = start;
        for ch in text.chars() {
            self.set_letter(cursor, ch)?;
            cursor = self.next_cell_in_reading_order(cursor);
        }
        Ok(cursor)
    }

    /// Fill every empty cell with a random letter
    pub fn fill_empty(&mut self, letters: &mut RandomLetters) {
        for slot in self.cells.iter_mut().filter(|cell| cell.is_empty()) {
            *slot = Cell::Letter(letters.next_letter());
        }
    }

    /// In-bounds hex neighbours of `index`, at most six
    ///
    /// Offsets depend on the parity of the column; see [`crate::spatial::hex`].
    /// The order is fixed for a given input.
    pub fn neighbors(&self, index: CellIndex) -> impl Iterator<Item = CellIndex> + '_ {
        offsets_for_column(index.col)
            .iter()
            .filter_map(move |&offset| index.offset(offset))
            .filter(|&neighbor| self.contains(neighbor))
    }

    /// Collected form of [`Grid::neighbors`]
    pub fn adjacent_cells(&self, index: CellIndex) -> Vec<CellIndex> {
        self.neighbors(index).collect()
    }

    /// Every coordinate in row-major order; each call starts a fresh traversal
    pub fn cells(&self) -> impl Iterator<Item = CellIndex> + use<> {
        let (rows, cols) = self.dimensions();
        (0..rows).flat_map(move |row| (0..cols).map(move |col| CellIndex::new(row, col)))
    }

    /// The coordinate after `index` in reading order, wrapping to `(0, 0)`
    pub fn next_cell_in_reading_order(&self, index: CellIndex) -> CellIndex {
        if index.col.saturating_add(1) < self.cols() {
            CellIndex::new(index.row, index.col + 1)
        } else if index.row.saturating_add(1) < self.rows() {
            CellIndex::new(index.row + 1, 0)
        } else {
            CellIndex::ZERO
        }
    }

    /// Flat board string using `.` for empty cells
    pub fn contents(&self) -> String {
        self.cells
            .iter()
            .map(|cell| cell.letter().unwrap_or(EMPTY_CELL_PLACEHOLDER))
            .collect()
    }

    fn slot_mut(&mut self, index: CellIndex) -> Result<&mut Cell> {
        let dimensions = self.dimensions();
        self.cells
            .get_mut((index.row, index.col))
            .ok_or(HexwordError::IndexOutOfRange { index, dimensions })
    }

    fn out_of_range(&self, index: CellIndex) -> HexwordError {
        HexwordError::IndexOutOfRange {
            index,
            dimensions: self.dimensions(),
        }
    }
}

fn validate_dimensions(rows: usize, cols: usize) -> Result<()> {
    let reason = if rows == 0 || cols == 0 {
        "both sides must be positive"
    } else if rows > MAX_GRID_DIMENSION || cols > MAX_GRID_DIMENSION {
        "a side exceeds the maximum grid dimension"
    } else {
        return Ok(());
    };
    Err(HexwordError::InvalidDimensions { rows, cols, reason })
}
