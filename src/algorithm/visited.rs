use bitvec::prelude::*;
use std::fmt;

/// Fixed-size set of cells used by the current search path
///
/// Indexed by row-major flat cell index. Each top-level search owns one, so
/// concurrent searches over the same board never share visitation state.
#[derive(Clone, Debug)]
pub struct VisitedSet {
    bits: BitVec,
}

impl VisitedSet {
    /// Create a set with room for `cell_count` cells, none visited
    pub fn new(cell_count: usize) -> Self {
        Self {
            bits: bitvec![0; cell_count],
        }
    }

    /// Mark a cell visited
    ///
    /// Returns `false` if it was already visited or lies outside the set.
    pub fn insert(&mut self, cell: usize) -> bool {
        match self.bits.get_mut(cell) {
            Some(mut bit) if !*bit => {
                bit.set(true);
                true
            }
            _ => false,
        }
    }

    /// Release a cell
    pub fn remove(&mut self, cell: usize) {
        if let Some(mut bit) = self.bits.get_mut(cell) {
            bit.set(false);
        }
    }

    /// Test cell membership
    pub fn contains(&self, cell: usize) -> bool {
        self.bits.get(cell).as_deref() == Some(&true)
    }

    /// Test if no cells are marked
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count marked cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Flat indices of all marked cells
    pub fn to_vec(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }
}

impl fmt::Display for VisitedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VisitedSet({} cells: {:?})", self.count(), self.to_vec())
    }
}
