//! Backtracking word search over the hexagonal board
//!
//! A search walks simple paths (no cell used twice) outward from a start
//! cell, advancing a [`TrieToken`] by each cell's letter and pruning as soon
//! as the trie has no continuation. Every path whose letters complete a
//! dictionary word is reported, so the same word may be reported more than
//! once when several paths or start cells spell it.
//!
//! Results are pushed to a visitor returning [`ControlFlow`]; breaking stops
//! the whole search immediately. The collecting variants are built on top.

use std::num::NonZeroUsize;
use std::ops::ControlFlow;

use rayon::prelude::*;

use crate::algorithm::trie::{Trie, TrieToken};
use crate::algorithm::visited::VisitedSet;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::cell::{Cell, CellIndex};
use crate::spatial::grid::Grid;

/// Upper bound on the number of letters in a reported word
///
/// Always at least one. The default is unbounded, in practice limited by the
/// number of cells on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MaxDepth(NonZeroUsize);

impl MaxDepth {
    /// No limit beyond the board size
    pub const UNBOUNDED: Self = Self(NonZeroUsize::MAX);

    /// Limit words to `depth` letters
    ///
    /// # Errors
    ///
    /// Returns [`crate::HexwordError::InvalidParameter`] when `depth` is zero
    pub fn new(depth: usize) -> Result<Self> {
        NonZeroUsize::new(depth)
            .map(Self)
            .ok_or_else(|| invalid_parameter("max_depth", &depth, &"must be at least 1"))
    }

    /// The limit as a letter count
    pub const fn get(self) -> usize {
        self.0.get()
    }
}

impl Default for MaxDepth {
    fn default() -> Self {
        Self::UNBOUNDED
    }
}

/// Word search engine over a board and a dictionary
///
/// Holds only shared borrows; neither the board nor the trie is modified.
#[derive(Debug, Clone, Copy)]
pub struct WordSearch<'a> {
    grid: &'a Grid,
    trie: &'a Trie,
    max_depth: MaxDepth,
}

impl<'a> WordSearch<'a> {
    /// Unbounded search of `grid` against `trie`
    pub const fn new(grid: &'a Grid, trie: &'a Trie) -> Self {
        Self {
            grid,
            trie,
            max_depth: MaxDepth::UNBOUNDED,
        }
    }

    /// Limit reported words to `max_depth` letters
    #[must_use]
    pub const fn with_max_depth(mut self, max_depth: MaxDepth) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// The configured depth limit
    pub const fn max_depth(&self) -> MaxDepth {
        self.max_depth
    }

    /// Push every word found starting exactly at `start` to `visit`
    ///
    /// A start cell off the board finds nothing. Returns `Break` if the
    /// visitor stopped the search.
    pub fn search_from_with<F>(&self, start: CellIndex, visit: F) -> ControlFlow<()>
    where
        F: FnMut(&str, &[CellIndex]) -> ControlFlow<()>,
    {
        let mut visited = VisitedSet::new(self.grid.cell_count());
        let mut walker = self.walker(&mut visited, visit);
        walker.step(start, self.trie.start_search())
    }

    /// All words found starting exactly at `start`
    pub fn search_from(&self, start: CellIndex) -> Vec<String> {
        let mut words = Vec::new();
        let _ = self.search_from_with(start, |word, _| {
            words.push(word.to_owned());
            ControlFlow::Continue(())
        });
        words
    }

    /// Words starting at `start` together with the cells that spelled them
    pub fn search_paths_from(&self, start: CellIndex) -> Vec<(String, Vec<CellIndex>)> {
        let mut found = Vec::new();
        let _ = self.search_from_with(start, |word, path| {
            found.push((word.to_owned(), path.to_vec()));
            ControlFlow::Continue(())
        });
        found
    }

    /// Run [`WordSearch::search_from_with`] from every cell in row-major order
    ///
    /// One walker serves every start cell; it is clean again after each
    /// start. Stops at the first `Break`.
    pub fn search_all_with<F>(&self, visit: F) -> ControlFlow<()>
    where
        F: FnMut(&str, &[CellIndex]) -> ControlFlow<()>,
    {
        let mut visited = VisitedSet::new(self.grid.cell_count());
        let mut walker = self.walker(&mut visited, visit);
        let root = self.trie.start_search();
        for start in self.grid.cells() {
            walker.step(start, root)?;
        }
        ControlFlow::Continue(())
    }

    /// Every word found from every start cell, duplicates included
    pub fn search_all(&self) -> Vec<String> {
        let mut words = Vec::new();
        let _ = self.search_all_with(|word, _| {
            words.push(word.to_owned());
            ControlFlow::Continue(())
        });
        words
    }

    /// [`WordSearch::search_all`] with start cells searched across threads
    ///
    /// Each rayon task keeps its own visited set across the start cells it
    /// handles. Output order matches the sequential scan.
    pub fn search_all_parallel(&self) -> Vec<String> {
        let cell_count = self.grid.cell_count();
        let root = self.trie.start_search();
        let starts: Vec<CellIndex> = self.grid.cells().collect();
        starts
            .par_iter()
            .map_init(
                || VisitedSet::new(cell_count),
                |visited, &start| {
                    let mut words = Vec::new();
                    let _ = self
                        .walker(visited, |word: &str, _: &[CellIndex]| {
                            words.push(word.to_owned());
                            ControlFlow::Continue(())
                        })
                        .step(start, root);
                    words
                },
            )
            .collect::<Vec<_>>()
            .into_iter()
            .flatten()
            .collect()
    }

    const fn walker<'v, F>(
        &self,
        visited: &'v mut VisitedSet,
        visit: F,
    ) -> PathWalker<'a, 'v, F> {
        PathWalker {
            grid: self.grid,
            max_depth: self.max_depth.get(),
            visited,
            letters: String::new(),
            path: Vec::new(),
            visit,
        }
    }
}

/// Per-search state threaded through the recursion
struct PathWalker<'g, 'v, F> {
    grid: &'g Grid,
    max_depth: usize,
    visited: &'v mut VisitedSet,
    letters: String,
    path: Vec<CellIndex>,
    visit: F,
}

impl<F> PathWalker<'_, '_, F>
where
    F: FnMut(&str, &[CellIndex]) -> ControlFlow<()>,
{
    /// Try to extend the current path by `index`
    ///
    /// On entry `token` does not include this cell's letter and the cell is
    /// not marked. The mark is released on every exit.
    fn step(&mut self, index: CellIndex, token: TrieToken<'_>) -> ControlFlow<()> {
        let Some(slot) = self.grid.flat_index(index) else {
            return ControlFlow::Continue(());
        };
        if !self.visited.insert(slot) {
            return ControlFlow::Continue(());
        }

        let flow = self.extend(index, token);

        self.visited.remove(slot);
        flow
    }

    fn extend(&mut self, index: CellIndex, token: TrieToken<'_>) -> ControlFlow<()> {
        let Some(letter) = self.grid.get(index).and_then(Cell::letter) else {
            return ControlFlow::Continue(());
        };
        let Some(next) = token.advance(letter) else {
            return ControlFlow::Continue(());
        };

        self.letters.push(letter);
        self.path.push(index);

        let flow = self.report_and_descend(index, next);

        self.path.pop();
        self.letters.pop();
        flow
    }

    fn report_and_descend(&mut self, index: CellIndex, token: TrieToken<'_>) -> ControlFlow<()> {
        if token.is_word() {
            (self.visit)(&self.letters, &self.path)?;
        }

        if self.path.len() < self.max_depth {
            let grid = self.grid;
            for neighbor in grid.neighbors(index) {
                self.step(neighbor, token)?;
            }
        }
        ControlFlow::Continue(())
    }
}
