//! Command-line interface for searching a hexagonal letter board

use crate::algorithm::filter::MatchSpec;
use crate::algorithm::search::{MaxDepth, WordSearch};
use crate::algorithm::trie::Trie;
use crate::algorithm::word_list::WordList;
use crate::io::configuration::{DEFAULT_COLS, DEFAULT_DICTIONARY_PATH, DEFAULT_ROWS, DEFAULT_SEED};
use crate::io::dictionary::load_word_list;
use crate::io::error::{HexwordError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::spatial::cell::CellIndex;
use crate::spatial::fill::RandomLetters;
use crate::spatial::grid::Grid;
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "hexword")]
#[command(
    author,
    version,
    about = "Find dictionary words on a staggered hexagonal letter grid"
)]
/// Command-line arguments for the board search tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Board letters left-to-right, top-to-bottom; non-letters are empty cells
    #[arg(value_name = "CONTENTS", default_value = "")]
    pub contents: String,

    /// Number of board rows
    #[arg(short = 'R', long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of board columns
    #[arg(short = 'C', long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Word list with one word per line
    #[arg(short, long, default_value = DEFAULT_DICTIONARY_PATH)]
    pub dictionary: PathBuf,

    /// Maximum number of letters per word
    #[arg(short, long)]
    pub max_depth: Option<usize>,

    /// Word length filter: all, N, =N, <=N or >=N
    #[arg(short, long, default_value = "all")]
    pub length: MatchSpec<usize>,

    /// Only search paths starting at ROW,COL
    #[arg(short, long, value_name = "ROW,COL")]
    pub from: Option<CellIndex>,

    /// Type letters starting at a cell, advancing in reading order
    #[arg(long = "set", value_name = "ROW,COL=TEXT")]
    pub placements: Vec<Placement>,

    /// Remove a letter and let the column above fall (repeatable, applied in order)
    #[arg(short, long, value_name = "ROW,COL")]
    pub collapse: Vec<CellIndex>,

    /// Fill empty cells with random letters
    #[arg(short, long)]
    pub random: bool,

    /// Random seed for reproducible boards
    #[arg(short, long, default_value_t = DEFAULT_SEED)]
    pub seed: u64,

    /// Search start cells across threads
    #[arg(short, long)]
    pub parallel: bool,

    /// Print every path's word, keeping duplicates and search order
    #[arg(short, long)]
    pub all_paths: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validated depth limit
    ///
    /// # Errors
    ///
    /// Returns an error if the requested depth is zero
    pub fn max_depth(&self) -> Result<MaxDepth> {
        self.max_depth.map_or(Ok(MaxDepth::UNBOUNDED), MaxDepth::new)
    }
}

/// Letters typed into the board from a starting cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    /// Cell receiving the first letter
    pub start: CellIndex,
    /// Letters to type
    pub text: String,
}

/// Parses `ROW,COL=TEXT`
impl FromStr for Placement {
    type Err = HexwordError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (cell, text) = s
            .split_once('=')
            .ok_or_else(|| invalid_parameter("set", &s, &"expected ROW,COL=TEXT"))?;
        Ok(Self {
            start: cell.parse()?,
            text: text.to_owned(),
        })
    }
}

/// Runs one board search: load the word list, build and edit the board,
/// search, filter and print
pub struct Session {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl Session {
    /// Create a session for the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Search the board and write one word per line to `out`
    ///
    /// Returns the sorted unique words that passed the length filter.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The depth limit or board dimensions are invalid
    /// - A board edit addresses a cell off the board
    /// - The word list cannot be read or is empty
    /// - Writing to `out` fails
    pub fn run<W: Write>(&mut self, out: &mut W) -> Result<WordList> {
        let max_depth = self.cli.max_depth()?;
        let grid = self.build_grid()?;
        let trie = self.load_dictionary()?;

        let found = self.search(&grid, &trie, max_depth);
        let words = WordList::from_found(found.iter().cloned(), &self.cli.length);

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        if self.cli.all_paths {
            for word in found.iter().filter(|word| self.cli.length.matches_word(word)) {
                writeln!(out, "{word}")?;
            }
        } else {
            for word in &words {
                writeln!(out, "{word}")?;
            }
        }

        Ok(words)
    }

    /// Build the board from contents, then apply placements, collapses and
    /// random fill in that order
    ///
    /// # Errors
    ///
    /// Returns an error if the dimensions are invalid or an edit is off the board
    pub fn build_grid(&self) -> Result<Grid> {
        let mut grid = Grid::from_contents(self.cli.rows, self.cli.cols, &self.cli.contents)?;

        for placement in &self.cli.placements {
            grid.type_letters(placement.start, &placement.text)?;
        }
        for &index in &self.cli.collapse {
            grid.collapse(index)?;
        }
        if self.cli.random {
            grid.fill_empty(&mut RandomLetters::new(self.cli.seed));
        }
        Ok(grid)
    }

    fn load_dictionary(&mut self) -> Result<Trie> {
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_dictionary(&self.cli.dictionary);
        }

        let progress = self.progress_manager.as_ref();
        let loaded = load_word_list(&self.cli.dictionary, |lines_read| {
            if let Some(pm) = progress {
                pm.update_dictionary(lines_read);
            }
        });

        if let Some(ref mut pm) = self.progress_manager {
            match &loaded {
                Ok(trie) => pm.finish_dictionary(trie.len()),
                Err(_) => pm.finish(),
            }
        }
        loaded
    }

    fn search(&mut self, grid: &Grid, trie: &Trie, max_depth: MaxDepth) -> Vec<String> {
        let engine = WordSearch::new(grid, trie).with_max_depth(max_depth);

        if let Some(start) = self.cli.from {
            return engine.search_from(start);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_scan(grid.cell_count());
        }

        if self.cli.parallel {
            let found = engine.search_all_parallel();
            if let Some(ref pm) = self.progress_manager {
                pm.complete_cells(grid.cell_count());
            }
            return found;
        }

        let mut found = Vec::new();
        for start in grid.cells() {
            found.extend(engine.search_from(start));
            if let Some(ref pm) = self.progress_manager {
                pm.complete_cells(1);
            }
        }
        found
    }
}
