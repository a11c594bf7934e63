//! Word discovery on staggered hexagonal letter grids
//!
//! A board of optional letters is searched for every dictionary word that
//! can be spelled along a path of adjacent, non-repeating cells. A prefix
//! trie prunes paths as soon as no dictionary word can continue them.

#![forbid(unsafe_code)]

/// Trie, word search engine and result filtering
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Hexagonal board, cells and adjacency
pub mod spatial;

pub use algorithm::filter::MatchSpec;
pub use algorithm::search::{MaxDepth, WordSearch};
pub use algorithm::trie::{Trie, TrieToken};
pub use io::error::{HexwordError, Result};
pub use spatial::{Cell, CellIndex, Grid};
