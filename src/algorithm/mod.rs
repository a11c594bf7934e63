/// Length predicates for filtering results
pub mod filter;
/// Backtracking word search engine
pub mod search;
/// Prefix tree and search tokens
pub mod trie;
/// Per-search visited cell tracking
pub mod visited;
/// Sorted unique result list
pub mod word_list;
