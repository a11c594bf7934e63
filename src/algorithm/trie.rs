//! Prefix tree over lowercase words with immutable search cursors
//!
//! Search progress is carried by [`TrieToken`] rather than by the trie, so any
//! number of board paths can walk the same trie at once without sharing a
//! mutable cursor.

use std::collections::HashMap;

/// Prefix tree node
///
/// Children are owned by their parent; traversal is root-to-leaf only.
#[derive(Debug, Default, Clone)]
pub struct TrieNode {
    children: HashMap<char, TrieNode>,
    is_word: bool,
}

impl TrieNode {
    /// Child reached by `letter`
    pub fn child(&self, letter: char) -> Option<&Self> {
        self.children.get(&letter)
    }

    /// Whether the path from the root to this node spells a word
    pub const fn is_word(&self) -> bool {
        self.is_word
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

/// Word set supporting letter-by-letter prefix lookup
///
/// The root stands for the empty string and is never a word. Nodes are
/// created lazily on insertion and never removed.
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    len: usize,
}

impl Trie {
    /// Create an empty trie
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a word, case-folded to lowercase
    ///
    /// Returns `true` if the word was not already present. Empty words are
    /// ignored so the root never becomes a word.
    pub fn insert(&mut self, word: &str) -> bool {
        if word.is_empty() {
            return false;
        }

        let node = word
            .chars()
            .flat_map(char::to_lowercase)
            .fold(&mut self.root, |node, letter| {
                node.children.entry(letter).or_default()
            });

        let added = !node.is_word;
        node.is_word = true;
        if added {
            self.len += 1;
        }
        added
    }

    /// Whether `word` (case-folded) was inserted
    pub fn contains(&self, word: &str) -> bool {
        word.chars()
            .flat_map(char::to_lowercase)
            .try_fold(self.start_search(), TrieToken::advance)
            .is_some_and(|token| token.is_word())
    }

    /// Token at the root, the empty-prefix state
    pub const fn start_search(&self) -> TrieToken<'_> {
        TrieToken { node: &self.root }
    }

    /// Number of distinct words stored
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether no word has been inserted
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl<S: AsRef<str>> Extend<S> for Trie {
    fn extend<I: IntoIterator<Item = S>>(&mut self, words: I) {
        for word in words {
            self.insert(word.as_ref());
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Trie {
    fn from_iter<I: IntoIterator<Item = S>>(words: I) -> Self {
        let mut trie = Self::new();
        trie.extend(words);
        trie
    }
}

/// Immutable cursor at a trie node reached by the letters consumed so far
///
/// Tokens are `Copy` and side-effect free; advancing one never affects
/// another derived from the same trie.
#[derive(Debug, Clone, Copy)]
pub struct TrieToken<'a> {
    node: &'a TrieNode,
}

impl<'a> TrieToken<'a> {
    /// Token for the continuation by `letter`
    ///
    /// `None` means no dictionary word extends the current prefix with this
    /// letter, so the caller should stop extending the path.
    pub fn advance(self, letter: char) -> Option<Self> {
        self.node.child(letter).map(|node| TrieToken { node })
    }

    /// Whether the letters consumed so far form a complete word
    pub const fn is_word(self) -> bool {
        self.node.is_word
    }

    /// Node under the cursor
    pub const fn node(self) -> &'a TrieNode {
        self.node
    }
}
