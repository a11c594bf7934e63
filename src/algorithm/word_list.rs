//! De-duplicated, sorted view of search results

use std::collections::BTreeSet;

use crate::algorithm::filter::MatchSpec;

/// Sorted unique words that pass a length filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Build from raw search output, dropping duplicates and words whose
    /// length does not match `length`
    pub fn from_found<I>(found: I, length: &MatchSpec<usize>) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let unique: BTreeSet<String> = found
            .into_iter()
            .filter(|word| length.matches_word(word))
            .collect();
        Self {
            words: unique.into_iter().collect(),
        }
    }

    /// Number of words
    pub const fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether no word survived
    pub const fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Word at a display row
    pub fn get(&self, row: usize) -> Option<&str> {
        self.words.get(row).map(String::as_str)
    }

    /// Words in sorted order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.words.iter()
    }

    /// Consume into the sorted words
    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl<'a> IntoIterator for &'a WordList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
