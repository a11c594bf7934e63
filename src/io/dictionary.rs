//! Line-oriented word list loading into a [`Trie`]
//!
//! One word per line. Lines are trimmed and only those longer than
//! [`MIN_DICTIONARY_WORD_LENGTH`] characters are inserted.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::algorithm::trie::Trie;
use crate::io::configuration::{DICTIONARY_PROGRESS_INTERVAL, MIN_DICTIONARY_WORD_LENGTH};
use crate::io::error::{HexwordError, Result, WithPath};

/// Whether a trimmed line is long enough to become a dictionary word
pub fn is_dictionary_word(line: &str) -> bool {
    line.chars().count() > MIN_DICTIONARY_WORD_LENGTH
}

/// Read words from any buffered source
///
/// `on_progress` receives the number of lines read every
/// [`DICTIONARY_PROGRESS_INTERVAL`] lines, and once more at the end unless
/// that count was just reported. Lines that are not valid UTF-8 are counted
/// but skipped, since no board path can spell them.
///
/// # Errors
///
/// Returns the underlying I/O error if the source cannot be read
pub fn load_from_reader<R, F>(reader: R, mut on_progress: F) -> std::io::Result<Trie>
where
    R: BufRead,
    F: FnMut(usize),
{
    let mut trie = Trie::new();
    let mut lines_read = 0;

    for line in reader.split(b'\n') {
        let line = line?;
        if let Ok(text) = std::str::from_utf8(&line) {
            let word = text.trim();
            if is_dictionary_word(word) {
                trie.insert(word);
            }
        }

        lines_read += 1;
        if lines_read % DICTIONARY_PROGRESS_INTERVAL == 0 {
            on_progress(lines_read);
        }
    }

    if lines_read % DICTIONARY_PROGRESS_INTERVAL != 0 {
        on_progress(lines_read);
    }
    Ok(trie)
}

/// Read a word list file
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - No line in the file is long enough to be inserted
pub fn load_word_list<F>(path: &Path, on_progress: F) -> Result<Trie>
where
    F: FnMut(usize),
{
    let file = File::open(path).with_path(path, "open word list")?;
    let trie =
        load_from_reader(BufReader::new(file), on_progress).with_path(path, "read word list")?;

    if trie.is_empty() {
        return Err(HexwordError::EmptyDictionary {
            path: path.to_path_buf(),
        });
    }
    Ok(trie)
}
