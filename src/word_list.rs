//! `word_list`: the words to look for in a puzzle.
//!
//! The input format is a flat sequence of whitespace-separated tokens; each
//! token is one word. Unlike a dictionary, the list is kept exactly as given:
//! no case folding, no deduplication, no reordering, because the report lists
//! words in input order.
//!
//! The public API mirrors the grid loader:
//! - `parse_from_str(...)` works on in-memory text.
//! - `load_from_path(...)` reads a file and delegates to `parse_from_str`.

use crate::errors::WordSearchError;

/// Words to search for, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    pub words: Vec<String>,
}

impl WordList {
    /// Split `contents` on any whitespace (spaces, tabs, line breaks).
    #[must_use]
    pub fn parse_from_str(contents: &str) -> WordList {
        WordList {
            words: contents.split_whitespace().map(str::to_string).collect(),
        }
    }

    /// Read a word-list file and parse it. Bytes that are not valid UTF-8
    /// become `U+FFFD`, so such a word simply cannot be found.
    ///
    /// # Errors
    ///
    /// [`WordSearchError::FileNotFound`] if the file cannot be read.
    pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<WordList, WordSearchError> {
        let path_ref = path.as_ref();
        let data = std::fs::read(path_ref).map_err(|source| WordSearchError::FileNotFound {
            path: path_ref.display().to_string(),
            source,
        })?;

        Ok(Self::parse_from_str(&String::from_utf8_lossy(&data)))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_per_line() {
        let list = WordList::parse_from_str("CAT\nTAC\nDOG\n");
        assert_eq!(list.words, vec!["CAT", "TAC", "DOG"]);
    }

    #[test]
    fn test_parse_mixed_whitespace() {
        let list = WordList::parse_from_str("  CAT\tTAC \r\n\n DOG  ");
        assert_eq!(list.words, vec!["CAT", "TAC", "DOG"]);
    }

    #[test]
    fn test_parse_keeps_order_case_and_duplicates() {
        let list = WordList::parse_from_str("dog CAT dog");
        assert_eq!(list.words, vec!["dog", "CAT", "dog"]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(WordList::parse_from_str("").is_empty());
        assert!(WordList::parse_from_str(" \n\t\n").is_empty());
    }

    #[test]
    fn test_load_non_utf8_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/latin1_words.txt");
        let list = WordList::load_from_path(path).unwrap();
        assert_eq!(list.words, vec!["CAT", "caf\u{FFFD}", "TAC"]);
    }

    #[test]
    fn test_load_missing_file() {
        let err = WordList::load_from_path("no/such/words.txt").unwrap_err();
        assert!(matches!(err, WordSearchError::FileNotFound { .. }));
    }
}
