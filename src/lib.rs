//! Word search solver: grid and word-list loading, and the word locator.
//!
//! Shared by the `wordsearch` CLI and the `generate_error_docs` binary.

pub mod direction;
pub mod errors;
pub mod grid;
pub mod locator;
pub mod log;
pub mod puzzle;
pub mod word_list;
