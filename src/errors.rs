//! Error types for loading puzzles and locating words, with error codes and helpful messages.
//!
//! # Error Codes
//!
//! Each error variant has a unique code (W001-W005) for documentation lookup:
//!
//! - W001: `FileNotFound` (Grid or word-list file missing or unreadable)
//! - W002: `InvalidWord` (Empty word)
//! - W003: `IncompleteGrid` (Grid input left a cell unfilled)
//! - W004: `EmptyGrid` (No letters to infer a grid size from)
//! - W005: `InvalidGridSize` (Grid size of zero or too large)
//!
//! # Examples
//!
//! ```
//! use wordsearch::errors::WordSearchError;
//! use wordsearch::grid::Grid;
//!
//! match Grid::parse_from_str("AB\nC", None) {
//!     Err(e) => {
//!         println!("Error: {}", e);
//!         println!("Code: {}", e.code());
//!         if let Some(help) = e.help() {
//!             println!("Help: {}", help);
//!         }
//!         assert_eq!(e.code(), "W003");
//!     }
//!     Ok(_) => unreachable!(),
//! }
//! ```

use std::io;

/// Unified error type for grid loading, word-list loading and word location.
#[derive(Debug, thiserror::Error)]
pub enum WordSearchError {
    /// A puzzle input file could not be opened or read.
    #[error("cannot open {path}: {source}")]
    FileNotFound {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The word to locate was empty.
    #[error("invalid word: \"{word}\" (words must contain at least one character)")]
    InvalidWord { word: String },

    /// The grid text ran out before every cell of the `size`x`size` grid was filled.
    #[error("incomplete grid: cell ({row},{col}) of a {size}x{size} grid was never filled")]
    IncompleteGrid { row: usize, col: usize, size: usize },

    /// No size was given and the first row had no letters to infer one from.
    #[error("empty grid: no letters found to infer the grid size from")]
    EmptyGrid,

    /// An explicit grid size of zero, or one whose cell count overflows `usize`.
    #[error("invalid grid size: {size}")]
    InvalidGridSize { size: usize },
}

impl WordSearchError {
    /// Returns the error code for this error variant
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            WordSearchError::FileNotFound { .. } => "W001",
            WordSearchError::InvalidWord { .. } => "W002",
            WordSearchError::IncompleteGrid { .. } => "W003",
            WordSearchError::EmptyGrid => "W004",
            WordSearchError::InvalidGridSize { .. } => "W005",
        }
    }

    /// Returns a short description of this error type (for documentation)
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            WordSearchError::FileNotFound { .. } => "Grid or word-list file missing or unreadable",
            WordSearchError::InvalidWord { .. } => "Empty word",
            WordSearchError::IncompleteGrid { .. } => "Grid input left a cell unfilled",
            WordSearchError::EmptyGrid => "No letters to infer a grid size from",
            WordSearchError::InvalidGridSize { .. } => "Grid size of zero or too large",
        }
    }

    /// Returns detailed explanation of this error type (for documentation)
    #[must_use]
    pub fn details(&self) -> &'static str {
        match self {
            WordSearchError::FileNotFound { .. } => "One of the two input files could not be opened or read. The solver stops before touching the grid and exits with a non-zero status.",
            WordSearchError::InvalidWord { .. } => "An empty word cannot be located: it would trivially match everywhere. Word lists split on whitespace never produce one, so this only arises through the library API.",
            WordSearchError::IncompleteGrid { .. } => "Every line of the grid file fills one row; letters are counted per line. A line with fewer letters than the grid size, or a file with fewer lines than the grid size, leaves cells without a letter.",
            WordSearchError::EmptyGrid => "When no grid size is given, it is taken from the number of letters on the first line of the grid file. That line had none.",
            WordSearchError::InvalidGridSize { .. } => "The grid size given on the command line must be at least 1, and the number of cells (size x size) must be addressable.",
        }
    }

    /// Returns a helpful suggestion for this error
    #[must_use]
    pub fn help(&self) -> Option<&'static str> {
        match self {
            WordSearchError::FileNotFound { .. } => Some("Check the path and permissions. Usage: wordsearch <GRID_FILE> <WORD_LIST_FILE>"),
            WordSearchError::IncompleteGrid { .. } => Some("Make sure every row has as many letters as the grid is wide, or pass a smaller --size"),
            WordSearchError::EmptyGrid => Some("Remove leading blank lines from the grid file, or pass --size explicitly"),
            WordSearchError::InvalidGridSize { .. } => Some("Example: --size 10"),
            WordSearchError::InvalidWord { .. } => None,
        }
    }

    /// Formats the error with code and optional help text
    #[must_use]
    pub fn display_detailed(&self) -> String {
        format_error_with_code_and_help(&self.to_string(), self.code(), self.help())
    }
}

/// Helper function to format error messages with code and optional help text
pub(crate) fn format_error_with_code_and_help(base_msg: &str, code: &str, help: Option<&str>) -> String {
    if let Some(help_text) = help {
        format!("{base_msg} ({code})\n{help_text}")
    } else {
        format!("{base_msg} ({code})")
    }
}
