//! `grid`: the square letter grid a puzzle is solved against.
//!
//! Parsing rules for grid text:
//! - Each line break moves to the next row and resets the column to 0.
//! - Any other non-alphabetic character (spaces, digits, `\r`) is dropped.
//! - Letters past column `size - 1` on a line, and lines past row `size - 1`,
//!   are ignored. This truncation is logged as a warning, not an error.
//! - If no size is given, it is the number of letters on the first line.
//! - Every cell must end up with a letter; otherwise the grid is rejected.
//!
//! Parsing is kept separate from file access: [`Grid::parse_from_bytes`] works on
//! any in-memory input, [`Grid::load_from_path`] reads a file and delegates to it.

use std::fmt;

use log::{debug, warn};

use crate::errors::WordSearchError;

/// An immutable `size`x`size` grid of ASCII letters, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<u8>,
}

impl Grid {
    /// Parse a grid from text.
    ///
    /// `size` fixes the dimension; `None` infers it from the first line.
    ///
    /// # Errors
    ///
    /// Same as [`Grid::parse_from_bytes`].
    pub fn parse_from_str(contents: &str, size: Option<usize>) -> Result<Grid, WordSearchError> {
        Self::parse_from_bytes(contents.as_bytes(), size)
    }

    /// Parse a grid from raw bytes. Only ASCII letters and `\n` matter, so the
    /// input does not have to be valid UTF-8.
    ///
    /// Rows are built as lines are read; nothing is allocated up front for
    /// cells the input cannot fill.
    ///
    /// # Errors
    ///
    /// - [`WordSearchError::InvalidGridSize`] if `size` is `Some(0)` or `size * size` overflows.
    /// - [`WordSearchError::EmptyGrid`] if the size must be inferred and the first line has no letters.
    /// - [`WordSearchError::IncompleteGrid`] if any cell is left without a letter.
    pub fn parse_from_bytes(contents: &[u8], size: Option<usize>) -> Result<Grid, WordSearchError> {
        let size = match size {
            Some(n) => n,
            None => {
                let first_line = contents.split(|&b| b == b'\n').next().unwrap_or_default();
                let n = first_line.iter().filter(|b| b.is_ascii_alphabetic()).count();
                if n == 0 {
                    return Err(WordSearchError::EmptyGrid);
                }
                debug!("Inferred grid size {n}x{n} from the first row");
                n
            }
        };
        if size == 0 || size.checked_mul(size).is_none() {
            return Err(WordSearchError::InvalidGridSize { size });
        }

        let mut lines = contents.split(|&b| b == b'\n');
        let mut cells = Vec::new();
        let mut overflowed = false;

        for row in 0..size {
            let line = lines.next().unwrap_or_default();
            let mut letters = line.iter().copied().filter(u8::is_ascii_alphabetic);
            let before = cells.len();
            cells.extend(letters.by_ref().take(size));
            let filled = cells.len() - before;
            if filled < size {
                return Err(WordSearchError::IncompleteGrid { row, col: filled, size });
            }
            overflowed |= letters.next().is_some();
        }

        // Rows past the last one are dropped; only letters there count as lost
        overflowed |= lines.flatten().any(u8::is_ascii_alphabetic);
        if overflowed {
            warn!("Grid input is larger than {size}x{size}; extra letters were ignored");
        }

        Ok(Grid { size, cells })
    }

    /// Read a grid file and parse it.
    ///
    /// # Errors
    ///
    /// [`WordSearchError::FileNotFound`] if the file cannot be read, plus every
    /// error of [`Grid::parse_from_bytes`].
    pub fn load_from_path<P: AsRef<std::path::Path>>(
        path: P,
        size: Option<usize>,
    ) -> Result<Grid, WordSearchError> {
        let path_ref = path.as_ref();
        let data = std::fs::read(path_ref).map_err(|source| WordSearchError::FileNotFound {
            path: path_ref.display().to_string(),
            source,
        })?;

        Self::parse_from_bytes(&data, size)
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The letter at `(row, col)`, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row < self.size && col < self.size {
            Some(self.cells[row * self.size + col])
        } else {
            None
        }
    }

    /// Rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        self.cells.chunks(self.size)
    }

    /// Every `(row, col)` in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.size).flat_map(move |row| (0..self.size).map(move |col| (row, col)))
    }
}

/// One row per line, letters concatenated, each line newline-terminated.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            // cells are ASCII letters by construction
            writeln!(f, "{}", String::from_utf8_lossy(row))?;
        }
        Ok(())
    }
}
