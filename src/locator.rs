//! Locating a single word in a [`Grid`].
//!
//! The search is two-phase: scan the grid row-major for *anchor* cells equal to
//! the word's first letter, then try to extend the word from the anchor in a
//! straight line. How a direction is picked at an anchor depends on the
//! [`Strategy`]:
//!
//! - [`Strategy::Exhaustive`] tries every direction in [`Direction::PROBE_ORDER`]
//!   and takes the first one along which the whole word matches.
//! - [`Strategy::Classic`] looks only at the neighbor cells, and the *last*
//!   direction in probe order whose neighbor equals the second letter is the
//!   only one tried. A word is missed when that pick is wrong even though an
//!   earlier direction would have matched. Kept for output parity with the
//!   historical tool.
//!
//! Either way a failed anchor just moves the scan on to the next anchor, and
//! every cell read is bounds-checked first.
//!
//! ```
//! use wordsearch::direction::Direction;
//! use wordsearch::grid::Grid;
//! use wordsearch::locator::{locate, Location, Match, Strategy};
//!
//! let grid = Grid::parse_from_str("CAT\nXAX\nXXX", None)?;
//! let found = locate(&grid, "TAC", Strategy::default())?;
//! assert_eq!(found, Location::Found(Match { row: 0, col: 2, direction: Direction::Left }));
//! # Ok::<(), wordsearch::errors::WordSearchError>(())
//! ```

use log::debug;

use crate::direction::Direction;
use crate::errors::WordSearchError;
use crate::grid::Grid;

/// How a direction is chosen at an anchor cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Strategy {
    /// First direction (in probe order) that yields a complete match.
    #[default]
    Exhaustive,
    /// Last direction (in probe order) whose neighbor matches the second letter; no fallback.
    ///
    /// A one-letter word has no second letter to probe for; it is found at its
    /// first anchor, reported as [`Direction::Right`], without looking at neighbors.
    Classic,
}

/// Where a word starts and which way it runs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Match {
    pub row: usize,
    pub col: usize,
    pub direction: Direction,
}

/// Result of searching for one word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Found(Match),
    NotFound,
}

impl Location {
    #[must_use]
    pub fn is_found(&self) -> bool {
        matches!(self, Location::Found(_))
    }
}

/// Find the first occurrence of `word` in `grid`.
///
/// Anchors are visited row-major; a one-letter word matches at its first
/// anchor and is reported as running [`Direction::Right`].
///
/// # Errors
///
/// [`WordSearchError::InvalidWord`] if `word` is empty.
pub fn locate(grid: &Grid, word: &str, strategy: Strategy) -> Result<Location, WordSearchError> {
    let letters = word.as_bytes();
    let Some(&first) = letters.first() else {
        return Err(WordSearchError::InvalidWord { word: word.to_string() });
    };

    for (row, col) in grid.positions().filter(|&(r, c)| grid.get(r, c) == Some(first)) {
        let direction = match strategy {
            Strategy::Exhaustive => Direction::PROBE_ORDER
                .into_iter()
                .find(|&dir| extends(grid, letters, row, col, dir)),
            Strategy::Classic => classic_direction(grid, letters, row, col)
                .filter(|&dir| extends(grid, letters, row, col, dir)),
        };

        if let Some(direction) = direction {
            debug!("{word}: anchor ({row},{col}) extends {direction}");
            return Ok(Location::Found(Match { row, col, direction }));
        }
        debug!("{word}: anchor ({row},{col}) rejected");
    }

    Ok(Location::NotFound)
}

/// The direction the classic probe settles on at an anchor: every neighbor
/// equal to the second letter overwrites the previous pick.
fn classic_direction(grid: &Grid, letters: &[u8], row: usize, col: usize) -> Option<Direction> {
    let Some(&second) = letters.get(1) else {
        return Some(Direction::Right);
    };

    Direction::PROBE_ORDER
        .into_iter()
        .filter(|dir| {
            dir.step_from(row, col, 1, grid.size())
                .and_then(|(r, c)| grid.get(r, c))
                == Some(second)
        })
        .last()
}

/// Whether `letters[1..]` follow the anchor along `direction`.
fn extends(grid: &Grid, letters: &[u8], row: usize, col: usize, direction: Direction) -> bool {
    letters.iter().enumerate().skip(1).all(|(i, &letter)| {
        direction
            .step_from(row, col, i, grid.size())
            .and_then(|(r, c)| grid.get(r, c))
            == Some(letter)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        Grid::parse_from_str(text, None).unwrap()
    }

    fn found(row: usize, col: usize, direction: Direction) -> Location {
        Location::Found(Match { row, col, direction })
    }

    /// A 5x5 grid of `z` with `word` written from the centre along `direction`.
    fn grid_with_word_from_centre(word: &str, direction: Direction) -> Grid {
        let size = 5;
        let mut cells = vec![b'z'; size * size];
        for (i, b) in word.bytes().enumerate() {
            let (r, c) = direction.step_from(2, 2, i, size).unwrap();
            cells[r * size + c] = b;
        }
        let text: String = cells
            .chunks(size)
            .map(|row| format!("{}\n", String::from_utf8_lossy(row)))
            .collect();
        grid(&text)
    }

    #[test]
    fn test_scenario_cat_grid() {
        let g = grid("CAT\nXAX\nXXX");
        assert_eq!(locate(&g, "CAT", Strategy::Exhaustive).unwrap(), found(0, 0, Direction::Right));
        assert_eq!(locate(&g, "TAC", Strategy::Exhaustive).unwrap(), found(0, 2, Direction::Left));
        assert_eq!(locate(&g, "DOG", Strategy::Exhaustive).unwrap(), Location::NotFound);
    }

    #[test]
    fn test_classic_cat_grid_picks_the_diagonal() {
        // C at (0,0) sees A to the right and down-right; down-right is probed later and
        // wins, then runs into X at (2,2). TAC fails the same way through down-left.
        let g = grid("CAT\nXAX\nXXX");
        assert_eq!(locate(&g, "CAT", Strategy::Classic).unwrap(), Location::NotFound);
        assert_eq!(locate(&g, "TAC", Strategy::Classic).unwrap(), Location::NotFound);
        assert_eq!(locate(&g, "DOG", Strategy::Classic).unwrap(), Location::NotFound);
    }

    #[test]
    fn test_every_direction_from_centre() {
        for direction in Direction::PROBE_ORDER {
            let g = grid_with_word_from_centre("abc", direction);
            for strategy in [Strategy::Classic, Strategy::Exhaustive] {
                assert_eq!(
                    locate(&g, "abc", strategy).unwrap(),
                    found(2, 2, direction),
                    "{direction} with {strategy:?}"
                );
            }
        }
    }

    #[test]
    fn test_absent_word() {
        let g = grid("ABCD\nEFGH\nIJKL\nMNOP");
        assert_eq!(locate(&g, "AEIQ", Strategy::Exhaustive).unwrap(), Location::NotFound);
        assert_eq!(locate(&g, "ZZ", Strategy::Classic).unwrap(), Location::NotFound);
    }

    #[test]
    fn test_path_leaving_grid_is_not_found() {
        let g = grid("ABC\nDEF\nGHI");
        // Right from (0,1) runs out after two letters
        assert_eq!(locate(&g, "BCX", Strategy::Exhaustive).unwrap(), Location::NotFound);
        assert_eq!(locate(&g, "BCX", Strategy::Classic).unwrap(), Location::NotFound);
        // Longer than the grid
        assert_eq!(locate(&g, "ABCA", Strategy::Exhaustive).unwrap(), Location::NotFound);
    }

    #[test]
    fn test_word_reaching_the_edge_is_found() {
        let g = grid("ABC\nDEF\nGHI");
        assert_eq!(locate(&g, "IEA", Strategy::Classic).unwrap(), found(2, 2, Direction::UpLeft));
        assert_eq!(locate(&g, "GEC", Strategy::Exhaustive).unwrap(), found(2, 0, Direction::UpRight));
    }

    #[test]
    fn test_classic_last_neighbor_wins() {
        // Anchor A at (1,1): B to the right (probed first) and B down-left (probed last).
        // Only the rightward path spells ABC.
        let g = grid("zzzz\nzABC\nBzzz\nzzzz");
        assert_eq!(locate(&g, "ABC", Strategy::Classic).unwrap(), Location::NotFound);
        assert_eq!(locate(&g, "ABC", Strategy::Exhaustive).unwrap(), found(1, 1, Direction::Right));
    }

    #[test]
    fn test_classic_failed_anchor_moves_to_next_anchor() {
        // First anchor has no usable neighbor; the second one spells the word.
        let g = grid("Azz\nzzz\nABC");
        assert_eq!(locate(&g, "ABC", Strategy::Classic).unwrap(), found(2, 0, Direction::Right));
    }

    #[test]
    fn test_first_anchor_in_row_major_order_wins() {
        let g = grid("zABz\nzzzz\nABzz\nzzzz");
        assert_eq!(locate(&g, "AB", Strategy::Exhaustive).unwrap(), found(0, 1, Direction::Right));
    }

    #[test]
    fn test_exhaustive_prefers_earlier_direction() {
        // AB runs both right and down from (1,1)
        let g = grid("zzz\nzAB\nzBz");
        assert_eq!(locate(&g, "AB", Strategy::Exhaustive).unwrap(), found(1, 1, Direction::Right));
        // Classic: Down is probed after Right, so Down wins
        assert_eq!(locate(&g, "AB", Strategy::Classic).unwrap(), found(1, 1, Direction::Down));
    }

    #[test]
    fn test_single_letter_word() {
        let g = grid("xy\nzy");
        for strategy in [Strategy::Classic, Strategy::Exhaustive] {
            assert_eq!(locate(&g, "y", strategy).unwrap(), found(0, 1, Direction::Right));
            assert_eq!(locate(&g, "q", strategy).unwrap(), Location::NotFound);
        }
    }

    #[test]
    fn test_case_sensitive() {
        let g = grid("CAT\nXAX\nXXX");
        assert_eq!(locate(&g, "cat", Strategy::Exhaustive).unwrap(), Location::NotFound);
    }

    #[test]
    fn test_empty_word_is_invalid() {
        let g = grid("AB\nCD");
        let err = locate(&g, "", Strategy::Exhaustive).unwrap_err();
        assert!(matches!(err, WordSearchError::InvalidWord { .. }));
    }

    #[test]
    fn test_locate_is_idempotent() {
        let g = grid("zzzz\nzABC\nBzzz\nzzzz");
        for strategy in [Strategy::Classic, Strategy::Exhaustive] {
            let first = locate(&g, "ABC", strategy).unwrap();
            let second = locate(&g, "ABC", strategy).unwrap();
            assert_eq!(first, second);
        }
    }
}
