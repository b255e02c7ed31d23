//! Solving a whole puzzle: every word of a [`WordList`] against one [`Grid`].
//!
//! # Examples
//!
//! ```
//! use wordsearch::grid::Grid;
//! use wordsearch::puzzle::{self, Options};
//! use wordsearch::word_list::WordList;
//!
//! let grid = Grid::parse_from_str("CAT\nXAX\nXXX", None)?;
//! let words = WordList::parse_from_str("CAT DOG");
//! let report = puzzle::solve(&grid, &words, Options::default());
//!
//! let lines: Vec<String> = report.iter().map(|r| r.render(Options::default().labels)).collect();
//! assert_eq!(lines, vec![
//!     "Found word CAT at location (0,0) going in the Right direction.",
//!     "DOG was not found!",
//! ]);
//! # Ok::<(), wordsearch::errors::WordSearchError>(())
//! ```

use log::{debug, warn};

use crate::direction::LabelStyle;
use crate::grid::Grid;
use crate::locator::{locate, Location, Match, Strategy};
use crate::word_list::WordList;

/// Header printed above the grid.
pub const PUZZLE_HEADER: &str = "Here is the puzzle we will be solving:";

/// Knobs for a puzzle run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Options {
    pub strategy: Strategy,
    pub labels: LabelStyle,
}

/// Outcome for one word of the list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordResult {
    pub word: String,
    pub location: Location,
}

impl WordResult {
    /// The report line for this word.
    #[must_use]
    pub fn render(&self, labels: LabelStyle) -> String {
        match self.location {
            Location::Found(Match { row, col, direction }) => format!(
                "Found word {} at location ({row},{col}) going in the {} direction.",
                self.word,
                direction.label_in(labels)
            ),
            Location::NotFound => format!("{} was not found!", self.word),
        }
    }
}

/// Locate every word in list order.
///
/// An invalid word is reported as not found rather than aborting the run.
#[must_use]
pub fn solve(grid: &Grid, words: &WordList, options: Options) -> Vec<WordResult> {
    let n = grid.size();
    debug!("Solving {} words against a {n}x{n} grid with {:?}", words.len(), options.strategy);

    words
        .words
        .iter()
        .map(|word| {
            let location = locate(grid, word, options.strategy).unwrap_or_else(|e| {
                warn!("{}", e.display_detailed());
                Location::NotFound
            });
            WordResult { word: word.clone(), location }
        })
        .collect()
}

/// The full console report: header, grid rows, then one line per word.
#[must_use]
pub fn render_report(grid: &Grid, results: &[WordResult], labels: LabelStyle) -> String {
    let mut out = format!("{PUZZLE_HEADER}\n{grid}");
    for result in results {
        out.push_str(&result.render(labels));
        out.push('\n');
    }
    out
}
