use std::process::ExitCode;
use clap::{Parser, ValueEnum};

use wordsearch::direction::LabelStyle;
use wordsearch::errors::WordSearchError;
use wordsearch::grid::Grid;
use wordsearch::locator::Strategy;
use wordsearch::puzzle::{self, Options};
use wordsearch::word_list::WordList;

/// Word search solver
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Grid file: one row of letters per line
    grid_file: String,

    /// Word-list file: whitespace-separated words
    word_list_file: String,

    /// Fixed grid size N (NxN); larger input is truncated. Inferred from the first row if omitted
    #[arg(short, long)]
    size: Option<usize>,

    /// How a direction is chosen at an anchor cell
    #[arg(long, value_enum, default_value_t = CliStrategy::Exhaustive)]
    strategy: CliStrategy,

    /// Direction names used in the report
    #[arg(long, value_enum, default_value_t = CliLabels::Compass)]
    labels: CliLabels,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliStrategy {
    /// Try every direction at each anchor; first complete match wins
    Exhaustive,
    /// Last neighbor matching the second letter wins, with no fallback
    Classic,
}

impl From<CliStrategy> for Strategy {
    fn from(s: CliStrategy) -> Self {
        match s {
            CliStrategy::Exhaustive => Strategy::Exhaustive,
            CliStrategy::Classic => Strategy::Classic,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum CliLabels {
    /// Right, Left, Down, Up, Up-Right, ...
    Compass,
    /// Forward, Backwards, Down, Upwards, Up-Right, ...
    Classic,
}

impl From<CliLabels> for LabelStyle {
    fn from(l: CliLabels) -> Self {
        match l {
            CliLabels::Compass => LabelStyle::Compass,
            CliLabels::Classic => LabelStyle::Classic,
        }
    }
}

/// Entry point of the word search CLI.
///
/// Delegates to [`try_main`], printing any error with its code and help text
/// before exiting with code 1.
fn main() -> ExitCode {
    let debug_enabled = std::env::var("WORDSEARCH_DEBUG").is_ok();
    wordsearch::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        if let Some(ws_err) = e.downcast_ref::<WordSearchError>() {
            eprintln!("Error: {}", ws_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load the grid and the word list; either failing stops here, before any output.
/// 3. Print the grid, then one result line per word in list order.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let grid = Grid::load_from_path(&cli.grid_file, cli.size)?;
    let words = WordList::load_from_path(&cli.word_list_file)?;
    let n = grid.size();
    log::debug!("Loaded {n}x{n} grid and {} words", words.len());

    let options = Options {
        strategy: cli.strategy.into(),
        labels: cli.labels.into(),
    };
    let results = puzzle::solve(&grid, &words, options);
    print!("{}", puzzle::render_report(&grid, &results, options.labels));

    let found = results.iter().filter(|r| r.location.is_found()).count();
    log::debug!("Found {found} of {} words", results.len());

    Ok(())
}
