//! Generate error code documentation from the source of truth (the error enum).
//!
//! Codes, descriptions, details and help text come straight from
//! `WordSearchError::code()`, `description()`, `details()` and `help()`.
//!
//! Run with:
//! ```bash
//! cargo run --bin generate_error_docs > docs/ERROR_CODES.md
//! ```

use std::fmt::Write;
use std::io;

use wordsearch::errors::WordSearchError;

/// One instance of every variant, with representative field values
fn all_error_variants() -> Vec<WordSearchError> {
    vec![
        WordSearchError::FileNotFound {
            path: "puzzle.txt".to_string(),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory (os error 2)"),
        },
        WordSearchError::InvalidWord { word: String::new() },
        WordSearchError::IncompleteGrid { row: 4, col: 7, size: 10 },
        WordSearchError::EmptyGrid,
        WordSearchError::InvalidGridSize { size: 0 },
    ]
}

fn render_docs() -> Result<String, std::fmt::Error> {
    let mut out = String::new();
    writeln!(out, "# Error Code Reference\n")?;
    writeln!(out, "**This document is auto-generated from the source code. Do not edit manually.**\n")?;
    writeln!(out, "## Errors\n")?;

    for error in all_error_variants() {
        writeln!(out, "### {}: {}\n", error.code(), error.description())?;
        writeln!(out, "**Details:** {}\n", error.details())?;

        if let Some(help_text) = error.help() {
            writeln!(out, "**How to fix:**")?;
            writeln!(out, "```\n{help_text}\n```\n")?;
        }

        writeln!(out, "**Example error message:**")?;
        writeln!(out, "```\nError: {}\n```\n", error.display_detailed())?;
        writeln!(out, "---\n")?;
    }

    writeln!(out, "## Exit Status\n")?;
    writeln!(out, "Every error above makes `wordsearch` exit with status 1 after printing it to stderr.")?;
    writeln!(out, "Words that are not found are not errors; the run still exits with status 0.")?;
    Ok(out)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    print!("{}", render_docs()?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_docs_cover_every_code() {
        let docs = render_docs().unwrap();
        for error in all_error_variants() {
            assert!(docs.contains(&format!("### {}:", error.code())), "missing {}", error.code());
        }
    }

    #[test]
    fn test_docs_include_help_only_when_present() {
        let docs = render_docs().unwrap();
        let how_to_fix = docs.matches("**How to fix:**").count();
        let with_help = all_error_variants().iter().filter(|e| e.help().is_some()).count();
        assert_eq!(how_to_fix, with_help);
    }
}
