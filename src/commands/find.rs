//! Word finding command
//!
//! Loads a grid from disk and searches it for the longest locatable word.

use std::path::PathBuf;

use crate::core::Grid;
use crate::grids::{LoadError, load_from_file};
use crate::search::{LocatedWord, find_longest_word};

/// Configuration for a find run
pub struct FindConfig {
    pub grid_path: PathBuf,
    pub words: Vec<String>,
}

/// Result of a find run
pub struct FindResult {
    /// The longest word that exists in the grid, if any
    pub located: Option<LocatedWord>,
    /// How many non-empty candidate words were considered
    pub candidates: usize,
    /// The grid that was searched, for display
    pub grid: Grid,
}

/// Load the grid at `config.grid_path` and search it for the longest word
///
/// Finding nothing is a normal outcome, reported as `located: None`.
///
/// # Errors
///
/// Returns an error if:
/// - The grid file cannot be read
/// - The file contents do not form a valid grid
pub fn run_find(config: &FindConfig) -> Result<FindResult, LoadError> {
    let grid = load_from_file(&config.grid_path)?;
    let located = find_longest_word(&grid, &config.words);

    Ok(FindResult {
        located,
        candidates: config.words.iter().filter(|word| !word.is_empty()).count(),
        grid,
    })
}
