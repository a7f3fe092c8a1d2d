//! Grid generation command
//!
//! Builds a random grid seeded with the given words and optionally writes it
//! to disk in the same format `find` reads.

use std::io;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::Grid;
use crate::grids::{generate, save_to_file};

/// Configuration for a generate run
pub struct GenerateConfig {
    pub words: Vec<String>,
    /// Fix the rng seed to make the grid reproducible
    pub seed: Option<u64>,
    /// Where to write the grid; `None` prints only
    pub output: Option<PathBuf>,
}

/// Result of a generate run
pub struct GenerateResult {
    pub grid: Grid,
    /// Words that did not fit, in the order they were given
    pub unplaced: Vec<String>,
    pub saved_to: Option<PathBuf>,
}

/// Generate a grid containing `config.words`, writing it out when asked to
///
/// # Errors
///
/// Returns an error if the grid cannot be written to `config.output`.
pub fn run_generate(config: GenerateConfig) -> io::Result<GenerateResult> {
    let generated = match config.seed {
        Some(seed) => generate(&config.words, &mut StdRng::seed_from_u64(seed)),
        None => generate(&config.words, &mut rand::rng()),
    };

    if let Some(path) = &config.output {
        save_to_file(&generated.grid, path)?;
    }

    Ok(GenerateResult {
        grid: generated.grid,
        unplaced: generated.unplaced,
        saved_to: config.output,
    })
}
