//! Knight-path word search - CLI
//!
//! Finds the longest word a chess knight can spell on a letter grid, and
//! generates puzzle grids to search.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordknight::{
    commands::{FindConfig, GenerateConfig, run_find, run_generate},
    output::{print_find_result, print_generate_result},
};

#[derive(Parser)]
#[command(
    name = "wordknight",
    about = "Find the longest word a chess knight can spell on a letter grid",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search a stored grid for the longest locatable word
    Find {
        /// Path to the grid file
        #[arg(short, long)]
        grid: PathBuf,

        /// Candidate words to search for
        #[arg(required = true)]
        words: Vec<String>,

        /// Show the grid alongside the result
        #[arg(short, long)]
        verbose: bool,
    },

    /// Generate a random grid that contains the given words
    Generate {
        /// Words to place in the grid
        #[arg(required = true)]
        words: Vec<String>,

        /// Write the grid to this file as well as printing it
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Fix the rng seed to make the grid reproducible
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

/// Expand `@file` arguments into the lines of the named file
///
/// Each non-empty line becomes one argument, so long word lists can live in
/// a file. Expansion is not recursive.
fn expand_arg_files<I>(args: I) -> Result<Vec<String>>
where
    I: IntoIterator<Item = String>,
{
    let mut expanded = Vec::new();
    for arg in args {
        if let Some(path) = arg.strip_prefix('@') {
            let content = fs::read_to_string(path)
                .with_context(|| format!("cannot read argument file {path}"))?;
            expanded.extend(
                content
                    .lines()
                    .map(str::trim)
                    .filter(|line| !line.is_empty())
                    .map(String::from),
            );
        } else {
            expanded.push(arg);
        }
    }
    Ok(expanded)
}

fn main() -> Result<()> {
    let args = expand_arg_files(std::env::args())?;
    let cli = Cli::parse_from(args);

    match cli.command {
        Commands::Find {
            grid,
            words,
            verbose,
        } => run_find_command(grid, words, verbose),
        Commands::Generate {
            words,
            output,
            seed,
        } => run_generate_command(words, output, seed),
    }
}

fn run_find_command(grid: PathBuf, words: Vec<String>, verbose: bool) -> Result<()> {
    let config = FindConfig {
        grid_path: grid,
        words,
    };

    // An empty search result is a normal outcome, not an error
    let result = run_find(&config)?;
    print_find_result(&result, verbose);
    Ok(())
}

fn run_generate_command(
    words: Vec<String>,
    output: Option<PathBuf>,
    seed: Option<u64>,
) -> Result<()> {
    let config = GenerateConfig {
        words,
        seed,
        output,
    };

    let result = run_generate(config).context("cannot write the generated grid")?;
    print_generate_result(&result);
    Ok(())
}
