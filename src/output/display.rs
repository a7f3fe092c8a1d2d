//! Display functions for command results

use super::formatters::format_path;
use crate::commands::{FindResult, GenerateResult};
use colored::Colorize;

/// Print the result of a find run
pub fn print_find_result(result: &FindResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Searching {} candidate words",
        result.candidates.to_string().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if verbose {
        println!("\n{}", result.grid);
    }

    println!();
    match &result.located {
        Some(located) => {
            println!(
                "{}",
                format!("✅ Found \"{}\"", located.word()).green().bold()
            );
            println!("   Path: {}", format_path(located.path()));
        }
        None => {
            println!("{}", "❌ No candidate word can be traced".red().bold());
        }
    }
}

/// Print the result of a generate run
pub fn print_generate_result(result: &GenerateResult) {
    println!("\n{}", result.grid);

    if !result.unplaced.is_empty() {
        println!();
        for word in &result.unplaced {
            println!("{}", format!("⚠️  Could not place \"{word}\"").yellow());
        }
    }

    if let Some(path) = &result.saved_to {
        println!(
            "\n{}",
            format!("✅ Saved to {}", path.display()).green().bold()
        );
    }
}
