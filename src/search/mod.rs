//! Word search over knight moves
//!
//! Depth-first backtracking with per-word dead-end memoization. Everything
//! here is single-threaded and allocation-light: one path vector and one set
//! of eliminations per word attempt.

mod backtrack;
mod locator;

pub use locator::{LocatedWord, find_longest_word};
