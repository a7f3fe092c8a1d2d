//! Knight-path word search
//!
//! Finds the longest word from a candidate list that a chess knight could
//! spell on an 8x8 letter grid, stepping from letter to letter and free to
//! revisit cells it has already used.
//!
//! # Quick Start
//!
//! ```rust
//! use wordknight::core::Grid;
//! use wordknight::search::find_longest_word;
//!
//! let grid = Grid::new([
//!     "c.......",
//!     "..a.....",
//!     "....b...",
//!     "........",
//!     "........",
//!     "........",
//!     "........",
//!     "........",
//! ])
//! .unwrap();
//!
//! // "cart" is longer but cannot be traced, so the search falls back to "cab"
//! let found = find_longest_word(&grid, &["cart", "cab"]).unwrap();
//! assert_eq!(found.word(), "cab");
//! assert_eq!(found.path().len(), 3);
//! ```

// Core domain types
pub mod core;

// Path search
pub mod search;

// Grid storage and generation
pub mod grids;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
