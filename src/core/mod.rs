//! Core domain types
//!
//! The grid and its coordinates. All types here are pure values with no I/O;
//! everything above them (search, persistence, CLI) builds on these.

mod coord;
mod grid;

pub use coord::{Coord, KNIGHT_MOVES};
pub use grid::{Grid, GridError};
