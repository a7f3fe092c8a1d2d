//! Grid persistence and generation
//!
//! Reading and writing grids as plain text files, plus random generation of
//! grids seeded with known words.

pub mod generator;
pub mod loader;

pub use generator::{GeneratedGrid, generate};
pub use loader::{LoadError, load_from_file, save_to_file};
