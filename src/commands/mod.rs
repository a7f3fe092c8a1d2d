//! Command implementations

pub mod find;
pub mod generate;

pub use find::{FindConfig, FindResult, run_find};
pub use generate::{GenerateConfig, GenerateResult, run_generate};
