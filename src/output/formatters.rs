//! Formatting utilities for terminal output

use crate::core::Coord;

/// Format a path as arrow-separated coordinates
#[must_use]
pub fn format_path(path: &[Coord]) -> String {
    path.iter()
        .map(Coord::to_string)
        .collect::<Vec<_>>()
        .join(" → ")
}
