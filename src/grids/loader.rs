//! Grid file loading and saving
//!
//! A grid file holds exactly eight lines of eight single-character tokens.
//! Tokens may be space-separated or run together; case does not matter
//! because the grid folds everything on construction. Saving always writes
//! the space-separated lowercase form, so saved grids load back unchanged.

use crate::core::{Grid, GridError};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for loading a grid from a file
#[derive(Debug)]
pub enum LoadError {
    /// The file could not be read
    Io(io::Error),
    /// The file was read but does not describe a valid grid
    Malformed(GridError),
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "Failed to read grid file: {err}"),
            Self::Malformed(err) => write!(f, "Invalid grid file: {err}"),
        }
    }
}

impl std::error::Error for LoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Malformed(err) => Some(err),
        }
    }
}

impl From<io::Error> for LoadError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<GridError> for LoadError {
    fn from(err: GridError) -> Self {
        Self::Malformed(err)
    }
}

/// Load a grid from a file
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read and
/// [`LoadError::Malformed`] if its contents are not an 8x8 grid.
///
/// # Examples
/// ```no_run
/// use wordknight::grids::loader::load_from_file;
///
/// let grid = load_from_file("data/sample-grid.txt").unwrap();
/// println!("{grid}");
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Grid, LoadError> {
    let content = fs::read_to_string(path)?;
    Ok(Grid::new(content.lines())?)
}

/// Save a grid to a file in the space-separated format
///
/// # Errors
///
/// Returns an I/O error if the file cannot be written.
pub fn save_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> io::Result<()> {
    let mut text = grid.to_string();
    text.push('\n');
    fs::write(path, text)
}
