//! The 8x8 letter grid
//!
//! A `Grid` stores one character per cell, case-folded at construction so
//! every later comparison is case-insensitive. It is immutable after
//! construction and answers three queries: the letter at a cell, the cells
//! holding a given letter, and the cells one knight move away from a cell.

use super::coord::{Coord, KNIGHT_MOVES};
use std::fmt;

/// Fixed-size square grid of case-folded characters
///
/// Rows are stored row-major; coordinates are zero-based (row, column).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: [[char; Grid::SIZE]; Grid::SIZE],
}

/// Error type for malformed grid input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The input did not have exactly `Grid::SIZE` rows
    WrongRowCount(usize),
    /// A row did not have exactly `Grid::SIZE` characters once whitespace
    /// was removed and the row was case-folded
    WrongRowLength { row: usize, len: usize },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongRowCount(count) => {
                write!(f, "Grid must have exactly {} rows, got {count}", Grid::SIZE)
            }
            Self::WrongRowLength { row, len } => write!(
                f,
                "Row {row} must have exactly {} letters, got {len}",
                Grid::SIZE
            ),
        }
    }
}

impl std::error::Error for GridError {}

impl Grid {
    /// Number of rows and columns
    pub const SIZE: usize = 8;

    /// Build a grid from `SIZE` rows of `SIZE` characters each
    ///
    /// Whitespace inside a row is ignored, so `"q w e r t n u i"` and
    /// `"qwertnui"` describe the same row. Every character is case-folded,
    /// which makes all later lookups case-insensitive. Row length is checked
    /// after folding, so a character whose lowercase form expands to several
    /// characters makes its row malformed.
    ///
    /// # Errors
    /// Returns `GridError` if the row count or any effective row length does
    /// not equal [`Grid::SIZE`].
    ///
    /// # Examples
    /// ```
    /// use wordknight::core::{Coord, Grid};
    ///
    /// let grid = Grid::new([
    ///     "Q W E R T N U I",
    ///     "o p a a d f g h",
    ///     "t k l z x c v b",
    ///     "n m r w f r t y",
    ///     "u i o p a s d f",
    ///     "g h j o l z x c",
    ///     "v b n m q w e r",
    ///     "t y u i o p a s",
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(grid.letter_at(Coord::new(0, 0)), 'q');
    /// assert!(Grid::new(["qwertnui"]).is_err());
    /// ```
    pub fn new<I, S>(rows: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let folded: Vec<String> = rows
            .into_iter()
            .map(|row| {
                let stripped: String = row
                    .as_ref()
                    .chars()
                    .filter(|letter| !letter.is_whitespace())
                    .collect();
                stripped.to_lowercase()
            })
            .collect();

        if folded.len() != Self::SIZE {
            return Err(GridError::WrongRowCount(folded.len()));
        }

        let mut cells = [['\0'; Self::SIZE]; Self::SIZE];
        for (row, letters) in folded.iter().enumerate() {
            let len = letters.chars().count();
            if len != Self::SIZE {
                return Err(GridError::WrongRowLength { row, len });
            }
            for (col, letter) in letters.chars().enumerate() {
                cells[row][col] = letter;
            }
        }

        Ok(Self { cells })
    }

    /// Get the letter in a cell
    ///
    /// # Panics
    /// Panics if the coordinate lies outside the grid. [`Grid::moves_from`]
    /// never yields such a coordinate, so this can only fire on direct misuse.
    #[inline]
    #[must_use]
    pub fn letter_at(&self, position: Coord) -> char {
        self.cells[position.row][position.col]
    }

    /// Enumerate the cells holding `letter`, row-major
    ///
    /// The argument is case-folded, so `occurrences_of('A')` and
    /// `occurrences_of('a')` yield the same cells. The scan order is fixed:
    /// top-to-bottom, left-to-right. It decides which starting cell the word
    /// search tries first, so it must stay stable.
    pub fn occurrences_of(&self, letter: char) -> impl Iterator<Item = Coord> + '_ {
        let letter = fold(letter);
        self.cells.iter().enumerate().flat_map(move |(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter_map(move |(col, &cell)| (cell == letter).then_some(Coord::new(row, col)))
        })
    }

    /// Enumerate the cells one knight move away from `origin`
    ///
    /// Off-grid destinations are excluded, leaving up to 8 coordinates. The
    /// enumeration follows [`KNIGHT_MOVES`] order exactly; like the scan
    /// order, it is load-bearing for which path the word search finds.
    pub fn moves_from(origin: Coord) -> impl Iterator<Item = Coord> {
        KNIGHT_MOVES.iter().filter_map(move |&step| {
            origin
                .offset(step)
                .filter(|dest| dest.row < Self::SIZE && dest.col < Self::SIZE)
        })
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            if row > 0 {
                writeln!(f)?;
            }
            for (col, letter) in cells.iter().enumerate() {
                if col > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}

/// Case-fold a single character
///
/// Characters whose lowercase form expands to several characters are left
/// unchanged; such characters can never be stored in a grid cell anyway.
fn fold(letter: char) -> char {
    let mut lowered = letter.to_lowercase();
    match (lowered.next(), lowered.next()) {
        (Some(folded), None) => folded,
        _ => letter,
    }
}
