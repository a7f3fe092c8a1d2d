//! Grid coordinates and knight-move offsets
//!
//! A `Coord` is a zero-based (row, column) pair identifying one grid cell.
//! It is a plain value type: two coordinates are the same cell exactly when
//! they compare equal.

use std::fmt;

/// Zero-based (row, column) position of a grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

/// The eight knight moves as (row delta, column delta) pairs.
///
/// The order is fixed and meaningful: the path search tries destinations in
/// exactly this order, so it decides which of several valid paths is found
/// first. Reordering it changes search results.
pub const KNIGHT_MOVES: [(isize, isize); 8] = [
    (-1, 2),
    (-1, -2),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (2, 1),
    (2, -1),
];

impl Coord {
    /// Create a coordinate from a zero-based row and column
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Apply a (row delta, column delta) offset
    ///
    /// Returns `None` if either component would go negative. Upper bounds are
    /// the grid's concern, not the coordinate's.
    ///
    /// # Examples
    /// ```
    /// use wordknight::core::Coord;
    ///
    /// assert_eq!(Coord::new(2, 1).offset((-1, 2)), Some(Coord::new(1, 3)));
    /// assert_eq!(Coord::new(0, 5).offset((-1, 2)), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn offset(self, (row_delta, col_delta): (isize, isize)) -> Option<Self> {
        let row = self.row.checked_add_signed(row_delta)?;
        let col = self.col.checked_add_signed(col_delta)?;
        Some(Self { row, col })
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
