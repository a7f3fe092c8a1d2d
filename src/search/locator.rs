//! Longest-word location on a grid
//!
//! The locator orders candidate words longest first (alphabetically among
//! equals), then runs the backtracking engine over each word's first-letter
//! occurrences in grid scan order. The first word that completes wins, so
//! the search never does more work than its greedy contract requires.

use super::backtrack::{Eliminations, extend_path};
use crate::core::{Coord, Grid};

/// A word found on a grid together with the cells that spell it
///
/// The word keeps the casing it was supplied with; the path holds one
/// coordinate per letter, in word order. Paths may revisit cells, since a
/// knight is free to jump back to where it has been.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedWord {
    word: String,
    path: Vec<Coord>,
}

impl LocatedWord {
    /// The matched word, in its original casing
    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The cells spelling the word, one per letter
    #[inline]
    #[must_use]
    pub fn path(&self) -> &[Coord] {
        &self.path
    }
}

/// A candidate word prepared for searching
struct Candidate<'a> {
    original: &'a str,
    letters: Vec<char>,
    len: usize,
}

/// Find the longest word from `words` that a knight can spell on `grid`
///
/// Candidates are tried longest first; equal lengths are tried in ascending
/// case-folded alphabetic order, so with `foo` and `bar` both on the grid
/// the result is `bar`. Matching is case-insensitive but the returned word
/// keeps its original casing. Empty entries are discarded without error.
///
/// Returns `None` when no candidate can be spelled — a normal outcome, not
/// an error.
///
/// # Examples
/// ```
/// use wordknight::core::Coord;
/// use wordknight::core::Grid;
/// use wordknight::search::find_longest_word;
///
/// let grid = Grid::new([
///     "c.......",
///     "..a.....",
///     "....b...",
///     "........",
///     "........",
///     "........",
///     "........",
///     "........",
/// ])
/// .unwrap();
///
/// let found = find_longest_word(&grid, &["cart", "cab"]).unwrap();
/// assert_eq!(found.word(), "cab");
/// assert_eq!(
///     found.path(),
///     &[Coord::new(0, 0), Coord::new(1, 2), Coord::new(2, 4)]
/// );
/// ```
#[must_use]
pub fn find_longest_word<S: AsRef<str>>(grid: &Grid, words: &[S]) -> Option<LocatedWord> {
    let mut candidates: Vec<Candidate<'_>> = words
        .iter()
        .map(AsRef::as_ref)
        .filter(|word| !word.is_empty())
        .map(|word| Candidate {
            original: word,
            letters: word.to_lowercase().chars().collect(),
            len: word.chars().count(),
        })
        .collect();

    // Longest first, then case-folded alphabetic. The sort is stable, so
    // candidates that fold identically keep their supplied order.
    candidates.sort_by(|a, b| b.len.cmp(&a.len).then_with(|| a.letters.cmp(&b.letters)));

    candidates.iter().find_map(|candidate| {
        locate_word(grid, &candidate.letters).map(|path| LocatedWord {
            word: candidate.original.to_string(),
            path,
        })
    })
}

/// Search one case-folded word over every occurrence of its first letter
///
/// The elimination sets live for the whole word: a cell proven unable to
/// finish the suffix at some index stays eliminated when later starting
/// occurrences reach that index.
fn locate_word(grid: &Grid, letters: &[char]) -> Option<Vec<Coord>> {
    debug_assert!(!letters.is_empty(), "empty words are filtered before here");

    let mut eliminated = Eliminations::new(letters.len());

    for origin in grid.occurrences_of(letters[0]) {
        let mut path = vec![origin];
        if letters.len() == 1 || extend_path(grid, letters, 1, origin, &mut eliminated, &mut path) {
            return Some(path);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KNIGHT_MOVES;

    fn grid_with(placements: &[(usize, usize, char)]) -> Grid {
        let mut cells = [['.'; Grid::SIZE]; Grid::SIZE];
        for &(row, col, letter) in placements {
            cells[row][col] = letter;
        }
        let rows: Vec<String> = cells.iter().map(|row| row.iter().collect()).collect();
        Grid::new(rows).unwrap()
    }

    fn sample_grid() -> Grid {
        Grid::new([
            "qwertnui", "opaadfgh", "tklzxcvb", "nmrwfrty", "uiopasdf", "ghjolzxc", "vbnmqwer",
            "tyuiopas",
        ])
        .unwrap()
    }

    #[allow(clippy::cast_possible_wrap)]
    fn assert_valid_path(grid: &Grid, located: &LocatedWord) {
        let letters: Vec<char> = located.word().to_lowercase().chars().collect();
        assert_eq!(located.path().len(), letters.len());

        for (&coord, &letter) in located.path().iter().zip(&letters) {
            assert_eq!(grid.letter_at(coord), letter);
        }

        for step in located.path().windows(2) {
            let delta = (
                step[1].row as isize - step[0].row as isize,
                step[1].col as isize - step[0].col as isize,
            );
            assert!(KNIGHT_MOVES.contains(&delta), "{delta:?} is not a knight move");
        }
    }

    #[test]
    fn regression_grid_finds_foo_but_not_bar() {
        let grid = sample_grid();
        let found = find_longest_word(&grid, &["foo", "bar"]).unwrap();

        // "bar" sorts first but has no 'a' a knight move away from either
        // 'b'; "foo" completes from the second 'f'.
        assert_eq!(found.word(), "foo");
        assert_eq!(
            found.path(),
            &[Coord::new(3, 4), Coord::new(5, 3), Coord::new(7, 4)]
        );
        assert_valid_path(&grid, &found);
    }

    #[test]
    fn longer_word_wins_over_shorter() {
        let grid = grid_with(&[
            (0, 0, 'a'),
            (1, 2, 'b'),
            (2, 4, 'c'),
            (3, 6, 'd'),
            (7, 7, 'x'),
            (6, 5, 'y'),
            (5, 3, 'z'),
        ]);

        // Both words are on the grid; length decides.
        let found = find_longest_word(&grid, &["xyz", "abcd"]).unwrap();
        assert_eq!(found.word(), "abcd");
        assert_eq!(
            found.path(),
            &[
                Coord::new(0, 0),
                Coord::new(1, 2),
                Coord::new(2, 4),
                Coord::new(3, 6),
            ]
        );
        assert_valid_path(&grid, &found);
    }

    #[test]
    fn alphabetic_order_breaks_length_ties() {
        let grid = grid_with(&[
            (0, 0, 'b'),
            (1, 2, 'a'),
            (2, 4, 't'),
            (7, 0, 'c'),
            (6, 2, 'a'),
            (7, 4, 't'),
        ]);

        // Both "bat" and "cat" are on the grid; "bat" sorts first.
        let found = find_longest_word(&grid, &["cat", "bat"]).unwrap();
        assert_eq!(found.word(), "bat");
        assert_eq!(
            found.path(),
            &[Coord::new(0, 0), Coord::new(1, 2), Coord::new(2, 4)]
        );
    }

    #[test]
    fn matching_is_case_insensitive_but_casing_is_preserved() {
        let found = find_longest_word(&sample_grid(), &["FOO"]).unwrap();
        assert_eq!(found.word(), "FOO");
        assert_eq!(
            found.path(),
            &[Coord::new(3, 4), Coord::new(5, 3), Coord::new(7, 4)]
        );
    }

    #[test]
    fn identical_words_keep_supplied_order() {
        // "FOO" and "foo" fold to the same candidate; the stable sort keeps
        // the first one supplied.
        let found = find_longest_word(&sample_grid(), &["FOO", "foo"]).unwrap();
        assert_eq!(found.word(), "FOO");
    }

    #[test]
    fn single_letter_word_uses_first_occurrence_in_scan_order() {
        let grid = sample_grid();
        let found = find_longest_word(&grid, &["a"]).unwrap();
        assert_eq!(found.word(), "a");
        assert_eq!(found.path(), &[Coord::new(1, 2)]);
    }

    #[test]
    fn unrealizable_words_yield_none() {
        // (0,0) and (7,7) are not a knight move apart
        let grid = grid_with(&[(0, 0, 'a'), (7, 7, 'b')]);
        assert_eq!(find_longest_word(&grid, &["ab"]), None);
        assert_eq!(find_longest_word(&grid, &["missing"]), None);
    }

    #[test]
    fn empty_candidate_list_yields_none() {
        let words: Vec<&str> = Vec::new();
        assert_eq!(find_longest_word(&sample_grid(), &words), None);
    }

    #[test]
    fn empty_entries_are_discarded_without_error() {
        let grid = sample_grid();
        assert_eq!(find_longest_word(&grid, &["", ""]), None);

        // Empty entries never block a real candidate
        let found = find_longest_word(&grid, &["", "foo"]).unwrap();
        assert_eq!(found.word(), "foo");
    }

    #[test]
    fn repeated_searches_are_deterministic() {
        let grid = sample_grid();
        let words = ["foo", "bar", "a"];

        let first = find_longest_word(&grid, &words);
        let second = find_longest_word(&grid, &words);
        assert_eq!(first, second);
    }

    #[test]
    fn owned_strings_are_accepted() {
        let words: Vec<String> = vec!["foo".to_string(), "bar".to_string()];
        let found = find_longest_word(&sample_grid(), &words).unwrap();
        assert_eq!(found.word(), "foo");
    }
}
