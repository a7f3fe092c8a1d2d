//! Depth-first path search with dead-end memoization
//!
//! The engine extends a partial letter path one knight move at a time. A
//! cell that fails to complete the word's remaining suffix at some letter
//! index is recorded in an elimination set for that index and never tried
//! there again. Because the search places no constraint on revisiting cells,
//! whether a cell can finish the suffix depends only on (index, cell), so
//! the memo is sound and caps the work per word at one failure per
//! (index, cell) pair.

use crate::core::{Coord, Grid};
use rustc_hash::FxHashSet;

/// Dead-end memo for one word attempt
///
/// One set per word index from 1 onward; index 0 never needs one because
/// starting cells come from the occurrence scan, not from knight moves.
/// Shared across every starting occurrence of the same word, then discarded.
pub(super) struct Eliminations {
    dead: Vec<FxHashSet<Coord>>,
}

impl Eliminations {
    /// Create empty elimination sets for a word of `word_len` letters
    pub(super) fn new(word_len: usize) -> Self {
        Self {
            dead: vec![FxHashSet::default(); word_len.saturating_sub(1)],
        }
    }

    /// Has `position` already failed to complete the suffix at `index`?
    pub(super) fn is_eliminated(&self, index: usize, position: Coord) -> bool {
        self.dead[index - 1].contains(&position)
    }

    /// Record that `position` cannot complete the suffix at `index`
    pub(super) fn eliminate(&mut self, index: usize, position: Coord) {
        self.dead[index - 1].insert(position);
    }
}

/// Try to extend `path` so it spells `letters[index..]`, starting with one
/// knight move away from `origin`
///
/// `origin` is the cell already matched for `letters[index - 1]`. On success
/// the matched cells are left appended to `path` and the function returns
/// `true`; on failure `path` is unchanged. Candidate cells are tried in
/// [`Grid::moves_from`] order and the first complete path wins, which makes
/// the result deterministic.
pub(super) fn extend_path(
    grid: &Grid,
    letters: &[char],
    index: usize,
    origin: Coord,
    eliminated: &mut Eliminations,
    path: &mut Vec<Coord>,
) -> bool {
    debug_assert!(index >= 1 && index < letters.len());

    let letter = letters[index];
    let last = letters.len() - 1;

    for position in Grid::moves_from(origin) {
        if eliminated.is_eliminated(index, position) {
            continue;
        }
        if grid.letter_at(position) == letter {
            path.push(position);
            if index == last || extend_path(grid, letters, index + 1, position, eliminated, path) {
                return true;
            }
            path.pop();
        }
        eliminated.eliminate(index, position);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(placements: &[(usize, usize, char)]) -> Grid {
        let mut cells = [['.'; Grid::SIZE]; Grid::SIZE];
        for &(row, col, letter) in placements {
            cells[row][col] = letter;
        }
        let rows: Vec<String> = cells.iter().map(|row| row.iter().collect()).collect();
        Grid::new(rows).unwrap()
    }

    fn search(grid: &Grid, word: &str, start: Coord) -> Option<Vec<Coord>> {
        let letters: Vec<char> = word.chars().collect();
        let mut eliminated = Eliminations::new(letters.len());
        let mut path = vec![start];
        extend_path(grid, &letters, 1, start, &mut eliminated, &mut path).then_some(path)
    }

    #[test]
    fn finds_a_straight_line_of_moves() {
        let grid = grid_with(&[(0, 0, 'a'), (1, 2, 'b'), (2, 4, 'c')]);
        let path = search(&grid, "abc", Coord::new(0, 0)).unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(1, 2), Coord::new(2, 4)]
        );
    }

    #[test]
    fn backtracks_out_of_a_dead_end() {
        // Both knight moves from (0,0) hold 'b', but only the branch through
        // (2,1) can reach a 'c'. The first branch must be abandoned.
        let grid = grid_with(&[(0, 0, 'a'), (1, 2, 'b'), (2, 1, 'b'), (4, 2, 'c')]);

        let path = search(&grid, "abc", Coord::new(0, 0)).unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(2, 1), Coord::new(4, 2)]
        );
    }

    #[test]
    fn failed_branch_leaves_path_unchanged() {
        let grid = grid_with(&[(0, 0, 'a')]);
        let letters: Vec<char> = "ab".chars().collect();
        let mut eliminated = Eliminations::new(letters.len());
        let mut path = vec![Coord::new(0, 0)];

        let found = extend_path(
            &grid,
            &letters,
            1,
            Coord::new(0, 0),
            &mut eliminated,
            &mut path,
        );

        assert!(!found);
        assert_eq!(path, vec![Coord::new(0, 0)]);
    }

    #[test]
    fn failures_are_recorded_per_index() {
        let grid = grid_with(&[(0, 0, 'a')]);
        let letters: Vec<char> = "ab".chars().collect();
        let mut eliminated = Eliminations::new(letters.len());
        let mut path = vec![Coord::new(0, 0)];

        extend_path(
            &grid,
            &letters,
            1,
            Coord::new(0, 0),
            &mut eliminated,
            &mut path,
        );

        // Both legal destinations from the corner failed at index 1
        assert!(eliminated.is_eliminated(1, Coord::new(1, 2)));
        assert!(eliminated.is_eliminated(1, Coord::new(2, 1)));
    }

    #[test]
    fn paths_may_revisit_cells() {
        // "aba" bounces back to its starting cell
        let grid = grid_with(&[(0, 0, 'a'), (1, 2, 'b')]);
        let path = search(&grid, "aba", Coord::new(0, 0)).unwrap();
        assert_eq!(
            path,
            vec![Coord::new(0, 0), Coord::new(1, 2), Coord::new(0, 0)]
        );
    }

    #[test]
    fn eliminations_are_independent_per_index() {
        let mut eliminated = Eliminations::new(3);
        let cell = Coord::new(4, 4);

        eliminated.eliminate(1, cell);

        assert!(eliminated.is_eliminated(1, cell));
        assert!(!eliminated.is_eliminated(2, cell));
    }
}
