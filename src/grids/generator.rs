//! Random grid generation
//!
//! Builds grids that are guaranteed to contain a given set of words, each
//! placed along a random knight walk. A step may land on a cell that already
//! holds the letter it needs, so words can share cells and cross each other.
//! Cells left empty after placement are filled with random ASCII lowercase
//! letters. Useful for producing test fixtures; the search engine itself
//! never generates anything.

use crate::core::{Coord, Grid};
use rand::Rng;
use rand::seq::SliceRandom;

type Cells = [[Option<char>; Grid::SIZE]; Grid::SIZE];

/// A generated grid together with the words that did not fit
pub struct GeneratedGrid {
    pub grid: Grid,
    /// Words for which no placement exists given the words placed before
    /// them, in their original casing
    pub unplaced: Vec<String>,
}

/// Generate a grid containing `words`, using `rng` for all placement choices
///
/// Words are placed in the order given, case-folded, with whitespace
/// ignored. Placement backtracks over starting cells and knight moves, so a
/// word is reported unplaced only when no placement exists at all. Pass a
/// seeded rng to make the output reproducible.
///
/// # Panics
/// Will not panic — every cell is filled before the grid is constructed.
///
/// # Examples
/// ```
/// use wordknight::grids::generate;
/// use wordknight::search::find_longest_word;
///
/// let generated = generate(&["fortran"], &mut rand::rng());
/// assert!(generated.unplaced.is_empty());
///
/// let found = find_longest_word(&generated.grid, &["fortran"]).unwrap();
/// assert_eq!(found.word(), "fortran");
/// ```
pub fn generate<S, R>(words: &[S], rng: &mut R) -> GeneratedGrid
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut cells: Cells = [[None; Grid::SIZE]; Grid::SIZE];
    let mut unplaced = Vec::new();

    for word in words {
        let letters: Vec<char> = word
            .as_ref()
            .to_lowercase()
            .chars()
            .filter(|letter| !letter.is_whitespace())
            .collect();
        if letters.is_empty() {
            continue;
        }
        if !place_word(&mut cells, &letters, rng) {
            unplaced.push(word.as_ref().to_string());
        }
    }

    for row in &mut cells {
        for cell in row {
            if cell.is_none() {
                *cell = Some(rng.random_range('a'..='z'));
            }
        }
    }

    let rows: Vec<String> = cells
        .iter()
        .map(|row| row.iter().map(|cell| cell.expect("cell filled above")).collect())
        .collect();
    let grid = Grid::new(rows).expect("generated rows are exactly the grid size");

    GeneratedGrid { grid, unplaced }
}

/// Try every starting cell in random order
fn place_word<R: Rng + ?Sized>(cells: &mut Cells, letters: &[char], rng: &mut R) -> bool {
    let mut origins: Vec<Coord> = (0..Grid::SIZE)
        .flat_map(|row| (0..Grid::SIZE).map(move |col| Coord::new(row, col)))
        .collect();
    origins.shuffle(rng);

    origins
        .into_iter()
        .any(|origin| claim_cell(cells, letters, 0, origin, rng))
}

/// Put `letters[index]` on `spot` if the cell is free or already holds that
/// letter, then place the rest of the word from there
///
/// Newly written cells are cleared again when the continuation fails, so a
/// failed attempt leaves no trace.
fn claim_cell<R: Rng + ?Sized>(
    cells: &mut Cells,
    letters: &[char],
    index: usize,
    spot: Coord,
    rng: &mut R,
) -> bool {
    let done = index + 1 == letters.len();
    match cells[spot.row][spot.col] {
        None => {
            cells[spot.row][spot.col] = Some(letters[index]);
            if done || place_next(cells, letters, index + 1, spot, rng) {
                return true;
            }
            cells[spot.row][spot.col] = None;
            false
        }
        Some(existing) if existing == letters[index] => {
            done || place_next(cells, letters, index + 1, spot, rng)
        }
        Some(_) => false,
    }
}

/// Walk one knight move onward, in random order
fn place_next<R: Rng + ?Sized>(
    cells: &mut Cells,
    letters: &[char],
    index: usize,
    from: Coord,
    rng: &mut R,
) -> bool {
    let mut moves: Vec<Coord> = Grid::moves_from(from).collect();
    moves.shuffle(rng);

    moves
        .into_iter()
        .any(|dest| claim_cell(cells, letters, index, dest, rng))
}
