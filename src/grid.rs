//! The logical letter grid.

use std::{fmt::Display, ops::Index};

use array2d::Array2D;

use crate::{coord::Coord, shuffle::RandomOrder};

/// Returns whether two letters are the same, ignoring case.
pub fn same_letter(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}

/// A `width` x `height` grid of letters. Cells start out empty, get a letter when a word path is committed over
/// them or when filler is added, and never change letter after that.
///
/// The grid holds letters only; anything visual tied to a cell belongs to whoever renders it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cells: Array2D<Option<char>>,
}

impl Grid {
    /// Creates an empty grid of `width` columns and `height` rows.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2D::filled_with(None, height, width),
        }
    }

    /// The number of columns.
    pub fn width(&self) -> usize {
        self.cells.num_columns()
    }

    /// The number of rows.
    pub fn height(&self) -> usize {
        self.cells.num_rows()
    }

    /// Converts signed event coordinates to a [Coord], or [`Option::None`] if they are outside the grid.
    pub fn coord(&self, x: i32, y: i32) -> Option<Coord> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;

        self.contains(Coord { x, y }).then_some(Coord { x, y })
    }

    /// Returns whether `coord` lies inside the grid.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x < self.width() && coord.y < self.height()
    }

    /// Gets the letter at `coord`, returning [`Option::None`] if the cell is empty or out of bounds.
    pub fn get(&self, coord: Coord) -> Option<char> {
        self.cells.get(coord.y, coord.x).copied().flatten()
    }

    /// Iterates over every coordinate of the grid in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let (width, height) = (self.width(), self.height());

        (0..height).flat_map(move |y| (0..width).map(move |x| Coord { x, y }))
    }

    /// Returns whether `letter` may go in `coord`: the cell is in bounds and either empty or already holding the
    /// same letter.
    pub fn accepts(&self, coord: Coord, letter: char) -> bool {
        match self.cells.get(coord.y, coord.x) {
            Some(None) => true,
            Some(Some(existing)) => same_letter(*existing, letter),
            None => false,
        }
    }

    /// Returns whether every cell holds a letter.
    pub fn is_filled(&self) -> bool {
        self.cells.elements_row_major_iter().all(Option::is_some)
    }

    /// The number of cells that are still empty.
    pub fn empty_cells(&self) -> usize {
        self.cells
            .elements_row_major_iter()
            .filter(|cell| cell.is_none())
            .count()
    }

    /// Concatenates the lowercase letters along `path`. Returns [`Option::None`] if any cell on the path is empty or
    /// out of bounds.
    pub fn spell(&self, path: &[Coord]) -> Option<String> {
        path.iter()
            .map(|&coord| self.get(coord))
            .collect::<Option<String>>()
            .map(|word| word.to_lowercase())
    }

    /// Writes `letters` along `path`. Only cells that are empty or already hold the same letter are touched.
    pub(crate) fn commit(&mut self, letters: &[char], path: &[Coord]) {
        for (&letter, &coord) in letters.iter().zip(path) {
            debug_assert!(
                self.accepts(coord, letter),
                "cell {coord} already holds a different letter than {letter:?}"
            );

            if let Some(cell) = self.cells.get_mut(coord.y, coord.x) {
                cell.get_or_insert(letter);
            }
        }
    }

    /// Gives every still-empty cell a random letter from `alphabet`.
    pub(crate) fn fill_empty(&mut self, alphabet: &[char], order: &mut RandomOrder) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                if let Some(cell) = self.cells.get_mut(y, x) {
                    if cell.is_none() {
                        *cell = order.pick(alphabet).copied();
                    }
                }
            }
        }
    }
}

impl Index<Coord> for Grid {
    type Output = Option<char>;

    fn index(&self, index: Coord) -> &Self::Output {
        &self.cells[(index.y, index.x)]
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.rows_iter() {
            for cell in row {
                match cell {
                    Some(ch) => {
                        for upper in ch.to_uppercase() {
                            f.write_fmt(format_args!("{} ", upper))?;
                        }
                    }
                    None => f.write_str(". ")?,
                }
            }

            f.write_str("\n")?;
        }

        Ok(())
    }
}
