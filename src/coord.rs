//! Grid coordinates and the four directions a word path may step in.

use std::fmt::Display;

/// A cell position in the grid. `x` is the column and `y` is the row, both counted from the top left corner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    /// The column.
    pub x: usize,

    /// The row.
    pub y: usize,
}

impl Coord {
    /// Creates a new [Coord].
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Returns whether `other` differs from this coordinate by exactly one unit along exactly one axis.
    pub fn is_four_adjacent(&self, other: Coord) -> bool {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y) == 1
    }

    /// Returns the neighbouring coordinate one step in `direction`, or [`Option::None`] if that step leaves a grid
    /// of `width` columns and `height` rows.
    pub fn step(&self, direction: Direction, width: usize, height: usize) -> Option<Coord> {
        let (dx, dy) = direction.offset();

        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;

        (x < width && y < height).then_some(Coord { x, y })
    }
}

impl From<(usize, usize)> for Coord {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// The direction of a single step along a word path. Only orthogonal steps exist; diagonal moves are never part of
/// a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// One column to the right.
    Right,

    /// One column to the left.
    Left,

    /// One row down.
    Down,

    /// One row up.
    Up,
}

impl Direction {
    /// All four directions in their unshuffled order.
    pub const ALL: [Direction; 4] = [
        Direction::Right,
        Direction::Left,
        Direction::Down,
        Direction::Up,
    ];

    /// The `(dx, dy)` offset of one step in this direction.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Right => (1, 0),
            Direction::Left => (-1, 0),
            Direction::Down => (0, 1),
            Direction::Up => (0, -1),
        }
    }
}

/// Returns whether `path` is a simple four-adjacent walk: every consecutive pair is four-adjacent and no coordinate
/// repeats. The empty path and single-cell paths are simple.
pub fn is_simple_path(path: &[Coord]) -> bool {
    let adjacent = path.windows(2).all(|pair| pair[0].is_four_adjacent(pair[1]));

    let distinct = path
        .iter()
        .enumerate()
        .all(|(i, coord)| !path[i + 1..].contains(coord));

    adjacent && distinct
}

#[cfg(test)]
mod tests {
    use super::{is_simple_path, Coord, Direction};

    #[test]
    fn four_adjacency() {
        let c = Coord::new(2, 2);

        assert!(c.is_four_adjacent(Coord::new(3, 2)));
        assert!(c.is_four_adjacent(Coord::new(2, 1)));
        assert!(!c.is_four_adjacent(Coord::new(3, 3)));
        assert!(!c.is_four_adjacent(Coord::new(2, 2)));
        assert!(!c.is_four_adjacent(Coord::new(4, 2)));
    }

    #[test]
    fn step_stays_in_bounds() {
        let corner = Coord::new(0, 0);

        assert_eq!(corner.step(Direction::Left, 3, 3), None);
        assert_eq!(corner.step(Direction::Up, 3, 3), None);
        assert_eq!(corner.step(Direction::Right, 3, 3), Some(Coord::new(1, 0)));
        assert_eq!(Coord::new(2, 2).step(Direction::Down, 3, 3), None);
    }

    #[test]
    fn simple_paths() {
        let bent = [Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)];
        let diagonal = [Coord::new(0, 0), Coord::new(1, 1)];
        let looping = [
            Coord::new(0, 0),
            Coord::new(1, 0),
            Coord::new(1, 1),
            Coord::new(0, 1),
            Coord::new(0, 0),
        ];

        assert!(is_simple_path(&[]));
        assert!(is_simple_path(&bent));
        assert!(!is_simple_path(&diagonal));
        assert!(!is_simple_path(&looping));
    }
}
