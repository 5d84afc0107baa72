//! Placing words on the grid as bending paths, then filling the rest with random letters.
//!
//! Words are placed one at a time, in a shuffled order. For each word the start cells are tried in a shuffled
//! order, and from each start a depth-first search extends the path one orthogonal step at a time, trying the four
//! directions in a freshly shuffled order at every depth. The first complete path wins and is committed straight
//! away; there is no backtracking across words, so a word that does not fit around the words placed before it is
//! left out of the puzzle.

use log::{debug, info};

use crate::{
    config::PuzzleConfig,
    coord::{Coord, Direction},
    grid::Grid,
    registry::{PlacedWord, WordRegistry},
    shuffle::RandomOrder,
    Result,
};

/// The outcome of placing a word list on a fresh grid.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// The fully lettered grid.
    pub grid: Grid,

    /// Every word that was placed, all of them outstanding.
    pub registry: WordRegistry,

    /// The normalized words for which no path could be found. These never appear in the registry.
    pub omitted: Vec<String>,
}

/// Trims and lowercases `word`, returning [`Option::None`] if nothing is left.
pub fn normalize(word: &str) -> Option<String> {
    let word = word.trim().to_lowercase();

    (!word.is_empty()).then_some(word)
}

/// One level of the search: the shuffled directions to try from the cell at the same depth of the path, and how
/// many of them have been tried.
struct Frame {
    directions: [Direction; 4],
    next: usize,
}

impl Frame {
    fn new(order: &mut RandomOrder) -> Self {
        let mut directions = Direction::ALL;
        order.shuffle(&mut directions);

        Self {
            directions,
            next: 0,
        }
    }

    fn next_direction(&mut self) -> Option<Direction> {
        let direction = self.directions.get(self.next).copied()?;
        self.next += 1;

        Some(direction)
    }
}

/// Places words on a grid. See the [module documentation](self) for how.
#[derive(Clone, Copy, Debug)]
pub struct PlacementEngine<'a> {
    width: usize,
    height: usize,
    allow_reversed: bool,
    alphabet: &'a [char],
}

impl<'a> PlacementEngine<'a> {
    /// Creates an engine for the dimensions, reversal rule and alphabet of `config`, or returns an error if `config`
    /// can't produce a fully lettered grid.
    pub fn new(config: &'a PuzzleConfig) -> Result<Self> {
        config.validate()?;

        Ok(Self::from_config(config))
    }

    /// Like [PlacementEngine::new] for a config that has already been validated.
    pub(crate) fn from_config(config: &'a PuzzleConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
            allow_reversed: config.allow_reversed,
            alphabet: &config.alphabet,
        }
    }

    /// Places as many of `words` as possible on a new grid and fills every remaining cell from the alphabet.
    ///
    /// Blank words are skipped. An empty word list yields a grid made entirely of filler.
    pub fn place(&self, words: &[String], order: &mut RandomOrder) -> Placement {
        let mut grid = Grid::new(self.width, self.height);
        let mut registry = WordRegistry::new();
        let mut omitted = Vec::new();

        let mut words: Vec<String> = words.iter().filter_map(|word| normalize(word)).collect();
        order.shuffle(&mut words);

        for word in words {
            let placed_word = if self.allow_reversed && order.coin_flip() {
                word.chars().rev().collect()
            } else {
                word.clone()
            };

            let letters: Vec<char> = placed_word.chars().collect();

            match self.find_path(&grid, &letters, order) {
                Some(path) => {
                    debug!("placed {placed_word:?} along {path:?}");

                    grid.commit(&letters, &path);
                    registry.insert(PlacedWord::new(placed_word, path));
                }
                None => {
                    info!("no room for {word:?} on the {}x{} grid, leaving it out", self.width, self.height);

                    omitted.push(word);
                }
            }
        }

        grid.fill_empty(self.alphabet, order);

        Placement {
            grid,
            registry,
            omitted,
        }
    }

    /// Searches for a simple orthogonal path spelling `letters` over cells of `grid` that are empty or already hold
    /// the right letter. Start cells are tried in random order; the first path found is returned.
    pub fn find_path(
        &self,
        grid: &Grid,
        letters: &[char],
        order: &mut RandomOrder,
    ) -> Option<Vec<Coord>> {
        let first = *letters.first()?;

        if letters.len() > grid.width() * grid.height() {
            return None;
        }

        let mut starts: Vec<Coord> = grid.coords().collect();
        order.shuffle(&mut starts);

        for start in starts {
            if !grid.accepts(start, first) {
                continue;
            }

            if let Some(path) = self.search_from(grid, letters, start, order) {
                return Some(path);
            }

            debug!("no path for {:?} from {start}", letters.iter().collect::<String>());
        }

        None
    }

    /// The depth-first search from one start cell, driven by an explicit stack holding one [Frame] per cell of the
    /// path so far.
    fn search_from(
        &self,
        grid: &Grid,
        letters: &[char],
        start: Coord,
        order: &mut RandomOrder,
    ) -> Option<Vec<Coord>> {
        let mut path = Vec::with_capacity(letters.len());
        path.push(start);

        if path.len() == letters.len() {
            return Some(path);
        }

        let mut stack = Vec::with_capacity(letters.len());
        stack.push(Frame::new(order));

        while let Some(frame) = stack.last_mut() {
            let Some(direction) = frame.next_direction() else {
                // Every direction from the tip is exhausted, so step back.
                stack.pop();
                path.pop();
                continue;
            };

            let Some(&tip) = path.last() else {
                break;
            };

            let Some(next) = tip.step(direction, grid.width(), grid.height()) else {
                continue;
            };

            if path.contains(&next) || !grid.accepts(next, letters[path.len()]) {
                continue;
            }

            path.push(next);

            if path.len() == letters.len() {
                return Some(path);
            }

            stack.push(Frame::new(order));
        }

        None
    }
}
