//! Matching finished selections against the outstanding words.

use log::{debug, info};

use crate::{coord::Coord, grid::Grid, registry::WordRegistry};

/// The result of validating one finished selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MatchResult {
    /// The selection spelled an outstanding word, forwards or backwards.
    Found {
        /// The word as it was placed.
        word: String,

        /// The selected cells, in selection order.
        path: Vec<Coord>,

        /// How many words were found before this one in the current puzzle.
        ordinal: usize,

        /// Whether this find emptied the outstanding set. True for exactly one find per puzzle.
        completed: bool,
    },

    /// The selection did not spell an outstanding word. Nothing changed.
    Rejected {
        /// What the selection spelled.
        candidate: String,
    },
}

/// Validates finished selections and remembers whether the puzzle has already been completed.
#[derive(Clone, Debug, Default)]
pub struct WordValidator {
    found: usize,
    completed: bool,
}

impl WordValidator {
    /// Creates a validator for a fresh puzzle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the outstanding set has been emptied by a find.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Spells `path` on `grid` and, if the result or its reversal is outstanding in `registry`, moves that word to
    /// the found set.
    pub fn validate(&mut self, path: &[Coord], grid: &Grid, registry: &mut WordRegistry) -> MatchResult {
        let Some(candidate) = grid.spell(path) else {
            return MatchResult::Rejected {
                candidate: String::new(),
            };
        };

        if candidate.is_empty() {
            return MatchResult::Rejected { candidate };
        }

        let Some(placed) = registry.take(&candidate) else {
            debug!("{candidate:?} is not an outstanding word");
            return MatchResult::Rejected { candidate };
        };

        info!("{} found!", candidate.to_uppercase());

        let ordinal = self.found;
        self.found += 1;

        let completed = !self.completed && registry.is_exhausted();
        if completed {
            info!("all words found");
            self.completed = true;
        }

        MatchResult::Found {
            word: placed.word().to_string(),
            path: path.to_vec(),
            ordinal,
            completed,
        }
    }
}
