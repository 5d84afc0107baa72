//! The words committed to the grid, split into those still to be found and those already found.

use crate::coord::Coord;

/// Reverses the characters of `word`.
pub fn reversed(word: &str) -> String {
    word.chars().rev().collect()
}

/// A word that was placed on the grid together with the exact cells that spell it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedWord {
    word: String,
    path: Vec<Coord>,
}

impl PlacedWord {
    /// Creates a new [PlacedWord]. `path` holds one coordinate per character of `word`.
    pub fn new(word: impl Into<String>, path: Vec<Coord>) -> Self {
        Self {
            word: word.into(),
            path,
        }
    }

    /// The word as it was placed: lowercase, and reversed if placement flipped it.
    pub fn word(&self) -> &str {
        &self.word
    }

    /// The cells spelling the word, in the order of its characters.
    pub fn path(&self) -> &[Coord] {
        &self.path
    }

    /// Returns whether `candidate` spells this word in either direction.
    pub fn matches(&self, candidate: &str) -> bool {
        self.word == candidate || self.word.chars().rev().eq(candidate.chars())
    }
}

/// The registry of placed words. Every placed word is either outstanding or found; a word that failed placement is
/// never in here.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WordRegistry {
    outstanding: Vec<PlacedWord>,
    found: Vec<PlacedWord>,
}

impl WordRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a freshly placed word to the outstanding set.
    pub fn insert(&mut self, placed: PlacedWord) {
        self.outstanding.push(placed);
    }

    /// Words that have not been found yet.
    pub fn outstanding(&self) -> &[PlacedWord] {
        &self.outstanding
    }

    /// Words that have been found, in the order they were found.
    pub fn found(&self) -> &[PlacedWord] {
        &self.found
    }

    /// Every placed word, outstanding ones first.
    pub fn placed(&self) -> impl Iterator<Item = &PlacedWord> {
        self.outstanding.iter().chain(&self.found)
    }

    /// Returns whether no outstanding words remain.
    pub fn is_exhausted(&self) -> bool {
        self.outstanding.is_empty()
    }

    /// Returns whether `candidate` or its reversal is outstanding.
    pub fn contains(&self, candidate: &str) -> bool {
        self.outstanding.iter().any(|placed| placed.matches(candidate))
    }

    /// Moves the outstanding entry spelled exactly `candidate`, and the entry spelled by its reversal, to the found
    /// set. Returns the first of them that was moved, or [`Option::None`] if neither orientation is outstanding.
    pub fn take(&mut self, candidate: &str) -> Option<PlacedWord> {
        let backwards = reversed(candidate);

        let forward = self.remove_outstanding(candidate);
        let backward = self.remove_outstanding(&backwards);

        let first = forward.clone().or_else(|| backward.clone());
        self.found.extend(forward);
        self.found.extend(backward);

        first
    }

    fn remove_outstanding(&mut self, word: &str) -> Option<PlacedWord> {
        let index = self.outstanding.iter().position(|placed| placed.word == word)?;

        Some(self.outstanding.remove(index))
    }
}

#[cfg(test)]
mod tests {
    use super::{reversed, PlacedWord, WordRegistry};
    use crate::coord::Coord;

    fn placed(word: &str) -> PlacedWord {
        let path = (0..word.chars().count()).map(|x| Coord::new(x, 0)).collect();
        PlacedWord::new(word, path)
    }

    #[test]
    fn take_moves_word_to_found() {
        let mut registry = WordRegistry::new();
        registry.insert(placed("sun"));
        registry.insert(placed("moon"));

        let taken = registry.take("nus").unwrap();

        assert_eq!(taken.word(), "sun");
        assert_eq!(registry.outstanding().len(), 1);
        assert_eq!(registry.found(), &[placed("sun")]);
        assert!(!registry.contains("sun"));
        assert!(registry.contains("noom"));
        assert_eq!(registry.placed().count(), 2);
    }

    #[test]
    fn take_removes_both_orientations() {
        let mut registry = WordRegistry::new();
        registry.insert(placed("tops"));
        registry.insert(placed("spot"));

        registry.take("tops");

        assert!(registry.is_exhausted());
        assert_eq!(registry.found().len(), 2);
    }

    #[test]
    fn take_unknown_word() {
        let mut registry = WordRegistry::new();
        registry.insert(placed("sun"));

        assert!(registry.take("sum").is_none());
        assert_eq!(registry.outstanding().len(), 1);
        assert!(registry.found().is_empty());
    }

    #[test]
    fn reversal_is_per_character() {
        assert_eq!(reversed("кот"), "ток");
        assert_eq!(reversed(""), "");
    }
}
