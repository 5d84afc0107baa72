//! Configuration for generating and playing a word hunt.

use std::{fmt::Display, str::FromStr};

use crate::{Error, Result};

/// The lowercase Latin alphabet, the default filler alphabet.
pub const LATIN_ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// The lowercase Russian alphabet.
pub const CYRILLIC_ALPHABET: &str = "абвгдеёжзийклмнопрстуфхцчэюяьъшщы";

/// An RGB colour used to highlight a selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = Error;

    /// Parses `#rrggbb` or `rrggbb`.
    fn from_str(s: &str) -> Result<Self> {
        let hex = s.trim().trim_start_matches('#');
        let invalid = || Error::InvalidColor(s.to_string());

        if hex.len() != 6 || !hex.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&hex[range], 16).map_err(|_| invalid())
        };

        Ok(Rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// The default highlight palette.
pub fn default_palette() -> Vec<Rgb> {
    vec![
        Rgb(0xf9, 0xc7, 0x4f),
        Rgb(0x90, 0xbe, 0x6d),
        Rgb(0x43, 0xaa, 0x8b),
        Rgb(0x57, 0x75, 0x90),
        Rgb(0xf9, 0x84, 0x4a),
        Rgb(0xe0, 0x7a, 0x9f),
    ]
}

/// The configuration of a [`WordHunt`](crate::WordHunt). See [`WordHunt::new`](crate::WordHunt::new).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// The number of columns.
    pub width: usize,

    /// The number of rows.
    pub height: usize,

    /// Whether each word may be placed back to front. A word placed reversed is still found by selecting it in
    /// either direction.
    pub allow_reversed: bool,

    /// The letters that cells not used by any word are filled with.
    pub alphabet: Vec<char>,

    /// The seed for every random decision made while generating the grid. With a seed, every setup with the same
    /// words and dimensions produces the same grid; without one, a fresh seed is drawn from the operating system.
    pub seed: Option<u64>,

    /// The colours cycled through, one per new selection.
    pub palette: Vec<Rgb>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            allow_reversed: false,
            alphabet: LATIN_ALPHABET.chars().collect(),
            seed: None,
            palette: default_palette(),
        }
    }
}

impl PuzzleConfig {
    /// Creates a default configuration with the given dimensions.
    pub fn with_size(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Sets the seed.
    pub fn seeded(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets whether words may be placed reversed.
    pub fn reversed(mut self, allow_reversed: bool) -> Self {
        self.allow_reversed = allow_reversed;
        self
    }

    /// Sets the filler alphabet from the characters of `letters`, lowercased, skipping whitespace and duplicates.
    pub fn alphabet(mut self, letters: &str) -> Self {
        self.alphabet = Vec::new();

        for ch in letters.chars().filter(|ch| !ch.is_whitespace()).flat_map(char::to_lowercase) {
            if !self.alphabet.contains(&ch) {
                self.alphabet.push(ch);
            }
        }

        self
    }

    /// Sets the filler alphabet to the distinct letters of `words`, so that filler cells only use letters that
    /// appear in the hidden words. With no words the alphabet ends up empty and [PuzzleConfig::validate] fails.
    pub fn alphabet_from_words<S: AsRef<str>>(self, words: &[S]) -> Self {
        let letters: String = words
            .iter()
            .flat_map(|word| word.as_ref().chars())
            .filter(|ch| ch.is_alphabetic())
            .collect();

        self.alphabet(&letters)
    }

    /// Checks that a grid can be generated and played with this configuration.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(Error::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }

        if self.alphabet.is_empty() {
            return Err(Error::EmptyAlphabet);
        }

        if self.palette.is_empty() {
            return Err(Error::EmptyPalette);
        }

        Ok(())
    }
}
