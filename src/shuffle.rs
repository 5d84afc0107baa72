//! The single source of randomness used while generating a puzzle.

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

/// A seedable random source that every random decision of the placement engine goes through: word order,
/// start cell order, direction order, word reversal and filler letters.
///
/// Two [RandomOrder]s created from the same seed make exactly the same sequence of decisions, which is what makes
/// a generated grid reproducible.
#[derive(Clone, Debug)]
pub struct RandomOrder {
    rng: StdRng,
}

impl RandomOrder {
    /// Creates a [RandomOrder] from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Creates a [RandomOrder] seeded from the operating system's entropy source.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a [RandomOrder] from `seed` if there is one, otherwise from entropy.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::from_seed(seed),
            None => Self::from_entropy(),
        }
    }

    /// Shuffles `items` in place (Fisher-Yates).
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Returns true or false with equal probability.
    pub fn coin_flip(&mut self) -> bool {
        self.rng.gen_bool(0.5)
    }

    /// Picks one element of `items` uniformly, or [`Option::None`] if `items` is empty.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }

        Some(&items[self.rng.gen_range(0..items.len())])
    }
}
