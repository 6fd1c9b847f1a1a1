//! Random number generation for stage building
//!
//! Uses a seeded ChaCha RNG so a stage can be regenerated from its seed.

use core::ops::Range;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Stage random number generator
///
/// Wraps ChaCha8Rng and remembers the seed it was created from. Every builder
/// draws from the instance it is handed, never from a global source.
#[derive(Debug, Clone)]
pub struct StageRng {
    rng: ChaCha8Rng,
    seed: u64,
}

impl StageRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create a new RNG with a random seed
    pub fn from_entropy() -> Self {
        let seed = rand::random();
        Self::new(seed)
    }

    /// Get the seed used to create this RNG
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns 0..n-1, or 0 if n is 0.
    pub fn rn2(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        self.rng.gen_range(0..n)
    }

    /// Uniform draw from a half-open range.
    ///
    /// Returns `range.start` when the range is empty.
    pub fn range(&mut self, range: Range<i32>) -> i32 {
        if range.is_empty() {
            return range.start;
        }
        self.rng.gen_range(range)
    }

    /// Uniform draw from `[0, 1)`.
    pub fn unit(&mut self) -> f64 {
        self.rng.r#gen::<f64>()
    }

    /// Returns true with the given probability (clamped to `[0, 1]`).
    pub fn chance(&mut self, probability: f64) -> bool {
        self.unit() < probability
    }

    /// Choose a random element from a slice
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            None
        } else {
            Some(&items[self.rn2(items.len() as u32) as usize])
        }
    }
}

impl Default for StageRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}
