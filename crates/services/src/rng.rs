//! Injectable random source so sampling, shuffling, and decoy selection stay
//! deterministic under test.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random sampler used by every activity session.
///
/// Seed it (`Sampler::seeded`) in tests; production code uses OS entropy.
#[derive(Debug, Clone)]
pub struct Sampler {
    rng: StdRng,
}

impl Sampler {
    /// A sampler seeded from OS entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// A deterministic sampler for tests.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly random index into a collection of `len` items.
    ///
    /// Returns `None` when `len` is zero.
    pub fn pick_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        Some(self.rng.random_range(0..len))
    }

    /// A uniformly random element of the slice.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        self.pick_index(items.len()).map(|index| &items[index])
    }

    /// Removes and returns a uniformly random element.
    ///
    /// Order of the remaining elements is not preserved.
    pub fn take<T>(&mut self, items: &mut Vec<T>) -> Option<T> {
        self.pick_index(items.len()).map(|index| items.swap_remove(index))
    }

    /// In-place Fisher–Yates shuffle.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.rng.random_range(0..=i);
            items.swap(i, j);
        }
    }
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}
