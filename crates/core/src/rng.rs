//! RNG module - seeded randomness for bomb placement
//!
//! Every game is driven by a single `u64` seed. The same seed always produces
//! the same bomb layout, which keeps games reproducible (tests, benchmarks and
//! `MINESWEEPER_SEED`).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Seeded RNG used to pick bomb cells
#[derive(Debug, Clone)]
pub struct BombRng {
    inner: StdRng,
    seed: u64,
}

impl BombRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an RNG from a freshly drawn seed.
    ///
    /// The seed is still recorded so the game can be replayed.
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// Uniform index in `[0, len)`.
    ///
    /// `len` must be non-zero.
    pub fn next_index(&mut self, len: usize) -> usize {
        self.inner.gen_range(0..len)
    }

    /// Seed this RNG was created with
    pub fn seed(&self) -> u64 {
        self.seed
    }
}
