//! Deterministic random number generation.
//!
//! PCG-backed RNG for demo array generation. Given the same seed, the
//! generated arrays are identical across runs and platforms, so a recorded
//! seed reproduces the exact visualization session.

use rand::prelude::*;
use rand_pcg::Pcg64;
use serde::{Deserialize, Serialize};

/// Shortest random demo array.
pub const MIN_DEMO_LEN: usize = 5;
/// Longest random demo array.
pub const MAX_DEMO_LEN: usize = 10;

/// Deterministic, reproducible random number generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VizRng {
    /// Seed for reproducibility.
    seed: u64,
    /// Internal PCG state.
    rng: Pcg64,
}

impl VizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg64::seed_from_u64(seed),
        }
    }

    /// Get the seed this RNG was created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// Generate a demo array: 5 to 10 small positive integers (stored as
    /// floats, like every array in the engine).
    pub fn demo_array(&mut self) -> Vec<f64> {
        let len = self.rng.gen_range(MIN_DEMO_LEN..=MAX_DEMO_LEN);
        (0..len)
            .map(|_| f64::from(self.rng.gen_range(1u32..=50)))
            .collect()
    }
}
