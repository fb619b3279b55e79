//! Seeded PRNG wrapper used for Monte Carlo path generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::source::UniformSource;

/// Golden-ratio increment separating per-path seeds.
const PATH_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Monte Carlo random number generator.
///
/// Wraps `rand::rngs::StdRng`. Seeded instances are reproducible; the
/// seed is kept for logging.
///
/// # Examples
///
/// ```rust
/// use cashrisk_engine::rng::{CashRng, UniformSource};
///
/// let mut a = CashRng::from_seed(42);
/// let mut b = CashRng::from_seed(42);
/// assert_eq!(a.next_uniform(), b.next_uniform());
/// assert_eq!(a.seed(), Some(42));
/// ```
#[derive(Clone, Debug)]
pub struct CashRng {
    inner: StdRng,
    seed: Option<u64>,
}

impl CashRng {
    /// Creates a generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Creates a non-deterministic generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            inner: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// Creates a generator from an optional seed, falling back to entropy.
    pub fn from_optional_seed(seed: Option<u64>) -> Self {
        seed.map_or_else(Self::from_entropy, Self::from_seed)
    }

    /// Creates the independent generator for one path of a seeded run.
    ///
    /// The stream depends only on `(base_seed, path_index)`, so a path's
    /// draws are the same whichever thread generates it.
    #[inline]
    pub fn for_path(base_seed: u64, path_index: usize) -> Self {
        let offset = (path_index as u64).wrapping_add(1).wrapping_mul(PATH_SEED_STRIDE);
        Self::from_seed(base_seed ^ offset)
    }

    /// Returns the seed used for initialisation, if any.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Draws a fresh 64-bit value, e.g. to seed a parallel run.
    #[inline]
    pub fn next_seed(&mut self) -> u64 {
        self.inner.gen()
    }
}

impl UniformSource for CashRng {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.inner.gen()
    }
}
