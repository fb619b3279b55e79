//! 32-bit linear congruential generator.
//!
//! `state = state * 1664525 + 1013904223 (mod 2^32)`, output `state / 2^32`.
//! Small, portable and trivially reproducible across platforms; statistical
//! quality is modest, so [`CashRng`](super::CashRng) remains the default.

use super::source::UniformSource;

const MULTIPLIER: u32 = 1_664_525;
const INCREMENT: u32 = 1_013_904_223;
const MODULUS: f64 = 4_294_967_296.0;

/// Linear congruential uniform generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    /// Creates a generator; only the low 32 bits of `seed` are used.
    #[inline]
    pub fn new(seed: u64) -> Self {
        Self { state: seed as u32 }
    }

    /// Returns the current internal state.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl UniformSource for Lcg {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        f64::from(self.state) / MODULUS
    }
}
