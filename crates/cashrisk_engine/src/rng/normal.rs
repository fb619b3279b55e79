//! Standard normal variates via the Box–Muller transform.
//!
//! ```text
//! z = sqrt(-2 ln u1) * cos(2π u2)
//! ```
//! Each variate consumes exactly two uniforms; the sine companion is not
//! cached, so a path's draw count is `2 * horizon_days`.

use std::f64::consts::TAU;

use super::source::UniformSource;

/// Draws one standard normal variate from two uniforms.
///
/// `u1` is reflected to `1 - u1 ∈ (0, 1]` so the logarithm is always finite.
///
/// # Examples
///
/// ```rust
/// use cashrisk_engine::rng::{box_muller, Lcg};
///
/// let mut src = Lcg::new(1);
/// let z = box_muller(&mut src);
/// assert!(z.is_finite());
/// ```
#[inline]
pub fn box_muller<S: UniformSource + ?Sized>(source: &mut S) -> f64 {
    let u1 = 1.0 - source.next_uniform();
    let u2 = source.next_uniform();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Fills `buffer` with standard normal variates.
pub fn fill_normal<S: UniformSource + ?Sized>(source: &mut S, buffer: &mut [f64]) {
    for value in buffer.iter_mut() {
        *value = box_muller(source);
    }
}
