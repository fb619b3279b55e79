//! The uniform-source seam through which all randomness enters the engine.

/// A source of uniform variates in `[0, 1)`.
///
/// The simulator never reaches for ambient global randomness; every draw
/// goes through a value implementing this trait, which the caller owns.
/// Implementations must be deterministic for a given internal state.
///
/// # Examples
///
/// ```rust
/// use cashrisk_engine::rng::UniformSource;
///
/// /// Cycles through a fixed list; handy in tests.
/// struct Replay(Vec<f64>, usize);
///
/// impl UniformSource for Replay {
///     fn next_uniform(&mut self) -> f64 {
///         let u = self.0[self.1 % self.0.len()];
///         self.1 += 1;
///         u
///     }
/// }
///
/// let mut src = Replay(vec![0.25, 0.75], 0);
/// assert_eq!(src.next_uniform(), 0.25);
/// assert_eq!(src.next_uniform(), 0.75);
/// ```
pub trait UniformSource {
    /// Returns the next uniform variate in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<S: UniformSource + ?Sized> UniformSource for &mut S {
    #[inline]
    fn next_uniform(&mut self) -> f64 {
        (**self).next_uniform()
    }
}
