//! First-order autoregressive model of daily net cash flow.
//!
//! The process is
//! ```text
//! x(t) = mu + phi * (x(t-1) - mu) + sigma * z(t),    z(t) ~ N(0, 1)
//! ```
//! with `phi` confined to `[-PHI_BOUND, PHI_BOUND]` so the process stays
//! stationary.

use crate::error::ModelError;

/// Bound on the absolute autocorrelation coefficient.
pub const PHI_BOUND: f64 = 0.995;

/// Fitted AR(1) parameters.
///
/// # Examples
///
/// ```
/// use cashrisk_models::Ar1Model;
///
/// let model = Ar1Model::new(-50.0, 0.3, 20.0).unwrap();
/// // One-step conditional mean from yesterday's flow of -80
/// assert!((model.forecast(-80.0) - (-59.0)).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ar1Model {
    /// Long-run mean of the daily net flow.
    pub mu: f64,
    /// Lag-1 autocorrelation, within `[-PHI_BOUND, PHI_BOUND]`.
    pub phi: f64,
    /// Standard deviation of the one-step innovation.
    pub sigma: f64,
}

impl Default for Ar1Model {
    fn default() -> Self {
        Self::zero()
    }
}

impl Ar1Model {
    /// Creates a validated model, clamping `phi` into the stationary band.
    ///
    /// # Errors
    ///
    /// Returns `ModelError` if any parameter is not finite or `sigma < 0`.
    pub fn new(mu: f64, phi: f64, sigma: f64) -> Result<Self, ModelError> {
        let model = Self {
            mu,
            phi: clamp_phi(phi),
            sigma,
        };
        model.validate()?;
        Ok(model)
    }

    /// The degenerate model: zero mean, no autocorrelation, no noise.
    pub const fn zero() -> Self {
        Self {
            mu: 0.0,
            phi: 0.0,
            sigma: 0.0,
        }
    }

    /// Checks that all parameters are finite, `sigma >= 0` and `|phi| <= PHI_BOUND`.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (name, value) in [("mu", self.mu), ("phi", self.phi), ("sigma", self.sigma)] {
            if !value.is_finite() {
                return Err(ModelError::NonFinite { name, value });
            }
        }
        if self.sigma < 0.0 {
            return Err(ModelError::NegativeSigma(self.sigma));
        }
        if self.phi.abs() > PHI_BOUND {
            return Err(ModelError::NonStationary(self.phi));
        }
        Ok(())
    }

    /// Returns `true` when the model produces no stochastic deviation.
    #[inline]
    pub fn is_deterministic(&self) -> bool {
        self.sigma == 0.0
    }

    /// Conditional mean of the next flow given the previous one.
    #[inline]
    pub fn forecast(&self, x_prev: f64) -> f64 {
        self.mu + self.phi * (x_prev - self.mu)
    }

    /// Advances the process one step with the standard normal draw `z`.
    #[inline]
    pub fn step(&self, x_prev: f64, z: f64) -> f64 {
        self.forecast(x_prev) + self.sigma * z
    }

    /// Unconditional standard deviation of the stationary process.
    pub fn stationary_std(&self) -> f64 {
        self.sigma / (1.0 - self.phi * self.phi).sqrt()
    }
}

/// Clamps an autocorrelation estimate into `[-PHI_BOUND, PHI_BOUND]`.
///
/// NaN maps to zero.
#[inline]
pub fn clamp_phi(phi: f64) -> f64 {
    if phi.is_nan() {
        0.0
    } else {
        phi.clamp(-PHI_BOUND, PHI_BOUND)
    }
}
