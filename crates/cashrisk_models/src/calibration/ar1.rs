//! Method-of-moments AR(1) estimator.
//!
//! ```text
//! mu    = mean(x)
//! phi   = Σ (x_t - mu)(x_{t-1} - mu) / Σ (x_{t-1} - mu)²      t = 1..n-1
//! sigma = sqrt( Σ r_t² / max(1, n-1) ),  r_t = x_t - (mu + phi (x_{t-1} - mu))
//! ```
//!
//! `phi` is clamped to `[-0.995, 0.995]` and falls back to zero when the
//! denominator vanishes (fewer than two points or a constant series).
//! This is not a maximum-likelihood fit; the simulator only needs first and
//! second moments.

use cashrisk_core::flows::DailyNetFlow;
use tracing::debug;

use crate::models::ar1::{clamp_phi, Ar1Model};

/// Fit statistics reported alongside the model.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ar1Diagnostics {
    /// Finite observations used.
    pub n_observations: usize,
    /// Observations skipped because they were NaN or infinite.
    pub n_skipped: usize,
    /// Autocorrelation before clamping (0 when undefined).
    pub raw_phi: f64,
    /// Whether `raw_phi` hit the stationary bound.
    pub phi_clamped: bool,
}

/// A fitted model together with its diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Ar1Fit {
    /// Fitted model.
    pub model: Ar1Model,
    /// Fit statistics.
    pub diagnostics: Ar1Diagnostics,
}

/// Fits an AR(1) model to a series of daily net flows.
///
/// An empty series yields [`Ar1Model::zero`]; a constant series `[v; n]`
/// yields `{mu: v, phi: 0, sigma: 0}`.
///
/// # Examples
///
/// ```
/// use cashrisk_models::fit_ar1;
///
/// let model = fit_ar1(&[7.5, 7.5, 7.5, 7.5]);
/// assert_eq!((model.mu, model.phi, model.sigma), (7.5, 0.0, 0.0));
///
/// let model = fit_ar1(&[]);
/// assert_eq!((model.mu, model.phi, model.sigma), (0.0, 0.0, 0.0));
/// ```
pub fn fit_ar1(series: &[f64]) -> Ar1Model {
    fit_ar1_with_diagnostics(series).model
}

/// Fits an AR(1) model to the `net` values of an aggregated series.
pub fn fit_ar1_flows(flows: &[DailyNetFlow]) -> Ar1Model {
    let series: Vec<f64> = flows.iter().map(|f| f.net).collect();
    fit_ar1(&series)
}

/// Fits an AR(1) model and reports fit statistics.
///
/// Non-finite observations are skipped.
pub fn fit_ar1_with_diagnostics(series: &[f64]) -> Ar1Fit {
    let xs: Vec<f64> = series.iter().copied().filter(|x| x.is_finite()).collect();
    let n = xs.len();
    let n_skipped = series.len() - n;

    if n == 0 {
        return Ar1Fit {
            model: Ar1Model::zero(),
            diagnostics: Ar1Diagnostics {
                n_skipped,
                ..Default::default()
            },
        };
    }

    // Exact for constant input; summation rounding would otherwise leave
    // identical tiny deviations and a spurious phi of one.
    if xs.iter().all(|&x| x == xs[0]) {
        return Ar1Fit {
            model: Ar1Model {
                mu: xs[0],
                phi: 0.0,
                sigma: 0.0,
            },
            diagnostics: Ar1Diagnostics {
                n_observations: n,
                n_skipped,
                ..Default::default()
            },
        };
    }

    let mu = xs.iter().sum::<f64>() / n as f64;

    let (num, den) = xs.windows(2).fold((0.0, 0.0), |(num, den), w| {
        let prev = w[0] - mu;
        let curr = w[1] - mu;
        (num + curr * prev, den + prev * prev)
    });
    let raw_phi = if den > 0.0 { num / den } else { 0.0 };
    let phi = clamp_phi(raw_phi);

    let sse: f64 = xs
        .windows(2)
        .map(|w| {
            let residual = w[1] - (mu + phi * (w[0] - mu));
            residual * residual
        })
        .sum();
    let sigma = (sse / (n.saturating_sub(1)).max(1) as f64).sqrt();

    let diagnostics = Ar1Diagnostics {
        n_observations: n,
        n_skipped,
        raw_phi,
        phi_clamped: phi != raw_phi,
    };

    debug!(n, n_skipped, mu, phi, sigma, raw_phi, "Fitted AR(1) model");

    Ar1Fit {
        model: Ar1Model { mu, phi, sigma },
        diagnostics,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cashrisk_core::Date;

    #[test]
    fn test_empty_series_is_zero_model() {
        let fit = fit_ar1_with_diagnostics(&[]);
        assert_eq!(fit.model, Ar1Model::zero());
        assert_eq!(fit.diagnostics.n_observations, 0);
    }

    #[test]
    fn test_single_point() {
        let model = fit_ar1(&[42.0]);
        assert_eq!(model, Ar1Model { mu: 42.0, phi: 0.0, sigma: 0.0 });
    }

    #[test]
    fn test_constant_series() {
        let model = fit_ar1(&[-3.25; 30]);
        assert_eq!(model.mu, -3.25);
        assert_eq!(model.phi, 0.0);
        assert_eq!(model.sigma, 0.0);
    }

    #[test]
    fn test_hand_computed_fit() {
        // mu = 2.5, deviations = [-1.5, -0.5, 0.5, 1.5]
        // num = 0.75 - 0.25 + 0.75 = 1.25, den = 2.25 + 0.25 + 0.25 = 2.75
        let model = fit_ar1(&[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(model.mu, 2.5);
        let phi = 1.25 / 2.75;
        assert_relative_eq!(model.phi, phi, epsilon = 1e-12);

        let residuals = [-0.5 - phi * -1.5, 0.5 - phi * -0.5, 1.5 - phi * 0.5];
        let sse: f64 = residuals.iter().map(|r| r * r).sum();
        assert_relative_eq!(model.sigma, (sse / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_alternating_series_negative_phi() {
        let series: Vec<f64> = (0..50).map(|i| if i % 2 == 0 { 10.0 } else { -10.0 }).collect();
        let fit = fit_ar1_with_diagnostics(&series);
        assert!(fit.model.phi < -0.9);
        assert!(fit.model.phi >= -0.995);
    }

    #[test]
    fn test_trending_series_clamped() {
        // Explosive growth pushes the raw estimate above one
        let series: Vec<f64> = (0..40).map(|i| 1.3_f64.powi(i)).collect();
        let fit = fit_ar1_with_diagnostics(&series);
        assert!(fit.diagnostics.raw_phi > 0.995);
        assert!(fit.diagnostics.phi_clamped);
        assert_eq!(fit.model.phi, 0.995);
    }

    #[test]
    fn test_non_finite_values_skipped() {
        let fit = fit_ar1_with_diagnostics(&[1.0, f64::NAN, 1.0, f64::INFINITY]);
        assert_eq!(fit.diagnostics.n_skipped, 2);
        assert_eq!(fit.model, Ar1Model { mu: 1.0, phi: 0.0, sigma: 0.0 });
    }

    #[test]
    fn test_fit_from_flows() {
        let start = Date::from_ymd(2024, 1, 1).unwrap();
        let flows: Vec<DailyNetFlow> = [5.0, 7.0, 6.0]
            .iter()
            .enumerate()
            .map(|(i, &net)| DailyNetFlow {
                date: start.add_days(i as i64).unwrap(),
                net,
            })
            .collect();
        assert_eq!(fit_ar1_flows(&flows), fit_ar1(&[5.0, 7.0, 6.0]));
    }
}
