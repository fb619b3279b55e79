//! Property tests for the AR(1) estimator.

use approx::assert_relative_eq;
use cashrisk_models::{fit_ar1, PHI_BOUND};
use proptest::prelude::*;

fn series_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1_000.0f64..1_000.0, 3..120)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(300))]

    #[test]
    fn test_constant_series_idempotent(v in -1e6f64..1e6, n in 1usize..200) {
        let model = fit_ar1(&vec![v; n]);
        prop_assert_eq!(model.phi, 0.0);
        prop_assert_eq!(model.sigma, 0.0);
        prop_assert_eq!(model.mu, v);
    }

    #[test]
    fn test_phi_within_bounds(series in series_strategy()) {
        let model = fit_ar1(&series);
        prop_assert!(model.phi.abs() <= PHI_BOUND);
        prop_assert!(model.sigma >= 0.0);
        prop_assert!(model.mu.is_finite() && model.sigma.is_finite());
    }

    #[test]
    fn test_scale_sensitivity(series in series_strategy(), k in 0.01f64..100.0) {
        let base = fit_ar1(&series);
        let scaled: Vec<f64> = series.iter().map(|x| x * k).collect();
        let model = fit_ar1(&scaled);

        assert_relative_eq!(model.mu, base.mu * k, max_relative = 1e-9, epsilon = 1e-7);
        assert_relative_eq!(model.sigma, base.sigma * k, max_relative = 1e-9, epsilon = 1e-7);
        assert_relative_eq!(model.phi, base.phi, max_relative = 1e-9, epsilon = 1e-9);
    }

    #[test]
    fn test_shift_invariance_of_phi_and_sigma(series in series_strategy(), shift in -500.0f64..500.0) {
        let base = fit_ar1(&series);
        let shifted: Vec<f64> = series.iter().map(|x| x + shift).collect();
        let model = fit_ar1(&shifted);

        assert_relative_eq!(model.mu, base.mu + shift, epsilon = 1e-6);
        assert_relative_eq!(model.phi, base.phi, epsilon = 1e-6);
        assert_relative_eq!(model.sigma, base.sigma, epsilon = 1e-6, max_relative = 1e-6);
    }
}
