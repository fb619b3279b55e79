//! End-to-end run: aggregate rows, fit the model, simulate.

use cashrisk_core::flows::{aggregate_detailed, net_values, Aggregation};
use cashrisk_core::{AggregationOptions, RawFlowRow};
use cashrisk_engine::SimulationParams;
use cashrisk_models::{fit_ar1_with_diagnostics, Ar1Fit};
use tracing::info;

use crate::error::RiskError;
use crate::simulator::{SimulationResult, Simulator};

/// Everything produced by [`run_pipeline`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PipelineResult {
    /// Aggregated daily series and row accounting.
    pub aggregation: Aggregation,
    /// Fitted model and diagnostics.
    pub fit: Ar1Fit,
    /// Simulation output.
    pub simulation: SimulationResult,
}

impl Simulator {
    /// Aggregates `rows`, fits an AR(1) model and simulates from `last_cash`.
    ///
    /// When `params` carries no anchor date, the run is anchored at the last
    /// aggregated day so fan points are dated from the day after.
    ///
    /// # Errors
    ///
    /// `RiskError::Flow` for invalid stress settings, `RiskError::Simulation`
    /// for invalid simulation inputs or cancellation.
    pub fn run_pipeline(
        &self,
        rows: &[RawFlowRow],
        options: &AggregationOptions,
        last_cash: f64,
        params: &SimulationParams,
    ) -> Result<PipelineResult, RiskError> {
        let aggregation = aggregate_detailed(rows, options)?;
        let fit = fit_ar1_with_diagnostics(&net_values(&aggregation.flows));

        let anchor = params
            .anchor_date()
            .or_else(|| aggregation.flows.last().map(|f| f.date));
        let params = params.clone().with_anchor_date(anchor);

        info!(
            rows_used = aggregation.rows_used,
            rows_dropped = aggregation.rows_dropped,
            days = aggregation.flows.len(),
            mu = fit.model.mu,
            phi = fit.model.phi,
            sigma = fit.model.sigma,
            "Fitted cash-flow model"
        );

        let simulation = self.simulate(last_cash, &fit.model, &params)?;
        Ok(PipelineResult {
            aggregation,
            fit,
            simulation,
        })
    }
}

/// Runs the full pipeline with the default [`Simulator`].
///
/// # Errors
///
/// See [`Simulator::run_pipeline`].
pub fn run_pipeline(
    rows: &[RawFlowRow],
    options: &AggregationOptions,
    last_cash: f64,
    params: &SimulationParams,
) -> Result<PipelineResult, RiskError> {
    Simulator::default().run_pipeline(rows, options, last_cash, params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cashrisk_core::{Date, FlowError, StressParams};

    fn params() -> SimulationParams {
        SimulationParams::builder()
            .horizon_days(5)
            .n_paths(50)
            .seed(3)
            .build()
            .unwrap()
    }

    #[test]
    fn test_constant_history_is_deterministic() {
        let rows: Vec<RawFlowRow> = (1..=9)
            .map(|d| RawFlowRow::signed(format!("2024-03-0{}", d), -40.0))
            .collect();
        let result =
            run_pipeline(&rows, &AggregationOptions::default(), 100.0, &params()).unwrap();

        assert_eq!(result.aggregation.rows_used, 9);
        assert_eq!(result.fit.model.mu, -40.0);
        assert_eq!(result.fit.model.sigma, 0.0);
        assert_eq!(result.simulation.paths.path(0), &[60.0, 20.0, -20.0, -60.0, -100.0]);
        assert_eq!(result.simulation.kpis.runway_days_p5, Some(3));
        assert_eq!(result.simulation.kpis.probability_overdraft, 1.0);
        assert_eq!(
            result.simulation.fan[0].date,
            Some(Date::from_ymd(2024, 3, 10).unwrap())
        );
    }

    #[test]
    fn test_explicit_anchor_kept() {
        let anchor = Date::from_ymd(2030, 1, 1).unwrap();
        let rows = vec![RawFlowRow::signed("2024-03-01", 1.0)];
        let p = params().with_anchor_date(Some(anchor));
        let result = run_pipeline(&rows, &AggregationOptions::default(), 0.0, &p).unwrap();
        assert_eq!(result.simulation.fan[0].date, anchor.add_days(1));
    }

    #[test]
    fn test_empty_rows_flat_projection() {
        let result = run_pipeline(&[], &AggregationOptions::default(), 10.0, &params()).unwrap();
        assert!(result.aggregation.flows.is_empty());
        assert!(result.simulation.paths.as_slice().iter().all(|&v| v == 10.0));
        assert_eq!(result.simulation.kpis.runway_days_p5, None);
        assert!(result.simulation.fan.iter().all(|p| p.date.is_none()));
    }

    #[test]
    fn test_invalid_stress_propagates() {
        let options = AggregationOptions::with_stress(StressParams {
            sales_pct: f64::NAN,
            ..StressParams::none()
        });
        let result = run_pipeline(&[], &options, 0.0, &params());
        assert!(matches!(
            result,
            Err(RiskError::Flow(FlowError::InvalidStress { .. }))
        ));
    }
}
