//! Simulation facade: paths, fan and KPIs in one call.

use cashrisk_engine::{
    generate_paths, generate_paths_with_source, CancellationToken, ParallelConfig, PathMatrix,
    SimulationParams, UniformSource,
};
use cashrisk_models::Ar1Model;
use tracing::{debug, info};

use crate::error::RiskError;
use crate::fan::{reduce_fan, FanPoint};
use crate::kpi::{compute_kpis, RiskKpis};
use crate::overdraft::{overdraft_profile, OverdraftProfile};

/// Output of one Monte Carlo run.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationResult {
    /// Full path matrix, `n_paths × horizon_days`.
    #[cfg_attr(feature = "serde", serde(skip))]
    pub paths: PathMatrix,
    /// One percentile point per horizon day.
    pub fan: Vec<FanPoint>,
    /// Headline KPIs.
    pub kpis: RiskKpis,
    /// Path-level first-overdraft statistics.
    pub overdraft: OverdraftProfile,
}

/// Runs simulations with a fixed parallel policy and optional cancellation.
///
/// # Examples
///
/// ```
/// use cashrisk_engine::{ParallelConfig, SimulationParams};
/// use cashrisk_models::Ar1Model;
/// use cashrisk_risk::Simulator;
///
/// let model = Ar1Model::new(-50.0, 0.3, 20.0).unwrap();
/// let params = SimulationParams::builder()
///     .horizon_days(10)
///     .n_paths(500)
///     .seed(42)
///     .build()
///     .unwrap();
///
/// let result = Simulator::new()
///     .with_parallel(ParallelConfig::sequential())
///     .simulate(1_000.0, &model, &params)
///     .unwrap();
/// assert_eq!(result.fan.len(), 10);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Simulator {
    parallel: ParallelConfig,
    cancel: Option<CancellationToken>,
}

impl Simulator {
    /// Creates a simulator with the default parallel policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the parallel policy.
    pub fn with_parallel(mut self, parallel: ParallelConfig) -> Self {
        self.parallel = parallel;
        self
    }

    /// Attaches a cancellation token checked between paths.
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// Parallel policy in use.
    pub fn parallel(&self) -> &ParallelConfig {
        &self.parallel
    }

    /// Simulates from seeded per-path streams.
    ///
    /// # Errors
    ///
    /// `RiskError::Simulation` for invalid parameters, an invalid model or
    /// cancellation.
    pub fn simulate(
        &self,
        last_cash: f64,
        model: &Ar1Model,
        params: &SimulationParams,
    ) -> Result<SimulationResult, RiskError> {
        let paths = generate_paths(last_cash, model, params, &self.parallel, self.cancel.as_ref())?;
        Ok(self.summarise(paths, params))
    }

    /// Simulates drawing every uniform from `source`, path by path.
    ///
    /// # Errors
    ///
    /// Same as [`Simulator::simulate`].
    pub fn simulate_with_source<S: UniformSource + ?Sized>(
        &self,
        last_cash: f64,
        model: &Ar1Model,
        params: &SimulationParams,
        source: &mut S,
    ) -> Result<SimulationResult, RiskError> {
        let paths =
            generate_paths_with_source(last_cash, model, params, source, self.cancel.as_ref())?;
        Ok(self.summarise(paths, params))
    }

    fn summarise(&self, paths: PathMatrix, params: &SimulationParams) -> SimulationResult {
        let fan = reduce_fan(&paths, params.anchor_date(), &self.parallel);
        let kpis = compute_kpis(&paths, &fan);
        let overdraft = overdraft_profile(&paths);

        debug!(
            cfar = kpis.cfar,
            expected_shortfall = kpis.expected_shortfall,
            first_day_p50 = ?overdraft.first_day_p50,
            "Reduced paths to fan"
        );
        info!(
            n_paths = paths.n_paths(),
            horizon_days = paths.horizon_days(),
            probability_overdraft = kpis.probability_overdraft,
            runway_days_p5 = ?kpis.runway_days_p5,
            "Simulation complete"
        );

        SimulationResult {
            paths,
            fan,
            kpis,
            overdraft,
        }
    }
}

/// Simulates `params.n_paths()` cash paths from `last_cash` and summarises them.
///
/// # Errors
///
/// `RiskError::Simulation` wrapping `InvalidParameter` when
/// `horizon_days < 1` or `n_paths < 1`.
///
/// # Examples
///
/// ```
/// use cashrisk_engine::SimulationParams;
/// use cashrisk_models::Ar1Model;
/// use cashrisk_risk::simulate;
///
/// let model = Ar1Model::new(-50.0, 0.0, 0.0).unwrap();
/// let params = SimulationParams::builder().horizon_days(5).n_paths(10).seed(1).build().unwrap();
/// let result = simulate(120.0, &model, &params).unwrap();
///
/// // 70, 20, -30, ... so the runway is three days
/// assert_eq!(result.kpis.runway_days_p5, Some(3));
/// assert_eq!(result.kpis.probability_overdraft, 1.0);
/// ```
pub fn simulate(
    last_cash: f64,
    model: &Ar1Model,
    params: &SimulationParams,
) -> Result<SimulationResult, RiskError> {
    Simulator::default().simulate(last_cash, model, params)
}

/// Like [`simulate`] but drawing uniforms from a caller-supplied source.
///
/// # Errors
///
/// Same as [`simulate`].
pub fn simulate_with_source<S: UniformSource + ?Sized>(
    last_cash: f64,
    model: &Ar1Model,
    params: &SimulationParams,
    source: &mut S,
) -> Result<SimulationResult, RiskError> {
    Simulator::default().simulate_with_source(last_cash, model, params, source)
}
