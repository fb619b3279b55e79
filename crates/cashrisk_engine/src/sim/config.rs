//! Simulation parameters.
//!
//! [`SimulationParams`] is immutable once built; use
//! [`SimulationParams::builder`] to construct validated instances.

use cashrisk_core::Date;

use super::error::SimulationError;

/// Maximum number of simulated paths.
pub const MAX_PATHS: usize = 1_000_000;

/// Maximum horizon in days (ten years).
pub const MAX_HORIZON_DAYS: usize = 3_650;

/// Maximum number of matrix cells (`paths × horizon`) held at once.
pub const MAX_MATRIX_CELLS: usize = 50_000_000;

/// Monte Carlo run parameters.
///
/// # Examples
///
/// ```rust
/// use cashrisk_engine::sim::SimulationParams;
///
/// let params = SimulationParams::builder()
///     .horizon_days(90)
///     .n_paths(5_000)
///     .seed(42)
///     .build()
///     .expect("valid parameters");
///
/// assert_eq!(params.horizon_days(), 90);
/// assert_eq!(params.seed(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationParams {
    horizon_days: usize,
    n_paths: usize,
    seed: Option<u64>,
    anchor_date: Option<Date>,
}

impl SimulationParams {
    /// Creates a new parameter builder.
    #[inline]
    pub fn builder() -> SimulationParamsBuilder {
        SimulationParamsBuilder::default()
    }

    /// Shorthand for an unseeded, unanchored run.
    pub fn new(horizon_days: usize, n_paths: usize) -> Result<Self, SimulationError> {
        Self::builder()
            .horizon_days(horizon_days)
            .n_paths(n_paths)
            .build()
    }

    /// Number of simulated days.
    #[inline]
    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Number of simulated paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Seed for a reproducible run; `None` draws from OS entropy.
    #[inline]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Day preceding the first simulated day, used to date fan points.
    #[inline]
    pub fn anchor_date(&self) -> Option<Date> {
        self.anchor_date
    }

    /// Returns a copy with a different seed.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Returns a copy anchored at `date`.
    pub fn with_anchor_date(mut self, date: Option<Date>) -> Self {
        self.anchor_date = date;
        self
    }

    /// Total matrix cells (`n_paths × horizon_days`).
    #[inline]
    pub fn n_cells(&self) -> usize {
        self.n_paths * self.horizon_days
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` if:
    /// - `horizon_days` is 0 or greater than [`MAX_HORIZON_DAYS`]
    /// - `n_paths` is 0 or greater than [`MAX_PATHS`]
    /// - `n_paths × horizon_days` exceeds [`MAX_MATRIX_CELLS`]
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.horizon_days < 1 || self.horizon_days > MAX_HORIZON_DAYS {
            return Err(SimulationError::invalid(
                "horizon_days",
                format!(
                    "{} is outside [1, {}]",
                    self.horizon_days, MAX_HORIZON_DAYS
                ),
            ));
        }
        if self.n_paths < 1 || self.n_paths > MAX_PATHS {
            return Err(SimulationError::invalid(
                "n_paths",
                format!("{} is outside [1, {}]", self.n_paths, MAX_PATHS),
            ));
        }
        if self.n_cells() > MAX_MATRIX_CELLS {
            return Err(SimulationError::invalid(
                "n_paths",
                format!(
                    "{} paths x {} days exceeds {} cells",
                    self.n_paths, self.horizon_days, MAX_MATRIX_CELLS
                ),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SimulationParams`].
#[derive(Clone, Debug, Default)]
pub struct SimulationParamsBuilder {
    horizon_days: Option<usize>,
    n_paths: Option<usize>,
    seed: Option<u64>,
    anchor_date: Option<Date>,
}

impl SimulationParamsBuilder {
    /// Sets the horizon in days, in `[1, MAX_HORIZON_DAYS]`.
    #[inline]
    pub fn horizon_days(mut self, horizon_days: usize) -> Self {
        self.horizon_days = Some(horizon_days);
        self
    }

    /// Sets the number of paths, in `[1, MAX_PATHS]`.
    #[inline]
    pub fn n_paths(mut self, n_paths: usize) -> Self {
        self.n_paths = Some(n_paths);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets an optional seed.
    #[inline]
    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the anchor date for dating fan points.
    #[inline]
    pub fn anchor_date(mut self, date: Date) -> Self {
        self.anchor_date = Some(date);
        self
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError::InvalidParameter` if a count is missing or
    /// out of range.
    pub fn build(self) -> Result<SimulationParams, SimulationError> {
        let horizon_days = self
            .horizon_days
            .ok_or_else(|| SimulationError::invalid("horizon_days", "must be specified"))?;
        let n_paths = self
            .n_paths
            .ok_or_else(|| SimulationError::invalid("n_paths", "must be specified"))?;

        let params = SimulationParams {
            horizon_days,
            n_paths,
            seed: self.seed,
            anchor_date: self.anchor_date,
        };
        params.validate()?;
        Ok(params)
    }
}
