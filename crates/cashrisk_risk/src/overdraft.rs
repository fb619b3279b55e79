//! Path-level overdraft timing.
//!
//! Complements the fan-based runway: instead of asking when the pessimistic
//! percentile crosses zero, it looks at when each individual path does.

use cashrisk_engine::PathMatrix;

use crate::fan::{percentile_sorted, P5, P50, P95};

/// Distribution of the first overdraft day across paths.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverdraftProfile {
    /// Paths that go below zero at least once.
    pub paths_overdrawn: usize,
    /// Paths simulated.
    pub paths_total: usize,
    /// Earliest first-overdraft day (5th percentile) among overdrawn paths.
    pub first_day_p5: Option<u32>,
    /// Median first-overdraft day among overdrawn paths.
    pub first_day_p50: Option<u32>,
    /// Late first-overdraft day (95th percentile) among overdrawn paths.
    pub first_day_p95: Option<u32>,
    /// Mean first-overdraft day among overdrawn paths.
    pub mean_first_day: Option<f64>,
}

impl OverdraftProfile {
    /// Fraction of paths overdrawn; matches the headline overdraft probability.
    pub fn share_overdrawn(&self) -> f64 {
        if self.paths_total == 0 {
            0.0
        } else {
            self.paths_overdrawn as f64 / self.paths_total as f64
        }
    }
}

/// First 1-based day on which `path` is strictly negative.
pub fn first_overdraft_day(path: &[f64]) -> Option<u32> {
    path.iter()
        .position(|&v| v < 0.0)
        .map(|idx| u32::try_from(idx + 1).unwrap_or(u32::MAX))
}

/// Builds the overdraft profile of a path ensemble.
pub fn overdraft_profile(paths: &PathMatrix) -> OverdraftProfile {
    let mut days: Vec<u32> = paths.paths().filter_map(first_overdraft_day).collect();
    days.sort_unstable();

    let as_f64: Vec<f64> = days.iter().map(|&d| f64::from(d)).collect();
    let pick = |q| percentile_sorted(&as_f64, q).map(|d| d as u32);
    let mean_first_day = if as_f64.is_empty() {
        None
    } else {
        Some(as_f64.iter().sum::<f64>() / as_f64.len() as f64)
    };

    OverdraftProfile {
        paths_overdrawn: days.len(),
        paths_total: paths.n_paths(),
        first_day_p5: pick(P5),
        first_day_p50: pick(P50),
        first_day_p95: pick(P95),
        mean_first_day,
    }
}
