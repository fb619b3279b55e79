//! Scalar risk indicators.
//!
//! | KPI | Definition |
//! |-----|------------|
//! | CFaR | `min_d (p5[d] - p50[d])` over the fan |
//! | Expected shortfall | `mean_d (p5[d] - p50[d])` over the fan |
//! | Overdraft probability | share of paths with any day below zero |
//! | Runway (p5) | first 1-based day with `p5[d] < 0`, none if never |
//!
//! The shortfall here is a fan-level proxy (mean gap across days), not a
//! tail expectation over paths.

use cashrisk_engine::PathMatrix;

use crate::fan::FanPoint;

/// Headline KPIs of one simulation run.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskKpis {
    /// Worst daily gap between the pessimistic and central projection (≤ 0).
    pub cfar: f64,
    /// Average daily gap between the pessimistic and central projection (≤ 0).
    pub expected_shortfall: f64,
    /// Fraction of paths that dip below zero at least once.
    pub probability_overdraft: f64,
    /// First day the pessimistic projection is overdrawn; `None` means the
    /// runway is unbounded over the horizon.
    pub runway_days_p5: Option<u32>,
}

impl RiskKpis {
    /// Runway as a number of days, `f64::INFINITY` when unbounded.
    pub fn runway_days(&self) -> f64 {
        self.runway_days_p5.map_or(f64::INFINITY, f64::from)
    }

    /// Returns `true` when the pessimistic projection goes negative within
    /// the horizon.
    #[inline]
    pub fn has_finite_runway(&self) -> bool {
        self.runway_days_p5.is_some()
    }
}

/// Worst `p5 - p50` gap; zero for an empty fan.
pub fn cash_flow_at_risk(fan: &[FanPoint]) -> f64 {
    fan.iter()
        .map(FanPoint::downside_gap)
        .reduce(f64::min)
        .unwrap_or(0.0)
}

/// Mean `p5 - p50` gap; zero for an empty fan.
pub fn expected_shortfall(fan: &[FanPoint]) -> f64 {
    if fan.is_empty() {
        return 0.0;
    }
    fan.iter().map(FanPoint::downside_gap).sum::<f64>() / fan.len() as f64
}

/// First 1-based day whose p5 is strictly negative.
pub fn runway_p5(fan: &[FanPoint]) -> Option<u32> {
    fan.iter()
        .find(|p| p.p5 < 0.0)
        .map(|p| u32::try_from(p.day).unwrap_or(u32::MAX))
}

/// Share of paths with at least one strictly negative day.
pub fn probability_overdraft(paths: &PathMatrix) -> f64 {
    if paths.is_empty() {
        return 0.0;
    }
    let overdrawn = paths
        .paths()
        .filter(|path| path.iter().any(|&v| v < 0.0))
        .count();
    overdrawn as f64 / paths.n_paths() as f64
}

/// Computes all headline KPIs from the paths and their fan.
pub fn compute_kpis(paths: &PathMatrix, fan: &[FanPoint]) -> RiskKpis {
    RiskKpis {
        cfar: cash_flow_at_risk(fan),
        expected_shortfall: expected_shortfall(fan),
        probability_overdraft: probability_overdraft(paths),
        runway_days_p5: runway_p5(fan),
    }
}
