//! Percentile fan reduction.
//!
//! For each horizon day the values of all paths are sorted and the 5th,
//! 50th and 95th percentiles are read off as nearest-rank order statistics
//! at index `floor(q * (n - 1))`, without interpolation.

use cashrisk_core::Date;
use cashrisk_engine::{ParallelConfig, PathMatrix};
use rayon::prelude::*;

/// Pessimistic quantile.
pub const P5: f64 = 0.05;
/// Central quantile.
pub const P50: f64 = 0.50;
/// Optimistic quantile.
pub const P95: f64 = 0.95;

/// One day of the percentile fan chart.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FanPoint {
    /// Horizon day, 1-based.
    pub day: usize,
    /// Calendar date when the run was anchored.
    pub date: Option<Date>,
    /// 5th percentile of cash.
    pub p5: f64,
    /// Median cash.
    pub p50: f64,
    /// 95th percentile of cash.
    pub p95: f64,
}

impl FanPoint {
    /// Gap between the pessimistic and central projection (`p5 - p50`, ≤ 0).
    #[inline]
    pub fn downside_gap(&self) -> f64 {
        self.p5 - self.p50
    }
}

/// Nearest-rank percentile of an ascending slice.
///
/// Returns `None` for an empty slice; `q` is clamped to `[0, 1]`.
///
/// # Examples
///
/// ```
/// use cashrisk_risk::fan::percentile_sorted;
///
/// let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(percentile_sorted(&sorted, 0.5), Some(3.0));
/// assert_eq!(percentile_sorted(&sorted, 0.05), Some(1.0));
/// assert_eq!(percentile_sorted(&sorted, 0.95), Some(4.0));
/// assert_eq!(percentile_sorted(&[], 0.5), None);
/// ```
pub fn percentile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    let idx = (q.clamp(0.0, 1.0) * (n - 1) as f64).floor() as usize;
    sorted.get(idx.min(n - 1)).copied()
}

fn fan_point(paths: &PathMatrix, day: usize, anchor: Option<Date>) -> FanPoint {
    let mut values = paths.day_values(day).unwrap_or_default();
    values.sort_unstable_by(f64::total_cmp);
    let pick = |q| percentile_sorted(&values, q).unwrap_or(0.0);
    FanPoint {
        day: day + 1,
        date: anchor.and_then(|d| d.add_days(day as i64 + 1)),
        p5: pick(P5),
        p50: pick(P50),
        p95: pick(P95),
    }
}

/// Reduces a path ensemble to one [`FanPoint`] per horizon day.
///
/// An empty ensemble yields an empty fan. With an anchor, day `d` is dated
/// `anchor + d`; days past the last representable date are left undated.
pub fn reduce_fan(paths: &PathMatrix, anchor: Option<Date>, parallel: &ParallelConfig) -> Vec<FanPoint> {
    if paths.is_empty() {
        return Vec::new();
    }
    let horizon = paths.horizon_days();
    if parallel.should_parallelise(paths.as_slice().len()) {
        (0..horizon)
            .into_par_iter()
            .map(|day| fan_point(paths, day, anchor))
            .collect()
    } else {
        (0..horizon).map(|day| fan_point(paths, day, anchor)).collect()
    }
}
