//! Daily net-flow aggregation.
//!
//! Converts raw rows into one `{date, net}` entry per calendar day, applying
//! stress multipliers and the receivable delay before grouping.
//!
//! # Densification
//!
//! By default only days that carry at least one (possibly shifted) leg are
//! emitted ([`Densification::Sparse`]). [`Densification::Dense`] fills every
//! calendar day between the first and last active day with a zero net flow.
//! The choice changes the AR(1) fit, so callers pick it explicitly.

use std::collections::BTreeMap;

use tracing::debug;

use super::row::RawFlowRow;
use super::stress::StressParams;
use crate::types::{Date, FlowError};

/// Net cash flow of a single calendar day.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DailyNetFlow {
    /// Calendar day.
    pub date: Date,
    /// Sum of inflows minus sum of outflows for the day.
    pub net: f64,
}

/// Gap-handling policy for days without activity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Densification {
    /// Emit only days with activity.
    #[default]
    Sparse,
    /// Emit every day in range, zero-filling inactive days.
    Dense,
}

impl std::str::FromStr for Densification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sparse" => Ok(Densification::Sparse),
            "dense" => Ok(Densification::Dense),
            other => Err(format!(
                "Unknown densification '{}'. Supported: sparse, dense",
                other
            )),
        }
    }
}

/// Options controlling aggregation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AggregationOptions {
    /// Stress adjustments.
    pub stress: StressParams,
    /// Gap-handling policy.
    pub densification: Densification,
}

impl AggregationOptions {
    /// Options with the given stress and sparse output.
    pub fn with_stress(stress: StressParams) -> Self {
        Self {
            stress,
            densification: Densification::Sparse,
        }
    }
}

/// Aggregated series with row accounting.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Aggregation {
    /// Daily series, strictly increasing by date.
    pub flows: Vec<DailyNetFlow>,
    /// Rows that contributed to the series.
    pub rows_used: usize,
    /// Rows dropped for a missing/invalid date or non-finite amounts.
    pub rows_dropped: usize,
}

#[derive(Clone, Copy, Default)]
struct DayTotals {
    inflow: f64,
    outflow: f64,
}

/// Aggregates rows into a daily net-flow series.
///
/// # Errors
///
/// Returns `FlowError::InvalidStress` if the stress percentages are not
/// finite or are below -100%. Malformed rows are dropped, not reported.
///
/// # Examples
///
/// ```
/// use cashrisk_core::flows::{aggregate, AggregationOptions, RawFlowRow};
///
/// let rows = vec![
///     RawFlowRow::payment("2024-01-02", 100.0, 20.0),
///     RawFlowRow::payment("2024-01-02T15:00:00", 50.0, 10.0),
///     RawFlowRow::payment("2024-01-01", 0.0, 30.0),
/// ];
/// let flows = aggregate(&rows, &AggregationOptions::default()).unwrap();
///
/// assert_eq!(flows.len(), 2);
/// assert_eq!(flows[0].net, -30.0);
/// assert_eq!(flows[1].net, 120.0);
/// ```
pub fn aggregate(
    rows: &[RawFlowRow],
    options: &AggregationOptions,
) -> Result<Vec<DailyNetFlow>, FlowError> {
    aggregate_detailed(rows, options).map(|agg| agg.flows)
}

/// Aggregates rows and reports how many were used and dropped.
pub fn aggregate_detailed(
    rows: &[RawFlowRow],
    options: &AggregationOptions,
) -> Result<Aggregation, FlowError> {
    let stress = options.stress;
    stress.validate()?;

    let inflow_factor = stress.inflow_factor();
    let outflow_factor = stress.outflow_factor();
    let dso = i64::from(stress.dso_days);

    let mut days: BTreeMap<Date, DayTotals> = BTreeMap::new();
    let mut rows_used = 0usize;
    let mut rows_dropped = 0usize;

    for row in rows {
        let Some(date) = row.date.as_deref().and_then(|d| Date::parse_day(d).ok()) else {
            rows_dropped += 1;
            continue;
        };
        let Some(legs) = row.cash_legs() else {
            rows_dropped += 1;
            continue;
        };
        let Some(receipt) = date.add_days(dso) else {
            rows_dropped += 1;
            continue;
        };

        days.entry(receipt).or_default().inflow += legs.inflow * inflow_factor;
        days.entry(date).or_default().outflow += legs.outflow * outflow_factor;
        rows_used += 1;
    }

    let mut flows: Vec<DailyNetFlow> = days
        .into_iter()
        .map(|(date, totals)| DailyNetFlow {
            date,
            net: totals.inflow - totals.outflow,
        })
        .collect();

    if options.densification == Densification::Dense {
        flows = densify(&flows);
    }

    debug!(
        rows_used,
        rows_dropped,
        days = flows.len(),
        dso_days = stress.dso_days,
        "Aggregated daily net flows"
    );

    Ok(Aggregation {
        flows,
        rows_used,
        rows_dropped,
    })
}

/// Fills every missing day between the first and last entry with zero net flow.
///
/// The input must be sorted by date without duplicates, as produced by
/// [`aggregate`].
pub fn densify(flows: &[DailyNetFlow]) -> Vec<DailyNetFlow> {
    let (Some(first), Some(last)) = (flows.first(), flows.last()) else {
        return Vec::new();
    };

    let span = usize::try_from(last.date - first.date).unwrap_or(0) + 1;
    let mut dense = Vec::with_capacity(span);
    let mut existing = flows.iter().peekable();
    let mut day = first.date;

    while day <= last.date {
        let net = match existing.peek() {
            Some(flow) if flow.date == day => {
                let net = flow.net;
                existing.next();
                net
            }
            _ => 0.0,
        };
        dense.push(DailyNetFlow { date: day, net });
        match day.succ() {
            Some(next) => day = next,
            None => break,
        }
    }
    dense
}

/// Extracts the net values of a series in date order.
pub fn net_values(flows: &[DailyNetFlow]) -> Vec<f64> {
    flows.iter().map(|f| f.net).collect()
}
