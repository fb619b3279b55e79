//! Flow Aggregator: raw rows to a daily net-flow series.
//!
//! ```text
//! RawFlowRow ──► CashLegs ──► StressParams ──► group by Date ──► DailyNetFlow[]
//!                             (×sales, ×costs,                    (sparse | dense)
//!                              inflow +dso days)
//! ```

mod aggregator;
mod row;
mod stress;

pub use aggregator::{
    aggregate, aggregate_detailed, densify, net_values, Aggregation, AggregationOptions,
    DailyNetFlow, Densification,
};
pub use row::{CashLegs, FlowKind, RawFlowRow, SaleLine};
pub use stress::{StressParams, MAX_DSO_DAYS};
