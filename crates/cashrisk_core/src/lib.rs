//! # Cashrisk Core (L1: Foundation)
//!
//! Calendar days, raw flow rows, and the Flow Aggregator that turns them
//! into a strictly date-ordered series of daily net cash flows.
//!
//! ## Architecture
//!
//! ```text
//! cashrisk_core (L1)      Date, RawFlowRow, aggregate()
//!        ↓
//! cashrisk_models (L2)    Ar1Model, fit_ar1()
//!        ↓
//! cashrisk_engine (L3)    RNG, SimulationParams, path generation
//!        ↓
//! cashrisk_risk (L4)      fan chart, KPIs, pipeline
//! ```
//!
//! ## Example
//!
//! ```
//! use cashrisk_core::flows::{aggregate, AggregationOptions, RawFlowRow, StressParams};
//!
//! let rows = vec![
//!     RawFlowRow::payment("2024-01-01", 500.0, 120.0),
//!     RawFlowRow::payment("2024-01-02", 0.0, 80.0),
//! ];
//! let options = AggregationOptions::with_stress(StressParams {
//!     sales_pct: -10.0,
//!     ..Default::default()
//! });
//! let flows = aggregate(&rows, &options).unwrap();
//! assert_eq!(flows.len(), 2);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod flows;
pub mod types;

pub use flows::{aggregate, AggregationOptions, DailyNetFlow, Densification, RawFlowRow, StressParams};
pub use types::{Date, DateError, FlowError};
