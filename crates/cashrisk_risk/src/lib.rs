//! # Cashrisk Risk: fan charts and KPIs
//!
//! Turns simulated cash paths into the figures a treasurer reads:
//!
//! - [`fan`]: per-day p5/p50/p95 percentile fan
//! - [`kpi`]: cash-flow-at-risk, expected shortfall, overdraft probability
//!   and p5 runway
//! - [`overdraft`]: when individual paths first go negative
//! - [`thresholds`]: alert flags on the KPIs
//! - [`Simulator`], [`simulate`] and [`run_pipeline`]: one-call entry points
//!
//! ## Example
//!
//! ```
//! use cashrisk_core::{AggregationOptions, RawFlowRow};
//! use cashrisk_engine::SimulationParams;
//! use cashrisk_risk::{run_pipeline, RiskThresholds};
//!
//! let rows = vec![
//!     RawFlowRow::payment("2024-01-01", 120.0, 200.0),
//!     RawFlowRow::payment("2024-01-02", 80.0, 150.0),
//!     RawFlowRow::payment("2024-01-03", 140.0, 170.0),
//! ];
//! let params = SimulationParams::builder().horizon_days(30).n_paths(1_000).seed(7).build().unwrap();
//!
//! let report = run_pipeline(&rows, &AggregationOptions::default(), 500.0, &params).unwrap();
//! let flags = report.simulation.kpis.breaches(&RiskThresholds::default());
//! assert_eq!(report.simulation.fan.len(), 30);
//! assert!(!flags.is_empty());
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod error;
pub mod fan;
pub mod kpi;
pub mod overdraft;
pub mod pipeline;
pub mod simulator;
pub mod thresholds;

pub use error::RiskError;
pub use fan::{reduce_fan, FanPoint};
pub use kpi::{compute_kpis, RiskKpis};
pub use overdraft::{overdraft_profile, OverdraftProfile};
pub use pipeline::{run_pipeline, PipelineResult};
pub use simulator::{simulate, simulate_with_source, SimulationResult, Simulator};
pub use thresholds::{RiskFlag, RiskThresholds};
