//! CLI command implementations
//!
//! Each submodule implements a specific CLI command. Commands write to a
//! caller-supplied sink so they can be exercised without a terminal.

pub mod aggregate;
pub mod check;
pub mod fit;
pub mod simulate;

use cashrisk_core::{AggregationOptions, StressParams};

use crate::config::CliConfig;

/// Aggregation options from the stress flags and configured densification
pub(crate) fn aggregation_options(stress: StressParams, config: &CliConfig) -> AggregationOptions {
    AggregationOptions {
        stress,
        densification: config.densification,
    }
}

/// Formats an optional day count, `∞` when absent
pub(crate) fn days_or_infinity(days: Option<u32>) -> String {
    days.map_or_else(|| "∞".to_string(), |d| d.to_string())
}
