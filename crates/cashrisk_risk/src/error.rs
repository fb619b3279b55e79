//! Risk-layer error types.

use cashrisk_core::FlowError;
use cashrisk_engine::SimulationError;
use thiserror::Error;

/// Errors that can occur while producing a risk report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    /// Aggregation rejected its parameters.
    #[error("Aggregation error: {0}")]
    Flow(#[from] FlowError),

    /// The simulation engine rejected its inputs or was cancelled.
    #[error("Simulation error: {0}")]
    Simulation(#[from] SimulationError),
}
