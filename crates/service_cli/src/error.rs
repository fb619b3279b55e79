//! CLI error types.

use cashrisk_core::FlowError;
use cashrisk_engine::SimulationError;
use cashrisk_risk::RiskError;
use thiserror::Error;

use crate::config::ConfigError;

/// Errors surfaced by the `cashrisk` binary.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Missing column '{0}' in input")]
    MissingColumn(String),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Risk(#[from] RiskError),
}

impl From<FlowError> for CliError {
    fn from(err: FlowError) -> Self {
        CliError::Risk(err.into())
    }
}

impl From<SimulationError> for CliError {
    fn from(err: SimulationError) -> Self {
        CliError::Risk(err.into())
    }
}

/// Result alias for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
