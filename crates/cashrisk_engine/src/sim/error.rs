//! Error types for the simulation engine.

use cashrisk_models::ModelError;
use thiserror::Error;

/// Errors raised by parameter validation and path generation.
///
/// All errors are synchronous and local; nothing here is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// A caller-supplied parameter violates the engine contract.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },

    /// The AR(1) model failed validation.
    #[error("Invalid model: {0}")]
    InvalidModel(#[from] ModelError),

    /// The run was aborted through its cancellation token.
    #[error("Simulation cancelled after {paths_completed} paths")]
    Cancelled {
        /// Paths fully generated before the abort was observed.
        paths_completed: usize,
    },
}

impl SimulationError {
    /// Shorthand for an `InvalidParameter` error.
    pub fn invalid(name: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name,
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimulationError::invalid("horizon_days", "must be at least 1, got 0");
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'horizon_days': must be at least 1, got 0"
        );

        let err = SimulationError::Cancelled { paths_completed: 12 };
        assert_eq!(err.to_string(), "Simulation cancelled after 12 paths");

        let err: SimulationError = ModelError::NegativeSigma(-2.0).into();
        assert!(err.to_string().contains("sigma"));
    }
}
