//! Model error types.

use thiserror::Error;

/// Errors raised when constructing or validating a model.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ModelError {
    /// A parameter is NaN or infinite.
    #[error("Model parameter '{name}' is not finite: {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Residual standard deviation below zero.
    #[error("Model sigma must be non-negative, got {0}")]
    NegativeSigma(f64),

    /// Autocorrelation outside the stationary band.
    #[error("Model phi {0} lies outside [-0.995, 0.995]")]
    NonStationary(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ModelError::NegativeSigma(-1.5).to_string(),
            "Model sigma must be non-negative, got -1.5"
        );
        let err = ModelError::NonFinite {
            name: "mu",
            value: f64::INFINITY,
        };
        assert_eq!(err.to_string(), "Model parameter 'mu' is not finite: inf");
    }
}
