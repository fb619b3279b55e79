//! Error types for structured error handling.
//!
//! This module provides:
//! - `DateError`: Errors from date construction and parsing
//! - `FlowError`: Errors from invalid aggregation inputs

use thiserror::Error;

/// Date-related errors.
///
/// # Examples
/// ```
/// use cashrisk_core::types::DateError;
///
/// let err = DateError::InvalidDate { year: 2024, month: 2, day: 30 };
/// assert_eq!(format!("{}", err), "Invalid date: 2024-2-30");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    /// Invalid date components (e.g., February 30th).
    #[error("Invalid date: {year}-{month}-{day}")]
    InvalidDate {
        /// Year component
        year: i32,
        /// Month component (1-12)
        month: u32,
        /// Day component (1-31)
        day: u32,
    },

    /// Failed to parse date string.
    #[error("Date parse error: {0}")]
    ParseError(String),
}

/// Errors raised while turning raw rows into a daily net-flow series.
///
/// Malformed rows are never an error (they are dropped); only structurally
/// invalid caller parameters are.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FlowError {
    /// A stress parameter is not finite, would flip the sign of flows, or delays receipts too far.
    #[error("Invalid stress parameter '{name}': {value}")]
    InvalidStress {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_error_display() {
        let err = DateError::ParseError("bad".to_string());
        assert_eq!(err.to_string(), "Date parse error: bad");
    }

    #[test]
    fn test_flow_error_display() {
        let err = FlowError::InvalidStress {
            name: "sales_pct",
            value: f64::NAN,
        };
        assert!(err.to_string().contains("sales_pct"));
    }
}
