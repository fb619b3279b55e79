//! # Cashrisk Models (L2: Models)
//!
//! The AR(1) model of daily net cash flow and its estimator.
//!
//! - [`models`]: [`Ar1Model`] with one-step dynamics
//! - [`calibration`]: [`fit_ar1`] method-of-moments fit
//!
//! ## Example
//!
//! ```
//! use cashrisk_models::{fit_ar1, Ar1Model};
//!
//! let flows = [120.0, -40.0, 60.0, -10.0, 30.0];
//! let model: Ar1Model = fit_ar1(&flows);
//! assert!((model.mu - 32.0).abs() < 1e-12);
//! assert!(model.sigma > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod calibration;
pub mod error;
pub mod models;

pub use calibration::{fit_ar1, fit_ar1_flows, fit_ar1_with_diagnostics, Ar1Fit};
pub use error::ModelError;
pub use models::{Ar1Model, PHI_BOUND};
