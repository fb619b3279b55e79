//! Estimators fitting models to observed daily net flows.

pub mod ar1;

pub use ar1::{fit_ar1, fit_ar1_flows, fit_ar1_with_diagnostics, Ar1Diagnostics, Ar1Fit};
