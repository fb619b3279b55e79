//! Stochastic models of daily net cash flow.

pub mod ar1;

pub use ar1::{clamp_phi, Ar1Model, PHI_BOUND};
