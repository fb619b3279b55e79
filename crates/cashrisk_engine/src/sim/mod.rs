//! Monte Carlo path simulation for the AR(1) cash model.
//!
//! # Architecture
//!
//! ```text
//! generate_paths / generate_paths_with_source
//! ├── SimulationParams   (horizon, paths, seed, anchor)
//! ├── UniformSource      (CashRng per path | caller-owned source)
//! ├── box_muller         (z ~ N(0,1))
//! ├── CancellationToken  (polled between paths)
//! └── PathMatrix         (paths × horizon cumulative cash)
//! ```

pub mod cancel;
pub mod config;
pub mod error;
pub mod matrix;
pub mod paths;

pub use cancel::CancellationToken;
pub use config::{
    SimulationParams, SimulationParamsBuilder, MAX_HORIZON_DAYS, MAX_MATRIX_CELLS, MAX_PATHS,
};
pub use error::SimulationError;
pub use matrix::PathMatrix;
pub use paths::{generate_paths, generate_paths_with_source, simulate_path};
