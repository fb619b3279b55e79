//! # Cashrisk Engine (L3: Monte Carlo Kernel)
//!
//! Draws simulated future cash paths from a fitted AR(1) process.
//!
//! - [`rng`]: injectable uniform sources and the Box–Muller sampler
//! - [`sim`]: parameters, path generation, cancellation, path storage
//! - [`parallel`]: rayon thresholds for large runs
//!
//! ## Usage Example
//!
//! ```rust
//! use cashrisk_engine::parallel::ParallelConfig;
//! use cashrisk_engine::sim::{generate_paths, SimulationParams};
//! use cashrisk_models::Ar1Model;
//!
//! let model = Ar1Model::new(-50.0, 0.3, 20.0).unwrap();
//! let params = SimulationParams::builder()
//!     .horizon_days(10)
//!     .n_paths(1_000)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let paths = generate_paths(1_000.0, &model, &params, &ParallelConfig::default(), None).unwrap();
//! assert_eq!(paths.n_paths(), 1_000);
//! assert_eq!(paths.horizon_days(), 10);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod parallel;
pub mod rng;
pub mod sim;

pub use parallel::ParallelConfig;
pub use rng::{CashRng, Lcg, UniformSource};
pub use sim::{
    generate_paths, generate_paths_with_source, CancellationToken, PathMatrix, SimulationError,
    SimulationParams,
};
