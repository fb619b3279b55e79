//! # Random Number Generation
//!
//! All randomness reaches the simulator through [`UniformSource`], an
//! explicit parameter rather than ambient global state.
//!
//! - [`CashRng`]: `StdRng` wrapper, seeded or entropy-backed
//! - [`Lcg`]: 32-bit linear congruential generator
//! - [`box_muller`]: standard normal variates from two uniforms
//!
//! ## Usage Example
//!
//! ```rust
//! use cashrisk_engine::rng::{box_muller, CashRng, UniformSource};
//!
//! let mut rng = CashRng::from_seed(12345);
//! let u = rng.next_uniform();
//! assert!((0.0..1.0).contains(&u));
//!
//! let z = box_muller(&mut rng);
//! assert!(z.is_finite());
//! ```

mod lcg;
mod normal;
mod prng;
mod source;

pub use lcg::Lcg;
pub use normal::{box_muller, fill_normal};
pub use prng::CashRng;
pub use source::UniformSource;
