//! AR(1) cash path generation.
//!
//! For every path the process starts at rest (`x_prev = mu`) with the
//! balance at `last_cash`, then for each day:
//!
//! ```text
//! z      = BoxMuller(u1, u2)
//! flow   = mu + phi * (x_prev - mu) + sigma * z
//! x_prev = flow
//! cash  += flow          -> recorded as the day's value
//! ```
//!
//! Two entry points are provided:
//! - [`generate_paths_with_source`]: sequential, every draw taken from one
//!   caller-owned [`UniformSource`]
//! - [`generate_paths`]: seeded per-path streams, optionally spread across
//!   rayon workers; output is identical whichever thread runs a path

use std::sync::atomic::{AtomicUsize, Ordering};

use cashrisk_models::Ar1Model;
use rayon::prelude::*;
use tracing::debug;

use super::cancel::CancellationToken;
use super::config::SimulationParams;
use super::error::SimulationError;
use super::matrix::PathMatrix;
use crate::parallel::ParallelConfig;
use crate::rng::{box_muller, CashRng, UniformSource};

/// Simulates one path into `out`, one cumulative cash value per day.
#[inline]
pub fn simulate_path<S: UniformSource + ?Sized>(
    last_cash: f64,
    model: &Ar1Model,
    source: &mut S,
    out: &mut [f64],
) {
    let mut x_prev = model.mu;
    let mut cash = last_cash;
    for slot in out.iter_mut() {
        let z = box_muller(source);
        let flow = model.step(x_prev, z);
        x_prev = flow;
        cash += flow;
        *slot = cash;
    }
}

fn check_inputs(
    last_cash: f64,
    model: &Ar1Model,
    params: &SimulationParams,
) -> Result<(), SimulationError> {
    params.validate()?;
    model.validate()?;
    if !last_cash.is_finite() {
        return Err(SimulationError::invalid(
            "last_cash",
            format!("must be finite, got {}", last_cash),
        ));
    }
    Ok(())
}

/// Generates all paths sequentially from a single uniform source.
///
/// Paths are drawn in index order, each consuming `2 × horizon_days`
/// uniforms. `params.seed()` is ignored; the source carries the state.
///
/// # Errors
///
/// - `InvalidParameter` / `InvalidModel` for contract violations
/// - `Cancelled` if `cancel` trips between paths
///
/// # Examples
///
/// ```rust
/// use cashrisk_engine::rng::Lcg;
/// use cashrisk_engine::sim::{generate_paths_with_source, SimulationParams};
/// use cashrisk_models::Ar1Model;
///
/// let model = Ar1Model::new(-10.0, 0.0, 0.0).unwrap();
/// let params = SimulationParams::new(3, 2).unwrap();
/// let paths = generate_paths_with_source(100.0, &model, &params, &mut Lcg::new(1), None).unwrap();
///
/// assert_eq!(paths.path(1), &[90.0, 80.0, 70.0]);
/// ```
pub fn generate_paths_with_source<S: UniformSource + ?Sized>(
    last_cash: f64,
    model: &Ar1Model,
    params: &SimulationParams,
    source: &mut S,
    cancel: Option<&CancellationToken>,
) -> Result<PathMatrix, SimulationError> {
    check_inputs(last_cash, model, params)?;

    let horizon = params.horizon_days();
    let mut matrix = PathMatrix::zeros(params.n_paths(), horizon);

    for (idx, row) in matrix.as_mut_slice().chunks_exact_mut(horizon).enumerate() {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(SimulationError::Cancelled {
                paths_completed: idx,
            });
        }
        simulate_path(last_cash, model, source, row);
    }

    Ok(matrix)
}

/// Generates all paths from per-path seeded streams.
///
/// The base seed is `params.seed()` or, when absent, a fresh entropy draw.
/// Path `i` uses [`CashRng::for_path`]`(base_seed, i)`, so a seeded run is
/// bit-identical across calls and thread counts.
///
/// # Errors
///
/// - `InvalidParameter` / `InvalidModel` for contract violations
/// - `Cancelled` if `cancel` trips before all paths complete
pub fn generate_paths(
    last_cash: f64,
    model: &Ar1Model,
    params: &SimulationParams,
    parallel: &ParallelConfig,
    cancel: Option<&CancellationToken>,
) -> Result<PathMatrix, SimulationError> {
    check_inputs(last_cash, model, params)?;

    let base_seed = params
        .seed()
        .unwrap_or_else(|| CashRng::from_entropy().next_seed());
    let horizon = params.horizon_days();
    let use_parallel = parallel.should_parallelise(params.n_cells());

    debug!(
        n_paths = params.n_paths(),
        horizon_days = horizon,
        seeded = params.seed().is_some(),
        base_seed,
        parallel = use_parallel,
        "Generating cash paths"
    );

    let mut matrix = PathMatrix::zeros(params.n_paths(), horizon);
    let completed = AtomicUsize::new(0);

    let run_path = |(idx, row): (usize, &mut [f64])| -> Result<(), SimulationError> {
        if cancel.is_some_and(CancellationToken::is_cancelled) {
            return Err(SimulationError::Cancelled {
                paths_completed: completed.load(Ordering::Relaxed),
            });
        }
        let mut rng = CashRng::for_path(base_seed, idx);
        simulate_path(last_cash, model, &mut rng, row);
        completed.fetch_add(1, Ordering::Relaxed);
        Ok(())
    };

    let rows = matrix.as_mut_slice();
    if use_parallel {
        rows.par_chunks_exact_mut(horizon)
            .enumerate()
            .with_min_len(parallel.min_paths_per_task)
            .try_for_each(run_path)?;
    } else {
        rows.chunks_exact_mut(horizon)
            .enumerate()
            .try_for_each(run_path)?;
    }

    Ok(matrix)
}
