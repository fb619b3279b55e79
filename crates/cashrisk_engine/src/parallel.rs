//! Rayon-based parallelisation settings.
//!
//! Paths depend only on the read-only model and the starting balance, so
//! they are generated independently across worker threads once a run is
//! large enough to amortise the scheduling overhead.

/// Default number of matrix cells from which generation goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 200_000;

/// Default minimum number of paths handed to a worker at once.
pub const DEFAULT_MIN_PATHS_PER_TASK: usize = 64;

/// Configuration for parallel path generation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum `paths × horizon` cells before using parallelism.
    pub parallel_threshold: usize,
    /// Minimum paths per rayon task.
    pub min_paths_per_task: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            min_paths_per_task: DEFAULT_MIN_PATHS_PER_TASK,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(parallel_threshold: usize, min_paths_per_task: usize) -> Self {
        Self {
            parallel_threshold,
            min_paths_per_task: min_paths_per_task.max(1),
        }
    }

    /// Never parallelise.
    pub fn sequential() -> Self {
        Self::new(usize::MAX, DEFAULT_MIN_PATHS_PER_TASK)
    }

    /// Always parallelise, regardless of run size.
    pub fn always() -> Self {
        Self::new(0, 1)
    }

    /// Returns whether to use parallel processing for the given cell count.
    #[inline]
    pub fn should_parallelise(&self, n_cells: usize) -> bool {
        n_cells >= self.parallel_threshold
    }
}
