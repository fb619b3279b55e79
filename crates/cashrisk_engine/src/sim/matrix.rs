//! Row-major storage for simulated cash paths.
//!
//! Cell `(path, day)` lives at `data[path * horizon_days + day]` and holds
//! the cumulative cash balance at the end of `day` (0-based).

/// Ensemble of simulated cash paths.
#[derive(Clone, Debug, PartialEq)]
pub struct PathMatrix {
    n_paths: usize,
    horizon_days: usize,
    data: Vec<f64>,
}

impl PathMatrix {
    /// Allocates a zero-filled matrix.
    pub fn zeros(n_paths: usize, horizon_days: usize) -> Self {
        Self {
            n_paths,
            horizon_days,
            data: vec![0.0; n_paths * horizon_days],
        }
    }

    /// Wraps existing row-major data.
    ///
    /// Returns `None` if `data.len() != n_paths * horizon_days`.
    pub fn from_vec(n_paths: usize, horizon_days: usize, data: Vec<f64>) -> Option<Self> {
        (data.len() == n_paths * horizon_days).then_some(Self {
            n_paths,
            horizon_days,
            data,
        })
    }

    /// Number of paths.
    #[inline]
    pub fn n_paths(&self) -> usize {
        self.n_paths
    }

    /// Number of days per path.
    #[inline]
    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Returns `true` if the matrix holds no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Cash values of one path, one per day.
    ///
    /// # Panics
    ///
    /// Panics if `path >= n_paths`.
    #[inline]
    pub fn path(&self, path: usize) -> &[f64] {
        let start = path * self.horizon_days;
        &self.data[start..start + self.horizon_days]
    }

    /// Iterates over paths in index order.
    pub fn paths(&self) -> impl Iterator<Item = &[f64]> + '_ {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.horizon_days.max(1))
    }

    /// Collects one day's values across all paths.
    ///
    /// Returns `None` if `day >= horizon_days`.
    pub fn day_values(&self, day: usize) -> Option<Vec<f64>> {
        (day < self.horizon_days).then(|| self.paths().map(|path| path[day]).collect())
    }

    /// Value at `(path, day)`.
    #[inline]
    pub fn get(&self, path: usize, day: usize) -> Option<f64> {
        if path < self.n_paths && day < self.horizon_days {
            Some(self.data[path * self.horizon_days + day])
        } else {
            None
        }
    }

    /// Raw row-major data.
    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub(crate) fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consumes the matrix, returning the row-major data.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }
}
