//! Run configuration and the engine builder.
//!
//! ```rust
//! use centroid::{Algorithm, ClusterBuilder};
//!
//! let data = vec![
//!     vec![0.0, 0.0],
//!     vec![0.1, 0.1],
//!     vec![10.0, 10.0],
//!     vec![10.1, 10.1],
//! ];
//!
//! let engine = ClusterBuilder::new(Algorithm::Elkan, &data, 2)
//!     .delta_threshold(0.05)
//!     .max_iter(100)
//!     .seed(42)
//!     .build()
//!     .unwrap();
//! let clusters = engine.cluster().unwrap();
//! assert_eq!(clusters.len(), 2);
//! ```

use crate::cluster::{Clusterer, Elkan, KmeansPP, Lloyd};
use crate::distance::Distance;
use crate::error::{Error, Result};
use crate::init::Initializer;
use std::sync::Arc;

/// Default fraction of vectors that must move for another iteration to run.
pub const DEFAULT_DELTA_THRESHOLD: f64 = 0.01;

/// Default iteration ceiling.
pub const DEFAULT_MAX_ITER: usize = 500;

/// Convergence and reproducibility settings shared by every engine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KmeansConfig {
    /// Stop once fewer than `delta_threshold · n` vectors move in an iteration.
    pub(crate) delta_threshold: f64,
    /// Maximum iterations.
    pub(crate) max_iter: usize,
    /// Random seed for seeding and empty-cluster repair.
    pub(crate) seed: Option<u64>,
}

impl Default for KmeansConfig {
    fn default() -> Self {
        Self {
            delta_threshold: DEFAULT_DELTA_THRESHOLD,
            max_iter: DEFAULT_MAX_ITER,
            seed: None,
        }
    }
}

impl KmeansConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the movement threshold, a fraction in (0, 1).
    pub fn with_delta_threshold(mut self, delta_threshold: f64) -> Self {
        self.delta_threshold = delta_threshold;
        self
    }

    /// Set maximum iterations.
    pub fn with_max_iter(mut self, max_iter: usize) -> Self {
        self.max_iter = max_iter;
        self
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Movement threshold.
    pub fn delta_threshold(&self) -> f64 {
        self.delta_threshold
    }

    /// Iteration ceiling.
    pub fn max_iter(&self) -> usize {
        self.max_iter
    }

    /// Random seed, if any.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if !(self.delta_threshold > 0.0 && self.delta_threshold < 1.0) {
            return Err(Error::InvalidParameter {
                name: "delta_threshold",
                message: "must be in the open interval (0, 1)",
            });
        }
        if self.max_iter == 0 {
            return Err(Error::InvalidParameter {
                name: "max_iter",
                message: "must be at least 1",
            });
        }
        Ok(())
    }

    /// Whether a run should stop after `iteration` (0-based) moved `moved` of `n` vectors.
    pub(crate) fn is_converged(&self, iteration: usize, moved: usize, n: usize) -> bool {
        let min_moves = (n as f64 * self.delta_threshold) as usize;
        iteration + 1 >= self.max_iter || moved < min_moves || moved == 0
    }
}

/// Which engine [`ClusterBuilder`] produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// Triangle-inequality accelerated k-means.
    #[default]
    Elkan,
    /// Brute-force k-means.
    Lloyd,
    /// Lloyd with intrinsic k-means++ seeding.
    KmeansPlusPlus,
}

/// Assembles an engine from optional settings, falling back to defaults.
///
/// Defaults: Euclidean distance, uniform random seeding,
/// [`DEFAULT_DELTA_THRESHOLD`], [`DEFAULT_MAX_ITER`].
pub struct ClusterBuilder<'v> {
    algorithm: Algorithm,
    vectors: &'v [Vec<f64>],
    k: usize,
    config: KmeansConfig,
    distance: Option<Arc<dyn Distance>>,
    initializer: Option<Arc<dyn Initializer>>,
}

impl<'v> ClusterBuilder<'v> {
    /// Start a builder for `k` clusters over `vectors`.
    pub fn new(algorithm: Algorithm, vectors: &'v [Vec<f64>], k: usize) -> Self {
        Self {
            algorithm,
            vectors,
            k,
            config: KmeansConfig::default(),
            distance: None,
            initializer: None,
        }
    }

    /// Override the distance function. Must be a metric for [`Algorithm::Elkan`].
    pub fn distance(mut self, distance: Arc<dyn Distance>) -> Self {
        self.distance = Some(distance);
        self
    }

    /// Override the seeding strategy. Rejected for [`Algorithm::KmeansPlusPlus`].
    pub fn initializer(mut self, initializer: Arc<dyn Initializer>) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Set the movement threshold.
    pub fn delta_threshold(mut self, delta_threshold: f64) -> Self {
        self.config.delta_threshold = delta_threshold;
        self
    }

    /// Set the iteration ceiling.
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter;
        self
    }

    /// Set random seed.
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Validate the inputs and construct the engine.
    pub fn build(self) -> Result<Box<dyn Clusterer>> {
        let engine: Box<dyn Clusterer> = match self.algorithm {
            Algorithm::Elkan => {
                let mut engine = Elkan::new(self.vectors, self.k)?.with_config(self.config)?;
                if let Some(distance) = self.distance {
                    engine = engine.with_distance(distance);
                }
                if let Some(initializer) = self.initializer {
                    engine = engine.with_initializer(initializer);
                }
                Box::new(engine)
            }
            Algorithm::Lloyd => {
                let mut engine = Lloyd::new(self.vectors, self.k)?.with_config(self.config)?;
                if let Some(distance) = self.distance {
                    engine = engine.with_distance(distance);
                }
                if let Some(initializer) = self.initializer {
                    engine = engine.with_initializer(initializer);
                }
                Box::new(engine)
            }
            Algorithm::KmeansPlusPlus => {
                if self.initializer.is_some() {
                    return Err(Error::InvalidParameter {
                        name: "initializer",
                        message: "k-means++ seeding is intrinsic to this algorithm",
                    });
                }
                let mut engine = KmeansPP::new(self.vectors, self.k)?.with_config(self.config)?;
                if let Some(distance) = self.distance {
                    engine = engine.with_distance(distance);
                }
                Box::new(engine)
            }
        };
        Ok(engine)
    }
}
