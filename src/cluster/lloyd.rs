//! Lloyd's k-means.
//!
//! Partitions data into k clusters by minimizing the **sum of squared
//! errors** (SSE), the within-cluster sum of squares:
//!
//! ```text
//! SSE = Σₖ Σᵢ∈Cₖ ||xᵢ - μₖ||²
//! ```
//!
//! # The Algorithm
//!
//! 1. Seed k centroids (see [`crate::init`])
//! 2. **Assign**: each vector → nearest centroid (n·k distance evaluations)
//! 3. **Repair**: refill any cluster left empty with a vector taken from a
//!    cluster that has more than one member
//! 4. **Update**: each centroid → mean of its members
//! 5. Repeat until few enough vectors move
//!
//! **Why it converges**: with Euclidean distance, neither step can increase
//! SSE, and there are finitely many partitions.
//!
//! This engine is the reference the accelerated [`Elkan`](super::Elkan)
//! engine is checked against: from the same seeds they reach the same
//! partition.

use super::traits::Clusterer;
use super::validate::{to_matrix, validate_args};
use crate::config::KmeansConfig;
use crate::container::ClusterSet;
use crate::distance::{Distance, Euclidean};
use crate::error::Result;
use crate::init::{make_rng, Initializer, Random};
use ndarray::Array2;
use rand::prelude::*;
use std::sync::Arc;
use tracing::{debug, instrument, trace};

/// Brute-force k-means.
#[derive(Clone)]
pub struct Lloyd {
    data: Array2<f64>,
    k: usize,
    config: KmeansConfig,
    distance: Arc<dyn Distance>,
    /// `None` seeds uniformly at random with the config seed.
    initializer: Option<Arc<dyn Initializer>>,
}

impl std::fmt::Debug for Lloyd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lloyd")
            .field("n", &self.data.nrows())
            .field("k", &self.k)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl Lloyd {
    /// Validate `vectors` and `k` and take a copy of the data.
    pub fn new(vectors: &[Vec<f64>], k: usize) -> Result<Self> {
        let config = KmeansConfig::default();
        validate_args(vectors, k, config.delta_threshold, config.max_iter)?;
        Ok(Self {
            data: to_matrix(vectors)?,
            k,
            config,
            distance: Arc::new(Euclidean),
            initializer: None,
        })
    }

    /// Replace the convergence settings.
    pub fn with_config(mut self, config: KmeansConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Set the distance function.
    pub fn with_distance(mut self, distance: Arc<dyn Distance>) -> Self {
        self.distance = distance;
        self
    }

    /// Set the seeding strategy.
    pub fn with_initializer(mut self, initializer: Arc<dyn Initializer>) -> Self {
        self.initializer = Some(initializer);
        self
    }

    pub(crate) fn distance(&self) -> &Arc<dyn Distance> {
        &self.distance
    }

    pub(crate) fn config(&self) -> &KmeansConfig {
        &self.config
    }

    /// Seed with `initializer`, then iterate to convergence.
    #[instrument(skip_all, fields(n = self.data.nrows(), k = self.k))]
    pub(crate) fn cluster_with(&self, initializer: &dyn Initializer) -> Result<ClusterSet<'_>> {
        let mut clusters = initializer.init_centroids(self.data.view(), self.k)?;
        let iterations = self.run(&mut clusters)?;
        debug!(iterations, sse = clusters.sse(), "lloyd converged");
        Ok(clusters)
    }

    /// RNG for donor selection, on a different stream from seeding.
    fn repair_rng(&self) -> Box<dyn RngCore> {
        make_rng(self.config.seed.map(|seed| seed.wrapping_add(1)))
    }

    /// Iterate until converged. Returns the number of iterations.
    fn run(&self, clusters: &mut ClusterSet<'_>) -> Result<usize> {
        let n = self.data.nrows();
        let dist = self.distance.as_ref();
        let mut rng = self.repair_rng();
        // no vector starts in a cluster, so the first pass counts every one as moved
        let mut assignments = vec![usize::MAX; n];
        let mut iteration = 0;

        loop {
            clusters.reset();

            let mut moved = 0;
            for (i, point) in self.data.rows().into_iter().enumerate() {
                let (c, _) = clusters.nearest(point, dist)?;
                clusters.get_mut(c).add_member(i);
                if assignments[i] != c {
                    assignments[i] = c;
                    moved += 1;
                }
            }

            if repair_empty_clusters(clusters, &mut assignments, &mut rng) {
                moved = n;
            }

            if moved > 0 {
                clusters.recenter();
            }

            debug!(iteration, moved, "lloyd iteration");

            if self.config.is_converged(iteration, moved, n) {
                return Ok(iteration + 1);
            }
            iteration += 1;
        }
    }
}

/// Give every empty cluster one vector from a cluster with spare members.
///
/// The donor vector is drawn uniformly among vectors whose cluster has more
/// than one member, and is moved (not copied) so membership stays a
/// partition. Returns whether any cluster was refilled.
fn repair_empty_clusters<R: Rng + ?Sized>(
    clusters: &mut ClusterSet<'_>,
    assignments: &mut [usize],
    rng: &mut R,
) -> bool {
    let mut repaired = false;
    for c in 0..clusters.len() {
        if !clusters[c].is_empty() {
            continue;
        }
        let donors: Vec<usize> = (0..assignments.len())
            .filter(|&i| clusters[assignments[i]].len() > 1)
            .collect();
        // k <= n leaves a donor while any cluster is empty
        let Some(&v) = donors.choose(rng) else {
            break;
        };
        let from = assignments[v];
        clusters.get_mut(from).remove_member(v);
        clusters.get_mut(c).add_member(v);
        assignments[v] = c;
        trace!(cluster = c, vector = v, donor = from, "refilled empty cluster");
        repaired = true;
    }
    repaired
}

impl Clusterer for Lloyd {
    fn cluster(&self) -> Result<ClusterSet<'_>> {
        match &self.initializer {
            Some(init) => self.cluster_with(init.as_ref()),
            None => {
                let mut init = Random::new();
                if let Some(seed) = self.config.seed {
                    init = init.with_seed(seed);
                }
                self.cluster_with(&init)
            }
        }
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}
