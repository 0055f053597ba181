//! Elkan's accelerated K-means using the triangle inequality.
//!
//! # The Core Insight
//!
//! Standard k-means computes O(n * k) distances per iteration.
//! Elkan (2003) showed that using bounds, most of these can be skipped
//! without changing the result.
//!
//! The triangle inequality gives us, for a point x and centroids c, c':
//! ```text
//! d(c, c') >= 2 d(x, c)   ⇒   d(x, c') >= d(x, c)
//! ```
//!
//! so x cannot prefer c' over c when it sits within half the centroid gap.
//!
//! # Maintained Bounds
//!
//! - `upper[x]`: upper bound on d(x, c_{a(x)}) (exact or inflated)
//! - `lower[x][c]`: lower bound on d(x, c) (exact or deflated)
//! - `stale[x]`: `upper[x]` may be inflated and must be refreshed before
//!   it is trusted for a full comparison
//!
//! After centroids move by `δ[c]`, the bounds stay valid by
//! `upper[x] += δ[a(x)]` and `lower[x][c] = max(lower[x][c] - δ[c], 0)`.
//!
//! # One Iteration
//!
//! 1. Clear members
//! 2. Pairwise centroid distances (parallel, join barrier)
//! 3. `s[c] = ½ min_{c' != c} d(c, c')`
//! 4. Assignment with pruning (sequential)
//! 5. Recenter, recording each centroid's move `δ[c]`
//! 6. Loosen bounds by `δ`
//!
//! # Algorithm Complexity
//!
//! - **Time**: O(n * k * d) per iteration in the worst case, typically
//!   close to O(n * d + k² * d) once centroids settle
//! - **Space**: O(n * k) for lower bounds (significant for large k)
//!
//! # Metric Requirement
//!
//! Pruning is only sound for a true metric. See [`crate::distance`].
//!
//! # References
//!
//! - Elkan (2003). "Using the Triangle Inequality to Accelerate k-Means"

use super::traits::Clusterer;
use super::validate::{to_matrix, validate_args};
use crate::config::KmeansConfig;
use crate::container::ClusterSet;
use crate::distance::{Distance, Euclidean};
use crate::error::Result;
use crate::init::{Initializer, Random};
use ndarray::{Array2, ArrayView2};
use std::sync::Arc;
use tracing::{debug, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Elkan's accelerated K-means with triangle inequality pruning.
///
/// Produces the same partition as [`Lloyd`](super::Lloyd) from the same
/// starting centroids, while skipping most point-to-centroid distances.
/// Empty clusters are left in place: their centroid does not move. Ties go
/// to the lowest cluster index, as in [`ClusterSet::nearest`].
#[derive(Clone)]
pub struct Elkan {
    data: Array2<f64>,
    k: usize,
    config: KmeansConfig,
    distance: Arc<dyn Distance>,
    /// `None` seeds uniformly at random with the config seed.
    initializer: Option<Arc<dyn Initializer>>,
}

impl std::fmt::Debug for Elkan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Elkan")
            .field("n", &self.data.nrows())
            .field("k", &self.k)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Statistics from Elkan's algorithm execution.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElkanStats {
    /// Total iterations performed.
    pub iterations: usize,
    /// Total distance computations (point-to-centroid).
    pub distance_computations: u64,
    /// Distance computations skipped via bounds.
    pub distances_skipped: u64,
    /// Fraction of distances skipped (higher is better).
    pub skip_fraction: f64,
    /// Total centroid-to-centroid computations.
    pub centroid_distances: u64,
}

impl Elkan {
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

    /// Set the distance function. It must be a metric.
    pub fn with_distance(mut self, distance: Arc<dyn Distance>) -> Self {
        self.distance = distance;
        self
    }

    /// Set the seeding strategy.
    pub fn with_initializer(mut self, initializer: Arc<dyn Initializer>) -> Self {
        self.initializer = Some(initializer);
        self
    }

    /// Run Elkan's algorithm and return the clusters plus pruning statistics.
    #[instrument(skip_all, fields(n = self.data.nrows(), k = self.k))]
    pub fn cluster_with_stats(&self) -> Result<(ClusterSet<'_>, ElkanStats)> {
        let mut clusters = match &self.initializer {
            Some(init) => init.init_centroids(self.data.view(), self.k)?,
            None => {
                let mut init = Random::new();
                if let Some(seed) = self.config.seed {
                    init = init.with_seed(seed);
                }
                init.init_centroids(self.data.view(), self.k)?
            }
        };

        let mut run = ElkanRun::new(self.data.view(), self.distance.as_ref(), self.k);
        loop {
            let moved = run.step(&mut clusters)?;
            debug!(
                iteration = run.iteration - 1,
                moved,
                skipped = run.stats.distances_skipped,
                "elkan iteration"
            );
            if self.config.is_converged(run.iteration - 1, moved, self.data.nrows()) {
                break;
            }
        }

        let stats = run.finish();
        debug!(
            iterations = stats.iterations,
            skip_fraction = stats.skip_fraction,
            sse = clusters.sse(),
            "elkan converged"
        );
        Ok((clusters, stats))
    }
}

impl Clusterer for Elkan {
    fn cluster(&self) -> Result<ClusterSet<'_>> {
        self.cluster_with_stats().map(|(clusters, _)| clusters)
    }

    fn n_clusters(&self) -> usize {
        self.k
    }
}

/// Per-vector bounds for one clustering run.
#[derive(Debug, Clone)]
struct Bounds {
    /// Cluster each vector is assigned to.
    assignment: Vec<usize>,
    /// `upper[x]`: upper bound on d(x, c_{assignment[x]}).
    upper: Vec<f64>,
    /// `lower[x * k + c]`: lower bound on d(x, c).
    lower: Vec<f64>,
    /// Whether `upper[x]` must be recomputed before use.
    stale: Vec<bool>,
    k: usize,
}

impl Bounds {
    /// Infinite upper bounds force an exact distance for every vector on
    /// the first pass.
    fn new(n: usize, k: usize) -> Self {
        Self {
            assignment: vec![0; n],
            upper: vec![f64::INFINITY; n],
            lower: vec![0.0; n * k],
            stale: vec![true; n],
            k,
        }
    }

    #[inline]
    fn lower(&self, x: usize, c: usize) -> f64 {
        self.lower[x * self.k + c]
    }

    #[inline]
    fn set_lower(&mut self, x: usize, c: usize, val: f64) {
        self.lower[x * self.k + c] = val;
    }

    /// Loosen every bound by how far each centroid moved.
    fn update(&mut self, moved: &[f64]) {
        for (x, lower) in self.lower.chunks_mut(self.k).enumerate() {
            for (l, &delta) in lower.iter_mut().zip(moved) {
                *l = (*l - delta).max(0.0);
            }
            self.upper[x] += moved[self.assignment[x]];
            self.stale[x] = true;
        }
    }
}

/// State of one `cluster()` call: created fresh, consumed by [`ElkanRun::finish`].
struct ElkanRun<'e, 'a> {
    data: ArrayView2<'a, f64>,
    dist: &'e dyn Distance,
    bounds: Bounds,
    stats: ElkanStats,
    /// Iterations completed so far.
    iteration: usize,
}

impl<'e, 'a> ElkanRun<'e, 'a> {
    fn new(data: ArrayView2<'a, f64>, dist: &'e dyn Distance, k: usize) -> Self {
        Self {
            data,
            dist,
            bounds: Bounds::new(data.nrows(), k),
            stats: ElkanStats::default(),
            iteration: 0,
        }
    }

    /// One full iteration. Returns how many vectors moved.
    fn step(&mut self, clusters: &mut ClusterSet<'a>) -> Result<usize> {
        clusters.reset();

        let centroid_dist = self.centroid_distances(clusters)?;
        let s = half_min_gap(&centroid_dist);
        let moved = self.assign(clusters, &centroid_dist, &s)?;

        let shifts = clusters.recenter_with_move_distances(self.dist)?;
        self.bounds.update(&shifts);

        self.iteration += 1;
        self.stats.iterations = self.iteration;
        Ok(moved)
    }

    /// Symmetric `k x k` matrix of centroid distances.
    ///
    /// Each of the k(k-1)/2 pairs is independent; the first distance error
    /// aborts the iteration.
    fn centroid_distances(&mut self, clusters: &ClusterSet<'a>) -> Result<Array2<f64>> {
        let k = clusters.len();
        let pairs: Vec<(usize, usize)> = (0..k)
            .flat_map(|i| ((i + 1)..k).map(move |j| (i, j)))
            .collect();
        let dist = self.dist;

        #[cfg(feature = "parallel")]
        let dists: Vec<f64> = pairs
            .par_iter()
            .map(|&(i, j)| dist.distance(clusters[i].centroid(), clusters[j].centroid()))
            .collect::<Result<_>>()?;

        #[cfg(not(feature = "parallel"))]
        let dists: Vec<f64> = pairs
            .iter()
            .map(|&(i, j)| dist.distance(clusters[i].centroid(), clusters[j].centroid()))
            .collect::<Result<_>>()?;

        let mut matrix = Array2::<f64>::zeros((k, k));
        for (&(i, j), d) in pairs.iter().zip(dists) {
            matrix[[i, j]] = d;
            matrix[[j, i]] = d;
        }
        self.stats.centroid_distances += pairs.len() as u64;
        Ok(matrix)
    }

    /// Assign every vector, pruning with the bounds. Returns how many moved.
    fn assign(
        &mut self,
        clusters: &mut ClusterSet<'a>,
        centroid_dist: &Array2<f64>,
        s: &[f64],
    ) -> Result<usize> {
        let k = clusters.len();
        let first_pass = self.iteration == 0;
        let data = self.data;
        let mut moved = 0;

        for (x, point) in data.rows().into_iter().enumerate() {
            let entering = self.bounds.assignment[x];
            let mut a = entering;

            if self.bounds.upper[x] < s[a] || (a == 0 && self.bounds.upper[x] <= s[a]) {
                // no other centroid can be closer, nor tie from a lower index
                self.stats.distances_skipped += (k - 1) as u64;
            } else {
                for c in 0..k {
                    if c == a {
                        continue;
                    }
                    if cannot_take(self.bounds.upper[x], self.bounds.lower(x, c), c, a)
                        || cannot_take(self.bounds.upper[x], 0.5 * centroid_dist[[a, c]], c, a)
                    {
                        self.stats.distances_skipped += 1;
                        continue;
                    }

                    if self.bounds.stale[x] {
                        let d_a = self.dist.distance(point, clusters[a].centroid())?;
                        self.bounds.upper[x] = d_a;
                        self.bounds.set_lower(x, a, d_a);
                        self.bounds.stale[x] = false;
                        self.stats.distance_computations += 1;

                        // the exact bound may rule c out after all
                        if cannot_take(d_a, self.bounds.lower(x, c), c, a)
                            || cannot_take(d_a, 0.5 * centroid_dist[[a, c]], c, a)
                        {
                            self.stats.distances_skipped += 1;
                            continue;
                        }
                    }

                    // upper[x] is exact here
                    let d_c = self.dist.distance(point, clusters[c].centroid())?;
                    self.bounds.set_lower(x, c, d_c);
                    self.stats.distance_computations += 1;

                    let upper = self.bounds.upper[x];
                    if d_c < upper || (d_c == upper && c < a) {
                        a = c;
                        self.bounds.upper[x] = d_c;
                    }
                }
            }

            self.bounds.assignment[x] = a;
            if a != entering || first_pass {
                moved += 1;
            }
            clusters.get_mut(a).add_member(x);
        }

        Ok(moved)
    }

    fn finish(mut self) -> ElkanStats {
        let total = self.stats.distance_computations + self.stats.distances_skipped;
        self.stats.skip_fraction = if total > 0 {
            self.stats.distances_skipped as f64 / total as f64
        } else {
            0.0
        };
        self.stats
    }
}

/// Whether `bound <= d(x, c)` proves candidate `c` cannot replace `a`.
///
/// `upper >= d(x, a)`. Ties go to the lower index, so equality only rules
/// out a candidate above `a`.
#[inline]
fn cannot_take(upper: f64, bound: f64, c: usize, a: usize) -> bool {
    upper < bound || (c > a && upper <= bound)
}

/// `s[c] = ½ min_{c' != c} d(c, c')`; infinite when there is no other centroid.
fn half_min_gap(centroid_dist: &Array2<f64>) -> Vec<f64> {
    let k = centroid_dist.nrows();
    (0..k)
        .map(|i| {
            let min = (0..k)
                .filter(|&j| j != i)
                .map(|j| centroid_dist[[i, j]])
                .fold(f64::INFINITY, f64::min);
            0.5 * min
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::init::{KmeansPlusPlus, Preset};
    use ndarray::{array, ArrayView1};
    use proptest::prelude::*;

    fn seeded(data: &[Vec<f64>], k: usize, seed: u64) -> Elkan {
        Elkan::new(data, k)
            .unwrap()
            .with_initializer(Arc::new(KmeansPlusPlus::default().with_seed(seed)))
    }

    #[test]
    fn test_elkan_basic() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ];

        let labels = seeded(&data, 2, 42).fit_predict().unwrap();

        // Points 0,1 should be in same cluster, points 2,3 in another
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_elkan_with_stats() {
        // Create data with clear clusters
        let mut data = Vec::new();
        for i in 0..100 {
            data.push(vec![0.0 + (i % 7) as f64 * 0.01, 0.0]);
        }
        for i in 0..100 {
            data.push(vec![10.0 + (i % 7) as f64 * 0.01, 10.0]);
        }
        for i in 0..100 {
            data.push(vec![20.0 + (i % 7) as f64 * 0.01, 20.0]);
        }

        let elkan = Elkan::new(&data, 3)
            .unwrap()
            .with_initializer(Arc::new(Preset::new([0, 100, 200])))
            .with_config(KmeansConfig::new().with_delta_threshold(1e-6))
            .unwrap();
        let (clusters, stats) = elkan.cluster_with_stats().unwrap();

        assert!(stats.iterations >= 2);
        assert!(
            stats.skip_fraction > 0.3,
            "Expected significant skipping, got {:.1}%",
            stats.skip_fraction * 100.0
        );
        assert_eq!(stats.centroid_distances, 3 * stats.iterations as u64);

        // Verify correct clustering
        let labels = clusters.labels();
        assert_eq!(labels.len(), 300);
        for block in labels.chunks(100) {
            assert!(block.iter().all(|&l| l == block[0]));
        }
        assert_ne!(labels[0], labels[100]);
        assert_ne!(labels[100], labels[200]);
        assert_ne!(labels[0], labels[200]);
    }

    #[test]
    fn test_elkan_high_k() {
        let n = 500;
        let k = 50;
        let d = 10;

        let data: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..d).map(|j| ((i * j) as f64).sin()).collect())
            .collect();

        let elkan = seeded(&data, k, 42)
            .with_config(
                KmeansConfig::new()
                    .with_max_iter(20)
                    .with_delta_threshold(1e-6),
            )
            .unwrap();
        let (clusters, stats) = elkan.cluster_with_stats().unwrap();

        assert!(stats.iterations <= 20);
        assert!(
            stats.skip_fraction > 0.3,
            "Expected high skip fraction for k={}, got {:.1}%",
            k,
            stats.skip_fraction * 100.0
        );

        // All points assigned
        let labels = clusters.labels();
        assert_eq!(labels.len(), n);
        for &label in &labels {
            assert!(label < k);
        }
    }

    #[test]
    fn test_elkan_deterministic() {
        let data: Vec<Vec<f64>> = (0..60)
            .map(|i| vec![(i as f64 * 0.37).sin() * 5.0, (i as f64 * 0.91).cos() * 5.0])
            .collect();
        let config = KmeansConfig::new().with_seed(42);

        let a = Elkan::new(&data, 4).unwrap().with_config(config).unwrap();
        let b = Elkan::new(&data, 4).unwrap().with_config(config).unwrap();

        assert_eq!(a.fit_predict().unwrap(), b.fit_predict().unwrap());
    }

    #[test]
    fn test_elkan_iteration_ceiling() {
        let data: Vec<Vec<f64>> = (0..30).map(|i| vec![i as f64]).collect();
        let elkan = Elkan::new(&data, 3)
            .unwrap()
            .with_config(KmeansConfig::new().with_max_iter(1))
            .unwrap()
            .with_initializer(Arc::new(Preset::new([0, 1, 2])));
        let (clusters, stats) = elkan.cluster_with_stats().unwrap();
        assert_eq!(stats.iterations, 1);
        // one pass from seeds 0, 1, 2: everything from 2 upward joins cluster 2
        assert_eq!(clusters[2].len(), 28);
    }

    #[test]
    fn test_elkan_tie_goes_to_lower_index() {
        // 3.0 ends up exactly 2 from centroids 1.0 and 5.0
        let data = vec![vec![0.0], vec![1.0], vec![2.0], vec![3.0], vec![7.0]];
        let elkan = Elkan::new(&data, 2)
            .unwrap()
            .with_initializer(Arc::new(Preset::new([0, 1])));
        let clusters = elkan.cluster().unwrap();
        assert_eq!(clusters.labels(), vec![0, 0, 0, 0, 1]);
        assert_eq!(clusters.sse(), 5.0);
    }

    #[test]
    fn test_cannot_take() {
        // strictly beyond the bound: out regardless of index
        assert!(cannot_take(1.0, 1.5, 0, 1));
        assert!(cannot_take(1.0, 1.5, 2, 1));
        // equal: only a higher index is ruled out
        assert!(cannot_take(1.0, 1.0, 2, 1));
        assert!(!cannot_take(1.0, 1.0, 0, 1));
        assert!(!cannot_take(1.0, 0.5, 2, 1));
    }

    #[test]
    fn test_elkan_empty_input() {
        let data: Vec<Vec<f64>> = vec![];
        assert_eq!(Elkan::new(&data, 2).unwrap_err(), Error::EmptyInput);
    }

    #[test]
    fn test_elkan_k_larger_than_n() {
        let data = vec![vec![0.0, 0.0], vec![1.0, 1.0]];
        assert!(Elkan::new(&data, 5).is_err());
    }

    #[test]
    fn test_elkan_k_equals_n() {
        let data = vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![5.0, 5.0],
        ];
        for seed in 0..5 {
            let elkan = seeded(&data, 4, seed);
            let (clusters, stats) = elkan.cluster_with_stats().unwrap();
            assert!(clusters.iter().all(|c| c.len() == 1), "seed {seed}");
            assert_eq!(clusters.sse(), 0.0);
            // iteration 0 establishes the baseline, iteration 1 sees no moves
            assert_eq!(stats.iterations, 2);
        }
    }

    #[test]
    fn test_elkan_single_cluster() {
        let data = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0, 0.0]];
        let elkan = seeded(&data, 1, 0);
        let clusters = elkan.cluster().unwrap();
        assert_eq!(clusters.len(), 1);
        assert_eq!(clusters[0].len(), 3);
        assert_eq!(clusters[0].centroid(), array![3.0, 2.0].view());
    }

    #[test]
    fn test_elkan_duplicate_seeds_leave_empty_cluster() {
        // the shared seed is already the mean, so neither centroid ever moves
        let data = vec![vec![1.0], vec![0.0], vec![2.0]];
        let elkan = Elkan::new(&data, 2)
            .unwrap()
            .with_initializer(Arc::new(Preset::new([0, 0])));
        let clusters = elkan.cluster().unwrap();
        // ties keep every vector in cluster 0
        assert_eq!(clusters[0].len(), 3);
        assert!(clusters[1].is_empty());
        assert_eq!(clusters[1].centroid(), array![1.0].view());
    }

    #[test]
    fn test_elkan_revives_cluster_seeded_on_duplicate() {
        let data = vec![vec![0.0], vec![0.2], vec![9.0]];
        let elkan = Elkan::new(&data, 2)
            .unwrap()
            .with_initializer(Arc::new(Preset::new([0, 0])));
        let clusters = elkan.cluster().unwrap();
        // cluster 0 drifts toward 9.0 and leaves the small values to cluster 1
        assert_eq!(clusters.labels(), vec![1, 1, 0]);
    }

    #[test]
    fn test_elkan_metric_error_aborts() {
        let data = vec![vec![0.0], vec![1.0], vec![2.0]];
        let failing = |_: ArrayView1<'_, f64>, _: ArrayView1<'_, f64>| -> Result<f64> {
            Err(Error::Other("metric failed".into()))
        };
        let elkan = Elkan::new(&data, 2)
            .unwrap()
            .with_distance(Arc::new(failing))
            .with_initializer(Arc::new(Preset::new([0, 2])));
        assert!(elkan.cluster().is_err());
    }

    #[test]
    fn test_half_min_gap() {
        let m = array![[0.0, 2.0, 6.0], [2.0, 0.0, 5.0], [6.0, 5.0, 0.0]];
        assert_eq!(half_min_gap(&m), vec![1.0, 1.0, 2.5]);
        assert_eq!(half_min_gap(&array![[0.0]]), vec![f64::INFINITY]);
    }

    #[test]
    fn test_bounds_update() {
        let mut b = Bounds::new(2, 2);
        b.upper = vec![1.0, 2.0];
        b.lower = vec![1.0, 0.5, 0.3, 2.0];
        b.assignment = vec![0, 1];
        b.stale = vec![false, false];

        b.update(&[0.4, 1.0]);

        assert_eq!(b.lower, vec![0.6, 0.0, 0.0, 1.0]);
        assert_eq!(b.upper, vec![1.4, 3.0]);
        assert_eq!(b.stale, vec![true, true]);
    }

    #[test]
    fn test_run_is_fresh_per_call() {
        let data: Vec<Vec<f64>> = (0..30).map(|i| vec![(i % 10) as f64, (i / 10) as f64]).collect();
        let elkan = Elkan::new(&data, 3)
            .unwrap()
            .with_initializer(Arc::new(Preset::new([0, 10, 20])));
        let (first, s1) = elkan.cluster_with_stats().unwrap();
        let (second, s2) = elkan.cluster_with_stats().unwrap();
        assert_eq!(first.labels(), second.labels());
        assert_eq!(s1, s2);
    }

    /// Check that bounds bracket the true distances for the current centroids.
    fn assert_bounds_hold(run: &ElkanRun<'_, '_>, clusters: &ClusterSet<'_>) {
        const EPS: f64 = 1e-9;
        let k = clusters.len();
        for (x, point) in run.data.rows().into_iter().enumerate() {
            for c in 0..k {
                let truth = run.dist.distance(point, clusters[c].centroid()).unwrap();
                assert!(
                    run.bounds.lower(x, c) <= truth + EPS,
                    "lower[{x}][{c}] = {} > {truth}",
                    run.bounds.lower(x, c)
                );
            }
            let a = run.bounds.assignment[x];
            let truth = run.dist.distance(point, clusters[a].centroid()).unwrap();
            assert!(
                run.bounds.upper[x] >= truth - EPS,
                "upper[{x}] = {} < {truth}",
                run.bounds.upper[x]
            );
        }
    }

    proptest! {
        #[test]
        fn bounds_bracket_true_distances(
            points in proptest::collection::vec(
                proptest::collection::vec(-50.0f64..50.0, 3),
                8..60,
            ),
            k in 2usize..6,
        ) {
            let data = to_matrix(&points).unwrap();
            let rows: Vec<usize> = (0..k).collect();
            let mut clusters = ClusterSet::from_rows(data.view(), &rows).unwrap();
            let mut run = ElkanRun::new(data.view(), &Euclidean, k);

            for _ in 0..15 {
                assert_bounds_hold(&run, &clusters);
                let moved = run.step(&mut clusters).unwrap();
                if moved == 0 {
                    break;
                }
            }
        }

        #[test]
        fn membership_is_a_partition(
            points in proptest::collection::vec(
                proptest::collection::vec(-10.0f64..10.0, 2),
                4..40,
            ),
            k in 1usize..4,
            seed in 0u64..1000,
        ) {
            let clusters_owner = seeded(&points, k, seed);
            let clusters = clusters_owner.cluster().unwrap();
            prop_assert_eq!(clusters.len(), k);

            let mut seen: Vec<usize> = clusters
                .iter()
                .flat_map(|c| c.members().iter().copied())
                .collect();
            seen.sort_unstable();
            prop_assert_eq!(seen, (0..points.len()).collect::<Vec<_>>());
            prop_assert!(clusters.sse() >= 0.0);
        }
    }
}
