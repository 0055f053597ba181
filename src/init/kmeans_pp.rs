use super::{check_args, make_rng, Initializer};
use crate::container::ClusterSet;
use crate::distance::{Distance, Euclidean};
use crate::error::Result;
use ndarray::ArrayView2;
use rand::Rng;
use std::sync::Arc;

/// k-means++ seeding (Arthur & Vassilvitskii, 2007).
///
/// 1. Choose the first centroid uniformly at random.
/// 2. Choose each next centroid with probability proportional to D(x)²,
///    the squared distance from x to its nearest already-chosen centroid.
///
/// Sampling is a roulette wheel: draw `target = U[0,1) · Σ D(x)²` and take
/// the first row whose running sum exceeds `target`. Rows already chosen
/// have weight zero and cannot be picked twice unless every remaining row
/// coincides with a chosen centroid.
#[derive(Clone)]
pub struct KmeansPlusPlus {
    distance: Arc<dyn Distance>,
    seed: Option<u64>,
}

impl std::fmt::Debug for KmeansPlusPlus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KmeansPlusPlus")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl Default for KmeansPlusPlus {
    fn default() -> Self {
        Self::new(Arc::new(Euclidean))
    }
}

impl KmeansPlusPlus {
    /// Seed using `distance` to measure D(x).
    pub fn new(distance: Arc<dyn Distance>) -> Self {
        Self {
            distance,
            seed: None,
        }
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Initializer for KmeansPlusPlus {
    fn init_centroids<'a>(&self, data: ArrayView2<'a, f64>, k: usize) -> Result<ClusterSet<'a>> {
        check_args(&data, k)?;
        let mut rng = make_rng(self.seed);
        let n = data.nrows();

        let mut rows = Vec::with_capacity(k);
        rows.push(rng.random_range(0..n));

        // min_d2[j] = D(x_j)², kept current as centroids are added
        let mut min_d2 = vec![f64::INFINITY; n];

        while rows.len() < k {
            let newest = data.row(rows[rows.len() - 1]);
            for (j, point) in data.rows().into_iter().enumerate() {
                let d = self.distance.distance(point, newest)?;
                min_d2[j] = min_d2[j].min(d * d);
            }

            let total: f64 = min_d2.iter().sum();
            if total <= 0.0 || !total.is_finite() {
                rows.push(rng.random_range(0..n));
                continue;
            }

            let target = rng.random::<f64>() * total;
            rows.push(roulette(&min_d2, target));
        }

        ClusterSet::from_rows(data, &rows)
    }
}

/// First index whose cumulative weight exceeds `target`.
///
/// Falls back to the last positive weight when rounding keeps the running
/// sum at or below `target`.
fn roulette(weights: &[f64], target: f64) -> usize {
    let mut cumsum = 0.0;
    let mut last_positive = 0;
    for (j, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumsum += w;
        last_positive = j;
        if cumsum > target {
            return j;
        }
    }
    last_positive
}
