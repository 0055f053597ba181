use super::{check_args, make_rng, Initializer};
use crate::container::ClusterSet;
use crate::error::Result;
use ndarray::ArrayView2;
use rand::Rng;

/// Uniform random seeding.
///
/// Draws `k` independent row indices. Repeats are not rejected, so two
/// clusters can start from the same centroid; the Lloyd engine repairs the
/// resulting empty cluster, the Elkan engine leaves it empty.
#[derive(Debug, Clone, Default)]
pub struct Random {
    seed: Option<u64>,
}

impl Random {
    /// Seed from the thread RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl Initializer for Random {
    fn init_centroids<'a>(&self, data: ArrayView2<'a, f64>, k: usize) -> Result<ClusterSet<'a>> {
        check_args(&data, k)?;
        let mut rng = make_rng(self.seed);
        let n = data.nrows();
        let rows: Vec<usize> = (0..k).map(|_| rng.random_range(0..n)).collect();
        ClusterSet::from_rows(data, &rows)
    }
}
