//! Lloyd's algorithm with k-means++ seeding built in.

use super::lloyd::Lloyd;
use super::traits::Clusterer;
use crate::config::KmeansConfig;
use crate::container::ClusterSet;
use crate::distance::Distance;
use crate::error::Result;
use crate::init::KmeansPlusPlus;
use std::sync::Arc;

/// k-means++ seeded Lloyd.
///
/// The seeding strategy is part of the algorithm, so unlike [`Lloyd`] there
/// is no way to swap the initializer. Seeding uses the engine's distance
/// function and seed.
#[derive(Debug, Clone)]
pub struct KmeansPP {
    inner: Lloyd,
}

impl KmeansPP {
    /// Validate `vectors` and `k` and take a copy of the data.
    pub fn new(vectors: &[Vec<f64>], k: usize) -> Result<Self> {
        Ok(Self {
            inner: Lloyd::new(vectors, k)?,
        })
    }

    /// Replace the convergence settings.
    pub fn with_config(mut self, config: KmeansConfig) -> Result<Self> {
        self.inner = self.inner.with_config(config)?;
        Ok(self)
    }

    /// Set the distance function, used for both seeding and assignment.
    pub fn with_distance(mut self, distance: Arc<dyn Distance>) -> Self {
        self.inner = self.inner.with_distance(distance);
        self
    }

    fn seeding(&self) -> KmeansPlusPlus {
        let init = KmeansPlusPlus::new(Arc::clone(self.inner.distance()));
        match self.inner.config().seed() {
            Some(seed) => init.with_seed(seed),
            None => init,
        }
    }
}

impl Clusterer for KmeansPP {
    fn cluster(&self) -> Result<ClusterSet<'_>> {
        self.inner.cluster_with(&self.seeding())
    }

    fn n_clusters(&self) -> usize {
        self.inner.n_clusters()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kmeans_pp_basic() {
        let data = vec![
            vec![0.0, 0.0],
            vec![0.1, 0.1],
            vec![10.0, 10.0],
            vec![10.1, 10.1],
        ];
        let engine = KmeansPP::new(&data, 2)
            .unwrap()
            .with_config(KmeansConfig::new().with_seed(5))
            .unwrap();
        let labels = engine.fit_predict().unwrap();
        assert_eq!(labels[0], labels[1]);
        assert_eq!(labels[2], labels[3]);
        assert_ne!(labels[0], labels[2]);
    }

    #[test]
    fn test_kmeans_pp_k_equals_n() {
        let data = vec![vec![0.0], vec![3.0], vec![7.0], vec![8.0]];
        for seed in 0..5 {
            let engine = KmeansPP::new(&data, 4)
                .unwrap()
                .with_config(KmeansConfig::new().with_seed(seed))
                .unwrap();
            let clusters = engine.cluster().unwrap();
            assert!(clusters.iter().all(|c| c.len() == 1));
            assert_eq!(clusters.sse(), 0.0);
        }
    }

    #[test]
    fn test_kmeans_pp_deterministic_with_seed() {
        let data: Vec<Vec<f64>> = (0..80)
            .map(|i| vec![(i as f64 * 0.11).sin(), (i as f64 * 0.53).cos()])
            .collect();
        let config = KmeansConfig::new().with_seed(77);
        let a = KmeansPP::new(&data, 5).unwrap().with_config(config).unwrap();
        let b = KmeansPP::new(&data, 5).unwrap().with_config(config).unwrap();
        assert_eq!(a.fit_predict().unwrap(), b.fit_predict().unwrap());
    }
}
