//! Clustering traits.

use crate::container::ClusterSet;
use crate::error::Result;

/// A configured k-means engine that owns its dataset.
///
/// Each call to [`Clusterer::cluster`] allocates its own run state, so an
/// engine can be run repeatedly and from several threads at once.
pub trait Clusterer: Send + Sync {
    /// Run to convergence and return the final clusters.
    fn cluster(&self) -> Result<ClusterSet<'_>>;

    /// Get the number of clusters.
    fn n_clusters(&self) -> usize;

    /// Run and return one cluster label per input vector.
    fn fit_predict(&self) -> Result<Vec<usize>> {
        self.cluster().map(|clusters| clusters.labels())
    }
}
