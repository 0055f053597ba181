use super::Cluster;
use crate::distance::Distance;
use crate::error::{Error, Result};
use ndarray::{Array1, Array2, ArrayView1, ArrayView2};
use std::ops::Index;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// An ordered, fixed-size collection of `k` clusters over one dataset.
#[derive(Debug, Clone)]
pub struct ClusterSet<'a> {
    clusters: Vec<Cluster<'a>>,
    data: ArrayView2<'a, f64>,
}

impl<'a> ClusterSet<'a> {
    /// Build a set with one empty cluster per centroid.
    pub fn from_centroids(
        data: ArrayView2<'a, f64>,
        centroids: impl IntoIterator<Item = Array1<f64>>,
    ) -> Result<Self> {
        let clusters = centroids
            .into_iter()
            .map(|c| Cluster::new(data, c))
            .collect::<Result<Vec<_>>>()?;
        if clusters.is_empty() {
            return Err(Error::InvalidClusterCount {
                requested: 0,
                n_items: data.nrows(),
            });
        }
        Ok(Self { clusters, data })
    }

    /// Build a set whose centroids are copies of the given dataset rows.
    pub fn from_rows(data: ArrayView2<'a, f64>, rows: &[usize]) -> Result<Self> {
        if let Some(&bad) = rows.iter().find(|&&r| r >= data.nrows()) {
            return Err(Error::Other(format!(
                "row {bad} out of range for {} vectors",
                data.nrows()
            )));
        }
        Self::from_centroids(data, rows.iter().map(|&r| data.row(r).to_owned()))
    }

    /// Number of clusters (`k`).
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    /// Always false; a set holds at least one cluster.
    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    /// Iterate over clusters in index order.
    pub fn iter(&self) -> std::slice::Iter<'_, Cluster<'a>> {
        self.clusters.iter()
    }

    pub(crate) fn get_mut(&mut self, idx: usize) -> &mut Cluster<'a> {
        &mut self.clusters[idx]
    }

    /// The dataset the clusters index into.
    pub fn data(&self) -> ArrayView2<'a, f64> {
        self.data
    }

    /// Centroids as a `k x d` matrix.
    pub fn centroids(&self) -> Array2<f64> {
        let mut out = Array2::zeros((self.clusters.len(), self.data.ncols()));
        for (mut row, cluster) in out.rows_mut().into_iter().zip(&self.clusters) {
            row.assign(&cluster.centroid());
        }
        out
    }

    /// Cluster label of every dataset row.
    ///
    /// Rows that are not a member of any cluster get `usize::MAX`, which only
    /// happens before the first assignment pass.
    pub fn labels(&self) -> Vec<usize> {
        let mut labels = vec![usize::MAX; self.data.nrows()];
        for (c, cluster) in self.clusters.iter().enumerate() {
            for &m in cluster.members() {
                labels[m] = c;
            }
        }
        labels
    }

    /// Index and distance of the centroid closest to `point`.
    ///
    /// Scans all `k` centroids; ties go to the lowest index.
    pub fn nearest(&self, point: ArrayView1<'_, f64>, dist: &dyn Distance) -> Result<(usize, f64)> {
        let mut best = 0;
        let mut best_dist = dist.distance(point, self.clusters[0].centroid())?;
        for (c, cluster) in self.clusters.iter().enumerate().skip(1) {
            let d = dist.distance(point, cluster.centroid())?;
            if d < best_dist {
                best = c;
                best_dist = d;
            }
        }
        Ok((best, best_dist))
    }

    /// Clear every cluster's members.
    pub fn reset(&mut self) {
        for cluster in &mut self.clusters {
            cluster.reset();
        }
    }

    /// Recenter every cluster.
    pub fn recenter(&mut self) {
        #[cfg(feature = "parallel")]
        self.clusters.par_iter_mut().for_each(|c| c.recenter());

        #[cfg(not(feature = "parallel"))]
        for cluster in &mut self.clusters {
            cluster.recenter();
        }
    }

    /// Recenter every cluster, returning each centroid's move distance.
    ///
    /// The first distance error aborts and is returned.
    pub fn recenter_with_move_distances(&mut self, dist: &dyn Distance) -> Result<Vec<f64>> {
        #[cfg(feature = "parallel")]
        let moved = self
            .clusters
            .par_iter_mut()
            .map(|c| c.recenter_with_move_distance(dist))
            .collect();

        #[cfg(not(feature = "parallel"))]
        let moved = self
            .clusters
            .iter_mut()
            .map(|c| c.recenter_with_move_distance(dist))
            .collect();

        moved
    }

    /// Sum of squared errors over all clusters.
    pub fn sse(&self) -> f64 {
        self.clusters.iter().map(Cluster::sse).sum()
    }
}

impl<'a> Index<usize> for ClusterSet<'a> {
    type Output = Cluster<'a>;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.clusters[idx]
    }
}

impl<'s, 'a> IntoIterator for &'s ClusterSet<'a> {
    type Item = &'s Cluster<'a>;
    type IntoIter = std::slice::Iter<'s, Cluster<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.iter()
    }
}
