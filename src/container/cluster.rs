use crate::distance::{squared_euclidean, Distance};
use crate::error::{Error, Result};
use ndarray::{Array1, ArrayView1, ArrayView2, Axis};

/// One cluster: a centroid plus the dataset rows assigned to it this iteration.
///
/// Members are row indices into the dataset the cluster was created over.
/// They are cleared at the start of each iteration and appended during
/// assignment; the centroid survives [`Cluster::reset`].
#[derive(Debug, Clone)]
pub struct Cluster<'a> {
    centroid: Array1<f64>,
    members: Vec<usize>,
    data: ArrayView2<'a, f64>,
}

impl<'a> Cluster<'a> {
    /// Create an empty cluster over `data` with the given centroid.
    pub fn new(data: ArrayView2<'a, f64>, centroid: Array1<f64>) -> Result<Self> {
        if centroid.len() != data.ncols() {
            return Err(Error::DimensionMismatch {
                expected: data.ncols(),
                found: centroid.len(),
            });
        }
        Ok(Self {
            centroid,
            members: Vec::new(),
            data,
        })
    }

    /// Current centroid.
    pub fn centroid(&self) -> ArrayView1<'_, f64> {
        self.centroid.view()
    }

    /// Row indices of the members.
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    /// Member vectors, in insertion order.
    pub fn member_vectors(&self) -> impl Iterator<Item = ArrayView1<'a, f64>> + '_ {
        let data = self.data;
        self.members
            .iter()
            .map(move |&i| data.index_axis_move(Axis(0), i))
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether no vector is assigned to this cluster.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Append row `idx`. No deduplication.
    pub fn add_member(&mut self, idx: usize) {
        debug_assert!(idx < self.data.nrows());
        self.members.push(idx);
    }

    /// Remove row `idx` if present. Returns whether it was a member.
    pub(crate) fn remove_member(&mut self, idx: usize) -> bool {
        match self.members.iter().position(|&m| m == idx) {
            Some(pos) => {
                self.members.swap_remove(pos);
                true
            }
            None => false,
        }
    }

    /// Clear members; the centroid is untouched.
    pub fn reset(&mut self) {
        self.members.clear();
    }

    /// Move the centroid to the mean of the members.
    ///
    /// An empty cluster keeps its previous centroid.
    pub fn recenter(&mut self) {
        if let Some(mean) = self.mean() {
            self.centroid = mean;
        }
    }

    /// Like [`Cluster::recenter`], returning how far the centroid moved under `dist`.
    ///
    /// Empty clusters do not move and report 0.
    pub fn recenter_with_move_distance(&mut self, dist: &dyn Distance) -> Result<f64> {
        let Some(mean) = self.mean() else {
            return Ok(0.0);
        };
        let moved = dist.distance(self.centroid.view(), mean.view())?;
        self.centroid = mean;
        Ok(moved)
    }

    /// Sum of squared Euclidean distances from members to the centroid.
    pub fn sse(&self) -> f64 {
        let centroid = self.centroid.view();
        self.member_vectors()
            .map(|v| squared_euclidean(&v, &centroid))
            .sum()
    }

    fn mean(&self) -> Option<Array1<f64>> {
        if self.members.is_empty() {
            return None;
        }
        let mut sum = Array1::<f64>::zeros(self.data.ncols());
        for v in self.member_vectors() {
            sum += &v;
        }
        sum /= self.members.len() as f64;
        Some(sum)
    }
}
