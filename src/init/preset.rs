use super::{check_args, Initializer};
use crate::container::ClusterSet;
use crate::error::{Error, Result};
use ndarray::ArrayView2;

/// Seeds from caller-chosen rows.
///
/// Useful for reproducible runs and for comparing engines from identical
/// starting centroids.
#[derive(Debug, Clone)]
pub struct Preset {
    rows: Vec<usize>,
}

impl Preset {
    /// Use `rows[i]` as the starting centroid of cluster `i`.
    pub fn new(rows: impl Into<Vec<usize>>) -> Self {
        Self { rows: rows.into() }
    }
}

impl Initializer for Preset {
    fn init_centroids<'a>(&self, data: ArrayView2<'a, f64>, k: usize) -> Result<ClusterSet<'a>> {
        check_args(&data, k)?;
        if self.rows.len() != k {
            return Err(Error::InvalidParameter {
                name: "rows",
                message: "preset must name exactly k rows",
            });
        }
        ClusterSet::from_rows(data, &self.rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_preset() {
        let data = array![[1.0], [2.0], [3.0]];
        let set = Preset::new([2, 0]).init_centroids(data.view(), 2).unwrap();
        assert_eq!(set.centroids(), array![[3.0], [1.0]]);
    }

    #[test]
    fn test_preset_errors() {
        let data = array![[1.0], [2.0], [3.0]];
        assert!(Preset::new([0]).init_centroids(data.view(), 2).is_err());
        assert!(Preset::new([0, 5]).init_centroids(data.view(), 2).is_err());
    }
}
