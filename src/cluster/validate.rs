//! Pre-flight checks shared by all engines.

use crate::config::KmeansConfig;
use crate::error::{Error, Result};
use ndarray::Array2;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Reject inputs no engine can cluster.
///
/// Errors when the dataset is empty or zero-dimensional, when `k` is 0 or
/// exceeds the number of vectors, when `delta_threshold` is outside (0, 1),
/// when `max_iter` is 0, or when any vector's length differs from the first.
pub fn validate_args(
    vectors: &[Vec<f64>],
    k: usize,
    delta_threshold: f64,
    max_iter: usize,
) -> Result<()> {
    if vectors.is_empty() || vectors[0].is_empty() {
        return Err(Error::EmptyInput);
    }
    if k == 0 || k > vectors.len() {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: vectors.len(),
        });
    }
    KmeansConfig::new()
        .with_delta_threshold(delta_threshold)
        .with_max_iter(max_iter)
        .validate()?;
    check_dimensions(vectors)
}

/// Every vector must match the first one's length.
fn check_dimensions(vectors: &[Vec<f64>]) -> Result<()> {
    let d = vectors[0].len();

    #[cfg(feature = "parallel")]
    let bad = vectors[1..].par_iter().find_any(|v| v.len() != d);

    #[cfg(not(feature = "parallel"))]
    let bad = vectors[1..].iter().find(|v| v.len() != d);

    match bad {
        Some(v) => Err(Error::DimensionMismatch {
            expected: d,
            found: v.len(),
        }),
        None => Ok(()),
    }
}

/// Copy validated vectors into a row-major `n x d` matrix.
pub(crate) fn to_matrix(vectors: &[Vec<f64>]) -> Result<Array2<f64>> {
    let n = vectors.len();
    let d = vectors.first().map_or(0, Vec::len);
    let flat: Vec<f64> = vectors.iter().flatten().copied().collect();
    Array2::from_shape_vec((n, d), flat).map_err(|e| Error::Other(e.to_string()))
}
