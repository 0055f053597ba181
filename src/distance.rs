//! Distance functions between vectors.
//!
//! # The Metric Requirement
//!
//! Elkan's engine never evaluates most point-to-centroid distances. It
//! reasons about them instead, using the triangle inequality:
//!
//! ```text
//! d(x, c') >= d(c, c') - d(x, c)
//! ```
//!
//! That inference is only sound when the distance is a true metric:
//! non-negative, symmetric, zero on identical inputs, and obeying the
//! triangle inequality. Squared Euclidean distance, cosine distance and
//! most "similarity" scores are **not** metrics. Plugging one into
//! [`Elkan`](crate::cluster::Elkan) is unsupported and silently yields wrong
//! partitions. The Lloyd engine tolerates any non-negative distance, but the
//! two engines will then disagree.
//!
//! # Implementations
//!
//! | Type | Formula |
//! |------|---------|
//! | [`Euclidean`] (default) | `sqrt(Σ (a_i - b_i)²)` |
//! | [`Manhattan`] | `Σ |a_i - b_i|` |
//! | closures | anything `Fn(ArrayView1, ArrayView1) -> Result<f64>` |

use crate::error::{Error, Result};
use ndarray::ArrayView1;

/// A distance function over equal-length vectors.
///
/// Implementations must return [`Error::DimensionMismatch`] when the inputs
/// differ in length rather than truncating or padding.
pub trait Distance: Send + Sync {
    /// Distance between `a` and `b`.
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Result<f64>;
}

/// Euclidean (L2) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euclidean;

impl Distance for Euclidean {
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Result<f64> {
        check_len(&a, &b)?;
        Ok(squared_euclidean(&a, &b).sqrt())
    }
}

/// Manhattan (L1) distance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Manhattan;

impl Distance for Manhattan {
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Result<f64> {
        check_len(&a, &b)?;
        Ok(a.iter().zip(b.iter()).map(|(x, y)| (x - y).abs()).sum())
    }
}

impl<F> Distance for F
where
    F: Fn(ArrayView1<'_, f64>, ArrayView1<'_, f64>) -> Result<f64> + Send + Sync,
{
    fn distance(&self, a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> Result<f64> {
        self(a, b)
    }
}

/// Squared Euclidean distance. Callers check lengths.
#[inline]
pub fn squared_euclidean(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y).powi(2)).sum()
}

#[inline]
fn check_len(a: &ArrayView1<'_, f64>, b: &ArrayView1<'_, f64>) -> Result<()> {
    if a.len() != b.len() {
        return Err(Error::DimensionMismatch {
            expected: a.len(),
            found: b.len(),
        });
    }
    Ok(())
}
