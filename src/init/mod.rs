//! Centroid seeding strategies.
//!
//! Every engine starts from a [`ClusterSet`] produced by an [`Initializer`]:
//! exactly `k` clusters, no members, and centroids copied from input rows
//! (never synthesized).
//!
//! | Strategy | Cost | Notes |
//! |----------|------|-------|
//! | [`Random`] | O(k) | Indices may repeat, so two clusters can start identical |
//! | [`KmeansPlusPlus`] | O(n·k) distance evaluations | Spreads seeds by D(x)² sampling |
//! | [`Preset`] | O(k) | Caller-chosen rows; reproducible runs and tests |

mod kmeans_pp;
mod preset;
mod random;

pub use kmeans_pp::KmeansPlusPlus;
pub use preset::Preset;
pub use random::Random;

use crate::container::ClusterSet;
use crate::error::{Error, Result};
use ndarray::ArrayView2;
use rand::prelude::*;

/// Produces the starting centroids for a clustering run.
pub trait Initializer: Send + Sync {
    /// Choose `k` starting centroids from the rows of `data`.
    ///
    /// Fails when `k == 0`, when `data` is empty, or when `k` exceeds the
    /// number of rows.
    fn init_centroids<'a>(&self, data: ArrayView2<'a, f64>, k: usize) -> Result<ClusterSet<'a>>;
}

/// Shared argument checks for initializers.
pub(crate) fn check_args(data: &ArrayView2<'_, f64>, k: usize) -> Result<()> {
    if data.nrows() == 0 || data.ncols() == 0 {
        return Err(Error::EmptyInput);
    }
    if k == 0 || k > data.nrows() {
        return Err(Error::InvalidClusterCount {
            requested: k,
            n_items: data.nrows(),
        });
    }
    Ok(())
}

/// Seeded RNG when `seed` is set, thread RNG otherwise.
pub(crate) fn make_rng(seed: Option<u64>) -> Box<dyn RngCore> {
    match seed {
        Some(s) => Box::new(StdRng::seed_from_u64(s)),
        None => Box::new(rand::rng()),
    }
}
