//! Sub-sampling large inputs before clustering.
//!
//! Seeding and iteration cost scale with `n`, so clustering a sample and
//! then assigning the remaining vectors to the nearest centroid is a common
//! shortcut for big datasets.

use rand::seq::index;
use rand::Rng;

/// Simple random sampling without replacement.
///
/// Keeps `floor(len · percent / 100)` items, each with equal probability,
/// in the order they were drawn. `percent >= 100` returns a copy of
/// everything; `percent <= 0` (or NaN) returns nothing.
///
/// ```rust
/// use centroid::sample::srs;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut rng = StdRng::seed_from_u64(1);
/// let picked = srs(&[1, 2, 3, 4, 5, 6], 50.0, &mut rng);
/// assert_eq!(picked.len(), 3);
/// ```
pub fn srs<T: Clone, R: Rng + ?Sized>(input: &[T], percent: f64, rng: &mut R) -> Vec<T> {
    if percent >= 100.0 {
        return input.to_vec();
    }
    if !(percent > 0.0) {
        return Vec::new();
    }

    let amount = (input.len() as f64 * percent / 100.0) as usize;
    index::sample(rng, input.len(), amount)
        .into_iter()
        .map(|i| input[i].clone())
        .collect()
}
