//! Comparing two clusterings of the same vectors.
//!
//! Cluster indices are arbitrary: `[0, 0, 1]` and `[1, 1, 0]` describe the
//! same partition. Both functions here are invariant to relabeling.
//!
//! ```rust
//! use centroid::metrics::{ari, same_partition};
//!
//! let a = [0, 0, 1, 1];
//! let b = [1, 1, 0, 0];
//! assert!(same_partition(&a, &b));
//! assert!((ari(&a, &b) - 1.0).abs() < 1e-12);
//! ```

use std::collections::HashMap;

/// Whether two labelings group the vectors identically.
pub fn same_partition(a: &[usize], b: &[usize]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut forward = HashMap::new();
    let mut backward = HashMap::new();
    a.iter().zip(b).all(|(&x, &y)| {
        *forward.entry(x).or_insert(y) == y && *backward.entry(y).or_insert(x) == x
    })
}

/// Adjusted Rand Index between two labelings.
///
/// ARI is the corrected-for-chance version of the Rand Index: 1 means the
/// same partition, values near 0 mean agreement no better than random.
/// Returns 0 for empty or mismatched inputs.
///
/// # References
///
/// Hubert & Arabie (1985). "Comparing partitions"
pub fn ari(pred: &[usize], truth: &[usize]) -> f64 {
    if pred.len() != truth.len() || pred.is_empty() {
        return 0.0;
    }

    let mut joint: HashMap<(usize, usize), usize> = HashMap::new();
    let mut row_sums: HashMap<usize, usize> = HashMap::new();
    let mut col_sums: HashMap<usize, usize> = HashMap::new();
    for (&p, &t) in pred.iter().zip(truth) {
        *joint.entry((p, t)).or_insert(0) += 1;
        *row_sums.entry(p).or_insert(0) += 1;
        *col_sums.entry(t).or_insert(0) += 1;
    }

    let sum_comb_ij: f64 = joint.values().map(|&c| comb2(c)).sum();
    let sum_comb_a: f64 = row_sums.values().map(|&a| comb2(a)).sum();
    let sum_comb_b: f64 = col_sums.values().map(|&b| comb2(b)).sum();
    let comb_n = comb2(pred.len());

    let expected = if comb_n > 0.0 {
        sum_comb_a * sum_comb_b / comb_n
    } else {
        0.0
    };
    let max_index = (sum_comb_a + sum_comb_b) / 2.0;

    let denom = max_index - expected;
    if denom.abs() < 1e-10 {
        return 1.0;
    }
    (sum_comb_ij - expected) / denom
}

#[inline]
fn comb2(n: usize) -> f64 {
    (n * n.saturating_sub(1)) as f64 / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_partition() {
        assert!(same_partition(&[0, 0, 1, 2], &[2, 2, 0, 1]));
        assert!(!same_partition(&[0, 0, 1], &[0, 1, 1]));
        // a merge is not the same partition
        assert!(!same_partition(&[0, 1, 2], &[0, 0, 1]));
        assert!(!same_partition(&[0, 0, 1], &[0, 1, 2]));
        assert!(!same_partition(&[0], &[0, 0]));
        assert!(same_partition(&[], &[]));
    }

    #[test]
    fn test_ari_perfect() {
        assert!((ari(&[0, 0, 1, 1], &[1, 1, 0, 0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_ari_disagreement() {
        let score = ari(&[0, 0, 1, 1], &[0, 1, 0, 1]);
        assert!(score < 0.0, "ari = {score}");
    }

    #[test]
    fn test_ari_degenerate() {
        assert_eq!(ari(&[], &[]), 0.0);
        assert_eq!(ari(&[0, 1], &[0]), 0.0);
    }
}
