//! Composite deduplication
//!
//! The same physical mosaic can be discovered through several anchor tiles,
//! so the composited list may carry exact duplicates. Composites are
//! compared elementwise within equal-size buckets; composites of different
//! sizes are never duplicates of each other. First occurrence wins and
//! input order is preserved, which makes the pass idempotent.

use ndarray::Array3;
use std::collections::HashMap;

/// Remove exact duplicates from a composite list
pub fn dedup_composites<T>(composites: Vec<Array3<T>>) -> Vec<Array3<T>>
where
    T: Copy + PartialEq,
{
    // Buckets of kept-composite indices keyed by shape, so candidates are
    // only ever compared against same-size survivors.
    let mut kept_by_shape: HashMap<(usize, usize, usize), Vec<usize>> = HashMap::new();
    let mut kept: Vec<Array3<T>> = Vec::with_capacity(composites.len());

    for composite in composites {
        let shape = composite.dim();
        let bucket = kept_by_shape.entry(shape).or_default();

        let duplicate = bucket.iter().any(|&kept_index| {
            kept.get(kept_index)
                .is_some_and(|existing| existing == &composite)
        });

        if !duplicate {
            bucket.push(kept.len());
            kept.push(composite);
        }
    }

    kept
}
