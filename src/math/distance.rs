//! Euclidean distance over flattened border vectors
//!
//! Border matching compares vectors of identical length, so the distance
//! functions assume equal-length inputs and fold over the shorter slice if
//! the caller violates that.

/// Squared Euclidean distance between two equal-length vectors
///
/// Kept in squared form for comparisons; take the root only when the actual
/// magnitude is needed.
pub fn squared_euclidean(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .fold(0.0, |acc, (&x, &y)| (x - y).mul_add(x - y, acc))
}

/// Euclidean distance between two equal-length vectors
pub fn euclidean(a: &[f64], b: &[f64]) -> f64 {
    squared_euclidean(a, b).sqrt()
}
