//! Mathematical utilities for the reconstruction pipeline

/// Euclidean distance functions for border vector comparison
pub mod distance;
