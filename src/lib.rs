//! Mosaic reconstruction for artificially tiled image sets
//!
//! Infers which tiles of a cut-up image were originally adjacent by mutual
//! nearest-neighbor matching of their border pixels, resolves validated 2x2
//! groups through the resulting connectivity graph, and reassembles and
//! deduplicates the composite images, annotating every tile with its group
//! and corner position.

#![deny(unsafe_code)]

/// Reconstruction pipeline: matching, connectivity, grouping, deduplication
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Mathematical utilities for border comparison
pub mod math;
/// Tile data model: border extraction and 2x2 compositing
pub mod spatial;

pub use algorithm::{Reconstruction, ReconstructionConfig, reconstruct};
pub use io::error::{ReconstructionError, Result};
