//! Spatial data model for tiles and composites
//!
//! This module contains the tile-facing functionality:
//! - Border descriptor extraction
//! - 2x2 composite assembly

/// Border descriptor types and extraction
pub mod borders;
/// 2x2 tile compositing with dimension validation
pub mod compose;

pub use borders::{BorderDescriptor, Side};
