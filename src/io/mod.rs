//! Input/output operations and error handling

/// Annotation table rendering and export
pub mod annotations;
/// Command-line interface and batch orchestration
pub mod cli;
/// Constants and runtime configuration defaults
pub mod configuration;
/// Error types for reconstruction and I/O operations
pub mod error;
/// Tile loading and composite export
pub mod image;
/// Progress reporting for batch tile loading
pub mod progress;
