//! Reconstruction constants and runtime configuration defaults

/// Default maximum Euclidean distance between matching borders
///
/// Tuned for 8-bit RGB-like pixel data; resolution and encoding dependent,
/// so expose it as a CLI flag rather than treating it as universal.
pub const DEFAULT_MATCH_DISTANCE_THRESHOLD: f64 = 1000.0;

// Output settings
/// File name prefix for exported composite images
pub const COMPOSITE_PREFIX: &str = "mosaic";
/// File name of the annotation table written next to the composites
pub const ANNOTATION_FILE_NAME: &str = "annotations.csv";

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 50;
/// Minimum tile count before a loading progress bar is shown
pub const PROGRESS_MIN_TILES: usize = 16;
