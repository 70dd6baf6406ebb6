//! Error types for reconstruction and I/O operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all reconstruction operations
#[derive(Debug)]
pub enum ReconstructionError {
    /// Failed to load a tile image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Input data doesn't meet reconstruction requirements
    InvalidSourceData {
        /// Description of what's wrong with the input
        reason: String,
    },

    /// Tile index exceeds the input collection
    InvalidTileIndex {
        /// The invalid tile index
        index: usize,
        /// Number of tiles in the collection
        tile_count: usize,
    },

    /// A validated 2x2 group could not be concatenated
    ///
    /// Left/right pairs must share a height and the two bands a width;
    /// anything else means the input tiles are inconsistent.
    DimensionMismatch {
        /// Tile indices of the group in corner order
        tiles: [usize; 4],
        /// Concatenation stage that failed
        stage: &'static str,
        /// Underlying shape error description
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a composite image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for ReconstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid source data: {reason}")
            }
            Self::InvalidTileIndex { index, tile_count } => {
                write!(
                    f,
                    "Tile index {index} is out of bounds for {tile_count} tiles"
                )
            }
            Self::DimensionMismatch {
                tiles,
                stage,
                reason,
            } => {
                write!(
                    f,
                    "Cannot composite tiles {tiles:?}: {stage} failed ({reason})"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for ReconstructionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for reconstruction results
pub type Result<T> = std::result::Result<T, ReconstructionError>;

impl From<image::ImageError> for ReconstructionError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageLoad {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for ReconstructionError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> ReconstructionError {
    ReconstructionError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
