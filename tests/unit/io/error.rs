//! Tests for error types including source chaining and message formatting

#[cfg(test)]
mod tests {
    use remosaic::io::error::{ReconstructionError, invalid_parameter};
    use std::error::Error;

    // Tests error source chaining works correctly
    // Verified by breaking source chain
    #[test]
    fn test_error_source_chain() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = ReconstructionError::FileSystem {
            path: "/tmp/tiles".into(),
            operation: "read directory",
            source: io_error,
        };

        assert!(error.source().is_some());
    }

    // Tests DimensionMismatch formatting
    // Verified by omitting the stage from the message
    #[test]
    fn test_dimension_mismatch_error() {
        let error = ReconstructionError::DimensionMismatch {
            tiles: [0, 1, 2, 3],
            stage: "vertical stack",
            reason: "incompatible shapes".to_string(),
        };

        let message = error.to_string();
        assert!(message.contains("[0, 1, 2, 3]"));
        assert!(message.contains("vertical stack"));
        assert!(message.contains("incompatible shapes"));
        assert!(error.source().is_none());
    }

    // Tests InvalidParameter error contains all fields
    #[test]
    fn test_invalid_parameter_error() {
        let error = invalid_parameter(
            "threshold",
            &"-1".to_string(),
            &"must be positive".to_string(),
        );

        let message = error.to_string();
        assert!(message.contains("threshold"));
        assert!(message.contains("-1"));
        assert!(message.contains("must be positive"));
    }

    #[test]
    fn test_invalid_tile_index_error() {
        let error = ReconstructionError::InvalidTileIndex {
            index: 9,
            tile_count: 4,
        };

        let message = error.to_string();
        assert!(message.contains('9'));
        assert!(message.contains('4'));
    }

    // Tests the io::Error conversion used by `?` in filesystem paths
    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error: ReconstructionError = io_error.into();

        assert!(matches!(error, ReconstructionError::FileSystem { .. }));
        assert!(error.source().is_some());
    }
}
