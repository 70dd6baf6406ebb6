//! Annotation table export
//!
//! Writes the per-tile annotations as a small CSV: tile index, source file
//! name, composite identifier, and corner position (empty for unused
//! tiles). The table is index-parallel to the tile collection, one row per
//! input tile.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use crate::algorithm::reconstructor::TileAnnotation;
use crate::io::error::{ReconstructionError, Result};

/// Render the annotation table as CSV text
///
/// `sources` supplies the file name column and may be shorter than
/// `annotations` (missing entries render empty), so in-memory tile sets can
/// still be rendered.
pub fn render_annotation_csv(annotations: &[TileAnnotation], sources: &[PathBuf]) -> String {
    let mut csv = String::from("tile,file,mosaic_idx,mosaic_position\n");

    for (index, annotation) in annotations.iter().enumerate() {
        let file = sources
            .get(index)
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        let position = annotation.position.map_or("", |p| p.label());

        // Writing to a String cannot fail.
        let _ = writeln!(
            csv,
            "{index},{file},{},{position}",
            annotation.mosaic_id
        );
    }

    csv
}

/// Write the annotation table to disk
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the file
/// cannot be written
pub fn write_annotation_csv(
    path: &Path,
    annotations: &[TileAnnotation],
    sources: &[PathBuf],
) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| ReconstructionError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    std::fs::write(path, render_annotation_csv(annotations, sources)).map_err(|source| {
        ReconstructionError::FileSystem {
            path: path.to_path_buf(),
            operation: "write annotations",
            source,
        }
    })
}
