//! Tile loading and composite export
//!
//! Tiles are loaded from a directory in sorted filename order so that tile
//! indices are reproducible across runs, and decoded to RGB regardless of
//! the source color type. Composites are written back as PNG.

use std::path::{Path, PathBuf};

use image::RgbImage;
use ndarray::Array3;

use crate::io::configuration::COMPOSITE_PREFIX;
use crate::io::error::{ReconstructionError, Result};

/// Collect the PNG tile paths of a directory in sorted filename order
///
/// # Errors
///
/// Returns an error if the directory cannot be read
pub fn collect_tile_paths(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = std::fs::read_dir(dir).map_err(|source| ReconstructionError::FileSystem {
        path: dir.to_path_buf(),
        operation: "read directory",
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry
            .map_err(|source| ReconstructionError::FileSystem {
                path: dir.to_path_buf(),
                operation: "read directory entry",
                source,
            })?
            .path();
        if path.extension().and_then(|s| s.to_str()) == Some("png") {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}

/// Load one tile as an RGB pixel array with (height, width, channel) axes
///
/// # Errors
///
/// Returns an error if the image cannot be opened or decoded
pub fn load_tile(path: &Path) -> Result<Array3<u8>> {
    let img = image::open(path)
        .map_err(|source| ReconstructionError::ImageLoad {
            path: path.to_path_buf(),
            source,
        })?
        .into_rgb8();

    let (width, height) = img.dimensions();
    Array3::from_shape_vec((height as usize, width as usize, 3), img.into_raw()).map_err(
        |source| ReconstructionError::InvalidSourceData {
            reason: format!("decoded pixel buffer has unexpected shape: {source}"),
        },
    )
}

/// Convert a composite array back into an RGB image buffer
///
/// # Errors
///
/// Returns an error if the array does not have exactly three channels or
/// its dimensions overflow the image format
pub fn composite_to_image(composite: &Array3<u8>) -> Result<RgbImage> {
    let (height, width, channels) = composite.dim();
    if channels != 3 {
        return Err(ReconstructionError::InvalidSourceData {
            reason: format!("composite has {channels} channels, expected 3"),
        });
    }

    let pixels: Vec<u8> = composite.iter().copied().collect();
    RgbImage::from_raw(width as u32, height as u32, pixels).ok_or_else(|| {
        ReconstructionError::InvalidSourceData {
            reason: format!("composite of {width}x{height} exceeds image buffer limits"),
        }
    })
}

/// Export composites as sequentially numbered PNG files
///
/// Creates the output directory if needed and returns the written paths.
///
/// # Errors
///
/// Returns an error if:
/// - The output directory cannot be created
/// - A composite cannot be converted or saved
pub fn export_composites(composites: &[Array3<u8>], out_dir: &Path) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(out_dir).map_err(|source| ReconstructionError::FileSystem {
        path: out_dir.to_path_buf(),
        operation: "create directory",
        source,
    })?;

    let mut written = Vec::with_capacity(composites.len());
    for (index, composite) in composites.iter().enumerate() {
        let path = out_dir.join(format!("{COMPOSITE_PREFIX}_{index:04}.png"));
        let img = composite_to_image(composite)?;
        img.save(&path)
            .map_err(|source| ReconstructionError::ImageExport {
                path: path.clone(),
                source,
            })?;
        written.push(path);
    }

    Ok(written)
}
