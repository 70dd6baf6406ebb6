//! 2x2 tile compositing
//!
//! A validated group is assembled by concatenating the upper pair and the
//! lower pair horizontally, then stacking the two bands vertically. The
//! left/right pairs must agree on height and the resulting bands on width;
//! any disagreement is a dimension conflict for that group.

use ndarray::{Array3, Axis, concatenate};

use crate::io::error::{ReconstructionError, Result};

/// Composite four tiles in (`up_left`, `up_right`, `down_left`, `down_right`)
/// order into one image
///
/// # Errors
///
/// Returns an error if:
/// - Any index is out of bounds for the tile collection
/// - The tiles' dimensions are incompatible for 2x2 concatenation
pub fn compose_quad<T>(tiles: &[Array3<T>], indices: [usize; 4]) -> Result<Array3<T>>
where
    T: Copy,
{
    let quad: Vec<&Array3<T>> = indices
        .iter()
        .map(|&index| {
            tiles.get(index).ok_or(ReconstructionError::InvalidTileIndex {
                index,
                tile_count: tiles.len(),
            })
        })
        .collect::<Result<_>>()?;

    let [up_left, up_right, down_left, down_right] = quad.as_slice() else {
        return Err(ReconstructionError::InvalidSourceData {
            reason: "composite group must contain exactly four tiles".to_string(),
        });
    };

    let up = concatenate(Axis(1), &[up_left.view(), up_right.view()])
        .map_err(|source| dimension_mismatch(indices, "upper pair", source))?;
    let down = concatenate(Axis(1), &[down_left.view(), down_right.view()])
        .map_err(|source| dimension_mismatch(indices, "lower pair", source))?;

    concatenate(Axis(0), &[up.view(), down.view()])
        .map_err(|source| dimension_mismatch(indices, "vertical stack", source))
}

fn dimension_mismatch(
    tiles: [usize; 4],
    stage: &'static str,
    source: ndarray::ShapeError,
) -> ReconstructionError {
    ReconstructionError::DimensionMismatch {
        tiles,
        stage,
        reason: source.to_string(),
    }
}
