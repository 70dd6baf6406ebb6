//! Border extraction from image tiles
//!
//! Each tile contributes exactly four border descriptors: its first row,
//! last row, first column, and last column, flattened across the channel
//! axis. Descriptors carry the owning tile index and the side they were cut
//! from, and are only comparable to descriptors of equal vector length.

use ndarray::{Array3, s};
use num_traits::AsPrimitive;

/// One of the four cardinal sides of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// First pixel row
    Up,
    /// Last pixel row
    Down,
    /// First pixel column
    Left,
    /// Last pixel column
    Right,
}

impl Side {
    /// All sides in descriptor extraction order
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Stable label used in connectivity dumps
    pub const fn label(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

/// Flattened edge pixels of one side of one tile
///
/// Row borders flatten as (width x channels), column borders as
/// (height x channels), both in row-major order.
#[derive(Debug, Clone)]
pub struct BorderDescriptor {
    /// Index of the owning tile in the input collection
    pub tile: usize,
    /// Which side of the tile this border was cut from
    pub side: Side,
    /// Flattened border pixels
    pub pixels: Vec<f64>,
}

impl BorderDescriptor {
    /// Length of the flattened border vector
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Whether the border vector is empty (zero-area tile)
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }
}

/// Extract the four border descriptors of every tile
///
/// Descriptors are emitted in tile order, four per tile in
/// up/down/left/right order. Zero-area tiles are skipped.
pub fn extract_borders<T>(tiles: &[Array3<T>]) -> Vec<BorderDescriptor>
where
    T: Copy + AsPrimitive<f64>,
{
    let mut descriptors = Vec::with_capacity(tiles.len() * 4);

    for (tile_index, tile) in tiles.iter().enumerate() {
        let (height, width, _) = tile.dim();

        // Zero-area tiles have no borders to compare; they contribute no
        // descriptors and end up in the unused set.
        if height == 0 || width == 0 {
            continue;
        }

        let views = [
            tile.slice(s![0, .., ..]),
            tile.slice(s![height.saturating_sub(1), .., ..]),
            tile.slice(s![.., 0, ..]),
            tile.slice(s![.., width.saturating_sub(1), ..]),
        ];

        for (side, view) in Side::ALL.into_iter().zip(views) {
            descriptors.push(BorderDescriptor {
                tile: tile_index,
                side,
                pixels: view.iter().map(|value| value.as_()).collect(),
            });
        }
    }

    descriptors
}
