//! Tile connectivity graph construction
//!
//! Folds matched borders into a per-tile record of which neighboring tile
//! (if any) lies on each cardinal side. A match whose partner sits on the
//! *same* side of its tile (for example, two bottom borders) is discarded:
//! tiles are assumed to have been cut without rotation, so true adjacency
//! only occurs between complementary sides. Cross-but-wrong-orientation
//! links are deliberately left in place.

use crate::spatial::{BorderDescriptor, Side};

/// Per-tile neighbor record with one explicit optional slot per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TileNeighbors {
    /// Tile above, if any
    pub up: Option<usize>,
    /// Tile below, if any
    pub down: Option<usize>,
    /// Tile to the left, if any
    pub left: Option<usize>,
    /// Tile to the right, if any
    pub right: Option<usize>,
}

impl TileNeighbors {
    /// Neighbor on the given side
    pub const fn get(&self, side: Side) -> Option<usize> {
        match side {
            Side::Up => self.up,
            Side::Down => self.down,
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Set the neighbor on the given side
    pub const fn set(&mut self, side: Side, neighbor: usize) {
        match side {
            Side::Up => self.up = Some(neighbor),
            Side::Down => self.down = Some(neighbor),
            Side::Left => self.left = Some(neighbor),
            Side::Right => self.right = Some(neighbor),
        }
    }

    /// Whether the tile has no neighbors at all
    pub const fn is_isolated(&self) -> bool {
        self.up.is_none() && self.down.is_none() && self.left.is_none() && self.right.is_none()
    }
}

/// Build the tile connectivity map from matched borders
///
/// `matches` is the output of [`crate::algorithm::matching::match_borders`]:
/// a vector parallel to `descriptors` mapping each border to its matched
/// border's global index, or `None`.
pub fn build_connectivity(
    tile_count: usize,
    descriptors: &[BorderDescriptor],
    matches: &[Option<usize>],
) -> Vec<TileNeighbors> {
    let mut connectivity = vec![TileNeighbors::default(); tile_count];

    for (descriptor, matched) in descriptors.iter().zip(matches.iter()) {
        let Some(matched_index) = matched else {
            continue;
        };
        let Some(partner) = descriptors.get(*matched_index) else {
            continue;
        };

        // Same-side links are false positives under the no-rotation
        // assumption.
        if partner.side == descriptor.side {
            continue;
        }

        if let Some(neighbors) = connectivity.get_mut(descriptor.tile) {
            neighbors.set(descriptor.side, partner.tile);
        }
    }

    connectivity
}
