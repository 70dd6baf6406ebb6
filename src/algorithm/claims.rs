//! Claimed-tile tracking for group resolution
//!
//! Group acceptance is first-found-wins: once a tile belongs to an accepted
//! group it can never be claimed again. The set is a fixed-size bitset over
//! 0-based tile indices.

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

/// Fixed-size bitset tracking tiles claimed by accepted groups
#[derive(Clone, Debug)]
pub struct TileClaims {
    bits: BitVec,
    tile_count: usize,
}

impl TileClaims {
    /// Create a claim set with no tiles claimed
    pub fn new(tile_count: usize) -> Self {
        Self {
            bits: bitvec![0; tile_count],
            tile_count,
        }
    }

    /// Test whether a tile has been claimed
    pub fn contains(&self, tile: usize) -> bool {
        self.bits.get(tile).as_deref() == Some(&true)
    }

    /// Whether any of the given tiles is already claimed
    pub fn any_claimed(&self, tiles: &[usize]) -> bool {
        tiles.iter().any(|&tile| self.contains(tile))
    }

    /// Claim a set of tiles
    ///
    /// Out-of-range indices are ignored; group candidates are validated
    /// against the tile collection before they reach this point.
    pub fn claim_all(&mut self, tiles: &[usize]) {
        for &tile in tiles {
            if tile < self.tile_count {
                self.bits.set(tile, true);
            }
        }
    }

    /// Number of claimed tiles
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Claimed tile indices in ascending order
    pub fn claimed(&self) -> Vec<usize> {
        self.bits.iter_ones().collect()
    }

    /// Unclaimed tile indices in ascending order
    pub fn unclaimed(&self) -> Vec<usize> {
        self.bits.iter_zeros().collect()
    }
}

impl fmt::Display for TileClaims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TileClaims({} of {})", self.count(), self.tile_count)
    }
}
