//! Reconstruction orchestration and result assembly
//!
//! Runs the full pipeline over an in-memory tile collection: border
//! extraction, nearest-neighbor matching, connectivity graph construction,
//! 2x2 group resolution, compositing, and deduplication. Tiles are borrowed
//! read-only for the whole pass; every derived structure is owned by the
//! returned [`Reconstruction`].

use ndarray::Array3;
use num_traits::AsPrimitive;

use crate::algorithm::connectivity::{TileNeighbors, build_connectivity};
use crate::algorithm::dedup::dedup_composites;
use crate::algorithm::grouping::{CompositeGroup, resolve_groups};
use crate::algorithm::matching::match_borders;
use crate::io::configuration::DEFAULT_MATCH_DISTANCE_THRESHOLD;
use crate::io::error::ReconstructionError;
use crate::spatial::borders::extract_borders;

/// Tunable parameters for a reconstruction pass
#[derive(Clone, Copy, Debug)]
pub struct ReconstructionConfig {
    /// Maximum Euclidean distance (exclusive) between two borders for them
    /// to count as adjacent
    ///
    /// Scale dependent: the default suits 8-bit RGB-like data and must be
    /// retuned for other encodings or bit depths.
    pub match_distance_threshold: f64,
}

impl Default for ReconstructionConfig {
    fn default() -> Self {
        Self {
            match_distance_threshold: DEFAULT_MATCH_DISTANCE_THRESHOLD,
        }
    }
}

/// Corner of a 2x2 composite a tile was placed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerPosition {
    /// Top-left corner
    UpLeft,
    /// Top-right corner
    UpRight,
    /// Bottom-left corner
    DownLeft,
    /// Bottom-right corner
    DownRight,
}

impl CornerPosition {
    /// Corners in composite assembly order
    pub const ALL: [Self; 4] = [Self::UpLeft, Self::UpRight, Self::DownLeft, Self::DownRight];

    /// Stable label used in annotation output
    pub const fn label(self) -> &'static str {
        match self {
            Self::UpLeft => "up_left",
            Self::UpRight => "up_right",
            Self::DownLeft => "down_left",
            Self::DownRight => "down_right",
        }
    }
}

/// Derived group metadata for one input tile
///
/// Annotations are returned as a list parallel to the input tile order
/// rather than by mutating a caller-owned table; the caller merges them as
/// needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileAnnotation {
    /// Composite group identifier
    ///
    /// Tiles of the i-th accepted group share identifier `i`; every other
    /// tile receives a fresh identifier continuing after the maximum
    /// assigned one.
    pub mosaic_id: usize,
    /// Corner the tile occupies in its composite, or `None` for unused tiles
    pub position: Option<CornerPosition>,
}

/// Everything produced by one reconstruction pass
#[derive(Debug)]
pub struct Reconstruction<T> {
    /// Deduplicated composite images
    pub composites: Vec<Array3<T>>,
    /// Accepted groups in acceptance order
    pub groups: Vec<CompositeGroup>,
    /// Per-tile connectivity map (side to neighbor tile)
    pub connectivity: Vec<TileNeighbors>,
    /// Per-tile group annotations, index-parallel to the input tiles
    pub annotations: Vec<TileAnnotation>,
    /// Tile indices claimed by accepted groups, ascending
    pub used: Vec<usize>,
    /// Tile indices never claimed by any group, ascending
    pub unused: Vec<usize>,
    /// Groups skipped because their tiles could not be concatenated
    pub dimension_conflicts: Vec<(CompositeGroup, ReconstructionError)>,
    /// Composite count before deduplication
    pub composite_count_raw: usize,
}

/// Reconstruct composite images from a collection of tiles
///
/// Empty input yields an empty result. Tiles that never match, or whose
/// matches never close a 2x2 quadrilateral, are reported in `unused` rather
/// than treated as errors. Groups with incompatible tile dimensions are
/// skipped and reported in `dimension_conflicts`.
pub fn reconstruct<T>(tiles: &[Array3<T>], config: &ReconstructionConfig) -> Reconstruction<T>
where
    T: Copy + PartialEq + AsPrimitive<f64>,
{
    let descriptors = extract_borders(tiles);
    let matches = match_borders(&descriptors, config.match_distance_threshold);
    let connectivity = build_connectivity(tiles.len(), &descriptors, &matches);

    let resolution = resolve_groups(tiles, &connectivity);

    let composite_count_raw = resolution.composites.len();
    let composites = dedup_composites(resolution.composites);
    let annotations = assign_annotations(tiles.len(), &resolution.groups);

    Reconstruction {
        composites,
        used: resolution.claims.claimed(),
        unused: resolution.claims.unclaimed(),
        groups: resolution.groups,
        connectivity,
        annotations,
        dimension_conflicts: resolution.dimension_conflicts,
        composite_count_raw,
    }
}

/// Assign every tile exactly one composite identifier
///
/// Grouped tiles share their group's identifier and corner position. The
/// remaining tiles get fresh identifiers continuing after the maximum
/// assigned one; when no group was accepted at all, fresh identifiers start
/// at 1.
fn assign_annotations(tile_count: usize, groups: &[CompositeGroup]) -> Vec<TileAnnotation> {
    let mut slots: Vec<Option<TileAnnotation>> = vec![None; tile_count];

    for (mosaic_id, group) in groups.iter().enumerate() {
        for (tile, position) in group.indices().into_iter().zip(CornerPosition::ALL) {
            if let Some(slot) = slots.get_mut(tile) {
                *slot = Some(TileAnnotation {
                    mosaic_id,
                    position: Some(position),
                });
            }
        }
    }

    let mut next_id = if groups.is_empty() { 1 } else { groups.len() };

    slots
        .into_iter()
        .map(|slot| {
            slot.unwrap_or_else(|| {
                let annotation = TileAnnotation {
                    mosaic_id: next_id,
                    position: None,
                };
                next_id += 1;
                annotation
            })
        })
        .collect()
}
