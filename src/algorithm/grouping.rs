//! 2x2 composite group resolution
//!
//! Walks tiles in ascending index order and, for each tile, tries the four
//! 2x2 orientations it could anchor. An orientation is a candidate only when
//! two independent paths through the connectivity graph reach the same
//! diagonal tile (a closed quadrilateral). The first candidate found for a
//! tile is screened against the distinctness and claimed-tile rules and, if
//! accepted, composited and claimed. Acceptance is greedy and
//! order-dependent; it is not a maximum matching.

use ndarray::Array3;

use crate::algorithm::claims::TileClaims;
use crate::algorithm::connectivity::TileNeighbors;
use crate::io::error::ReconstructionError;
use crate::spatial::compose::compose_quad;

/// A validated 2x2 block of tile indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompositeGroup {
    /// Top-left tile
    pub up_left: usize,
    /// Top-right tile
    pub up_right: usize,
    /// Bottom-left tile
    pub down_left: usize,
    /// Bottom-right tile
    pub down_right: usize,
}

impl CompositeGroup {
    /// Tile indices in (`up_left`, `up_right`, `down_left`, `down_right`) order
    pub const fn indices(&self) -> [usize; 4] {
        [self.up_left, self.up_right, self.down_left, self.down_right]
    }

    fn from_indices(indices: [usize; 4]) -> Self {
        let [up_left, up_right, down_left, down_right] = indices;
        Self {
            up_left,
            up_right,
            down_left,
            down_right,
        }
    }

    fn all_distinct(&self) -> bool {
        let indices = self.indices();
        indices
            .iter()
            .enumerate()
            .all(|(i, a)| indices.iter().skip(i + 1).all(|b| a != b))
    }
}

/// Outcome of group resolution over the whole tile collection
#[derive(Debug)]
pub struct GroupResolution<T> {
    /// Accepted groups in acceptance order
    pub groups: Vec<CompositeGroup>,
    /// Composite image for each accepted group, index-parallel to `groups`
    pub composites: Vec<Array3<T>>,
    /// Tiles claimed by accepted groups
    pub claims: TileClaims,
    /// Groups that closed a quadrilateral but could not be composited
    ///
    /// Their tiles stay unclaimed; each entry carries the failing group and
    /// the concatenation error. A failing group appears at most once even
    /// when several anchors re-discover it.
    pub dimension_conflicts: Vec<(CompositeGroup, ReconstructionError)>,
}

/// Resolve all 2x2 groups and composite them
///
/// Orientation priority per anchor tile is down+right, down+left, up+right,
/// up+left. A candidate that fails the distinctness or claimed-tile screen
/// abandons the anchor tile entirely (no further orientations are tried);
/// a failed quadrilateral check falls through to the next orientation.
pub fn resolve_groups<T>(
    tiles: &[Array3<T>],
    connectivity: &[TileNeighbors],
) -> GroupResolution<T>
where
    T: Copy,
{
    let mut resolution = GroupResolution {
        groups: Vec::new(),
        composites: Vec::new(),
        claims: TileClaims::new(tiles.len()),
        dimension_conflicts: Vec::new(),
    };

    for (anchor, neighbors) in connectivity.iter().enumerate() {
        if let Some(candidate) = first_candidate(connectivity, anchor, neighbors) {
            accept_candidate(tiles, candidate, &mut resolution);
        }
    }

    resolution
}

/// First orientation candidate for an anchor tile, in priority order
fn first_candidate(
    connectivity: &[TileNeighbors],
    anchor: usize,
    neighbors: &TileNeighbors,
) -> Option<CompositeGroup> {
    let conn = |tile: usize| connectivity.get(tile).copied().unwrap_or_default();

    if let Some(down) = neighbors.down {
        if let Some(right) = neighbors.right {
            // Diagonal must be reachable both via the right and the down
            // neighbor.
            if let (Some(a), Some(b)) = (conn(right).down, conn(down).right) {
                if a == b {
                    return Some(CompositeGroup::from_indices([anchor, right, down, a]));
                }
            }
        }
        if let Some(left) = neighbors.left {
            if let (Some(a), Some(b)) = (conn(left).down, conn(down).left) {
                if a == b {
                    return Some(CompositeGroup::from_indices([left, anchor, a, down]));
                }
            }
        }
    }

    if let Some(up) = neighbors.up {
        if let Some(right) = neighbors.right {
            if let (Some(a), Some(b)) = (conn(right).up, conn(up).right) {
                if a == b {
                    return Some(CompositeGroup::from_indices([up, a, anchor, right]));
                }
            }
        }
        if let Some(left) = neighbors.left {
            if let (Some(a), Some(b)) = (conn(left).up, conn(up).left) {
                if a == b {
                    return Some(CompositeGroup::from_indices([a, up, left, anchor]));
                }
            }
        }
    }

    None
}

/// Screen a candidate and, if it survives, composite and claim it
fn accept_candidate<T>(
    tiles: &[Array3<T>],
    candidate: CompositeGroup,
    resolution: &mut GroupResolution<T>,
) where
    T: Copy,
{
    let indices = candidate.indices();

    if !candidate.all_distinct() || resolution.claims.any_claimed(&indices) {
        return;
    }

    match compose_quad(tiles, indices) {
        Ok(composite) => {
            resolution.claims.claim_all(&indices);
            resolution.groups.push(candidate);
            resolution.composites.push(composite);
        }
        Err(error) => {
            // Incompatible tile dimensions: skip this group and leave its
            // tiles unclaimed so the rest of the batch still reconstructs.
            // The same failing quad is re-discovered from every anchor, so
            // only the first report is kept.
            let already_reported = resolution
                .dimension_conflicts
                .iter()
                .any(|(failed, _)| *failed == candidate);
            if !already_reported {
                resolution.dimension_conflicts.push((candidate, error));
            }
        }
    }
}
