//! Tests for 2x2 group resolution over hand-built connectivity maps

use ndarray::Array3;
use remosaic::algorithm::connectivity::TileNeighbors;
use remosaic::algorithm::grouping::resolve_groups;
use remosaic::io::error::ReconstructionError;

use crate::common::solid_tile;

/// Connectivity of a single closed quad: 0 1 / 2 3
fn quad_connectivity() -> Vec<TileNeighbors> {
    vec![
        TileNeighbors {
            right: Some(1),
            down: Some(2),
            ..TileNeighbors::default()
        },
        TileNeighbors {
            left: Some(0),
            down: Some(3),
            ..TileNeighbors::default()
        },
        TileNeighbors {
            right: Some(3),
            up: Some(0),
            ..TileNeighbors::default()
        },
        TileNeighbors {
            left: Some(2),
            up: Some(1),
            ..TileNeighbors::default()
        },
    ]
}

#[test]
fn test_closed_quad_is_accepted_once() {
    let tiles: Vec<Array3<u8>> = (0..4).map(|v| solid_tile(4, 4, v * 40)).collect();
    let resolution = resolve_groups(&tiles, &quad_connectivity());

    // Tiles 1 through 3 would re-discover the same block from other
    // orientations; the claimed-tile screen stops them.
    assert_eq!(resolution.groups.len(), 1);
    assert_eq!(
        resolution.groups.first().map(|g| g.indices()),
        Some([0, 1, 2, 3])
    );
    assert_eq!(resolution.claims.count(), 4);
    assert_eq!(
        resolution.composites.first().map(ndarray::Array3::dim),
        Some((8, 8, 3))
    );
    assert!(resolution.dimension_conflicts.is_empty());
}

// Tests that an open quadrilateral (diagonal paths disagree) produces no
// candidate at all
#[test]
fn test_inconsistent_diagonal_is_rejected() {
    let mut connectivity = quad_connectivity();
    if let Some(neighbors) = connectivity.get_mut(1) {
        neighbors.down = Some(4);
    }
    if let Some(neighbors) = connectivity.get_mut(4) {
        *neighbors = TileNeighbors::default();
    }
    connectivity.push(TileNeighbors::default());

    let tiles: Vec<Array3<u8>> = (0..5).map(|v| solid_tile(4, 4, v * 40)).collect();
    let resolution = resolve_groups(&tiles, &connectivity);

    // Anchor 0 fails down+right; anchors 2 and 3 still close the quad via the
    // up orientations, so one group is accepted with the original layout.
    assert_eq!(resolution.groups.len(), 1);
    assert_eq!(
        resolution.groups.first().map(|g| g.indices()),
        Some([0, 1, 2, 3])
    );
}

#[test]
fn test_degenerate_quad_with_repeated_tile_is_dropped() {
    // Tile 1 doubles as right neighbor and diagonal, so the closed quad
    // [0, 1, 2, 1] fails the distinctness screen.
    let connectivity = vec![
        TileNeighbors {
            right: Some(1),
            down: Some(2),
            ..TileNeighbors::default()
        },
        TileNeighbors {
            left: Some(0),
            down: Some(1),
            ..TileNeighbors::default()
        },
        TileNeighbors {
            right: Some(1),
            up: Some(0),
            ..TileNeighbors::default()
        },
    ];

    let tiles: Vec<Array3<u8>> = (0..3).map(|v| solid_tile(4, 4, v * 80)).collect();
    let resolution = resolve_groups(&tiles, &connectivity);

    assert!(resolution.groups.is_empty());
    assert_eq!(resolution.claims.count(), 0);
}

// Tests the dimension-conflict path: a quad closes through the graph but its
// tiles cannot be concatenated into a rectangle
#[test]
fn test_incompatible_tile_dimensions_are_reported_not_fatal() {
    let tiles = vec![
        solid_tile(4, 4, 10),
        solid_tile(4, 5, 60), // upper band becomes 4x9, lower band 4x8
        solid_tile(4, 4, 110),
        solid_tile(4, 4, 160),
    ];
    let resolution = resolve_groups(&tiles, &quad_connectivity());

    assert!(resolution.groups.is_empty());
    assert!(resolution.composites.is_empty());
    assert_eq!(resolution.claims.count(), 0);
    assert_eq!(resolution.dimension_conflicts.len(), 1);

    let Some((group, error)) = resolution.dimension_conflicts.first() else {
        panic!("expected one dimension conflict");
    };
    assert_eq!(group.indices(), [0, 1, 2, 3]);
    assert!(matches!(
        error,
        ReconstructionError::DimensionMismatch { .. }
    ));
}

#[test]
fn test_isolated_tiles_produce_nothing() {
    let tiles: Vec<Array3<u8>> = (0..3).map(|v| solid_tile(4, 4, v)).collect();
    let connectivity = vec![TileNeighbors::default(); 3];

    let resolution = resolve_groups(&tiles, &connectivity);
    assert!(resolution.groups.is_empty());
    assert_eq!(resolution.claims.unclaimed(), vec![0, 1, 2]);
}
