//! Tests for pipeline orchestration and result bookkeeping

use remosaic::ReconstructionConfig;
use remosaic::io::configuration::DEFAULT_MATCH_DISTANCE_THRESHOLD;

use crate::common::solid_tile;

#[test]
fn test_default_config_uses_the_documented_threshold() {
    let config = ReconstructionConfig::default();
    assert_eq!(
        config.match_distance_threshold,
        DEFAULT_MATCH_DISTANCE_THRESHOLD
    );
}

// Tests that the raw composite count survives deduplication bookkeeping
#[test]
fn test_raw_count_matches_kept_count_without_duplicates() {
    let tiles = vec![solid_tile(4, 4, 0), solid_tile(4, 4, 200)];
    let result = remosaic::reconstruct(&tiles, &ReconstructionConfig::default());

    assert_eq!(result.composite_count_raw, result.composites.len());
}

#[test]
fn test_used_and_unused_partition_the_input() {
    let tiles = vec![
        solid_tile(4, 4, 0),
        solid_tile(5, 5, 100),
        solid_tile(6, 6, 200),
    ];
    let result = remosaic::reconstruct(&tiles, &ReconstructionConfig::default());

    let mut all: Vec<usize> = result.used.iter().chain(&result.unused).copied().collect();
    all.sort_unstable();
    assert_eq!(all, vec![0, 1, 2]);
}

#[test]
fn test_annotations_are_index_parallel_to_tiles() {
    let tiles = vec![solid_tile(4, 4, 10), solid_tile(4, 4, 20)];
    let result = remosaic::reconstruct(&tiles, &ReconstructionConfig::default());

    assert_eq!(result.annotations.len(), tiles.len());
    assert_eq!(result.connectivity.len(), tiles.len());
}
