//! Tests for composite deduplication

use ndarray::Array3;
use remosaic::algorithm::dedup::dedup_composites;

use crate::common::solid_tile;

#[test]
fn test_exact_duplicates_are_removed() {
    let composites = vec![
        solid_tile(4, 4, 10),
        solid_tile(4, 4, 20),
        solid_tile(4, 4, 10),
    ];

    let kept = dedup_composites(composites);
    assert_eq!(kept, vec![solid_tile(4, 4, 10), solid_tile(4, 4, 20)]);
}

// Tests that first occurrence wins and input order is preserved
#[test]
fn test_input_order_is_preserved() {
    let composites = vec![
        solid_tile(4, 4, 30),
        solid_tile(4, 4, 10),
        solid_tile(4, 4, 30),
        solid_tile(4, 4, 20),
        solid_tile(4, 4, 10),
    ];

    let kept = dedup_composites(composites);
    assert_eq!(
        kept,
        vec![
            solid_tile(4, 4, 30),
            solid_tile(4, 4, 10),
            solid_tile(4, 4, 20),
        ]
    );
}

// Tests that equal element counts with different shapes are distinct
#[test]
fn test_shapes_are_part_of_identity() {
    let composites = vec![
        Array3::<u8>::zeros((2, 8, 3)),
        Array3::<u8>::zeros((8, 2, 3)),
        Array3::<u8>::zeros((4, 4, 3)),
    ];

    let kept = dedup_composites(composites);
    assert_eq!(kept.len(), 3);
}

#[test]
fn test_dedup_is_idempotent() {
    let composites = vec![
        solid_tile(3, 3, 1),
        solid_tile(3, 3, 1),
        solid_tile(3, 3, 2),
    ];

    let once = dedup_composites(composites);
    let twice = dedup_composites(once.clone());
    assert_eq!(once, twice);
}

#[test]
fn test_empty_input_stays_empty() {
    assert!(dedup_composites(Vec::<Array3<u8>>::new()).is_empty());
}
