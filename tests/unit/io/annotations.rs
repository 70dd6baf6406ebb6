//! Tests for annotation CSV rendering and export

use std::path::PathBuf;

use remosaic::algorithm::reconstructor::{CornerPosition, TileAnnotation};
use remosaic::io::annotations::{render_annotation_csv, write_annotation_csv};

fn grouped(mosaic_id: usize, position: CornerPosition) -> TileAnnotation {
    TileAnnotation {
        mosaic_id,
        position: Some(position),
    }
}

fn unused(mosaic_id: usize) -> TileAnnotation {
    TileAnnotation {
        mosaic_id,
        position: None,
    }
}

#[test]
fn test_csv_has_one_row_per_tile_plus_header() {
    let annotations = vec![
        grouped(0, CornerPosition::UpLeft),
        grouped(0, CornerPosition::UpRight),
        unused(1),
    ];
    let sources = vec![
        PathBuf::from("/data/tiles/a.png"),
        PathBuf::from("/data/tiles/b.png"),
        PathBuf::from("/data/tiles/c.png"),
    ];

    let csv = render_annotation_csv(&annotations, &sources);
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines,
        vec![
            "tile,file,mosaic_idx,mosaic_position",
            "0,a.png,0,up_left",
            "1,b.png,0,up_right",
            "2,c.png,1,",
        ]
    );
}

// Tests that missing source paths render an empty file column so in-memory
// tile sets can still be exported
#[test]
fn test_missing_sources_render_empty_file_column() {
    let annotations = vec![grouped(0, CornerPosition::DownRight)];

    let csv = render_annotation_csv(&annotations, &[]);
    assert!(csv.ends_with("0,,0,down_right\n"));
}

#[test]
fn test_write_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("annotations.csv");

    let annotations = vec![unused(1), unused(2)];
    write_annotation_csv(&path, &annotations, &[]).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, render_annotation_csv(&annotations, &[]));
}
