//! Command-line interface for reconstructing a directory of image tiles

use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;

use crate::algorithm::reconstructor::{Reconstruction, ReconstructionConfig, reconstruct};
use crate::io::configuration::{ANNOTATION_FILE_NAME, DEFAULT_MATCH_DISTANCE_THRESHOLD};
use crate::io::error::{Result, invalid_parameter};
use crate::io::image::{collect_tile_paths, export_composites, load_tile};
use crate::io::progress::ProgressManager;
use crate::spatial::Side;

#[derive(Parser)]
#[command(name = "remosaic")]
#[command(
    author,
    version,
    about = "Reassemble tiled images by nearest-neighbor border matching"
)]
/// Command-line arguments for the reconstruction tool
pub struct Cli {
    /// Directory containing the PNG tiles to reconstruct
    #[arg(value_name = "TILE_DIR")]
    pub tiles: PathBuf,

    /// Output directory for composite images and the annotation table
    #[arg(short, long, default_value = "mosaics")]
    pub output: PathBuf,

    /// Maximum border distance for adjacency (pixel-encoding dependent)
    #[arg(short, long, default_value_t = DEFAULT_MATCH_DISTANCE_THRESHOLD)]
    pub threshold: f64,

    /// Print the tile connectivity map and accepted groups
    #[arg(short, long)]
    pub connectivity: bool,

    /// Skip writing the annotation table
    #[arg(long)]
    pub no_annotations: bool,

    /// Suppress progress and summary output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates one reconstruction run: load, reconstruct, export
pub struct BatchProcessor {
    cli: Cli,
}

impl BatchProcessor {
    /// Create a processor from parsed CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the reconstruction end to end
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The threshold is not a positive finite number
    /// - The tile directory cannot be read or a tile cannot be decoded
    /// - Composites or annotations cannot be written
    // Allow print for user feedback summaries
    #[allow(clippy::print_stderr)]
    pub fn process(&self) -> Result<()> {
        if !self.cli.threshold.is_finite() || self.cli.threshold <= 0.0 {
            return Err(invalid_parameter(
                "threshold",
                &self.cli.threshold,
                &"must be a positive finite distance",
            ));
        }

        let start_time = Instant::now();
        let paths = collect_tile_paths(&self.cli.tiles)?;

        if paths.is_empty() {
            if !self.cli.quiet {
                eprintln!("No PNG tiles found in {}", self.cli.tiles.display());
            }
            return Ok(());
        }

        let progress = self
            .cli
            .should_show_progress()
            .then(|| ProgressManager::new(paths.len()));

        let mut tiles = Vec::with_capacity(paths.len());
        for path in &paths {
            tiles.push(load_tile(path)?);
            if let Some(pm) = &progress {
                pm.tile_loaded(&path.file_name().unwrap_or_default().to_string_lossy());
            }
        }
        if let Some(pm) = &progress {
            pm.finish();
        }

        let config = ReconstructionConfig {
            match_distance_threshold: self.cli.threshold,
        };
        let result = reconstruct(&tiles, &config);

        if !self.cli.quiet {
            eprintln!(
                "{} tiles, {} groups, {} composites ({} before dedup), {} unused, {} dimension conflicts [{:.2?}]",
                tiles.len(),
                result.groups.len(),
                result.composites.len(),
                result.composite_count_raw,
                result.unused.len(),
                result.dimension_conflicts.len(),
                start_time.elapsed()
            );
            for (group, error) in &result.dimension_conflicts {
                eprintln!("Skipped group {:?}: {error}", group.indices());
            }
        }

        if self.cli.connectivity {
            Self::print_connectivity(&result);
        }

        export_composites(&result.composites, &self.cli.output)?;

        if !self.cli.no_annotations {
            let annotation_path = self.cli.output.join(ANNOTATION_FILE_NAME);
            crate::io::annotations::write_annotation_csv(
                &annotation_path,
                &result.annotations,
                &paths,
            )?;
        }

        Ok(())
    }

    // Data dump requested via --connectivity goes to stdout
    #[allow(clippy::print_stdout)]
    fn print_connectivity(result: &Reconstruction<u8>) {
        for (tile, neighbors) in result.connectivity.iter().enumerate() {
            if neighbors.is_isolated() {
                continue;
            }
            let slots: Vec<String> = Side::ALL
                .into_iter()
                .map(|side| format!("{}={}", side.label(), format_slot(neighbors.get(side))))
                .collect();
            println!("tile {tile}: {}", slots.join(" "));
        }
        for (mosaic_id, group) in result.groups.iter().enumerate() {
            println!("group {mosaic_id}: {:?}", group.indices());
        }
    }
}

fn format_slot(slot: Option<usize>) -> String {
    slot.map_or_else(|| "-".to_string(), |tile| tile.to_string())
}
