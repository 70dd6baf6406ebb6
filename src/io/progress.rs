//! Progress reporting for batch tile loading

use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_MIN_TILES};

static LOAD_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template(&format!(
            "[{{elapsed_precise}}] Tiles: [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} {{msg}}"
        ))
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress display for loading a directory of tiles
///
/// Small batches skip the bar entirely; decoding a handful of tiles
/// finishes faster than the bar can render.
pub struct ProgressManager {
    bar: Option<ProgressBar>,
}

impl ProgressManager {
    /// Create a progress manager for the given tile count
    pub fn new(tile_count: usize) -> Self {
        let bar = (tile_count >= PROGRESS_MIN_TILES).then(|| {
            let bar = ProgressBar::new(tile_count as u64).with_style(LOAD_STYLE.clone());
            bar.enable_steady_tick(Duration::from_millis(100));
            bar
        });

        Self { bar }
    }

    /// Record one loaded tile, displaying its file name
    pub fn tile_loaded(&self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
            bar.inc(1);
        }
    }

    /// Finish and clear the display
    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}
