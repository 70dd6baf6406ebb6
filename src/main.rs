//! CLI entry point for the mosaic reconstruction tool

use clap::Parser;
use remosaic::io::cli::{BatchProcessor, Cli};

fn main() -> remosaic::Result<()> {
    let cli = Cli::parse();
    let processor = BatchProcessor::new(cli);
    processor.process()
}
