//! CLI entry point for the brick mosaic planner

use brickmosaic::io::cli::{Cli, FileProcessor};
use clap::Parser;

fn main() -> brickmosaic::Result<()> {
    let cli = Cli::parse();
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
