//! CLI entry point for the infinite collage renderer

use clap::Parser;
use infinitile::io::cli::{Cli, CollageProcessor};

fn main() -> infinitile::Result<()> {
    let cli = Cli::parse();
    let mut processor = CollageProcessor::new(cli);
    processor.process()
}
