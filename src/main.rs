//! CLI entry point for the tile world editor

use clap::Parser;
use tiledit::io::cli::{Cli, EditProcessor};
use tiledit::io::logging;

fn main() -> tiledit::Result<()> {
    logging::init();
    let cli = Cli::parse();
    let processor = EditProcessor::new(cli);
    processor.process().map(|_| ())
}
