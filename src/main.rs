//! CLI entry point for grid map path finding, flood fill and sampling

use cellgrid::io::cli::{Cli, MapProcessor};
use clap::Parser;

fn main() -> cellgrid::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    MapProcessor::new(cli).process()
}
