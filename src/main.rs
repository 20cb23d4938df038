//! CLI entry point for the grid collage exporter

use clap::Parser;
use gridglue::io::cli::{Cli, CollageJob};

fn main() -> gridglue::Result<()> {
    let cli = Cli::parse();
    let mut job = CollageJob::new(cli);
    job.process().map(|_| ())
}
