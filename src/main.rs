//! CLI entry point for the SVG pattern generator

use clap::Parser;
use svgpattern::io::cli::{BatchRunner, Cli};

fn main() -> svgpattern::Result<()> {
    let cli = Cli::parse();
    svgpattern::io::logging::init(cli.verbose);
    let runner = BatchRunner::new(cli)?;
    runner.run()?;
    Ok(())
}
