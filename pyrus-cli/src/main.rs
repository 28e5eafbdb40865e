//! Pyrus command-line entry point

use anyhow::Result;
use clap::Parser;
use pyrus_cli::commands::Commands;

/// Cyrillic word segmentation with multi-word expression recognition
#[derive(Debug, Parser)]
#[command(name = "pyrus", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
