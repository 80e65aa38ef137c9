//! teialign command-line entry point

use anyhow::Result;
use clap::Parser;
use teialign_cli::commands::Commands;

/// Build labeled training data from TEI-annotated corpora
#[derive(Debug, Parser)]
#[command(name = "teialign", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
