//! Entry point for the kaitag CLI

use clap::Parser;
use kaitag_cli::commands::Commands;

/// Convert and validate the Kaitag dictionary lexicon
#[derive(Debug, Parser)]
#[command(name = "kaitag", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = cli.command.execute() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
