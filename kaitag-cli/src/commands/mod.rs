//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod export;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Build the derived publication formats (web JSON, archive JSON, CSV)
    Export(export::ExportArgs),

    /// Check lexicon integrity (id uniqueness, tag taxonomy membership)
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

impl Commands {
    /// Dispatch to the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Export(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
        }
    }
}
