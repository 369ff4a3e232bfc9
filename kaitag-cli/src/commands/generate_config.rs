//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", default_value = "kaitag.toml")]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        let template = generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Adjust the directory layout if yours differs");
        println!("2. Validate the lexicon:");
        println!("   kaitag validate --config {}", self.output.display());
        println!("3. Build the exports:");
        println!("   kaitag export --config {}", self.output.display());

        Ok(())
    }
}

/// Generate template configuration content
fn generate_template() -> String {
    r#"# Kaitag dictionary toolkit configuration

[paths]
# Lexicon root: one subdirectory per alphabet letter, one YAML file per entry
lexicon = "lexicon"

# Data directory holding alphabet.yaml and tags.yaml
data = "data"

# Default directory for the derived publication formats
export = "export"

[output]
# Pretty print the JSON exports
pretty_json = true
"#
    .to_string()
}
