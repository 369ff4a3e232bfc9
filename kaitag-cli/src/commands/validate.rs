//! Validate command implementation
//!
//! Batch validation: every finding is reported before the command fails,
//! so one run shows the full damage instead of stopping at the first
//! collision.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Args;
use kaitag_core::TagTaxonomy;

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::scan_all_entries;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Lexicon root directory
    #[arg(long, value_name = "DIR")]
    pub lexicon: Option<PathBuf>,

    /// Data directory holding tags.yaml
    #[arg(long, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Only check id uniqueness, skip tag validation
    #[arg(long)]
    pub skip_tags: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let config = CliConfig::load(self.config.as_deref())?;
        let lexicon_dir = self.lexicon.clone().unwrap_or_else(|| config.paths.lexicon.clone());
        let data_dir = self.data.clone().unwrap_or_else(|| config.paths.data.clone());

        let documents = scan_all_entries(&lexicon_dir)?;

        println!("Running ID collision validation...");
        let mut errors = report_id_collisions(&documents);

        if !self.skip_tags {
            println!("Running tag validation...");
            let tags_path = data_dir.join("tags.yaml");
            let taxonomy = TagTaxonomy::from_file(&tags_path).map_err(|e| {
                CliError::MissingResource(format!("{}: {e}", tags_path.display()))
            })?;
            errors += report_unknown_tags(&documents, &taxonomy);
        }

        if errors > 0 {
            println!();
            println!("✗ Validation failed");
            return Err(CliError::ValidationFailed(format!("{errors} problems found")).into());
        }
        println!("✓ No problems found");
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Report every id used by more than one file. Returns the collision count.
fn report_id_collisions(documents: &[(PathBuf, serde_yaml::Value)]) -> usize {
    let mut id_to_files: BTreeMap<String, Vec<&Path>> = BTreeMap::new();
    for (path, value) in documents {
        if let Some(id) = scalar_to_string(value.get("id")) {
            id_to_files.entry(id).or_default().push(path);
        }
    }

    let mut collisions = 0;
    for (id, files) in &id_to_files {
        if files.len() > 1 {
            collisions += 1;
            println!("ERROR: ID collision '{id}'");
            for file in files {
                println!("  - {}", file.display());
            }
        }
    }
    collisions
}

/// Report tags, word-level and definition-level, that the taxonomy does not
/// declare. Returns the number of findings.
fn report_unknown_tags(
    documents: &[(PathBuf, serde_yaml::Value)],
    taxonomy: &TagTaxonomy,
) -> usize {
    let mut findings = 0;

    for (path, value) in documents {
        for tag in tag_list(value.get("tags")) {
            if !taxonomy.contains(&tag) {
                findings += 1;
                println!("ERROR: Unknown tag '{tag}' in {}", path.display());
            }
        }
        if let Some(definitions) = value.get("definitions").and_then(|v| v.as_sequence()) {
            for definition in definitions {
                for tag in tag_list(definition.get("tags")) {
                    if !taxonomy.contains(&tag) {
                        findings += 1;
                        println!(
                            "ERROR: Unknown tag '{tag}' in {} (definition)",
                            path.display()
                        );
                    }
                }
            }
        }
    }
    findings
}

fn tag_list(value: Option<&serde_yaml::Value>) -> Vec<String> {
    value
        .and_then(|v| v.as_sequence())
        .map(|seq| {
            seq.iter()
                .filter_map(|t| t.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

fn scalar_to_string(value: Option<&serde_yaml::Value>) -> Option<String> {
    match value {
        Some(serde_yaml::Value::String(s)) => Some(s.clone()),
        Some(serde_yaml::Value::Number(n)) => Some(n.to_string()),
        _ => None,
    }
}
