//! Configuration module

use std::path::{Path, PathBuf};

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::error::CliError;

/// CLI configuration structure (`kaitag.toml`)
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Repository layout
    #[serde(default)]
    pub paths: PathsConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Repository directory layout
#[derive(Debug, Deserialize, Serialize)]
pub struct PathsConfig {
    /// Lexicon root (one subdirectory per letter)
    pub lexicon: PathBuf,

    /// Data directory holding alphabet.yaml and tags.yaml
    pub data: PathBuf,

    /// Default directory for derived formats
    pub export: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            lexicon: PathBuf::from("lexicon"),
            data: PathBuf::from("data"),
            export: PathBuf::from("export"),
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
pub struct OutputConfig {
    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { pretty_json: true }
    }
}

impl CliConfig {
    /// Load configuration from an explicit file, from `kaitag.toml` in the
    /// working directory, or fall back to the defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from("kaitag.toml");
                if !default.exists() {
                    return Ok(Self::default());
                }
                default
            }
        };
        let text = std::fs::read_to_string(&path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        let config = toml::from_str(&text)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Ok(config)
    }
}
