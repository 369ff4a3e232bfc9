//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// Required resource file not found or inaccessible
    MissingResource(String),
    /// Configuration error
    ConfigError(String),
    /// Lexicon validation found problems
    ValidationFailed(String),
    /// Export could not be completed cleanly
    ExportError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::MissingResource(path) => write!(f, "Missing resource: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ValidationFailed(msg) => write!(f, "Validation failed: {msg}"),
            CliError::ExportError(msg) => write!(f, "Export error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;
