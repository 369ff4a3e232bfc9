//! Error types for resource loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading alphabet, taxonomy, or entry resources.
///
/// The text transforms themselves ([`crate::stress`], [`crate::collation`])
/// never return these: they degrade to the unmodified input instead, so a
/// batch export is never aborted by a single malformed transcription.
#[derive(Error, Debug)]
pub enum KaitagError {
    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML deserialization error with the offending file
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// Structurally valid YAML that violates a resource invariant
    #[error("invalid resource: {0}")]
    Resource(String),
}

/// Result type for resource operations
pub type Result<T> = std::result::Result<T, KaitagError>;
