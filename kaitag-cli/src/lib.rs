//! Kaitag CLI library
//!
//! This library provides the command-line interface for converting the
//! Kaitag YAML lexicon into its derived publication formats and for
//! validating the lexicon's integrity.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;
pub mod transform;

pub use error::{CliError, CliResult};
