//! Output formatting module
//!
//! One writer per derived publication format, all consuming the same
//! collation-sorted letter groups.

use anyhow::Result;
use std::io::Write;

use crate::input::LoadedEntry;

/// Entries of one letter, already sorted by collation key.
pub struct LetterGroup<'a> {
    pub letter: &'a str,
    pub entries: Vec<&'a LoadedEntry>,
}

/// Trait for lexicon export writers
pub trait LexiconWriter {
    /// Write all letter groups to `out`.
    fn write(&mut self, groups: &[LetterGroup], out: &mut dyn Write) -> Result<()>;
}

pub mod archive_json;
pub mod csv;
pub mod web_json;

pub use archive_json::ArchiveJsonWriter;
pub use self::csv::CsvWriter;
pub use web_json::WebJsonWriter;
