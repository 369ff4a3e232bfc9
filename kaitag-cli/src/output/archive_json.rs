//! Archive JSON writer
//!
//! The archival format mirrors the on-disk records with no reshaping at
//! all: the same per-letter grouping and collation order as the web format,
//! but each entry is the raw record as stored in its YAML file. Meant for
//! research tooling that wants the complete, unprocessed data.

use anyhow::Result;
use std::io::Write;

use super::{LetterGroup, LexiconWriter};

/// Archive JSON formatter
pub struct ArchiveJsonWriter {
    pretty: bool,
}

impl ArchiveJsonWriter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl LexiconWriter for ArchiveJsonWriter {
    fn write(&mut self, groups: &[LetterGroup], out: &mut dyn Write) -> Result<()> {
        let mut document = serde_json::Map::new();
        for group in groups {
            let entries: Vec<serde_json::Value> = group
                .entries
                .iter()
                .map(|loaded| loaded.raw.clone())
                .collect();
            document.insert(group.letter.to_string(), serde_json::Value::Array(entries));
        }

        if self.pretty {
            serde_json::to_writer_pretty(&mut *out, &document)?;
        } else {
            serde_json::to_writer(&mut *out, &document)?;
        }
        writeln!(out)?;
        out.flush()?;
        Ok(())
    }
}
