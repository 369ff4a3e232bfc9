//! Web JSON writer
//!
//! Produces the per-letter structure consumed by the static website:
//! an object keyed by letter in alphabet order, each holding its sorted,
//! reshaped entries.

use anyhow::Result;
use std::io::Write;

use super::{LetterGroup, LexiconWriter};
use crate::transform::Transformer;

/// Web JSON formatter
pub struct WebJsonWriter<'a> {
    transformer: Transformer<'a>,
    pretty: bool,
}

impl<'a> WebJsonWriter<'a> {
    pub fn new(transformer: Transformer<'a>, pretty: bool) -> Self {
        Self {
            transformer,
            pretty,
        }
    }
}

impl LexiconWriter for WebJsonWriter<'_> {
    fn write(&mut self, groups: &[LetterGroup], out: &mut dyn Write) -> Result<()> {
        // serde_json's preserve_order map keeps the alphabet ordering of
        // the letter keys.
        let mut document = serde_json::Map::new();
        for group in groups {
            let entries: Vec<serde_json::Value> = group
                .entries
                .iter()
                .map(|loaded| serde_json::to_value(self.transformer.web_entry(&loaded.entry)))
                .collect::<Result<_, _>>()?;
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
