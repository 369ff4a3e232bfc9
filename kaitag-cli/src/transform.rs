//! Entry reshaping for the web export
//!
//! The web format is a structural reduction of the on-disk record: stress
//! gets marked on the headword, tags become bilingual labels, forms collapse
//! to plain strings, and cross-references resolve to `letter#id` links into
//! the published per-letter pages.

use std::path::Path;

use kaitag_core::entry::{BilingualList, BilingualText, Example};
use kaitag_core::{mark_stress, Alphabet, Entry, EntryId, TagLabel, TagTaxonomy};
use serde::Serialize;

/// Resolved cross-reference.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Link {
    pub headword: String,
    pub link: String,
}

/// Definition as published on the web: bilingual leaves kept, internal
/// tags dropped.
#[derive(Debug, Clone, Serialize)]
pub struct WebDefinition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation: Option<BilingualText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BilingualList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<BilingualText>,
}

impl WebDefinition {
    fn is_empty(&self) -> bool {
        self.translation.is_none()
            && self.examples.is_empty()
            && self.aliases.is_none()
            && self.note.is_none()
    }
}

/// Entry as published on the web.
#[derive(Debug, Clone, Serialize)]
pub struct WebEntry {
    pub id: EntryId,
    pub headword: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<TagLabel>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub definitions: Vec<WebDefinition>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etymology: Option<BilingualText>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<BilingualText>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub derived_from: Vec<Link>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<Link>,
}

/// Converter from on-disk entries to web entries.
pub struct Transformer<'a> {
    alphabet: &'a Alphabet,
    taxonomy: &'a TagTaxonomy,
    lexicon_dir: &'a Path,
}

impl<'a> Transformer<'a> {
    pub fn new(alphabet: &'a Alphabet, taxonomy: &'a TagTaxonomy, lexicon_dir: &'a Path) -> Self {
        Self {
            alphabet,
            taxonomy,
            lexicon_dir,
        }
    }

    /// Shape one entry for the web format.
    pub fn web_entry(&self, entry: &Entry) -> WebEntry {
        WebEntry {
            id: entry.id.clone(),
            headword: mark_stress(&entry.headword, entry.ipa.as_deref(), self.alphabet),
            tags: self.taxonomy.map_tags(&entry.tags),
            forms: entry.simplified_forms(),
            definitions: entry
                .definitions
                .iter()
                .map(|d| WebDefinition {
                    translation: d.translation.clone(),
                    examples: d.examples.clone(),
                    aliases: d.aliases.clone(),
                    note: d.note.clone(),
                })
                .filter(|d| !d.is_empty())
                .collect(),
            variants: entry.variant_texts(),
            etymology: entry.etymology.clone(),
            note: entry.note.clone(),
            derived_from: self.resolve_links(&entry.derived_from),
            see_also: self.resolve_links(&entry.see_also),
        }
    }

    fn resolve_links(&self, refs: &[String]) -> Vec<Link> {
        refs.iter()
            .filter_map(|r| self.resolve_link(r))
            .collect()
    }

    /// Resolve one headword reference to a `letter#id` link.
    ///
    /// Reconstructed roots (`*...`) are skipped. The reference may carry a
    /// homonym suffix (`хъан-2`) which selects the file but is stripped from
    /// the displayed headword. Unresolvable references are dropped with a
    /// warning.
    fn resolve_link(&self, reference: &str) -> Option<Link> {
        if reference.starts_with('*') {
            return None;
        }

        let letter = self.alphabet.first_letter(reference);
        let file = self
            .lexicon_dir
            .join(&letter)
            .join(format!("{reference}.yaml"));

        let text = match std::fs::read_to_string(&file) {
            Ok(text) => text,
            Err(_) => {
                log::warn!("Referenced file not found: {}", file.display());
                return None;
            }
        };
        let value: serde_yaml::Value = match serde_yaml::from_str(&text) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Error reading {}: {e}", file.display());
                return None;
            }
        };
        let Some(id) = value.get("id") else {
            log::warn!("No ID found in {}", file.display());
            return None;
        };
        let id = match id {
            serde_yaml::Value::String(s) => s.clone(),
            serde_yaml::Value::Number(n) => n.to_string(),
            _ => {
                log::warn!("Malformed ID in {}", file.display());
                return None;
            }
        };

        Some(Link {
            headword: strip_homonym_suffix(reference).to_string(),
            link: format!("{letter}#{id}"),
        })
    }
}

/// Remove a trailing `-N` homonym discriminator, if present.
fn strip_homonym_suffix(reference: &str) -> &str {
    if let Some(pos) = reference.rfind('-') {
        let tail = &reference[pos + 1..];
        if !tail.is_empty() && tail.bytes().all(|b| b.is_ascii_digit()) {
            return &reference[..pos];
        }
    }
    reference
}
