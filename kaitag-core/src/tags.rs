//! Grammar tag taxonomy
//!
//! The tags resource maps short tag codes to bilingual display labels,
//! grouped into categories:
//!
//! ```yaml
//! grammar:
//!   n: { en: noun, ru: сущ. }
//!   vb: { en: verbal, ru: глагольный }
//! semantic:
//!   anat: { en: anatomy, ru: анатомия }
//! ```
//!
//! Only part-of-speech codes plus `cls`/`pl` are exportable; purely
//! grammatical features (`vb`, `tr`, `ntr`, ...) stay internal.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{KaitagError, Result};

/// Tag codes included in derived exports: part of speech plus `cls`/`pl`.
pub const EXPORTABLE_TAGS: &[&str] = &[
    "n", "v", "adj", "adv", "conj", "prep", "post", "intj", "pro", "num", "cop", "ptcl", "det",
    "cls", "pl",
];

/// Bilingual display label of a tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagLabel {
    pub en: String,
    pub ru: String,
}

#[derive(Debug, Deserialize)]
struct TaxonomyFile {
    #[serde(flatten)]
    categories: HashMap<String, HashMap<String, TagLabel>>,
}

/// The full tag taxonomy, loaded once per run.
#[derive(Debug, Clone)]
pub struct TagTaxonomy {
    categories: HashMap<String, HashMap<String, TagLabel>>,
}

impl TagTaxonomy {
    /// Parse a taxonomy from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: TaxonomyFile = serde_yaml::from_str(yaml)
            .map_err(|e| KaitagError::Resource(format!("tags: {e}")))?;
        Ok(Self {
            categories: file.categories,
        })
    }

    /// Load a taxonomy from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let file: TaxonomyFile = serde_yaml::from_str(&text).map_err(|e| KaitagError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self {
            categories: file.categories,
        })
    }

    /// Whether `tag` is declared in any category.
    pub fn contains(&self, tag: &str) -> bool {
        self.categories.values().any(|c| c.contains_key(tag))
    }

    /// Exportable grammar labels: the `grammar` category filtered to
    /// [`EXPORTABLE_TAGS`].
    pub fn export_labels(&self) -> HashMap<&str, &TagLabel> {
        let Some(grammar) = self.categories.get("grammar") else {
            return HashMap::new();
        };
        grammar
            .iter()
            .filter(|(code, _)| EXPORTABLE_TAGS.contains(&code.as_str()))
            .map(|(code, label)| (code.as_str(), label))
            .collect()
    }

    /// Map an entry's tags to bilingual labels, preserving tag order and
    /// silently dropping non-exportable tags.
    pub fn map_tags(&self, tags: &[String]) -> Vec<TagLabel> {
        let labels = self.export_labels();
        tags.iter()
            .filter_map(|tag| labels.get(tag.as_str()).map(|&label| label.clone()))
            .collect()
    }
}
