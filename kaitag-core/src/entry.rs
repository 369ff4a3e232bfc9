//! Serde model of on-disk lexicon entries
//!
//! One YAML file per entry, named after the headword. `id`, `headword` and
//! `definitions` are required; a file missing any of them fails to
//! deserialize and is skipped by the loader. Everything else is optional.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Entry identifier, written as either a string or an integer scalar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryId {
    Int(i64),
    Str(String),
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryId::Int(n) => write!(f, "{n}"),
            EntryId::Str(s) => write!(f, "{s}"),
        }
    }
}

/// Bilingual text leaf, either side may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BilingualText {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ru: Option<String>,
}

/// Bilingual string lists (definition aliases).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BilingualList {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub en: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ru: Vec<String>,
}

/// Usage example attached to a definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<BilingualText>,
}

/// One sense of an entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Definition {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<Example>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aliases: Option<BilingualList>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<BilingualText>,
    /// Definition-level grammar tags; internal only, never exported.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Inflected or derived form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Form {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
}

/// Orthographic variant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Variant {
    pub text: String,
}

/// A lexicon entry as stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: EntryId,
    pub headword: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub forms: Vec<Form>,
    pub definitions: Vec<Definition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variants: Vec<Variant>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub etymology: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<BilingualText>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub derived_from: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub see_also: Vec<String>,
}

impl Entry {
    /// Compound verbs (a `v` tag plus a space in the headword) get special
    /// form handling: only the inflecting last word of each form is kept.
    pub fn is_compound_verb(&self) -> bool {
        self.tags.iter().any(|t| t == "v") && self.headword.contains(' ')
    }

    /// Form texts prepared for publication: empty and headword-identical
    /// forms are dropped, compound verbs keep only the final word, and
    /// oblique stems (`gloss: obl`) get a trailing dash.
    pub fn simplified_forms(&self) -> Vec<String> {
        let compound_verb = self.is_compound_verb();
        let mut result = Vec::new();
        for form in &self.forms {
            if form.text.is_empty() || form.text == self.headword {
                continue;
            }
            let mut text = if compound_verb {
                match form.text.split_whitespace().last() {
                    Some(last) => last.to_string(),
                    None => continue,
                }
            } else {
                form.text.clone()
            };
            if form.gloss.as_deref() == Some("obl") {
                text.push('-');
            }
            result.push(text);
        }
        result
    }

    /// Variant surface strings.
    pub fn variant_texts(&self) -> Vec<String> {
        self.variants.iter().map(|v| v.text.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_ENTRY: &str = r#"
id: w42
headword: бурул
ipa: buˈrul
tags: [n]
forms:
  - text: бурулла
    gloss: obl
  - text: бурул
definitions:
  - translation: { en: drill, ru: сверло }
    examples:
      - text: бурул саби
        translation: { en: this is a drill }
variants:
  - text: бурулла
see_also: [хъара]
"#;

    #[test]
    fn full_entry_deserializes() {
        let entry: Entry = serde_yaml::from_str(FULL_ENTRY).unwrap();
        assert_eq!(entry.id, EntryId::Str("w42".into()));
        assert_eq!(entry.headword, "бурул");
        assert_eq!(entry.ipa.as_deref(), Some("buˈrul"));
        assert_eq!(entry.definitions.len(), 1);
        assert_eq!(entry.see_also, ["хъара"]);
    }

    #[test]
    fn integer_id_is_accepted() {
        let entry: Entry =
            serde_yaml::from_str("id: 42\nheadword: ахъ\ndefinitions: []\n").unwrap();
        assert_eq!(entry.id, EntryId::Int(42));
        assert_eq!(entry.id.to_string(), "42");
    }

    #[test]
    fn missing_required_field_is_an_error() {
        assert!(serde_yaml::from_str::<Entry>("headword: ахъ\ndefinitions: []\n").is_err());
        assert!(serde_yaml::from_str::<Entry>("id: w1\ndefinitions: []\n").is_err());
        assert!(serde_yaml::from_str::<Entry>("id: w1\nheadword: ахъ\n").is_err());
    }

    #[test]
    fn simplified_forms_drop_headword_and_mark_oblique() {
        let entry: Entry = serde_yaml::from_str(FULL_ENTRY).unwrap();
        assert_eq!(entry.simplified_forms(), ["бурулла-"]);
    }

    #[test]
    fn compound_verb_forms_keep_last_word() {
        let yaml = r#"
id: w7
headword: гъай бикӏвара
tags: [v]
forms:
  - text: гъай бикӏвиб
definitions: []
"#;
        let entry: Entry = serde_yaml::from_str(yaml).unwrap();
        assert!(entry.is_compound_verb());
        assert_eq!(entry.simplified_forms(), ["бикӏвиб"]);
    }

    #[test]
    fn entry_serializes_without_empty_fields() {
        let entry: Entry =
            serde_yaml::from_str("id: w1\nheadword: ахъ\ndefinitions: []\n").unwrap();
        let json = serde_json::to_value(&entry).unwrap();
        let obj = json.as_object().unwrap();
        assert!(obj.contains_key("id"));
        assert!(!obj.contains_key("ipa"));
        assert!(!obj.contains_key("tags"));
    }
}
