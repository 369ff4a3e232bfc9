//! Alphabet table loading and derived lookups
//!
//! The alphabet resource is a YAML mapping from grapheme to classification,
//! in canonical collation order:
//!
//! ```yaml
//! alphabet:
//!   а: { type: vowel, ipa: a }
//!   б: { type: consonant }
//!   кь: { type: consonant }
//! ```
//!
//! From it three things are derived: the ordered grapheme list (collation
//! order), a longest-match-first token inventory for tokenization, and the
//! IPA-to-grapheme vowel map consumed by stress placement.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{KaitagError, Result};

/// Classification of one grapheme in the alphabet resource.
#[derive(Debug, Clone, Deserialize)]
pub struct GraphemeInfo {
    #[serde(rename = "type")]
    pub kind: GraphemeKind,
    /// IPA symbol, required for vowels, absent for consonants.
    #[serde(default)]
    pub ipa: Option<String>,
}

/// Whether a grapheme is a vowel or a consonant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GraphemeKind {
    Vowel,
    Consonant,
}

#[derive(Debug, Deserialize)]
struct AlphabetFile {
    alphabet: serde_yaml::Mapping,
}

/// Immutable alphabet table, loaded once per run and passed by reference
/// into the components that need it.
#[derive(Debug, Clone)]
pub struct Alphabet {
    graphemes: Vec<String>,
    tokens: Vec<String>,
    vowel_map: HashMap<char, char>,
}

impl Alphabet {
    /// Parse an alphabet table from YAML text.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let file: AlphabetFile = serde_yaml::from_str(yaml)
            .map_err(|e| KaitagError::Resource(format!("alphabet: {e}")))?;
        Self::from_table(file.alphabet)
    }

    /// Load an alphabet table from a YAML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let file: AlphabetFile = serde_yaml::from_str(&text).map_err(|e| KaitagError::Parse {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_table(file.alphabet).map_err(|e| match e {
            KaitagError::Resource(msg) => {
                KaitagError::Resource(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    fn from_table(table: serde_yaml::Mapping) -> Result<Self> {
        let mut graphemes = Vec::with_capacity(table.len());
        let mut vowel_map = HashMap::new();

        // The YAML mapping preserves definition order, which is the
        // collation order of the lexicon.
        for (key, value) in &table {
            let grapheme = key
                .as_str()
                .ok_or_else(|| {
                    KaitagError::Resource(format!("alphabet: non-string grapheme key {key:?}"))
                })?
                .to_string();
            let info: GraphemeInfo = serde_yaml::from_value(value.clone()).map_err(|e| {
                KaitagError::Resource(format!("alphabet: grapheme '{grapheme}': {e}"))
            })?;

            if info.kind == GraphemeKind::Vowel {
                let ipa = info.ipa.as_deref().ok_or_else(|| {
                    KaitagError::Resource(format!(
                        "alphabet: vowel grapheme '{grapheme}' has no ipa symbol"
                    ))
                })?;
                match (single_char(ipa), single_char(&grapheme)) {
                    (Some(symbol), Some(letter)) => {
                        // Duplicate IPA symbols overwrite: last definition
                        // wins, matching the lexicon's historical convention.
                        vowel_map.insert(symbol, letter);
                    }
                    _ => {
                        // Stress placement only supports single-character
                        // vowel graphemes and symbols.
                        log::warn!(
                            "alphabet: vowel '{grapheme}' (ipa '{ipa}') is multi-character, \
                             excluded from stress placement"
                        );
                    }
                }
            }

            graphemes.push(grapheme);
        }

        if graphemes.is_empty() {
            return Err(KaitagError::Resource("alphabet: empty table".into()));
        }

        let tokens = build_tokens(&graphemes);

        Ok(Self {
            graphemes,
            tokens,
            vowel_map,
        })
    }

    /// Graphemes in definition (collation) order.
    pub fn graphemes(&self) -> &[String] {
        &self.graphemes
    }

    /// Token inventory for longest-match tokenization: `-`, space, and all
    /// graphemes, sorted by descending character length (stable).
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// IPA symbol to orthographic vowel grapheme.
    pub fn vowel_map(&self) -> &HashMap<char, char> {
        &self.vowel_map
    }

    /// First letter of a word, respecting digraphs.
    ///
    /// Falls back to the word's first character when no grapheme matches.
    pub fn first_letter(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        for token in &self.tokens {
            if lower.starts_with(token.as_str()) {
                return token.clone();
            }
        }
        log::warn!("unknown first letter in \"{word}\"");
        lower.chars().take(1).collect()
    }
}

fn single_char(s: &str) -> Option<char> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

fn build_tokens(graphemes: &[String]) -> Vec<String> {
    let mut tokens: Vec<String> = ["-", " "]
        .into_iter()
        .map(str::to_string)
        .chain(graphemes.iter().cloned())
        .collect();
    // Stable sort keeps definition order among equal lengths, so trigraphs
    // are tried before digraphs before single letters.
    tokens.sort_by_key(|t| std::cmp::Reverse(t.chars().count()));
    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALPHABET: &str = r#"
alphabet:
  а: { type: vowel, ipa: a }
  б: { type: consonant }
  и: { type: vowel, ipa: i }
  к: { type: consonant }
  кь: { type: consonant }
  л: { type: consonant }
  р: { type: consonant }
  у: { type: vowel, ipa: u }
  х: { type: consonant }
  хъ: { type: consonant }
  ъ: { type: consonant }
"#;

    #[test]
    fn graphemes_keep_definition_order() {
        let alphabet = Alphabet::from_yaml_str(ALPHABET).unwrap();
        assert_eq!(
            alphabet.graphemes(),
            ["а", "б", "и", "к", "кь", "л", "р", "у", "х", "хъ", "ъ"]
        );
    }

    #[test]
    fn tokens_are_longest_first() {
        let alphabet = Alphabet::from_yaml_str(ALPHABET).unwrap();
        let tokens = alphabet.tokens();
        // Digraphs first (definition order among them), then single chars
        // with hyphen and space leading.
        assert_eq!(&tokens[..2], ["кь", "хъ"]);
        assert_eq!(&tokens[2..4], ["-", " "]);
    }

    #[test]
    fn vowel_map_is_ipa_to_grapheme() {
        let alphabet = Alphabet::from_yaml_str(ALPHABET).unwrap();
        assert_eq!(alphabet.vowel_map().get(&'a'), Some(&'а'));
        assert_eq!(alphabet.vowel_map().get(&'u'), Some(&'у'));
        assert_eq!(alphabet.vowel_map().get(&'x'), None);
    }

    #[test]
    fn duplicate_ipa_symbol_last_wins() {
        let yaml = r#"
alphabet:
  е: { type: vowel, ipa: e }
  э: { type: vowel, ipa: e }
"#;
        let alphabet = Alphabet::from_yaml_str(yaml).unwrap();
        assert_eq!(alphabet.vowel_map().get(&'e'), Some(&'э'));
    }

    #[test]
    fn first_letter_respects_digraphs() {
        let alphabet = Alphabet::from_yaml_str(ALPHABET).unwrap();
        assert_eq!(alphabet.first_letter("хъара"), "хъ");
        assert_eq!(alphabet.first_letter("кьал"), "кь");
        assert_eq!(alphabet.first_letter("бикӏ"), "б");
    }

    #[test]
    fn first_letter_falls_back_on_unknown() {
        let alphabet = Alphabet::from_yaml_str(ALPHABET).unwrap();
        assert_eq!(alphabet.first_letter("zигу"), "z");
    }

    #[test]
    fn vowel_without_ipa_is_rejected() {
        let yaml = "alphabet:\n  а: { type: vowel }\n";
        assert!(Alphabet::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn empty_table_is_rejected() {
        assert!(Alphabet::from_yaml_str("alphabet: {}\n").is_err());
    }

    #[test]
    fn broken_file_yields_parse_error_with_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("alphabet.yaml");
        std::fs::write(&path, "alphabet: [unclosed\n").unwrap();

        let err = Alphabet::from_file(&path).unwrap_err();
        assert!(matches!(err, KaitagError::Parse { .. }));
        assert!(err.to_string().contains("alphabet.yaml"));
    }
}
