//! CSV writer for linguistic researchers
//!
//! UTF-8 with a byte-order mark so spreadsheet tools detect the encoding.
//! Columns: `letter, tags, headword, eng, rus, forms, variants`. The letter
//! column is populated only on separator rows between alphabetic groups;
//! multi-valued cells (tags, translations, forms, variants) are
//! newline-joined inside a single cell.

use anyhow::Result;
use std::io::Write;

use kaitag_core::{mark_stress, Alphabet, Entry, TagTaxonomy};

use super::{LetterGroup, LexiconWriter};

const HEADER: [&str; 7] = ["letter", "tags", "headword", "eng", "rus", "forms", "variants"];

/// CSV formatter
pub struct CsvWriter<'a> {
    alphabet: &'a Alphabet,
    taxonomy: &'a TagTaxonomy,
}

impl<'a> CsvWriter<'a> {
    pub fn new(alphabet: &'a Alphabet, taxonomy: &'a TagTaxonomy) -> Self {
        Self { alphabet, taxonomy }
    }

    /// Tags as stacked bilingual lines: English labels, newline, Russian.
    fn tags_cell(&self, entry: &Entry) -> String {
        let mapped = self.taxonomy.map_tags(&entry.tags);
        if mapped.is_empty() {
            return String::new();
        }
        let en: Vec<&str> = mapped.iter().map(|label| label.en.as_str()).collect();
        let ru: Vec<&str> = mapped.iter().map(|label| label.ru.as_str()).collect();
        format!("{}\n{}", en.join(" "), ru.join(" "))
    }

    /// Stress-marked headword with the IPA stacked beneath it, if any.
    fn headword_cell(&self, entry: &Entry) -> String {
        let marked = mark_stress(&entry.headword, entry.ipa.as_deref(), self.alphabet);
        match entry.ipa.as_deref().filter(|s| !s.is_empty()) {
            Some(ipa) => format!("{marked}\n{ipa}"),
            None => marked,
        }
    }
}

fn english(t: &kaitag_core::entry::BilingualText) -> Option<&String> {
    t.en.as_ref()
}

fn russian(t: &kaitag_core::entry::BilingualText) -> Option<&String> {
    t.ru.as_ref()
}

/// All translations of one language, newline-joined.
fn definitions_cell(
    entry: &Entry,
    lang: for<'a> fn(&'a kaitag_core::entry::BilingualText) -> Option<&'a String>,
) -> String {
    let translations: Vec<&str> = entry
        .definitions
        .iter()
        .filter_map(|d| d.translation.as_ref())
        .filter_map(lang)
        .filter(|t| !t.is_empty())
        .map(String::as_str)
        .collect();
    translations.join("\n")
}

impl LexiconWriter for CsvWriter<'_> {
    fn write(&mut self, groups: &[LetterGroup], out: &mut dyn Write) -> Result<()> {
        // Byte-order mark first, before the csv writer takes over.
        out.write_all("\u{feff}".as_bytes())?;

        let mut csv = csv::Writer::from_writer(out);
        csv.write_record(HEADER)?;

        for group in groups {
            csv.write_record([group.letter, "", "", "", "", "", ""])?;
            for loaded in &group.entries {
                let entry = &loaded.entry;
                csv.write_record([
                    String::new(),
                    self.tags_cell(entry),
                    self.headword_cell(entry),
                    definitions_cell(entry, english),
                    definitions_cell(entry, russian),
                    entry.simplified_forms().join("\n"),
                    entry.variant_texts().join("\n"),
                ])?;
            }
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::LoadedEntry;
    use std::path::PathBuf;

    const ALPHABET: &str = r#"
alphabet:
  а: { type: vowel, ipa: a }
  б: { type: consonant }
  л: { type: consonant }
  р: { type: consonant }
  у: { type: vowel, ipa: u }
  хъ: { type: consonant }
"#;

    const TAXONOMY: &str = "grammar:\n  n: { en: noun, ru: сущ. }\n";

    fn loaded(yaml: &str) -> LoadedEntry {
        let value: serde_yaml::Value = serde_yaml::from_str(yaml).unwrap();
        LoadedEntry {
            entry: serde_yaml::from_value(value.clone()).unwrap(),
            raw: serde_json::to_value(&value).unwrap(),
            path: PathBuf::from("test.yaml"),
        }
    }

    #[test]
    fn test_csv_layout() {
        let alphabet = Alphabet::from_yaml_str(ALPHABET).unwrap();
        let taxonomy = TagTaxonomy::from_yaml_str(TAXONOMY).unwrap();

        let entry = loaded(
            "id: w1\nheadword: бурул\nipa: buˈrul\ntags: [n]\ndefinitions:\n\
             \x20 - translation: { en: drill, ru: сверло }\n",
        );
        let groups = vec![LetterGroup {
            letter: "б",
            entries: vec![&entry],
        }];

        let mut writer = CsvWriter::new(&alphabet, &taxonomy);
        let mut buffer = Vec::new();
        writer.write(&groups, &mut buffer).unwrap();

        // BOM comes first.
        assert_eq!(&buffer[..3], [0xEF, 0xBB, 0xBF]);

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.trim_start_matches('\u{feff}').lines();
        assert_eq!(
            lines.next().unwrap(),
            "letter,tags,headword,eng,rus,forms,variants"
        );
        // Separator row carries only the letter.
        assert_eq!(lines.next().unwrap(), "б,,,,,,");

        // Multi-line cells are quoted; the headword cell stacks the marked
        // headword over the IPA.
        assert!(text.contains("буру\u{301}л\nbuˈrul"));
        assert!(text.contains("noun\nсущ."));
        assert!(text.contains("drill"));
        assert!(text.contains("сверло"));
    }

    #[test]
    fn test_entry_without_ipa_has_plain_headword_cell() {
        let alphabet = Alphabet::from_yaml_str(ALPHABET).unwrap();
        let taxonomy = TagTaxonomy::from_yaml_str(TAXONOMY).unwrap();
        let writer = CsvWriter::new(&alphabet, &taxonomy);

        let entry = loaded("id: w1\nheadword: ахъ\ndefinitions: []\n");
        assert_eq!(writer.headword_cell(&entry.entry), "ахъ");
    }
}
