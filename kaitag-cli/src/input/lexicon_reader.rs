//! Lexicon directory loading
//!
//! Entries live as one YAML file per headword under `lexicon/<letter>/`,
//! with one directory per alphabet letter. The reader walks the letter
//! directories in alphabet order and parses each file twice over the same
//! document: into the typed [`Entry`] for the processed exports and into a
//! raw JSON value that mirrors the on-disk record for the archive export.
//!
//! A file that fails to parse or misses a required field is counted as
//! skipped and logged; loading never aborts the batch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::glob;
use kaitag_core::{Alphabet, Entry};

use crate::progress::ProgressReporter;

/// One successfully loaded entry file.
#[derive(Debug)]
pub struct LoadedEntry {
    pub entry: Entry,
    /// The on-disk record, structurally unchanged, for the archive format.
    pub raw: serde_json::Value,
    pub path: PathBuf,
}

/// Result of a full lexicon scan.
#[derive(Debug, Default)]
pub struct LoadReport {
    /// Letter groups in alphabet order; letters without a directory are
    /// absent.
    pub by_letter: Vec<(String, Vec<LoadedEntry>)>,
    pub total: usize,
    pub skipped: usize,
}

/// Reader over a lexicon directory tree.
pub struct LexiconReader<'a> {
    lexicon_dir: &'a Path,
    alphabet: &'a Alphabet,
}

impl<'a> LexiconReader<'a> {
    pub fn new(lexicon_dir: &'a Path, alphabet: &'a Alphabet) -> Self {
        Self {
            lexicon_dir,
            alphabet,
        }
    }

    /// Load every entry, grouped by letter directory in alphabet order.
    pub fn load(&self, progress: &ProgressReporter) -> Result<LoadReport> {
        let mut report = LoadReport::default();

        for letter in self.alphabet.graphemes() {
            let letter_dir = self.lexicon_dir.join(letter);
            if !letter_dir.is_dir() {
                log::warn!("Directory not found for letter '{letter}'");
                continue;
            }

            let mut entries = Vec::new();
            for path in sorted_yaml_files(&letter_dir)? {
                match load_entry_file(&path) {
                    Ok(loaded) => {
                        report.total += 1;
                        entries.push(loaded);
                    }
                    Err(e) => {
                        report.skipped += 1;
                        log::warn!("Skipped {}: {e:#}", path.display());
                    }
                }
                progress.file_completed(&path.display().to_string());
            }
            report.by_letter.push((letter.clone(), entries));
        }

        Ok(report)
    }

    /// Number of entry files, for sizing the progress bar.
    pub fn count_files(&self) -> usize {
        self.alphabet
            .graphemes()
            .iter()
            .map(|letter| {
                sorted_yaml_files(&self.lexicon_dir.join(letter))
                    .map(|files| files.len())
                    .unwrap_or(0)
            })
            .sum()
    }
}

/// All YAML documents under `lexicon_dir`, recursively, with their paths.
/// Used by the validator, which must see every file regardless of the
/// letter-directory convention.
pub fn scan_all_entries(lexicon_dir: &Path) -> Result<Vec<(PathBuf, serde_yaml::Value)>> {
    let pattern = lexicon_dir.join("**").join("*.yaml");
    let pattern = pattern
        .to_str()
        .with_context(|| format!("Non-UTF8 lexicon path: {}", lexicon_dir.display()))?
        .to_string();

    let mut documents = Vec::new();
    for path_result in glob(&pattern).with_context(|| format!("Invalid pattern: {pattern}"))? {
        let path = path_result.context("Error walking lexicon directory")?;
        if !path.is_file() {
            continue;
        }
        let text = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        match serde_yaml::from_str::<serde_yaml::Value>(&text) {
            Ok(value) => documents.push((path, value)),
            Err(e) => log::warn!("Unparseable YAML {}: {e}", path.display()),
        }
    }
    documents.sort_by(|a, b| a.0.cmp(&b.0));
    Ok(documents)
}

fn sorted_yaml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("Failed to read directory {}", dir.display()))?
    {
        let path = entry?.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == "yaml") {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_entry_file(path: &Path) -> Result<LoadedEntry> {
    let text = std::fs::read_to_string(path)?;
    let value: serde_yaml::Value = serde_yaml::from_str(&text).context("invalid YAML")?;
    let entry: Entry =
        serde_yaml::from_value(value.clone()).context("missing required fields")?;
    let raw = serde_json::to_value(&value).context("non-JSON-representable YAML")?;
    Ok(LoadedEntry {
        entry,
        raw,
        path: path.to_path_buf(),
    })
}
