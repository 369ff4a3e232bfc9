//! Export command implementation
//!
//! Loads the alphabet, taxonomy and lexicon once, sorts every letter group
//! with the collator, and hands the shared groups to one writer per
//! requested format. Skipped entries never abort the run, but they do make
//! the final exit status non-zero.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use kaitag_core::{Alphabet, Collator, TagTaxonomy};

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{LexiconReader, LoadReport};
use crate::output::{ArchiveJsonWriter, CsvWriter, LetterGroup, LexiconWriter, WebJsonWriter};
use crate::progress::ProgressReporter;
use crate::transform::Transformer;

const WEB_FILENAME: &str = "dictionary-web.json";
const ARCHIVE_FILENAME: &str = "dictionary-archive.json";
const CSV_FILENAME: &str = "dictionary.csv";

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Format to build
    #[arg(short, long, value_enum, default_value = "all")]
    pub format: ExportFormat,

    /// Output file (or directory for --format all); defaults under export/
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Lexicon root directory (one subdirectory per letter)
    #[arg(long, value_name = "DIR")]
    pub lexicon: Option<PathBuf>,

    /// Data directory holding alphabet.yaml and tags.yaml
    #[arg(long, value_name = "DIR")]
    pub data: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Buildable publication formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    /// Per-letter JSON for the static website
    Web,
    /// Complete unprocessed JSON archive
    Archive,
    /// CSV for linguistic researchers
    Csv,
    /// All of the above, with default filenames
    All,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        let config = CliConfig::load(self.config.as_deref())?;
        let lexicon_dir = self.lexicon.clone().unwrap_or_else(|| config.paths.lexicon.clone());
        let data_dir = self.data.clone().unwrap_or_else(|| config.paths.data.clone());

        let alphabet_path = data_dir.join("alphabet.yaml");
        let alphabet = Alphabet::from_file(&alphabet_path)
            .map_err(|e| CliError::MissingResource(format!("{}: {e}", alphabet_path.display())))?;
        let tags_path = data_dir.join("tags.yaml");
        let taxonomy = TagTaxonomy::from_file(&tags_path)
            .map_err(|e| CliError::MissingResource(format!("{}: {e}", tags_path.display())))?;
        let collator = Collator::new(&alphabet);

        let reader = LexiconReader::new(&lexicon_dir, &alphabet);
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(reader.count_files() as u64);
        let report = reader.load(&progress)?;
        progress.finish();

        let groups = sorted_groups(&report, &collator);

        let export_dir = config.paths.export.clone();
        let formats = match self.format {
            ExportFormat::All => vec![ExportFormat::Web, ExportFormat::Archive, ExportFormat::Csv],
            single => vec![single],
        };

        for format in formats {
            let path = self.output_path(format, &export_dir);
            self.write_format(format, &groups, &path, &alphabet, &taxonomy, &lexicon_dir, &config)?;

            if !self.quiet {
                let per_letter = matches!(format, ExportFormat::Web | ExportFormat::Archive);
                print_stats(&report, &path, per_letter.then_some(groups.as_slice()));
            }
        }

        if report.skipped > 0 {
            return Err(
                CliError::ExportError(format!("{} entries skipped", report.skipped)).into(),
            );
        }
        Ok(())
    }

    fn output_path(&self, format: ExportFormat, export_dir: &Path) -> PathBuf {
        let default_name = match format {
            ExportFormat::Web => WEB_FILENAME,
            ExportFormat::Archive => ARCHIVE_FILENAME,
            ExportFormat::Csv => CSV_FILENAME,
            ExportFormat::All => unreachable!(),
        };
        match (&self.output, self.format) {
            // With --format all, --output names the directory.
            (Some(dir), ExportFormat::All) => dir.join(default_name),
            (Some(file), _) => file.clone(),
            (None, _) => export_dir.join(default_name),
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn write_format(
        &self,
        format: ExportFormat,
        groups: &[LetterGroup],
        path: &Path,
        alphabet: &Alphabet,
        taxonomy: &TagTaxonomy,
        lexicon_dir: &Path,
        config: &CliConfig,
    ) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut out = BufWriter::new(file);

        match format {
            ExportFormat::Web => {
                let transformer = Transformer::new(alphabet, taxonomy, lexicon_dir);
                WebJsonWriter::new(transformer, config.output.pretty_json)
                    .write(groups, &mut out)?;
            }
            ExportFormat::Archive => {
                ArchiveJsonWriter::new(config.output.pretty_json).write(groups, &mut out)?;
            }
            ExportFormat::Csv => {
                CsvWriter::new(alphabet, taxonomy).write(groups, &mut out)?;
            }
            ExportFormat::All => unreachable!(),
        }
        Ok(())
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}

/// Sort each letter's entries by collation key. The sort is stable, so
/// entries with equal keys keep their filename order.
fn sorted_groups<'a>(report: &'a LoadReport, collator: &Collator) -> Vec<LetterGroup<'a>> {
    report
        .by_letter
        .iter()
        .map(|(letter, entries)| {
            let mut sorted: Vec<_> = entries.iter().collect();
            sorted.sort_by_cached_key(|loaded| collator.sort_key(&loaded.entry.headword));
            LetterGroup {
                letter,
                entries: sorted,
            }
        })
        .collect()
}

fn print_stats(report: &LoadReport, path: &Path, groups: Option<&[LetterGroup]>) {
    println!();
    println!("Conversion complete!");
    println!("Total entries: {}", report.total);
    println!("Skipped entries: {}", report.skipped);
    println!("Output written to: {}", path.display());

    if let Some(groups) = groups {
        println!();
        println!("Entries per letter:");
        for group in groups {
            println!("  {}: {}", group.letter, group.entries.len());
        }
    }
}
