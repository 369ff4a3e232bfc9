//! Input handling module

pub mod lexicon_reader;

pub use lexicon_reader::{scan_all_entries, LexiconReader, LoadReport, LoadedEntry};
