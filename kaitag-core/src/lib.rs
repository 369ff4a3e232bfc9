//! Core text algorithms and resources for the Kaitag dictionary.
//!
//! This crate holds the two position-sensitive text components that every
//! derived publication format depends on:
//!
//! - [`stress::mark_stress`] — derives the placement of a combining stress
//!   mark on a Cyrillic headword from its IPA transcription, after removing
//!   predictable (single-vowel) stress.
//! - [`collation::Collator`] — digraph-aware tokenization of headwords into
//!   comparable sort keys that reproduce the lexicon's canonical alphabet
//!   order.
//!
//! Both consume an immutable [`alphabet::Alphabet`] loaded once per run.
//! The crate also carries the serde model of lexicon entries and the
//! bilingual grammar-tag taxonomy used by the exporters.

pub mod alphabet;
pub mod collation;
pub mod entry;
pub mod error;
pub mod stress;
pub mod tags;

pub use alphabet::Alphabet;
pub use collation::{Collator, SortKey};
pub use entry::{Entry, EntryId};
pub use error::{KaitagError, Result};
pub use stress::{mark_stress, COMBINING_ACUTE};
pub use tags::{TagLabel, TagTaxonomy};
