//! Digraph-aware collation keys
//!
//! Headwords cannot be ordered by code point: the alphabet contains
//! multi-character graphemes (`кь`, `хъ`, ...) that collate as single letters
//! with their own rank. The [`Collator`] tokenizes a word by longest grapheme
//! match and maps each token to its rank in the declared alphabet order,
//! yielding a [`SortKey`] whose derived lexicographic `Ord` reproduces the
//! canonical order. Hyphen and space sort before every letter; unknown
//! graphemes sort after the whole alphabet.

use std::collections::HashMap;

use crate::alphabet::Alphabet;
use crate::stress::COMBINING_ACUTE;

/// Rank given to graphemes absent from the alphabet table.
const UNKNOWN_RANK: u32 = u32::MAX;

/// Comparable collation key. Never persisted; compare and drop.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SortKey(Vec<u32>);

impl SortKey {
    /// Token ranks in word order.
    pub fn ranks(&self) -> &[u32] {
        &self.0
    }
}

/// Collation function over one alphabet table.
///
/// Pure and total: the same word always yields the same key, and no input
/// can make key generation fail.
#[derive(Debug, Clone)]
pub struct Collator {
    tokens: Vec<String>,
    ranks: HashMap<String, u32>,
}

impl Collator {
    pub fn new(alphabet: &Alphabet) -> Self {
        let mut ranks = HashMap::new();
        for (i, grapheme) in ["-", " "]
            .into_iter()
            .map(str::to_string)
            .chain(alphabet.graphemes().iter().cloned())
            .enumerate()
        {
            ranks.entry(grapheme).or_insert(i as u32);
        }
        Self {
            tokens: alphabet.tokens().to_vec(),
            ranks,
        }
    }

    /// Split a word into graphemes, longest match first.
    ///
    /// Unmatched characters come through as singleton tokens, so tokenization
    /// never fails; it degrades to per-character tokens for unknown input.
    pub fn tokenize(&self, word: &str) -> Vec<String> {
        let word = word.to_lowercase();
        let mut tokens = Vec::new();
        let mut rest = word.as_str();
        'scan: while let Some(c) = rest.chars().next() {
            for token in &self.tokens {
                if rest.starts_with(token.as_str()) {
                    tokens.push(token.clone());
                    rest = &rest[token.len()..];
                    continue 'scan;
                }
            }
            tokens.push(c.to_string());
            rest = &rest[c.len_utf8()..];
        }
        tokens
    }

    /// Collation key for a headword.
    ///
    /// Combining stress marks are stripped first, so stress annotation never
    /// affects sort order.
    pub fn sort_key(&self, word: &str) -> SortKey {
        let bare: String = word.chars().filter(|&c| c != COMBINING_ACUTE).collect();
        let key = self
            .tokenize(&bare)
            .iter()
            .map(|token| self.ranks.get(token).copied().unwrap_or(UNKNOWN_RANK))
            .collect();
        SortKey(key)
    }
}
