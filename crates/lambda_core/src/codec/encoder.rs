//! Natural language to notation encoder.
//!
//! # Responsibility
//! - Resolve text through the phrasebook, then the lexicon, then a literal wrap.
//!
//! # Invariants
//! - Normalization affects matching only; produced symbols keep table casing.
//! - Unresolved words are dropped, never carried into a lexicon encoding.
//! - `encode` never fails.

use super::phrasebook::Phrasebook;
use super::stats::CompressionStats;
use crate::vocab::Lexicon;
use log::debug;

/// Joins symbols produced by word-level encoding.
const COMPONENT_SEPARATOR: &str = ".";

/// Trims surrounding whitespace and lowercases the whole string.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Which rule produced an encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodePath {
    Empty,
    Phrasebook,
    Lexicon,
    Literal,
}

impl EncodePath {
    fn as_str(self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Phrasebook => "phrasebook",
            Self::Lexicon => "lexicon",
            Self::Literal => "literal",
        }
    }
}

/// Encoder over a borrowed lexicon and an owned phrasebook.
pub struct Encoder<'a, L: Lexicon + ?Sized> {
    lexicon: &'a L,
    phrasebook: Phrasebook,
}

impl<'a, L: Lexicon + ?Sized> Encoder<'a, L> {
    /// Creates an encoder using the built-in phrasebook.
    pub fn new(lexicon: &'a L) -> Self {
        Self::with_phrasebook(lexicon, Phrasebook::builtin())
    }

    pub fn with_phrasebook(lexicon: &'a L, phrasebook: Phrasebook) -> Self {
        Self {
            lexicon,
            phrasebook,
        }
    }

    /// Translates natural language into notation.
    ///
    /// # Contract
    /// - Empty input returns an empty string.
    /// - Exact phrasebook match (after normalization) returns its notation.
    /// - Otherwise resolvable words are joined with `.` in input order.
    /// - With no resolvable word the normalized text is returned as `[text]`.
    pub fn encode(&self, text: &str) -> String {
        self.encode_traced(text).0
    }

    /// Encodes and reports the rule that produced the output.
    pub fn encode_traced(&self, text: &str) -> (String, EncodePath) {
        let (notation, path) = self.encode_inner(text);
        debug!(
            "event=encode module=codec path={} input_chars={} output_chars={}",
            path.as_str(),
            text.chars().count(),
            notation.chars().count()
        );
        (notation, path)
    }

    /// Encodes and measures the size of the result against the input.
    pub fn encode_with_stats(&self, text: &str) -> (String, CompressionStats) {
        let notation = self.encode(text);
        let stats = CompressionStats::measure(text, &notation);
        (notation, stats)
    }

    fn encode_inner(&self, text: &str) -> (String, EncodePath) {
        if text.is_empty() {
            return (String::new(), EncodePath::Empty);
        }

        let normalized = normalize(text);

        if let Some(notation) = self.phrasebook.lookup(&normalized) {
            return (notation.to_string(), EncodePath::Phrasebook);
        }

        if let Some(notation) = self.build_from_components(&normalized) {
            return (notation, EncodePath::Lexicon);
        }

        (format!("[{normalized}]"), EncodePath::Literal)
    }

    fn build_from_components(&self, normalized: &str) -> Option<String> {
        let parts: Vec<&str> = normalized
            .split_whitespace()
            .filter_map(|word| self.lexicon.symbol_for(word))
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(COMPONENT_SEPARATOR))
        }
    }
}
