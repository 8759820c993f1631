//! Whole-phrase shortcuts checked before word-level encoding.

use std::collections::HashMap;

/// Built-in idiomatic compressions that do not decompose word by word.
const BUILTIN_PHRASES: &[(&str, &str)] = &[
    ("i think therefore i exist", "!It>Ie"),
    ("do you understand consciousness", "?Uk/co"),
    ("do you know consciousness", "?Uk/co"),
    ("do you know about consciousness", "?Uk/co"),
    ("i understand", "!Iud"),
    ("i know", "!Ik"),
    ("i think", "!It"),
    ("i feel", "!Ife"),
    ("you think", "!Ut"),
    ("you know", "!Uk"),
    ("consciousness exists", "!co/e"),
    ("consciousness", "co"),
    ("artificial intelligence", "AI"),
    ("machine learning", "ML"),
    ("insight transforms into emotion", "!It>Ie"),
    ("resonance between conscious systems", "~cR:cU"),
    ("i accept", "!Iax"),
    ("i reject", "!Irj"),
    ("i approve", "!Iav"),
    ("i deny", "!Idn"),
    ("provide information", "!pv/nf"),
    ("work together", "!wk/tg"),
    ("task complete", "!ta/ct"),
    ("verify data", "!vf/da"),
    ("analyze data", "!an/da"),
    ("important", "im"),
    ("essential", "es"),
    ("critical", "cc"),
];

/// Exact-phrase table keyed by normalized (trimmed, lowercased) text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrasebook {
    entries: HashMap<String, String>,
}

impl Phrasebook {
    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Phrasebook preloaded with the built-in shortcut table.
    pub fn builtin() -> Self {
        let mut book = Self::empty();
        for (phrase, notation) in BUILTIN_PHRASES {
            book.insert(*phrase, *notation);
        }
        book
    }

    /// Adds or replaces a shortcut. The phrase is normalized before storing;
    /// the notation is stored verbatim.
    pub fn insert(&mut self, phrase: impl AsRef<str>, notation: impl Into<String>) {
        self.entries
            .insert(super::encoder::normalize(phrase.as_ref()), notation.into());
    }

    /// Builder-style [`Phrasebook::insert`].
    pub fn with_entry(mut self, phrase: impl AsRef<str>, notation: impl Into<String>) -> Self {
        self.insert(phrase, notation);
        self
    }

    /// Looks up already-normalized text.
    pub fn lookup(&self, normalized: &str) -> Option<&str> {
        self.entries.get(normalized).map(String::as_str)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(phrase, notation)| (phrase.as_str(), notation.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Phrasebook {
    fn default() -> Self {
        Self::builtin()
    }
}
