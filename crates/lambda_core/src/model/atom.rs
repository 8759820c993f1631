//! Atom domain model.
//!
//! # Responsibility
//! - Define the record loaded from a vocabulary source.
//! - Derive the natural-language keys an atom contributes to reverse lookup.
//!
//! # Invariants
//! - `symbol` is the unique key within one loaded vocabulary.
//! - `aliases` keep their declared order; order decides reverse-index overwrites.
//! - `domain` and `disambig` are informational and never consumed by the codec.

use serde::{Deserialize, Deserializer, Serialize};

/// Semantic primitive: a short symbol paired with its canonical gloss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    /// Short unique key used inside notation, e.g. `co`.
    pub symbol: String,
    /// Canonical gloss emitted by the decoder, e.g. `consciousness`.
    pub meaning: String,
    /// Optional domain tag such as `code` or `science`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Alternate natural-language strings that also encode to `symbol`.
    #[serde(
        default,
        deserialize_with = "null_as_empty",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub aliases: Vec<String>,
    /// Free-text note for humans curating the vocabulary.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disambig: Option<String>,
}

impl Atom {
    /// Creates an atom with no domain, aliases or disambiguation note.
    pub fn new(symbol: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            meaning: meaning.into(),
            domain: None,
            aliases: Vec::new(),
            disambig: None,
        }
    }

    /// Sets the informational domain tag.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Appends one alias, keeping declaration order.
    pub fn with_alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Sets the disambiguation note.
    pub fn with_disambig(mut self, note: impl Into<String>) -> Self {
        self.disambig = Some(note.into());
        self
    }

    /// Returns the reverse-lookup keys contributed by this atom.
    ///
    /// Lowercased meaning first, then each lowercased alias in declared order.
    pub fn lookup_keys(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(self.meaning.as_str())
            .chain(self.aliases.iter().map(String::as_str))
            .map(str::to_lowercase)
    }
}

/// Accepts an explicit `null` alias list as no aliases.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}
