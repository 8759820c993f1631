//! Vocabulary table and its lookup seams.
//!
//! # Responsibility
//! - Build the symbol index and the lowercased meaning/alias reverse index.
//! - Expose the read-only contracts consumed by the encoder and decoder.
//!
//! # Invariants
//! - A vocabulary is immutable after construction.
//! - Duplicate symbols and shared meaning/alias keys resolve last-loaded-wins.
//! - Every reverse-key overwrite by a different symbol is recorded, never rejected.
//!
//! # See also
//! - `vocab::loader` for reading atom records from disk.

use crate::model::atom::Atom;
use log::debug;
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod loader;

/// Notation format version carried by every vocabulary and envelope.
pub const FORMAT_VERSION: &str = "1.8.0";

pub type DataResult<T> = Result<T, DataError>;

/// Vocabulary source could not be read or parsed into atom records.
#[derive(Debug)]
pub enum DataError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    /// No candidate location yielded a usable vocabulary.
    NotFound {
        searched: Vec<PathBuf>,
    },
}

impl Display for DataError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read atoms file `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "failed to parse atoms JSON: {err}"),
            Self::NotFound { searched } => {
                let joined = searched
                    .iter()
                    .map(|path| path.display().to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "atoms.json not found in standard locations: [{joined}]")
            }
        }
    }
}

impl Error for DataError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::NotFound { .. } => None,
        }
    }
}

impl From<serde_json::Error> for DataError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

/// Natural-language word to symbol lookup used by encoding.
pub trait Lexicon {
    /// Returns the symbol for an already-lowercased word.
    fn symbol_for(&self, word: &str) -> Option<&str>;
}

/// Symbol to canonical meaning lookup used by decoding.
pub trait SymbolTable {
    fn meaning_of(&self, symbol: &str) -> Option<&str>;
}

/// One reverse-index key that was claimed by more than one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReverseCollision {
    /// Lowercased meaning or alias.
    pub key: String,
    /// Symbol that held the key before being overwritten.
    pub shadowed: String,
    /// Symbol that owns the key after loading.
    pub winner: String,
}

/// Loaded atom dictionary with symbol and reverse indices.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    atoms: HashMap<String, Atom>,
    reverse: HashMap<String, String>,
    collisions: Vec<ReverseCollision>,
    replaced_symbols: usize,
}

impl Vocabulary {
    /// Builds both indices from atom records in load order.
    ///
    /// # Invariants
    /// - A later atom with an already-seen symbol replaces the earlier one.
    /// - A later meaning/alias key replaces the earlier symbol for that key.
    pub fn from_atoms(atoms: impl IntoIterator<Item = Atom>) -> Self {
        let mut vocab = Self {
            atoms: HashMap::new(),
            reverse: HashMap::new(),
            collisions: Vec::new(),
            replaced_symbols: 0,
        };

        for atom in atoms {
            for key in atom.lookup_keys() {
                let previous = vocab.reverse.insert(key.clone(), atom.symbol.clone());
                if let Some(shadowed) = previous {
                    if shadowed != atom.symbol {
                        debug!(
                            "event=vocab_reverse_collision module=vocab shadowed={} winner={}",
                            shadowed, atom.symbol
                        );
                        vocab.collisions.push(ReverseCollision {
                            key,
                            shadowed,
                            winner: atom.symbol.clone(),
                        });
                    }
                }
            }
            if vocab.atoms.insert(atom.symbol.clone(), atom).is_some() {
                vocab.replaced_symbols += 1;
            }
        }

        vocab
    }

    /// Parses a JSON array of atom records.
    ///
    /// # Errors
    /// - Returns `DataError::Parse` when the text is not a well-formed atom list.
    pub fn from_json_str(json: &str) -> DataResult<Self> {
        let atoms: Vec<Atom> = serde_json::from_str(json)?;
        Ok(Self::from_atoms(atoms))
    }

    /// Byte-slice variant of [`Vocabulary::from_json_str`].
    pub fn from_json_slice(json: &[u8]) -> DataResult<Self> {
        let atoms: Vec<Atom> = serde_json::from_slice(json)?;
        Ok(Self::from_atoms(atoms))
    }

    /// Returns the fixed notation format version.
    pub fn version(&self) -> &'static str {
        FORMAT_VERSION
    }

    pub fn atom(&self, symbol: &str) -> Option<&Atom> {
        self.atoms.get(symbol)
    }

    pub fn atoms(&self) -> impl Iterator<Item = &Atom> {
        self.atoms.values()
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    /// Reverse-index overwrites observed while loading, in load order.
    pub fn reverse_collisions(&self) -> &[ReverseCollision] {
        &self.collisions
    }

    /// Number of atoms replaced by a later atom with the same symbol.
    pub fn replaced_symbols(&self) -> usize {
        self.replaced_symbols
    }
}

impl Lexicon for Vocabulary {
    fn symbol_for(&self, word: &str) -> Option<&str> {
        self.reverse.get(word).map(String::as_str)
    }
}

impl SymbolTable for Vocabulary {
    fn meaning_of(&self, symbol: &str) -> Option<&str> {
        self.atoms.get(symbol).map(|atom| atom.meaning.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::{DataError, Lexicon, ReverseCollision, SymbolTable, Vocabulary, FORMAT_VERSION};
    use crate::model::atom::Atom;

    #[test]
    fn indexes_meanings_and_aliases_lowercased() {
        let vocab = Vocabulary::from_atoms(vec![
            Atom::new("co", "Consciousness").with_alias("Awareness")
        ]);

        assert_eq!(vocab.symbol_for("consciousness"), Some("co"));
        assert_eq!(vocab.symbol_for("awareness"), Some("co"));
        assert_eq!(vocab.symbol_for("Consciousness"), None);
        assert_eq!(vocab.meaning_of("co"), Some("Consciousness"));
        assert_eq!(vocab.version(), FORMAT_VERSION);
    }

    #[test]
    fn duplicate_symbol_keeps_last_loaded_atom() {
        let vocab = Vocabulary::from_atoms(vec![
            Atom::new("co", "consciousness"),
            Atom::new("co", "cooperation"),
        ]);

        assert_eq!(vocab.len(), 1);
        assert_eq!(vocab.meaning_of("co"), Some("cooperation"));
        assert_eq!(vocab.replaced_symbols(), 1);
    }

    #[test]
    fn shared_key_resolves_to_later_symbol_and_is_recorded() {
        let vocab = Vocabulary::from_atoms(vec![
            Atom::new("lo", "love"),
            Atom::new("lv", "affection").with_alias("love"),
        ]);

        assert_eq!(vocab.symbol_for("love"), Some("lv"));
        assert_eq!(
            vocab.reverse_collisions(),
            &[ReverseCollision {
                key: "love".to_string(),
                shadowed: "lo".to_string(),
                winner: "lv".to_string(),
            }]
        );
    }

    #[test]
    fn alias_repeating_own_meaning_is_not_a_collision() {
        let vocab = Vocabulary::from_atoms(vec![Atom::new("k", "know").with_alias("KNOW")]);
        assert!(vocab.reverse_collisions().is_empty());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = Vocabulary::from_json_str(r#"[{"symbol":"co"}]"#).unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
        assert!(err.to_string().contains("failed to parse atoms JSON"));

        let err = Vocabulary::from_json_slice(b"{not json").unwrap_err();
        assert!(matches!(err, DataError::Parse(_)));
    }
}
