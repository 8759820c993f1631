//! Transport envelope pairing a notation payload with its decoded gloss.
//!
//! # Responsibility
//! - Build immutable four-field records for agent-to-agent transport.
//! - Serialize to and from the flat JSON wire record.
//!
//! # Invariants
//! - `english` is computed once, at construction.
//! - The wire record has exactly the string fields `type`, `version`, `lambda`, `english`.
//! - Deserialization checks structure only; field values are never validated.

use crate::codec::decoder::Decoder;
use crate::vocab::{SymbolTable, FORMAT_VERSION};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Value of the `type` field for notation envelopes.
pub const ENVELOPE_TYPE: &str = "lambda";

pub type FormatResult<T> = Result<T, FormatError>;

/// Envelope wire payload could not be produced or parsed.
#[derive(Debug)]
pub struct FormatError(serde_json::Error);

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "malformed lambda envelope: {}", self.0)
    }
}

impl Error for FormatError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.0)
    }
}

impl From<serde_json::Error> for FormatError {
    fn from(value: serde_json::Error) -> Self {
        Self(value)
    }
}

/// Notation message ready for transport and logging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PilotMessage {
    /// Serialized as `type` to match the wire schema.
    #[serde(rename = "type")]
    kind: String,
    version: String,
    lambda: String,
    english: String,
}

impl PilotMessage {
    /// Builds an envelope, decoding `notation` eagerly.
    pub fn for_transport<T: SymbolTable + ?Sized>(
        notation: impl Into<String>,
        decoder: &Decoder<'_, T>,
    ) -> Self {
        let lambda = notation.into();
        let english = decoder.decode(&lambda);
        Self {
            kind: ENVELOPE_TYPE.to_string(),
            version: FORMAT_VERSION.to_string(),
            lambda,
            english,
        }
    }

    pub fn kind(&self) -> &str {
        &self.kind
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Notation payload.
    pub fn lambda(&self) -> &str {
        &self.lambda
    }

    /// Gloss decoded at construction time.
    pub fn english(&self) -> &str {
        &self.english
    }

    pub fn to_json(&self) -> FormatResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_bytes(&self) -> FormatResult<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    /// Parses a wire record.
    ///
    /// # Errors
    /// - `FormatError` when the input is not a flat object with exactly the four
    ///   string fields.
    pub fn from_json(json: &str) -> FormatResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_slice(json: &[u8]) -> FormatResult<Self> {
        Ok(serde_json::from_slice(json)?)
    }
}

#[cfg(test)]
mod tests {
    use super::{PilotMessage, ENVELOPE_TYPE};
    use crate::codec::decoder::Decoder;
    use crate::model::atom::Atom;
    use crate::vocab::{Vocabulary, FORMAT_VERSION};

    #[test]
    fn for_transport_fills_constant_fields_and_gloss() {
        let vocab = Vocabulary::from_atoms(vec![Atom::new("co", "consciousness")]);
        let decoder = Decoder::new(&vocab);

        let msg = PilotMessage::for_transport("?Uk/co", &decoder);
        assert_eq!(msg.kind(), ENVELOPE_TYPE);
        assert_eq!(msg.version(), FORMAT_VERSION);
        assert_eq!(msg.lambda(), "?Uk/co");
        assert_eq!(msg.english(), "(query) you know consciousness");
    }

    #[test]
    fn wire_record_uses_type_field_name() {
        let vocab = Vocabulary::from_atoms(Vec::new());
        let decoder = Decoder::new(&vocab);
        let msg = PilotMessage::for_transport("!Ik", &decoder);

        let value: serde_json::Value = serde_json::from_str(&msg.to_json().unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "type": "lambda",
                "version": FORMAT_VERSION,
                "lambda": "!Ik",
                "english": "(assertion) I know"
            })
        );
    }
}
