//! Codec use-case service.
//!
//! # Responsibility
//! - Bundle one encoder and one decoder over a shared vocabulary.
//! - Offer encode/decode/envelope entry points to callers.
//!
//! # Invariants
//! - Both codecs borrow the same vocabulary and never mutate it.

use crate::codec::decoder::Decoder;
use crate::codec::encoder::Encoder;
use crate::codec::phrasebook::Phrasebook;
use crate::codec::stats::CompressionStats;
use crate::envelope::PilotMessage;
use crate::vocab::Vocabulary;

/// Encoder/decoder pair sharing one read-only vocabulary.
pub struct LambdaCodec<'a> {
    vocab: &'a Vocabulary,
    encoder: Encoder<'a, Vocabulary>,
    decoder: Decoder<'a, Vocabulary>,
}

impl<'a> LambdaCodec<'a> {
    /// Creates a codec using the built-in phrasebook.
    pub fn new(vocab: &'a Vocabulary) -> Self {
        Self::with_phrasebook(vocab, Phrasebook::builtin())
    }

    pub fn with_phrasebook(vocab: &'a Vocabulary, phrasebook: Phrasebook) -> Self {
        Self {
            vocab,
            encoder: Encoder::with_phrasebook(vocab, phrasebook),
            decoder: Decoder::new(vocab),
        }
    }

    pub fn vocabulary(&self) -> &'a Vocabulary {
        self.vocab
    }

    pub fn encode(&self, text: &str) -> String {
        self.encoder.encode(text)
    }

    pub fn encode_with_stats(&self, text: &str) -> (String, CompressionStats) {
        self.encoder.encode_with_stats(text)
    }

    pub fn decode(&self, notation: &str) -> String {
        self.decoder.decode(notation)
    }

    /// Wraps existing notation in a transport envelope.
    pub fn for_transport(&self, notation: impl Into<String>) -> PilotMessage {
        PilotMessage::for_transport(notation, &self.decoder)
    }

    /// Encodes natural language and wraps the result in an envelope.
    pub fn translate(&self, text: &str) -> PilotMessage {
        self.for_transport(self.encode(text))
    }
}
