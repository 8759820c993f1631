//! Core transcoder between natural language and the compact lambda notation.
//! This crate owns the vocabulary model, the codecs and the transport envelope.

pub mod codec;
pub mod envelope;
pub mod grammar;
pub mod logging;
pub mod model;
pub mod service;
pub mod vocab;

pub use codec::decoder::Decoder;
pub use codec::encoder::{normalize, EncodePath, Encoder};
pub use codec::phrasebook::Phrasebook;
pub use codec::stats::CompressionStats;
pub use envelope::{FormatError, FormatResult, PilotMessage, ENVELOPE_TYPE};
pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::atom::Atom;
pub use service::codec_service::LambdaCodec;
pub use vocab::loader::{load_first_available, load_vocabulary, standard_locations};
pub use vocab::{
    DataError, DataResult, Lexicon, ReverseCollision, SymbolTable, Vocabulary, FORMAT_VERSION,
};
