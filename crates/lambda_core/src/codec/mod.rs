//! Natural language <-> notation transcoding.
//!
//! # Responsibility
//! - Encode text into notation via phrasebook, lexicon and literal fallback.
//! - Decode notation into a best-effort gloss.
//!
//! # Invariants
//! - `encode` and `decode` are total: every input yields an output string.
//! - Codecs borrow their tables read-only and keep no per-call state, so one
//!   vocabulary can back any number of concurrent callers.

pub mod decoder;
pub mod encoder;
pub mod phrasebook;
pub mod stats;
pub mod tokenizer;
