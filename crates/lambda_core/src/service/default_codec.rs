//! Process-wide default codec.
//!
//! # Responsibility
//! - Hold one vocabulary installed at startup for callers without wiring.
//! - Provide free `encode`/`decode` functions over it.
//!
//! # Invariants
//! - The default vocabulary is installed at most once per process.
//! - Before installation, `encode`/`decode` return their input unchanged.
//! - Installation never panics.

use super::codec_service::LambdaCodec;
use crate::vocab::loader::{load_first_available, load_vocabulary, standard_locations};
use crate::vocab::{DataResult, Vocabulary};
use log::{info, warn};
use once_cell::sync::OnceCell;
use std::path::Path;

static DEFAULT_VOCABULARY: OnceCell<Vocabulary> = OnceCell::new();
static DEFAULT_CODEC: OnceCell<LambdaCodec<'static>> = OnceCell::new();

/// Installs `vocab` as the process default.
///
/// Returns `false` and drops `vocab` when a default is already installed.
pub fn init_default(vocab: Vocabulary) -> bool {
    let atoms = vocab.len();
    match DEFAULT_VOCABULARY.set(vocab) {
        Ok(()) => {
            info!(
                "event=default_codec_init module=service status=ok atoms={}",
                atoms
            );
            true
        }
        Err(_) => {
            warn!("event=default_codec_init module=service status=skipped reason=already_initialized");
            false
        }
    }
}

/// Loads `path` and installs it unless a default already exists.
///
/// # Errors
/// - Returns the loader's `DataError` when the file cannot be used.
pub fn init_default_from_path(path: impl AsRef<Path>) -> DataResult<()> {
    if is_default_initialized() {
        return Ok(());
    }
    init_default(load_vocabulary(path)?);
    Ok(())
}

/// Searches [`standard_locations`] and installs the first usable vocabulary.
///
/// # Errors
/// - `DataError::NotFound` when no location holds a usable atoms file.
pub fn init_default_from_standard_locations() -> DataResult<()> {
    if is_default_initialized() {
        return Ok(());
    }
    init_default(load_first_available(&standard_locations())?);
    Ok(())
}

pub fn is_default_initialized() -> bool {
    DEFAULT_VOCABULARY.get().is_some()
}

/// Returns the default codec, or `None` before initialization.
pub fn default_codec() -> Option<&'static LambdaCodec<'static>> {
    let vocab = DEFAULT_VOCABULARY.get()?;
    Some(DEFAULT_CODEC.get_or_init(|| LambdaCodec::new(vocab)))
}

/// Encodes with the default codec; returns `text` unchanged when none is installed.
pub fn encode(text: &str) -> String {
    match default_codec() {
        Some(codec) => codec.encode(text),
        None => text.to_string(),
    }
}

/// Decodes with the default codec; returns `notation` unchanged when none is installed.
pub fn decode(notation: &str) -> String {
    match default_codec() {
        Some(codec) => codec.decode(notation),
        None => notation.to_string(),
    }
}
