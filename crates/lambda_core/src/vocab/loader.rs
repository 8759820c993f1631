//! Local vocabulary source loading.
//!
//! # Responsibility
//! - Read atom records from a JSON file on disk.
//! - Resolve the conventional search list when no explicit path is given.
//!
//! # Invariants
//! - Loading is a blocking, once-per-process setup step; it never touches the network.
//! - Log lines carry paths, counts and durations only, never vocabulary content.

use super::{DataError, DataResult, Vocabulary};
use log::{error, info, warn};
use std::path::{Path, PathBuf};
use std::time::Instant;

const ATOMS_FILE_NAME: &str = "atoms.json";
const HOME_RELATIVE_ATOMS_PATH: &str = ".openclaw/workspace/skills/lambda-lang/src/atoms.json";

/// Reads and parses one atoms file.
///
/// # Errors
/// - `DataError::Io` when the file cannot be read.
/// - `DataError::Parse` when its content is not a JSON atom list.
///
/// # Side effects
/// - Emits `vocab_load` logging events with duration and status.
pub fn load_vocabulary(path: impl AsRef<Path>) -> DataResult<Vocabulary> {
    let path = path.as_ref();
    let started_at = Instant::now();
    info!(
        "event=vocab_load module=vocab status=start path={}",
        path.display()
    );

    let bytes = match std::fs::read(path) {
        Ok(bytes) => bytes,
        Err(source) => {
            error!(
                "event=vocab_load module=vocab status=error duration_ms={} error_code=read_failed error={}",
                started_at.elapsed().as_millis(),
                source
            );
            return Err(DataError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    match Vocabulary::from_json_slice(&bytes) {
        Ok(vocab) => {
            info!(
                "event=vocab_load module=vocab status=ok duration_ms={} atoms={} replaced_symbols={} reverse_collisions={}",
                started_at.elapsed().as_millis(),
                vocab.len(),
                vocab.replaced_symbols(),
                vocab.reverse_collisions().len()
            );
            Ok(vocab)
        }
        Err(err) => {
            error!(
                "event=vocab_load module=vocab status=error duration_ms={} error_code=parse_failed error={}",
                started_at.elapsed().as_millis(),
                err
            );
            Err(err)
        }
    }
}

/// Conventional atoms file locations, in search order.
///
/// The home-relative entry is omitted when `HOME` is unset.
pub fn standard_locations() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from(ATOMS_FILE_NAME),
        Path::new("src").join(ATOMS_FILE_NAME),
    ];
    if let Some(home) = std::env::var_os("HOME") {
        paths.push(PathBuf::from(home).join(HOME_RELATIVE_ATOMS_PATH));
    }
    paths
}

/// Loads the first candidate that exists and parses.
///
/// Missing files are skipped silently; unreadable or malformed files are
/// logged and skipped so a later candidate can still win.
///
/// # Errors
/// - `DataError::NotFound` listing every candidate when none succeeds.
pub fn load_first_available(paths: &[PathBuf]) -> DataResult<Vocabulary> {
    for path in paths {
        if !path.is_file() {
            continue;
        }
        match load_vocabulary(path) {
            Ok(vocab) => return Ok(vocab),
            Err(err) => warn!(
                "event=vocab_candidate_skipped module=vocab status=skipped path={} error={}",
                path.display(),
                err
            ),
        }
    }

    Err(DataError::NotFound {
        searched: paths.to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::{standard_locations, ATOMS_FILE_NAME};
    use std::path::PathBuf;

    #[test]
    fn standard_locations_start_with_working_directory_candidates() {
        let paths = standard_locations();
        assert_eq!(paths[0], PathBuf::from(ATOMS_FILE_NAME));
        assert_eq!(paths[1], PathBuf::from("src").join(ATOMS_FILE_NAME));
        assert!(paths.len() <= 3);
    }
}
