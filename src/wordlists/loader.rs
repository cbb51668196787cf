//! Data file loading utilities
//!
//! A data file that does not exist is treated as empty data; a file that
//! exists but cannot be read is a fatal start-up error naming the path.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A data file exists but could not be read
#[derive(Debug, Error)]
#[error("Failed to load {kind} {}: {source}", .path.display())]
pub struct LoadError {
    pub kind: &'static str,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Read a whole data file, or `None` if it does not exist
///
/// # Errors
///
/// Returns `LoadError` if the file exists but cannot be read.
pub fn read_optional(path: &Path, kind: &'static str) -> Result<Option<String>, LoadError> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            log::warn!("{kind} {} not found, using empty data", path.display());
            Ok(None)
        }
        Err(source) => Err(LoadError {
            kind,
            path: path.to_path_buf(),
            source,
        }),
    }
}
