//! Reload error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the file-based reload entry point.
///
/// Neither variant is fatal: by the time the error is returned, a
/// configuration resolved from an empty mapping has already been
/// installed, exactly as if no settings had been supplied.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The settings file does not exist.
    #[error("settings file not found: {0}")]
    NotFound(PathBuf),

    /// The settings file exists but could not be read.
    #[error("failed to read settings file {path}: {source}")]
    Read {
        /// The file that was being read.
        path: PathBuf,
        /// The underlying I/O failure.
        source: io::Error,
    },
}
