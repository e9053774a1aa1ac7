//! Writer construction errors.

use std::io;

use thiserror::Error;

/// Errors raised while building a writer from its spec.
///
/// None of these abort a configuration reload: the resolver reports the
/// error and installs the new configuration without a writer.
#[derive(Debug, Error)]
pub enum WriterError {
    /// No constructor is registered under the requested name.
    #[error("unknown writer: {0:?}")]
    Unknown(String),

    /// A required construction parameter is missing.
    #[error("writer {writer:?} requires parameter {name:?}")]
    MissingParameter {
        /// The writer being constructed.
        writer: String,
        /// The missing parameter.
        name: String,
    },

    /// A parameter value failed to parse.
    #[error("invalid value {value:?} for writer parameter {name:?}")]
    InvalidParameter {
        /// The offending parameter.
        name: String,
        /// The raw value as supplied.
        value: String,
    },

    /// Opening or rotating the output file failed.
    #[error("failed to open log output: {0}")]
    Io(#[from] io::Error),
}
