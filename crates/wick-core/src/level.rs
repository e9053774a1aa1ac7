//! Severity levels for log output thresholds.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Severity threshold controlling which log entries are emitted.
///
/// Levels form a total order from [`Trace`](Level::Trace) (most verbose) to
/// [`Off`](Level::Off). A threshold of `Info` admits `Info`, `Warning`, and
/// `Error` entries; a threshold of `Off` admits nothing.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Finest-grained diagnostic output.
    Trace,
    /// Diagnostic output intended for debugging.
    Debug,
    /// Normal operational messages.
    Info,
    /// Unexpected situations that do not stop the program.
    Warning,
    /// Failures.
    Error,
    /// Disables all output when used as a threshold.
    Off,
}

impl Level {
    /// All levels in ascending order of severity.
    pub const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warning,
        Self::Error,
        Self::Off,
    ];

    /// Returns the uppercase textual name (`"TRACE"`, `"DEBUG"`, …).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Off => "OFF",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a severity level.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity level: {0:?}")]
pub struct ParseLevelError(pub String);

impl FromStr for Level {
    type Err = ParseLevelError;

    /// Parses a level name case-insensitively (`"trace"`, `"Warning"`, …).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| name.eq_ignore_ascii_case(level.as_str()))
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}
