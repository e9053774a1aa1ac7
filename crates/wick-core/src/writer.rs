//! Writer trait implemented by log output destinations.

use std::io;
use std::sync::Arc;

use crate::level::Level;

/// Destination that accepts rendered log entries.
///
/// `entry` carries no trailing newline; implementations append their own
/// line terminator. Writers are shared across threads behind an [`Arc`],
/// so every method takes `&self` and implementations guard any interior
/// state themselves.
pub trait LogWriter: Send + Sync {
    /// Writes a single rendered entry at the given severity.
    fn write(&self, level: Level, entry: &str) -> io::Result<()>;

    /// Flushes buffered output to the underlying destination.
    fn flush(&self) -> io::Result<()> {
        Ok(())
    }
}

/// Shared handle to a writer installed in a configuration.
pub type SharedWriter = Arc<dyn LogWriter>;
