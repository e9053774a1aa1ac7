//! Console writer.

use std::io::{self, Write};

use wick_core::{Level, LogWriter};

/// Writer that prints entries to the process console.
///
/// `Warning` and `Error` entries go to stderr, everything else to stdout,
/// so diagnostics stay visible when stdout is piped elsewhere.
#[derive(Debug, Default)]
pub struct ConsoleWriter;

impl ConsoleWriter {
    /// Creates a console writer. Takes no parameters.
    pub fn new() -> Self {
        Self
    }
}

impl LogWriter for ConsoleWriter {
    fn write(&self, level: Level, entry: &str) -> io::Result<()> {
        if level >= Level::Warning {
            writeln!(io::stderr().lock(), "{entry}")
        } else {
            writeln!(io::stdout().lock(), "{entry}")
        }
    }

    fn flush(&self) -> io::Result<()> {
        io::stdout().lock().flush()?;
        io::stderr().lock().flush()
    }
}
