//! Plain file writer.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::Mutex;

use wick_core::{Level, LogWriter};

/// Writer that streams entries into a single log file.
///
/// The file is created when the writer is constructed, truncating any
/// previous contents. Each entry is flushed immediately so the log stays
/// complete if the process dies.
#[derive(Debug)]
pub struct FileWriter {
    path: PathBuf,
    file: Mutex<BufWriter<File>>,
}

impl FileWriter {
    /// Creates the log file, truncating an existing one.
    ///
    /// An unwritable path is a construction failure; the caller must not
    /// end up holding a half-open writer.
    pub fn create(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = File::create(&path)?;
        Ok(Self {
            path,
            file: Mutex::new(BufWriter::new(file)),
        })
    }

    /// The path this writer logs to.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LogWriter for FileWriter {
    fn write(&self, _level: Level, entry: &str) -> io::Result<()> {
        let mut file = self.file.lock();
        writeln!(file, "{entry}")?;
        file.flush()
    }

    fn flush(&self) -> io::Result<()> {
        self.file.lock().flush()
    }
}
