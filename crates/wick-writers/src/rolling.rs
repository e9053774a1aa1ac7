//! Rolling file writer with numbered backups.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use wick_core::{Level, LogWriter};

use crate::file::FileWriter;

/// Writer that starts a fresh log file on every construction, keeping the
/// previous contents as numbered backups (`app.log.1`, `app.log.2`, …).
///
/// Rotation happens once, when the writer is built: every existing backup
/// shifts up by one and the previous log file becomes backup 1. After the
/// shift, `max_backups` caps how many numbered backups survive (0 keeps
/// them all) and `max_files` caps the total file count including the
/// active file (0 = unbounded); excess backups are pruned oldest-first,
/// i.e. highest index first.
#[derive(Debug)]
pub struct RollingFileWriter {
    inner: FileWriter,
    max_backups: usize,
    max_files: usize,
}

impl RollingFileWriter {
    /// Rotates existing files, then opens a fresh log file at `path`.
    pub fn create(path: impl AsRef<Path>, max_backups: usize, max_files: usize) -> io::Result<Self> {
        let path = path.as_ref();
        rotate(path, max_backups, max_files)?;
        Ok(Self {
            inner: FileWriter::create(path)?,
            max_backups,
            max_files,
        })
    }

    /// The path of the active log file.
    pub fn path(&self) -> &Path {
        self.inner.path()
    }

    /// Cap on the number of numbered backups (0 = uncapped).
    pub fn max_backups(&self) -> usize {
        self.max_backups
    }

    /// Cap on the total file count including the active file (0 = unbounded).
    pub fn max_files(&self) -> usize {
        self.max_files
    }
}

impl LogWriter for RollingFileWriter {
    fn write(&self, level: Level, entry: &str) -> io::Result<()> {
        self.inner.write(level, entry)
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Returns the path of backup number `index` for a log file.
fn backup_path(path: &Path, index: usize) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(format!(".{index}"));
    PathBuf::from(name)
}

/// Shifts the current file and its backups up by one slot, then prunes
/// everything beyond the configured caps.
fn rotate(path: &Path, max_backups: usize, max_files: usize) -> io::Result<()> {
    if path.exists() {
        let mut index = 1;
        while backup_path(path, index).exists() {
            index += 1;
        }
        while index > 1 {
            fs::rename(backup_path(path, index - 1), backup_path(path, index))?;
            index -= 1;
        }
        fs::rename(path, backup_path(path, 1))?;
    }

    let mut cap = usize::MAX;
    if max_backups > 0 {
        cap = max_backups;
    }
    if max_files > 0 {
        cap = cap.min(max_files.saturating_sub(1));
    }
    if cap < usize::MAX {
        let mut index = cap + 1;
        while backup_path(path, index).exists() {
            fs::remove_file(backup_path(path, index))?;
            index += 1;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn read(path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }

    #[test]
    fn first_construction_starts_a_fresh_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        let writer = RollingFileWriter::create(&path, 0, 0).unwrap();
        writer.write(Level::Info, "run 1").unwrap();

        assert_eq!(read(&path), "run 1\n");
        assert!(!backup_path(&path, 1).exists());
    }

    #[test]
    fn reconstruction_shifts_previous_runs_into_backups() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        for run in 1..=3 {
            let writer = RollingFileWriter::create(&path, 0, 0).unwrap();
            writer.write(Level::Info, &format!("run {run}")).unwrap();
        }

        assert_eq!(read(&path), "run 3\n");
        assert_eq!(read(&backup_path(&path, 1)), "run 2\n");
        assert_eq!(read(&backup_path(&path, 2)), "run 1\n");
    }

    #[test]
    fn max_backups_prunes_the_oldest() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        for run in 1..=4 {
            let writer = RollingFileWriter::create(&path, 2, 0).unwrap();
            writer.write(Level::Info, &format!("run {run}")).unwrap();
        }

        assert_eq!(read(&path), "run 4\n");
        assert_eq!(read(&backup_path(&path, 1)), "run 3\n");
        assert_eq!(read(&backup_path(&path, 2)), "run 2\n");
        assert!(!backup_path(&path, 3).exists());
    }

    #[test]
    fn max_files_caps_the_total_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        for run in 1..=3 {
            let writer = RollingFileWriter::create(&path, 0, 2).unwrap();
            writer.write(Level::Info, &format!("run {run}")).unwrap();
        }

        // Two files total: the active log plus one backup.
        assert_eq!(read(&path), "run 3\n");
        assert_eq!(read(&backup_path(&path, 1)), "run 2\n");
        assert!(!backup_path(&path, 2).exists());
    }

    #[test]
    fn max_files_of_one_keeps_only_the_active_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("app.log");

        for run in 1..=2 {
            let writer = RollingFileWriter::create(&path, 0, 1).unwrap();
            writer.write(Level::Info, &format!("run {run}")).unwrap();
        }

        assert_eq!(read(&path), "run 2\n");
        assert!(!backup_path(&path, 1).exists());
    }

    #[test]
    fn unwritable_path_fails_construction() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("app.log");
        assert!(RollingFileWriter::create(&path, 0, 0).is_err());
    }
}
