//! Log file writer
//!
//! Thread-safe append-only file destination.

use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

/// An append-only log destination.
pub struct LogFile {
    file: Mutex<File>,
}

impl LogFile {
    /// Open or create the file for appending, creating parent
    /// directories as needed.
    pub fn open(path: &Path) -> io::Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Append one line. Write failures are dropped; a broken log
    /// destination must not fail the request being handled.
    pub fn write_line(&self, line: &str) {
        if let Ok(mut file) = self.file.lock() {
            let _ = writeln!(file, "{line}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_across_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");

        let log = LogFile::open(&path).unwrap();
        log.write_line("first");
        log.write_line("second");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }

    #[test]
    fn reopening_appends_rather_than_truncates() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.log");

        LogFile::open(&path).unwrap().write_line("first");
        LogFile::open(&path).unwrap().write_line("second");

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "first\nsecond\n");
    }
}
