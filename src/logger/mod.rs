//! Logger module
//!
//! Structured logging for the service. Every event carries a severity,
//! a message, the fixed service tag, and a timestamp, and is fanned out
//! to three destinations:
//! - console, in a simplified `level: message` format
//! - `combined.log`, one JSON line per event, all severities
//! - `error.log`, one JSON line per event, error severity only
//!
//! The `Logger` is constructed once at startup and shared by reference;
//! there is no global logging state.

mod event;
mod writer;

pub use event::{Level, LogEvent};

use std::io;
use std::path::Path;

use writer::LogFile;

/// Tag attached to every log event identifying this service.
pub const SERVICE_NAME: &str = "calculator-microservice";

/// Handle over the console and file log destinations.
pub struct Logger {
    error_log: LogFile,
    combined_log: LogFile,
}

impl Logger {
    /// Open the log files under `log_dir`, creating the directory when
    /// missing. Fails if the directory or files cannot be opened for
    /// appending.
    pub fn open(log_dir: &Path) -> io::Result<Self> {
        Ok(Self {
            error_log: LogFile::open(&log_dir.join("error.log"))?,
            combined_log: LogFile::open(&log_dir.join("combined.log"))?,
        })
    }

    /// Record an informational event.
    pub fn info(&self, message: impl Into<String>) {
        self.log(Level::Info, message.into());
    }

    /// Record an error event.
    pub fn error(&self, message: impl Into<String>) {
        self.log(Level::Error, message.into());
    }

    fn log(&self, level: Level, message: String) {
        let event = LogEvent::new(level, message);

        match level {
            Level::Info => println!("{}", event.format_simple()),
            Level::Error => eprintln!("{}", event.format_simple()),
        }

        let line = event.to_json();
        if level == Level::Error {
            self.error_log.write_line(&line);
        }
        self.combined_log.write_line(&line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn read_lines(path: &Path) -> Vec<String> {
        fs::read_to_string(path)
            .unwrap_or_default()
            .lines()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn error_events_reach_both_files() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::open(dir.path()).unwrap();

        logger.error("something failed");

        let error_lines = read_lines(&dir.path().join("error.log"));
        let combined_lines = read_lines(&dir.path().join("combined.log"));
        assert_eq!(error_lines.len(), 1);
        assert_eq!(combined_lines.len(), 1);
        assert!(error_lines[0].contains("something failed"));
    }

    #[test]
    fn info_events_skip_the_error_file() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::open(dir.path()).unwrap();

        logger.info("all good");

        assert!(read_lines(&dir.path().join("error.log")).is_empty());
        let combined_lines = read_lines(&dir.path().join("combined.log"));
        assert_eq!(combined_lines.len(), 1);
    }

    #[test]
    fn file_lines_are_structured_json() {
        let dir = tempfile::tempdir().unwrap();
        let logger = Logger::open(dir.path()).unwrap();

        logger.info("hello");

        let lines = read_lines(&dir.path().join("combined.log"));
        let value: serde_json::Value = serde_json::from_str(&lines[0]).unwrap();
        assert_eq!(value["level"], "info");
        assert_eq!(value["message"], "hello");
        assert_eq!(value["service"], SERVICE_NAME);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn open_creates_missing_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs");
        let logger = Logger::open(&nested).unwrap();

        logger.error("boom");

        assert!(nested.join("error.log").exists());
        assert!(nested.join("combined.log").exists());
    }
}
