//! The audit log.
//!
//! Besides the operational logging, the service keeps a plain-text trail of
//! the performed operations: one line per significant operation, appended to
//! `<log_dir>/log.log`:
//!
//! ```text
//! 2024-03-01 10:15:42 Showed list of tasks
//! 2024-03-01 10:15:59 Task 7 was added
//! ```
//!
//! No rotation, no levels, no structured fields.
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Name of the audit file inside the configured log directory.
const AUDIT_FILE_NAME: &str = "log.log";

/// An append-only audit log backed by a plain-text file.
///
/// The file handle is opened once and kept for the lifetime of the service.
/// Writes are serialized behind a mutex so concurrent operations cannot
/// interleave their lines.
pub struct AuditLog {
    file: Mutex<File>,
}

impl AuditLog {
    /// It opens (or creates) the audit file in append mode.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the file cannot be opened, for example when the
    /// log directory does not exist.
    pub fn open(log_dir: &str) -> Result<Self, std::io::Error> {
        let file = OpenOptions::new().create(true).append(true).open(Self::file_path(log_dir))?;

        Ok(Self { file: Mutex::new(file) })
    }

    /// It appends one timestamped line to the audit file.
    ///
    /// The line format is `YYYY-MM-DD HH:MM:SS <message>`, using the local
    /// date and time.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the line cannot be written.
    ///
    /// # Panics
    ///
    /// Will panic if the internal mutex is poisoned.
    pub fn append(&self, message: &str) -> Result<(), std::io::Error> {
        let timestamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let entry = format!("{timestamp} {message}\n");

        let mut file = self.file.lock().expect("the audit log mutex should not be poisoned");

        file.write_all(entry.as_bytes())
    }

    /// The audit file location for a given log directory.
    #[must_use]
    pub fn file_path(log_dir: &str) -> PathBuf {
        Path::new(log_dir).join(AUDIT_FILE_NAME)
    }
}
