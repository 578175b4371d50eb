//! The `JsonFile` database driver.
//!
//! It stores the whole task collection as a single JSON array in a flat
//! file. Every save rewrites the file in place: there is no write-ahead log
//! and no temp-file-rename step, so a crash mid-write can corrupt the
//! snapshot. That matches the durability the service promises (none beyond
//! "the last completed write is on disk").
use std::fs;
use std::io::ErrorKind;

use super::error::Error;
use super::Database;
use crate::core::databases::driver::Driver;
use crate::core::tasks::Task;

const DRIVER: Driver = Driver::JsonFile;

/// A flat-file JSON database driver.
pub struct JsonFile {
    path: String,
}

impl Database for JsonFile {
    fn new(db_path: &str) -> Result<Self, Error> {
        Ok(Self {
            path: db_path.to_owned(),
        })
    }

    /// Loads the task array from the file. A file that does not exist yet is
    /// an empty collection.
    fn load_tasks(&self) -> Result<Vec<Task>, Error> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(source) => {
                return Err(Error::Io {
                    source,
                    path: self.path.clone(),
                    driver: DRIVER,
                })
            }
        };

        serde_json::from_str(&contents).map_err(|source| Error::InvalidSnapshot {
            source,
            path: self.path.clone(),
            driver: DRIVER,
        })
    }

    fn save_tasks(&self, tasks: &[Task]) -> Result<(), Error> {
        let snapshot = serde_json::to_string(tasks).map_err(|source| Error::InvalidSnapshot {
            source,
            path: self.path.clone(),
            driver: DRIVER,
        })?;

        fs::write(&self.path, snapshot).map_err(|source| Error::Io {
            source,
            path: self.path.clone(),
            driver: DRIVER,
        })
    }
}
