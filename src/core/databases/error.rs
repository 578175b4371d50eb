//! Database errors.
//!
//! This module contains the [Database errors](crate::core::databases::error::Error).
use super::driver::Driver;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Unable to read from or write to the backing file.
    #[error("Unable to access the {driver} database at {path}: {source}")]
    Io {
        source: std::io::Error,
        path: String,
        driver: Driver,
    },

    /// The backing file does not contain a valid task collection.
    #[error("The {driver} database at {path} is corrupted: {source}")]
    InvalidSnapshot {
        source: serde_json::Error,
        path: String,
        driver: Driver,
    },
}
