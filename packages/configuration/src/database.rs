//! Configuration for the task database.
use serde::{Deserialize, Serialize};

/// Configuration for the task database.
///
/// The task collection is persisted as a single JSON array in a flat file.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Database {
    /// Path to the JSON file holding the task collection, for example:
    /// `./storage/tor-rest/tasks.json`.
    #[serde(default = "Database::default_db_file")]
    pub db_file: String,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            db_file: Self::default_db_file(),
        }
    }
}

impl Database {
    fn default_db_file() -> String {
        "./storage/tor-rest/tasks.json".to_string()
    }
}
