//! Configuration for the audit log.
use serde::{Deserialize, Serialize};

/// Configuration for the append-only audit log.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Auditing {
    /// Directory where the `log.log` audit file is appended to.
    #[serde(default = "Auditing::default_log_dir")]
    pub log_dir: String,
}

impl Default for Auditing {
    fn default() -> Self {
        Self {
            log_dir: Self::default_log_dir(),
        }
    }
}

impl Auditing {
    fn default_log_dir() -> String {
        "./storage/tor-rest".to_string()
    }
}
