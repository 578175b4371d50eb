//! Task store domain services.
//!
//! For the time being there is only the factory that builds the
//! [`TaskStore`](crate::core::TaskStore) with its dependencies.
use std::fs;
use std::path::Path;

use tor_rest_configuration::Configuration;

use crate::core::auditing::AuditLog;
use crate::core::databases::driver::{self, Driver};
use crate::core::TaskStore;

/// It returns a new task store building its dependencies.
///
/// It creates the storage directories (database file parent and audit log
/// directory) when they do not exist yet.
///
/// # Panics
///
/// Will panic if the task store cannot be instantiated: bad database file
/// path or unwritable audit log directory. The process must abort at startup
/// in that case.
#[must_use]
pub fn task_store_factory(config: &Configuration) -> TaskStore {
    if let Some(parent) = Path::new(&config.database.db_file).parent() {
        fs::create_dir_all(parent).expect("Could not create the database directory.");
    }
    fs::create_dir_all(&config.auditing.log_dir).expect("Could not create the audit log directory.");

    let database = driver::build(&Driver::JsonFile, &config.database.db_file).expect("Could not build the database driver.");

    let audit_log = AuditLog::open(&config.auditing.log_dir).expect("Could not open the audit log.");

    TaskStore::new(database, audit_log)
}
