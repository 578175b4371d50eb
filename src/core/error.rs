//! Errors returned by the core [`TaskStore`](crate::core::TaskStore).
//!
//! Error | Context | Description
//! ---|---|---
//! `TaskNotFound` | Lookup | No task in the collection matches the requested id.
//! `Database` | Persistence | The task collection snapshot could not be loaded or saved.
//! `Auditing` | Audit log | The audit line could not be appended.
use crate::core::databases;
use crate::core::tasks::TaskId;

/// Error returned by the core `TaskStore`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("The task {task_id} was not found")]
    TaskNotFound { task_id: TaskId },

    #[error("Database error: {source}")]
    Database {
        #[from]
        source: databases::error::Error,
    },

    #[error("Unable to append to the audit log: {source}")]
    Auditing { source: std::io::Error },
}
