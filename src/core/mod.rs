//! The core task store domain layer.
//!
//! The [`TaskStore`] owns the in-memory task collection and coordinates the
//! three concerns of every operation:
//!
//! 1. Reading or mutating the collection.
//! 2. Persisting the whole collection to the database on every mutation
//!    (snapshot persistence, see [`databases`]).
//! 3. Appending one line per operation to the audit log (see [`auditing`]).
//!
//! The collection is guarded by a [`tokio::sync::RwLock`]: reads can run
//! concurrently with each other, mutations (and their persistence write) are
//! serialized behind the write lock. Handlers never retain references to the
//! tasks across requests, they always get owned copies.
//!
//! # Task
//!
//! A task is a torrent-download job record (metadata only, the service never
//! triggers a download):
//!
//! Field        | Sample data       | Description
//! ---|---|---
//! `id`         | 1                 | Unique id, assigned as `last id + 1`
//! `task_name`  | `Ubuntu ISO`      | Human readable name
//! `resource`   | `rutra`           | Source of the torrent
//! `tor_number` | `abc123`          | Torrent identifier on the resource
//! `dir_dest`   | `movies`          | Destination directory category
//! `done`       | `false`           | Whether the download was completed
pub mod auditing;
pub mod databases;
pub mod error;
pub mod services;
pub mod tasks;

use tokio::sync::RwLock;

use self::auditing::AuditLog;
use self::databases::Database;
use self::error::Error;
use self::tasks::{Task, TaskId, TaskPatch, DEFAULT_DIR_DEST, DEFAULT_RESOURCE};

/// The domain layer of the service. It owns the task collection.
pub struct TaskStore {
    /// A database driver implementation:
    /// [`JsonFile`](crate::core::databases::json_file::JsonFile).
    pub database: Box<dyn Database>,
    audit_log: AuditLog,
    tasks: RwLock<Vec<Task>>,
}

impl TaskStore {
    #[must_use]
    pub fn new(database: Box<dyn Database>, audit_log: AuditLog) -> Self {
        Self {
            database,
            audit_log,
            tasks: RwLock::new(Vec::new()),
        }
    }

    /// It loads the task collection from the database into memory, replacing
    /// the current in-memory collection.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::Database`] if the collection cannot be loaded.
    pub async fn load_tasks_from_database(&self) -> Result<(), Error> {
        let persisted_tasks = self.database.load_tasks()?;

        let mut tasks = self.tasks.write().await;
        *tasks = persisted_tasks;

        Ok(())
    }

    /// It returns all the tasks in storage (insertion) order.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::Auditing`] if the operation cannot be audited.
    pub async fn get_tasks(&self) -> Result<Vec<Task>, Error> {
        let tasks = self.tasks.read().await.clone();

        self.audit("Showed list of tasks")?;

        Ok(tasks)
    }

    /// It returns the task with the given id.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::TaskNotFound`] if no task matches the id, or
    /// an [`Error::Auditing`] if the operation cannot be audited.
    pub async fn get_task(&self, task_id: TaskId) -> Result<Task, Error> {
        let task = self
            .tasks
            .read()
            .await
            .iter()
            .find(|task| task.id == task_id)
            .cloned()
            .ok_or_else(|| self.not_found(task_id))?;

        self.audit(&format!("Showed details of task {task_id}"))?;

        Ok(task)
    }

    /// It checks that a task with the given id exists, without returning it.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::TaskNotFound`] if no task matches the id, or
    /// an [`Error::Auditing`] if the miss cannot be audited.
    pub async fn ensure_task_exists(&self, task_id: TaskId) -> Result<(), Error> {
        if self.tasks.read().await.iter().any(|task| task.id == task_id) {
            Ok(())
        } else {
            Err(self.not_found(task_id))
        }
    }

    /// It appends a new task to the collection and persists the snapshot.
    ///
    /// The new task id is the id of the last task plus one, or `1` when the
    /// collection is empty.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::Database`] if the snapshot cannot be
    /// persisted, or an [`Error::Auditing`] if the operation cannot be
    /// audited.
    pub async fn add_task(
        &self,
        task_name: String,
        tor_number: String,
        resource: Option<String>,
        dir_dest: Option<String>,
    ) -> Result<Task, Error> {
        let mut tasks = self.tasks.write().await;

        let task = Task {
            id: next_id(&tasks),
            task_name,
            resource: resource.unwrap_or_else(|| DEFAULT_RESOURCE.to_string()),
            tor_number,
            dir_dest: dir_dest.unwrap_or_else(|| DEFAULT_DIR_DEST.to_string()),
            done: false,
        };

        tasks.push(task.clone());

        self.persist(&tasks)?;

        self.audit(&format!("Task {} was added", task.id))?;

        Ok(task)
    }

    /// It overwrites the fields present in the patch (merge semantics: absent
    /// fields are untouched) and persists the snapshot.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::TaskNotFound`] if no task matches the id, an
    /// [`Error::Database`] if the snapshot cannot be persisted, or an
    /// [`Error::Auditing`] if the operation cannot be audited.
    pub async fn update_task(&self, task_id: TaskId, patch: TaskPatch) -> Result<Task, Error> {
        let mut tasks = self.tasks.write().await;

        let task = tasks
            .iter_mut()
            .find(|task| task.id == task_id)
            .ok_or_else(|| self.not_found(task_id))?;

        patch.apply_to(task);

        let updated_task = task.clone();

        self.persist(&tasks)?;

        self.audit(&format!("Task {task_id} was updated"))?;

        Ok(updated_task)
    }

    /// It removes the first task matching the id and persists the snapshot.
    ///
    /// # Errors
    ///
    /// Will return an [`Error::TaskNotFound`] if no task matches the id, an
    /// [`Error::Database`] if the snapshot cannot be persisted, or an
    /// [`Error::Auditing`] if the operation cannot be audited.
    pub async fn remove_task(&self, task_id: TaskId) -> Result<(), Error> {
        let mut tasks = self.tasks.write().await;

        let position = tasks
            .iter()
            .position(|task| task.id == task_id)
            .ok_or_else(|| self.not_found(task_id))?;

        tasks.remove(position);

        self.persist(&tasks)?;

        self.audit(&format!("Task {task_id} was removed"))?;

        Ok(())
    }

    fn persist(&self, tasks: &[Task]) -> Result<(), Error> {
        self.database.save_tasks(tasks).map_err(|source| Error::Database { source })
    }

    /// Misses leave a "Not found" line in the audit trail, like every other
    /// operation outcome.
    fn not_found(&self, task_id: TaskId) -> Error {
        match self.audit("Not found") {
            Ok(()) => Error::TaskNotFound { task_id },
            Err(err) => err,
        }
    }

    fn audit(&self, message: &str) -> Result<(), Error> {
        self.audit_log.append(message).map_err(|source| Error::Auditing { source })
    }
}

fn next_id(tasks: &[Task]) -> TaskId {
    match tasks.last() {
        Some(task) => TaskId(task.id.0 + 1),
        None => TaskId(1),
    }
}
