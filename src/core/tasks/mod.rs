//! Structs to store the task records.
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Default value for the `resource` field of a new task.
pub const DEFAULT_RESOURCE: &str = "rutra";

/// Default value for the `dir_dest` field of a new task.
pub const DEFAULT_DIR_DEST: &str = "movies";

/// The task id. Unique, positive and monotonically assigned from the id of
/// the last task in the collection.
#[derive(Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Debug, Display, Clone, Copy, Hash)]
#[display(fmt = "{}", _0)]
pub struct TaskId(pub u64);

/// A torrent-download job record. Metadata only: the service never triggers
/// or monitors the actual download.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct Task {
    /// Unique task id.
    pub id: TaskId,
    /// Human readable task name.
    pub task_name: String,
    /// Source of the torrent.
    pub resource: String,
    /// Torrent identifier on the resource.
    pub tor_number: String,
    /// Destination directory category.
    pub dir_dest: String,
    /// Whether the download was completed.
    pub done: bool,
}

/// A partial update for a task. Fields left as `None` are untouched (merge
/// semantics, not replace).
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub task_name: Option<String>,
    pub resource: Option<String>,
    pub tor_number: Option<String>,
    pub dir_dest: Option<String>,
    pub done: Option<bool>,
}

impl TaskPatch {
    /// It overwrites the task fields present in the patch.
    pub fn apply_to(&self, task: &mut Task) {
        if let Some(task_name) = &self.task_name {
            task.task_name = task_name.clone();
        }
        if let Some(resource) = &self.resource {
            task.resource = resource.clone();
        }
        if let Some(tor_number) = &self.tor_number {
            task.tor_number = tor_number.clone();
        }
        if let Some(dir_dest) = &self.dir_dest {
            task.dir_dest = dir_dest.clone();
        }
        if let Some(done) = self.done {
            task.done = done;
        }
    }
}
