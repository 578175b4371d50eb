//! Public representations of the task context resources.
use serde::{Deserialize, Serialize};

use crate::core::tasks::Task;
use crate::servers::apis::API_BASE_PATH;

/// The public representation of a task.
///
/// It is the stored task with the internal `id` field replaced by a `uri`
/// field holding the absolute URL of the task, built from the `Host` header
/// of the request.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
pub struct TaskResource {
    /// Absolute URL of the task, for example
    /// `http://127.0.0.1:1212/tor_rest/api/v1.0/tasks/1`.
    pub uri: String,
    pub task_name: String,
    pub resource: String,
    pub tor_number: String,
    pub dir_dest: String,
    pub done: bool,
}

impl TaskResource {
    #[must_use]
    pub fn from_task(task: &Task, host: &str) -> Self {
        Self {
            uri: format!("http://{host}{API_BASE_PATH}/tasks/{}", task.id),
            task_name: task.task_name.clone(),
            resource: task.resource.clone(),
            tor_number: task.tor_number.clone(),
            dir_dest: task.dir_dest.clone(),
            done: task.done,
        }
    }
}
