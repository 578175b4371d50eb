//! Request bodies for the task context.
use serde::{Deserialize, Deserializer};

use crate::core::tasks::TaskPatch;

/// Body of the create-task request. `task_name` and `tor_number` are
/// required, the rest fall back to the collection defaults.
#[derive(Deserialize, Debug)]
pub struct AddTaskForm {
    pub task_name: String,
    pub tor_number: String,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub dir_dest: Option<String>,
}

/// Body of the update-task request. Every field is optional; absent fields
/// leave the stored value untouched.
///
/// `done`, when present, must be a JSON boolean. `null`, strings like
/// `"true"` and numbers are all rejected.
#[derive(Deserialize, Debug, Default)]
pub struct UpdateTaskForm {
    #[serde(default)]
    pub task_name: Option<String>,
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(default)]
    pub tor_number: Option<String>,
    #[serde(default)]
    pub dir_dest: Option<String>,
    #[serde(default, deserialize_with = "present_bool")]
    pub done: Option<bool>,
}

impl From<UpdateTaskForm> for TaskPatch {
    fn from(form: UpdateTaskForm) -> Self {
        Self {
            task_name: form.task_name,
            resource: form.resource,
            tor_number: form.tor_number,
            dir_dest: form.dir_dest,
            done: form.done,
        }
    }
}

/// Only runs when the field is present in the body, so the value must be a
/// boolean. Absent fields take the `None` default instead.
fn present_bool<'de, D>(deserializer: D) -> Result<Option<bool>, D::Error>
where
    D: Deserializer<'de>,
{
    bool::deserialize(deserializer).map(Some)
}
