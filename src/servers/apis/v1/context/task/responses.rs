//! Responses for the task context.
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use super::resources::TaskResource;
use crate::core::tasks::Task;

/// Body of the list-all-tasks response.
#[derive(Serialize, Deserialize, Debug)]
pub struct TaskListResponse {
    pub tasks: Vec<TaskResource>,
}

/// Body of the single-task responses (get, create, update).
#[derive(Serialize, Deserialize, Debug)]
pub struct TaskResponse {
    pub task: TaskResource,
}

/// Body of the delete-task response.
#[derive(Serialize, Deserialize, Debug)]
pub struct TaskRemovedResponse {
    pub result: bool,
}

/// `200` response with all the tasks in their public representation.
pub fn task_list_response(tasks: &[Task], host: &str) -> Response {
    Json(TaskListResponse {
        tasks: tasks.iter().map(|task| TaskResource::from_task(task, host)).collect(),
    })
    .into_response()
}

/// `200` response with one task in its public representation.
pub fn task_response(task: &Task, host: &str) -> Response {
    Json(TaskResponse {
        task: TaskResource::from_task(task, host),
    })
    .into_response()
}

/// `201` response with the task that was just created.
pub fn task_created_response(task: &Task, host: &str) -> Response {
    (
        StatusCode::CREATED,
        Json(TaskResponse {
            task: TaskResource::from_task(task, host),
        }),
    )
        .into_response()
}

/// `200` response confirming the task was removed.
pub fn task_removed_response() -> Response {
    Json(TaskRemovedResponse { result: true }).into_response()
}
