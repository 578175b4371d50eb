//! Task context handlers.
//!
//! The handlers are thin: they parse the request, call one
//! [`TaskStore`](crate::core::TaskStore) operation and map the result to a
//! response. Domain errors map to the common error responses:
//!
//! - [`Error::TaskNotFound`] becomes a `404`.
//! - Persistence and audit failures become a `500`.
//!
//! A `task_id` path segment that is not a number never matches a task, so it
//! gets the same `404` as an unknown route.
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Host, Path, State};
use axum::response::{Json, Response};

use super::forms::{AddTaskForm, UpdateTaskForm};
use super::responses::{task_created_response, task_list_response, task_removed_response, task_response};
use crate::core::error::Error;
use crate::core::tasks::TaskId;
use crate::core::TaskStore;
use crate::servers::apis::v1::responses::{invalid_input_response, not_found_response, unhandled_rejection_response};
use crate::servers::apis::TaskIdParam;

/// It handles the request to list all the tasks.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::task#list-all-tasks).
pub async fn get_tasks_handler(State(task_store): State<Arc<TaskStore>>, Host(host): Host) -> Response {
    match task_store.get_tasks().await {
        Ok(tasks) => task_list_response(&tasks, &host),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to get one task.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::task#get-a-task).
pub async fn get_task_handler(
    State(task_store): State<Arc<TaskStore>>,
    Host(host): Host,
    Path(task_id): Path<TaskIdParam>,
) -> Response {
    let Some(task_id) = parse_task_id(&task_id) else {
        return not_found_response();
    };

    match task_store.get_task(task_id).await {
        Ok(task) => task_response(&task, &host),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to create a task.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::task#create-a-task).
pub async fn add_task_handler(
    State(task_store): State<Arc<TaskStore>>,
    Host(host): Host,
    form: Result<Json<AddTaskForm>, JsonRejection>,
) -> Response {
    let Ok(Json(form)) = form else {
        return invalid_input_response();
    };

    match task_store
        .add_task(form.task_name, form.tor_number, form.resource, form.dir_dest)
        .await
    {
        Ok(task) => task_created_response(&task, &host),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to update a task.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::task#update-a-task).
pub async fn update_task_handler(
    State(task_store): State<Arc<TaskStore>>,
    Host(host): Host,
    Path(task_id): Path<TaskIdParam>,
    form: Result<Json<UpdateTaskForm>, JsonRejection>,
) -> Response {
    let Some(task_id) = parse_task_id(&task_id) else {
        return not_found_response();
    };

    // The task is resolved before the body is read: an unknown id gets a
    // `404` even when the body is also invalid.
    let form = match form {
        Ok(Json(form)) => form,
        Err(_) => {
            return match task_store.ensure_task_exists(task_id).await {
                Ok(()) => invalid_input_response(),
                Err(error) => error_response(&error),
            };
        }
    };

    match task_store.update_task(task_id, form.into()).await {
        Ok(task) => task_response(&task, &host),
        Err(error) => error_response(&error),
    }
}

/// It handles the request to delete a task.
///
/// Refer to the [API endpoint documentation](crate::servers::apis::v1::context::task#delete-a-task).
pub async fn remove_task_handler(State(task_store): State<Arc<TaskStore>>, Path(task_id): Path<TaskIdParam>) -> Response {
    let Some(task_id) = parse_task_id(&task_id) else {
        return not_found_response();
    };

    match task_store.remove_task(task_id).await {
        Ok(()) => task_removed_response(),
        Err(error) => error_response(&error),
    }
}

fn parse_task_id(param: &TaskIdParam) -> Option<TaskId> {
    param.0.parse::<u64>().ok().map(TaskId)
}

fn error_response(error: &Error) -> Response {
    match error {
        Error::TaskNotFound { .. } => not_found_response(),
        Error::Database { .. } | Error::Auditing { .. } => unhandled_rejection_response(error.to_string()),
    }
}
