//! Task context routes.
use std::sync::Arc;

use axum::routing::get;
use axum::Router;

use super::handlers::{add_task_handler, get_task_handler, get_tasks_handler, remove_task_handler, update_task_handler};
use crate::core::TaskStore;

/// Add the task context routes to the router under the given prefix:
///
/// - `GET /tasks` and `POST /tasks`.
/// - `GET`, `PUT` and `DELETE /tasks/{id}`.
pub fn add(prefix: &str, router: Router, task_store: Arc<TaskStore>) -> Router {
    router
        .route(
            &format!("{prefix}/tasks"),
            get(get_tasks_handler).post(add_task_handler).with_state(task_store.clone()),
        )
        .route(
            &format!("{prefix}/tasks/:task_id"),
            get(get_task_handler)
                .put(update_task_handler)
                .delete(remove_task_handler)
                .with_state(task_store),
        )
}
