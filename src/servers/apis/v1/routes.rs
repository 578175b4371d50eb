//! Route initialization for the v1.0 API.
use std::sync::Arc;

use axum::Router;

use super::context::task;
use crate::core::TaskStore;

/// Add the routes for the v1.0 API.
pub fn add(prefix: &str, router: Router, task_store: Arc<TaskStore>) -> Router {
    task::routes::add(prefix, router, task_store)
}
