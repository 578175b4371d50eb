//! tor-rest application.
//!
//! The application is a container for the services defined in the
//! configuration. For the time being there is only one service: the task
//! store REST API.
//!
//! The application is responsible for:
//!
//! - Loading the task collection from the database when it starts.
//! - Starting the API job.
use std::sync::Arc;

use tokio::task::JoinHandle;
use tor_rest_configuration::Configuration;

use crate::bootstrap::jobs::task_apis;
use crate::core;

/// # Panics
///
/// Will panic if the task collection cannot be loaded from the database.
pub async fn start(config: &Configuration, task_store: Arc<core::TaskStore>) -> Vec<JoinHandle<()>> {
    let mut jobs: Vec<JoinHandle<()>> = Vec::new();

    // Load the persisted tasks
    task_store
        .load_tasks_from_database()
        .await
        .expect("Could not load tasks from database.");

    // Start the REST API
    jobs.push(task_apis::start_job(&config.http_api, task_store).await);

    jobs
}
