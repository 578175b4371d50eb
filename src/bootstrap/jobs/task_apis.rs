//! Task API job starter.
//!
//! The [`task_apis::start_job`](crate::bootstrap::jobs::task_apis::start_job)
//! function starts the task store REST API.
//!
//! The function spawns a new asynchronous task, that task is the
//! "**launcher**". The "**launcher**" starts the actual server and sends a
//! message back to the main application. The main application waits until it
//! receives the [`Started`](crate::bootstrap::jobs::Started) message from the
//! "**launcher**".
//!
//! Refer to [`tor-rest-configuration`](tor_rest_configuration) for the API
//! configuration options.
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::task::JoinHandle;
use tor_rest_configuration::HttpApi;

use crate::core::TaskStore;
use crate::servers::apis::server::{ApiServer, Launcher};
use crate::servers::apis::v1::middlewares::auth::Credentials;

/// This function starts a new API server with the provided configuration.
///
/// It spawns a new concurrent task that will run the API server.
///
/// # Panics
///
/// It would panic if the bind address in the configuration is not a valid
/// socket address, or if the server cannot be started.
pub async fn start_job(config: &HttpApi, task_store: Arc<TaskStore>) -> JoinHandle<()> {
    let bind_to = config
        .bind_address
        .parse::<SocketAddr>()
        .expect("it should have a valid task api bind address");

    let credentials = Arc::new(Credentials::new(config.username.clone(), config.password.clone()));

    let server = ApiServer::new(Launcher::new(bind_to))
        .start(task_store, credentials)
        .await
        .expect("it should be able to start the task api");

    tokio::spawn(async move {
        server.state.task.await.expect("failed to close service");
    })
}
