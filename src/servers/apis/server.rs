//! Logic to run the API server.
//!
//! It contains two main structs: [`ApiServer`] and [`Launcher`].
//!
//! The `ApiServer` struct is responsible for:
//!
//! - Starting and stopping the server.
//! - Keeping the state of the server: `Stopped` or `Running`.
//!
//! It is a state machine. `ApiServer` relies on the launcher to start the
//! actual server:
//!
//! 1. `ApiServer::start` spawns a new asynchronous task.
//! 2. `Launcher::start` starts the server on the spawned task and reports
//!    the bound address back through a oneshot channel.
//!
//! The `Launcher` knows how to start the server with graceful shutdown. The
//! production code uses the same controller the tests use to start and stop
//! the server repeatedly.
use std::net::SocketAddr;
use std::sync::Arc;

use derive_more::Constructor;
use futures::future::BoxFuture;
use futures::FutureExt;
use tokio::sync::oneshot::{Receiver, Sender};
use tracing::info;

use super::routes::router;
use super::v1::middlewares::auth::Credentials;
use crate::bootstrap::jobs::Started;
use crate::core::TaskStore;
use crate::servers::signals::{graceful_shutdown, Halted};

/// Errors that can occur when starting or stopping the API server.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The spawned server did not report its bound address back.
    #[error("it should send the started message: {reason}")]
    UnableToReceiveStartedMessage { reason: String },

    /// The channel to send the halt signal to the server is closed.
    #[error("it should send the halt message: {reason}")]
    UnableToSendHaltingMessage { reason: String },

    /// The spawned server task failed to execute to completion.
    #[error("it should shutdown the server task: {reason}")]
    UnableToJoinServerTask { reason: String },
}

/// An API server controller, either `Stopped` or `Running`.
pub struct ApiServer<S> {
    pub state: S,
}

/// A stopped API server state.
pub struct Stopped {
    launcher: Launcher,
}

/// A running API server state.
pub struct Running {
    /// The address the server is actually bound to.
    pub binding: SocketAddr,
    halt_task: Sender<Halted>,
    pub task: tokio::task::JoinHandle<Launcher>,
}

impl ApiServer<Stopped> {
    #[must_use]
    pub fn new(launcher: Launcher) -> Self {
        Self {
            state: Stopped { launcher },
        }
    }

    /// It starts the server and returns an `ApiServer` controller in
    /// `Running` state.
    ///
    /// # Errors
    ///
    /// It would return an error if the server fails to report the address it
    /// is bound to.
    pub async fn start(self, task_store: Arc<TaskStore>, credentials: Arc<Credentials>) -> Result<ApiServer<Running>, Error> {
        let (tx_start, rx_start): (Sender<Started>, Receiver<Started>) = tokio::sync::oneshot::channel();
        let (tx_halt, rx_halt): (Sender<Halted>, Receiver<Halted>) = tokio::sync::oneshot::channel();

        let launcher = self.state.launcher;

        let task = tokio::spawn(async move {
            let server = launcher.start(task_store, credentials, tx_start, rx_halt);

            server.await;

            launcher
        });

        let binding = rx_start
            .await
            .map_err(|err| Error::UnableToReceiveStartedMessage { reason: err.to_string() })?
            .address;

        info!(target: "API", "Started on http://{binding}");

        Ok(ApiServer {
            state: Running {
                binding,
                halt_task: tx_halt,
                task,
            },
        })
    }
}

impl ApiServer<Running> {
    /// It stops the server and returns an `ApiServer` controller in
    /// `Stopped` state.
    ///
    /// # Errors
    ///
    /// It would return an error if the channel for the halt signal was
    /// closed, or if the server task failed to join.
    pub async fn stop(self) -> Result<ApiServer<Stopped>, Error> {
        self.state
            .halt_task
            .send(Halted::Normal)
            .map_err(|err| Error::UnableToSendHaltingMessage {
                reason: format!("halt channel closed, sending: {err}"),
            })?;

        let launcher = self
            .state
            .task
            .await
            .map_err(|err| Error::UnableToJoinServerTask { reason: err.to_string() })?;

        Ok(ApiServer {
            state: Stopped { launcher },
        })
    }
}

/// It knows how to bind the socket and start the axum server with graceful
/// shutdown.
#[derive(Constructor, Debug)]
pub struct Launcher {
    pub bind_to: SocketAddr,
}

impl Launcher {
    /// It starts the server.
    ///
    /// # Panics
    ///
    /// Will panic if it cannot bind to the socket address, or if it cannot
    /// send the started message back to the parent task.
    fn start(
        &self,
        task_store: Arc<TaskStore>,
        credentials: Arc<Credentials>,
        tx_start: Sender<Started>,
        rx_halt: Receiver<Halted>,
    ) -> BoxFuture<'static, ()> {
        let app = router(task_store, credentials);

        let socket = std::net::TcpListener::bind(self.bind_to).expect("Could not bind tcp_listener to address.");
        let address = socket.local_addr().expect("Could not get local_addr from tcp_listener.");

        let handle = axum_server::Handle::new();

        tokio::task::spawn(graceful_shutdown(
            handle.clone(),
            rx_halt,
            format!("Shutting down API server on socket address: {address}"),
        ));

        let running = axum_server::from_tcp(socket)
            .handle(handle)
            .serve(app.into_make_service());

        tx_start
            .send(Started { address })
            .expect("the API server should not be dropped");

        running
            .map(|result| result.expect("it should be able to serve the API"))
            .boxed()
    }
}
