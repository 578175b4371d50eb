//! Signal handling for the servers.
use std::time::Duration;

use derive_more::Display;
use tracing::info;

/// This is the message that the "launcher" spawned task receives from the
/// parent task to notify the service to shutdown.
#[derive(Copy, Clone, Debug, Display)]
pub enum Halted {
    Normal,
}

/// Resolves when the process receives a `ctrl_c` or a terminate signal.
///
/// # Panics
///
/// Will panic if the signal handlers cannot be installed.
pub async fn global_shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {}
    }
}

/// Resolves when the halt channel fires or the process receives a global
/// shutdown signal.
///
/// # Panics
///
/// Will panic if the halt channel is closed before sending a signal.
pub async fn shutdown_signal(rx_halt: tokio::sync::oneshot::Receiver<Halted>) {
    let halt = async {
        match rx_halt.await {
            Ok(signal) => signal,
            Err(err) => panic!("Failed to install stop signal: {err}"),
        }
    };

    tokio::select! {
        signal = halt => { info!("Halting server: {signal}") },
        () = global_shutdown_signal() => { info!("Halting server: by global signal") }
    }
}

/// It triggers a graceful shutdown of the axum server when the halt channel
/// fires.
pub async fn graceful_shutdown(handle: axum_server::Handle, rx_halt: tokio::sync::oneshot::Receiver<Halted>, message: String) {
    shutdown_signal(rx_halt).await;

    info!("{message}");

    handle.graceful_shutdown(Some(Duration::from_secs(90)));
}
