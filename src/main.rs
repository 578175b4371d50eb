use tor_rest::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, task_store) = bootstrap::app::setup();

    let jobs = app::start(&config, task_store).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("tor-rest shutting down ..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("tor-rest successfully shutdown.");
        }
    }
}
