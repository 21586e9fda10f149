//! Graceful shutdown

use tokio::signal;

/// Future that resolves once a shutdown signal arrives
///
/// Listens for Ctrl+C, and on unix also for SIGTERM, so in-flight page
/// requests can finish before the server goes away
pub async fn handler() {
    let ctrl_c = async {
        signal::ctrl_c().await.expect("Valid CTRL+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Valid terminate handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, finishing open requests");
}
