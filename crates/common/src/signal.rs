//! Shutdown signalling for the HTTP server.

use tracing::{info, warn};

/// Resolves once the process receives Ctrl+C.
///
/// Passed to `axum::serve(..).with_graceful_shutdown` so in-flight requests
/// finish before the listener closes.
pub async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!(event = "shutdown_signal", "received Ctrl+C, draining connections"),
        Err(e) => {
            warn!(event = "shutdown_signal", error = %e, "failed to listen for Ctrl+C");
            // Without a signal handler the server keeps running until killed.
            std::future::pending::<()>().await;
        }
    }
}
