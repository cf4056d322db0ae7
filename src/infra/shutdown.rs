//! Graceful shutdown trigger for the HTTP server.

use std::future::Future;
use tracing::{error, info};

/// Resolves once Ctrl+C is received.
pub async fn ctrl_c() {
    wait_for(tokio::signal::ctrl_c()).await
}

/// Resolves when `signal` fires. If the listener cannot be installed the
/// future never resolves, so the server keeps running without it.
pub async fn wait_for<F>(signal: F)
where
    F: Future<Output = std::io::Result<()>>,
{
    if let Err(e) = signal.await {
        error!(error = %e, "failed to listen for shutdown signal, Ctrl+C disabled");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received (Ctrl+C)");
}
