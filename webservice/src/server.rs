//! HTTP server wiring.

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use crate::health::health_handler;
use axum::{Router, routing::get};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info, warn};

/// Stderr prefix announcing the bound port, e.g. `WEBSERVICE_BOUND_PORT=8000`.
pub const BOUND_PORT_MARKER: &str = "WEBSERVICE_BOUND_PORT=";

/// Builds the service router.
pub fn router() -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .layer(TraceLayer::new_for_http())
}

/// Starts the server and runs until Ctrl-C.
///
/// # Errors
///
/// Returns [`ServiceError::HttpServer`] if binding fails or the server stops
/// with an I/O error.
pub async fn start_server(config: &ServiceConfig) -> Result<()> {
    start_server_with_shutdown(config, shutdown_signal()).await
}

/// Like [`start_server`], but stops when `shutdown` completes.
///
/// The actual bound port is printed to stderr as `WEBSERVICE_BOUND_PORT=<port>`
/// so that callers binding port 0 can discover it.
///
/// # Errors
///
/// See [`start_server`].
pub async fn start_server_with_shutdown<F>(config: &ServiceConfig, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Starting webservice on {}", config.bind_addr);

    if !config.bind_addr.ip().is_loopback() {
        warn!(
            "webservice bound to non-loopback address {}. \
             The health endpoint is reachable from the network.",
            config.bind_addr
        );
    }

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .map_err(|e| ServiceError::HttpServer(format!("Failed to bind: {}", e)))?;

    let local_addr = listener
        .local_addr()
        .map_err(|e| ServiceError::HttpServer(format!("Failed to get local addr: {}", e)))?;

    info!("Health endpoint: http://{}/health", local_addr);
    eprintln!("{BOUND_PORT_MARKER}{}", local_addr.port());

    serve(listener, shutdown).await
}

/// Serves the router on an already bound listener until `shutdown` completes.
///
/// # Errors
///
/// Returns [`ServiceError::HttpServer`] if the accept loop fails.
pub async fn serve<F>(listener: TcpListener, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, router())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| ServiceError::HttpServer(format!("Server error: {}", e)))?;

    info!("webservice stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Received Ctrl-C, shutting down"),
        Err(e) => {
            // Without a signal handler the server only stops when killed.
            error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    }
}
