//! Server lifecycle: bind, serve, shut down gracefully on ctrl-c.

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use crate::state::AppState;
use crate::web::router::app_router;

#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        source: std::io::Error,
    },
    #[error("server error: {0}")]
    Serve(#[from] std::io::Error),
}

/// Bind `addr` and serve until ctrl-c. State is shared read-only across
/// all handlers; nothing needs flushing on shutdown.
pub async fn serve(
    state: Arc<AppState>,
    static_dir: &Path,
    addr: SocketAddr,
) -> Result<(), ServeError> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServeError::Bind { addr, source })?;

    let local = listener.local_addr()?;
    tracing::info!(addr = %local, "listening");

    let app = app_router(state, static_dir);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "cannot listen for ctrl-c; running until killed");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil;

    #[tokio::test]
    async fn bind_conflict_is_a_bind_error() {
        let (state, dir) = testutil::sample_state();

        // Occupy a port, then try to serve on it
        let occupied = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = occupied.local_addr().unwrap();

        let err = serve(state, dir.path(), addr).await.unwrap_err();
        assert!(matches!(err, ServeError::Bind { .. }));
    }
}
