//! HTTP server setup.
//!
//! # Responsibilities
//! - Wrap the redirect dispatcher with trace middleware
//! - Provide the default fallback handler
//! - Serve connections with graceful shutdown

use std::future::Future;
use std::io;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::http::redirect::RedirectHandler;
use crate::routing::RedirectTable;

/// HTTP server for the redirect service.
pub struct HttpServer {
    handler: RedirectHandler<Router>,
}

impl HttpServer {
    /// Create a server over `table` with the default fallback.
    pub fn new(table: RedirectTable) -> Self {
        Self::with_fallback(table, default_fallback())
    }

    /// Create a server over `table` with a caller-supplied fallback router.
    pub fn with_fallback(table: RedirectTable, fallback: Router) -> Self {
        Self {
            handler: RedirectHandler::new(Arc::new(table), fallback),
        }
    }

    /// Run the server until Ctrl+C, accepting connections on `listener`.
    pub async fn run(self, listener: TcpListener) -> io::Result<()> {
        self.serve(listener, shutdown_signal()).await
    }

    /// Run the server until the shutdown channel fires.
    ///
    /// Used by embedders and integration tests that manage the server's
    /// lifetime themselves (see `lifecycle::Shutdown`).
    pub async fn run_until(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> io::Result<()> {
        self.serve(listener, async move {
            let _ = shutdown.recv().await;
        })
        .await
    }

    async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> io::Result<()> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        // Mounted as a fallback service so axum maps the trace
        // middleware's response body back to its own body type.
        let app = Router::new()
            .fallback_service(self.handler)
            .layer(TraceLayer::new_for_http());

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Default fallback: answers every unmapped path with a plain greeting.
pub fn default_fallback() -> Router {
    Router::new().fallback(hello)
}

async fn hello() -> &'static str {
    "Hello"
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}

#[cfg(test)]
mod tests {
    use super::*;

    // Exercises the full traced serving stack end to end: boot, answer a
    // request through the fallback, stop on the shutdown channel.
    #[tokio::test]
    async fn test_server_boots_and_serves_fallback() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let (tx, rx) = broadcast::channel(1);
        let server = HttpServer::new(RedirectTable::default());
        let handle = tokio::spawn(async move { server.run_until(listener, rx).await });

        let res = reqwest::get(format!("http://{}/x", addr)).await.unwrap();
        assert_eq!(res.status(), 200);
        assert_eq!(res.text().await.unwrap(), "Hello");

        tx.send(()).unwrap();
        handle.await.unwrap().unwrap();
    }
}
