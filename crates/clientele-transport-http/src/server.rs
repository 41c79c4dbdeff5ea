//! HTTP server that binds an axum Router to a TCP socket.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;

use clientele_mcp::McpHandler;

use crate::error::HttpTransportError;
use crate::router::{build_router, AppState};

/// Axum-based HTTP server for the MCP transport.
pub struct HttpServer {
    pub(crate) addr: SocketAddr,
    pub(crate) state: AppState,
}

impl HttpServer {
    /// Creates a new HTTP server.
    ///
    /// # Arguments
    ///
    /// * `handler` - shared MCP dispatcher
    /// * `addr` - socket address to listen on
    pub fn new(handler: Arc<McpHandler>, addr: SocketAddr) -> Self {
        Self {
            addr,
            state: AppState { handler },
        }
    }

    /// Starts the server and runs until `shutdown` resolves.
    ///
    /// In-flight requests are allowed to finish before returning.
    ///
    /// # Errors
    ///
    /// Returns an error if the TCP bind fails or the server crashes.
    pub async fn run_until<F>(self, shutdown: F) -> Result<(), HttpTransportError>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|source| HttpTransportError::Bind { addr, source })?;

        tracing::info!(%addr, "MCP HTTP server ready");

        let router = build_router(self.state);
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|source| HttpTransportError::Serve { addr, source })?;

        Ok(())
    }
}
