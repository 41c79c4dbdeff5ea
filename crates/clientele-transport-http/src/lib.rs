//! HTTP transport adapter for the customer MCP server.
//! Exposes MCP over `POST /mcp`, answering each request with one
//! Server-Sent-Events frame.

mod error;
pub mod router;
pub mod server;
mod sse;

pub use error::HttpTransportError;
pub use router::{build_router, AppState};
pub use server::HttpServer;
