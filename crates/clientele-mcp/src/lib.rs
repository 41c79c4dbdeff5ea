//! # clientele-mcp
//!
//! MCP method dispatch (APPLICATION layer).
//!
//! Provides the static operation catalog advertised to clients and the
//! `McpHandler` that routes JSON-RPC requests onto the customer store.

pub mod catalog;
mod dispatch;
pub mod handler;
pub mod outcome;

pub use catalog::{CatalogError, Operation, ToolSpec, TOOLS};
pub use handler::{JsonRpcOutput, McpHandler, SERVER_NAME, SERVER_VERSION};
pub use outcome::ToolOutput;
