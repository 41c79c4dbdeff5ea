//! # clientele-config
//!
//! Configuration management for the customer MCP server.
//! Supports layered config: defaults -> file -> env vars.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ClienteleConfig, LogFormat, LoggingConfig, ServerConfig, StorageConfig};
