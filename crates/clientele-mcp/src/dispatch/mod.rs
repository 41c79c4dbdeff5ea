//! MCP method dispatch functions.
//!
//! Each sub-module handles one MCP method as a free function,
//! keeping `McpHandler` itself thin (struct + routing only).

pub(crate) mod initialize;
pub(crate) mod tools_call;
pub(crate) mod tools_list;
