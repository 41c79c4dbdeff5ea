//! MCP initialize method types.
//!
//! The initialize handshake is the first message exchanged between
//! client and server. This server answers it with static metadata and
//! ignores whatever the client declares.

use serde::{Deserialize, Serialize};

/// Tool-related capability.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCapability {}

/// Server capabilities returned during initialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability (present if server exposes tools).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolCapability>,
}

/// Server info returned during initialization.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}

/// Response for `initialize`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResult {
    /// Protocol version agreed by server.
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server capabilities.
    pub capabilities: ServerCapabilities,
    /// Server info.
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
}

/// MCP protocol version supported by this implementation.
pub const PROTOCOL_VERSION: &str = "2024-11-05";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_result_uses_camel_case_keys() {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolCapability {}),
            },
            server_info: ServerInfo {
                name: "customer-management-server".to_string(),
                version: "1.0.0".to_string(),
            },
        };
        let v = serde_json::to_value(&result).expect("serialize");
        assert_eq!(v["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(v["serverInfo"]["name"], "customer-management-server");
        assert!(v["capabilities"]["tools"].is_object());
    }
}
