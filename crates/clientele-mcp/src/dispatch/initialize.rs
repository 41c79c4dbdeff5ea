//! Handles the `initialize` MCP method.

use clientele_protocol::mcp::initialize::{
    InitializeResult, ServerCapabilities, ServerInfo, ToolCapability, PROTOCOL_VERSION,
};
use clientele_protocol::RequestId;

use crate::handler::{JsonRpcOutput, SERVER_NAME, SERVER_VERSION};

/// Returns static server metadata. Client-declared params are not inspected.
pub(crate) fn handle_initialize(id: RequestId) -> JsonRpcOutput {
    tracing::info!("handling initialize request");
    let result = InitializeResult {
        protocol_version: PROTOCOL_VERSION.to_string(),
        capabilities: ServerCapabilities {
            tools: Some(ToolCapability {}),
        },
        server_info: ServerInfo {
            name: SERVER_NAME.to_string(),
            version: SERVER_VERSION.to_string(),
        },
    };
    JsonRpcOutput::from_result(id, result)
}
