//! Handles the `tools/list` MCP method.

use clientele_protocol::mcp::tools::{McpToolDefinition, ToolsListResult};
use clientele_protocol::RequestId;

use crate::catalog::TOOLS;
use crate::handler::JsonRpcOutput;

/// Returns the full operation catalog.
pub(crate) fn handle_tools_list(id: RequestId) -> JsonRpcOutput {
    let tools: Vec<McpToolDefinition> = TOOLS.iter().map(|t| t.definition()).collect();
    tracing::debug!(count = tools.len(), "listing tools");
    JsonRpcOutput::from_result(id, ToolsListResult { tools })
}
