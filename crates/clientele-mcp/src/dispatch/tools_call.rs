//! Handles the `tools/call` MCP method.

use serde_json::Value;
use tracing::{error, warn};

use clientele_protocol::mcp::tools::{ToolContent, ToolsCallParams, ToolsCallResult};
use clientele_protocol::{error_codes, RequestId};
use clientele_registry::CustomerRepository;

use crate::catalog::{CatalogError, Operation};
use crate::handler::JsonRpcOutput;
use crate::outcome::ToolOutput;

/// Handles the `tools/call` request.
pub(crate) async fn handle_tools_call(
    id: RequestId,
    params: &Option<Value>,
    repository: &dyn CustomerRepository,
) -> JsonRpcOutput {
    // 1. Parse params
    let call_params = match params {
        Some(p) => match serde_json::from_value::<ToolsCallParams>(p.clone()) {
            Ok(cp) => cp,
            Err(e) => {
                return JsonRpcOutput::error(
                    id,
                    error_codes::INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                );
            }
        },
        None => {
            return JsonRpcOutput::error(
                id,
                error_codes::INVALID_PARAMS,
                "tools/call requires params",
            );
        }
    };

    // 2. Resolve against the catalog
    let operation = match Operation::resolve(&call_params.name, &call_params.arguments) {
        Ok(op) => op,
        Err(e @ CatalogError::UnknownTool { .. }) => {
            warn!(tool = %call_params.name, "tool not found");
            return JsonRpcOutput::error(id, error_codes::METHOD_NOT_FOUND, e.to_string());
        }
        Err(e @ CatalogError::InvalidArguments { .. }) => {
            warn!(tool = %call_params.name, error = %e, "invalid tool arguments");
            return JsonRpcOutput::error(id, error_codes::INVALID_PARAMS, e.to_string());
        }
    };

    // 3. Execute against the store
    let tool = operation.name();
    tracing::info!(tool, "executing tool");
    let output = match operation.apply(repository).await {
        Ok(output) => output,
        Err(e) if e.is_domain_failure() => ToolOutput::failure(e.to_string()),
        Err(e) => {
            error!(tool, error = %e, "tool execution failed");
            return JsonRpcOutput::error(
                id,
                error_codes::INTERNAL_ERROR,
                format!("Tool execution error: {e}"),
            );
        }
    };

    let text = match serde_json::to_string_pretty(&output) {
        Ok(text) => text,
        Err(e) => {
            return JsonRpcOutput::error(id, error_codes::INTERNAL_ERROR, e.to_string());
        }
    };
    let call_result = ToolsCallResult {
        content: vec![ToolContent::Text { text }],
        is_error: !output.is_success(),
    };
    JsonRpcOutput::from_result(id, call_result)
}
