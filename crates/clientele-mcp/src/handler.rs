//! `McpHandler`: routes JSON-RPC requests to the MCP method implementations.

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use clientele_protocol::mcp::methods;
use clientele_protocol::{
    error_codes, JsonRpcErrorResponse, JsonRpcRequest, JsonRpcResponse, RequestId,
};
use clientele_registry::CustomerRepository;

use crate::dispatch;

/// Name reported in `initialize` and the HTTP metadata endpoints.
pub const SERVER_NAME: &str = "customer-management-server";

/// Version reported alongside [`SERVER_NAME`].
pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exactly one of these is produced per request.
#[derive(Debug, Clone)]
pub enum JsonRpcOutput {
    Success(JsonRpcResponse),
    Error(JsonRpcErrorResponse),
}

impl JsonRpcOutput {
    /// Wraps a serializable result, degrading to an internal error if
    /// serialization fails.
    pub(crate) fn from_result<T: serde::Serialize>(id: RequestId, result: T) -> Self {
        match serde_json::to_value(result) {
            Ok(v) => Self::Success(JsonRpcResponse::success(id, v)),
            Err(e) => Self::error(id, error_codes::INTERNAL_ERROR, e.to_string()),
        }
    }

    pub(crate) fn error(id: RequestId, code: i32, message: impl Into<String>) -> Self {
        Self::Error(JsonRpcErrorResponse::error(id, code, message))
    }

    /// Serializes the envelope to compact JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        match self {
            Self::Success(r) => serde_json::to_string(r),
            Self::Error(r) => serde_json::to_string(r),
        }
    }

    /// The protocol error code, if this is an error envelope.
    pub fn error_code(&self) -> Option<i32> {
        match self {
            Self::Success(_) => None,
            Self::Error(r) => Some(r.error.code),
        }
    }

    /// The result payload, if this is a success envelope.
    pub fn result(&self) -> Option<&Value> {
        match self {
            Self::Success(r) => Some(&r.result),
            Self::Error(_) => None,
        }
    }
}

/// Stateless MCP request dispatcher over a customer store.
///
/// Holds no per-request state; one instance is shared by every connection.
pub struct McpHandler {
    repository: Arc<dyn CustomerRepository>,
}

impl McpHandler {
    /// Creates a handler bound to the given store.
    pub fn new(repository: Arc<dyn CustomerRepository>) -> Self {
        Self { repository }
    }

    /// Dispatches one request and returns its single response envelope.
    pub async fn dispatch(&self, request: &JsonRpcRequest) -> JsonRpcOutput {
        let id = request.id.clone();
        debug!(method = %request.method, id = ?id, "dispatching request");

        match request.method.as_str() {
            methods::INITIALIZE => dispatch::initialize::handle_initialize(id),
            methods::TOOLS_LIST => dispatch::tools_list::handle_tools_list(id),
            methods::TOOLS_CALL => {
                dispatch::tools_call::handle_tools_call(
                    id,
                    &request.params,
                    self.repository.as_ref(),
                )
                .await
            }
            other => {
                warn!(method = %other, "unknown method");
                JsonRpcOutput::error(
                    id,
                    error_codes::METHOD_NOT_FOUND,
                    format!("Method not found: {other}"),
                )
            }
        }
    }
}
