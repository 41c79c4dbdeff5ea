//! Shared helpers for dispatcher tests.

#![allow(dead_code)]

use std::sync::Arc;

use serde_json::{json, Value};

use clientele_mcp::{JsonRpcOutput, McpHandler};
use clientele_protocol::mcp::methods;
use clientele_protocol::{JsonRpcRequest, RequestId};
use clientele_store_sqlite::SqliteCustomerRepository;

pub fn make_handler() -> McpHandler {
    let repo = SqliteCustomerRepository::open_in_memory().expect("db");
    McpHandler::new(Arc::new(repo))
}

pub fn rpc(method: &str, id: i64, params: Option<Value>) -> JsonRpcRequest {
    JsonRpcRequest::new(RequestId::from(id), method, params)
}

pub fn call(id: i64, tool: &str, arguments: Value) -> JsonRpcRequest {
    rpc(
        methods::TOOLS_CALL,
        id,
        Some(json!({"name": tool, "arguments": arguments})),
    )
}

/// Decodes the JSON payload inside a successful `tools/call` response.
pub fn payload(output: &JsonRpcOutput) -> Value {
    let result = output.result().expect("success envelope");
    let text = result["content"][0]["text"].as_str().expect("text content");
    serde_json::from_str(text).expect("payload json")
}
