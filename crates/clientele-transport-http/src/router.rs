//! Axum router for the MCP HTTP transport.
//! Routes: `POST /mcp` (requests), `GET /health` (liveness), `GET /` (metadata).

use std::any::Any;
use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{catch_panic::CatchPanicLayer, cors::CorsLayer, trace::TraceLayer};

use clientele_mcp::{catalog, McpHandler, SERVER_NAME, SERVER_VERSION};
use clientele_protocol::mcp::initialize::PROTOCOL_VERSION;
use clientele_protocol::{error_codes, JsonRpcErrorResponse, JsonRpcRequest};

use crate::sse;

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The MCP request dispatcher.
    pub handler: Arc<McpHandler>,
}

/// Builds the axum `Router` with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        .route("/mcp", post(handle_mcp))
        .fallback(handle_not_found)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn handle_health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "server": SERVER_NAME,
        "version": SERVER_VERSION,
        "protocol": PROTOCOL_VERSION,
    }))
}

async fn handle_index() -> impl IntoResponse {
    Json(json!({
        "name": SERVER_NAME,
        "version": SERVER_VERSION,
        "protocol": PROTOCOL_VERSION,
        "endpoints": {
            "mcp": "/mcp (POST)",
            "health": "/health (GET)",
        },
        "tools": catalog::tool_names(),
    }))
}

async fn handle_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Not found",
            "message": "The requested endpoint does not exist",
        })),
    )
}

/// Converts a handler panic into a structured 500 response.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "request handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({
            "error": "Internal server error",
            "message": "An unexpected error occurred",
        })),
    )
        .into_response()
}

async fn handle_mcp(State(state): State<AppState>, body: Bytes) -> Response {
    let json_val: Value = match serde_json::from_slice(&body) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(error = %e, "malformed request body");
            return parse_error(e);
        }
    };

    let request: JsonRpcRequest = match serde_json::from_value(json_val) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "request is not a JSON-RPC message");
            return parse_error(e);
        }
    };

    tracing::info!(method = %request.method, "received MCP message");
    let output = state.handler.dispatch(&request).await;
    match output.to_json() {
        Ok(json_str) => sse::single_event(json_str),
        Err(e) => {
            tracing::error!(error = %e, "failed to serialize response");
            let body = JsonRpcErrorResponse::error(
                request.id,
                error_codes::INTERNAL_ERROR,
                format!("Internal error: {e}"),
            );
            (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
        }
    }
}

/// Produces a 400 JSON-RPC parse error with `id: null`.
fn parse_error(detail: impl std::fmt::Display) -> Response {
    let body = JsonRpcErrorResponse::parse_error(detail);
    (StatusCode::BAD_REQUEST, Json(body)).into_response()
}
