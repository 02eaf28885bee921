// ABOUTME: MCP protocol message handlers for core protocol operations
// ABOUTME: Handles initialize, ping, tools, and prompts protocol messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # MCP Protocol Handlers
//!
//! Routes JSON-RPC methods to their handlers. Tool execution happens in
//! [`crate::tools::handlers`]; everything here is protocol bookkeeping.

use crate::jsonrpc::{error_codes, JsonRpcRequest, JsonRpcResponse};
use crate::mcp::schema::{InitializeResponse, ToolCall};
use crate::mcp::ServerResources;
use crate::prompts;
use crate::tools;
use chrono::Utc;
use serde_json::{json, Value};
use tracing::debug;

/// MCP protocol handlers
pub struct ProtocolHandler;

/// Default ID for error responses that don't have a request ID
fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

impl ProtocolHandler {
    /// Route a request to its handler. Notifications return `None`.
    pub async fn handle(request: JsonRpcRequest, resources: &ServerResources) -> Option<JsonRpcResponse> {
        if request.is_notification() {
            debug!("Ignoring notification: {}", request.method);
            return None;
        }

        Some(match request.method.as_str() {
            "initialize" => Self::handle_initialize(request),
            "ping" => Self::handle_ping(request),
            "tools/list" => Self::handle_tools_list(request),
            "tools/call" => Self::handle_tools_call(request, resources).await,
            "prompts/list" => Self::handle_prompts_list(request),
            "prompts/get" => Self::handle_prompts_get(request),
            _ => Self::handle_unknown_method(request),
        })
    }

    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        match serde_json::to_value(InitializeResponse::current()) {
            Ok(result) => JsonRpcResponse::success(Some(request_id), result),
            Err(_) => JsonRpcResponse::error(
                Some(request_id),
                error_codes::INTERNAL_ERROR,
                "Internal error",
            ),
        }
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        JsonRpcResponse::success(Some(request_id), json!({}))
    }

    /// Handle tools list request
    #[must_use]
    pub fn handle_tools_list(request: JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        JsonRpcResponse::success(Some(request_id), json!({ "tools": tools::get_tools() }))
    }

    /// Handle tools call request
    pub async fn handle_tools_call(
        request: JsonRpcRequest,
        resources: &ServerResources,
    ) -> JsonRpcResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);

        let call: ToolCall = match request
            .params
            .and_then(|params| serde_json::from_value(params).ok())
        {
            Some(call) => call,
            None => {
                return JsonRpcResponse::error(
                    Some(request_id),
                    error_codes::INVALID_PARAMS,
                    "Invalid tool call parameters",
                );
            }
        };

        debug!("Executing tool: {}", call.name);
        let response = tools::handlers::handle_tool_call(resources, call, Utc::now()).await;
        match serde_json::to_value(&response) {
            Ok(result) => JsonRpcResponse::success(Some(request_id), result),
            Err(e) => JsonRpcResponse::error(
                Some(request_id),
                error_codes::INTERNAL_ERROR,
                format!("Failed to serialize tool response: {e}"),
            ),
        }
    }

    /// Handle prompts list request
    #[must_use]
    pub fn handle_prompts_list(request: JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        JsonRpcResponse::success(
            Some(request_id),
            json!({ "prompts": prompts::get_prompts() }),
        )
    }

    /// Handle prompts get request
    #[must_use]
    pub fn handle_prompts_get(request: JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);

        let params = request.params.unwrap_or_else(|| json!({}));
        let Some(name) = params.get("name").and_then(Value::as_str) else {
            return JsonRpcResponse::error(
                Some(request_id),
                error_codes::INVALID_PARAMS,
                "Missing prompt name",
            );
        };

        match prompts::get_prompt(name, params.get("arguments")) {
            Some(result) => match serde_json::to_value(&result) {
                Ok(value) => JsonRpcResponse::success(Some(request_id), value),
                Err(e) => JsonRpcResponse::error(
                    Some(request_id),
                    error_codes::INTERNAL_ERROR,
                    format!("Failed to serialize prompt: {e}"),
                ),
            },
            None => JsonRpcResponse::error(
                Some(request_id),
                error_codes::METHOD_NOT_FOUND,
                format!("Unknown prompt: {name}"),
            ),
        }
    }

    /// Handle unknown method request
    #[must_use]
    pub fn handle_unknown_method(request: JsonRpcRequest) -> JsonRpcResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        JsonRpcResponse::error(
            Some(request_id),
            error_codes::METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }
}
