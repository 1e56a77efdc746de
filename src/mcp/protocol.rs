// ABOUTME: MCP protocol message types and handlers for core protocol operations
// ABOUTME: Handles initialize, ping, and listing methods; tools/call lives in tool_handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # MCP Protocol Handlers
//!
//! JSON-RPC 2.0 request/response types and the handlers for protocol-level
//! methods: initialization, liveness, and catalog listings.

use crate::constants::{
    errors::ERROR_METHOD_NOT_FOUND,
    protocol::{JSONRPC_VERSION, MCP_PROTOCOL_VERSION, SERVER_NAME, SERVER_VERSION},
};
use crate::mcp::schema::{get_tools, InitializeResponse};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// MCP request
#[derive(Debug, Clone, Deserialize)]
pub struct McpRequest {
    /// JSON-RPC version marker
    #[serde(default)]
    pub jsonrpc: String,
    /// Method name (`initialize`, `tools/call`, ...)
    pub method: String,
    /// Method parameters
    pub params: Option<Value>,
    /// Optional ID - notifications don't have IDs, only regular requests do
    pub id: Option<Value>,
}

/// MCP response
#[derive(Debug, Clone, Serialize)]
pub struct McpResponse {
    /// JSON-RPC version marker
    pub jsonrpc: String,
    /// Result payload on success
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    /// Error payload on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<McpError>,
    /// Request ID the response answers
    pub id: Value,
}

/// MCP error
#[derive(Debug, Clone, Serialize)]
pub struct McpError {
    /// JSON-RPC error code
    pub code: i32,
    /// Human-readable error message
    pub message: String,
    /// Optional structured error data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl McpResponse {
    /// Create a successful MCP response
    #[must_use]
    pub fn success(id: Value, result: Value) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: Some(result),
            error: None,
            id,
        }
    }

    /// Create an error MCP response
    #[must_use]
    pub fn error(id: Value, code: i32, message: String) -> Self {
        Self {
            jsonrpc: JSONRPC_VERSION.to_owned(),
            result: None,
            error: Some(McpError {
                code,
                message,
                data: None,
            }),
            id,
        }
    }
}

/// Default ID for error responses that don't have a request ID
pub(crate) fn default_request_id() -> Value {
    Value::Number(serde_json::Number::from(0))
}

/// MCP protocol handlers
pub struct ProtocolHandler;

impl ProtocolHandler {
    /// Handle initialize request
    #[must_use]
    pub fn handle_initialize(request: McpRequest) -> McpResponse {
        let init_response = InitializeResponse::new(
            MCP_PROTOCOL_VERSION.to_owned(),
            SERVER_NAME.to_owned(),
            SERVER_VERSION.to_owned(),
        );

        let request_id = request.id.unwrap_or_else(default_request_id);
        match serde_json::to_value(&init_response) {
            Ok(result) => McpResponse::success(request_id, result),
            Err(_) => McpResponse::error(request_id, -32603, "Internal error".to_owned()),
        }
    }

    /// Handle ping request
    #[must_use]
    pub fn handle_ping(request: McpRequest) -> McpResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({}))
    }

    /// Handle tools list request
    #[must_use]
    pub fn handle_tools_list(request: McpRequest) -> McpResponse {
        let tools = get_tools();
        let request_id = request.id.unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({ "tools": tools }))
    }

    /// Handle prompts list request
    #[must_use]
    pub fn handle_prompts_list(request: McpRequest) -> McpResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({ "prompts": [] }))
    }

    /// Handle resources list request
    #[must_use]
    pub fn handle_resources_list(request: McpRequest) -> McpResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        McpResponse::success(request_id, serde_json::json!({ "resources": [] }))
    }

    /// Handle unknown method request
    #[must_use]
    pub fn handle_unknown_method(request: McpRequest) -> McpResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);
        McpResponse::error(
            request_id,
            ERROR_METHOD_NOT_FOUND,
            format!("Unknown method: {}", request.method),
        )
    }
}
