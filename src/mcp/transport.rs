// ABOUTME: Stdio transport running the newline-delimited JSON-RPC loop
// ABOUTME: Reads requests from stdin, writes responses to stdout, logs to stderr
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # Stdio Transport
//!
//! One JSON-RPC message per line on stdin, one response per line on stdout.
//! Notifications (requests without an id) are consumed without a response.
//! Malformed JSON produces a parse-error response rather than terminating
//! the loop.

use crate::constants::errors::{ERROR_PARSE, MSG_PARSE_ERROR};
use crate::mcp::protocol::{default_request_id, McpRequest, McpResponse, ProtocolHandler};
use crate::mcp::resources::ServerResources;
use crate::mcp::tool_handlers::ToolHandlers;
use anyhow::Result;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

/// Stdio transport for MCP communication
pub struct StdioTransport {
    resources: Arc<ServerResources>,
}

impl StdioTransport {
    /// Create a transport over the shared server resources
    #[must_use]
    pub fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Run the stdio loop until stdin closes
    ///
    /// # Errors
    ///
    /// Returns an error if reading from stdin fails.
    pub async fn run(&self) -> Result<()> {
        info!("MCP stdio transport ready - listening on stdin/stdout");

        let stdin = tokio::io::stdin();
        let mut lines = BufReader::new(stdin).lines();

        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }

            match serde_json::from_str::<McpRequest>(&line) {
                Ok(request) => {
                    if let Some(response) = handle_request(request, &self.resources).await {
                        write_response(&response);
                    }
                }
                Err(e) => {
                    warn!("Invalid JSON-RPC message: {}", e);
                    write_response(&parse_error_response());
                }
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }
}

/// Route one request to its handler; `None` for notifications
pub async fn handle_request(
    request: McpRequest,
    resources: &Arc<ServerResources>,
) -> Option<McpResponse> {
    // Notifications carry no id and expect no response
    if request.id.is_none() {
        return None;
    }

    let response = match request.method.as_str() {
        "initialize" => ProtocolHandler::handle_initialize(request),
        "ping" => ProtocolHandler::handle_ping(request),
        "tools/list" => ProtocolHandler::handle_tools_list(request),
        "prompts/list" => ProtocolHandler::handle_prompts_list(request),
        "resources/list" => ProtocolHandler::handle_resources_list(request),
        "tools/call" => ToolHandlers::handle_tools_call(request, resources).await,
        _ => ProtocolHandler::handle_unknown_method(request),
    };
    Some(response)
}

/// Response for undecodable inbound frames
fn parse_error_response() -> McpResponse {
    McpResponse::error(
        default_request_id(),
        ERROR_PARSE,
        MSG_PARSE_ERROR.to_owned(),
    )
}

fn write_response(response: &McpResponse) {
    match serde_json::to_string(response) {
        Ok(serialized) => println!("{serialized}"),
        Err(e) => error!("Failed to serialize response: {}", e),
    }
}
