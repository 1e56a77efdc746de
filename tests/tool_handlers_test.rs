// ABOUTME: Integration tests for tool call validation and error normalization
// ABOUTME: Uses an unroutable upstream so validation failures provably precede I/O
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use intervals_mcp_server::config::{AthleteId, LogLevel, ServerConfig};
use intervals_mcp_server::mcp::protocol::{McpRequest, McpResponse};
use intervals_mcp_server::mcp::resources::ServerResources;
use intervals_mcp_server::mcp::tool_handlers::ToolHandlers;
use serde_json::{json, Value};
use std::sync::Arc;

/// Resources whose upstream cannot be reached; any network attempt fails
/// as a connection error, so a validation-error result proves no call was made
fn unroutable_resources() -> Arc<ServerResources> {
    let config = ServerConfig {
        api_key: "test-key".to_owned(),
        athlete_id: AthleteId::parse("i12345").unwrap(),
        base_url: "http://127.0.0.1:9/api/v1".to_owned(),
        log_level: LogLevel::Info,
    };
    Arc::new(ServerResources::new(config))
}

fn tool_call(name: &str, arguments: Value) -> McpRequest {
    McpRequest {
        jsonrpc: "2.0".to_owned(),
        method: "tools/call".to_owned(),
        params: Some(json!({ "name": name, "arguments": arguments })),
        id: Some(json!(1)),
    }
}

/// Pull the single text block and error flag out of a tool response
fn tool_output(response: &McpResponse) -> (String, bool) {
    let result = response.result.as_ref().expect("tool response expected");
    let is_error = result["isError"].as_bool().unwrap();
    let text = result["content"][0]["text"].as_str().unwrap().to_owned();
    (text, is_error)
}

#[tokio::test]
async fn test_missing_required_date_is_validation_error() {
    let resources = unroutable_resources();
    let request = tool_call("get_activities", json!({ "start_date": "2024-05-01" }));

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let (text, is_error) = tool_output(&response);
    assert!(is_error);
    assert!(text.starts_with("Validation error"));
    assert!(text.contains("end_date"));
}

#[tokio::test]
async fn test_malformed_date_is_validation_error() {
    let resources = unroutable_resources();
    let request = tool_call(
        "get_wellness_data",
        json!({ "start_date": "05/01/2024", "end_date": "2024-05-07" }),
    );

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let (text, is_error) = tool_output(&response);
    assert!(is_error);
    assert!(text.starts_with("Validation error"));
    assert!(text.contains("YYYY-MM-DD"));
}

#[tokio::test]
async fn test_reversed_range_rejected_before_network() {
    let resources = unroutable_resources();
    let request = tool_call(
        "delete_events_by_date_range",
        json!({ "start_date": "2024-05-07", "end_date": "2024-05-01" }),
    );

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let (text, is_error) = tool_output(&response);
    assert!(is_error);
    // A connection error here would mean the handler reached the network
    assert!(text.starts_with("Validation error"));
}

#[tokio::test]
async fn test_non_positive_id_is_validation_error() {
    let resources = unroutable_resources();

    for bad_id in [json!(0), json!(-5), json!("")] {
        let request = tool_call("get_activity_details", json!({ "activity_id": bad_id.clone() }));
        let response = ToolHandlers::handle_tools_call(request, &resources).await;
        let (text, is_error) = tool_output(&response);
        assert!(is_error);
        assert!(text.starts_with("Validation error"), "id {bad_id}: {text}");
    }
}

#[tokio::test]
async fn test_bad_limit_is_validation_error() {
    let resources = unroutable_resources();
    let request = tool_call(
        "get_activities",
        json!({ "start_date": "2024-05-01", "end_date": "2024-05-07", "limit": 0 }),
    );

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let (text, is_error) = tool_output(&response);
    assert!(is_error);
    assert!(text.contains("'limit' must be a positive integer"));
}

#[tokio::test]
async fn test_add_or_update_event_requires_name() {
    let resources = unroutable_resources();
    let request = tool_call("add_or_update_event", json!({ "start_date": "2024-05-06" }));

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let (text, is_error) = tool_output(&response);
    assert!(is_error);
    assert!(text.contains("'name'"));
}

#[tokio::test]
async fn test_malformed_workout_doc_is_validation_error() {
    let resources = unroutable_resources();
    let request = tool_call(
        "add_or_update_event",
        json!({
            "start_date": "2024-05-06",
            "name": "Broken",
            "workout_doc": { "steps": [{ "power": { "units": "furlongs" } }] }
        }),
    );

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let (text, is_error) = tool_output(&response);
    assert!(is_error);
    assert!(text.starts_with("Validation error"));
    assert!(text.contains("workout_doc"));
}

#[tokio::test]
async fn test_valid_arguments_reach_network_and_normalize_failure() {
    let resources = unroutable_resources();
    let request = tool_call(
        "get_activities",
        json!({ "start_date": "2024-05-01", "end_date": "2024-05-07" }),
    );

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let (text, is_error) = tool_output(&response);
    assert!(is_error);
    // The upstream is unreachable, so the error must be the connection kind
    assert!(text.starts_with("Connection error"), "{text}");
}

#[tokio::test]
async fn test_unknown_tool_is_method_not_found() {
    let resources = unroutable_resources();
    let request = tool_call("get_weather", json!({}));

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let error = response.error.expect("JSON-RPC error expected");
    assert_eq!(error.code, -32601);
    assert!(error.message.contains("get_weather"));
}

#[tokio::test]
async fn test_missing_params_is_invalid_params() {
    let resources = unroutable_resources();
    let request = McpRequest {
        jsonrpc: "2.0".to_owned(),
        method: "tools/call".to_owned(),
        params: None,
        id: Some(json!(4)),
    };

    let response = ToolHandlers::handle_tools_call(request, &resources).await;
    let error = response.error.expect("JSON-RPC error expected");
    assert_eq!(error.code, -32602);
}
