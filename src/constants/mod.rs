// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Groups protocol, error, tool, and environment constants by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! Constants module
//!
//! Application constants grouped by domain rather than scattered across
//! call sites: JSON-RPC error codes, MCP protocol values, tool identifiers,
//! JSON field names, and environment variable names.

/// Error codes for JSON-RPC and MCP protocols
pub mod errors {
    /// Parse error (malformed JSON received)
    pub const ERROR_PARSE: i32 = -32700;

    /// Invalid request (not a valid JSON-RPC request object)
    pub const ERROR_INVALID_REQUEST: i32 = -32600;

    /// Method not found
    pub const ERROR_METHOD_NOT_FOUND: i32 = -32601;

    /// Invalid parameters
    pub const ERROR_INVALID_PARAMS: i32 = -32602;

    /// Internal error
    pub const ERROR_INTERNAL_ERROR: i32 = -32603;

    /// Common error messages
    pub const MSG_METHOD_NOT_FOUND: &str = "Method not found";
    pub const MSG_INVALID_PARAMS: &str = "Invalid parameters";
    pub const MSG_PARSE_ERROR: &str = "Parse error";
}

/// Protocol constants for MCP and JSON-RPC
pub mod protocol {
    /// JSON-RPC version (standard, not configurable)
    pub const JSONRPC_VERSION: &str = "2.0";

    /// MCP protocol version implemented by this server
    pub const MCP_PROTOCOL_VERSION: &str = "2024-11-05";

    /// Server name advertised during initialization
    pub const SERVER_NAME: &str = "intervals-mcp-server";

    /// Server version from Cargo.toml
    pub const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");
}

/// MCP tool identifier constants
pub mod tools {
    /// Data retrieval tools
    pub const GET_ACTIVITIES: &str = "get_activities";
    pub const GET_ACTIVITY_DETAILS: &str = "get_activity_details";
    pub const GET_ACTIVITY_INTERVALS: &str = "get_activity_intervals";
    pub const GET_WELLNESS_DATA: &str = "get_wellness_data";

    /// Calendar event tools
    pub const GET_EVENTS: &str = "get_events";
    pub const GET_EVENT_BY_ID: &str = "get_event_by_id";
    pub const ADD_OR_UPDATE_EVENT: &str = "add_or_update_event";
    pub const DELETE_EVENT: &str = "delete_event";
    pub const DELETE_EVENTS_BY_DATE_RANGE: &str = "delete_events_by_date_range";
}

/// JSON field names used in tool arguments
pub mod json_fields {
    pub const START_DATE: &str = "start_date";
    pub const END_DATE: &str = "end_date";
    pub const LIMIT: &str = "limit";
    pub const INCLUDE_UNNAMED: &str = "include_unnamed";
    pub const ACTIVITY_ID: &str = "activity_id";
    pub const EVENT_ID: &str = "event_id";
    pub const CATEGORY: &str = "category";
    pub const NAME: &str = "name";
    pub const DESCRIPTION: &str = "description";
    pub const WORKOUT_DOC: &str = "workout_doc";
}

/// Environment variable names for server configuration
pub mod env_vars {
    /// Intervals.icu API key (required)
    pub const API_KEY: &str = "API_KEY";

    /// Athlete identifier, numeric or `i`-prefixed (required)
    pub const ATHLETE_ID: &str = "ATHLETE_ID";

    /// Upstream API base URL override (optional)
    pub const INTERVALS_API_BASE_URL: &str = "INTERVALS_API_BASE_URL";

    /// Minimum log level when `RUST_LOG` is not set (optional)
    pub const LOG_LEVEL: &str = "LOG_LEVEL";
}

/// Upstream API constants
pub mod api {
    /// Default Intervals.icu REST API base URL
    pub const DEFAULT_BASE_URL: &str = "https://intervals.icu/api/v1";

    /// Username sent with HTTP Basic authentication; the API key is the password
    pub const BASIC_AUTH_USERNAME: &str = "API_KEY";

    /// Per-request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connection establishment timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}
