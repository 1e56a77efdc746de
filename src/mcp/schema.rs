// ABOUTME: MCP protocol schema definitions and message structures
// ABOUTME: Defines JSON-RPC protocol schemas and the tool catalog for tools/list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! MCP Protocol Schema Definitions
//!
//! Type-safe definitions for MCP protocol messages, capabilities, and tool
//! schemas, so the advertised catalog is built from one place instead of
//! hardcoded JSON.

use crate::constants::{
    json_fields::{
        ACTIVITY_ID, CATEGORY, DESCRIPTION, END_DATE, EVENT_ID, INCLUDE_UNNAMED, LIMIT, NAME,
        START_DATE, WORKOUT_DOC,
    },
    tools::{
        ADD_OR_UPDATE_EVENT, DELETE_EVENT, DELETE_EVENTS_BY_DATE_RANGE, GET_ACTIVITIES,
        GET_ACTIVITY_DETAILS, GET_ACTIVITY_INTERVALS, GET_EVENTS, GET_EVENT_BY_ID,
        GET_WELLNESS_DATA,
    },
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server Information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name
    pub name: String,
    /// Server version
    pub version: String,
}

/// MCP Tool Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolSchema {
    /// Tool identifier
    pub name: String,
    /// Human-readable tool description
    pub description: String,
    /// JSON schema for the tool arguments
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonSchema,
}

/// JSON Schema Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonSchema {
    /// Schema type, always `object` for tool inputs
    #[serde(rename = "type")]
    pub schema_type: String,
    /// Property definitions
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<HashMap<String, PropertySchema>>,
    /// Required property names
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,
}

/// JSON Schema Property Definition
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PropertySchema {
    /// Property type
    #[serde(rename = "type")]
    pub property_type: String,
    /// Property description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Parsed parameters of a tools/call request
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCallParams {
    /// Tool identifier
    pub name: String,
    /// Tool arguments; absent means no arguments
    #[serde(default)]
    pub arguments: Option<serde_json::Value>,
}

/// Tool Response after execution
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolResponse {
    /// Response content blocks
    pub content: Vec<Content>,
    /// Whether the tool failed; failures are still successful JSON-RPC responses
    #[serde(rename = "isError")]
    pub is_error: bool,
}

impl ToolResponse {
    /// Wrap a successful tool result
    #[must_use]
    pub fn text(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: false,
        }
    }

    /// Wrap a tool failure as a single descriptive line
    #[must_use]
    pub fn error(text: String) -> Self {
        Self {
            content: vec![Content::Text { text }],
            is_error: true,
        }
    }
}

/// Content types for MCP messages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Content {
    /// Plain text content
    #[serde(rename = "text")]
    Text {
        /// The text payload
        text: String,
    },
}

/// MCP Server Capabilities
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerCapabilities {
    /// Tools capability
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tools: Option<ToolsCapability>,
}

/// Tools capability
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolsCapability {
    /// Whether the tool list can change during a session
    #[serde(rename = "listChanged", skip_serializing_if = "Option::is_none")]
    pub list_changed: Option<bool>,
}

/// Complete MCP Initialize Response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InitializeResponse {
    /// Protocol version implemented by the server
    #[serde(rename = "protocolVersion")]
    pub protocol_version: String,
    /// Server identification
    #[serde(rename = "serverInfo")]
    pub server_info: ServerInfo,
    /// Advertised capabilities
    pub capabilities: ServerCapabilities,
    /// Usage instructions for the client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
}

impl InitializeResponse {
    /// Create an initialize response for this server
    #[must_use]
    pub fn new(protocol_version: String, server_name: String, server_version: String) -> Self {
        Self {
            protocol_version,
            server_info: ServerInfo {
                name: server_name,
                version: server_version,
            },
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            instructions: Some(
                "This server provides access to Intervals.icu fitness data: activities, \
                 interval analysis, wellness records, and calendar events. Use `get_activities` \
                 and `get_wellness_data` with YYYY-MM-DD date ranges, and the event tools to \
                 plan or remove workouts."
                    .into(),
            ),
        }
    }
}

/// Get all available tools
#[must_use]
pub fn get_tools() -> Vec<ToolSchema> {
    vec![
        create_get_activities_tool(),
        create_get_activity_details_tool(),
        create_get_activity_intervals_tool(),
        create_get_wellness_data_tool(),
        create_get_events_tool(),
        create_get_event_by_id_tool(),
        create_add_or_update_event_tool(),
        create_delete_event_tool(),
        create_delete_events_by_date_range_tool(),
    ]
}

fn string_prop(description: &str) -> PropertySchema {
    PropertySchema {
        property_type: "string".into(),
        description: Some(description.into()),
    }
}

fn date_range_properties() -> HashMap<String, PropertySchema> {
    let mut properties = HashMap::new();
    properties.insert(
        START_DATE.to_owned(),
        string_prop("Range start date in YYYY-MM-DD format"),
    );
    properties.insert(
        END_DATE.to_owned(),
        string_prop("Range end date in YYYY-MM-DD format (inclusive)"),
    );
    properties
}

/// Create the `get_activities` tool schema
fn create_get_activities_tool() -> ToolSchema {
    let mut properties = date_range_properties();
    properties.insert(
        LIMIT.to_owned(),
        PropertySchema {
            property_type: "number".into(),
            description: Some("Maximum number of activities to return".into()),
        },
    );
    properties.insert(
        INCLUDE_UNNAMED.to_owned(),
        PropertySchema {
            property_type: "boolean".into(),
            description: Some("Include activities without a name (default: false)".into()),
        },
    );

    ToolSchema {
        name: GET_ACTIVITIES.to_owned(),
        description: "Get activities within a date range".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![START_DATE.to_owned(), END_DATE.to_owned()]),
        },
    }
}

/// Create the `get_activity_details` tool schema
fn create_get_activity_details_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        ACTIVITY_ID.to_owned(),
        string_prop("ID of the activity to fetch"),
    );

    ToolSchema {
        name: GET_ACTIVITY_DETAILS.to_owned(),
        description: "Get detailed metrics for a single activity".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![ACTIVITY_ID.to_owned()]),
        },
    }
}

/// Create the `get_activity_intervals` tool schema
fn create_get_activity_intervals_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        ACTIVITY_ID.to_owned(),
        string_prop("ID of the activity whose intervals to fetch"),
    );

    ToolSchema {
        name: GET_ACTIVITY_INTERVALS.to_owned(),
        description: "Get the ordered interval (lap) analysis for an activity".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![ACTIVITY_ID.to_owned()]),
        },
    }
}

/// Create the `get_wellness_data` tool schema
fn create_get_wellness_data_tool() -> ToolSchema {
    ToolSchema {
        name: GET_WELLNESS_DATA.to_owned(),
        description: "Get daily wellness records (fitness, fatigue, sleep, HRV, ...) within a date range".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(date_range_properties()),
            required: Some(vec![START_DATE.to_owned(), END_DATE.to_owned()]),
        },
    }
}

/// Create the `get_events` tool schema
fn create_get_events_tool() -> ToolSchema {
    ToolSchema {
        name: GET_EVENTS.to_owned(),
        description: "Get calendar events (planned workouts, races) within a date range".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(date_range_properties()),
            required: Some(vec![START_DATE.to_owned(), END_DATE.to_owned()]),
        },
    }
}

/// Create the `get_event_by_id` tool schema
fn create_get_event_by_id_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(EVENT_ID.to_owned(), string_prop("ID of the event to fetch"));

    ToolSchema {
        name: GET_EVENT_BY_ID.to_owned(),
        description: "Get a single calendar event, including its workout structure".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![EVENT_ID.to_owned()]),
        },
    }
}

/// Create the `add_or_update_event` tool schema
fn create_add_or_update_event_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(
        START_DATE.to_owned(),
        string_prop("Event date in YYYY-MM-DD format"),
    );
    properties.insert(NAME.to_owned(), string_prop("Event name"));
    properties.insert(
        CATEGORY.to_owned(),
        string_prop("Event category such as WORKOUT, RACE_A, or NOTE (default: WORKOUT)"),
    );
    properties.insert(
        DESCRIPTION.to_owned(),
        string_prop("Free-text event description"),
    );
    properties.insert(
        EVENT_ID.to_owned(),
        string_prop("Existing event ID; when present the event is updated instead of created"),
    );
    properties.insert(
        WORKOUT_DOC.to_owned(),
        PropertySchema {
            property_type: "object".into(),
            description: Some(
                "Structured workout to attach: {description?, steps?: [{duration?, distance?, \
                 reps?, intensity?, power?, hr?, pace?, cadence?, ...}]}"
                    .into(),
            ),
        },
    );

    ToolSchema {
        name: ADD_OR_UPDATE_EVENT.to_owned(),
        description: "Create a calendar event, or update one when event_id is given".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![START_DATE.to_owned(), NAME.to_owned()]),
        },
    }
}

/// Create the `delete_event` tool schema
fn create_delete_event_tool() -> ToolSchema {
    let mut properties = HashMap::new();
    properties.insert(EVENT_ID.to_owned(), string_prop("ID of the event to delete"));

    ToolSchema {
        name: DELETE_EVENT.to_owned(),
        description: "Delete a single calendar event".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(properties),
            required: Some(vec![EVENT_ID.to_owned()]),
        },
    }
}

/// Create the `delete_events_by_date_range` tool schema
fn create_delete_events_by_date_range_tool() -> ToolSchema {
    ToolSchema {
        name: DELETE_EVENTS_BY_DATE_RANGE.to_owned(),
        description: "Delete all calendar events within a date range and report the count".into(),
        input_schema: JsonSchema {
            schema_type: "object".into(),
            properties: Some(date_range_properties()),
            required: Some(vec![START_DATE.to_owned(), END_DATE.to_owned()]),
        },
    }
}
