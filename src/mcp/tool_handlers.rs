// ABOUTME: Tool execution handlers for MCP tools/call routing and execution
// ABOUTME: Each handler validates arguments, makes one upstream call, formats the result
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # Tool Execution Handlers
//!
//! One handler per exposed tool. Every handler follows the same shape:
//! validate arguments (returning a validation error before any network
//! call on bad input), delegate to the upstream client, and format the
//! payload. Failures of any kind become a single line of text returned as
//! the tool's output with `isError` set; they never surface as JSON-RPC
//! faults to the hosting client.

use crate::constants::{
    errors::{ERROR_INTERNAL_ERROR, ERROR_INVALID_PARAMS, ERROR_METHOD_NOT_FOUND},
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
use crate::errors::{IntervalsError, IntervalsResult};
use crate::formatters::{
    format_activity, format_activity_intervals, format_event, format_wellness_entry,
};
use crate::mcp::protocol::{default_request_id, McpRequest, McpResponse};
use crate::mcp::resources::ServerResources;
use crate::mcp::schema::{ToolCallParams, ToolResponse};
use crate::models::EventInput;
use crate::workouts::WorkoutDoc;
use chrono::NaiveDate;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, warn};

/// Separator between formatted list elements
const BLOCK_SEPARATOR: &str = "\n\n";

/// Tool execution handlers for MCP protocol
pub struct ToolHandlers;

impl ToolHandlers {
    /// Handle a tools/call request
    #[tracing::instrument(skip(request, resources), fields(request_id = ?request.id))]
    pub async fn handle_tools_call(
        request: McpRequest,
        resources: &Arc<ServerResources>,
    ) -> McpResponse {
        let request_id = request.id.unwrap_or_else(default_request_id);

        let Some(params) = request.params else {
            return McpResponse::error(
                request_id,
                ERROR_INVALID_PARAMS,
                "Invalid params: missing request parameters".to_owned(),
            );
        };
        let tool_params = match serde_json::from_value::<ToolCallParams>(params) {
            Ok(p) => p,
            Err(e) => {
                return McpResponse::error(
                    request_id,
                    ERROR_INVALID_PARAMS,
                    format!("Invalid tool call parameters: {e}"),
                );
            }
        };

        let args = tool_params.arguments.unwrap_or(Value::Null);
        debug!(tool = %tool_params.name, "dispatching tool call");

        let outcome = match tool_params.name.as_str() {
            GET_ACTIVITIES => Self::get_activities(&args, resources).await,
            GET_ACTIVITY_DETAILS => Self::get_activity_details(&args, resources).await,
            GET_ACTIVITY_INTERVALS => Self::get_activity_intervals(&args, resources).await,
            GET_WELLNESS_DATA => Self::get_wellness_data(&args, resources).await,
            GET_EVENTS => Self::get_events(&args, resources).await,
            GET_EVENT_BY_ID => Self::get_event_by_id(&args, resources).await,
            ADD_OR_UPDATE_EVENT => Self::add_or_update_event(&args, resources).await,
            DELETE_EVENT => Self::delete_event(&args, resources).await,
            DELETE_EVENTS_BY_DATE_RANGE => {
                Self::delete_events_by_date_range(&args, resources).await
            }
            unknown => {
                return McpResponse::error(
                    request_id,
                    ERROR_METHOD_NOT_FOUND,
                    format!("Unknown tool: {unknown}"),
                );
            }
        };

        let tool_response = match outcome {
            Ok(text) => ToolResponse::text(text),
            Err(e) => {
                warn!(tool = %tool_params.name, error = %e, "tool call failed");
                ToolResponse::error(e.to_string())
            }
        };
        match serde_json::to_value(&tool_response) {
            Ok(result) => McpResponse::success(request_id, result),
            Err(e) => McpResponse::error(
                request_id,
                ERROR_INTERNAL_ERROR,
                format!("Failed to serialize tool response: {e}"),
            ),
        }
    }

    /// `get_activities`: list activities in a date range
    async fn get_activities(args: &Value, resources: &ServerResources) -> IntervalsResult<String> {
        let (oldest, newest) = date_range(args)?;
        let limit = optional_limit(args)?;
        let include_unnamed = optional_bool(args, INCLUDE_UNNAMED)?.unwrap_or(false);

        let mut activities = resources.client.get_activities(oldest, newest).await?;
        if !include_unnamed {
            activities.retain(crate::models::Activity::is_named);
        }
        if let Some(limit) = limit {
            activities.truncate(limit);
        }

        if activities.is_empty() {
            return Ok("No activities found for the specified date range.".to_owned());
        }
        Ok(activities
            .iter()
            .map(format_activity)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR))
    }

    /// `get_activity_details`: fetch one activity
    async fn get_activity_details(
        args: &Value,
        resources: &ServerResources,
    ) -> IntervalsResult<String> {
        let activity_id = required_id(args, ACTIVITY_ID)?;
        let activity = resources.client.get_activity(&activity_id).await?;
        Ok(format_activity(&activity))
    }

    /// `get_activity_intervals`: ordered lap analysis for one activity
    async fn get_activity_intervals(
        args: &Value,
        resources: &ServerResources,
    ) -> IntervalsResult<String> {
        let activity_id = required_id(args, ACTIVITY_ID)?;
        let response = resources.client.get_activity_intervals(&activity_id).await?;
        if response.icu_intervals.is_empty() {
            return Ok("No intervals found for this activity.".to_owned());
        }
        Ok(format_activity_intervals(&response))
    }

    /// `get_wellness_data`: daily wellness records in a date range
    async fn get_wellness_data(
        args: &Value,
        resources: &ServerResources,
    ) -> IntervalsResult<String> {
        let (oldest, newest) = date_range(args)?;
        let entries = resources.client.get_wellness(oldest, newest).await?;
        if entries.is_empty() {
            return Ok("No wellness entries found for the specified date range.".to_owned());
        }
        Ok(entries
            .iter()
            .map(format_wellness_entry)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR))
    }

    /// `get_events`: calendar events in a date range
    async fn get_events(args: &Value, resources: &ServerResources) -> IntervalsResult<String> {
        let (oldest, newest) = date_range(args)?;
        let events = resources.client.get_events(oldest, newest).await?;
        if events.is_empty() {
            return Ok("No events found for the specified date range.".to_owned());
        }
        Ok(events
            .iter()
            .map(format_event)
            .collect::<Vec<_>>()
            .join(BLOCK_SEPARATOR))
    }

    /// `get_event_by_id`: fetch one calendar event
    async fn get_event_by_id(args: &Value, resources: &ServerResources) -> IntervalsResult<String> {
        let event_id = required_id(args, EVENT_ID)?;
        let event = resources.client.get_event(&event_id).await?;
        Ok(format_event(&event))
    }

    /// `add_or_update_event`: create an event, or update when `event_id` is given
    async fn add_or_update_event(
        args: &Value,
        resources: &ServerResources,
    ) -> IntervalsResult<String> {
        let start_date = parse_date(START_DATE, required_str(args, START_DATE)?)?;
        let name = required_str(args, NAME)?;
        let category = optional_str(args, CATEGORY)?
            .unwrap_or("WORKOUT")
            .to_owned();
        let description = optional_str(args, DESCRIPTION)?.map(str::to_owned);
        let workout_doc = optional_workout_doc(args)?;
        let event_id = optional_id(args, EVENT_ID)?;

        let input = EventInput {
            start_date_local: start_date.to_string(),
            category,
            name: Some(name.to_owned()),
            description,
            event_type: None,
            workout_doc,
        };

        if let Some(event_id) = event_id {
            let updated = resources.client.update_event(&event_id, &input).await?;
            let resulting_id = updated.id.unwrap_or(event_id);
            Ok(format!("Updated event {resulting_id}."))
        } else {
            let created = resources.client.create_event(&input).await?;
            match created.id {
                Some(id) => Ok(format!("Created event {id}.")),
                None => Ok("Created event.".to_owned()),
            }
        }
    }

    /// `delete_event`: delete one calendar event
    async fn delete_event(args: &Value, resources: &ServerResources) -> IntervalsResult<String> {
        let event_id = required_id(args, EVENT_ID)?;
        resources.client.delete_event(&event_id).await?;
        Ok(format!("Deleted event {event_id}."))
    }

    /// `delete_events_by_date_range`: delete every event in the range, reporting the count
    async fn delete_events_by_date_range(
        args: &Value,
        resources: &ServerResources,
    ) -> IntervalsResult<String> {
        let (oldest, newest) = date_range(args)?;
        let events = resources.client.get_events(oldest, newest).await?;

        let mut deleted = 0usize;
        for event in events {
            let Some(id) = event.id else { continue };
            resources.client.delete_event(&id).await?;
            deleted += 1;
        }

        if deleted == 0 {
            return Ok(format!(
                "No events found between {oldest} and {newest}; nothing deleted."
            ));
        }
        Ok(format!(
            "Deleted {deleted} event(s) between {oldest} and {newest}."
        ))
    }
}

/// Look up a required string argument
fn required_str<'a>(args: &'a Value, field: &str) -> IntervalsResult<&'a str> {
    match args.get(field) {
        Some(Value::String(s)) if !s.trim().is_empty() => Ok(s),
        Some(Value::String(_)) => Err(IntervalsError::validation(format!(
            "'{field}' must not be empty"
        ))),
        Some(_) => Err(IntervalsError::validation(format!(
            "'{field}' must be a string"
        ))),
        None => Err(IntervalsError::validation(format!(
            "missing required argument '{field}'"
        ))),
    }
}

/// Look up an optional string argument
fn optional_str<'a>(args: &'a Value, field: &str) -> IntervalsResult<Option<&'a str>> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(_) => Err(IntervalsError::validation(format!(
            "'{field}' must be a string"
        ))),
    }
}

/// Look up an optional boolean argument
fn optional_bool(args: &Value, field: &str) -> IntervalsResult<Option<bool>> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(_) => Err(IntervalsError::validation(format!(
            "'{field}' must be a boolean"
        ))),
    }
}

/// Parse a calendar date argument in `YYYY-MM-DD` form
fn parse_date(field: &str, raw: &str) -> IntervalsResult<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        IntervalsError::validation(format!(
            "'{field}' must be a date in YYYY-MM-DD format, got '{raw}'"
        ))
    })
}

/// Parse and order-check the start/end date pair shared by range tools
fn date_range(args: &Value) -> IntervalsResult<(NaiveDate, NaiveDate)> {
    let start = parse_date(START_DATE, required_str(args, START_DATE)?)?;
    let end = parse_date(END_DATE, required_str(args, END_DATE)?)?;
    if start > end {
        return Err(IntervalsError::validation(format!(
            "'{START_DATE}' ({start}) must not be after '{END_DATE}' ({end})"
        )));
    }
    Ok((start, end))
}

/// Parse the optional positive `limit` argument
fn optional_limit(args: &Value) -> IntervalsResult<Option<usize>> {
    match args.get(LIMIT) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(n)) => match n.as_i64() {
            Some(v) if v > 0 => Ok(Some(v as usize)),
            _ => Err(IntervalsError::validation(format!(
                "'{LIMIT}' must be a positive integer"
            ))),
        },
        Some(_) => Err(IntervalsError::validation(format!(
            "'{LIMIT}' must be a positive integer"
        ))),
    }
}

/// Accept an id as a JSON string or positive number, normalized to a string
fn id_from_value(field: &str, value: &Value) -> IntervalsResult<String> {
    match value {
        Value::String(s) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Err(IntervalsError::validation(format!(
                    "'{field}' must not be empty"
                )));
            }
            if let Ok(n) = trimmed.parse::<i64>() {
                if n <= 0 {
                    return Err(IntervalsError::validation(format!(
                        "'{field}' must be positive"
                    )));
                }
            }
            Ok(trimmed.to_owned())
        }
        Value::Number(n) => match n.as_i64() {
            Some(v) if v > 0 => Ok(v.to_string()),
            _ => Err(IntervalsError::validation(format!(
                "'{field}' must be a positive integer"
            ))),
        },
        _ => Err(IntervalsError::validation(format!(
            "'{field}' must be a string or number"
        ))),
    }
}

/// Look up a required id argument
fn required_id(args: &Value, field: &str) -> IntervalsResult<String> {
    match args.get(field) {
        Some(value) => id_from_value(field, value),
        None => Err(IntervalsError::validation(format!(
            "missing required argument '{field}'"
        ))),
    }
}

/// Look up an optional id argument
fn optional_id(args: &Value, field: &str) -> IntervalsResult<Option<String>> {
    match args.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => id_from_value(field, value).map(Some),
    }
}

/// Parse the optional structured workout argument
fn optional_workout_doc(args: &Value) -> IntervalsResult<Option<WorkoutDoc>> {
    match args.get(WORKOUT_DOC) {
        None | Some(Value::Null) => Ok(None),
        Some(value) if value.is_object() => serde_json::from_value(value.clone())
            .map(Some)
            .map_err(|e| {
                IntervalsError::validation(format!("'{WORKOUT_DOC}' is not a valid workout: {e}"))
            }),
        Some(_) => Err(IntervalsError::validation(format!(
            "'{WORKOUT_DOC}' must be an object"
        ))),
    }
}
