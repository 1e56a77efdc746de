// ABOUTME: Intervals.icu API client issuing one authenticated request per call
// ABOUTME: Normalizes transport, status, and decode failures into the error taxonomy
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # Intervals.icu API Client
//!
//! A thin client over the upstream REST API. Every public method maps to
//! exactly one HTTP request; there are no retries and no caching. The
//! athlete identifier from the configuration is injected into the URL path,
//! and the API key is attached to every request as HTTP Basic credentials
//! with the literal username `API_KEY`.
//!
//! Failure normalization:
//! - transport error or timeout → [`IntervalsError::Connection`]
//! - non-2xx status → [`IntervalsError::Api`] with the upstream message
//! - undecodable 2xx body → [`IntervalsError::Parse`]

use crate::config::ServerConfig;
use crate::constants::api::BASIC_AUTH_USERNAME;
use crate::errors::{IntervalsError, IntervalsResult};
use crate::models::{Activity, Event, EventInput, IntervalsResponse, WellnessEntry};
use crate::providers::http_client::shared_client;
use chrono::NaiveDate;
use reqwest::Method;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Client for the Intervals.icu REST API
///
/// Cheap to clone; holds only the immutable server configuration. The
/// underlying HTTP client is process-wide and pooled.
#[derive(Debug, Clone)]
pub struct IntervalsClient {
    config: Arc<ServerConfig>,
}

impl IntervalsClient {
    /// Create a client from the startup configuration
    #[must_use]
    pub fn new(config: Arc<ServerConfig>) -> Self {
        Self { config }
    }

    /// The athlete path segment used by athlete-scoped endpoints
    fn athlete_path(&self, suffix: &str) -> String {
        format!("/athlete/{}{suffix}", self.config.athlete_id)
    }

    /// Issue one request and normalize the outcome
    ///
    /// Returns the decoded JSON payload on 2xx (JSON `null` for an empty
    /// body, as DELETE responses may be bodiless).
    #[instrument(skip(self, query, body), fields(method = %method, path = %path))]
    async fn request(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<&Value>,
    ) -> IntervalsResult<Value> {
        let url = format!("{}{path}", self.config.base_url);
        let mut request = shared_client()
            .request(method, &url)
            .basic_auth(BASIC_AUTH_USERNAME, Some(&self.config.api_key));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(IntervalsError::from)?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| IntervalsError::connection(e.to_string()))?;

        if !status.is_success() {
            return Err(IntervalsError::api(
                status.as_u16(),
                extract_error_message(&text, status.as_u16()),
            ));
        }

        debug!(status = status.as_u16(), bytes = text.len(), "upstream response");
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| IntervalsError::parse(e.to_string()))
    }

    /// Decode a payload into a typed model, reporting mismatches as parse errors
    fn decode<T: serde::de::DeserializeOwned>(payload: Value) -> IntervalsResult<T> {
        serde_json::from_value(payload).map_err(|e| IntervalsError::parse(e.to_string()))
    }

    /// Fetch activities within a date range, newest first as upstream returns them
    pub async fn get_activities(
        &self,
        oldest: NaiveDate,
        newest: NaiveDate,
    ) -> IntervalsResult<Vec<Activity>> {
        let payload = self
            .request(
                Method::GET,
                &self.athlete_path("/activities"),
                &[
                    ("oldest", oldest.to_string()),
                    ("newest", newest.to_string()),
                ],
                None,
            )
            .await?;
        Self::decode(payload)
    }

    /// Fetch one activity by id
    pub async fn get_activity(&self, activity_id: &str) -> IntervalsResult<Activity> {
        let payload = self
            .request(Method::GET, &format!("/activity/{activity_id}"), &[], None)
            .await?;
        Self::decode(payload)
    }

    /// Fetch the interval analysis for one activity
    pub async fn get_activity_intervals(
        &self,
        activity_id: &str,
    ) -> IntervalsResult<IntervalsResponse> {
        let payload = self
            .request(
                Method::GET,
                &format!("/activity/{activity_id}/intervals"),
                &[],
                None,
            )
            .await?;
        Self::decode(payload)
    }

    /// Fetch wellness records within a date range
    pub async fn get_wellness(
        &self,
        oldest: NaiveDate,
        newest: NaiveDate,
    ) -> IntervalsResult<Vec<WellnessEntry>> {
        let payload = self
            .request(
                Method::GET,
                &self.athlete_path("/wellness"),
                &[
                    ("oldest", oldest.to_string()),
                    ("newest", newest.to_string()),
                ],
                None,
            )
            .await?;
        Self::decode(payload)
    }

    /// Fetch calendar events within a date range
    pub async fn get_events(
        &self,
        oldest: NaiveDate,
        newest: NaiveDate,
    ) -> IntervalsResult<Vec<Event>> {
        let payload = self
            .request(
                Method::GET,
                &self.athlete_path("/events"),
                &[
                    ("oldest", oldest.to_string()),
                    ("newest", newest.to_string()),
                ],
                None,
            )
            .await?;
        Self::decode(payload)
    }

    /// Fetch one calendar event by id
    pub async fn get_event(&self, event_id: &str) -> IntervalsResult<Event> {
        let payload = self
            .request(
                Method::GET,
                &self.athlete_path(&format!("/events/{event_id}")),
                &[],
                None,
            )
            .await?;
        Self::decode(payload)
    }

    /// Create a calendar event; returns the created event
    pub async fn create_event(&self, event: &EventInput) -> IntervalsResult<Event> {
        let body = serde_json::to_value(event).map_err(|e| IntervalsError::parse(e.to_string()))?;
        let payload = self
            .request(Method::POST, &self.athlete_path("/events"), &[], Some(&body))
            .await?;
        Self::decode(payload)
    }

    /// Update a calendar event in place; returns the updated event
    pub async fn update_event(
        &self,
        event_id: &str,
        event: &EventInput,
    ) -> IntervalsResult<Event> {
        let body = serde_json::to_value(event).map_err(|e| IntervalsError::parse(e.to_string()))?;
        let payload = self
            .request(
                Method::PUT,
                &self.athlete_path(&format!("/events/{event_id}")),
                &[],
                Some(&body),
            )
            .await?;
        Self::decode(payload)
    }

    /// Delete a calendar event by id
    pub async fn delete_event(&self, event_id: &str) -> IntervalsResult<()> {
        self.request(
            Method::DELETE,
            &self.athlete_path(&format!("/events/{event_id}")),
            &[],
            None,
        )
        .await?;
        Ok(())
    }
}

/// Pull the upstream `error` field out of a failure body when present;
/// fall back to the raw body, then to a generic description
fn extract_error_message(body: &str, status: u16) -> String {
    if let Ok(value) = serde_json::from_str::<Value>(body) {
        if let Some(message) = value.get("error").and_then(Value::as_str) {
            return message.to_owned();
        }
        if let Some(message) = value.get("message").and_then(Value::as_str) {
            return message.to_owned();
        }
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        format!("request failed with status {status}")
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_error_message_prefers_error_field() {
        let body = r#"{"status": 422, "error": "start date after end date"}"#;
        assert_eq!(
            extract_error_message(body, 422),
            "start date after end date"
        );
    }

    #[test]
    fn test_extract_error_message_falls_back_to_body() {
        assert_eq!(extract_error_message("upstream exploded", 500), "upstream exploded");
        assert_eq!(
            extract_error_message("", 503),
            "request failed with status 503"
        );
    }
}
