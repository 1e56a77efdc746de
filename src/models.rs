// ABOUTME: Data models for upstream Intervals.icu entities
// ABOUTME: Explicit optional-field structs so formatters stay total functions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # Data Models
//!
//! Typed representations of the upstream payloads this server consumes.
//! Upstream field presence varies by activity source and account settings,
//! so every field is optional and absence is never an error. Unknown fields
//! are ignored on deserialization.

use crate::workouts::WorkoutDoc;
use serde::{Deserialize, Deserializer, Serialize};

/// Upstream ids arrive as JSON numbers or strings depending on the entity;
/// both normalize to a display string.
fn opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| match v {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }))
}

/// A recorded activity (ride, run, swim, ...)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Activity {
    /// Upstream activity identifier
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<String>,
    /// Activity name; unnamed activities arrive without one
    pub name: Option<String>,
    /// Sport type (Ride, Run, Swim, ...)
    #[serde(rename = "type")]
    pub activity_type: Option<String>,
    /// Local start timestamp
    pub start_date_local: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Moving time in seconds
    pub moving_time: Option<i64>,
    /// Elapsed time in seconds
    pub elapsed_time: Option<i64>,
    /// Total climb in meters
    pub total_elevation_gain: Option<f64>,
    /// Average power in watts
    pub icu_average_watts: Option<f64>,
    /// Weighted (normalized) average power in watts
    pub icu_weighted_avg_watts: Option<f64>,
    /// Training load for the session
    pub icu_training_load: Option<f64>,
    /// Functional threshold power the session was scored against
    pub icu_ftp: Option<f64>,
    /// Average heart rate in bpm
    pub average_heartrate: Option<f64>,
    /// Maximum heart rate in bpm
    pub max_heartrate: Option<f64>,
    /// Average cadence in rpm
    pub average_cadence: Option<f64>,
    /// Average speed in meters per second
    pub average_speed: Option<f64>,
    /// Maximum speed in meters per second
    pub max_speed: Option<f64>,
    /// Energy expenditure in kilocalories
    pub calories: Option<f64>,
    /// Perceived exertion on the 1-10 scale
    pub icu_rpe: Option<f64>,
    /// Subjective feel on the 1-5 scale
    pub feel: Option<f64>,
}

impl Activity {
    /// Whether the activity carries a non-empty name
    #[must_use]
    pub fn is_named(&self) -> bool {
        self.name.as_deref().is_some_and(|n| !n.trim().is_empty())
    }
}

/// One interval (lap) within an activity; upstream order is chronological
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Interval {
    /// Lap label when set by the analysis
    pub label: Option<String>,
    /// Interval classification (work, recovery, ...)
    #[serde(rename = "type")]
    pub interval_type: Option<String>,
    /// Elapsed time in seconds
    pub elapsed_time: Option<i64>,
    /// Moving time in seconds
    pub moving_time: Option<i64>,
    /// Distance in meters
    pub distance: Option<f64>,
    /// Average power in watts
    pub average_watts: Option<f64>,
    /// Maximum power in watts
    pub max_watts: Option<f64>,
    /// Weighted average power in watts
    pub weighted_average_watts: Option<f64>,
    /// Average power per kilogram
    pub average_watts_kg: Option<f64>,
    /// Intensity relative to threshold
    pub intensity: Option<f64>,
    /// Average heart rate in bpm
    pub average_heartrate: Option<f64>,
    /// Maximum heart rate in bpm
    pub max_heartrate: Option<f64>,
    /// Average cadence in rpm
    pub average_cadence: Option<f64>,
    /// Maximum cadence in rpm
    pub max_cadence: Option<f64>,
    /// Average speed in meters per second
    pub average_speed: Option<f64>,
    /// Maximum speed in meters per second
    pub max_speed: Option<f64>,
}

/// Interval analysis for one activity as returned by the intervals endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IntervalsResponse {
    /// Activity identifier the analysis belongs to
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<String>,
    /// Detected or defined intervals in chronological order
    #[serde(default)]
    pub icu_intervals: Vec<Interval>,
}

/// One day's wellness record; fields are sparse, most days carry only a few
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WellnessEntry {
    /// Record date in `YYYY-MM-DD` form (the upstream id)
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<String>,
    /// Fitness (chronic training load)
    pub ctl: Option<f64>,
    /// Fatigue (acute training load)
    pub atl: Option<f64>,
    /// Weekly ramp rate
    #[serde(rename = "rampRate")]
    pub ramp_rate: Option<f64>,
    /// Resting heart rate in bpm
    #[serde(rename = "restingHR")]
    pub resting_hr: Option<f64>,
    /// Average sleeping heart rate in bpm
    #[serde(rename = "avgSleepingHR")]
    pub avg_sleeping_hr: Option<f64>,
    /// Heart rate variability (rMSSD) in ms
    pub hrv: Option<f64>,
    /// Heart rate variability (SDNN) in ms
    #[serde(rename = "hrvSDNN")]
    pub hrv_sdnn: Option<f64>,
    /// Sleep duration in seconds
    #[serde(rename = "sleepSecs")]
    pub sleep_secs: Option<i64>,
    /// Sleep score from the recording device
    #[serde(rename = "sleepScore")]
    pub sleep_score: Option<f64>,
    /// Subjective sleep quality on the 1-4 scale
    #[serde(rename = "sleepQuality")]
    pub sleep_quality: Option<f64>,
    /// Body weight in kilograms
    pub weight: Option<f64>,
    /// Subjective soreness on the 1-4 scale
    pub soreness: Option<f64>,
    /// Subjective fatigue on the 1-4 scale
    pub fatigue: Option<f64>,
    /// Subjective stress on the 1-4 scale
    pub stress: Option<f64>,
    /// Subjective mood on the 1-4 scale
    pub mood: Option<f64>,
    /// Subjective motivation on the 1-4 scale
    pub motivation: Option<f64>,
    /// Injury level on the 1-4 scale
    pub injury: Option<f64>,
    /// Blood oxygen saturation percentage
    #[serde(rename = "spO2")]
    pub spo2: Option<f64>,
    /// Systolic blood pressure in mmHg
    pub systolic: Option<f64>,
    /// Diastolic blood pressure in mmHg
    pub diastolic: Option<f64>,
    /// Hydration score
    pub hydration: Option<f64>,
    /// Readiness score
    pub readiness: Option<f64>,
    /// Estimated VO2max
    pub vo2max: Option<f64>,
    /// Free-text notes for the day
    pub comments: Option<String>,
}

/// A calendar entry: planned workout, race, or note
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Event {
    /// Upstream event identifier
    #[serde(default, deserialize_with = "opt_id")]
    pub id: Option<String>,
    /// Local calendar date/time of the event
    pub start_date_local: Option<String>,
    /// Event category (WORKOUT, RACE_A, NOTE, ...)
    pub category: Option<String>,
    /// Event name
    pub name: Option<String>,
    /// Free-text description
    pub description: Option<String>,
    /// Sport type for planned workouts
    #[serde(rename = "type")]
    pub event_type: Option<String>,
    /// Planned moving time in seconds
    pub moving_time: Option<i64>,
    /// Planned training load
    pub icu_training_load: Option<f64>,
    /// Structured workout attached to the event
    pub workout_doc: Option<WorkoutDoc>,
}

/// Body for event create/update calls; absent fields are not serialized so
/// the upstream treats them as unset rather than cleared
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventInput {
    /// Local calendar date in `YYYY-MM-DD` form
    pub start_date_local: String,
    /// Event category; the tool defaults this to `WORKOUT`
    pub category: String,
    /// Event name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-text description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Sport type for planned workouts
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<String>,
    /// Structured workout to attach
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_doc: Option<WorkoutDoc>,
}
