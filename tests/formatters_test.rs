// ABOUTME: Integration tests for the response formatters
// ABOUTME: Verifies field omission, fixed precisions, ordering, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use intervals_mcp_server::formatters::{
    format_activity, format_activity_intervals, format_duration, format_event,
    format_wellness_entry,
};
use intervals_mcp_server::models::{Activity, Event, IntervalsResponse, WellnessEntry};

#[test]
fn test_format_activity_reference_payload() {
    // The documented unit conventions: meters -> km at one decimal,
    // seconds -> MM:SS under an hour
    let activity: Activity = serde_json::from_str(
        r#"{"id": 123, "name": "Morning Run", "type": "Run", "distance": 5000, "moving_time": 1800}"#,
    )
    .unwrap();

    let output = format_activity(&activity);
    assert!(output.contains("Morning Run"));
    assert!(output.contains("Run"));
    assert!(output.contains("5.0 km"));
    assert!(output.contains("30:00"));
}

#[test]
fn test_format_activity_omits_absent_fields() {
    let activity: Activity =
        serde_json::from_str(r#"{"id": 1, "name": "Spin", "type": "Ride"}"#).unwrap();

    let output = format_activity(&activity);
    assert!(!output.contains("Distance"));
    assert!(!output.contains("Avg power"));
    assert!(!output.contains("Avg HR"));
    assert!(!output.contains("None"));
    assert!(!output.contains("null"));
}

#[test]
fn test_format_activity_is_deterministic() {
    let activity: Activity = serde_json::from_str(
        r#"{"id": 7, "name": "Tempo", "distance": 40230.4, "moving_time": 4810,
            "icu_average_watts": 233.6, "average_heartrate": 151.2}"#,
    )
    .unwrap();

    let first = format_activity(&activity);
    let second = format_activity(&activity);
    assert_eq!(first, second);
    assert!(first.contains("40.2 km"));
    assert!(first.contains("1:20:10"));
    assert!(first.contains("234 W"));
    assert!(first.contains("151 bpm"));
}

#[test]
fn test_format_intervals_preserves_upstream_order() {
    let response: IntervalsResponse = serde_json::from_str(
        r#"{"id": 55, "icu_intervals": [
            {"label": "Warmup", "elapsed_time": 600, "average_watts": 150},
            {"label": "Rep 1", "elapsed_time": 300, "average_watts": 290, "max_watts": 312},
            {"label": "Rep 2", "elapsed_time": 300, "average_watts": 288}
        ]}"#,
    )
    .unwrap();

    let output = format_activity_intervals(&response);
    let warmup = output.find("Warmup").unwrap();
    let rep1 = output.find("Rep 1").unwrap();
    let rep2 = output.find("Rep 2").unwrap();
    assert!(warmup < rep1 && rep1 < rep2);
    assert!(output.contains("Interval 1: Warmup"));
    assert!(output.contains("Interval 2: Rep 1"));
    assert!(output.contains("5:00"));
    assert!(output.contains("290 W"));
    assert!(output.contains("312 W"));
}

#[test]
fn test_format_wellness_skips_missing_metrics() {
    let entry: WellnessEntry = serde_json::from_str(
        r#"{"id": "2024-05-01", "ctl": 45.25, "restingHR": 48, "sleepSecs": 27000}"#,
    )
    .unwrap();

    let output = format_wellness_entry(&entry);
    assert!(output.contains("Wellness for 2024-05-01"));
    assert!(output.contains("Fitness (CTL): 45.2"));
    assert!(output.contains("Resting HR: 48 bpm"));
    assert!(output.contains("Sleep: 7:30"));
    assert!(!output.contains("Weight"));
    assert!(!output.contains("HRV"));
    assert!(!output.contains("Fatigue (ATL)"));
}

#[test]
fn test_format_event_with_workout_structure() {
    let event: Event = serde_json::from_str(
        r#"{"id": 9001, "start_date_local": "2024-05-06", "category": "WORKOUT",
            "name": "Threshold Intervals",
            "workout_doc": {
                "description": "Classic 4x8",
                "steps": [
                    {"duration": 900, "warmup": true, "power": {"value": 55, "units": "%ftp"}},
                    {"reps": 4, "steps": [
                        {"duration": 480, "power": {"value": 100, "units": "%ftp"}},
                        {"duration": 240, "power": {"value": 50, "units": "%ftp"}}
                    ]}
                ]
            }}"#,
    )
    .unwrap();

    let output = format_event(&event);
    assert!(output.contains("Event: Threshold Intervals"));
    assert!(output.contains("ID: 9001"));
    assert!(output.contains("Category: WORKOUT"));
    assert!(output.contains("Workout:"));
    assert!(output.contains("Classic 4x8"));
    assert!(output.contains("4x"));
    assert!(output.contains("100% ftp"));
}

#[test]
fn test_format_event_without_workout() {
    let event: Event = serde_json::from_str(
        r#"{"id": 42, "start_date_local": "2024-06-01", "category": "RACE_A", "name": "Spring Classic"}"#,
    )
    .unwrap();

    let output = format_event(&event);
    assert!(output.contains("Event: Spring Classic"));
    assert!(output.contains("Category: RACE_A"));
    assert!(!output.contains("Workout:"));
}

#[test]
fn test_duration_convention_boundaries() {
    assert_eq!(format_duration(0), "0:00");
    assert_eq!(format_duration(1800), "30:00");
    assert_eq!(format_duration(3599), "59:59");
    assert_eq!(format_duration(3600), "1:00:00");
}
