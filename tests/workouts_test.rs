// ABOUTME: Integration tests for workout document parsing and text rendering
// ABOUTME: Exercises the upstream unit strings and the compound rendering conventions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use intervals_mcp_server::workouts::{Step, StepValue, ValueUnits, WorkoutDoc};

#[test]
fn test_parse_full_workout_document() {
    let doc: WorkoutDoc = serde_json::from_str(
        r#"{
            "description": "Sweet spot with cadence work",
            "duration": 3600,
            "target": "POWER",
            "steps": [
                {"duration": 900, "warmup": true, "ramp": true,
                 "power": {"start": 40, "end": 70, "units": "%ftp"}},
                {"reps": 3, "steps": [
                    {"duration": 600, "intensity": "active",
                     "power": {"value": 90, "units": "%ftp"},
                     "cadence": {"value": 95, "units": "cadence"}},
                    {"duration": 300, "intensity": "recovery",
                     "power": {"value": 50, "units": "%ftp"}}
                ]},
                {"duration": 600, "cooldown": true, "power": {"value": 45, "units": "%ftp"}}
            ]
        }"#,
    )
    .unwrap();

    assert_eq!(doc.duration, Some(3600));
    let steps = doc.steps.as_ref().unwrap();
    assert_eq!(steps.len(), 3);
    assert_eq!(steps[1].reps, Some(3));
    assert_eq!(steps[1].steps.as_ref().unwrap().len(), 2);
}

#[test]
fn test_render_workout_conventions() {
    let doc: WorkoutDoc = serde_json::from_str(
        r#"{
            "description": "Openers",
            "steps": [
                {"duration": 1200, "warmup": true, "power": {"value": 55, "units": "%ftp"}},
                {"duration": 90, "maxeffort": true, "power": {"value": 150, "units": "%ftp"}},
                {"distance": 400, "pace": {"value": 4, "units": "pace_zone"}},
                {"duration": 600, "cooldown": true, "hr": {"value": 65, "units": "%hr"}}
            ]
        }"#,
    )
    .unwrap();

    let rendered = doc.to_string();
    assert!(rendered.contains("Openers"));
    assert!(rendered.contains("Warmup"));
    assert!(rendered.contains("- 20m"));
    assert!(rendered.contains("90s"));
    assert!(rendered.contains("maxeffort"));
    assert!(rendered.contains("150% ftp"));
    assert!(rendered.contains("400mtr"));
    assert!(rendered.contains("Z4 Pace"));
    assert!(rendered.contains("Cooldown"));
    assert!(rendered.contains("65% HR"));
}

#[test]
fn test_step_value_range_rendering() {
    let ramp = StepValue {
        start: Some(40.0),
        end: Some(70.0),
        units: Some(ValueUnits::PercentFtp),
        ..StepValue::default()
    };
    assert_eq!(ramp.to_string(), "40 - 70 ftp");
}

#[test]
fn test_serialization_skips_absent_fields() {
    let step = Step {
        duration: Some(300),
        power: Some(StepValue {
            value: Some(250.0),
            units: Some(ValueUnits::Watts),
            ..StepValue::default()
        }),
        ..Step::default()
    };

    let serialized = serde_json::to_value(&step).unwrap();
    assert_eq!(serialized["duration"], 300);
    assert_eq!(serialized["power"]["units"], "w");
    // Absent options must not serialize as null
    assert!(serialized.get("distance").is_none());
    assert!(serialized.get("reps").is_none());
    assert!(serialized.get("warmup").is_none());
}

#[test]
fn test_rendering_is_deterministic() {
    let doc: WorkoutDoc = serde_json::from_str(
        r#"{"steps": [{"duration": 300, "power": {"value": 100, "units": "%ftp"}}]}"#,
    )
    .unwrap();
    assert_eq!(doc.to_string(), doc.to_string());
}
