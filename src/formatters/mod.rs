// ABOUTME: Pure formatting functions turning upstream payloads into readable text
// ABOUTME: Absent fields are omitted; numeric fields render at fixed precisions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # Response Formatters
//!
//! One formatter per entity shape, all pure and deterministic: the same
//! payload always renders to the same string. Missing or null fields are
//! skipped, never rendered as placeholders.
//!
//! Unit conventions (fixed, also exercised by the integration tests):
//! - distances: meters → kilometers, one decimal (`5.0 km`)
//! - durations: `MM:SS` below one hour, `H:MM:SS` from one hour (`30:00`)
//! - speeds: meters/second → km/h, one decimal
//! - power, heart rate, cadence, calories, load: whole numbers
//! - weight: one decimal kilogram

use crate::models::{Activity, Event, Interval, IntervalsResponse, WellnessEntry};
use std::fmt::Write;

/// Render seconds as `MM:SS` below one hour, `H:MM:SS` from one hour
#[must_use]
pub fn format_duration(secs: i64) -> String {
    let secs = secs.max(0);
    let hours = secs / 3600;
    let minutes = (secs % 3600) / 60;
    let seconds = secs % 60;
    if hours > 0 {
        format!("{hours}:{minutes:02}:{seconds:02}")
    } else {
        format!("{minutes}:{seconds:02}")
    }
}

/// Render seconds as `H:MM` (sleep durations)
#[must_use]
pub fn format_hours_minutes(secs: i64) -> String {
    let secs = secs.max(0);
    format!("{}:{:02}", secs / 3600, (secs % 3600) / 60)
}

/// Render meters as kilometers with one decimal
#[must_use]
pub fn format_distance_km(meters: f64) -> String {
    format!("{:.1} km", meters / 1000.0)
}

/// Render meters/second as km/h with one decimal
#[must_use]
pub fn format_speed_kmh(meters_per_sec: f64) -> String {
    format!("{:.1} km/h", meters_per_sec * 3.6)
}

/// Render a float without a decimal part when it is whole
fn trim_float(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

fn push_line(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(out, "  {label}: {value}");
}

fn push_opt_whole(out: &mut String, label: &str, value: Option<f64>, unit: &str) {
    if let Some(v) = value {
        let suffix = if unit.is_empty() {
            String::new()
        } else {
            format!(" {unit}")
        };
        push_line(out, label, &format!("{}{suffix}", v.round() as i64));
    }
}

fn push_opt_scale(out: &mut String, label: &str, value: Option<f64>) {
    if let Some(v) = value {
        push_line(out, label, &trim_float(v));
    }
}

/// Format a single activity as a multi-line summary
#[must_use]
pub fn format_activity(activity: &Activity) -> String {
    let mut out = String::new();
    match activity.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            let _ = writeln!(out, "Activity: {name}");
        }
        _ => out.push_str("Activity\n"),
    }
    if let Some(id) = &activity.id {
        push_line(&mut out, "ID", id);
    }
    if let Some(activity_type) = &activity.activity_type {
        push_line(&mut out, "Type", activity_type);
    }
    if let Some(date) = &activity.start_date_local {
        push_line(&mut out, "Date", date);
    }
    if let Some(description) = &activity.description {
        push_line(&mut out, "Description", description);
    }
    if let Some(distance) = activity.distance {
        push_line(&mut out, "Distance", &format_distance_km(distance));
    }
    if let Some(moving) = activity.moving_time {
        push_line(&mut out, "Moving time", &format_duration(moving));
    }
    if let Some(elapsed) = activity.elapsed_time {
        push_line(&mut out, "Elapsed time", &format_duration(elapsed));
    }
    push_opt_whole(&mut out, "Elevation gain", activity.total_elevation_gain, "m");
    push_opt_whole(&mut out, "Avg power", activity.icu_average_watts, "W");
    push_opt_whole(
        &mut out,
        "Weighted avg power",
        activity.icu_weighted_avg_watts,
        "W",
    );
    push_opt_whole(&mut out, "Training load", activity.icu_training_load, "");
    push_opt_whole(&mut out, "FTP", activity.icu_ftp, "W");
    push_opt_whole(&mut out, "Avg HR", activity.average_heartrate, "bpm");
    push_opt_whole(&mut out, "Max HR", activity.max_heartrate, "bpm");
    push_opt_whole(&mut out, "Avg cadence", activity.average_cadence, "rpm");
    if let Some(speed) = activity.average_speed {
        push_line(&mut out, "Avg speed", &format_speed_kmh(speed));
    }
    if let Some(speed) = activity.max_speed {
        push_line(&mut out, "Max speed", &format_speed_kmh(speed));
    }
    push_opt_whole(&mut out, "Calories", activity.calories, "");
    push_opt_scale(&mut out, "RPE", activity.icu_rpe);
    push_opt_scale(&mut out, "Feel", activity.feel);
    out.trim_end().to_owned()
}

fn format_interval(index: usize, interval: &Interval) -> String {
    let mut out = String::new();
    match interval.label.as_deref() {
        Some(label) if !label.trim().is_empty() => {
            let _ = writeln!(out, "Interval {}: {label}", index + 1);
        }
        _ => {
            let _ = writeln!(out, "Interval {}", index + 1);
        }
    }
    if let Some(interval_type) = &interval.interval_type {
        push_line(&mut out, "Type", interval_type);
    }
    if let Some(duration) = interval.elapsed_time.or(interval.moving_time) {
        push_line(&mut out, "Duration", &format_duration(duration));
    }
    if let Some(distance) = interval.distance {
        push_line(&mut out, "Distance", &format_distance_km(distance));
    }
    push_opt_whole(&mut out, "Avg power", interval.average_watts, "W");
    push_opt_whole(&mut out, "Max power", interval.max_watts, "W");
    push_opt_whole(
        &mut out,
        "Weighted avg power",
        interval.weighted_average_watts,
        "W",
    );
    if let Some(wkg) = interval.average_watts_kg {
        push_line(&mut out, "Power", &format!("{wkg:.1} W/kg"));
    }
    push_opt_scale(&mut out, "Intensity", interval.intensity);
    push_opt_whole(&mut out, "Avg HR", interval.average_heartrate, "bpm");
    push_opt_whole(&mut out, "Max HR", interval.max_heartrate, "bpm");
    push_opt_whole(&mut out, "Avg cadence", interval.average_cadence, "rpm");
    push_opt_whole(&mut out, "Max cadence", interval.max_cadence, "rpm");
    if let Some(speed) = interval.average_speed {
        push_line(&mut out, "Avg speed", &format_speed_kmh(speed));
    }
    if let Some(speed) = interval.max_speed {
        push_line(&mut out, "Max speed", &format_speed_kmh(speed));
    }
    out.trim_end().to_owned()
}

/// Format the interval analysis for one activity, preserving upstream order
#[must_use]
pub fn format_activity_intervals(response: &IntervalsResponse) -> String {
    let blocks: Vec<String> = response
        .icu_intervals
        .iter()
        .enumerate()
        .map(|(index, interval)| format_interval(index, interval))
        .collect();
    blocks.join("\n\n")
}

/// Format one day's wellness record
#[must_use]
pub fn format_wellness_entry(entry: &WellnessEntry) -> String {
    let mut out = String::new();
    match &entry.id {
        Some(date) => {
            let _ = writeln!(out, "Wellness for {date}");
        }
        None => out.push_str("Wellness entry\n"),
    }
    if let Some(ctl) = entry.ctl {
        push_line(&mut out, "Fitness (CTL)", &format!("{ctl:.1}"));
    }
    if let Some(atl) = entry.atl {
        push_line(&mut out, "Fatigue (ATL)", &format!("{atl:.1}"));
    }
    if let Some(ramp) = entry.ramp_rate {
        push_line(&mut out, "Ramp rate", &format!("{ramp:.1}"));
    }
    push_opt_whole(&mut out, "Resting HR", entry.resting_hr, "bpm");
    push_opt_whole(&mut out, "Avg sleeping HR", entry.avg_sleeping_hr, "bpm");
    push_opt_whole(&mut out, "HRV", entry.hrv, "ms");
    push_opt_whole(&mut out, "HRV (SDNN)", entry.hrv_sdnn, "ms");
    if let Some(sleep) = entry.sleep_secs {
        push_line(&mut out, "Sleep", &format_hours_minutes(sleep));
    }
    push_opt_whole(&mut out, "Sleep score", entry.sleep_score, "");
    push_opt_scale(&mut out, "Sleep quality", entry.sleep_quality);
    if let Some(weight) = entry.weight {
        push_line(&mut out, "Weight", &format!("{weight:.1} kg"));
    }
    push_opt_scale(&mut out, "Soreness", entry.soreness);
    push_opt_scale(&mut out, "Fatigue", entry.fatigue);
    push_opt_scale(&mut out, "Stress", entry.stress);
    push_opt_scale(&mut out, "Mood", entry.mood);
    push_opt_scale(&mut out, "Motivation", entry.motivation);
    push_opt_scale(&mut out, "Injury", entry.injury);
    if let Some(spo2) = entry.spo2 {
        push_line(&mut out, "SpO2", &format!("{}%", trim_float(spo2)));
    }
    push_opt_whole(&mut out, "Systolic", entry.systolic, "mmHg");
    push_opt_whole(&mut out, "Diastolic", entry.diastolic, "mmHg");
    push_opt_scale(&mut out, "Hydration", entry.hydration);
    push_opt_whole(&mut out, "Readiness", entry.readiness, "");
    push_opt_scale(&mut out, "VO2max", entry.vo2max);
    if let Some(comments) = &entry.comments {
        push_line(&mut out, "Comments", comments);
    }
    out.trim_end().to_owned()
}

/// Format a calendar event, including its workout structure when present
#[must_use]
pub fn format_event(event: &Event) -> String {
    let mut out = String::new();
    match event.name.as_deref() {
        Some(name) if !name.trim().is_empty() => {
            let _ = writeln!(out, "Event: {name}");
        }
        _ => out.push_str("Event\n"),
    }
    if let Some(id) = &event.id {
        push_line(&mut out, "ID", id);
    }
    if let Some(date) = &event.start_date_local {
        push_line(&mut out, "Date", date);
    }
    if let Some(category) = &event.category {
        push_line(&mut out, "Category", category);
    }
    if let Some(event_type) = &event.event_type {
        push_line(&mut out, "Type", event_type);
    }
    if let Some(description) = &event.description {
        push_line(&mut out, "Description", description);
    }
    if let Some(moving) = event.moving_time {
        push_line(&mut out, "Planned time", &format_duration(moving));
    }
    push_opt_whole(&mut out, "Planned load", event.icu_training_load, "");
    if let Some(doc) = &event.workout_doc {
        out.push_str("  Workout:\n");
        for line in doc.to_string().lines() {
            if line.trim().is_empty() {
                out.push('\n');
            } else {
                let _ = writeln!(out, "    {line}");
            }
        }
    }
    out.trim_end().to_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_conventions() {
        assert_eq!(format_duration(1800), "30:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(3600), "1:00:00");
        assert_eq!(format_duration(3725), "1:02:05");
    }

    #[test]
    fn test_distance_precision() {
        assert_eq!(format_distance_km(5000.0), "5.0 km");
        assert_eq!(format_distance_km(21097.5), "21.1 km");
    }

    #[test]
    fn test_speed_conversion() {
        assert_eq!(format_speed_kmh(10.0), "36.0 km/h");
    }
}
