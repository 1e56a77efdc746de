// ABOUTME: Typed workout document model for structured planned workouts
// ABOUTME: Steps carry duration or distance plus power, HR, pace, and cadence targets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # Workout Documents
//!
//! Calendar events may carry a structured workout: an ordered list of steps,
//! each with a duration or distance and intensity targets. Targets are either
//! a single value or a ramp range, expressed in absolute watts, percentages of
//! a threshold, or training zones.
//!
//! Rendering follows the upstream text conventions: compound durations
//! (`1h30m`, `45s`), distances (`400mtr`, `1.5km`), percentages (`80%`),
//! zones (`Z2`), and watts (`250W`).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fmt::Write;

/// Step intensity classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    /// Working effort
    Active,
    /// Complete rest
    Rest,
    /// Warmup effort
    Warmup,
    /// Cooldown effort
    Cooldown,
    /// Easy spinning between efforts
    Recovery,
    /// Hard interval effort
    Interval,
    /// Anything else
    Other,
}

impl Intensity {
    /// The upstream string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Rest => "rest",
            Self::Warmup => "warmup",
            Self::Cooldown => "cooldown",
            Self::Recovery => "recovery",
            Self::Interval => "interval",
            Self::Other => "other",
        }
    }
}

/// Units a step target is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValueUnits {
    /// Percent of maximal mean power
    #[serde(rename = "%mmp")]
    PercentMmp,
    /// Percent of maximum heart rate
    #[serde(rename = "%hr")]
    PercentHr,
    /// Percent of lactate threshold heart rate
    #[serde(rename = "%lthr")]
    PercentLthr,
    /// Percent of threshold pace
    #[serde(rename = "%pace")]
    PercentPace,
    /// Power zone number
    #[serde(rename = "power_zone")]
    PowerZone,
    /// Heart rate zone number
    #[serde(rename = "hr_zone")]
    HrZone,
    /// Pace zone number
    #[serde(rename = "pace_zone")]
    PaceZone,
    /// Absolute watts
    #[serde(rename = "w")]
    Watts,
    /// Percent of functional threshold power
    #[serde(rename = "%ftp")]
    PercentFtp,
    /// Revolutions per minute
    #[serde(rename = "cadence")]
    Cadence,
}

/// Heart rate smoothing window for HR-targeted steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HrTarget {
    /// Lap average
    #[serde(rename = "lap")]
    Lap,
    /// Instantaneous
    #[serde(rename = "1s")]
    Instant,
    /// Three second average
    #[serde(rename = "3s")]
    ThreeSecond,
    /// Ten second average
    #[serde(rename = "10s")]
    TenSecond,
    /// Thirty second average
    #[serde(rename = "30s")]
    ThirtySecond,
}

impl HrTarget {
    /// The upstream string form
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lap => "lap",
            Self::Instant => "1s",
            Self::ThreeSecond => "3s",
            Self::TenSecond => "10s",
            Self::ThirtySecond => "30s",
        }
    }
}

/// Primary target dimension for a workout
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum WorkoutTarget {
    /// Upstream picks per sport settings
    Auto,
    /// Power-based targets
    Power,
    /// Heart-rate-based targets
    Hr,
    /// Pace-based targets
    Pace,
}

/// Format a float without a decimal part when it is whole
fn float_to_str(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// An intensity target for a workout step: a single value or a ramp range
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StepValue {
    /// Single target value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Ramp start value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f64>,
    /// Ramp end value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f64>,
    /// Units the value is expressed in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<ValueUnits>,
    /// HR smoothing window for heart rate targets
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<HrTarget>,
}

impl StepValue {
    fn format_value(&self, value: f64) -> String {
        match self.units {
            Some(
                ValueUnits::PercentHr
                | ValueUnits::PercentMmp
                | ValueUnits::PercentLthr
                | ValueUnits::PercentPace
                | ValueUnits::PercentFtp,
            ) => format!("{}%", float_to_str(value)),
            Some(ValueUnits::PowerZone | ValueUnits::HrZone | ValueUnits::PaceZone) => {
                format!("Z{}", float_to_str(value))
            }
            Some(ValueUnits::Watts) => format!("{}W", float_to_str(value)),
            Some(ValueUnits::Cadence) => format!("{}rpm", float_to_str(value)),
            None => float_to_str(value),
        }
    }

    fn units_label(&self) -> &'static str {
        match self.units {
            Some(ValueUnits::PercentHr | ValueUnits::HrZone) => "HR",
            Some(ValueUnits::PercentMmp) => "MMP",
            Some(ValueUnits::PercentLthr) => "LTHR",
            Some(ValueUnits::PercentPace | ValueUnits::PaceZone) => "Pace",
            Some(ValueUnits::PercentFtp) => "ftp",
            Some(ValueUnits::PowerZone) => "W",
            Some(ValueUnits::Cadence) => "Cadence",
            Some(ValueUnits::Watts) | None => "",
        }
    }
}

impl fmt::Display for StepValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        if let (Some(start), Some(end)) = (self.start, self.end) {
            let _ = write!(out, "{} - {} ", float_to_str(start), float_to_str(end));
        }
        if let Some(value) = self.value {
            let _ = write!(out, "{} ", self.format_value(value));
        }
        if self.units.is_some() {
            let label = self.units_label();
            if !label.is_empty() {
                let _ = write!(out, "{label} ");
            }
        }
        if let Some(target) = self.target {
            let _ = write!(out, "hr={} ", target.as_str());
        }
        write!(f, "{}", out.trim_end())
    }
}

/// One step of a structured workout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Step {
    /// Free-text instruction for the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Repetition count for a repeat block; `steps` holds the repeated steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<i64>,
    /// Warmup step marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warmup: Option<bool>,
    /// Cooldown step marker
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<bool>,
    /// Intensity classification
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intensity: Option<Intensity>,
    /// Nested steps for repeat blocks
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
    /// Intensity ramps across the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ramp: Option<bool>,
    /// No ERG control during the step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub freeride: Option<bool>,
    /// Maximum effort step
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maxeffort: Option<bool>,
    /// Power target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power: Option<StepValue>,
    /// Heart rate target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hr: Option<StepValue>,
    /// Pace target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pace: Option<StepValue>,
    /// Cadence target
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cadence: Option<StepValue>,
}

impl Step {
    /// Render the duration as a compound like `1h30m` or `45s`
    fn format_duration(&self) -> String {
        let Some(duration) = self.duration else {
            return String::new();
        };
        let mut remaining = duration;
        let mut out = String::new();
        if remaining > 3600 {
            let _ = write!(out, "{}h", remaining / 3600);
            remaining %= 3600;
        }
        if remaining > 100 || remaining == 60 {
            let _ = write!(out, "{}m", remaining / 60);
            remaining %= 60;
        }
        if remaining > 0 {
            let _ = write!(out, "{remaining}s");
        }
        out
    }

    /// Render the distance as `400mtr` below a kilometer, else `1.5km`
    fn format_distance(&self) -> String {
        let Some(distance) = self.distance else {
            return String::new();
        };
        if distance < 1000.0 {
            format!("{}mtr", float_to_str(distance))
        } else {
            format!("{}km", float_to_str(distance / 1000.0))
        }
    }

    fn render(&self, out: &mut String, nested: bool) {
        if let (Some(reps), false) = (self.reps, nested) {
            let _ = write!(out, "\n{reps}x ");
            if let Some(text) = &self.text {
                let _ = write!(out, "{text} ");
            }
            if let Some(steps) = &self.steps {
                for step in steps {
                    out.push('\n');
                    step.render(out, true);
                }
                out.push('\n');
            }
            return;
        }

        if !nested && self.warmup.unwrap_or(false) {
            out.push_str("\nWarmup\n");
        }
        if !nested && self.cooldown.unwrap_or(false) {
            out.push_str("\nCooldown\n");
        }

        if self.duration.is_some() {
            let _ = write!(out, "- {} ", self.format_duration());
        } else if self.distance.is_some() {
            let _ = write!(out, "- {} ", self.format_distance());
        }

        if self.freeride.unwrap_or(false) {
            out.push_str("freeride ");
        }
        if self.maxeffort.unwrap_or(false) {
            out.push_str("maxeffort ");
        }
        if self.ramp.unwrap_or(false) {
            out.push_str("ramp ");
        }
        if let Some(intensity) = self.intensity {
            let _ = write!(out, "intensity={} ", intensity.as_str());
        }
        for value in [&self.power, &self.hr, &self.pace, &self.cadence]
            .into_iter()
            .flatten()
        {
            let _ = write!(out, "{value} ");
        }
        if let Some(text) = &self.text {
            let _ = write!(out, "{text} ");
        }
        if !nested && (self.warmup.unwrap_or(false) || self.cooldown.unwrap_or(false)) {
            out.push('\n');
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        self.render(&mut out, false);
        write!(f, "{out}")
    }
}

/// A complete structured workout attached to a calendar event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutDoc {
    /// Workout description shown above the steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Total planned duration in seconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    /// Total planned distance in meters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Primary target dimension
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<WorkoutTarget>,
    /// Ordered workout steps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<Vec<Step>>,
}

impl fmt::Display for WorkoutDoc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        if let Some(description) = &self.description {
            let _ = writeln!(out, "{description}");
        }
        if let Some(steps) = &self.steps {
            for step in steps {
                step.render(&mut out, false);
                out.push('\n');
            }
        }
        write!(f, "{out}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_duration_compounds() {
        let step = Step {
            duration: Some(5400),
            ..Step::default()
        };
        assert_eq!(step.format_duration(), "1h30m");

        let step = Step {
            duration: Some(45),
            ..Step::default()
        };
        assert_eq!(step.format_duration(), "45s");

        let step = Step {
            duration: Some(300),
            ..Step::default()
        };
        assert_eq!(step.format_duration(), "5m");
    }

    #[test]
    fn test_step_distance_units() {
        let short = Step {
            distance: Some(400.0),
            ..Step::default()
        };
        assert_eq!(short.format_distance(), "400mtr");

        let long = Step {
            distance: Some(1500.0),
            ..Step::default()
        };
        assert_eq!(long.format_distance(), "1.5km");
    }

    #[test]
    fn test_step_value_rendering() {
        let ftp = StepValue {
            value: Some(80.0),
            units: Some(ValueUnits::PercentFtp),
            ..StepValue::default()
        };
        assert_eq!(ftp.to_string(), "80% ftp");

        let zone = StepValue {
            value: Some(2.0),
            units: Some(ValueUnits::HrZone),
            ..StepValue::default()
        };
        assert_eq!(zone.to_string(), "Z2 HR");

        let watts = StepValue {
            value: Some(250.0),
            units: Some(ValueUnits::Watts),
            ..StepValue::default()
        };
        assert_eq!(watts.to_string(), "250W");
    }

    #[test]
    fn test_workout_doc_deserializes_upstream_units() {
        let doc: WorkoutDoc = serde_json::from_str(
            r#"{
                "description": "Threshold session",
                "steps": [
                    {"duration": 600, "warmup": true, "power": {"value": 55, "units": "%ftp"}},
                    {"reps": 4, "steps": [
                        {"duration": 300, "intensity": "interval",
                         "power": {"value": 100, "units": "%ftp"}},
                        {"duration": 180, "intensity": "recovery",
                         "power": {"value": 50, "units": "%ftp"}}
                    ]}
                ]
            }"#,
        )
        .unwrap();

        let rendered = doc.to_string();
        assert!(rendered.contains("Threshold session"));
        assert!(rendered.contains("Warmup"));
        assert!(rendered.contains("4x"));
        assert!(rendered.contains("100% ftp"));
        assert!(rendered.contains("intensity=recovery"));
    }
}
