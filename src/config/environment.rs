// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses and validates required credentials and optional overrides at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! Environment-based configuration management
//!
//! Required variables fail startup with a descriptive error rather than
//! falling back to a silent default; optional variables have documented
//! defaults.

use crate::constants::{api, env_vars};
use anyhow::{anyhow, Context, Result};
use std::env;
use url::Url;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational (default)
    #[default]
    Info,
    /// Debug diagnostics
    Debug,
    /// Full tracing output
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback to `Info`
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }

    /// The directive string understood by `tracing_subscriber::EnvFilter`
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated athlete identifier in the canonical `i`-prefixed form
///
/// Upstream accepts both numeric (`123456`) and prefixed (`i123456`) forms;
/// URL paths always use the prefixed form, so normalization happens here
/// once instead of at every call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteId(String);

impl AthleteId {
    /// Parse and normalize an athlete identifier
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or is neither a positive
    /// number nor an `i`-prefixed number.
    pub fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(anyhow!("athlete identifier is empty"));
        }
        let digits = trimmed.strip_prefix('i').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(anyhow!(
                "athlete identifier '{trimmed}' must be numeric or an 'i'-prefixed number"
            ));
        }
        Ok(Self(format!("i{digits}")))
    }

    /// The canonical `i`-prefixed identifier used in URL paths
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AthleteId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Immutable server configuration constructed once at startup
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Intervals.icu API key; never logged
    pub api_key: String,
    /// Athlete identifier in canonical form
    pub athlete_id: AthleteId,
    /// Upstream API base URL without trailing slash
    pub base_url: String,
    /// Log level applied when `RUST_LOG` is not set
    pub log_level: LogLevel,
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `API_KEY` or `ATHLETE_ID` is missing or empty,
    /// if the athlete identifier is malformed, or if the base URL override
    /// is not a valid URL.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(env_vars::API_KEY)
            .with_context(|| format!("{} environment variable is required", env_vars::API_KEY))?;
        if api_key.trim().is_empty() {
            return Err(anyhow!("{} must not be empty", env_vars::API_KEY));
        }

        let athlete_raw = env::var(env_vars::ATHLETE_ID).with_context(|| {
            format!("{} environment variable is required", env_vars::ATHLETE_ID)
        })?;
        let athlete_id = AthleteId::parse(&athlete_raw)
            .with_context(|| format!("invalid {}", env_vars::ATHLETE_ID))?;

        let base_url = env::var(env_vars::INTERVALS_API_BASE_URL)
            .unwrap_or_else(|_| api::DEFAULT_BASE_URL.to_owned());
        Url::parse(&base_url).with_context(|| {
            format!(
                "{} is not a valid URL: {base_url}",
                env_vars::INTERVALS_API_BASE_URL
            )
        })?;
        let base_url = base_url.trim_end_matches('/').to_owned();

        let log_level = env::var(env_vars::LOG_LEVEL)
            .map(|v| LogLevel::from_str_or_default(&v))
            .unwrap_or_default();

        Ok(Self {
            api_key,
            athlete_id,
            base_url,
            log_level,
        })
    }

    /// One-line startup summary; excludes the API key
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "athlete={} base_url={} log_level={}",
            self.athlete_id, self.base_url, self.log_level
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_athlete_id_accepts_prefixed_form() {
        let id = AthleteId::parse("i123456").unwrap();
        assert_eq!(id.as_str(), "i123456");
    }

    #[test]
    fn test_athlete_id_normalizes_numeric_form() {
        let id = AthleteId::parse("123456").unwrap();
        assert_eq!(id.as_str(), "i123456");
    }

    #[test]
    fn test_athlete_id_rejects_garbage() {
        assert!(AthleteId::parse("").is_err());
        assert!(AthleteId::parse("i").is_err());
        assert!(AthleteId::parse("athlete-one").is_err());
        assert!(AthleteId::parse("i12x34").is_err());
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("warn"), LogLevel::Warn);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }
}
