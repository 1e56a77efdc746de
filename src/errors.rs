// ABOUTME: Unified error taxonomy for upstream API calls and tool argument validation
// ABOUTME: Every failure renders to a single human-readable line returned as tool output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # Error Handling
//!
//! Four error kinds cover every failure this server can produce:
//!
//! - [`IntervalsError::Connection`] - network or timeout failure
//! - [`IntervalsError::Api`] - upstream non-2xx response, carries status and message
//! - [`IntervalsError::Parse`] - malformed body on an otherwise-successful response
//! - [`IntervalsError::Validation`] - bad tool arguments, raised before any network call
//!
//! None of these propagate as uncaught faults past the tool handler boundary;
//! handlers convert them to text via `Display` and return the line as the
//! tool's output.

use thiserror::Error;

/// Unified error type for upstream requests and tool argument validation
#[derive(Debug, Clone, Error)]
pub enum IntervalsError {
    /// Network-level failure: DNS, connect, TLS, or the fixed request timeout
    #[error("Connection error: {reason}")]
    Connection {
        /// Description of the transport failure
        reason: String,
    },

    /// Upstream returned a non-2xx status
    #[error("API error {status}: {message}")]
    Api {
        /// HTTP status code from the upstream response
        status: u16,
        /// Upstream-provided message when present, else a generic description
        message: String,
    },

    /// The upstream response claimed success but the body was not decodable
    #[error("Parse error: {reason}")]
    Parse {
        /// Description of the decode failure
        reason: String,
    },

    /// Tool arguments failed validation; no network call was made
    #[error("Validation error: {message}")]
    Validation {
        /// What was wrong with the arguments
        message: String,
    },
}

impl IntervalsError {
    /// Create a connection error
    #[must_use]
    pub fn connection(reason: impl Into<String>) -> Self {
        Self::Connection {
            reason: reason.into(),
        }
    }

    /// Create an API error from a status code and upstream message
    #[must_use]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a parse error
    #[must_use]
    pub fn parse(reason: impl Into<String>) -> Self {
        Self::Parse {
            reason: reason.into(),
        }
    }

    /// Create a validation error
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Whether this error was raised before any network I/O
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

impl From<reqwest::Error> for IntervalsError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::connection("request timed out")
        } else if error.is_decode() {
            Self::parse(error.to_string())
        } else {
            Self::connection(error.to_string())
        }
    }
}

/// Result type alias for upstream operations
pub type IntervalsResult<T> = Result<T, IntervalsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_carries_status_and_message() {
        let error = IntervalsError::api(422, "start date after end date");
        assert_eq!(
            error.to_string(),
            "API error 422: start date after end date"
        );
    }

    #[test]
    fn test_validation_error_display() {
        let error = IntervalsError::validation("start_date must not be after end_date");
        assert!(error.is_validation());
        assert_eq!(
            error.to_string(),
            "Validation error: start_date must not be after end_date"
        );
    }

    #[test]
    fn test_connection_error_display() {
        let error = IntervalsError::connection("request timed out");
        assert_eq!(error.to_string(), "Connection error: request timed out");
    }
}
