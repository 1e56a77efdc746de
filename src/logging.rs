// ABOUTME: Logging configuration and structured logging setup for observability
// ABOUTME: Routes all diagnostics to stderr so stdout carries only JSON-RPC frames
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! Structured logging setup
//!
//! `RUST_LOG` takes precedence when set; otherwise the configured
//! `LOG_LEVEL` applies. Output always goes to stderr: the stdio transport
//! owns stdout.

use crate::config::LogLevel;
use anyhow::Result;
use std::env;
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Pretty format for development (default)
    #[default]
    Pretty,
    /// `JSON` format for production logging
    Json,
    /// Compact format for space-constrained environments
    Compact,
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Filter applied when `RUST_LOG` is not set
    pub level: LogLevel,
    /// Output format
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Create logging configuration from the environment and server config
    #[must_use]
    pub fn from_env(level: LogLevel) -> Self {
        let format = match env::var("LOG_FORMAT").as_deref() {
            Ok("json") => LogFormat::Json,
            Ok("compact") => LogFormat::Compact,
            _ => LogFormat::Pretty,
        };
        Self { level, format }
    }

    /// Initialize the global tracing subscriber
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(&self) -> Result<()> {
        let env_filter = env::var("RUST_LOG")
            .map_or_else(|_| EnvFilter::new(self.level.as_str()), EnvFilter::new)
            // Upstream HTTP internals are noise at info level
            .add_directive("hyper=warn".parse()?)
            .add_directive("reqwest=warn".parse()?)
            .add_directive("rustls=warn".parse()?);

        let registry = tracing_subscriber::registry().with(env_filter);
        match self.format {
            LogFormat::Json => {
                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(io::stderr),
                    )
                    .try_init()?;
            }
            LogFormat::Compact => {
                registry
                    .with(
                        tracing_subscriber::fmt::layer()
                            .compact()
                            .with_writer(io::stderr),
                    )
                    .try_init()?;
            }
            LogFormat::Pretty => {
                registry
                    .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
                    .try_init()?;
            }
        }
        Ok(())
    }
}

/// Initialize logging from environment variables
///
/// # Errors
///
/// Returns an error if the tracing subscriber fails to initialize.
pub fn init_from_env(level: LogLevel) -> Result<()> {
    LoggingConfig::from_env(level).init()
}
