// ABOUTME: Configuration module for environment-based server settings
// ABOUTME: Exposes the immutable ServerConfig constructed once at startup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! Configuration management
//!
//! All configuration comes from environment variables, is validated once at
//! startup, and is passed explicitly to the components that need it. No
//! ambient lookups happen inside tool handlers.

/// Environment-based configuration parsing and validation
pub mod environment;

pub use environment::{AthleteId, LogLevel, ServerConfig};
