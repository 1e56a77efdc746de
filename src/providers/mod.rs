// ABOUTME: Upstream provider module for the Intervals.icu REST API
// ABOUTME: Shared HTTP client plus the typed API client used by tool handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! Upstream API access
//!
//! One provider only: the Intervals.icu REST service. The client issues a
//! single authenticated HTTP request per call, normalizes failures into the
//! [`crate::errors::IntervalsError`] taxonomy, and never retries.

/// Shared HTTP client with bounded timeouts
pub mod http_client;
/// Intervals.icu API client
pub mod intervals;

pub use http_client::shared_client;
pub use intervals::IntervalsClient;
