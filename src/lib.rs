// ABOUTME: Main library entry point for the Intervals.icu MCP bridge
// ABOUTME: Exposes Intervals.icu fitness data tools over the Model Context Protocol
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

#![deny(unsafe_code)]

//! # Intervals MCP Server
//!
//! A Model Context Protocol (MCP) server that proxies the Intervals.icu
//! REST API. Each tool receives structured arguments, issues one HTTP
//! request upstream, and returns a human-readable text summary for an LLM
//! client.
//!
//! ## Architecture
//!
//! - **Providers**: the upstream API client and request normalization
//! - **Models**: optional-field structs for upstream payloads
//! - **Formatters**: pure functions turning payloads into text
//! - **MCP**: JSON-RPC protocol types, tool schemas, handlers, and the
//!   stdio transport
//! - **Config**: environment-based configuration validated at startup
//!
//! ## Quick Start
//!
//! 1. Export `API_KEY` and `ATHLETE_ID`
//! 2. Start `intervals-mcp-server`
//! 3. Connect from Claude or another MCP client over stdio

/// Environment-based configuration management
pub mod config;

/// Application constants grouped by domain
pub mod constants;

/// Error taxonomy for upstream calls and argument validation
pub mod errors;

/// Pure response formatters
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// MCP protocol implementation and stdio transport
pub mod mcp;

/// Data models for upstream entities
pub mod models;

/// Upstream API client
pub mod providers;

/// Typed workout documents for planned workouts
pub mod workouts;
