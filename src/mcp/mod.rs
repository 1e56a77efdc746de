// ABOUTME: MCP server module wiring protocol handlers, schemas, and transport
// ABOUTME: JSON-RPC 2.0 over stdio with one handler per exposed tool
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # MCP Server Implementation
//!
//! Hand-implemented Model Context Protocol surface: JSON-RPC message types,
//! tool schema definitions, protocol method handlers, tool-call routing, and
//! the newline-delimited stdio transport.

/// Core protocol message handlers (initialize, ping, listings)
pub mod protocol;
/// Dependency container passed to all handlers
pub mod resources;
/// Protocol schema definitions and tool schemas
pub mod schema;
/// Tool execution handlers for tools/call
pub mod tool_handlers;
/// Stdio transport loop
pub mod transport;
