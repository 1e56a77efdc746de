// ABOUTME: Server resource container injected into protocol and tool handlers
// ABOUTME: Holds the immutable configuration and the upstream API client
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! Shared server resources
//!
//! Everything a handler needs lives here behind one `Arc`: the startup
//! configuration and the upstream client. Nothing in this container is
//! mutable, so concurrent tool invocations need no locking.

use crate::config::ServerConfig;
use crate::providers::IntervalsClient;
use std::sync::Arc;

/// Immutable resources shared by all tool invocations
#[derive(Debug)]
pub struct ServerResources {
    /// Startup configuration
    pub config: Arc<ServerConfig>,
    /// Upstream API client
    pub client: IntervalsClient,
}

impl ServerResources {
    /// Bundle the configuration and a client built from it
    #[must_use]
    pub fn new(config: ServerConfig) -> Self {
        let config = Arc::new(config);
        let client = IntervalsClient::new(Arc::clone(&config));
        Self { config, client }
    }
}
