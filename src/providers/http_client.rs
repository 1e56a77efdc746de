// ABOUTME: Shared HTTP client with connection pooling for upstream API calls
// ABOUTME: Fixed request and connect timeouts; one client for the process lifetime
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

use crate::constants::api::{CONNECT_TIMEOUT_SECS, REQUEST_TIMEOUT_SECS};
use reqwest::{Client, ClientBuilder};
use std::sync::OnceLock;
use std::time::Duration;

static SHARED_CLIENT: OnceLock<Client> = OnceLock::new();

/// Get the shared HTTP client for upstream API calls
///
/// The client pools connections and applies the fixed 30 s request /
/// 10 s connect timeouts. A request that exceeds the timeout surfaces as a
/// connection error to the caller.
pub fn shared_client() -> &'static Client {
    SHARED_CLIENT.get_or_init(|| {
        ClientBuilder::new()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()
            .unwrap_or_else(|_| Client::new())
    })
}
