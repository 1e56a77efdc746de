// ABOUTME: Server binary bridging the Intervals.icu REST API onto MCP stdio
// ABOUTME: Validates configuration at startup and runs the transport loop
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors

//! # Intervals MCP Server Binary
//!
//! Loads configuration from the environment, initializes logging, and runs
//! the stdio transport until the client closes stdin. Missing required
//! configuration fails startup with a descriptive error.

use anyhow::{Context, Result};
use clap::Parser;
use intervals_mcp_server::{
    config::environment::ServerConfig,
    logging,
    mcp::{resources::ServerResources, transport::StdioTransport},
};
use std::sync::Arc;
use tracing::info;

#[derive(Parser)]
#[command(name = "intervals-mcp-server")]
#[command(about = "Intervals.icu MCP server - fitness data tools for LLMs")]
#[command(version)]
struct Args {}

#[tokio::main]
async fn main() -> Result<()> {
    let _args = Args::parse();

    // Configuration is validated before logging exists; errors print via anyhow
    let config = ServerConfig::from_env().context("invalid server configuration")?;

    logging::init_from_env(config.log_level)?;

    info!("Starting Intervals MCP Server");
    info!("{}", config.summary());

    let resources = Arc::new(ServerResources::new(config));
    let transport = StdioTransport::new(resources);
    transport.run().await
}
