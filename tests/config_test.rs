// ABOUTME: Integration tests for environment-based configuration loading
// ABOUTME: Env mutation is serialized; each test restores the variables it touches
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Intervals MCP Contributors
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use intervals_mcp_server::config::{LogLevel, ServerConfig};
use serial_test::serial;
use std::env;

fn clear_config_env() {
    env::remove_var("API_KEY");
    env::remove_var("ATHLETE_ID");
    env::remove_var("INTERVALS_API_BASE_URL");
    env::remove_var("LOG_LEVEL");
}

#[test]
#[serial]
fn test_missing_api_key_fails_startup() {
    clear_config_env();
    env::set_var("ATHLETE_ID", "i12345");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("API_KEY"));
    clear_config_env();
}

#[test]
#[serial]
fn test_missing_athlete_id_fails_startup() {
    clear_config_env();
    env::set_var("API_KEY", "secret");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("ATHLETE_ID"));
    clear_config_env();
}

#[test]
#[serial]
fn test_empty_api_key_rejected() {
    clear_config_env();
    env::set_var("API_KEY", "   ");
    env::set_var("ATHLETE_ID", "i12345");

    assert!(ServerConfig::from_env().is_err());
    clear_config_env();
}

#[test]
#[serial]
fn test_numeric_athlete_id_is_normalized() {
    clear_config_env();
    env::set_var("API_KEY", "secret");
    env::set_var("ATHLETE_ID", "12345");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.athlete_id.as_str(), "i12345");
    assert_eq!(config.base_url, "https://intervals.icu/api/v1");
    assert_eq!(config.log_level, LogLevel::Info);
    clear_config_env();
}

#[test]
#[serial]
fn test_malformed_athlete_id_rejected() {
    clear_config_env();
    env::set_var("API_KEY", "secret");
    env::set_var("ATHLETE_ID", "athlete-one");

    let error = ServerConfig::from_env().unwrap_err();
    assert!(error.to_string().contains("ATHLETE_ID"));
    clear_config_env();
}

#[test]
#[serial]
fn test_base_url_override_and_trailing_slash() {
    clear_config_env();
    env::set_var("API_KEY", "secret");
    env::set_var("ATHLETE_ID", "i1");
    env::set_var("INTERVALS_API_BASE_URL", "http://localhost:8080/api/v1/");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.base_url, "http://localhost:8080/api/v1");
    clear_config_env();
}

#[test]
#[serial]
fn test_invalid_base_url_rejected() {
    clear_config_env();
    env::set_var("API_KEY", "secret");
    env::set_var("ATHLETE_ID", "i1");
    env::set_var("INTERVALS_API_BASE_URL", "not a url");

    assert!(ServerConfig::from_env().is_err());
    clear_config_env();
}

#[test]
#[serial]
fn test_log_level_from_env() {
    clear_config_env();
    env::set_var("API_KEY", "secret");
    env::set_var("ATHLETE_ID", "i1");
    env::set_var("LOG_LEVEL", "debug");

    let config = ServerConfig::from_env().unwrap();
    assert_eq!(config.log_level, LogLevel::Debug);
    clear_config_env();
}

#[test]
#[serial]
fn test_summary_excludes_api_key() {
    clear_config_env();
    env::set_var("API_KEY", "super-secret-key");
    env::set_var("ATHLETE_ID", "i42");

    let config = ServerConfig::from_env().unwrap();
    let summary = config.summary();
    assert!(summary.contains("i42"));
    assert!(!summary.contains("super-secret-key"));
    clear_config_env();
}
