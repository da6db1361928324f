// ABOUTME: Tests for environment-driven configuration and logging settings
// ABOUTME: Defaults, overrides, validation failures, and error code mapping
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use liftlog::config::{ConfigError, LiftlogConfig, ProgressionThresholds};
use liftlog::logging::{LogFormat, LoggingConfig};
use liftlog_core::errors::{AppError, ErrorCode};
use serial_test::serial;
use std::env;
use std::time::Duration;

const VARS: &[&str] = &[
    "LIFTLOG_DATABASE_URL",
    "LIFTLOG_STORE_TIMEOUT_MS",
    "LIFTLOG_RETRY_MAX_ATTEMPTS",
    "LIFTLOG_RETRY_BASE_DELAY_MS",
    "LIFTLOG_INCREASE_AT_REPS",
    "LIFTLOG_REDUCE_BELOW_REPS",
    "LIFTLOG_MAX_RPE_FOR_INCREASE",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_env();

    let config = LiftlogConfig::from_env().unwrap();

    assert_eq!(config.database.url, "sqlite:liftlog.db");
    assert_eq!(config.store.timeout, Duration::from_millis(5_000));
    assert_eq!(config.store.retry.max_attempts, 3);
    assert_eq!(config.store.retry.initial_backoff_ms, 200);
    assert_eq!(config.progression, ProgressionThresholds::default());
}

#[test]
#[serial]
fn test_environment_overrides() {
    clear_env();
    env::set_var("LIFTLOG_DATABASE_URL", "sqlite::memory:");
    env::set_var("LIFTLOG_STORE_TIMEOUT_MS", "750");
    env::set_var("LIFTLOG_RETRY_MAX_ATTEMPTS", "5");
    env::set_var("LIFTLOG_INCREASE_AT_REPS", " 15 ");

    let config = LiftlogConfig::from_env().unwrap();
    clear_env();

    assert_eq!(config.database.url, "sqlite::memory:");
    assert_eq!(config.store.timeout, Duration::from_millis(750));
    assert_eq!(config.store.retry.max_attempts, 5);
    assert_eq!(config.progression.increase_at_reps, 15);
    assert_eq!(config.progression.reduce_below_reps, 8);
}

#[test]
#[serial]
fn test_unparseable_value_is_rejected() {
    clear_env();
    env::set_var("LIFTLOG_STORE_TIMEOUT_MS", "soon");

    let error = LiftlogConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::Parse(_)), "{error:?}");
    assert_eq!(AppError::from(error).code, ErrorCode::ConfigError);
}

#[test]
#[serial]
fn test_zero_attempts_is_rejected() {
    clear_env();
    env::set_var("LIFTLOG_RETRY_MAX_ATTEMPTS", "0");

    let error = LiftlogConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::ValueOutOfRange(_)));
    let app = AppError::from(error);
    assert_eq!(app.code, ErrorCode::ConfigInvalid);
    assert_eq!(app.code.exit_code(), 78);
}

#[test]
#[serial]
fn test_inverted_thresholds_are_rejected() {
    clear_env();
    env::set_var("LIFTLOG_INCREASE_AT_REPS", "6");
    env::set_var("LIFTLOG_REDUCE_BELOW_REPS", "8");

    let error = LiftlogConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::InvalidRange(_)));
}

#[test]
#[serial]
fn test_empty_database_url_is_missing() {
    clear_env();
    env::set_var("LIFTLOG_DATABASE_URL", "  ");

    let error = LiftlogConfig::from_env().unwrap_err();
    clear_env();

    assert!(matches!(error, ConfigError::MissingField(_)));
}

#[test]
fn test_threshold_validation() {
    assert!(ProgressionThresholds::default().validate().is_ok());

    let zero_reduce = ProgressionThresholds {
        increase_at_reps: 12,
        reduce_below_reps: 0,
        max_rpe_for_increase: 8,
    };
    assert!(zero_reduce.validate().is_err());

    let bad_rpe = ProgressionThresholds {
        increase_at_reps: 12,
        reduce_below_reps: 8,
        max_rpe_for_increase: 11,
    };
    assert!(bad_rpe.validate().is_err());
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::parse("json"), LogFormat::Json);
    assert_eq!(LogFormat::parse("PRETTY"), LogFormat::Pretty);
    assert_eq!(LogFormat::parse("compact"), LogFormat::Compact);
    assert_eq!(LogFormat::parse("unknown"), LogFormat::Compact);
}

#[test]
fn test_verbosity_raises_level() {
    let config = LoggingConfig::default();
    assert_eq!(config.level, "warn");
    assert_eq!(config.clone().with_verbosity(0).level, "warn");
    assert_eq!(config.clone().with_verbosity(1).level, "debug");
    assert_eq!(config.with_verbosity(3).level, "trace");
}

#[test]
#[serial]
fn test_logging_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::set_var("ENVIRONMENT", "production");

    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");
    env::remove_var("ENVIRONMENT");

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
}
