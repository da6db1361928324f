// ABOUTME: Environment configuration loading for database, store client, and thresholds
// ABOUTME: Every value has a default; malformed overrides are reported, never ignored
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read once at startup from `LIFTLOG_*` environment
//! variables.
//!
//! | variable                         | default              |
//! |----------------------------------|----------------------|
//! | `LIFTLOG_DATABASE_URL`           | `sqlite:liftlog.db`  |
//! | `LIFTLOG_STORE_TIMEOUT_MS`       | `5000`               |
//! | `LIFTLOG_RETRY_MAX_ATTEMPTS`     | `3`                  |
//! | `LIFTLOG_RETRY_BASE_DELAY_MS`    | `200`                |
//! | `LIFTLOG_INCREASE_AT_REPS`       | `12`                 |
//! | `LIFTLOG_REDUCE_BELOW_REPS`      | `8`                  |
//! | `LIFTLOG_MAX_RPE_FOR_INCREASE`   | `8`                  |

use crate::client::{RetryConfig, StoreClientConfig, DEFAULT_TIMEOUT_MS};
use liftlog_intelligence::config::{ConfigError, ProgressionThresholds};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

/// Default database location
pub const DEFAULT_DATABASE_URL: &str = "sqlite:liftlog.db";

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// sqlx connection URL (`sqlite:path` or `sqlite::memory:`)
    pub url: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.to_owned(),
        }
    }
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiftlogConfig {
    /// Database settings
    pub database: DatabaseConfig,
    /// Store client deadline and retry settings
    pub store: StoreClientConfig,
    /// Progression suggestion thresholds
    pub progression: ProgressionThresholds,
}

impl LiftlogConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable does not parse or the values are inconsistent
    pub fn from_env() -> Result<Self, ConfigError> {
        let url = env_var_or("LIFTLOG_DATABASE_URL", DEFAULT_DATABASE_URL)?;
        if url.trim().is_empty() {
            return Err(ConfigError::MissingField("LIFTLOG_DATABASE_URL"));
        }

        let defaults = RetryConfig::default();
        let timeout_ms: u64 = env_parse_or("LIFTLOG_STORE_TIMEOUT_MS", DEFAULT_TIMEOUT_MS)?;
        let max_attempts: u32 = env_parse_or("LIFTLOG_RETRY_MAX_ATTEMPTS", defaults.max_attempts)?;
        let initial_backoff_ms: u64 =
            env_parse_or("LIFTLOG_RETRY_BASE_DELAY_MS", defaults.initial_backoff_ms)?;

        let config = Self {
            database: DatabaseConfig { url },
            store: StoreClientConfig {
                timeout: Duration::from_millis(timeout_ms),
                retry: RetryConfig {
                    max_attempts,
                    initial_backoff_ms,
                },
            },
            progression: ProgressionThresholds::load()?,
        };
        config.validate()?;

        info!(
            database.url = %config.database.url,
            store.timeout_ms = timeout_ms,
            retry.max_attempts = max_attempts,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Validate cross-field constraints
    ///
    /// # Errors
    ///
    /// Returns an error for a zero timeout, zero attempts, or invalid thresholds
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.store.timeout.is_zero() {
            return Err(ConfigError::ValueOutOfRange(
                "LIFTLOG_STORE_TIMEOUT_MS must be > 0",
            ));
        }
        if self.store.retry.max_attempts == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "LIFTLOG_RETRY_MAX_ATTEMPTS must be >= 1",
            ));
        }
        self.progression.validate()
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> Result<String, ConfigError> {
    match env::var(key) {
        Ok(value) => Ok(value),
        Err(env::VarError::NotPresent) => Ok(default.to_owned()),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}

/// Parse an environment variable, falling back to `default` when unset
fn env_parse_or<T: FromStr>(key: &str, default: T) -> Result<T, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Parse(format!("Invalid {key}: '{value}'"))),
        Err(env::VarError::NotPresent) => Ok(default),
        Err(e) => Err(ConfigError::EnvVar(e)),
    }
}
