// ABOUTME: Configuration module for the LiftLog application
// ABOUTME: Environment-driven settings for the database, store client, and progression engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Environment-based configuration loading
pub mod environment;

pub use environment::{DatabaseConfig, LiftlogConfig};
pub use liftlog_intelligence::config::{ConfigError, ProgressionThresholds};
