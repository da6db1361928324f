// ABOUTME: Configuration module for liftlog-intelligence crate
// ABOUTME: Re-exports progression thresholds and the configuration error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;

/// Weight-progression thresholds
pub mod progression;

pub use error::ConfigError;
pub use progression::ProgressionThresholds;
