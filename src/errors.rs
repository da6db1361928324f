// ABOUTME: Error types used across the application layer
// ABOUTME: Re-exports the unified AppError and the domain errors that convert into it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use liftlog_core::errors::{
    AppError, AppResult, ErrorCode, ErrorContext, StoreError, StoreResult, ValidationError,
    ValidationResult,
};
pub use liftlog_intelligence::config::ConfigError;
