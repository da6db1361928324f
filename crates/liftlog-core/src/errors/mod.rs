// ABOUTME: Unified error handling with standard error codes for LiftLog
// ABOUTME: AppError carries a code, message and context; domain errors convert into it
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling System
//!
//! Domain-specific errors (`ValidationError`, `StoreError`) are produced close
//! to where things go wrong. The application layer converts them into
//! `AppError`, which carries a stable `ErrorCode` and optional context that
//! the CLI renders and maps to a process exit code.

/// Boundary validation errors
pub mod validation;

/// Persistent store errors
pub mod store;

pub use store::{StoreError, StoreResult};
pub use validation::{ValidationError, ValidationResult};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::error::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input failed validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A required field was absent
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// Input was not in the expected format
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// Numeric input outside its valid range
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,

    // Resource Management (4000-4999)
    /// Requested record does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,
    /// A record with this identifier already exists with different content
    #[serde(rename = "RESOURCE_ALREADY_EXISTS")]
    ResourceAlreadyExists = 4001,
    /// A write for this record is already in flight
    #[serde(rename = "RESOURCE_LOCKED")]
    ResourceLocked = 4002,
    /// The store could not be reached or timed out
    #[serde(rename = "RESOURCE_UNAVAILABLE")]
    ResourceUnavailable = 4003,
    /// The caller cancelled the operation
    #[serde(rename = "OPERATION_CANCELLED")]
    OperationCancelled = 4004,

    // Configuration (6000-6999)
    /// Configuration could not be loaded
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 6000,
    /// Configuration values are inconsistent
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,

    // Internal Errors (9000-9999)
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 9000,
    /// The storage backend reported a failure
    #[serde(rename = "STORAGE_ERROR")]
    StorageError = 9002,
    /// Data serialization/deserialization failed
    #[serde(rename = "SERIALIZATION_ERROR")]
    SerializationError = 9003,
}

impl ErrorCode {
    /// Process exit code for this error (sysexits.h conventions)
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange
            | Self::ResourceNotFound
            | Self::ResourceAlreadyExists => 65,
            Self::ResourceLocked | Self::ResourceUnavailable | Self::OperationCancelled => 69,
            Self::ConfigError | Self::ConfigInvalid => 78,
            Self::StorageError => 74,
            Self::InternalError | Self::SerializationError => 70,
        }
    }

    /// Whether the user can reasonably retry the same action
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::ResourceLocked | Self::ResourceUnavailable | Self::OperationCancelled
        )
    }

    /// Get a user-friendly description of this error
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::InvalidInput => "The provided input is invalid",
            Self::MissingRequiredField => "A required field is missing",
            Self::InvalidFormat => "The data format is invalid",
            Self::ValueOutOfRange => "The provided value is outside the acceptable range",
            Self::ResourceNotFound => "The requested record was not found",
            Self::ResourceAlreadyExists => "A record with this identifier already exists",
            Self::ResourceLocked => "A save for this record is still in progress",
            Self::ResourceUnavailable => "The data store is temporarily unavailable",
            Self::OperationCancelled => "The operation was cancelled",
            Self::ConfigError => "Configuration error encountered",
            Self::ConfigInvalid => "Configuration is invalid",
            Self::InternalError => "An internal error occurred",
            Self::StorageError => "Storage operation failed",
            Self::SerializationError => "Data serialization/deserialization failed",
        }
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the record the operation targeted
    pub resource_id: Option<String>,
    /// Additional key-value context
    pub details: Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            details: Value::Object(Map::new()),
        }
    }
}

/// Unified error type for the application
#[derive(Debug, thiserror::Error)]
#[error("{}: {}", .code.description(), .message)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn Error + Send + Sync>>,
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Create a new `AppError` with the given code and message
    #[must_use]
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Add a resource ID to the error context
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Add details to the error context
    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.context.details = details;
        self
    }

    /// Add a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Record not found
    #[must_use]
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Invalid input
    #[must_use]
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Internal error
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    /// Configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Write refused because another write for the same record is pending
    #[must_use]
    pub fn write_in_flight(record_id: impl Into<String>) -> Self {
        let record_id = record_id.into();
        Self::new(
            ErrorCode::ResourceLocked,
            format!("a save for '{record_id}' is already pending"),
        )
        .with_resource_id(record_id)
    }
}

impl From<ValidationError> for AppError {
    fn from(error: ValidationError) -> Self {
        let code = match &error {
            ValidationError::MissingField { .. } => ErrorCode::MissingRequiredField,
            ValidationError::InvalidDateKey { .. }
            | ValidationError::EmptyText { .. }
            | ValidationError::UnknownValue { .. } => ErrorCode::InvalidFormat,
            ValidationError::RpeOutOfRange { .. } | ValidationError::AboveLimit { .. } => {
                ErrorCode::ValueOutOfRange
            }
            ValidationError::NegativeValue { .. } | ValidationError::InvalidRange { .. } => {
                ErrorCode::InvalidInput
            }
        };
        Self::new(code, error.to_string()).with_source(error)
    }
}

impl From<StoreError> for AppError {
    fn from(error: StoreError) -> Self {
        let (code, resource_id) = match &error {
            StoreError::NotFound { id, .. } => (ErrorCode::ResourceNotFound, Some(id.clone())),
            StoreError::Conflict { id, .. } => (ErrorCode::ResourceAlreadyExists, Some(id.clone())),
            StoreError::Unavailable { .. } | StoreError::Timeout { .. } => {
                (ErrorCode::ResourceUnavailable, None)
            }
            StoreError::Cancelled { .. } => (ErrorCode::OperationCancelled, None),
            StoreError::Backend { .. } => (ErrorCode::StorageError, None),
            StoreError::Corrupt { .. } => (ErrorCode::SerializationError, None),
        };
        let app = Self::new(code, error.to_string()).with_source(error);
        match resource_id {
            Some(id) => app.with_resource_id(id),
            None => app,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_exit_codes() {
        assert_eq!(ErrorCode::InvalidInput.exit_code(), 65);
        assert_eq!(ErrorCode::ResourceUnavailable.exit_code(), 69);
        assert_eq!(ErrorCode::ConfigInvalid.exit_code(), 78);
        assert_eq!(ErrorCode::InternalError.exit_code(), 70);
    }

    #[test]
    fn test_validation_error_maps_to_code() {
        let error = AppError::from(ValidationError::RpeOutOfRange { value: 11 });
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
        assert!(error.message.contains("11"));
    }

    #[test]
    fn test_store_not_found_keeps_resource_id() {
        let error = AppError::from(StoreError::not_found("nutrition entry", "17"));
        assert_eq!(error.code, ErrorCode::ResourceNotFound);
        assert_eq!(error.context.resource_id.as_deref(), Some("17"));
    }

    #[test]
    fn test_display_includes_description() {
        let error = AppError::write_in_flight("entry-1");
        let rendered = error.to_string();
        assert!(rendered.starts_with("A save for this record is still in progress"));
        assert!(error.code.is_retryable());
    }
}
