// ABOUTME: Boundary validation errors for user and store supplied values
// ABOUTME: Out-of-range RPE, negative counts, malformed date keys are rejected, never clamped
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised when raw input fails to convert into a domain type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Date key is not a real calendar date in `YYYY-MM-DD` form
    #[error("Invalid date key '{value}': expected YYYY-MM-DD")]
    InvalidDateKey {
        /// The rejected input
        value: String,
    },

    /// RPE outside `[1, 10]`
    #[error("RPE {value} is out of range: must be between 1 and 10")]
    RpeOutOfRange {
        /// The rejected value
        value: i64,
    },

    /// A count that must be non-negative was negative
    #[error("{field} must not be negative (got {value})")]
    NegativeValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: i64,
    },

    /// A value exceeded its sanity limit
    #[error("{field} of {value} exceeds the limit of {limit}")]
    AboveLimit {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: i64,
        /// Largest accepted value
        limit: i64,
    },

    /// Required field was not supplied
    #[error("Missing required field: {field}")]
    MissingField {
        /// Name of the missing field
        field: &'static str,
    },

    /// Text field was empty or whitespace
    #[error("{field} must not be empty")]
    EmptyText {
        /// Name of the offending field
        field: &'static str,
    },

    /// Value is not one of the accepted names
    #[error("Unknown {field} '{value}'")]
    UnknownValue {
        /// Name of the offending field
        field: &'static str,
        /// The rejected value
        value: String,
    },

    /// Range bounds are reversed
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Range start
        start: String,
        /// Range end
        end: String,
    },
}

/// Result alias for boundary conversions
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Convert a signed count into `u32`, rejecting negatives and values above `limit`
///
/// # Errors
///
/// Returns `NegativeValue` for negative input and `AboveLimit` above `limit`
pub fn non_negative(field: &'static str, value: i64, limit: u32) -> ValidationResult<u32> {
    if value < 0 {
        return Err(ValidationError::NegativeValue { field, value });
    }
    if value > i64::from(limit) {
        return Err(ValidationError::AboveLimit {
            field,
            value,
            limit: i64::from(limit),
        });
    }
    u32::try_from(value).map_err(|_| ValidationError::AboveLimit {
        field,
        value,
        limit: i64::from(limit),
    })
}
