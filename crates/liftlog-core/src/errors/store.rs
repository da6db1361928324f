// ABOUTME: Error types for the persistent store boundary
// ABOUTME: Distinguishes retryable transport failures from permanent data errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors surfaced by a `FitnessStore` implementation or the client wrapping it
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// Store could not be reached
    #[error("Store unavailable: {reason}")]
    Unavailable {
        /// Why the store is unreachable
        reason: String,
    },

    /// Store did not answer within the configured timeout
    #[error("Store operation '{operation}' timed out after {timeout_ms}ms")]
    Timeout {
        /// Operation that timed out
        operation: &'static str,
        /// Timeout that elapsed
        timeout_ms: u64,
    },

    /// Caller cancelled the wait
    #[error("Store operation '{operation}' was cancelled")]
    Cancelled {
        /// Operation that was cancelled
        operation: &'static str,
    },

    /// Record does not exist
    #[error("{resource} '{id}' not found")]
    NotFound {
        /// Kind of record
        resource: &'static str,
        /// Identifier that was looked up
        id: String,
    },

    /// A different record already exists under this identifier
    #[error("{resource} '{id}' already exists with different content")]
    Conflict {
        /// Kind of record
        resource: &'static str,
        /// Conflicting identifier
        id: String,
    },

    /// Backend reported a failure
    #[error("Store backend error during {operation}: {details}")]
    Backend {
        /// Operation that failed
        operation: &'static str,
        /// Backend message
        details: String,
    },

    /// Stored data failed validation when read back
    #[error("Stored {resource} is corrupt: {details}")]
    Corrupt {
        /// Kind of record
        resource: &'static str,
        /// What failed to validate
        details: String,
    },
}

/// Result alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;

impl StoreError {
    /// Create a "not found" error
    #[must_use]
    pub fn not_found(resource: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource,
            id: id.into(),
        }
    }

    /// Create a backend error
    #[must_use]
    pub fn backend(operation: &'static str, details: impl Into<String>) -> Self {
        Self::Backend {
            operation,
            details: details.into(),
        }
    }

    /// Create an "unavailable" error
    #[must_use]
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    /// Whether retrying the same request might succeed
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::Unavailable { .. } | Self::Timeout { .. })
    }
}
