// ABOUTME: Core types and validation for the LiftLog workout and nutrition tracker
// ABOUTME: Foundation crate with domain models, boundary validation, error types, and constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog Core
//!
//! Foundation crate providing the shared data model for the LiftLog tracker.
//! Everything that crosses a boundary (user input, the persistent store) is
//! validated into the types defined here, so downstream crates can assume
//! well-formed values.
//!
//! ## Modules
//!
//! - **errors**: `AppError`/`ErrorCode`, boundary `ValidationError`, and `StoreError`
//! - **constants**: Domain limits and defaults
//! - **models**: Date keys, sets, nutrition entries, workout completions, exercise plan

/// Unified error handling with standard error codes
pub mod errors;

/// Domain limits and defaults
pub mod constants;

/// Core data models
pub mod models;
