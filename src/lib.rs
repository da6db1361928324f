// ABOUTME: Main library entry point for the LiftLog workout and nutrition tracker
// ABOUTME: Store contract and implementations, store client, sessions, configuration, logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # LiftLog
//!
//! Track sets, reps, weight, and RPE against a fixed five-day plan, log
//! daily nutrition, and see derived progress: the current completion
//! streak, calorie and protein averages, a calendar heat-map, and recent
//! activity.
//!
//! ## Architecture
//!
//! - **`liftlog-core`**: data model, boundary validation, error types
//! - **`liftlog-intelligence`**: the pure aggregation engine (totals,
//!   averages, streaks, progression suggestions, progress summaries)
//! - **this crate**: the [`store::FitnessStore`] contract with SQLite and
//!   in-memory implementations, the [`client::StoreClient`] adding
//!   deadlines, cancellation and retries, the logging sessions in
//!   [`services`], configuration, logging, and the `liftlog-cli` binary
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use liftlog::client::{StoreClient, StoreClientConfig};
//! use liftlog::services::ProgressService;
//! use liftlog::store::SqliteStore;
//! use liftlog_intelligence::progress::Period;
//! use liftlog_core::models::DateKey;
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let store = SqliteStore::connect("sqlite:liftlog.db").await?;
//! let client = StoreClient::new(Arc::new(store), StoreClientConfig::default());
//! let summary = ProgressService::new(client)
//!     .summary(Period::Week, DateKey::today())
//!     .await?;
//! println!("streak: {} days", summary.streak);
//! # Ok(())
//! # }
//! ```

/// Store client with timeout, cancellation, and retry
pub mod client;

/// Environment configuration
pub mod config;

/// Re-exported error types
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Built-in training plan
pub mod plan;

/// Logging sessions and progress service
pub mod services;

/// Persistent store contract and implementations
pub mod store;

pub use liftlog_core::models;
