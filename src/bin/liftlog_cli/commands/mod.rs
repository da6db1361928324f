// ABOUTME: Command handlers for liftlog-cli
// ABOUTME: Plan, nutrition, workout, and progress subcommands
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod nutrition;
pub mod plan;
pub mod progress;
pub mod workout;
