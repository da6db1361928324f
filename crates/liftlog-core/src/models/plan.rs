// ABOUTME: Static exercise prescription models for the weekly training split
// ABOUTME: TrainingDay with id and focus metadata, and the per-exercise ExercisePlanItem
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Weight;
use crate::errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Training day of the five-day split
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingDay {
    /// Monday: chest, shoulders, triceps
    Push,
    /// Tuesday: back, biceps
    Pull,
    /// Wednesday: lower body
    Legs,
    /// Thursday: upper body and trunk
    UpperCore,
    /// Friday: conditioning circuit
    FullBody,
}

impl TrainingDay {
    /// All days in weekly order
    pub const ALL: [Self; 5] = [
        Self::Push,
        Self::Pull,
        Self::Legs,
        Self::UpperCore,
        Self::FullBody,
    ];

    /// Stable identifier used in storage and on the command line
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Push => "push",
            Self::Pull => "pull",
            Self::Legs => "legs",
            Self::UpperCore => "upper_core",
            Self::FullBody => "full_body",
        }
    }

    /// Weekday the day is scheduled on
    #[must_use]
    pub const fn weekday_name(&self) -> &'static str {
        match self {
            Self::Push => "Monday",
            Self::Pull => "Tuesday",
            Self::Legs => "Wednesday",
            Self::UpperCore => "Thursday",
            Self::FullBody => "Friday",
        }
    }

    /// Training focus label
    #[must_use]
    pub const fn focus(&self) -> &'static str {
        match self {
            Self::Push => "Push",
            Self::Pull => "Pull",
            Self::Legs => "Legs",
            Self::UpperCore => "Upper + Core",
            Self::FullBody => "Full-Body/Metabolic",
        }
    }

    /// Parse an id, weekday name, or focus label (case-insensitive)
    ///
    /// # Errors
    ///
    /// Returns `EmptyText` for blank input and `UnknownValue` when nothing matches
    pub fn parse(raw: &str) -> ValidationResult<Self> {
        let needle = raw.trim().to_lowercase();
        if needle.is_empty() {
            return Err(ValidationError::EmptyText { field: "day" });
        }
        Self::ALL
            .into_iter()
            .find(|day| {
                day.id() == needle
                    || day.weekday_name().to_lowercase() == needle
                    || day.focus().to_lowercase() == needle
            })
            .ok_or_else(|| ValidationError::UnknownValue {
                field: "day",
                value: raw.to_owned(),
            })
    }
}

impl fmt::Display for TrainingDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.weekday_name(), self.focus())
    }
}

/// Prescription for one exercise on one training day
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExercisePlanItem {
    /// Unique identifier
    pub id: String,
    /// Day the exercise belongs to
    pub day: TrainingDay,
    /// Position within the day, starting at 0
    pub order: u32,
    /// Exercise name
    pub name: String,
    /// Number of working sets
    pub target_sets: u32,
    /// Target reps, as prescribed text (e.g. `"8-12"`)
    pub target_reps: String,
    /// Working weight
    pub current_weight: Weight,
    /// Rest between sets
    pub rest_between_sets: String,
    /// Rest before the next exercise
    pub rest_before_next: String,
    /// Lifting tempo
    pub tempo: String,
    /// Target RPE, as prescribed text (e.g. `"7-8"`)
    pub rpe_target: String,
    /// When to add weight
    pub progression_rule: String,
    /// Coaching notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Link to a form tutorial
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tutorial_url: Option<String>,
}
