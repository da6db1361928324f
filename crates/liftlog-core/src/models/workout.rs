// ABOUTME: Strength-training models for logged sets and per-day workout outcomes
// ABOUTME: Rpe, Weight, SetRecord, SetInput, and WorkoutDayCompletion definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::DateKey;
use crate::constants::limits::{MAX_SET_REPS, RPE_MAX, RPE_MIN};
use crate::errors::validation::non_negative;
use crate::errors::{ValidationError, ValidationResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Rate of Perceived Exertion, an integer in `[1, 10]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Rpe(u8);

impl Rpe {
    /// Validate a raw RPE value
    ///
    /// # Errors
    ///
    /// Returns `RpeOutOfRange` outside `[1, 10]`
    pub fn new(value: i64) -> ValidationResult<Self> {
        if value < i64::from(RPE_MIN) || value > i64::from(RPE_MAX) {
            return Err(ValidationError::RpeOutOfRange { value });
        }
        u8::try_from(value)
            .map(Self)
            .map_err(|_| ValidationError::RpeOutOfRange { value })
    }

    /// Numeric value
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for Rpe {
    type Error = ValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Rpe> for u8 {
    fn from(rpe: Rpe) -> Self {
        rpe.0
    }
}

impl fmt::Display for Rpe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Free-text load description such as `"135 lbs"`, `"25kg DBs"` or `"BW"`
///
/// The text is kept exactly as entered. Only volume calculations look at
/// the numeric magnitude, and text without a leading number has none.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weight(String);

impl Weight {
    /// Wrap raw weight text
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Raw text as entered
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Leading numeric magnitude, ignoring the unit
    #[must_use]
    pub fn magnitude(&self) -> Option<f64> {
        let trimmed = self.0.trim_start();
        let end = trimmed
            .char_indices()
            .find(|(_, c)| !(c.is_ascii_digit() || *c == '.'))
            .map_or(trimmed.len(), |(i, _)| i);
        trimmed[..end].parse::<f64>().ok().filter(|m| m.is_finite())
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One completed set of one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Load used, as free text
    pub weight: Weight,
    /// Reps completed (0 until the user enters them)
    pub reps_completed: u32,
    /// Perceived effort, absent until entered
    pub rpe: Option<Rpe>,
}

impl SetRecord {
    /// Blank set pre-filled with the prescribed weight
    #[must_use]
    pub const fn planned(weight: Weight) -> Self {
        Self {
            weight,
            reps_completed: 0,
            rpe: None,
        }
    }

    /// Whether both reps and RPE have been entered
    #[must_use]
    pub const fn is_logged(&self) -> bool {
        self.reps_completed > 0 && self.rpe.is_some()
    }
}

/// Raw set values as received from a user, before validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SetInput {
    /// Load text; `None` keeps the current weight
    pub weight: Option<String>,
    /// Reps entered
    pub reps: Option<i64>,
    /// RPE entered
    pub rpe: Option<i64>,
}

impl SetInput {
    /// Validate against the set being edited and produce its replacement
    ///
    /// # Errors
    ///
    /// Returns a `ValidationError` for negative reps or RPE outside `[1, 10]`
    pub fn apply_to(&self, current: &SetRecord) -> ValidationResult<SetRecord> {
        let reps_completed = match self.reps {
            Some(reps) => non_negative("reps", reps, MAX_SET_REPS)?,
            None => current.reps_completed,
        };
        let rpe = match self.rpe {
            Some(raw) => Some(Rpe::new(raw)?),
            None => current.rpe,
        };
        let weight = self
            .weight
            .as_ref()
            .map_or_else(|| current.weight.clone(), Weight::new);
        Ok(SetRecord {
            weight,
            reps_completed,
            rpe,
        })
    }
}

/// One calendar day's workout outcome
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutDayCompletion {
    /// Day this outcome belongs to
    pub date: DateKey,
    /// Whether a workout was completed
    pub completed: bool,
    /// Exercises performed (0 unless completed)
    pub exercise_count: u32,
    /// Sum of weight x reps across sets (0 unless completed)
    pub total_volume: f64,
}

impl WorkoutDayCompletion {
    /// A completed day
    ///
    /// # Errors
    ///
    /// Returns `NegativeValue` when the volume is negative or not finite
    pub fn completed(date: DateKey, exercise_count: u32, total_volume: f64) -> ValidationResult<Self> {
        if !total_volume.is_finite() || total_volume < 0.0 {
            return Err(ValidationError::NegativeValue {
                field: "total_volume",
                value: total_volume as i64,
            });
        }
        Ok(Self {
            date,
            completed: true,
            exercise_count,
            total_volume,
        })
    }

    /// A rest (or missed) day
    #[must_use]
    pub const fn rest_day(date: DateKey) -> Self {
        Self {
            date,
            completed: false,
            exercise_count: 0,
            total_volume: 0.0,
        }
    }
}
