// ABOUTME: Weight-progression decision table combining reps completed and perceived effort
// ABOUTME: Produces IncreaseWeight, ReduceWeight, or Hold for a set or a whole exercise session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progression Suggestions
//!
//! The table is total: every `(reps, rpe)` pair maps to exactly one
//! suggestion.
//!
//! | reps                         | rpe              | suggestion       |
//! |------------------------------|------------------|------------------|
//! | 0                            | any              | `Hold`           |
//! | `1..reduce_below_reps`       | any              | `ReduceWeight`   |
//! | `>= increase_at_reps`        | `<= max_rpe`     | `IncreaseWeight` |
//! | anything else                | any / missing    | `Hold`           |

use crate::config::ProgressionThresholds;
use crate::models::{Rpe, SetRecord};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coaching suggestion for the next session's working weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Suggestion {
    /// Add load next session
    IncreaseWeight,
    /// Drop load to get back into the rep range
    ReduceWeight,
    /// Keep the current load
    Hold,
}

impl Suggestion {
    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::IncreaseWeight => "increase_weight",
            Self::ReduceWeight => "reduce_weight",
            Self::Hold => "hold",
        }
    }

    /// Message shown to the user
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::IncreaseWeight => "Consider increasing weight based on your performance!",
            Self::ReduceWeight => "Consider reducing weight to stay in the target rep range.",
            Self::Hold => "Keep the current weight.",
        }
    }
}

impl fmt::Display for Suggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Suggest a weight change for one set using the default thresholds
#[must_use]
pub fn suggest_progression(reps: u32, rpe: Option<Rpe>) -> Suggestion {
    suggest_progression_with(&ProgressionThresholds::default(), reps, rpe)
}

/// Suggest a weight change for one set using the supplied thresholds
#[must_use]
pub fn suggest_progression_with(
    thresholds: &ProgressionThresholds,
    reps: u32,
    rpe: Option<Rpe>,
) -> Suggestion {
    if reps == 0 {
        return Suggestion::Hold;
    }
    if reps < thresholds.reduce_below_reps {
        return Suggestion::ReduceWeight;
    }
    match rpe {
        Some(rpe)
            if reps >= thresholds.increase_at_reps
                && rpe.value() <= thresholds.max_rpe_for_increase =>
        {
            Suggestion::IncreaseWeight
        }
        _ => Suggestion::Hold,
    }
}

/// Session-level suggestion over every set of one exercise, default thresholds
#[must_use]
pub fn suggest_for_sets(sets: &[SetRecord]) -> Suggestion {
    suggest_for_sets_with(&ProgressionThresholds::default(), sets)
}

/// Session-level suggestion over every set of one exercise
///
/// Holds until every set has both reps and RPE entered, then applies the
/// table to the best reps and the hardest RPE of the session.
#[must_use]
pub fn suggest_for_sets_with(thresholds: &ProgressionThresholds, sets: &[SetRecord]) -> Suggestion {
    if sets.is_empty() || !sets.iter().all(SetRecord::is_logged) {
        return Suggestion::Hold;
    }
    let max_reps = sets.iter().map(|s| s.reps_completed).max().unwrap_or(0);
    let max_rpe = sets.iter().filter_map(|s| s.rpe).max();
    suggest_progression_with(thresholds, max_reps, max_rpe)
}
