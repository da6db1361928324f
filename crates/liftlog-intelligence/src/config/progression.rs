// ABOUTME: Thresholds for the weight-progression decision table
// ABOUTME: Defaults match the prescribed 8-12 rep range with an RPE ceiling of 8
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Progression Configuration
//!
//! All values can be overridden via environment variables with the
//! `LIFTLOG_` prefix (see [`ProgressionThresholds::load`]).

use super::ConfigError;
use crate::constants::limits::{RPE_MAX, RPE_MIN};
use crate::constants::progression::{
    INCREASE_AT_REPS, MAX_RPE_FOR_INCREASE, REDUCE_BELOW_REPS,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Rep and effort thresholds used by the progression suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressionThresholds {
    /// Reps at or above which an increase is suggested (given low enough RPE)
    pub increase_at_reps: u32,
    /// Reps below which a reduction is suggested
    pub reduce_below_reps: u32,
    /// Highest RPE that still allows an increase
    pub max_rpe_for_increase: u8,
}

impl Default for ProgressionThresholds {
    fn default() -> Self {
        Self {
            increase_at_reps: INCREASE_AT_REPS,
            reduce_below_reps: REDUCE_BELOW_REPS,
            max_rpe_for_increase: MAX_RPE_FOR_INCREASE,
        }
    }
}

impl ProgressionThresholds {
    /// Defaults with environment overrides applied, then validated
    ///
    /// # Errors
    ///
    /// Returns an error if an override does not parse or the result is inconsistent
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        Self::apply_env_var("LIFTLOG_INCREASE_AT_REPS", &mut config.increase_at_reps)?;
        Self::apply_env_var("LIFTLOG_REDUCE_BELOW_REPS", &mut config.reduce_below_reps)?;
        Self::apply_env_var(
            "LIFTLOG_MAX_RPE_FOR_INCREASE",
            &mut config.max_rpe_for_increase,
        )?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the thresholds
    ///
    /// # Errors
    ///
    /// Returns an error if the reduce threshold is zero, the increase
    /// threshold does not exceed it, or the RPE ceiling is not a valid RPE
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.reduce_below_reps == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "reduce_below_reps must be > 0",
            ));
        }
        if self.increase_at_reps <= self.reduce_below_reps {
            return Err(ConfigError::InvalidRange(
                "increase_at_reps must be greater than reduce_below_reps",
            ));
        }
        if !(RPE_MIN..=RPE_MAX).contains(&self.max_rpe_for_increase) {
            return Err(ConfigError::ValueOutOfRange(
                "max_rpe_for_increase must be between 1 and 10",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .trim()
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}: '{val}'")))?;
        }
        Ok(())
    }
}
