// ABOUTME: Domain constants for validation limits and progression defaults
// ABOUTME: Organized by concern so validation and the engine share a single source of truth
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Validation limits applied at the input boundary
pub mod limits {
    /// Lowest valid Rate of Perceived Exertion
    pub const RPE_MIN: u8 = 1;
    /// Highest valid Rate of Perceived Exertion
    pub const RPE_MAX: u8 = 10;
    /// Length of a `YYYY-MM-DD` date key
    pub const DATE_KEY_LEN: usize = 10;
    /// Upper bound on a single nutrition entry's calories
    pub const MAX_ENTRY_CALORIES: u32 = 20_000;
    /// Upper bound on a single nutrition entry's protein (grams)
    pub const MAX_ENTRY_PROTEIN_G: u32 = 1_000;
    /// Upper bound on reps in a single set
    pub const MAX_SET_REPS: u32 = 1_000;
}

/// Default thresholds for the weight-progression decision table
pub mod progression {
    /// Reps at or above which a weight increase is considered
    pub const INCREASE_AT_REPS: u32 = 12;
    /// Reps below which a weight reduction is suggested
    pub const REDUCE_BELOW_REPS: u32 = 8;
    /// Highest RPE at which a high-rep set still earns an increase
    pub const MAX_RPE_FOR_INCREASE: u8 = 8;
}

/// Progress reporting defaults
pub mod progress {
    /// Number of days shown in the recent activity list
    pub const RECENT_ACTIVITY_DAYS: usize = 5;
    /// Days in the "week" period
    pub const WEEK_DAYS: u32 = 7;
    /// Days in the "month" period
    pub const MONTH_DAYS: u32 = 30;
    /// Days in the "quarter" period
    pub const QUARTER_DAYS: u32 = 90;
}
