// ABOUTME: Progress summary over a reporting period: streak, averages, calendar, recent activity
// ABOUTME: Pure assembly of already-fetched nutrition entries and workout completions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::aggregation::{
    completion_streak, daily_totals_by_date, period_average, DailyTotals, NutritionMetric,
};
use crate::constants::progress::{MONTH_DAYS, QUARTER_DAYS, RECENT_ACTIVITY_DAYS, WEEK_DAYS};
use crate::models::{DateKey, DateRange, NutritionEntry, WorkoutDayCompletion};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Reporting period ending at the as-of date
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Period {
    /// Last 7 days
    #[default]
    Week,
    /// Last 30 days
    Month,
    /// Last 90 days
    Quarter,
}

impl Period {
    /// Number of days covered
    #[must_use]
    pub const fn days(&self) -> u32 {
        match self {
            Self::Week => WEEK_DAYS,
            Self::Month => MONTH_DAYS,
            Self::Quarter => QUARTER_DAYS,
        }
    }

    /// Stable identifier
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
        }
    }

    /// Parse an identifier, returning `None` when unknown
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "week" => Some(Self::Week),
            "month" => Some(Self::Month),
            "quarter" => Some(Self::Quarter),
            _ => None,
        }
    }

    /// Inclusive date range of this period ending at `as_of`
    #[must_use]
    pub fn range(&self, as_of: DateKey) -> DateRange {
        DateRange::ending_at(as_of, self.days())
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Heat-map state of one day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarMark {
    /// A workout was completed
    Completed,
    /// Rest or missed day
    Rest,
}

/// One cell of a Sunday-first, seven-column calendar grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    /// Padding before the first day so it lands under its weekday
    Blank,
    /// A day inside the period
    Day {
        /// Calendar day
        date: DateKey,
        /// Weekday of `date`
        weekday: Weekday,
        /// Whether a workout was completed
        mark: CalendarMark,
    },
}

/// Derived progress metrics for one period
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Period covered
    pub period: Period,
    /// Dates covered, inclusive
    pub range: DateRange,
    /// Trailing completion streak ending at the last day of the range
    pub streak: u32,
    /// Mean calories per logged day, `None` without any logged day
    pub average_calories: Option<f64>,
    /// Mean protein per logged day, `None` without any logged day
    pub average_protein: Option<f64>,
    /// Days with at least one nutrition entry
    pub logged_days: usize,
    /// Completed workouts in the range
    pub workouts_completed: usize,
    /// Calendar grid, leading blanks first
    pub calendar: Vec<CalendarCell>,
    /// Most recent days first
    pub recent_activity: Vec<WorkoutDayCompletion>,
}

/// Build the summary for `period` ending at `as_of`
///
/// Records outside the range are ignored. A day without a completion
/// record counts as a rest day.
#[must_use]
pub fn summarize(
    period: Period,
    as_of: DateKey,
    nutrition: &[NutritionEntry],
    completions: &[WorkoutDayCompletion],
) -> ProgressSummary {
    let range = period.range(as_of);

    let in_range: Vec<NutritionEntry> = nutrition
        .iter()
        .filter(|e| range.contains(e.date))
        .cloned()
        .collect();
    let per_day: Vec<DailyTotals> = daily_totals_by_date(&in_range).into_values().collect();

    let days = dense_days(range, completions);
    let calendar = calendar_cells(&days);
    let recent_activity = days
        .iter()
        .rev()
        .take(RECENT_ACTIVITY_DAYS)
        .cloned()
        .collect();

    ProgressSummary {
        period,
        range,
        streak: completion_streak(&days),
        average_calories: period_average(&per_day, NutritionMetric::Calories),
        average_protein: period_average(&per_day, NutritionMetric::Protein),
        logged_days: per_day.len(),
        workouts_completed: days.iter().filter(|d| d.completed).count(),
        calendar,
        recent_activity,
    }
}

/// One completion per day of the range, oldest first
fn dense_days(range: DateRange, completions: &[WorkoutDayCompletion]) -> Vec<WorkoutDayCompletion> {
    let by_date: HashMap<DateKey, &WorkoutDayCompletion> = completions
        .iter()
        .filter(|c| range.contains(c.date))
        .map(|c| (c.date, c))
        .collect();
    range
        .days()
        .map(|date| {
            by_date
                .get(&date)
                .map_or_else(|| WorkoutDayCompletion::rest_day(date), |c| (*c).clone())
        })
        .collect()
}

fn calendar_cells(days: &[WorkoutDayCompletion]) -> Vec<CalendarCell> {
    let leading = days
        .first()
        .map_or(0, |d| d.date.weekday().num_days_from_sunday() as usize);
    let mut cells = vec![CalendarCell::Blank; leading];
    cells.extend(days.iter().map(|d| CalendarCell::Day {
        date: d.date,
        weekday: d.date.weekday(),
        mark: if d.completed {
            CalendarMark::Completed
        } else {
            CalendarMark::Rest
        },
    }));
    cells
}
