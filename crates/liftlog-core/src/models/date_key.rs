// ABOUTME: Timezone-naive calendar date key in YYYY-MM-DD form
// ABOUTME: Sole grouping identity for nutrition entries and workout completions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::limits::DATE_KEY_LEN;
use crate::errors::{ValidationError, ValidationResult};
use chrono::{Datelike, Days, Local, NaiveDate, Weekday};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Calendar-day identifier with no time or timezone component
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    /// Parse a strict `YYYY-MM-DD` key
    ///
    /// # Errors
    ///
    /// Returns `InvalidDateKey` unless the input is exactly ten characters,
    /// zero padded, and names a real calendar day
    pub fn parse(value: &str) -> ValidationResult<Self> {
        let invalid = || ValidationError::InvalidDateKey {
            value: value.to_owned(),
        };
        let bytes = value.as_bytes();
        if value.len() != DATE_KEY_LEN || bytes[4] != b'-' || bytes[7] != b'-' {
            return Err(invalid());
        }
        let digits_only = bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
        if !digits_only {
            return Err(invalid());
        }
        NaiveDate::parse_from_str(value, DATE_KEY_FORMAT)
            .map(Self)
            .map_err(|_| invalid())
    }

    /// Today's key from the local wall clock, evaluated at call time
    #[must_use]
    pub fn today() -> Self {
        Self(Local::now().date_naive())
    }

    /// Wrap an existing calendar date
    #[must_use]
    pub const fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Underlying calendar date
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.0
    }

    /// Following calendar day (saturates at the end of the supported range)
    #[must_use]
    pub fn succ(&self) -> Self {
        self.0.succ_opt().map_or(*self, Self)
    }

    /// Preceding calendar day (saturates at the start of the supported range)
    #[must_use]
    pub fn pred(&self) -> Self {
        self.0.pred_opt().map_or(*self, Self)
    }

    /// Key `days` before this one
    #[must_use]
    pub fn minus_days(&self, days: u32) -> Self {
        self.0
            .checked_sub_days(Days::new(u64::from(days)))
            .map_or(*self, Self)
    }

    /// Day of the week
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Whole days from `self` to `other` (negative if `other` is earlier)
    #[must_use]
    pub fn days_until(&self, other: Self) -> i64 {
        (other.0 - self.0).num_days()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_KEY_FORMAT))
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for DateKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(D::Error::custom)
    }
}

/// Inclusive range of date keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    start: DateKey,
    end: DateKey,
}

impl DateRange {
    /// Create a range covering `start..=end`
    ///
    /// # Errors
    ///
    /// Returns `InvalidRange` when `start` is after `end`
    pub fn new(start: DateKey, end: DateKey) -> ValidationResult<Self> {
        if start > end {
            return Err(ValidationError::InvalidRange {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    /// Range containing a single day
    #[must_use]
    pub const fn single(day: DateKey) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// The `days`-long window ending at (and including) `end`
    #[must_use]
    pub fn ending_at(end: DateKey, days: u32) -> Self {
        Self {
            start: end.minus_days(days.saturating_sub(1)),
            end,
        }
    }

    /// First day in the range
    #[must_use]
    pub const fn start(&self) -> DateKey {
        self.start
    }

    /// Last day in the range
    #[must_use]
    pub const fn end(&self) -> DateKey {
        self.end
    }

    /// Whether `day` falls inside the range
    #[must_use]
    pub fn contains(&self, day: DateKey) -> bool {
        self.start <= day && day <= self.end
    }

    /// Every day in the range, oldest first
    pub fn days(&self) -> impl Iterator<Item = DateKey> {
        let end = self.end;
        self.start
            .date()
            .iter_days()
            .map(DateKey::from_date)
            .take_while(move |day| *day <= end)
    }
}
