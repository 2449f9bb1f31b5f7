// Countdown value objects: the parsed anniversary, the remaining time
// breakdown and the status a caller renders.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const MILLIS_PER_MINUTE: i64 = 60_000;
pub const MILLIS_PER_HOUR: i64 = 3_600_000;
pub const MILLIS_PER_DAY: i64 = 86_400_000;

/// Default sanity bound on a countdown, roughly 100 years.
pub const DEFAULT_MAX_COUNTDOWN_DAYS: u32 = 36_500;

/// Why an anniversary string could not be turned into a countdown.
///
/// Every variant is user-facing and recoverable; the caller shows a notice
/// and asks the user to fix the configured date.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum CountdownError {
    #[error("'{0}' is not in YYYY-MM-DD format")]
    InvalidFormat(String),
    #[error("'{0}' is not a valid calendar date")]
    InvalidDate(String),
    #[error("'{0}' is too far from today to count down to")]
    UnreasonableDate(String),
}

/// A calendar date with no time or zone component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AnniversaryDate(NaiveDate);

impl AnniversaryDate {
    /// Build a validated date. Out-of-range months or days are rejected
    /// rather than rolled into the next month or year.
    pub fn new(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// The same month and day in another year.
    ///
    /// A 29 February anniversary falls on 1 March in common years.
    pub fn in_year(&self, year: i32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(year, self.month(), self.day()).or_else(|| {
            if self.month() == 2 && self.day() == 29 {
                NaiveDate::from_ymd_opt(year, 3, 1)
            } else {
                None
            }
        })
    }
}

impl From<NaiveDate> for AnniversaryDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl FromStr for AnniversaryDate {
    type Err = CountdownError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let trimmed = input.trim();
        let parts: Vec<&str> = trimmed.split('-').collect();
        if parts.len() != 3 {
            return Err(CountdownError::InvalidFormat(input.to_string()));
        }

        let mut numbers = [0i64; 3];
        for (slot, part) in numbers.iter_mut().zip(&parts) {
            *slot = part
                .parse::<i64>()
                .map_err(|_| CountdownError::InvalidFormat(input.to_string()))?;
        }

        let invalid = || CountdownError::InvalidDate(input.to_string());
        let year = i32::try_from(numbers[0]).map_err(|_| invalid())?;
        let month = u32::try_from(numbers[1]).map_err(|_| invalid())?;
        let day = u32::try_from(numbers[2]).map_err(|_| invalid())?;

        AnniversaryDate::new(year, month, day).ok_or_else(invalid)
    }
}

impl fmt::Display for AnniversaryDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Days/hours/minutes/seconds until a target instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimeRemaining {
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl TimeRemaining {
    pub const ZERO: TimeRemaining = TimeRemaining {
        days: 0,
        hours: 0,
        minutes: 0,
        seconds: 0,
    };

    /// Floor-decompose a positive millisecond distance. Non-positive input
    /// gives `ZERO`.
    pub fn from_millis(distance_ms: i64) -> Self {
        if distance_ms <= 0 {
            return Self::ZERO;
        }

        let days = distance_ms / MILLIS_PER_DAY;
        Self {
            days: u32::try_from(days).unwrap_or(u32::MAX),
            hours: ((distance_ms % MILLIS_PER_DAY) / MILLIS_PER_HOUR) as u32,
            minutes: ((distance_ms % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE) as u32,
            seconds: ((distance_ms % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND) as u32,
        }
    }

    pub fn total_seconds(&self) -> i64 {
        i64::from(self.days) * 86_400
            + i64::from(self.hours) * 3_600
            + i64::from(self.minutes) * 60
            + i64::from(self.seconds)
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }
}

impl fmt::Display for TimeRemaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}d {:02}h {:02}m {:02}s",
            self.days, self.hours, self.minutes, self.seconds
        )
    }
}

/// What a countdown display should show right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CountdownStatus {
    /// No anniversary has been set; prompt the user to add one.
    NotConfigured,
    Counting(TimeRemaining),
    Invalid(CountdownError),
}

impl CountdownStatus {
    pub fn remaining(&self) -> Option<TimeRemaining> {
        match self {
            CountdownStatus::Counting(remaining) => Some(*remaining),
            _ => None,
        }
    }
}

impl From<Result<TimeRemaining, CountdownError>> for CountdownStatus {
    fn from(result: Result<TimeRemaining, CountdownError>) -> Self {
        match result {
            Ok(remaining) => CountdownStatus::Counting(remaining),
            Err(err) => CountdownStatus::Invalid(err),
        }
    }
}
