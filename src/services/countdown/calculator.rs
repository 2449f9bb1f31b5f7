//! Anniversary countdown arithmetic.
//!
//! The target instant is midnight of the anniversary in the observer's own
//! time zone (taken from `now`). Dates that have already passed roll over to
//! the following year once.

use chrono::{DateTime, Duration, TimeZone};

use crate::models::countdown::{
    AnniversaryDate, CountdownError, CountdownStatus, TimeRemaining, DEFAULT_MAX_COUNTDOWN_DAYS,
    MILLIS_PER_DAY,
};
use crate::utils::date::local_midnight;

/// Computes [`TimeRemaining`] values for anniversary strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CountdownCalculator {
    max_days: u32,
}

impl Default for CountdownCalculator {
    fn default() -> Self {
        Self::new()
    }
}

impl CountdownCalculator {
    pub fn new() -> Self {
        Self::with_max_days(DEFAULT_MAX_COUNTDOWN_DAYS)
    }

    /// Use a different sanity bound. Countdowns longer than `max_days` are
    /// reported as [`CountdownError::UnreasonableDate`].
    pub fn with_max_days(max_days: u32) -> Self {
        Self { max_days }
    }

    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    /// Time until the next occurrence of `anniversary` (`YYYY-MM-DD`).
    ///
    /// If the date is at or before `now`, the same day one year later is
    /// used. If that is still not in the future the result is zero.
    pub fn compute<Tz: TimeZone>(
        &self,
        anniversary: &str,
        now: &DateTime<Tz>,
    ) -> Result<TimeRemaining, CountdownError> {
        let date: AnniversaryDate = anniversary.parse()?;
        let invalid = || CountdownError::InvalidDate(anniversary.to_string());
        let tz = now.timezone();

        let target = local_midnight(date.date(), &tz).ok_or_else(invalid)?;
        let mut distance = target.signed_duration_since(now.clone());

        if distance <= Duration::zero() {
            let next_year = date.year().checked_add(1).ok_or_else(invalid)?;
            let next_date = date.in_year(next_year).ok_or_else(invalid)?;
            let next_target = local_midnight(next_date, &tz).ok_or_else(invalid)?;
            distance = next_target.signed_duration_since(now.clone());
        }

        let distance_ms = distance.num_milliseconds();

        // Checked on the magnitude so that dates centuries in the past are
        // flagged as well as ones centuries ahead.
        let magnitude_days = distance_ms.unsigned_abs() / MILLIS_PER_DAY as u64;
        if magnitude_days > u64::from(self.max_days) {
            return Err(CountdownError::UnreasonableDate(anniversary.to_string()));
        }

        Ok(TimeRemaining::from_millis(distance_ms))
    }

    /// Status for an optional anniversary. Missing or blank input means the
    /// countdown has not been set up, which is not an error.
    pub fn status<Tz: TimeZone>(
        &self,
        anniversary: Option<&str>,
        now: &DateTime<Tz>,
    ) -> CountdownStatus {
        match anniversary.map(str::trim).filter(|value| !value.is_empty()) {
            None => CountdownStatus::NotConfigured,
            Some(value) => self.compute(value, now).into(),
        }
    }
}

/// [`CountdownCalculator::compute`] with the default 100-year bound.
pub fn compute_time_remaining<Tz: TimeZone>(
    anniversary: &str,
    now: &DateTime<Tz>,
) -> Result<TimeRemaining, CountdownError> {
    CountdownCalculator::new().compute(anniversary, now)
}
