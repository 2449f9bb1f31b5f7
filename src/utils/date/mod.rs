// Date utility functions

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone};

/// Midnight at the start of `date` in the time zone `tz`.
///
/// An ambiguous midnight (clocks going back) resolves to the earlier instant.
/// When midnight does not exist (clocks jumping forward at 00:00) the first
/// existing minute of the day is used instead. Returns `None` only when the
/// whole day cannot be represented.
pub fn local_midnight<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> Option<DateTime<Tz>> {
    let midnight = date.and_time(NaiveTime::MIN);

    // DST gaps are at most a couple of hours; probe minute by minute.
    for offset_minutes in 0..=180 {
        let candidate = midnight + Duration::minutes(offset_minutes);
        if candidate.date() != date {
            break;
        }
        match tz.from_local_datetime(&candidate) {
            LocalResult::Single(instant) => return Some(instant),
            LocalResult::Ambiguous(earliest, _) => return Some(earliest),
            LocalResult::None => continue,
        }
    }

    None
}
