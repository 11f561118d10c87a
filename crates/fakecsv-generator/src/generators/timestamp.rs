//! Date and time value generators.

use chrono::{Days, NaiveDate, NaiveTime};
use fakecsv_core::Value;
use rand::Rng;

/// Earliest generated date.
pub const DATE_START: (i32, u32, u32) = (1970, 1, 1);

/// Latest generated date.
pub const DATE_END: (i32, u32, u32) = (2025, 12, 31);

/// Generate a random `YYYY-MM-DD` date in `[DATE_START, DATE_END]`.
pub fn generate_date<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let (Some(start), Some(end)) = (
        NaiveDate::from_ymd_opt(DATE_START.0, DATE_START.1, DATE_START.2),
        NaiveDate::from_ymd_opt(DATE_END.0, DATE_END.1, DATE_END.2),
    ) else {
        return Value::Null;
    };
    Value::Text(generate_date_range(rng, start, end).format("%Y-%m-%d").to_string())
}

/// Generate a random date in the given range (inclusive).
pub fn generate_date_range<R: Rng + ?Sized>(rng: &mut R, start: NaiveDate, end: NaiveDate) -> NaiveDate {
    if start >= end {
        return start;
    }
    let span = (end - start).num_days() as u64;
    let offset = rng.random_range(0..=span);
    start.checked_add_days(Days::new(offset)).unwrap_or(start)
}

/// Generate a random `HH:MM:SS` time of day.
pub fn generate_time<R: Rng + ?Sized>(rng: &mut R) -> Value {
    let secs = rng.random_range(0..86_400u32);
    let time = NaiveTime::from_num_seconds_from_midnight_opt(secs, 0).unwrap_or_default();
    Value::Text(time.format("%H:%M:%S").to_string())
}
