//! Progress and countdown arithmetic over inclusive date ranges.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Share of `[start, end]` elapsed at `at`, as a percentage.
///
/// The range runs from `start` 00:00 (0%) to the midnight that closes `end`
/// (100%), so the whole last day counts. Instants outside the range clamp
/// to 0 or 100.
pub fn progress_percent(start: NaiveDate, end: NaiveDate, at: NaiveDateTime) -> f64 {
    let span_days = (end - start).num_days() + 1;
    if span_days <= 0 {
        return 100.0;
    }
    let elapsed = (at - start.and_time(NaiveTime::MIN)).num_milliseconds();
    if elapsed <= 0 {
        return 0.0;
    }
    let span = span_days * MILLIS_PER_DAY;
    if elapsed >= span {
        return 100.0;
    }
    elapsed as f64 / span as f64 * 100.0
}

/// Whole days from `at` until `end` 00:00, rounded up, never negative.
pub fn days_remaining(end: NaiveDate, at: NaiveDateTime) -> i64 {
    let remaining = (end.and_time(NaiveTime::MIN) - at).num_milliseconds();
    if remaining <= 0 {
        0
    } else {
        (remaining + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
    }
}
