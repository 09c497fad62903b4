//! Progress through the calendar year.

use chrono::{Datelike, NaiveDateTime, Timelike};
use serde::Serialize;

use crate::gregorian::days_in_year;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// How far an instant is into its calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct YearProgress {
    /// Calendar year of the instant.
    pub year: i32,
    /// Whole days elapsed since January 1.
    pub days_passed: u16,
    /// Length of the year in days.
    pub total_days: u16,
    /// Elapsed share of the year, 0..=100.
    pub percent: f64,
}

impl YearProgress {
    /// Days left after today (`total_days - days_passed`).
    pub fn days_remaining(&self) -> u16 {
        self.total_days - self.days_passed
    }
}

/// Computes year progress for `at`.
pub fn year_progress(at: NaiveDateTime) -> YearProgress {
    let year = at.year();
    let total_days = days_in_year(year);
    let days_passed = at.ordinal0() as u16;
    let elapsed = f64::from(days_passed) * SECONDS_PER_DAY
        + f64::from(at.num_seconds_from_midnight());
    let percent = (elapsed / (f64::from(total_days) * SECONDS_PER_DAY) * 100.0).clamp(0.0, 100.0);
    YearProgress {
        year,
        days_passed,
        total_days,
        percent,
    }
}
