//! Proleptic Gregorian arithmetic.
//!
//! Everything here is total over `i32` years: no date library range limits
//! apply, so year grids can be built for any year.

use crate::error::CalendarError;

/// Number of days in each month of a common year (index 0 = January).
pub(crate) const COMMON_MONTH_LENGTHS: [u8; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Month offsets for Sakamoto's day-of-week method (index 0 = January).
const WEEKDAY_OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];

/// Returns `true` if `year` is a Gregorian leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Returns the number of days in `year`.
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Returns the number of days in a month.
///
/// `month` is 1-based (1 = January).
///
/// # Errors
///
/// Returns [`CalendarError::InvalidMonth`] if `month` is not in 1..=12.
pub fn days_in_month(year: i32, month: u8) -> Result<u8, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth { month });
    }
    Ok(month_length(year, usize::from(month - 1)))
}

/// Month length for a 0-based month index that is already known to be valid.
pub(crate) fn month_length(year: i32, month0: usize) -> u8 {
    if month0 == 1 && is_leap_year(year) {
        29
    } else {
        COMMON_MONTH_LENGTHS[month0]
    }
}

/// Day of week of a date, 0 = Sunday through 6 = Saturday.
///
/// `month0` is 0-based. Uses floor division so negative years follow the
/// proleptic calendar instead of wrapping.
pub(crate) fn weekday_from_sunday(year: i32, month0: usize, day: u8) -> u8 {
    let y = if month0 < 2 {
        i64::from(year) - 1
    } else {
        i64::from(year)
    };
    let raw = y + y.div_euclid(4) - y.div_euclid(100)
        + y.div_euclid(400)
        + WEEKDAY_OFFSETS[month0]
        + i64::from(day);
    raw.rem_euclid(7) as u8
}

/// Day of week of January 1 of `year`, 0 = Sunday through 6 = Saturday.
pub fn start_weekday(year: i32) -> u8 {
    weekday_from_sunday(year, 0, 1)
}
