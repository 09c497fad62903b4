//! The interval capability shared by seasons and houses.

use chrono::{NaiveDate, NaiveDateTime};

use crate::progress::progress_percent;

/// A value occupying an inclusive range of calendar dates.
pub trait DateInterval {
    /// First day of the interval.
    fn start(&self) -> NaiveDate;

    /// Last day of the interval (inclusive).
    fn end(&self) -> NaiveDate;

    /// Returns `true` if `date` falls within `[start, end]`.
    fn contains(&self, date: NaiveDate) -> bool {
        self.start() <= date && date <= self.end()
    }

    /// Number of days covered, counting both ends.
    fn duration_days(&self) -> i64 {
        (self.end() - self.start()).num_days() + 1
    }

    /// Share of the interval elapsed at `at`, 0..=100.
    ///
    /// See [`progress_percent`].
    fn progress_at(&self, at: NaiveDateTime) -> f64 {
        progress_percent(self.start(), self.end(), at)
    }
}

impl<T: DateInterval + ?Sized> DateInterval for &T {
    fn start(&self) -> NaiveDate {
        (**self).start()
    }

    fn end(&self) -> NaiveDate {
        (**self).end()
    }
}

/// Returns the first interval in `items` that contains `date`.
///
/// No ordering is required; this is a plain linear scan.
pub fn find_containing<T: DateInterval>(items: &[T], date: NaiveDate) -> Option<&T> {
    items.iter().find(|i| i.contains(date))
}

/// Returns the interval with the greatest start on or before `date`.
///
/// `items` must be sorted ascending by start. The scan stops at the first
/// start after `date`. If even the first interval starts after `date`, the
/// first interval is returned so that early dates still get a label.
/// Returns `None` only for an empty slice.
pub fn last_starting_on_or_before<T: DateInterval>(items: &[T], date: NaiveDate) -> Option<&T> {
    debug_assert!(
        items.windows(2).all(|w| w[0].start() <= w[1].start()),
        "intervals must be sorted by start date"
    );
    let mut found = items.first()?;
    for item in items {
        if item.start() <= date {
            found = item;
        } else {
            break;
        }
    }
    Some(found)
}
