//! Interval datasets filed under calendar years.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::interval::DateInterval;
use crate::sorted::SortedIntervals;

/// Sorted interval sequences keyed by the year they are filed under.
///
/// The last interval of a year may run into January of the next year, so
/// lookups fall back to the previous year's sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct YearlyIntervals<T> {
    years: BTreeMap<i32, SortedIntervals<T>>,
}

impl<T: DateInterval> YearlyIntervals<T> {
    /// Creates an empty dataset.
    pub fn new() -> Self {
        Self {
            years: BTreeMap::new(),
        }
    }

    /// Files `intervals` under `year`, replacing any previous entry.
    pub fn insert(&mut self, year: i32, intervals: SortedIntervals<T>) {
        self.years.insert(year, intervals);
    }

    /// The sequence filed under `year`.
    pub fn get(&self, year: i32) -> Option<&SortedIntervals<T>> {
        self.years.get(&year)
    }

    /// The interval containing `date`.
    ///
    /// Checks the sequence filed under `date`'s own year first, then the
    /// previous year's. Missing years are not an error.
    pub fn active(&self, date: NaiveDate) -> Option<&T> {
        let year = date.year();
        if let Some(hit) = self.get(year).and_then(|s| s.active(date)) {
            return Some(hit);
        }
        let hit = self.get(year - 1).and_then(|s| s.active(date));
        if hit.is_some() {
            debug!(%date, filed_under = year - 1, "resolved from previous year");
        }
        hit
    }

    /// Applies `f` to every interval of every year.
    ///
    /// Same contract as [`SortedIntervals::map`].
    pub fn map<U: DateInterval>(&self, f: impl Fn(&T) -> U) -> YearlyIntervals<U> {
        YearlyIntervals {
            years: self.years.iter().map(|(y, s)| (*y, s.map(&f))).collect(),
        }
    }

    /// All intervals, year by year, each year in start order.
    pub fn iter_all(&self) -> impl Iterator<Item = &T> {
        self.years.values().flat_map(|s| s.iter())
    }
}

impl<T> YearlyIntervals<T> {
    /// Years present, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.keys().copied()
    }

    /// Number of years present.
    pub fn len(&self) -> usize {
        self.years.len()
    }

    /// Returns `true` if no year is present.
    pub fn is_empty(&self) -> bool {
        self.years.is_empty()
    }
}

impl<T: DateInterval> Default for YearlyIntervals<T> {
    fn default() -> Self {
        Self::new()
    }
}
