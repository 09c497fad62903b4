//! Validated, start-ordered interval sequences.

use chrono::NaiveDate;

use crate::error::IntervalError;
use crate::interval::{DateInterval, last_starting_on_or_before};

/// Intervals sorted ascending by start date, with no overlaps.
///
/// Gaps between intervals are allowed; a date in a gap has no active
/// interval.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedIntervals<T> {
    items: Vec<T>,
}

impl<T: DateInterval> SortedIntervals<T> {
    /// Validates and wraps `items`.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError::InvertedRange`] if an interval ends before it
    /// starts, [`IntervalError::Unsorted`] if starts are not ascending, and
    /// [`IntervalError::Overlapping`] if an interval starts on or before the
    /// previous one ends.
    pub fn new(items: Vec<T>) -> Result<Self, IntervalError> {
        for (index, item) in items.iter().enumerate() {
            if item.end() < item.start() {
                return Err(IntervalError::InvertedRange {
                    index,
                    start: item.start(),
                    end: item.end(),
                });
            }
            if index == 0 {
                continue;
            }
            let prev = &items[index - 1];
            if item.start() < prev.start() {
                return Err(IntervalError::Unsorted {
                    index,
                    start: item.start(),
                    previous_start: prev.start(),
                });
            }
            if item.start() <= prev.end() {
                return Err(IntervalError::Overlapping {
                    index,
                    start: item.start(),
                    previous_end: prev.end(),
                });
            }
        }
        Ok(Self { items })
    }

    /// The interval containing `date`, if any.
    pub fn active(&self, date: NaiveDate) -> Option<&T> {
        let after = self.items.partition_point(|i| i.start() <= date);
        let candidate = self.items[..after].last()?;
        candidate.contains(date).then_some(candidate)
    }

    /// The interval with the greatest start on or before `date`.
    ///
    /// Dates before the first start resolve to the first interval. Returns
    /// `None` only when the sequence is empty.
    pub fn last_starting_on_or_before(&self, date: NaiveDate) -> Option<&T> {
        last_starting_on_or_before(&self.items, date)
    }

    /// Applies `f` to every interval, keeping the order.
    ///
    /// `f` must not move the date range; it exists for relabeling.
    pub fn map<U: DateInterval>(&self, f: impl Fn(&T) -> U) -> SortedIntervals<U> {
        let items: Vec<U> = self
            .items
            .iter()
            .map(|item| {
                let mapped = f(item);
                debug_assert!(mapped.start() == item.start() && mapped.end() == item.end());
                mapped
            })
            .collect();
        SortedIntervals { items }
    }
}

impl<T> SortedIntervals<T> {
    /// Number of intervals.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if there are no intervals.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates in start order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Borrows the intervals as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Consumes the sequence and returns the intervals.
    pub fn into_inner(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for SortedIntervals<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<'a, T> IntoIterator for &'a SortedIntervals<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
