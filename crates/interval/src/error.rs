//! Error types for the sundial-interval crate.

use chrono::NaiveDate;

/// Error type for interval sequence validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum IntervalError {
    /// Returned when an interval ends before it starts.
    #[error("interval {index} ends before it starts ({start} > {end})")]
    InvertedRange {
        /// Position of the interval in the input.
        index: usize,
        /// Start of the interval.
        start: NaiveDate,
        /// End of the interval.
        end: NaiveDate,
    },

    /// Returned when start dates are not ascending.
    #[error("interval {index} starts on {start}, before the previous start {previous_start}")]
    Unsorted {
        /// Position of the offending interval.
        index: usize,
        /// Its start date.
        start: NaiveDate,
        /// Start date of the interval before it.
        previous_start: NaiveDate,
    },

    /// Returned when an interval starts on or before the previous one ends.
    #[error("interval {index} starts on {start}, overlapping the previous interval ending {previous_end}")]
    Overlapping {
        /// Position of the offending interval.
        index: usize,
        /// Its start date.
        start: NaiveDate,
        /// End date of the interval before it.
        previous_end: NaiveDate,
    },
}
