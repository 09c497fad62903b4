//! Error types for the sundial-calendar crate.

/// Error type for all fallible operations in the sundial-calendar crate.
///
/// Grid construction itself never fails; these variants cover validation of
/// month/day values supplied from outside, such as `MM-DD` anchors in a
/// dataset.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum CalendarError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number exceeds the number of days in the given month.
    #[error("invalid day: {day} for month {month} (max {max_day})")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
        /// The month for which the day is invalid.
        month: u8,
        /// The maximum valid day for the given month.
        max_day: u8,
    },

    /// Returned when a month-day string is not of the form `MM-DD`.
    #[error("invalid month-day {input:?} (expected MM-DD)")]
    InvalidMonthDay {
        /// The text that failed to parse.
        input: String,
    },
}
