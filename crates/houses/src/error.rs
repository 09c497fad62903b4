//! Error types for the sundial-houses crate.

/// Error type for house table loading and expansion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HouseError {
    /// The dataset could not be parsed.
    #[error("failed to parse house dataset: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },

    /// The table has no houses.
    #[error("house table is empty")]
    Empty,

    /// Two houses share an id.
    #[error("duplicate house id {id}")]
    DuplicateId {
        /// The repeated id.
        id: u32,
    },

    /// A house has a zero duration.
    #[error("house {id} has invalid duration {duration} (must be >= 1)")]
    InvalidDuration {
        /// House id.
        id: u32,
        /// Declared duration.
        duration: u32,
    },

    /// The leap-absorbing house id does not name a house in the table.
    #[error("leap-absorbing house {id} is not in the table")]
    UnknownLeapHouse {
        /// The requested id.
        id: u32,
    },

    /// The year cannot be represented as a calendar date.
    #[error("year {year} is outside the supported date range")]
    YearOutOfRange {
        /// The offending year.
        year: i32,
    },
}
