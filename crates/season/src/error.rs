//! Error types for the sundial-season crate.

use chrono::NaiveDate;
use sundial_interval::IntervalError;

/// Error type for loading and validating season datasets.
#[derive(Debug, thiserror::Error)]
pub enum SeasonError {
    /// The dataset could not be parsed.
    #[error("failed to parse season dataset: {reason}")]
    Parse {
        /// Parser message.
        reason: String,
    },

    /// A year key is not an integer.
    #[error("invalid year key {key:?} in season dataset")]
    InvalidYearKey {
        /// The offending key.
        key: String,
    },

    /// A season is filed under a year other than the one it starts in.
    #[error("season starting {start} is filed under year {year}")]
    StartOutsideYear {
        /// Year the season was filed under.
        year: i32,
        /// Start date of the season.
        start: NaiveDate,
    },

    /// A year's seasons are not a valid interval sequence.
    #[error("invalid seasons for {year}: {source}")]
    InvalidYear {
        /// Year being validated.
        year: i32,
        /// Underlying validation failure.
        source: IntervalError,
    },

    /// Seasons of consecutive years overlap each other.
    #[error("seasons overlap across years: {source}")]
    InvalidTimeline {
        /// Underlying validation failure.
        source: IntervalError,
    },

    /// An unknown hemisphere name was given.
    #[error("unknown hemisphere {value:?} (expected northern, southern or equator)")]
    UnknownHemisphere {
        /// The offending text.
        value: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_year_key() {
        let err = SeasonError::InvalidYearKey {
            key: "twenty".to_string(),
        };
        assert_eq!(err.to_string(), "invalid year key \"twenty\" in season dataset");
    }

    #[test]
    fn error_start_outside_year() {
        let err = SeasonError::StartOutsideYear {
            year: 2025,
            start: NaiveDate::from_ymd_opt(2024, 12, 21).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "season starting 2024-12-21 is filed under year 2025"
        );
    }

    #[test]
    fn error_unknown_hemisphere() {
        let err = SeasonError::UnknownHemisphere {
            value: "west".to_string(),
        };
        assert!(err.to_string().contains("\"west\""));
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<SeasonError>();
    }
}
