//! Season names and season intervals.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sundial_interval::DateInterval;

use crate::hemisphere::Hemisphere;

/// One of the four temperate seasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeasonName {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl SeasonName {
    /// All seasons in northern calendar order.
    pub const ALL: [SeasonName; 4] = [Self::Spring, Self::Summer, Self::Autumn, Self::Winter];

    /// The season with the same dates in the other hemisphere.
    pub fn opposite(self) -> Self {
        match self {
            Self::Spring => Self::Autumn,
            Self::Summer => Self::Winter,
            Self::Autumn => Self::Spring,
            Self::Winter => Self::Summer,
        }
    }

    /// Lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "spring",
            Self::Summer => "summer",
            Self::Autumn => "autumn",
            Self::Winter => "winter",
        }
    }

    /// Capitalised name for display.
    pub fn title(self) -> &'static str {
        match self {
            Self::Spring => "Spring",
            Self::Summer => "Summer",
            Self::Autumn => "Autumn",
            Self::Winter => "Winter",
        }
    }
}

impl fmt::Display for SeasonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named season with inclusive start and end dates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    /// Season name.
    pub name: SeasonName,
    /// First day.
    #[serde(rename = "start_date", alias = "startDate")]
    pub start: NaiveDate,
    /// Last day (inclusive).
    #[serde(rename = "end_date", alias = "endDate")]
    pub end: NaiveDate,
}

impl Season {
    /// Same dates, named for `hemisphere`.
    pub fn relabeled(&self, hemisphere: Hemisphere) -> Self {
        Self {
            name: hemisphere.relabel(self.name),
            start: self.start,
            end: self.end,
        }
    }
}

impl DateInterval for Season {
    fn start(&self) -> NaiveDate {
        self.start
    }

    fn end(&self) -> NaiveDate {
        self.end
    }
}
