//! Year-independent house definitions.

use serde::{Deserialize, Serialize};
use sundial_calendar::MonthDay;

/// One astronomical house as stored in the dataset.
///
/// `start` is the anchor month-day; the concrete dates for a given year are
/// produced by [`expand_houses`](crate::expand_houses).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HouseDefinition {
    /// Identifier, unique within a table.
    pub id: u32,
    /// Season the house belongs to.
    pub season: String,
    /// Traditional period name.
    pub period: String,
    /// Transliterated period name.
    pub english_period: String,
    /// House name.
    pub house: String,
    /// Transliterated house name.
    pub english_name: String,
    /// Anchor month-day of the first day.
    #[serde(rename = "start_date")]
    pub start: MonthDay,
    /// Length in days in a common year.
    pub duration: u32,
    /// Short description of the weather or custom.
    #[serde(default)]
    pub description: String,
    /// Zodiac signs overlapping the house.
    #[serde(default)]
    pub zodiac_signs: Vec<String>,
    /// The same signs, in Arabic.
    #[serde(default)]
    pub zodiac_signs_ar: Vec<String>,
}
