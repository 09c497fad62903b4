//! Placing a house table into a concrete year.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use sundial_calendar::is_leap_year;
use sundial_interval::DateInterval;
use tracing::debug;

use crate::error::HouseError;
use crate::house::HouseDefinition;
use crate::table::HouseTable;

/// A house with concrete dates for one year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpandedHouse {
    /// The definition this was expanded from.
    pub definition: HouseDefinition,
    /// Length in days for this year, including any leap day.
    pub duration: u32,
    /// First day.
    pub calculated_start: NaiveDate,
    /// Last day (inclusive).
    pub calculated_end: NaiveDate,
}

impl ExpandedHouse {
    /// Identifier of the underlying definition.
    pub fn id(&self) -> u32 {
        self.definition.id
    }

    /// Returns `true` if this house absorbed a leap day.
    pub fn is_extended(&self) -> bool {
        self.duration > self.definition.duration
    }
}

impl DateInterval for ExpandedHouse {
    fn start(&self) -> NaiveDate {
        self.calculated_start
    }

    fn end(&self) -> NaiveDate {
        self.calculated_end
    }
}

/// Expands every house in `table` into `year`, in table order.
///
/// In a leap year the table's leap-absorbing house runs one extra day.
/// Houses starting late in the year run on into `year + 1`.
///
/// # Errors
///
/// Returns [`HouseError::YearOutOfRange`] if a start or end date cannot be
/// represented.
#[tracing::instrument(skip(table), fields(n_houses = table.len()))]
pub fn expand_houses(year: i32, table: &HouseTable) -> Result<Vec<ExpandedHouse>, HouseError> {
    let leap = is_leap_year(year);
    let absorbing = if leap {
        table.leap_absorbing_house()
    } else {
        None
    };
    let houses = table
        .houses()
        .iter()
        .map(|def| expand_one(year, def, absorbing == Some(def.id)))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(leap, ?absorbing, "expanded houses");
    Ok(houses)
}

fn expand_one(
    year: i32,
    def: &HouseDefinition,
    absorbs_leap_day: bool,
) -> Result<ExpandedHouse, HouseError> {
    let out_of_range = || HouseError::YearOutOfRange { year };
    let duration = if absorbs_leap_day {
        def.duration + 1
    } else {
        def.duration
    };
    let calculated_start = def.start.in_year(year).ok_or_else(out_of_range)?;
    let calculated_end = calculated_start
        .checked_add_days(Days::new(u64::from(duration.saturating_sub(1))))
        .ok_or_else(out_of_range)?;
    Ok(ExpandedHouse {
        definition: def.clone(),
        duration,
        calculated_start,
        calculated_end,
    })
}
