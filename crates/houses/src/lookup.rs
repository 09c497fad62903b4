//! Finding the house for a date.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use sundial_interval::{DateInterval, find_containing};
use tracing::debug;

use crate::error::HouseError;
use crate::expand::{ExpandedHouse, expand_houses};
use crate::table::HouseTable;

/// Returns the house containing `date`.
///
/// Expands the table for the previous, current and next year, in that
/// order, and returns the first house that contains `date`. A house that
/// starts in December and ends in February is found through the previous
/// year's expansion. `None` only if the table leaves `date` uncovered.
///
/// # Errors
///
/// Returns [`HouseError::YearOutOfRange`] if `date`'s own year cannot be
/// expanded. Neighbouring years past the representable range are skipped.
pub fn house_for_date(
    date: NaiveDate,
    table: &HouseTable,
) -> Result<Option<ExpandedHouse>, HouseError> {
    let year = date.year();
    for candidate in [year - 1, year, year + 1] {
        let houses = match expand_houses(candidate, table) {
            Ok(houses) => houses,
            Err(HouseError::YearOutOfRange { .. }) if candidate != year => {
                debug!(candidate, "skipping unrepresentable year");
                continue;
            }
            Err(e) => return Err(e),
        };
        if let Some(hit) = find_containing(&houses, date) {
            debug!(%date, candidate, id = hit.id(), "house found");
            return Ok(Some(hit.clone()));
        }
    }
    Ok(None)
}

/// Share of `house` elapsed at `at`, 0..=100.
///
/// Runs from the first day at 00:00 to the midnight after the last day,
/// clamped outside that range.
pub fn house_progress(at: NaiveDateTime, house: &ExpandedHouse) -> f64 {
    house.progress_at(at)
}
