//! Validated house tables.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::HouseError;
use crate::house::HouseDefinition;

/// Days in a common year.
const COMMON_YEAR_DAYS: u32 = 365;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HouseFile {
    #[serde(default)]
    leap_absorbing_house: Option<u32>,
    houses: Vec<HouseDefinition>,
}

/// An ordered cycle of houses covering one year.
///
/// Table order is the order houses are expanded and searched in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HouseTable {
    houses: Vec<HouseDefinition>,
    leap_absorbing_house: Option<u32>,
}

impl HouseTable {
    /// Validates and wraps a list of houses.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::Empty`] for no houses,
    /// [`HouseError::DuplicateId`] and [`HouseError::InvalidDuration`] for
    /// bad entries, and [`HouseError::UnknownLeapHouse`] if the
    /// leap-absorbing id is not in the table.
    ///
    /// Durations are taken as declared. A cycle that does not add up to a
    /// common year is logged and accepted; neighbouring houses then overlap
    /// or leave gaps, and lookups return the first match in table order.
    pub fn new(
        houses: Vec<HouseDefinition>,
        leap_absorbing_house: Option<u32>,
    ) -> Result<Self, HouseError> {
        if houses.is_empty() {
            return Err(HouseError::Empty);
        }
        let mut seen = HashSet::with_capacity(houses.len());
        let mut total: u32 = 0;
        for h in &houses {
            if !seen.insert(h.id) {
                return Err(HouseError::DuplicateId { id: h.id });
            }
            if h.duration == 0 {
                return Err(HouseError::InvalidDuration {
                    id: h.id,
                    duration: h.duration,
                });
            }
            total = total.saturating_add(h.duration);
        }
        if total != COMMON_YEAR_DAYS {
            warn!(total, "house durations do not add up to a common year");
        }
        if let Some(id) = leap_absorbing_house {
            if !seen.contains(&id) {
                return Err(HouseError::UnknownLeapHouse { id });
            }
        }
        debug!(
            n_houses = houses.len(),
            ?leap_absorbing_house,
            "house table loaded"
        );
        Ok(Self {
            houses,
            leap_absorbing_house,
        })
    }

    /// Parses a JSON dataset of the form
    /// `{"leap_absorbing_house": 7, "houses": [...]}`.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::Parse`] for malformed JSON and any error from
    /// [`HouseTable::new`].
    pub fn from_json(json: &str) -> Result<Self, HouseError> {
        let file: HouseFile = serde_json::from_str(json).map_err(|e| HouseError::Parse {
            reason: e.to_string(),
        })?;
        Self::new(file.houses, file.leap_absorbing_house)
    }

    /// Replaces the leap-absorbing house.
    ///
    /// # Errors
    ///
    /// Returns [`HouseError::UnknownLeapHouse`] if `id` is not in the table.
    pub fn with_leap_absorbing_house(mut self, id: Option<u32>) -> Result<Self, HouseError> {
        if let Some(id) = id {
            if self.get(id).is_none() {
                return Err(HouseError::UnknownLeapHouse { id });
            }
        }
        self.leap_absorbing_house = id;
        Ok(self)
    }

    /// Houses in table order.
    pub fn houses(&self) -> &[HouseDefinition] {
        &self.houses
    }

    /// Id of the house that gains a day in leap years, if any.
    pub fn leap_absorbing_house(&self) -> Option<u32> {
        self.leap_absorbing_house
    }

    /// Looks up a house by id.
    pub fn get(&self, id: u32) -> Option<&HouseDefinition> {
        self.houses.iter().find(|h| h.id == id)
    }

    /// Number of houses.
    pub fn len(&self) -> usize {
        self.houses.len()
    }

    /// Always `false` for a validated table.
    pub fn is_empty(&self) -> bool {
        self.houses.is_empty()
    }
}
