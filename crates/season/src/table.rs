//! Season datasets and hemisphere-specific views of them.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};
use sundial_interval::{SortedIntervals, YearlyIntervals};
use tracing::debug;

use crate::error::SeasonError;
use crate::hemisphere::Hemisphere;
use crate::season::{Season, SeasonName};

/// Either `{"years": {...}}` or the per-hemisphere layout
/// `{"northern-hemisphere": {...}, "southern-hemisphere": {...}}`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SeasonFile {
    Years(YearsFile),
    ByHemisphere(HemisphereFile),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct YearsFile {
    years: BTreeMap<String, Vec<Season>>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct HemisphereFile {
    #[serde(rename = "northern-hemisphere")]
    northern: BTreeMap<String, Vec<Season>>,
    /// Derived by relabeling the northern block, so only its presence is
    /// accepted.
    #[serde(rename = "southern-hemisphere", default)]
    southern: Option<IgnoredAny>,
}

impl SeasonFile {
    fn into_years(self) -> BTreeMap<String, Vec<Season>> {
        match self {
            Self::Years(f) => f.years,
            Self::ByHemisphere(f) => {
                if f.southern.is_some() {
                    debug!("ignoring southern-hemisphere block, relabeling northern dates");
                }
                f.northern
            }
        }
    }
}

/// Seasons for a range of years, named in the northern convention.
///
/// Each year holds the seasons that start in it; the last one usually runs
/// into the next year.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonTable {
    years: YearlyIntervals<Season>,
    timeline: SortedIntervals<Season>,
}

impl SeasonTable {
    /// Builds a table from seasons grouped by year.
    ///
    /// # Errors
    ///
    /// Returns [`SeasonError::StartOutsideYear`] if a season starts outside
    /// the year it is filed under, [`SeasonError::InvalidYear`] if a year's
    /// seasons are unsorted or overlap, and [`SeasonError::InvalidTimeline`]
    /// if consecutive years overlap.
    pub fn new(by_year: BTreeMap<i32, Vec<Season>>) -> Result<Self, SeasonError> {
        let mut years = YearlyIntervals::new();
        for (year, seasons) in by_year {
            if let Some(bad) = seasons.iter().find(|s| s.start.year() != year) {
                return Err(SeasonError::StartOutsideYear {
                    year,
                    start: bad.start,
                });
            }
            let sorted = SortedIntervals::new(seasons)
                .map_err(|source| SeasonError::InvalidYear { year, source })?;
            years.insert(year, sorted);
        }
        let timeline = SortedIntervals::new(years.iter_all().cloned().collect())
            .map_err(|source| SeasonError::InvalidTimeline { source })?;
        debug!(
            n_years = years.len(),
            n_seasons = timeline.len(),
            "season table loaded"
        );
        Ok(Self { years, timeline })
    }

    /// Parses a JSON dataset of the form `{"years": {"2024": [...]}}`.
    ///
    /// The per-hemisphere layout keyed by `"northern-hemisphere"` is also
    /// accepted; its northern block is used and any southern block is
    /// skipped, since [`SeasonTable::for_hemisphere`] derives it.
    ///
    /// # Errors
    ///
    /// Returns [`SeasonError::Parse`] for malformed JSON,
    /// [`SeasonError::InvalidYearKey`] for non-integer year keys, and any
    /// error from [`SeasonTable::new`].
    pub fn from_json(json: &str) -> Result<Self, SeasonError> {
        let file: SeasonFile = serde_json::from_str(json).map_err(|e| SeasonError::Parse {
            reason: e.to_string(),
        })?;
        let mut by_year = BTreeMap::new();
        for (key, seasons) in file.into_years() {
            let year = key
                .trim()
                .parse::<i32>()
                .map_err(|_| SeasonError::InvalidYearKey { key: key.clone() })?;
            by_year.insert(year, seasons);
        }
        Self::new(by_year)
    }

    /// Years present, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.years.years()
    }

    /// Seasons filed under `year`, northern names.
    pub fn seasons_of(&self, year: i32) -> Option<&[Season]> {
        self.years.get(year).map(|s| s.as_slice())
    }

    /// Relabels every season for `hemisphere`.
    pub fn for_hemisphere(&self, hemisphere: Hemisphere) -> SeasonCalendar {
        let relabel = |s: &Season| s.relabeled(hemisphere);
        SeasonCalendar {
            hemisphere,
            years: self.years.map(relabel),
            timeline: self.timeline.map(relabel),
        }
    }
}

/// A season start shown as a badge on its first day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeasonStart {
    /// Local season name.
    pub season: SeasonName,
    /// Badge text, e.g. `"Summer Starts"`.
    pub title: String,
}

/// Seasons named for one hemisphere.
#[derive(Debug, Clone, PartialEq)]
pub struct SeasonCalendar {
    hemisphere: Hemisphere,
    years: YearlyIntervals<Season>,
    timeline: SortedIntervals<Season>,
}

impl SeasonCalendar {
    /// Hemisphere whose names this calendar uses.
    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// The season containing `date`.
    ///
    /// Looks in `date`'s own year, then in the previous year for a season
    /// that started in December. `None` if the dataset has no such season.
    pub fn active_season(&self, date: NaiveDate) -> Option<&Season> {
        self.years.active(date)
    }

    /// The season that most recently started on or before `date`.
    ///
    /// Dates before the dataset begins get its first season. `None` only
    /// for an empty dataset.
    pub fn season_as_of(&self, date: NaiveDate) -> Option<&Season> {
        self.timeline.last_starting_on_or_before(date)
    }

    /// Badge for every season start, keyed by start date.
    pub fn season_starts(&self) -> BTreeMap<NaiveDate, SeasonStart> {
        self.timeline
            .iter()
            .map(|s| {
                let start = SeasonStart {
                    season: s.name,
                    title: format!("{} Starts", s.name.title()),
                };
                (s.start, start)
            })
            .collect()
    }

    /// All seasons in chronological order.
    pub fn seasons(&self) -> &[Season] {
        self.timeline.as_slice()
    }
}
