//! Pure conversion functions: config and CLI values -> engine inputs.

use std::path::Path;

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::{debug, info};

use sundial_houses::HouseTable;
use sundial_season::{Hemisphere, SeasonTable};

use crate::cli::LocationArgs;
use crate::config::{HousesToml, LocationToml, SundialConfig};

const BUNDLED_SEASONS: &str = include_str!("../data/seasons.json");
const BUNDLED_HOUSES: &str = include_str!("../data/manazil.json");

/// Classifies a latitude by its sign.
pub fn hemisphere_from_latitude(latitude: f64) -> Result<Hemisphere> {
    if latitude.is_nan() {
        bail!("latitude must be a number, got NaN");
    }
    if !(-90.0..=90.0).contains(&latitude) {
        bail!("latitude {latitude} is outside -90..=90");
    }
    Ok(if latitude > 0.0 {
        Hemisphere::Northern
    } else if latitude < 0.0 {
        Hemisphere::Southern
    } else {
        Hemisphere::Equator
    })
}

/// Picks the hemisphere from CLI flags, then config, then the default.
///
/// At each level an explicit hemisphere beats a latitude.
pub fn resolve_hemisphere(args: &LocationArgs, config: &LocationToml) -> Result<Hemisphere> {
    if let Some(h) = args.hemisphere {
        return Ok(h);
    }
    if let Some(lat) = args.latitude {
        return hemisphere_from_latitude(lat);
    }
    if let Some(h) = config.hemisphere {
        return Ok(h);
    }
    if let Some(lat) = config.latitude {
        return hemisphere_from_latitude(lat).context("invalid [location].latitude in config");
    }
    debug!("no location given, assuming northern hemisphere");
    Ok(Hemisphere::default())
}

fn read_dataset(path: &Path) -> Result<String> {
    info!(path = %path.display(), "reading dataset");
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset: {}", path.display()))
}

/// Loads the season dataset named in config, or the bundled one.
pub fn load_seasons(config: &SundialConfig) -> Result<SeasonTable> {
    match &config.data.seasons {
        Some(path) => {
            let json = read_dataset(path)?;
            SeasonTable::from_json(&json)
                .with_context(|| format!("invalid season dataset: {}", path.display()))
        }
        None => SeasonTable::from_json(BUNDLED_SEASONS).context("invalid bundled season dataset"),
    }
}

/// Loads the house dataset named in config, or the bundled one, and applies
/// any leap-absorbing house override.
pub fn load_houses(config: &SundialConfig) -> Result<HouseTable> {
    let table = match &config.data.houses {
        Some(path) => {
            let json = read_dataset(path)?;
            HouseTable::from_json(&json)
                .with_context(|| format!("invalid house dataset: {}", path.display()))?
        }
        None => HouseTable::from_json(BUNDLED_HOUSES).context("invalid bundled house dataset")?,
    };
    apply_house_overrides(table, &config.houses)
}

fn apply_house_overrides(table: HouseTable, houses: &HousesToml) -> Result<HouseTable> {
    match houses.leap_absorbing_house {
        Some(id) => table
            .with_leap_absorbing_house(Some(id))
            .context("invalid [houses].leap_absorbing_house in config"),
        None => Ok(table),
    }
}

/// The instant to evaluate at: midnight of `date`, or the local clock.
pub fn resolve_instant(date: Option<NaiveDate>) -> NaiveDateTime {
    match date {
        Some(d) => d.and_time(NaiveTime::MIN),
        None => Local::now().naive_local(),
    }
}
