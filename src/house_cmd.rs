//! House commands: the active house, and a year's house calendar.

use anyhow::{Context, Result, bail};
use chrono::{Datelike, NaiveDateTime};
use serde::Serialize;
use tracing::{info, info_span};

use sundial_houses::{ExpandedHouse, HouseTable, expand_houses, house_for_date, house_progress};
use sundial_interval::days_remaining;

use crate::cli::{HouseArgs, HousesArgs};
use crate::config::SundialConfig;
use crate::convert;

/// Run the house command.
pub fn run_house(args: HouseArgs, config: &SundialConfig) -> Result<()> {
    let _cmd = info_span!("house").entered();
    let at = convert::resolve_instant(args.date);
    let table = convert::load_houses(config)?;

    let report = HouseReport::at(&table, at)?;
    let house = &report.house;
    info!(id = house.id(), name = %house.definition.english_name, "house resolved");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        let def = &house.definition;
        println!("{}. {} ({})", def.id, def.english_name, def.house);
        println!("   {} / {}, {}", def.english_period, def.period, def.season);
        println!(
            "   {} to {} ({} days{})",
            house.calculated_start,
            house.calculated_end,
            house.duration,
            if house.is_extended() { ", leap day" } else { "" }
        );
        println!(
            "   {:.1}% elapsed, {} days remaining",
            report.progress, report.days_remaining
        );
        if !def.description.is_empty() {
            println!("   {}", def.description);
        }
    }
    Ok(())
}

/// Run the houses command.
pub fn run_houses(args: HousesArgs, config: &SundialConfig) -> Result<()> {
    let _cmd = info_span!("houses").entered();
    let year = args
        .year
        .unwrap_or_else(|| convert::resolve_instant(None).year());
    let table = convert::load_houses(config)?;
    let houses = expand_houses(year, &table)
        .with_context(|| format!("failed to expand houses for {year}"))?;
    info!(year, n_houses = houses.len(), "houses expanded");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&houses)?);
    } else {
        for h in &houses {
            println!(
                "{:>2}  {:<18} {}  {}  {:>2}{}",
                h.id(),
                h.definition.english_name,
                h.calculated_start,
                h.calculated_end,
                h.duration,
                if h.is_extended() { " +1" } else { "" }
            );
        }
    }
    Ok(())
}

#[derive(Debug, Serialize)]
struct HouseReport {
    house: ExpandedHouse,
    progress: f64,
    days_remaining: i64,
}

impl HouseReport {
    fn at(table: &HouseTable, at: NaiveDateTime) -> Result<Self> {
        let date = at.date();
        let Some(house) = house_for_date(date, table)
            .with_context(|| format!("failed to look up house for {date}"))?
        else {
            bail!("no house covers {date}");
        };
        Ok(Self {
            progress: house_progress(at, &house),
            days_remaining: days_remaining(house.calculated_end, at),
            house,
        })
    }
}
