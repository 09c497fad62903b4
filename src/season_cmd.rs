//! Season command: the season active at an instant.

use anyhow::{Result, bail};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use tracing::{info, info_span, warn};

use sundial_interval::{DateInterval, days_remaining};
use sundial_season::{Hemisphere, SeasonCalendar, SeasonName};

use crate::cli::SeasonArgs;
use crate::config::SundialConfig;
use crate::convert;

/// Run the season command.
pub fn run(args: SeasonArgs, config: &SundialConfig) -> Result<()> {
    let _cmd = info_span!("season").entered();
    let at = convert::resolve_instant(args.date);
    let hemisphere = convert::resolve_hemisphere(&args.location, &config.location)?;
    let seasons = convert::load_seasons(config)?.for_hemisphere(hemisphere);

    let Some(report) = SeasonReport::at(&seasons, at) else {
        bail!("season dataset is empty");
    };
    info!(season = %report.season, %hemisphere, contained = report.contained, "season resolved");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "{} ({}): {} to {}",
            report.season.title(),
            report.hemisphere,
            report.start,
            report.end
        );
        if report.contained {
            println!(
                "{:.1}% elapsed, {} days remaining",
                report.progress, report.days_remaining
            );
        } else {
            println!("date is outside the season dataset; showing the nearest season start");
        }
    }
    Ok(())
}

/// The season at an instant plus progress through it.
#[derive(Debug, Serialize)]
struct SeasonReport {
    season: SeasonName,
    hemisphere: Hemisphere,
    start: NaiveDate,
    end: NaiveDate,
    /// `false` when no interval contains the date and the label comes from
    /// the latest start on or before it.
    contained: bool,
    progress: f64,
    days_remaining: i64,
}

impl SeasonReport {
    fn at(seasons: &SeasonCalendar, at: NaiveDateTime) -> Option<Self> {
        let date = at.date();
        let (season, contained) = match seasons.active_season(date) {
            Some(s) => (s, true),
            None => {
                let s = seasons.season_as_of(date)?;
                warn!(%date, "no season contains date, using latest start");
                (s, false)
            }
        };
        Some(Self {
            season: season.name,
            hemisphere: seasons.hemisphere(),
            start: season.start,
            end: season.end,
            contained,
            progress: season.progress_at(at),
            days_remaining: days_remaining(season.end, at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use chrono::NaiveTime;
    use sundial_season::SeasonTable;

    const SEASONS: &str = include_str!("../data/seasons.json");

    fn calendar(hemisphere: Hemisphere) -> SeasonCalendar {
        SeasonTable::from_json(SEASONS)
            .unwrap()
            .for_hemisphere(hemisphere)
    }

    fn midnight(y: i32, m: u32, d: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_time(NaiveTime::MIN)
    }

    #[test]
    fn first_day_of_southern_winter() {
        let report = SeasonReport::at(&calendar(Hemisphere::Southern), midnight(2024, 6, 20)).unwrap();
        assert_eq!(report.season, SeasonName::Winter);
        assert!(report.contained);
        assert_relative_eq!(report.progress, 0.0);
        assert_eq!(report.days_remaining, 93);
    }

    #[test]
    fn outside_dataset_uses_latest_start() {
        let report = SeasonReport::at(&calendar(Hemisphere::Northern), midnight(2040, 1, 1)).unwrap();
        assert!(!report.contained);
        assert_eq!(report.season, SeasonName::Winter);
        assert_relative_eq!(report.progress, 100.0);
        assert_eq!(report.days_remaining, 0);
    }
}
