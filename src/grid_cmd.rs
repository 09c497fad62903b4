//! Grid command: lay out a year as weeks.

use std::fmt::Write as _;

use anyhow::Result;
use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use tracing::{info, info_span};

use sundial_calendar::{CalendarDay, YearGrid, build_year_grid};
use sundial_season::{Hemisphere, SeasonCalendar, SeasonName};

use crate::cli::GridArgs;
use crate::config::{GridToml, SundialConfig};
use crate::convert;

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const WEEKDAY_HEADER: &str = " Su  Mo  Tu  We  Th  Fr  Sa";

/// Run the grid command.
pub fn run(args: GridArgs, config: &SundialConfig) -> Result<()> {
    let _cmd = info_span!("grid").entered();
    let today = convert::resolve_instant(args.today).date();
    let year = args.year.unwrap_or_else(|| today.year());
    let hemisphere = convert::resolve_hemisphere(&args.location, &config.location)?;
    let seasons = convert::load_seasons(config)?.for_hemisphere(hemisphere);

    let grid = build_year_grid(year);
    info!(year, n_weeks = grid.weeks().len(), %hemisphere, "grid built");

    let view = GridView::new(&grid, today, &seasons, &config.grid);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print!("{}", view.render());
    }
    Ok(())
}

/// A grid annotated for display.
#[derive(Debug, Serialize)]
struct GridView<'a> {
    year: i32,
    hemisphere: Hemisphere,
    weeks: Vec<Vec<CellView<'a>>>,
}

#[derive(Debug, Serialize)]
struct CellView<'a> {
    #[serde(flatten)]
    day: &'a CalendarDay,
    date: Option<NaiveDate>,
    is_today: bool,
    is_month_start: bool,
    season: Option<SeasonName>,
    badge: Option<String>,
}

impl<'a> GridView<'a> {
    fn new(
        grid: &'a YearGrid,
        today: NaiveDate,
        seasons: &SeasonCalendar,
        settings: &GridToml,
    ) -> Self {
        let year = grid.year();
        let starts = if settings.season_badges {
            seasons.season_starts()
        } else {
            Default::default()
        };
        let weeks = grid
            .weeks()
            .iter()
            .enumerate()
            .map(|(w, week)| {
                week.days()
                    .iter()
                    .enumerate()
                    .map(|(i, day)| {
                        let date = day.date(year);
                        let season = date
                            .filter(|_| settings.season_labels)
                            .and_then(|d| seasons.season_as_of(d))
                            .map(|s| s.name);
                        CellView {
                            day,
                            date,
                            is_today: day.is_today(year, today),
                            is_month_start: grid.is_month_start(w * week.days().len() + i),
                            season,
                            badge: date.and_then(|d| starts.get(&d)).map(|s| s.title.clone()),
                        }
                    })
                    .collect()
            })
            .collect();
        Self {
            year,
            hemisphere: seasons.hemisphere(),
            weeks,
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{:^27}", self.year);
        let _ = writeln!(out, "{WEEKDAY_HEADER}");
        for week in &self.weeks {
            for cell in week {
                let _ = write!(out, "{}", render_cell(cell));
            }
            let notes = week_notes(week);
            if notes.is_empty() {
                out.push('\n');
            } else {
                let _ = writeln!(out, "   {}", notes.join("  "));
            }
        }
        out
    }
}

/// Four columns: `~` marks padding, `*` marks today.
fn render_cell(cell: &CellView<'_>) -> String {
    let prefix = if cell.day.is_padding() { '~' } else { ' ' };
    let suffix = if cell.is_today { '*' } else { ' ' };
    format!("{prefix}{:>2}{suffix}", cell.day.day_of_month())
}

/// Month names opened in the week, season label of its first real day, and
/// any season-start badges.
fn week_notes(week: &[CellView<'_>]) -> Vec<String> {
    let mut notes = Vec::new();
    for cell in week.iter().filter(|c| c.is_month_start && !c.day.is_padding()) {
        if let Ok(m) = usize::try_from(cell.day.month_index()) {
            notes.push(MONTH_NAMES[m].to_string());
        }
    }
    if let Some(season) = week
        .iter()
        .find(|c| !c.day.is_padding())
        .and_then(|c| c.season)
    {
        notes.push(format!("[{season}]"));
    }
    notes.extend(week.iter().filter_map(|c| c.badge.clone()));
    notes
}
