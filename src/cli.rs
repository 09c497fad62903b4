use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use sundial_season::Hemisphere;

/// Sundial temporal engine.
#[derive(Parser)]
#[command(
    name = "sundial",
    version,
    about = "Year grids, seasons and astronomical houses"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file (default: ./sundial.toml if present).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the week grid of a year.
    Grid(GridArgs),
    /// Show the active season for a date.
    Season(SeasonArgs),
    /// Show the active astronomical house for a date.
    House(HouseArgs),
    /// List the expanded house calendar of a year.
    Houses(HousesArgs),
    /// Show progress through the calendar year.
    Year(YearArgs),
}

/// Where the observer is, for season naming.
#[derive(clap::Args)]
pub struct LocationArgs {
    /// Observer latitude in degrees; its sign picks the hemisphere.
    #[arg(long, allow_hyphen_values = true, conflicts_with = "hemisphere")]
    pub latitude: Option<f64>,

    /// Hemisphere name (northern, southern, equator).
    #[arg(long)]
    pub hemisphere: Option<Hemisphere>,
}

/// Arguments for the `grid` subcommand.
#[derive(clap::Args)]
pub struct GridArgs {
    /// Year to lay out (default: current year).
    #[arg(short, long, allow_hyphen_values = true)]
    pub year: Option<i32>,

    /// Date to mark as today (default: the local date).
    #[arg(long)]
    pub today: Option<NaiveDate>,

    /// Location used for season labels.
    #[command(flatten)]
    pub location: LocationArgs,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `season` subcommand.
#[derive(clap::Args)]
pub struct SeasonArgs {
    /// Date to resolve (default: now).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Location used for season naming.
    #[command(flatten)]
    pub location: LocationArgs,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `house` subcommand.
#[derive(clap::Args)]
pub struct HouseArgs {
    /// Date to resolve (default: now).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `houses` subcommand.
#[derive(clap::Args)]
pub struct HousesArgs {
    /// Year to expand (default: current year).
    #[arg(short, long, allow_hyphen_values = true)]
    pub year: Option<i32>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `year` subcommand.
#[derive(clap::Args)]
pub struct YearArgs {
    /// Date to measure at (default: now).
    #[arg(short, long)]
    pub date: Option<NaiveDate>,

    /// Emit JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_season_with_negative_latitude() {
        let cli = Cli::try_parse_from(["sundial", "season", "--latitude", "-33.9"]).unwrap();
        let Command::Season(args) = cli.command else {
            panic!("expected season command");
        };
        assert_eq!(args.location.latitude, Some(-33.9));
        assert!(args.location.hemisphere.is_none());
    }

    #[test]
    fn latitude_conflicts_with_hemisphere() {
        let res = Cli::try_parse_from([
            "sundial",
            "season",
            "--latitude",
            "10",
            "--hemisphere",
            "southern",
        ]);
        assert!(res.is_err());
    }

    #[test]
    fn parses_dates_and_global_flags() {
        let cli =
            Cli::try_parse_from(["sundial", "house", "--date", "2028-02-29", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        let Command::House(args) = cli.command else {
            panic!("expected house command");
        };
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2028, 2, 29));
    }
}
