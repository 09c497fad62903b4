//! Year command: progress through the calendar year.

use anyhow::Result;
use tracing::{info, info_span};

use sundial_calendar::year_progress;

use crate::cli::YearArgs;
use crate::convert;

/// Run the year command.
pub fn run(args: YearArgs) -> Result<()> {
    let _cmd = info_span!("year").entered();
    let progress = year_progress(convert::resolve_instant(args.date));
    info!(year = progress.year, percent = progress.percent, "year progress");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&progress)?);
    } else {
        println!(
            "{}: {} of {} days passed ({:.1}%), {} days remaining",
            progress.year,
            progress.days_passed,
            progress.total_days,
            progress.percent,
            progress.days_remaining()
        );
    }
    Ok(())
}
