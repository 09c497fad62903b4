//! # sundial-calendar
//!
//! Proleptic Gregorian arithmetic and continuous year grids.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["year"] -->|"start_weekday()"| B["leading padding"]
//!     A -->|"days_in_month()"| C["real days"]
//!     B --> D["flat cells"]
//!     C --> D
//!     D -->|"pad to multiple of 7"| E["YearGrid of Week"]
//!     F["MM-DD"] -->|"MonthDay::in_year()"| G["NaiveDate"]
//! ```
//!
//! ## Quick Start
//!
//! ```
//! use sundial_calendar::{build_year_grid, is_leap_year, MonthDay};
//!
//! let grid = build_year_grid(2024);
//! assert!(grid.days().any(|d| d.month_index() == 1 && d.day_of_month() == 29));
//! assert!(is_leap_year(2024));
//!
//! let anchor: MonthDay = "12-07".parse().unwrap();
//! assert_eq!(anchor.month(), 12);
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `gregorian` | Leap years, month lengths, weekdays |
//! | `day` | Grid cells and their real dates |
//! | `grid` | Week-aligned year grid builder |
//! | `month_day` | Year-independent `MM-DD` anchors |
//! | `year` | Progress through a calendar year |
//! | `error` | Error types |

mod day;
mod error;
mod gregorian;
mod grid;
mod month_day;
mod year;

pub use day::{CalendarDay, PREVIOUS_DECEMBER, SlotKind};
pub use error::CalendarError;
pub use gregorian::{days_in_month, days_in_year, is_leap_year, start_weekday};
pub use grid::{DAYS_PER_WEEK, Week, YearGrid, build_year_grid};
pub use month_day::MonthDay;
pub use year::{YearProgress, year_progress};
