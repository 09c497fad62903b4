//! Point location over sorted date intervals.
//!
//! Answers two questions about a date against a sequence of named date
//! ranges: which range contains it, and which range most recently started.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use sundial_interval::{DateInterval, SortedIntervals};
//!
//! struct Term(NaiveDate, NaiveDate);
//!
//! impl DateInterval for Term {
//!     fn start(&self) -> NaiveDate { self.0 }
//!     fn end(&self) -> NaiveDate { self.1 }
//! }
//!
//! let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
//! let terms = SortedIntervals::new(vec![
//!     Term(d(1, 8), d(3, 22)),
//!     Term(d(4, 8), d(6, 28)),
//! ])
//! .unwrap();
//!
//! assert!(terms.active(d(4, 1)).is_none());
//! assert_eq!(terms.last_starting_on_or_before(d(4, 1)).unwrap().start(), d(1, 8));
//! ```
//!
//! # Architecture
//!
//! ```text
//! YearlyIntervals::active()
//!   ├─ SortedIntervals::active()   (date's own year)
//!   └─ SortedIntervals::active()   (previous year, cross-year tail)
//!
//! SortedIntervals::last_starting_on_or_before()
//!   └─ last_starting_on_or_before() (interval.rs, early-exit scan)
//! ```

pub mod error;
pub mod interval;
pub mod progress;
pub mod sorted;
pub mod yearly;

pub use error::IntervalError;
pub use interval::{DateInterval, find_containing, last_starting_on_or_before};
pub use progress::{days_remaining, progress_percent};
pub use sorted::SortedIntervals;
pub use yearly::YearlyIntervals;
