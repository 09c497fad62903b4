//! Season datasets with hemisphere-aware labeling.
//!
//! Datasets are written with northern names. A [`SeasonCalendar`] is the
//! same dataset renamed for one hemisphere: the southern view swaps spring
//! with autumn and summer with winter, keeping every date range as is.
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use sundial_season::{Hemisphere, SeasonName, SeasonTable};
//!
//! let table = SeasonTable::from_json(r#"{"years": {"2024": [
//!     {"name": "summer", "start_date": "2024-06-20", "end_date": "2024-09-21"}
//! ]}}"#).unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2024, 8, 1).unwrap();
//! let south = table.for_hemisphere(Hemisphere::Southern);
//! assert_eq!(south.active_season(date).unwrap().name, SeasonName::Winter);
//! ```

pub mod error;
pub mod hemisphere;
pub mod season;
pub mod table;

pub use error::SeasonError;
pub use hemisphere::Hemisphere;
pub use season::{Season, SeasonName};
pub use table::{SeasonCalendar, SeasonStart, SeasonTable};
