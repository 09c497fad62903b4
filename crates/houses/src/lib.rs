//! Astronomical house (manazil) calendar.
//!
//! A house table is a cycle of named periods anchored on month-days. This
//! crate places the cycle into a concrete year, adding the leap day to one
//! designated house, and finds the house covering any date.
//!
//! # Architecture
//!
//! ```mermaid
//! graph LR
//!     J[JSON dataset] --> T[HouseTable]
//!     T --> E[expand_houses]
//!     E --> X[ExpandedHouse]
//!     T --> L[house_for_date]
//!     L -->|year-1, year, year+1| E
//!     X --> P[house_progress]
//! ```
//!
//! # Quick start
//!
//! ```
//! use chrono::NaiveDate;
//! use sundial_houses::{HouseTable, house_for_date};
//!
//! let table = HouseTable::from_json(r#"{
//!     "leap_absorbing_house": 1,
//!     "houses": [
//!         {"id": 1, "season": "winter", "period": "", "english_period": "",
//!          "house": "", "english_name": "First", "start_date": "01-01", "duration": 181},
//!         {"id": 2, "season": "summer", "period": "", "english_period": "",
//!          "house": "", "english_name": "Second", "start_date": "07-01", "duration": 184}
//!     ]
//! }"#).unwrap();
//!
//! let date = NaiveDate::from_ymd_opt(2028, 6, 30).unwrap();
//! let house = house_for_date(date, &table).unwrap().unwrap();
//! assert_eq!(house.id(), 1);
//! assert_eq!(house.duration, 182);
//! ```
//!
//! # Modules
//!
//! | Module   | Purpose                                   |
//! |----------|-------------------------------------------|
//! | `error`  | [`HouseError`]                            |
//! | `house`  | [`HouseDefinition`]                       |
//! | `table`  | [`HouseTable`] validation and parsing     |
//! | `expand` | [`expand_houses`] and [`ExpandedHouse`]   |
//! | `lookup` | [`house_for_date`] and [`house_progress`] |

mod error;
mod expand;
mod house;
mod lookup;
mod table;

pub use error::HouseError;
pub use expand::{ExpandedHouse, expand_houses};
pub use house::HouseDefinition;
pub use lookup::{house_for_date, house_progress};
pub use table::HouseTable;
