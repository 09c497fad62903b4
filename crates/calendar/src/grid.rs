//! Continuous, week-aligned year grids.

use serde::Serialize;

use crate::day::CalendarDay;
use crate::gregorian::{month_length, start_weekday};

/// Number of cells in a week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Seven consecutive cells, Sunday through Saturday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Week {
    days: Vec<CalendarDay>,
}

impl Week {
    /// The cells of this week (always 7).
    pub fn days(&self) -> &[CalendarDay] {
        &self.days
    }
}

/// A whole year laid out as consecutive weeks with boundary padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearGrid {
    year: i32,
    weeks: Vec<Week>,
}

impl YearGrid {
    /// The year this grid was built for.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Week rows in display order.
    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    /// Consumes the grid and returns its weeks.
    pub fn into_weeks(self) -> Vec<Week> {
        self.weeks
    }

    /// All cells in display order.
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay> {
        self.weeks.iter().flat_map(|w| w.days.iter())
    }

    /// Total number of cells (a multiple of 7).
    pub fn len(&self) -> usize {
        self.weeks.len() * DAYS_PER_WEEK
    }

    /// Returns `true` if the grid has no weeks, which a built grid never has.
    pub fn is_empty(&self) -> bool {
        self.weeks.is_empty()
    }

    /// Cell at a flat index.
    pub fn day(&self, index: usize) -> Option<&CalendarDay> {
        self.weeks
            .get(index / DAYS_PER_WEEK)
            .map(|w| &w.days[index % DAYS_PER_WEEK])
    }

    /// Number of leading padding cells.
    pub fn leading_padding(&self) -> usize {
        self.days().take_while(|d| d.month_index() < 0).count()
    }

    /// Returns `true` if the cell at `index` opens a new month run.
    ///
    /// The first cell always counts, as does any cell whose month index
    /// differs from the previous cell's. Out-of-range indices return `false`.
    pub fn is_month_start(&self, index: usize) -> bool {
        let Some(day) = self.day(index) else {
            return false;
        };
        if index == 0 {
            return true;
        }
        self.day(index - 1)
            .is_some_and(|prev| prev.month_index() != day.month_index())
    }
}

/// Expands `year` into a continuous grid of weeks.
///
/// The first row starts on the Sunday before January 1, padded with the
/// previous December's last days. A year starting on Saturday gets no
/// leading padding at all, so its first row begins on January 1. The last
/// row is completed with cells labelled January 1, 2, ... of the grid's own
/// month index 0.
///
/// # Example
///
/// ```
/// use sundial_calendar::build_year_grid;
///
/// let grid = build_year_grid(2024);
/// assert_eq!(grid.len() % 7, 0);
/// assert_eq!(grid.leading_padding(), 1); // 2024-01-01 is a Monday
/// ```
pub fn build_year_grid(year: i32) -> YearGrid {
    let start = start_weekday(year);
    let mut days = Vec::with_capacity(378);

    if start < 6 {
        let december = month_length(year.saturating_sub(1), 11);
        for i in 0..start {
            days.push(CalendarDay::leading(december - start + 1 + i));
        }
    }

    for month0 in 0..12u8 {
        for day in 1..=month_length(year, usize::from(month0)) {
            days.push(CalendarDay::in_year(month0, day));
        }
    }

    let remainder = days.len() % DAYS_PER_WEEK;
    if remainder > 0 {
        for day in 1..=(DAYS_PER_WEEK - remainder) as u8 {
            days.push(CalendarDay::trailing(day));
        }
    }

    let weeks = days
        .chunks_exact(DAYS_PER_WEEK)
        .map(|chunk| Week {
            days: chunk.to_vec(),
        })
        .collect();

    YearGrid { year, weeks }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day::SlotKind;

    #[test]
    fn grid_2024_leading_padding() {
        let grid = build_year_grid(2024);
        assert_eq!(grid.leading_padding(), 1);
        let first = grid.day(0).unwrap();
        assert_eq!(first.month_index(), -1);
        assert_eq!(first.day_of_month(), 31);
        assert_eq!(grid.day(1).unwrap().slot_key(), "month-0-1");
    }

    #[test]
    fn grid_2023_starts_on_sunday() {
        let grid = build_year_grid(2023);
        assert_eq!(grid.leading_padding(), 0);
        assert_eq!(grid.day(0).unwrap().slot_key(), "month-0-1");
    }

    #[test]
    fn saturday_start_has_no_leading_padding() {
        // 2022-01-01 is a Saturday.
        let grid = build_year_grid(2022);
        assert_eq!(grid.leading_padding(), 0);
        assert_eq!(grid.day(0).unwrap().kind(), SlotKind::InYear);
        // 365 real days leave a remainder of 1, so six trailing cells.
        assert_eq!(grid.len(), 371);
        assert_eq!(grid.days().filter(|d| d.kind() == SlotKind::Trailing).count(), 6);
    }

    #[test]
    fn friday_start_pads_five_days() {
        // 2021-01-01 is a Friday.
        let grid = build_year_grid(2021);
        let leading: Vec<u8> = grid
            .days()
            .take_while(|d| d.kind() == SlotKind::Leading)
            .map(|d| d.day_of_month())
            .collect();
        assert_eq!(leading, vec![27, 28, 29, 30, 31]);
    }

    #[test]
    fn trailing_days_restart_at_one() {
        let grid = build_year_grid(2024);
        // 1 + 366 = 367 cells, remainder 3, so 4 trailing cells.
        let trailing: Vec<(i8, u8)> = grid
            .days()
            .filter(|d| d.kind() == SlotKind::Trailing)
            .map(|d| (d.month_index(), d.day_of_month()))
            .collect();
        assert_eq!(trailing, vec![(0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(grid.len(), 371);
    }

    #[test]
    fn month_starts() {
        let grid = build_year_grid(2024);
        assert!(grid.is_month_start(0));
        // Index 1 is Jan 1 after one December cell.
        assert!(grid.is_month_start(1));
        assert!(!grid.is_month_start(2));
        // Feb 1 sits at 1 + 31.
        assert!(grid.is_month_start(32));
        assert!(!grid.is_month_start(grid.len()));
    }

    #[test]
    fn weeks_have_seven_days() {
        for year in [1900, 2000, 2023, 2024, 2100] {
            let grid = build_year_grid(year);
            assert!(grid.weeks().iter().all(|w| w.days().len() == 7));
        }
    }
}
