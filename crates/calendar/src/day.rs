//! Grid cells.

use chrono::NaiveDate;
use serde::Serialize;

/// Month index carried by leading padding cells (previous year's December).
pub const PREVIOUS_DECEMBER: i8 = -1;

/// Where a grid cell comes from relative to the grid's own year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKind {
    /// Borrowed from December of the previous year to pad the first week.
    Leading,
    /// A real day of the grid's year.
    InYear,
    /// Pads the final week; labelled as January with days restarting at 1.
    Trailing,
}

/// One cell of a continuous year grid.
///
/// Trailing cells keep `month_index == 0` and restart their day count at 1,
/// so their labels look like January of the grid's own year. Use
/// [`CalendarDay::resolve`] when the real date matters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct CalendarDay {
    month_index: i8,
    day_of_month: u8,
    slot_key: String,
    kind: SlotKind,
}

impl CalendarDay {
    pub(crate) fn leading(day: u8) -> Self {
        Self {
            month_index: PREVIOUS_DECEMBER,
            day_of_month: day,
            slot_key: format!("padding-start-{day}"),
            kind: SlotKind::Leading,
        }
    }

    pub(crate) fn in_year(month0: u8, day: u8) -> Self {
        Self {
            month_index: month0 as i8,
            day_of_month: day,
            slot_key: format!("month-{month0}-{day}"),
            kind: SlotKind::InYear,
        }
    }

    pub(crate) fn trailing(day: u8) -> Self {
        Self {
            month_index: 0,
            day_of_month: day,
            slot_key: format!("padding-end-{day}"),
            kind: SlotKind::Trailing,
        }
    }

    /// Month index: 0..=11 for January..December, `-1` for leading padding.
    pub fn month_index(&self) -> i8 {
        self.month_index
    }

    /// Day within the month as displayed.
    pub fn day_of_month(&self) -> u8 {
        self.day_of_month
    }

    /// Stable key identifying this cell within its grid.
    pub fn slot_key(&self) -> &str {
        &self.slot_key
    }

    /// Origin of the cell.
    pub fn kind(&self) -> SlotKind {
        self.kind
    }

    /// Returns `true` for leading or trailing padding.
    pub fn is_padding(&self) -> bool {
        self.kind != SlotKind::InYear
    }

    /// Maps the cell to its real `(year, month0, day)` for a grid of `grid_year`.
    ///
    /// Leading cells belong to December of `grid_year - 1`, trailing cells to
    /// January of `grid_year + 1`. Returns `None` only if that neighbouring
    /// year overflows `i32`.
    pub fn resolve(&self, grid_year: i32) -> Option<(i32, u8, u8)> {
        match self.kind {
            SlotKind::Leading => Some((grid_year.checked_sub(1)?, 11, self.day_of_month)),
            SlotKind::InYear => Some((grid_year, self.month_index as u8, self.day_of_month)),
            SlotKind::Trailing => Some((grid_year.checked_add(1)?, 0, self.day_of_month)),
        }
    }

    /// Real calendar date of the cell, if representable as a [`NaiveDate`].
    pub fn date(&self, grid_year: i32) -> Option<NaiveDate> {
        let (year, month0, day) = self.resolve(grid_year)?;
        NaiveDate::from_ymd_opt(year, u32::from(month0) + 1, u32::from(day))
    }

    /// Returns `true` if this cell is `today` when shown in the grid of `grid_year`.
    pub fn is_today(&self, grid_year: i32, today: NaiveDate) -> bool {
        self.date(grid_year) == Some(today)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_keys() {
        assert_eq!(CalendarDay::leading(31).slot_key(), "padding-start-31");
        assert_eq!(CalendarDay::in_year(1, 29).slot_key(), "month-1-29");
        assert_eq!(CalendarDay::trailing(2).slot_key(), "padding-end-2");
    }

    #[test]
    fn leading_uses_sentinel_month() {
        let day = CalendarDay::leading(30);
        assert_eq!(day.month_index(), PREVIOUS_DECEMBER);
        assert_eq!(day.day_of_month(), 30);
        assert!(day.is_padding());
    }

    #[test]
    fn trailing_keeps_january_label() {
        let day = CalendarDay::trailing(3);
        assert_eq!(day.month_index(), 0);
        assert_eq!(day.day_of_month(), 3);
        assert_eq!(day.kind(), SlotKind::Trailing);
        assert!(day.is_padding());
    }

    #[test]
    fn resolve_each_kind() {
        assert_eq!(CalendarDay::leading(31).resolve(2024), Some((2023, 11, 31)));
        assert_eq!(CalendarDay::in_year(5, 15).resolve(2024), Some((2024, 5, 15)));
        assert_eq!(CalendarDay::trailing(4).resolve(2024), Some((2025, 0, 4)));
    }

    #[test]
    fn resolve_overflow() {
        assert_eq!(CalendarDay::leading(31).resolve(i32::MIN), None);
        assert_eq!(CalendarDay::trailing(1).resolve(i32::MAX), None);
    }

    #[test]
    fn is_today_uses_real_date() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 2).unwrap();
        assert!(CalendarDay::trailing(2).is_today(2024, today));
        assert!(!CalendarDay::in_year(0, 2).is_today(2024, today));
        assert!(CalendarDay::in_year(0, 2).is_today(2025, today));
    }
}
