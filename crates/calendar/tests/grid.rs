use std::collections::HashSet;

use sundial_calendar::{SlotKind, build_year_grid, days_in_month, days_in_year};

#[test]
fn length_is_multiple_of_seven() {
    for year in (1582..=2400).chain([-4713, -1, 0, 1, 9999, 100_000]) {
        let grid = build_year_grid(year);
        assert_eq!(grid.len() % 7, 0, "year {year}");
        assert_eq!(grid.days().count(), grid.len(), "year {year}");
    }
}

#[test]
fn every_real_day_appears_exactly_once() {
    for year in [1900, 1999, 2000, 2023, 2024, 2028, 2100] {
        let grid = build_year_grid(year);
        let mut seen = HashSet::new();
        for day in grid.days().filter(|d| d.kind() == SlotKind::InYear) {
            assert!(
                seen.insert((day.month_index(), day.day_of_month())),
                "duplicate {:?} in {year}",
                day.slot_key()
            );
        }
        assert_eq!(seen.len(), usize::from(days_in_year(year)), "year {year}");
        for month in 1..=12u8 {
            for d in 1..=days_in_month(year, month).unwrap() {
                assert!(
                    seen.contains(&((month - 1) as i8, d)),
                    "missing {month}/{d} in {year}"
                );
            }
        }
    }
}

#[test]
fn leap_year_2024() {
    let grid = build_year_grid(2024);
    assert_eq!(grid.leading_padding(), 1);
    assert!(
        grid.days()
            .any(|d| d.month_index() == 1 && d.day_of_month() == 29)
    );
}

#[test]
fn common_year_2023() {
    let grid = build_year_grid(2023);
    assert_eq!(grid.leading_padding(), 0);
    assert!(
        !grid
            .days()
            .any(|d| d.month_index() == 1 && d.day_of_month() == 29)
    );
}

#[test]
fn padding_only_at_the_edges() {
    let grid = build_year_grid(2025);
    let kinds: Vec<SlotKind> = grid.days().map(|d| d.kind()).collect();
    let first_real = kinds.iter().position(|k| *k == SlotKind::InYear).unwrap();
    let last_real = kinds.iter().rposition(|k| *k == SlotKind::InYear).unwrap();
    assert!(kinds[..first_real].iter().all(|k| *k == SlotKind::Leading));
    assert!(kinds[first_real..=last_real].iter().all(|k| *k == SlotKind::InYear));
    assert!(kinds[last_real + 1..].iter().all(|k| *k == SlotKind::Trailing));
}

#[test]
fn slot_keys_are_unique() {
    let grid = build_year_grid(2024);
    let keys: HashSet<&str> = grid.days().map(|d| d.slot_key()).collect();
    assert_eq!(keys.len(), grid.len());
}

#[test]
fn cells_resolve_to_consecutive_dates() {
    for year in [2021, 2022, 2023, 2024] {
        let grid = build_year_grid(year);
        let dates: Vec<_> = grid.days().map(|d| d.date(year).unwrap()).collect();
        for pair in dates.windows(2) {
            assert_eq!(
                pair[0].succ_opt(),
                Some(pair[1]),
                "gap after {} in grid {year}",
                pair[0]
            );
        }
    }
}

#[test]
fn month_start_flags_match_first_days() {
    let grid = build_year_grid(2024);
    let flagged: Vec<String> = (0..grid.len())
        .filter(|&i| grid.is_month_start(i))
        .map(|i| grid.day(i).unwrap().slot_key().to_string())
        .collect();
    let mut expected = vec!["padding-start-31".to_string()];
    expected.extend((0..12).map(|m| format!("month-{m}-1")));
    // Trailing cells carry month index 0 after December, so the first one
    // also opens a run.
    expected.push("padding-end-1".to_string());
    assert_eq!(flagged, expected);
}
