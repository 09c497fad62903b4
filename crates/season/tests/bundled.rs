//! Behaviour against the bundled 2023-2028 season dataset.

use chrono::{Days, NaiveDate};
use sundial_interval::DateInterval;
use sundial_season::{Hemisphere, SeasonName, SeasonTable};

const SEASONS: &str = include_str!("../../../data/seasons.json");

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn table() -> SeasonTable {
    SeasonTable::from_json(SEASONS).unwrap()
}

#[test]
fn bundled_dataset_covers_six_years() {
    let years: Vec<i32> = table().years().collect();
    assert_eq!(years, (2023..=2028).collect::<Vec<_>>());
}

#[test]
fn every_day_in_range_has_a_season() {
    let north = table().for_hemisphere(Hemisphere::Northern);
    let mut date = d(2023, 3, 20);
    let last = d(2029, 3, 19);
    while date <= last {
        let season = north.active_season(date).unwrap();
        assert!(season.contains(date), "{date} not in {season:?}");
        date = date + Days::new(1);
    }
}

#[test]
fn early_january_resolves_to_previous_years_winter() {
    let north = table().for_hemisphere(Hemisphere::Northern);
    let season = north.active_season(d(2025, 1, 2)).unwrap();
    assert_eq!(season.name, SeasonName::Winter);
    assert_eq!(season.start, d(2024, 12, 21));
}

#[test]
fn southern_relabel_keeps_dates() {
    let table = table();
    let north = table.for_hemisphere(Hemisphere::Northern);
    let south = table.for_hemisphere(Hemisphere::Southern);
    let date = d(2026, 7, 15);

    let n = north.active_season(date).unwrap();
    let s = south.active_season(date).unwrap();
    assert_eq!(n.name, SeasonName::Summer);
    assert_eq!(s.name, SeasonName::Winter);
    assert_eq!((n.start, n.end), (s.start, s.end));
}

#[test]
fn equator_uses_northern_names() {
    let table = table();
    let eq = table.for_hemisphere(Hemisphere::Equator);
    let north = table.for_hemisphere(Hemisphere::Northern);
    assert_eq!(eq.seasons(), north.seasons());
}

#[test]
fn season_as_of_falls_back_to_first() {
    let north = table().for_hemisphere(Hemisphere::Northern);
    assert!(north.active_season(d(2020, 5, 1)).is_none());
    let first = north.season_as_of(d(2020, 5, 1)).unwrap();
    assert_eq!(first.start, d(2023, 3, 20));
}

#[test]
fn season_as_of_past_the_end_keeps_last() {
    let north = table().for_hemisphere(Hemisphere::Northern);
    let last = north.season_as_of(d(2035, 1, 1)).unwrap();
    assert_eq!(last.start, d(2028, 12, 21));
    assert_eq!(last.name, SeasonName::Winter);
}

#[test]
fn season_as_of_agrees_with_active_inside_range() {
    let north = table().for_hemisphere(Hemisphere::Northern);
    for date in [d(2023, 4, 1), d(2024, 12, 21), d(2026, 1, 1), d(2028, 9, 22)] {
        assert_eq!(north.season_as_of(date), north.active_season(date));
    }
}

#[test]
fn one_badge_per_season() {
    let starts = table().for_hemisphere(Hemisphere::Southern).season_starts();
    assert_eq!(starts.len(), 24);
    assert_eq!(starts[&d(2024, 3, 20)].title, "Autumn Starts");
}
