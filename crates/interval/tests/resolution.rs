//! Integration tests for interval point location.

use chrono::{Datelike, NaiveDate};
use sundial_interval::{DateInterval, SortedIntervals, YearlyIntervals};

#[derive(Debug, Clone, PartialEq)]
struct Named {
    name: &'static str,
    start: NaiveDate,
    end: NaiveDate,
}

impl DateInterval for Named {
    fn start(&self) -> NaiveDate {
        self.start
    }
    fn end(&self) -> NaiveDate {
        self.end
    }
}

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn year(y: i32, starts: [(u32, u32); 4]) -> SortedIntervals<Named> {
    let names = ["spring", "summer", "autumn", "winter"];
    let mut starts: Vec<NaiveDate> = starts.iter().map(|&(m, day)| d(y, m, day)).collect();
    starts.push(d(y + 1, 3, 20));
    let items = names
        .iter()
        .enumerate()
        .map(|(i, &name)| Named {
            name,
            start: starts[i],
            end: starts[i + 1].pred_opt().unwrap(),
        })
        .collect();
    SortedIntervals::new(items).unwrap()
}

fn dataset() -> YearlyIntervals<Named> {
    let mut data = YearlyIntervals::new();
    data.insert(2024, year(2024, [(3, 20), (6, 20), (9, 22), (12, 21)]));
    data.insert(2025, year(2025, [(3, 20), (6, 21), (9, 22), (12, 21)]));
    data
}

#[test]
fn every_day_resolves_to_its_interval() {
    let data = dataset();
    for y in data.years().collect::<Vec<_>>() {
        for interval in data.get(y).unwrap() {
            let mut day = interval.start;
            while day <= interval.end {
                assert_eq!(
                    data.active(day),
                    Some(interval),
                    "{day} should resolve to {} of {y}",
                    interval.name
                );
                day = day.succ_opt().unwrap();
            }
        }
    }
}

#[test]
fn january_resolves_through_previous_year() {
    let data = dataset();
    let hit = data.active(d(2025, 1, 2)).unwrap();
    assert_eq!(hit.name, "winter");
    assert_eq!(hit.start.year(), 2024);
}

#[test]
fn durations_cover_the_year() {
    let data = dataset();
    let total: i64 = data.get(2024).unwrap().iter().map(|i| i.duration_days()).sum();
    // 2024-03-20 through 2025-03-19 contains no February 29.
    assert_eq!(total, 365);
}

#[test]
fn last_started_label_across_years() {
    let data = dataset();
    let timeline = SortedIntervals::new(data.iter_all().cloned().collect()).unwrap();
    assert_eq!(
        timeline.last_starting_on_or_before(d(2025, 2, 1)).unwrap().name,
        "winter"
    );
    assert_eq!(
        timeline.last_starting_on_or_before(d(2025, 6, 21)).unwrap().name,
        "summer"
    );
    // Before the dataset begins, the first interval labels the date.
    assert_eq!(
        timeline.last_starting_on_or_before(d(2020, 1, 1)).unwrap().name,
        "spring"
    );
}
