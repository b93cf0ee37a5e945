//! NYSE calendar fixtures against published exchange closure dates.

use chrono::NaiveDate;

use almanac_rules::{HolidaySource, NyseCalendar};

fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn published_2025_closures() {
    let holidays = NyseCalendar::new().resolve_holidays(2025).unwrap();
    let dates: Vec<NaiveDate> = holidays.iter().map(|h| h.date).collect();
    assert_eq!(
        dates,
        vec![
            d(2025, 1, 1),   // New Year's Day (Wednesday)
            d(2025, 1, 20),  // Martin Luther King Jr. Day
            d(2025, 2, 17),  // Washington's Birthday
            d(2025, 4, 18),  // Good Friday
            d(2025, 5, 26),  // Memorial Day
            d(2025, 6, 19),  // Juneteenth
            d(2025, 7, 4),   // Independence Day
            d(2025, 9, 1),   // Labor Day
            d(2025, 11, 27), // Thanksgiving Day
            d(2025, 12, 25), // Christmas Day
        ]
    );
}

#[test]
fn saturday_independence_day_observed_friday() {
    // July 4, 2026 falls on a Saturday: market closes Friday July 3.
    let holidays = NyseCalendar::new().resolve_holidays(2026).unwrap();
    assert!(holidays.iter().any(|h| h.date == d(2026, 7, 3)));
    assert!(holidays.iter().all(|h| h.date != d(2026, 7, 4)));
}

#[test]
fn nine_holiday_years_within_range() {
    // Years where January 1 falls on a Saturday: 2022, 2028, 2033...
    for year in [2022, 2028, 2033] {
        let holidays = NyseCalendar::new().resolve_holidays(year).unwrap();
        assert_eq!(holidays.len(), 9, "year {year}");
    }
}

#[test]
fn names_follow_dates() {
    let holidays = NyseCalendar::new().resolve_holidays(2024).unwrap();
    let good_friday = holidays.iter().find(|h| h.name == "Good Friday").unwrap();
    assert_eq!(good_friday.date, d(2024, 3, 29));
    let thanksgiving = holidays
        .iter()
        .find(|h| h.name == "Thanksgiving Day")
        .unwrap();
    assert_eq!(thanksgiving.date, d(2024, 11, 28));
}
