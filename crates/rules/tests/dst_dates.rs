//! Civil-calendar properties of the US DST rules.

use chrono::{Datelike, Offset, Weekday};
use chrono_tz::America::New_York;

use almanac_rules::{DstSource, UsDstRules};

#[test]
fn start_is_second_sunday_of_march() {
    let rules = UsDstRules::new(New_York);
    for year in 2007..2110 {
        let start = rules.resolve_dst(year).unwrap().start();
        assert_eq!(start.weekday(), Weekday::Sun, "year {year}");
        assert_eq!(start.month(), 3, "year {year}");
        // The 2nd Sunday falls in the 8th..=14th window.
        assert!((8..=14).contains(&start.day()), "year {year}");
    }
}

#[test]
fn end_is_first_sunday_of_november() {
    let rules = UsDstRules::new(New_York);
    for year in 2007..2110 {
        let end = rules.resolve_dst(year).unwrap().end();
        assert_eq!(end.weekday(), Weekday::Sun, "year {year}");
        assert_eq!(end.month(), 11, "year {year}");
        assert!((1..=7).contains(&end.day()), "year {year}");
    }
}

#[test]
fn instants_carry_historical_offsets() {
    // New York: the start instant is already in EDT (UTC-4), the end
    // instant still in EST (UTC-5). Offsets come from tzdata, not a
    // fixed displacement.
    let transition = UsDstRules::new(New_York).resolve_dst(2024).unwrap();
    assert_eq!(
        transition.start().offset().fix().local_minus_utc(),
        -4 * 3600
    );
    assert_eq!(transition.end().offset().fix().local_minus_utc(), -5 * 3600);
}

#[test]
fn known_instants_2023_through_2026() {
    let rules = UsDstRules::new(New_York);
    let expected = [
        (2023, 1_678_604_400, 1_699_167_600),
        (2024, 1_710_054_000, 1_730_617_200),
        (2025, 1_741_503_600, 1_762_066_800),
        (2026, 1_772_953_200, 1_793_516_400),
    ];
    for (year, start, end) in expected {
        let transition = rules.resolve_dst(year).unwrap();
        assert_eq!(transition.start().timestamp(), start, "start {year}");
        assert_eq!(transition.end().timestamp(), end, "end {year}");
    }
}

#[test]
fn resolution_is_deterministic() {
    let rules = UsDstRules::new(New_York);
    let first = rules.resolve_dst(2030).unwrap();
    let second = rules.resolve_dst(2030).unwrap();
    assert_eq!(first, second);
}
