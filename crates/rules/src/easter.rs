//! Gregorian computus.

use chrono::{Days, NaiveDate};

use crate::error::RulesError;

/// Returns the date of Easter Sunday for the given year.
///
/// Uses the anonymous Gregorian computus, valid for all years of the
/// Gregorian calendar.
///
/// # Errors
///
/// Returns [`RulesError::InvalidDate`] only at the datatype's
/// representable year bounds.
pub fn easter_sunday(year: i32) -> Result<NaiveDate, RulesError> {
    let a = year.rem_euclid(19);
    let b = year.div_euclid(100);
    let c = year.rem_euclid(100);
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k).rem_euclid(7);
    let m = (a + 11 * h + 22 * l) / 451;
    let month = ((h + l - 7 * m + 114) / 31) as u32;
    let day = ((h + l - 7 * m + 114) % 31 + 1) as u32;
    NaiveDate::from_ymd_opt(year, month, day).ok_or(RulesError::InvalidDate { year, month, day })
}

/// Returns the date of Good Friday (two days before Easter Sunday).
///
/// # Errors
///
/// Returns [`RulesError::InvalidDate`] only at the datatype's
/// representable year bounds.
pub fn good_friday(year: i32) -> Result<NaiveDate, RulesError> {
    let easter = easter_sunday(year)?;
    easter
        .checked_sub_days(Days::new(2))
        .ok_or(RulesError::InvalidDate {
            year,
            month: 3,
            day: 1,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    #[test]
    fn known_easter_dates() {
        let cases = [
            (2000, 4, 23),
            (2022, 4, 17),
            (2023, 4, 9),
            (2024, 3, 31),
            (2025, 4, 20),
            (2029, 4, 1),
            (2038, 4, 25),
        ];
        for (year, month, day) in cases {
            assert_eq!(
                easter_sunday(year).unwrap(),
                NaiveDate::from_ymd_opt(year, month, day).unwrap(),
                "easter {year}"
            );
        }
    }

    #[test]
    fn easter_is_always_a_sunday() {
        for year in 1990..2100 {
            assert_eq!(easter_sunday(year).unwrap().weekday(), Weekday::Sun);
        }
    }

    #[test]
    fn good_friday_precedes_easter_by_two_days() {
        assert_eq!(
            good_friday(2024).unwrap(),
            NaiveDate::from_ymd_opt(2024, 3, 29).unwrap()
        );
        assert_eq!(
            good_friday(2022).unwrap(),
            NaiveDate::from_ymd_opt(2022, 4, 15).unwrap()
        );
        for year in 1990..2100 {
            assert_eq!(good_friday(year).unwrap().weekday(), Weekday::Fri);
        }
    }
}
