//! NYSE observed-holiday resolution.

use chrono::{Datelike, NaiveDate, Weekday};
use tracing::debug;

use crate::easter::good_friday;
use crate::error::RulesError;
use crate::source::HolidaySource;
use crate::weekday::{last_weekday_of_month, nth_weekday_of_month, observed_date};

/// First year the modern NYSE holiday rule set applies (Martin Luther
/// King Jr. Day was added in 1998).
pub const NYSE_RULE_FIRST_YEAR: i32 = 1998;

/// First year Juneteenth was observed by the NYSE.
pub const JUNETEENTH_FIRST_YEAR: i32 = 2022;

/// One observed market holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holiday {
    /// The observed (market-closed) date.
    pub date: NaiveDate,
    /// The holiday's name.
    pub name: &'static str,
}

/// The NYSE observed-holiday calendar.
///
/// Fixed-date holidays shift off weekends: Saturday observes on the
/// preceding Friday and Sunday on the following Monday, except New
/// Year's Day, which is simply not observed when January 1 falls on a
/// Saturday. That exception is how 9-holiday years arise.
#[derive(Debug, Clone, Default)]
pub struct NyseCalendar;

impl NyseCalendar {
    /// Creates the calendar.
    pub fn new() -> Self {
        Self
    }

    fn fixed(
        &self,
        year: i32,
        month: u32,
        day: u32,
        name: &'static str,
    ) -> Result<Holiday, RulesError> {
        let nominal = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(RulesError::InvalidDate { year, month, day })?;
        Ok(Holiday {
            date: observed_date(nominal)?,
            name,
        })
    }
}

impl HolidaySource for NyseCalendar {
    fn resolve_holidays(&self, year: i32) -> Result<Vec<Holiday>, RulesError> {
        if year < NYSE_RULE_FIRST_YEAR {
            return Err(RulesError::UnsupportedYear {
                year,
                min: NYSE_RULE_FIRST_YEAR,
            });
        }

        let mut holidays = Vec::with_capacity(10);

        // New Year's Day: Sunday observes Monday; Saturday is skipped.
        let new_years =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(RulesError::InvalidDate {
                year,
                month: 1,
                day: 1,
            })?;
        match new_years.weekday() {
            Weekday::Sat => debug!(year, "New Year's Day falls on Saturday, not observed"),
            _ => holidays.push(Holiday {
                date: observed_date(new_years)?,
                name: "New Year's Day",
            }),
        }

        holidays.push(Holiday {
            date: nth_weekday_of_month(year, 1, Weekday::Mon, 3)?,
            name: "Martin Luther King Jr. Day",
        });
        holidays.push(Holiday {
            date: nth_weekday_of_month(year, 2, Weekday::Mon, 3)?,
            name: "Washington's Birthday",
        });
        holidays.push(Holiday {
            date: good_friday(year)?,
            name: "Good Friday",
        });
        holidays.push(Holiday {
            date: last_weekday_of_month(year, 5, Weekday::Mon)?,
            name: "Memorial Day",
        });
        if year >= JUNETEENTH_FIRST_YEAR {
            holidays.push(self.fixed(year, 6, 19, "Juneteenth National Independence Day")?);
        }
        holidays.push(self.fixed(year, 7, 4, "Independence Day")?);
        holidays.push(Holiday {
            date: nth_weekday_of_month(year, 9, Weekday::Mon, 1)?,
            name: "Labor Day",
        });
        holidays.push(Holiday {
            date: nth_weekday_of_month(year, 11, Weekday::Thu, 4)?,
            name: "Thanksgiving Day",
        });
        holidays.push(self.fixed(year, 12, 25, "Christmas Day")?);

        holidays.sort_by_key(|h| h.date);
        debug!(year, count = holidays.len(), "resolved NYSE holidays");
        Ok(holidays)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dates(year: i32) -> Vec<NaiveDate> {
        NyseCalendar::new()
            .resolve_holidays(year)
            .unwrap()
            .into_iter()
            .map(|h| h.date)
            .collect()
    }

    fn d(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn full_2024_calendar() {
        assert_eq!(
            dates(2024),
            vec![
                d(2024, 1, 1),
                d(2024, 1, 15),
                d(2024, 2, 19),
                d(2024, 3, 29),
                d(2024, 5, 27),
                d(2024, 6, 19),
                d(2024, 7, 4),
                d(2024, 9, 2),
                d(2024, 11, 28),
                d(2024, 12, 25),
            ]
        );
    }

    #[test]
    fn saturday_new_years_is_skipped() {
        // January 1, 2022 fell on a Saturday: nine holidays that year.
        let holidays = NyseCalendar::new().resolve_holidays(2022).unwrap();
        assert_eq!(holidays.len(), 9);
        assert!(holidays.iter().all(|h| h.name != "New Year's Day"));
        // Juneteenth 2022 fell on a Sunday, observed Monday June 20.
        assert!(holidays.iter().any(|h| h.date == d(2022, 6, 20)));
        // Christmas 2022 fell on a Sunday, observed Monday December 26.
        assert!(holidays.iter().any(|h| h.date == d(2022, 12, 26)));
    }

    #[test]
    fn sunday_new_years_observed_monday() {
        // January 1, 2023 fell on a Sunday.
        let holidays = NyseCalendar::new().resolve_holidays(2023).unwrap();
        assert_eq!(holidays[0].date, d(2023, 1, 2));
        assert_eq!(holidays[0].name, "New Year's Day");
    }

    #[test]
    fn juneteenth_absent_before_2022() {
        let holidays = NyseCalendar::new().resolve_holidays(2021).unwrap();
        assert_eq!(holidays.len(), 9);
        assert!(holidays
            .iter()
            .all(|h| h.name != "Juneteenth National Independence Day"));
    }

    #[test]
    fn sorted_and_in_year() {
        for year in 1998..2100 {
            let holidays = dates(year);
            assert!(
                holidays.windows(2).all(|w| w[0] < w[1]),
                "unsorted for {year}"
            );
            assert!(holidays.iter().all(|date| date.year() == year));
        }
    }

    #[test]
    fn count_is_nine_or_ten() {
        for year in 2022..2100 {
            let n = dates(year).len();
            assert!(n == 9 || n == 10, "year {year} produced {n} holidays");
        }
    }

    #[test]
    fn rejects_pre_rule_years() {
        let err = NyseCalendar::new().resolve_holidays(1997).unwrap_err();
        assert!(matches!(err, RulesError::UnsupportedYear { .. }));
    }
}
