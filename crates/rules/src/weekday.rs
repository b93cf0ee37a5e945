//! Nth-weekday-of-month date arithmetic.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::RulesError;

/// Returns the date of the nth occurrence of `weekday` in the given month.
///
/// `week` is 1-based: `week = 2` with `Weekday::Sun` is the 2nd Sunday.
///
/// # Errors
///
/// Returns [`RulesError`] if the month or week ordinal is out of range,
/// or the month has no such occurrence (a 5th occurrence exists only in
/// months where the weekday falls five times).
pub fn nth_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
    week: u8,
) -> Result<NaiveDate, RulesError> {
    if month == 0 || month > 12 {
        return Err(RulesError::InvalidMonth { month });
    }
    if week == 0 || week > 5 {
        return Err(RulesError::InvalidWeek { week });
    }
    NaiveDate::from_weekday_of_month_opt(year, month, weekday, week).ok_or(
        RulesError::NonexistentWeekday { year, month, week },
    )
}

/// Returns the date of the last occurrence of `weekday` in the given month.
///
/// # Errors
///
/// Returns [`RulesError`] if the month is out of range.
pub fn last_weekday_of_month(
    year: i32,
    month: u32,
    weekday: Weekday,
) -> Result<NaiveDate, RulesError> {
    if month == 0 || month > 12 {
        return Err(RulesError::InvalidMonth { month });
    }
    // A month has either four or five occurrences of a weekday.
    match NaiveDate::from_weekday_of_month_opt(year, month, weekday, 5) {
        Some(date) => Ok(date),
        None => NaiveDate::from_weekday_of_month_opt(year, month, weekday, 4).ok_or(
            RulesError::NonexistentWeekday {
                year,
                month,
                week: 4,
            },
        ),
    }
}

/// Shifts a fixed-date holiday off a weekend to its observed date:
/// Saturday observes on the preceding Friday, Sunday on the following
/// Monday. Weekday dates pass through unchanged.
///
/// # Errors
///
/// Returns [`RulesError::InvalidDate`] if the shift leaves the calendar
/// (only possible at the datatype's representable bounds).
pub fn observed_date(date: NaiveDate) -> Result<NaiveDate, RulesError> {
    let shifted = match date.weekday() {
        Weekday::Sat => date.pred_opt(),
        Weekday::Sun => date.succ_opt(),
        _ => Some(date),
    };
    shifted.ok_or(RulesError::InvalidDate {
        year: date.year(),
        month: date.month(),
        day: date.day(),
    })
}
