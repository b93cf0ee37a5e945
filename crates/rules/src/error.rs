//! Error types for the almanac-rules crate.

use chrono::NaiveDateTime;

/// Error type for all fallible operations in the almanac-rules crate.
///
/// This enum covers rule validation failures, years outside the range a
/// rule set is defined for, and wall-clock instants a timezone cannot map.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RulesError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u32,
    },

    /// Returned when a week ordinal is outside the valid range 1..=5.
    #[error("invalid week ordinal: {week} (must be 1..=5)")]
    InvalidWeek {
        /// The invalid week ordinal that was provided.
        week: u8,
    },

    /// Returned when a month has no nth occurrence of the requested weekday.
    #[error("{year}-{month:02} has no week-{week} occurrence of the requested weekday")]
    NonexistentWeekday {
        /// The year being resolved.
        year: i32,
        /// The month being resolved.
        month: u32,
        /// The week ordinal that did not exist.
        week: u8,
    },

    /// Returned when date arithmetic produces a calendar date that does
    /// not exist.
    #[error("invalid date: {year}-{month:02}-{day:02}")]
    InvalidDate {
        /// The year component.
        year: i32,
        /// The month component.
        month: u32,
        /// The day component.
        day: u32,
    },

    /// Returned when a wall-clock instant cannot be mapped into the
    /// configured timezone, even after skipped-hour adjustment.
    #[error("local time {datetime} cannot be mapped in zone {zone}")]
    UnmappableLocalTime {
        /// The naive wall-clock instant that failed to map.
        datetime: NaiveDateTime,
        /// The IANA zone name the mapping was attempted in.
        zone: String,
    },

    /// Returned when a year predates the rule set's validity range.
    #[error("year {year} predates the supported rule set (min {min})")]
    UnsupportedYear {
        /// The year that was requested.
        year: i32,
        /// The first year the rule set is defined for.
        min: i32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_invalid_month() {
        let err = RulesError::InvalidMonth { month: 13 };
        assert_eq!(err.to_string(), "invalid month: 13 (must be 1..=12)");
    }

    #[test]
    fn error_nonexistent_weekday() {
        let err = RulesError::NonexistentWeekday {
            year: 2024,
            month: 2,
            week: 5,
        };
        assert_eq!(
            err.to_string(),
            "2024-02 has no week-5 occurrence of the requested weekday"
        );
    }

    #[test]
    fn error_unsupported_year() {
        let err = RulesError::UnsupportedYear {
            year: 2006,
            min: 2007,
        };
        assert_eq!(
            err.to_string(),
            "year 2006 predates the supported rule set (min 2007)"
        );
    }

    #[test]
    fn error_is_std_error() {
        fn assert_impl<T: std::error::Error>() {}
        assert_impl::<RulesError>();
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<RulesError>();
    }
}
