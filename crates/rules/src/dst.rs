//! US DST transition resolution.

use chrono::{DateTime, Datelike, Duration, LocalResult, NaiveDate, TimeZone, Weekday};
use chrono_tz::Tz;

use crate::error::RulesError;
use crate::source::DstSource;
use crate::weekday::nth_weekday_of_month;

/// First year the post-2007 US statutory transition rule applies.
pub const US_RULE_FIRST_YEAR: i32 = 2007;

/// An nth-weekday-of-month civil transition rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstRule {
    /// Month of the transition (1..=12).
    pub month: u32,
    /// Week ordinal within the month (1-based).
    pub week: u8,
    /// Weekday the transition falls on.
    pub weekday: Weekday,
    /// Local wall-clock hour of the transition.
    pub hour: u32,
}

impl DstRule {
    /// The post-2007 US start rule: 2nd Sunday of March, 02:00 local.
    pub fn us_start() -> Self {
        Self {
            month: 3,
            week: 2,
            weekday: Weekday::Sun,
            hour: 2,
        }
    }

    /// The post-2007 US end rule: 1st Sunday of November, 02:00 local.
    pub fn us_end() -> Self {
        Self {
            month: 11,
            week: 1,
            weekday: Weekday::Sun,
            hour: 2,
        }
    }

    /// Resolves this rule's calendar date for the given year.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the rule's fields are out of range or
    /// the month has no matching occurrence.
    pub fn date_for(&self, year: i32) -> Result<NaiveDate, RulesError> {
        nth_weekday_of_month(year, self.month, self.weekday, self.week)
    }
}

/// A year's DST transition pair, localized to the rule zone.
///
/// Invariant: `start < end`, both within the same year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstTransition {
    start: DateTime<Tz>,
    end: DateTime<Tz>,
}

impl DstTransition {
    /// Creates a new transition pair.
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        debug_assert!(start < end);
        Self { start, end }
    }

    /// Returns the DST start instant.
    pub fn start(&self) -> DateTime<Tz> {
        self.start
    }

    /// Returns the DST end instant.
    pub fn end(&self) -> DateTime<Tz> {
        self.end
    }
}

/// Resolver for the post-2007 US statutory DST rules in a fixed IANA zone.
///
/// Localization goes through the zone's full historical offset rules
/// (the tzdata oracle), never a fixed UTC offset.
#[derive(Debug, Clone)]
pub struct UsDstRules {
    zone: Tz,
    start_rule: DstRule,
    end_rule: DstRule,
}

impl UsDstRules {
    /// Creates a resolver for the given zone with the statutory US rules.
    pub fn new(zone: Tz) -> Self {
        Self {
            zone,
            start_rule: DstRule::us_start(),
            end_rule: DstRule::us_end(),
        }
    }

    /// Overrides the transition rules, for zones or eras with different
    /// civil definitions.
    pub fn with_rules(mut self, start_rule: DstRule, end_rule: DstRule) -> Self {
        self.start_rule = start_rule;
        self.end_rule = end_rule;
        self
    }

    /// Returns the configured zone.
    pub fn zone(&self) -> Tz {
        self.zone
    }

    /// Localizes a rule's wall-clock instant for the given year.
    ///
    /// The start rule's nominal wall time falls in the skipped hour; it
    /// resolves to the instant the clocks jump to. An ambiguous wall time
    /// resolves to its earliest mapping.
    fn localize(&self, rule: &DstRule, year: i32) -> Result<DateTime<Tz>, RulesError> {
        let date = rule.date_for(year)?;
        let naive = date
            .and_hms_opt(rule.hour, 0, 0)
            .ok_or(RulesError::InvalidDate {
                year,
                month: rule.month,
                day: date.day(),
            })?;
        match self.zone.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt),
            LocalResult::Ambiguous(earliest, _) => Ok(earliest),
            LocalResult::None => {
                // Skipped hour: the next wall hour exists and denotes the
                // same instant the clocks jump to.
                match self.zone.from_local_datetime(&(naive + Duration::hours(1))) {
                    LocalResult::Single(dt) => Ok(dt),
                    _ => Err(RulesError::UnmappableLocalTime {
                        datetime: naive,
                        zone: self.zone.name().to_string(),
                    }),
                }
            }
        }
    }
}

impl DstSource for UsDstRules {
    fn resolve_dst(&self, year: i32) -> Result<DstTransition, RulesError> {
        if year < US_RULE_FIRST_YEAR {
            return Err(RulesError::UnsupportedYear {
                year,
                min: US_RULE_FIRST_YEAR,
            });
        }
        let start = self.localize(&self.start_rule, year)?;
        let end = self.localize(&self.end_rule, year)?;
        Ok(DstTransition::new(start, end))
    }
}
