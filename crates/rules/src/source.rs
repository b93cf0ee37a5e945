//! Capability traits over the authoritative rule oracles.
//!
//! Table generation depends only on these traits, so tests can substitute
//! fixed fixtures instead of the installed timezone/holiday rule data.

use crate::dst::DstTransition;
use crate::error::RulesError;
use crate::holidays::Holiday;

/// Resolves a year's DST transition pair.
pub trait DstSource {
    /// Returns the (start, end) transition instants for the given year.
    ///
    /// Resolution must be a pure function of the year for a fixed rule
    /// database version.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the year is outside the rule set's
    /// validity range or a transition instant cannot be localized.
    fn resolve_dst(&self, year: i32) -> Result<DstTransition, RulesError>;
}

/// Resolves a year's observed market holidays.
pub trait HolidaySource {
    /// Returns the chronologically sorted observed holidays for the year.
    ///
    /// Resolution must be a pure function of the year for a fixed rule
    /// database version.
    ///
    /// # Errors
    ///
    /// Returns [`RulesError`] if the year is outside the rule set's
    /// validity range.
    fn resolve_holidays(&self, year: i32) -> Result<Vec<Holiday>, RulesError>;
}
