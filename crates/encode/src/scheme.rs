//! Versioned record layouts.
//!
//! Each scheme is an explicit strategy selected once per generation run.
//! The scheme fixes the record width, so a table built under one scheme
//! can be indexed by `(year - start_year) * record_width` downstream.

/// Bit layout for one year's DST transition record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DstScheme {
    /// Day-of-month offsets relative to fixed anchor days, packed as two
    /// 3-bit fields into a single byte (2 hex digits per year).
    ///
    /// Loses time-of-day; date-of-month only.
    DayOffset,
    /// Whole Unix seconds per instant, two zero-padded 40-bit fields
    /// (20 hex digits per year).
    AbsoluteSeconds,
    /// Seconds relative to a fixed reference epoch, two zero-padded
    /// 32-bit fields (16 hex digits per year). The narrower field covers
    /// roughly 136 years from the reference instant.
    EpochRelative {
        /// The reference instant in whole Unix seconds, normally a
        /// localized midnight on a chosen reference year.
        reference_epoch: i64,
    },
}

impl DstScheme {
    /// Returns the fixed number of hex digits one year occupies.
    pub fn record_width(&self) -> usize {
        match self {
            DstScheme::DayOffset => 2,
            DstScheme::AbsoluteSeconds => 20,
            DstScheme::EpochRelative { .. } => 16,
        }
    }
}

/// Bit layout for one year's holiday record.
///
/// Both variants pack each date as `(month << 5) | day` into a 9-bit slot
/// and fold all slots MSB-first into one big integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HolidayScheme {
    /// Legacy unpadded layout, zero-filled to 24 hex digits. Assumes a
    /// fixed slot count and is unsafe for years whose holiday count
    /// deviates from it; kept for compatibility with existing tables.
    Packed,
    /// Normalized layout: every year is padded to exactly 11 slots
    /// (26 hex digits), with slot value 0 as the "no holiday" sentinel.
    Padded,
}

impl HolidayScheme {
    /// Returns the fixed number of hex digits one year occupies.
    pub fn record_width(&self) -> usize {
        match self {
            HolidayScheme::Packed => 24,
            HolidayScheme::Padded => 26,
        }
    }
}
