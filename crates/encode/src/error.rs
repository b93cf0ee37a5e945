//! Error types for the almanac-encode crate.

/// Error type for all fallible operations in the almanac-encode crate.
///
/// This enum covers field-range violations during encoding (day offsets,
/// timestamps, packed-record magnitude), holiday counts outside the
/// normalizable set, and malformed records during decoding.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EncodeError {
    /// Returned when a month number is outside the valid range 1..=12.
    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth {
        /// The invalid month number that was provided.
        month: u8,
    },

    /// Returned when a day number is outside the valid range 1..=31.
    #[error("invalid day: {day} (must be 1..=31)")]
    InvalidDay {
        /// The invalid day number that was provided.
        day: u8,
    },

    /// Returned when a day-of-month does not fit the 3-bit offset field
    /// relative to its anchor day.
    #[error("day {day} out of range for anchor {anchor} (offset must be 0..=7)")]
    DayOffsetOutOfRange {
        /// The day-of-month that was being encoded.
        day: u8,
        /// The anchor day subtracted before packing.
        anchor: u8,
    },

    /// Returned when a timestamp does not fit the declared field width.
    #[error("timestamp {value} does not fit a {bits}-bit field")]
    TimestampOutOfRange {
        /// The timestamp (in seconds) that was being encoded.
        value: i64,
        /// The width of the target field in bits.
        bits: u8,
    },

    /// Returned when a year's holiday count cannot be normalized to the
    /// fixed slot count. Only counts of 9, 10, and 11 are supported.
    #[error("unsupported holiday count: {count} (must be 9, 10, or 11)")]
    UnsupportedHolidayCount {
        /// The number of holidays that was provided.
        count: usize,
    },

    /// Returned when a packed value does not fit the record's declared
    /// hex-digit width.
    #[error("packed value does not fit a {width}-digit record")]
    RecordOverflow {
        /// The record width in hex digits.
        width: usize,
    },

    /// Returned when a record's length does not match the scheme's width.
    #[error("invalid record length: expected {expected} hex digits, got {got}")]
    InvalidRecordLength {
        /// The record width the scheme declares.
        expected: usize,
        /// The length of the record that was provided.
        got: usize,
    },

    /// Returned when a record contains non-hexadecimal characters.
    #[error("record is not valid hexadecimal: {reason}")]
    InvalidHex {
        /// Description of the parse failure.
        reason: String,
    },

    /// Returned when a decoded slot holds a value that is not a valid
    /// packed month/day pair.
    #[error("invalid packed slot value: {value:#05x}")]
    InvalidSlot {
        /// The 9-bit slot value that could not be decoded.
        value: u16,
    },
}
