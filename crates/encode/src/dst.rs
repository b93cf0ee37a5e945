//! DST transition record encoding and decoding.

use crate::error::EncodeError;
use crate::scheme::DstScheme;

/// Anchor day for the start offset: the earliest date a 2nd Sunday can fall on.
pub const START_ANCHOR_DAY: u8 = 8;
/// Anchor day for the end offset: the earliest date a 1st Sunday can fall on.
pub const END_ANCHOR_DAY: u8 = 1;

/// Resolved DST facts for one year, reduced to plain integers.
///
/// `start_day`/`end_day` are days-of-month of the two transition dates;
/// `start_unix`/`end_unix` are the transition instants in whole Unix
/// seconds after timezone localization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DstFacts {
    /// Day-of-month of the DST start date.
    pub start_day: u8,
    /// Day-of-month of the DST end date.
    pub end_day: u8,
    /// DST start instant, seconds since the Unix epoch.
    pub start_unix: i64,
    /// DST end instant, seconds since the Unix epoch.
    pub end_unix: i64,
}

/// Encodes one year's DST facts under the given scheme.
///
/// The returned string's length always equals `scheme.record_width()`.
///
/// # Errors
///
/// Returns [`EncodeError`] if a day-of-month does not fit its 3-bit
/// offset field or a timestamp does not fit the scheme's field width.
pub fn encode_dst(facts: &DstFacts, scheme: DstScheme) -> Result<String, EncodeError> {
    match scheme {
        DstScheme::DayOffset => {
            let start = day_offset(facts.start_day, START_ANCHOR_DAY)?;
            let end = day_offset(facts.end_day, END_ANCHOR_DAY)?;
            Ok(format!("{:02x}", (start << 3) | end))
        }
        DstScheme::AbsoluteSeconds => {
            let start = field40(facts.start_unix)?;
            let end = field40(facts.end_unix)?;
            Ok(format!("{start}{end}"))
        }
        DstScheme::EpochRelative { reference_epoch } => {
            let start = field32(facts.start_unix - reference_epoch)?;
            let end = field32(facts.end_unix - reference_epoch)?;
            Ok(format!("{start}{end}"))
        }
    }
}

/// Decodes a day-offset record back into `(start_day, end_day)`.
///
/// # Errors
///
/// Returns [`EncodeError`] if the record length, hex digits, or packed
/// value are invalid.
pub fn decode_day_offsets(record: &str) -> Result<(u8, u8), EncodeError> {
    let byte = parse_field(record, DstScheme::DayOffset.record_width())? as u8;
    if byte >= 64 {
        return Err(EncodeError::RecordOverflow {
            width: DstScheme::DayOffset.record_width(),
        });
    }
    Ok((
        (byte >> 3) + START_ANCHOR_DAY,
        (byte & 0b111) + END_ANCHOR_DAY,
    ))
}

/// Decodes an absolute-seconds record back into `(start_unix, end_unix)`.
///
/// # Errors
///
/// Returns [`EncodeError`] if the record length or hex digits are invalid.
pub fn decode_absolute(record: &str) -> Result<(i64, i64), EncodeError> {
    let width = DstScheme::AbsoluteSeconds.record_width();
    check_ascii_len(record, width)?;
    let start = parse_field(&record[..10], 10)? as i64;
    let end = parse_field(&record[10..], 10)? as i64;
    Ok((start, end))
}

/// Decodes an epoch-relative record back into absolute `(start_unix,
/// end_unix)` by adding the reference epoch back.
///
/// # Errors
///
/// Returns [`EncodeError`] if the record length or hex digits are invalid.
pub fn decode_epoch_relative(
    record: &str,
    reference_epoch: i64,
) -> Result<(i64, i64), EncodeError> {
    let width = DstScheme::EpochRelative { reference_epoch }.record_width();
    check_ascii_len(record, width)?;
    let start = parse_field(&record[..8], 8)? as i64 + reference_epoch;
    let end = parse_field(&record[8..], 8)? as i64 + reference_epoch;
    Ok((start, end))
}

fn day_offset(day: u8, anchor: u8) -> Result<u8, EncodeError> {
    let offset = day
        .checked_sub(anchor)
        .ok_or(EncodeError::DayOffsetOutOfRange { day, anchor })?;
    if offset > 7 {
        return Err(EncodeError::DayOffsetOutOfRange { day, anchor });
    }
    Ok(offset)
}

fn field40(value: i64) -> Result<String, EncodeError> {
    if value < 0 || value >= 1 << 40 {
        return Err(EncodeError::TimestampOutOfRange { value, bits: 40 });
    }
    Ok(format!("{value:010x}"))
}

fn field32(value: i64) -> Result<String, EncodeError> {
    if value < 0 || value >= 1 << 32 {
        return Err(EncodeError::TimestampOutOfRange { value, bits: 32 });
    }
    Ok(format!("{value:08x}"))
}

fn check_ascii_len(record: &str, expected: usize) -> Result<(), EncodeError> {
    if record.len() != expected {
        return Err(EncodeError::InvalidRecordLength {
            expected,
            got: record.len(),
        });
    }
    if !record.is_ascii() {
        return Err(EncodeError::InvalidHex {
            reason: "record contains non-ASCII characters".to_string(),
        });
    }
    Ok(())
}

fn parse_field(field: &str, expected: usize) -> Result<u64, EncodeError> {
    if field.len() != expected {
        return Err(EncodeError::InvalidRecordLength {
            expected,
            got: field.len(),
        });
    }
    u64::from_str_radix(field, 16).map_err(|e| EncodeError::InvalidHex {
        reason: e.to_string(),
    })
}
