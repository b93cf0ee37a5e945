//! Holiday record encoding and decoding.
//!
//! Each date packs as `(month << 5) | day` into a 9-bit slot; a year's
//! slots are folded MSB-first into one big integer and rendered as a
//! fixed-width hex field. The padded scheme normalizes every year to
//! exactly [`SLOT_COUNT`] slots so the record stride is uniform.

use crate::error::EncodeError;
use crate::scheme::HolidayScheme;

/// Number of slots in a normalized (padded) holiday record.
pub const SLOT_COUNT: usize = 11;

/// Width of one packed date slot in bits.
pub const SLOT_BITS: u32 = 9;

/// A validated month/day pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Creates a new `MonthDay`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] if the month is outside 1..=12 or the day
    /// is outside 1..=31.
    pub fn new(month: u8, day: u8) -> Result<Self, EncodeError> {
        if month == 0 || month > 12 {
            return Err(EncodeError::InvalidMonth { month });
        }
        if day == 0 || day > 31 {
            return Err(EncodeError::InvalidDay { day });
        }
        Ok(Self { month, day })
    }

    /// Returns the month (1..=12).
    pub fn month(self) -> u8 {
        self.month
    }

    /// Returns the day within the month (1..=31).
    pub fn day(self) -> u8 {
        self.day
    }

    /// Returns the 9-bit packed representation `(month << 5) | day`.
    pub fn packed(self) -> u16 {
        (u16::from(self.month) << 5) | u16::from(self.day)
    }

    /// Reconstructs a `MonthDay` from a 9-bit slot value.
    ///
    /// A slot value of 0 is the "no holiday" sentinel and yields `None`.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::InvalidSlot`] if a nonzero value does not
    /// unpack to a valid month/day pair.
    pub fn from_packed(value: u16) -> Result<Option<Self>, EncodeError> {
        if value == 0 {
            return Ok(None);
        }
        let month = (value >> 5) as u8;
        let day = (value & 0b1_1111) as u8;
        Self::new(month, day)
            .map(Some)
            .map_err(|_| EncodeError::InvalidSlot { value })
    }
}

/// Normalizes a year's holiday dates to exactly [`SLOT_COUNT`] slots.
///
/// 9 dates get one zero slot in front and one at the back; 10 dates get
/// one zero slot at the back; 11 dates pass through unchanged. This is a
/// closed-world rule tuned to the counts the NYSE calendar actually
/// produces; any other count is rejected rather than extrapolated.
///
/// # Errors
///
/// Returns [`EncodeError::UnsupportedHolidayCount`] for any other count.
pub fn normalize_slots(dates: &[MonthDay]) -> Result<[u16; SLOT_COUNT], EncodeError> {
    let mut slots = [0u16; SLOT_COUNT];
    match dates.len() {
        9 => {
            for (slot, date) in slots[1..10].iter_mut().zip(dates) {
                *slot = date.packed();
            }
        }
        10 | 11 => {
            for (slot, date) in slots.iter_mut().zip(dates) {
                *slot = date.packed();
            }
        }
        count => return Err(EncodeError::UnsupportedHolidayCount { count }),
    }
    Ok(slots)
}

/// Encodes one year's holiday dates under the given scheme.
///
/// The returned string's length always equals `scheme.record_width()`.
///
/// # Errors
///
/// Returns [`EncodeError`] if the date count cannot be normalized
/// (padded scheme) or the packed value does not fit the record width
/// (legacy packed scheme).
pub fn encode_holidays(dates: &[MonthDay], scheme: HolidayScheme) -> Result<String, EncodeError> {
    let width = scheme.record_width();
    let acc = match scheme {
        HolidayScheme::Packed => fold(dates.iter().map(|d| d.packed())),
        HolidayScheme::Padded => fold(normalize_slots(dates)?.into_iter()),
    };
    if acc >> (4 * width as u32) != 0 {
        return Err(EncodeError::RecordOverflow { width });
    }
    Ok(format!("{acc:0width$x}"))
}

/// Decodes a padded record into its [`SLOT_COUNT`] slots.
///
/// Zero slots decode to `None`.
///
/// # Errors
///
/// Returns [`EncodeError`] if the record length, hex digits, or any slot
/// value are invalid.
pub fn decode_padded(record: &str) -> Result<[Option<MonthDay>; SLOT_COUNT], EncodeError> {
    let acc = parse_record(record, HolidayScheme::Padded.record_width())?;
    if acc >> (SLOT_BITS * SLOT_COUNT as u32) != 0 {
        return Err(EncodeError::RecordOverflow {
            width: HolidayScheme::Padded.record_width(),
        });
    }
    let mut slots = [None; SLOT_COUNT];
    for (i, slot) in slots.iter_mut().enumerate() {
        let shift = SLOT_BITS * (SLOT_COUNT - 1 - i) as u32;
        *slot = MonthDay::from_packed(((acc >> shift) & 0x1ff) as u16)?;
    }
    Ok(slots)
}

/// Decodes a legacy packed record, given the date count it was built with.
///
/// The unpadded layout does not record its own slot count, so the caller
/// must supply it.
///
/// # Errors
///
/// Returns [`EncodeError`] if the record is malformed or holds more bits
/// than `count` slots can account for.
pub fn decode_packed(record: &str, count: usize) -> Result<Vec<MonthDay>, EncodeError> {
    if count == 0 || count > SLOT_COUNT {
        return Err(EncodeError::UnsupportedHolidayCount { count });
    }
    let acc = parse_record(record, HolidayScheme::Packed.record_width())?;
    if acc >> (SLOT_BITS * count as u32) != 0 {
        return Err(EncodeError::RecordOverflow {
            width: HolidayScheme::Packed.record_width(),
        });
    }
    let mut dates = Vec::with_capacity(count);
    for i in 0..count {
        let shift = SLOT_BITS * (count - 1 - i) as u32;
        let value = ((acc >> shift) & 0x1ff) as u16;
        let date = MonthDay::from_packed(value)?
            .ok_or(EncodeError::InvalidSlot { value })?;
        dates.push(date);
    }
    Ok(dates)
}

fn fold(slots: impl Iterator<Item = u16>) -> u128 {
    slots.fold(0u128, |acc, v| (acc << SLOT_BITS) | u128::from(v))
}

fn parse_record(record: &str, expected: usize) -> Result<u128, EncodeError> {
    if record.len() != expected {
        return Err(EncodeError::InvalidRecordLength {
            expected,
            got: record.len(),
        });
    }
    u128::from_str_radix(record, 16).map_err(|e| EncodeError::InvalidHex {
        reason: e.to_string(),
    })
}
