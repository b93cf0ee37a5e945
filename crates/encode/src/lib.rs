//! # almanac-encode
//!
//! Fixed-width record encoding for embedded calendar lookup tables.
//!
//! Every scheme turns one year's resolved facts into a hexadecimal record
//! of a constant width, so a downstream decoder can index a concatenated
//! table by `(year - start_year) * record_width` without any per-year
//! framing. Encoders are total for in-range inputs and fail loudly on
//! anything that would not fit its declared field width.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `scheme` | Versioned record layouts and their widths |
//! | `dst` | DST transition records (day-offset, absolute, epoch-relative) |
//! | `holiday` | Holiday records (legacy packed, normalized padded) |
//! | `error` | Error types |

mod dst;
mod error;
mod holiday;
mod scheme;

pub use dst::{
    decode_absolute, decode_day_offsets, decode_epoch_relative, encode_dst, DstFacts,
    END_ANCHOR_DAY, START_ANCHOR_DAY,
};
pub use error::EncodeError;
pub use holiday::{
    decode_packed, decode_padded, encode_holidays, normalize_slots, MonthDay, SLOT_BITS,
    SLOT_COUNT,
};
pub use scheme::{DstScheme, HolidayScheme};
