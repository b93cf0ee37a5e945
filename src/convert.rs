//! Pure conversion functions: TOML/CLI strings -> crate API types.

use anyhow::{bail, Context, Result};
use chrono::{LocalResult, NaiveDate, TimeZone};
use chrono_tz::Tz;

use almanac_encode::{DstScheme, HolidayScheme};

/// Parses an IANA timezone name.
pub fn parse_zone(name: &str) -> Result<Tz> {
    name.parse::<Tz>()
        .map_err(|e| anyhow::anyhow!("unknown timezone {name:?}: {e}"))
}

/// Parses a DST scheme name into the corresponding strategy.
///
/// The epoch-relative scheme captures its reference epoch here, so the
/// constant is threaded explicitly rather than living in the encoder.
pub fn parse_dst_scheme(name: &str, zone: Tz, reference_year: i32) -> Result<DstScheme> {
    match name.to_lowercase().as_str() {
        "day-offset" => Ok(DstScheme::DayOffset),
        "absolute" => Ok(DstScheme::AbsoluteSeconds),
        "epoch-relative" => Ok(DstScheme::EpochRelative {
            reference_epoch: reference_epoch(zone, reference_year)?,
        }),
        other => bail!("unknown DST scheme: {other:?}"),
    }
}

/// Parses a holiday scheme name into the corresponding strategy.
pub fn parse_holiday_scheme(name: &str) -> Result<HolidayScheme> {
    match name.to_lowercase().as_str() {
        "packed" => Ok(HolidayScheme::Packed),
        "padded" => Ok(HolidayScheme::Padded),
        other => bail!("unknown holiday scheme: {other:?}"),
    }
}

/// Computes the reference epoch: local midnight January 1 of the
/// reference year in the given zone, in whole Unix seconds.
fn reference_epoch(zone: Tz, reference_year: i32) -> Result<i64> {
    let midnight = NaiveDate::from_ymd_opt(reference_year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .with_context(|| format!("invalid reference year: {reference_year}"))?;
    match zone.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => Ok(dt.timestamp()),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest.timestamp()),
        LocalResult::None => bail!(
            "reference midnight {midnight} does not exist in zone {}",
            zone.name()
        ),
    }
}
