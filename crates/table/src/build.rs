//! Year-range drivers: resolve, encode, concatenate.

use chrono::Datelike;
use tracing::{debug, info};

use almanac_encode::{encode_dst, encode_holidays, DstFacts, DstScheme, HolidayScheme, MonthDay};
use almanac_rules::{DstSource, DstTransition, HolidaySource};

use crate::config::TableConfig;
use crate::error::TableError;
use crate::result::TableOutput;

/// Builds a DST transition table for the configured year range.
///
/// Records are concatenated in ascending year order with no gaps; the
/// blob length is always `num_years * scheme.record_width()`. When
/// assertion emission is on, each year also yields one line of the form
/// `assertDSTStartEndEq(<year>, <start>, <end>)` carrying the decoded
/// boundary values of the active scheme, to seed the downstream
/// consumer's test suite.
///
/// # Errors
///
/// Returns [`TableError`] if the configuration is invalid or any year
/// fails to resolve or encode; no partial table is returned.
pub fn build_dst_table(
    source: &impl DstSource,
    scheme: DstScheme,
    config: &TableConfig,
) -> Result<TableOutput, TableError> {
    config.validate()?;

    let width = scheme.record_width();
    let mut hex = String::with_capacity(config.num_years() * width);
    let mut assertions = Vec::new();

    for year in config.years() {
        let transition = source
            .resolve_dst(year)
            .map_err(|e| TableError::Resolve { year, source: e })?;
        let facts = dst_facts(&transition);
        let record =
            encode_dst(&facts, scheme).map_err(|e| TableError::Encode { year, source: e })?;
        debug!(year, record = %record, "encoded DST record");
        if config.assertions() {
            let (start, end) = boundary_values(&facts, scheme);
            assertions.push(format!("assertDSTStartEndEq({year}, {start}, {end})"));
        }
        hex.push_str(&record);
    }

    info!(
        start_year = config.start_year(),
        num_years = config.num_years(),
        blob_len = hex.len(),
        "built DST table"
    );
    Ok(TableOutput::new(
        hex,
        assertions,
        width,
        config.start_year(),
        config.num_years(),
    ))
}

/// Builds a holiday table for the configured year range.
///
/// Same concatenation contract as [`build_dst_table`]; year order in
/// the blob matches ascending numeric year order even when a year's
/// holiday count required padding.
///
/// # Errors
///
/// Returns [`TableError`] if the configuration is invalid or any year
/// fails to resolve or encode; no partial table is returned.
pub fn build_holiday_table(
    source: &impl HolidaySource,
    scheme: HolidayScheme,
    config: &TableConfig,
) -> Result<TableOutput, TableError> {
    config.validate()?;

    let width = scheme.record_width();
    let mut hex = String::with_capacity(config.num_years() * width);

    for year in config.years() {
        let holidays = source
            .resolve_holidays(year)
            .map_err(|e| TableError::Resolve { year, source: e })?;
        let dates = holidays
            .iter()
            .map(|h| MonthDay::new(h.date.month() as u8, h.date.day() as u8))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| TableError::Encode { year, source: e })?;
        let record =
            encode_holidays(&dates, scheme).map_err(|e| TableError::Encode { year, source: e })?;
        debug!(year, count = dates.len(), record = %record, "encoded holiday record");
        hex.push_str(&record);
    }

    info!(
        start_year = config.start_year(),
        num_years = config.num_years(),
        blob_len = hex.len(),
        "built holiday table"
    );
    Ok(TableOutput::new(
        hex,
        Vec::new(),
        width,
        config.start_year(),
        config.num_years(),
    ))
}

/// Reduces a localized transition pair to the plain integers the
/// encoders consume.
fn dst_facts(transition: &DstTransition) -> DstFacts {
    DstFacts {
        start_day: transition.start().day() as u8,
        end_day: transition.end().day() as u8,
        start_unix: transition.start().timestamp(),
        end_unix: transition.end().timestamp(),
    }
}

/// Returns the boundary values an assertion line carries for the scheme:
/// days-of-month, absolute seconds, or epoch-relative seconds.
fn boundary_values(facts: &DstFacts, scheme: DstScheme) -> (i64, i64) {
    match scheme {
        DstScheme::DayOffset => (i64::from(facts.start_day), i64::from(facts.end_day)),
        DstScheme::AbsoluteSeconds => (facts.start_unix, facts.end_unix),
        DstScheme::EpochRelative { reference_epoch } => (
            facts.start_unix - reference_epoch,
            facts.end_unix - reference_epoch,
        ),
    }
}
