use anyhow::{Context, Result};
use tracing::info;

use almanac_rules::NyseCalendar;
use almanac_table::{build_holiday_table, TableConfig};

use crate::cli::HolidaysArgs;
use crate::config::AlmanacConfig;
use crate::convert;

/// Run the `holidays` subcommand.
pub fn run(args: HolidaysArgs) -> Result<()> {
    let config = AlmanacConfig::load(args.config.as_deref())?;

    let start_year = args.start_year.unwrap_or(config.table.start_year);
    let num_years = args.years.unwrap_or(config.table.num_years);
    let scheme_name = args.scheme.as_deref().unwrap_or(&config.holidays.scheme);
    let scheme = convert::parse_holiday_scheme(scheme_name)?;

    info!(start_year, num_years, scheme = scheme_name, "generating holiday table");

    let table_config = TableConfig::new(start_year, num_years);
    let source = NyseCalendar::new();
    let output = build_holiday_table(&source, scheme, &table_config)
        .context("holiday table generation failed")?;

    println!("{}", output.hex());
    Ok(())
}
