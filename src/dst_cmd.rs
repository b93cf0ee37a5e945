use anyhow::{Context, Result};
use tracing::info;

use almanac_rules::UsDstRules;
use almanac_table::{build_dst_table, TableConfig};

use crate::cli::DstArgs;
use crate::config::AlmanacConfig;
use crate::convert;

/// Run the `dst` subcommand.
pub fn run(args: DstArgs) -> Result<()> {
    let config = AlmanacConfig::load(args.config.as_deref())?;

    let start_year = args.start_year.unwrap_or(config.table.start_year);
    let num_years = args.years.unwrap_or(config.table.num_years);
    let zone = convert::parse_zone(args.zone.as_deref().unwrap_or(&config.dst.zone))?;
    let scheme_name = args.scheme.as_deref().unwrap_or(&config.dst.scheme);
    let scheme = convert::parse_dst_scheme(scheme_name, zone, config.dst.reference_year)?;
    let assertions = args.assertions || config.dst.assertions;

    info!(
        start_year,
        num_years,
        zone = zone.name(),
        scheme = scheme_name,
        "generating DST table"
    );

    let table_config = TableConfig::new(start_year, num_years).with_assertions(assertions);
    let source = UsDstRules::new(zone);
    let output = build_dst_table(&source, scheme, &table_config)
        .context("DST table generation failed")?;

    for line in output.assertions() {
        println!("{line}");
    }
    println!("{}", output.hex());
    Ok(())
}
