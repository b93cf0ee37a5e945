use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Almanac embedded calendar-table generator.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Generate embedded DST and NYSE holiday lookup tables"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate a DST transition table.
    Dst(DstArgs),
    /// Generate a NYSE holiday table.
    Holidays(HolidaysArgs),
}

/// Arguments for the `dst` subcommand.
#[derive(clap::Args)]
pub struct DstArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override first year of the table from config.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Override number of years from config.
    #[arg(long)]
    pub years: Option<usize>,

    /// Override encoding scheme from config
    /// (day-offset, absolute, epoch-relative).
    #[arg(short, long)]
    pub scheme: Option<String>,

    /// Override IANA timezone from config.
    #[arg(short, long)]
    pub zone: Option<String>,

    /// Emit assertion lines before the blob.
    #[arg(short, long)]
    pub assertions: bool,
}

/// Arguments for the `holidays` subcommand.
#[derive(clap::Args)]
pub struct HolidaysArgs {
    /// Path to TOML configuration file.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override first year of the table from config.
    #[arg(long)]
    pub start_year: Option<i32>,

    /// Override number of years from config.
    #[arg(long)]
    pub years: Option<usize>,

    /// Override encoding scheme from config (packed, padded).
    #[arg(short, long)]
    pub scheme: Option<String>,
}
