use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level almanac configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Year-range settings shared by both table kinds.
    #[serde(default)]
    pub table: TableToml,

    /// DST table settings.
    #[serde(default)]
    pub dst: DstToml,

    /// Holiday table settings.
    #[serde(default)]
    pub holidays: HolidaysToml,
}

impl AlmanacConfig {
    /// Loads a configuration file, or the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config: {}", path.display()))
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TableToml {
    #[serde(default = "default_start_year")]
    pub start_year: i32,
    #[serde(default = "default_num_years")]
    pub num_years: usize,
}

impl Default for TableToml {
    fn default() -> Self {
        Self {
            start_year: default_start_year(),
            num_years: default_num_years(),
        }
    }
}

fn default_start_year() -> i32 {
    2023
}
fn default_num_years() -> usize {
    101
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DstToml {
    /// IANA timezone the transition instants are localized to.
    #[serde(default = "default_zone")]
    pub zone: String,
    /// Encoding scheme: day-offset, absolute, or epoch-relative.
    #[serde(default = "default_dst_scheme")]
    pub scheme: String,
    /// Reference year for the epoch-relative scheme; the reference epoch
    /// is local midnight January 1 of this year in `zone`.
    #[serde(default = "default_reference_year")]
    pub reference_year: i32,
    /// Emit per-year assertion lines before the blob.
    #[serde(default)]
    pub assertions: bool,
}

impl Default for DstToml {
    fn default() -> Self {
        Self {
            zone: default_zone(),
            scheme: default_dst_scheme(),
            reference_year: default_reference_year(),
            assertions: false,
        }
    }
}

fn default_zone() -> String {
    "America/New_York".to_string()
}
fn default_dst_scheme() -> String {
    "epoch-relative".to_string()
}
fn default_reference_year() -> i32 {
    2020
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HolidaysToml {
    /// Encoding scheme: packed or padded.
    #[serde(default = "default_holiday_scheme")]
    pub scheme: String,
}

impl Default for HolidaysToml {
    fn default() -> Self {
        Self {
            scheme: default_holiday_scheme(),
        }
    }
}

fn default_holiday_scheme() -> String {
    "padded".to_string()
}
