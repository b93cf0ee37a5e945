//! # almanac-table
//!
//! Year-range driver for lookup-table generation.
//!
//! For each year of `[start_year, start_year + num_years)` in ascending
//! order, resolves calendar facts through an [`almanac_rules`] source,
//! encodes them under the chosen [`almanac_encode`] scheme, and appends
//! the fixed-width record to the output blob. The blob length is always
//! `num_years * record_width`, so the downstream consumer indexes it by
//! `(year - start_year) * record_width`.
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Year-range configuration |
//! | `build` | The per-year resolve/encode/concatenate loop |
//! | `result` | Output blob with assertion lines |
//! | `error` | Error types |

mod build;
mod config;
mod error;
mod result;

pub use build::{build_dst_table, build_holiday_table};
pub use config::TableConfig;
pub use error::TableError;
pub use result::TableOutput;
