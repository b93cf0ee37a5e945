//! Error types for the almanac-table crate.

use almanac_encode::EncodeError;
use almanac_rules::RulesError;

/// Error type for all fallible operations in the almanac-table crate.
///
/// Any failure aborts the whole generation run; a partially-correct
/// table is never produced.
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    /// Returned when the table configuration is invalid.
    #[error("invalid table config: {reason}")]
    InvalidConfig {
        /// Description of the configuration problem.
        reason: String,
    },

    /// A rule-resolution failure, annotated with the year it occurred in.
    #[error("year {year}: {source}")]
    Resolve {
        /// The year being resolved when the failure occurred.
        year: i32,
        /// The underlying resolution failure.
        source: RulesError,
    },

    /// An encoding failure, annotated with the year it occurred in.
    #[error("year {year}: {source}")]
    Encode {
        /// The year being encoded when the failure occurred.
        year: i32,
        /// The underlying encoding failure.
        source: EncodeError,
    },
}
