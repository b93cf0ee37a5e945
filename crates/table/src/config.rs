//! Configuration for table generation.

use crate::error::TableError;

/// Year range for one generation run.
///
/// Covers `[start_year, start_year + num_years)` in ascending order.
///
/// # Example
///
/// ```
/// use almanac_table::TableConfig;
///
/// let config = TableConfig::new(2023, 101).with_assertions(true);
/// assert_eq!(config.end_year(), 2124);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TableConfig {
    start_year: i32,
    num_years: usize,
    assertions: bool,
}

impl TableConfig {
    /// Creates a configuration for the given range. Assertion emission
    /// defaults to off.
    pub fn new(start_year: i32, num_years: usize) -> Self {
        Self {
            start_year,
            num_years,
            assertions: false,
        }
    }

    /// Enables or disables per-year assertion lines in the output.
    pub fn with_assertions(mut self, assertions: bool) -> Self {
        self.assertions = assertions;
        self
    }

    /// Returns the first year of the range.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the number of years in the range.
    pub fn num_years(&self) -> usize {
        self.num_years
    }

    /// Returns whether assertion lines are emitted.
    pub fn assertions(&self) -> bool {
        self.assertions
    }

    /// Returns the exclusive end year of the range.
    pub fn end_year(&self) -> i32 {
        self.start_year + self.num_years as i32
    }

    /// Returns the years of the range in ascending order.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        self.start_year..self.end_year()
    }

    /// Validates this configuration.
    ///
    /// Checks that the range holds at least one year and does not
    /// overflow the year datatype.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.num_years == 0 {
            return Err(TableError::InvalidConfig {
                reason: "num_years must be at least 1".to_string(),
            });
        }
        let end = i64::from(self.start_year) + self.num_years as i64;
        if self.num_years > i32::MAX as usize || end > i64::from(i32::MAX) {
            return Err(TableError::InvalidConfig {
                reason: format!(
                    "year range {}..{} overflows",
                    self.start_year, end
                ),
            });
        }
        Ok(())
    }
}
