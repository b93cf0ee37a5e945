//! Output type for one table-generation run.

/// Result of one table-generation run.
///
/// Holds the concatenated hex blob plus the per-year assertion lines
/// (empty when assertion emission is off).
#[derive(Debug, Clone)]
pub struct TableOutput {
    hex: String,
    assertions: Vec<String>,
    record_width: usize,
    start_year: i32,
    num_years: usize,
}

impl TableOutput {
    /// Creates a new `TableOutput`.
    pub(crate) fn new(
        hex: String,
        assertions: Vec<String>,
        record_width: usize,
        start_year: i32,
        num_years: usize,
    ) -> Self {
        Self {
            hex,
            assertions,
            record_width,
            start_year,
            num_years,
        }
    }

    /// Returns the concatenated hex blob.
    pub fn hex(&self) -> &str {
        &self.hex
    }

    /// Returns the per-year assertion lines.
    pub fn assertions(&self) -> &[String] {
        &self.assertions
    }

    /// Returns the scheme's record width in hex digits.
    pub fn record_width(&self) -> usize {
        self.record_width
    }

    /// Returns the first year in the table.
    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    /// Returns the number of year records in the table.
    pub fn num_years(&self) -> usize {
        self.num_years
    }

    /// Returns the record for one year, by position.
    ///
    /// This is the same fixed-stride indexing the downstream decoder
    /// uses: `(year - start_year) * record_width`.
    pub fn record(&self, year: i32) -> Option<&str> {
        let index = usize::try_from(year.checked_sub(self.start_year)?).ok()?;
        if index >= self.num_years {
            return None;
        }
        let offset = index * self.record_width;
        self.hex.get(offset..offset + self.record_width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_indexing() {
        let output = TableOutput::new("aabbcc".to_string(), Vec::new(), 2, 2023, 3);
        assert_eq!(output.record(2023), Some("aa"));
        assert_eq!(output.record(2024), Some("bb"));
        assert_eq!(output.record(2025), Some("cc"));
        assert_eq!(output.record(2026), None);
        assert_eq!(output.record(2022), None);
    }

    #[test]
    fn accessors() {
        let output = TableOutput::new(
            "12".to_string(),
            vec!["assertDSTStartEndEq(2024, 10, 3)".to_string()],
            2,
            2024,
            1,
        );
        assert_eq!(output.hex(), "12");
        assert_eq!(output.assertions().len(), 1);
        assert_eq!(output.record_width(), 2);
        assert_eq!(output.start_year(), 2024);
        assert_eq!(output.num_years(), 1);
    }
}
