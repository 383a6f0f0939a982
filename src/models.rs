/// One record of input data: an ordered mapping from column name to the raw
/// cell text, keyed by the header row of the file it came from.
///
/// Rows are immutable once built. Lookup is by column name; the column order
/// of the source file is preserved for iteration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    cells: Vec<(String, String)>,
}

impl Row {
    /// Build a row by zipping header names with record values.
    pub fn new(cells: Vec<(String, String)>) -> Self {
        Self { cells }
    }

    /// Value for `column`, or `None` if the row has no such column.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value.as_str())
    }

    /// True iff every cell is exactly the empty string. A row with a mix of
    /// empty and non-empty cells is not blank and flows into validation.
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(|(_, value)| value.is_empty())
    }

    /// Iterate `(column, value)` pairs in source-file column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Ordered concatenation of all loaded rows across all input files,
/// file-then-row order. Lives only for the duration of one invocation.
pub type Dataset = Vec<Row>;

/// One computed output row of a report. For `average-gdp` the label is the
/// country and the value is the arithmetic-mean GDP.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub label: String,
    pub value: f64,
}

impl ReportRow {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }
}

/// Output of `Reporter::generate`, input to `Reporter::format`.
pub type ReportData = Vec<ReportRow>;

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, &str)]) -> Row {
        Row::new(
            pairs
                .iter()
                .map(|(n, v)| (n.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn get_returns_cell_by_column_name() {
        let r = row(&[("country", "USA"), ("gdp", "25462")]);
        assert_eq!(r.get("country"), Some("USA"));
        assert_eq!(r.get("gdp"), Some("25462"));
        assert_eq!(r.get("population"), None);
    }

    #[test]
    fn blank_requires_every_cell_empty() {
        assert!(row(&[("country", ""), ("gdp", "")]).is_blank());
        // Partially empty rows are data and must reach validation.
        assert!(!row(&[("country", "USA"), ("gdp", "")]).is_blank());
    }

    #[test]
    fn iter_preserves_column_order() {
        let r = row(&[("b", "2"), ("a", "1")]);
        let names: Vec<&str> = r.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["b", "a"]);
    }
}
