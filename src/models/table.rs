//! Output rows and the consolidated table
//!
//! Values stay numeric until the table is finalized for display or export.

use super::formula::FormulaSpecification;
use super::money::format_currency;

/// Header of the leading source-file column
pub const FILENAME_HEADER: &str = "Filename";

/// One output row: the originating file name and one value per formula
#[derive(Debug, Clone, PartialEq)]
pub struct StatementRow {
    /// Name of the source file, independent of whether loading succeeded
    pub filename: String,
    /// Formula values in specification order
    pub values: Vec<f64>,
}

impl StatementRow {
    /// Total cell count including the filename column
    pub fn width(&self) -> usize {
        self.values.len() + 1
    }

    /// Render the row as display cells
    pub fn formatted(&self, currency_symbol: &str) -> Vec<String> {
        std::iter::once(self.filename.clone())
            .chain(
                self.values
                    .iter()
                    .map(|v| format_currency(*v, currency_symbol)),
            )
            .collect()
    }
}

/// Header row plus one [`StatementRow`] per processed file
#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedTable {
    headers: Vec<String>,
    rows: Vec<StatementRow>,
}

impl ConsolidatedTable {
    /// Create an empty table whose header is fixed by the specification
    pub fn new(spec: &FormulaSpecification) -> Self {
        let headers = std::iter::once(FILENAME_HEADER)
            .chain(spec.headers())
            .map(String::from)
            .collect();
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn push(&mut self, row: StatementRow) {
        debug_assert_eq!(row.width(), self.headers.len());
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[StatementRow] {
        &self.rows
    }

    /// Find the row produced for a given source file
    pub fn row_for(&self, filename: &str) -> Option<&StatementRow> {
        self.rows.iter().find(|r| r.filename == filename)
    }

    /// All rows rendered as currency strings
    pub fn formatted_rows(&self, currency_symbol: &str) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| row.formatted(currency_symbol))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
