//! CSV Export functionality
//!
//! Serializes a consolidated table as a header row followed by one
//! currency-formatted row per statement.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{NormalizerError, NormalizerResult};
use crate::models::ConsolidatedTable;

/// Write the table as CSV
pub fn write_table_csv<W: Write>(
    table: &ConsolidatedTable,
    currency_symbol: &str,
    writer: W,
) -> NormalizerResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(table.headers())?;
    for row in table.formatted_rows(currency_symbol) {
        csv_writer.write_record(&row)?;
    }

    csv_writer
        .flush()
        .map_err(|e| NormalizerError::Export(e.to_string()))?;
    Ok(())
}

/// Render the table as an in-memory CSV string
pub fn table_to_csv_string(
    table: &ConsolidatedTable,
    currency_symbol: &str,
) -> NormalizerResult<String> {
    let mut buffer = Vec::new();
    write_table_csv(table, currency_symbol, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| NormalizerError::Export(e.to_string()))
}

/// Write the table to a file, replacing any existing file
pub fn write_table_file(
    table: &ConsolidatedTable,
    currency_symbol: &str,
    path: &Path,
) -> NormalizerResult<()> {
    let file = std::fs::File::create(path).map_err(|e| {
        NormalizerError::Export(format!(
            "Error writing to output file '{}': {}",
            path.display(),
            e
        ))
    })?;
    write_table_csv(table, currency_symbol, file)
}

/// Append `.csv` to an output name that lacks it
pub fn ensure_csv_extension(name: &str) -> PathBuf {
    if name.ends_with(".csv") {
        PathBuf::from(name)
    } else {
        PathBuf::from(format!("{}.csv", name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Formula, FormulaEntry, FormulaSpecification, StatementRow};
    use tempfile::TempDir;

    fn sample_table() -> ConsolidatedTable {
        let spec = FormulaSpecification::new(vec![
            FormulaEntry::new("Net Income", Formula::direct("net income")),
            FormulaEntry::new("Total Owners' Equity", Formula::direct("total capital")),
        ]);
        let mut table = ConsolidatedTable::new(&spec);
        table.push(StatementRow {
            filename: "a.csv".into(),
            values: vec![1000.0, -12.5],
        });
        table.push(StatementRow {
            filename: "north, east.csv".into(),
            values: vec![0.0, 0.0],
        });
        table
    }

    #[test]
    fn test_table_to_csv_string() {
        let csv_string = table_to_csv_string(&sample_table(), "$").unwrap();
        let lines: Vec<&str> = csv_string.lines().collect();

        assert_eq!(lines[0], "Filename,Net Income,Total Owners' Equity");
        assert_eq!(lines[1], "a.csv,$1000.00,$-12.50");
        assert_eq!(lines[2], "\"north, east.csv\",$0.00,$0.00");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn test_write_table_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.csv");

        write_table_file(&sample_table(), "$", &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with("Filename,Net Income"));
        assert!(written.contains("a.csv,$1000.00"));
    }

    #[test]
    fn test_write_to_missing_directory_is_export_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("out.csv");

        let err = write_table_file(&sample_table(), "$", &path).unwrap_err();
        assert!(matches!(err, NormalizerError::Export(_)));
    }

    #[test]
    fn test_ensure_csv_extension() {
        assert_eq!(ensure_csv_extension("report"), PathBuf::from("report.csv"));
        assert_eq!(ensure_csv_extension("report.csv"), PathBuf::from("report.csv"));
    }
}
