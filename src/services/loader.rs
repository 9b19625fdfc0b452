//! Statement loading service
//!
//! Reads a two-column (label, value) export into [`LineItems`]. Extra columns
//! are ignored, short rows are skipped with a warning, and a UTF-8 byte-order
//! mark at the start of the file is tolerated.

use std::path::Path;

use csv::ReaderBuilder;
use tracing::{debug, warn};

use crate::error::{NormalizerError, NormalizerResult};
use crate::models::{parse_monetary_value, LineItems};

const UTF8_BOM: char = '\u{feff}';

/// A record that was dropped because it had fewer than two columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the source file
    pub row_number: usize,
    /// The fields that were present
    pub fields: Vec<String>,
}

/// Result of loading one statement file
#[derive(Debug, Clone, Default)]
pub struct LoadedStatement {
    /// Normalized label -> amount mapping
    pub items: LineItems,
    /// Rows skipped for having too few columns
    pub skipped: Vec<SkippedRow>,
}

/// Load a statement file from disk
///
/// # Errors
///
/// Returns [`NormalizerError::Load`] if the file is missing, unreadable, not
/// valid UTF-8, or not parseable as delimited text.
pub fn load_statement(path: impl AsRef<Path>) -> NormalizerResult<LoadedStatement> {
    let path = path.as_ref();

    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => NormalizerError::load(path, "file not found"),
        _ => NormalizerError::load(path, e.to_string()),
    })?;

    let content = String::from_utf8(bytes).map_err(|e| NormalizerError::load(path, e.to_string()))?;

    let source = display_name(path);
    parse_statement(&content, &source).map_err(|reason| NormalizerError::load(path, reason))
}

/// Parse statement text already in memory
///
/// `source` names the file in warnings. Fails only on malformed delimited
/// text; short rows and unparseable amounts are absorbed.
pub fn parse_statement(content: &str, source: &str) -> Result<LoadedStatement, String> {
    let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut loaded = LoadedStatement::default();

    for (idx, result) in reader.records().enumerate() {
        let record = result.map_err(|e| format!("Error reading CSV record: {}", e))?;
        let row_number = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(idx + 1);

        if record.len() >= 2 {
            let label = &record[0];
            let amount = parse_monetary_value(record[1].trim());
            loaded.items.insert(label, amount);
        } else if !record.is_empty() {
            let fields: Vec<String> = record.iter().map(String::from).collect();
            warn!(
                "Skipping row {} in '{}' (insufficient columns): {:?}",
                row_number, source, fields
            );
            loaded.skipped.push(SkippedRow { row_number, fields });
        }
    }

    debug!(
        source,
        labels = loaded.items.len(),
        skipped = loaded.skipped.len(),
        "Loaded statement"
    );

    Ok(loaded)
}

/// File name used to identify a statement in output and messages
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
