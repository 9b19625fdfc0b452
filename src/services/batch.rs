//! Directory batch aggregation
//!
//! Runs the loader and transformer over every `.csv` entry of a directory and
//! collects one row per entry. A file that fails to load contributes a zeroed
//! row; a missing or empty directory fails the whole batch.

use std::path::{Path, PathBuf};

use tracing::{error, info};

use crate::error::{NormalizerError, NormalizerResult};
use crate::models::{ConsolidatedTable, FormulaSpecification};
use crate::services::loader::{display_name, load_statement};
use crate::services::transform::transform_statement;

/// A source file whose row was zeroed because it could not be loaded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedFile {
    pub filename: String,
    pub reason: String,
}

/// Result of a completed batch run
#[derive(Debug, Clone)]
pub struct BatchResult {
    /// One row per candidate file, in directory-listing order
    pub table: ConsolidatedTable,
    /// Files that were substituted with zero rows
    pub failed: Vec<FailedFile>,
}

impl BatchResult {
    /// Number of files that produced a row
    pub fn processed(&self) -> usize {
        self.table.len()
    }
}

/// Whether a directory entry name qualifies as batch input
pub fn is_csv_name(name: &str) -> bool {
    name.to_lowercase().ends_with(".csv")
}

/// List `.csv` entries of a directory (non-recursive, listing order)
pub fn find_csv_files(dir: &Path) -> NormalizerResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Err(NormalizerError::DirectoryNotFound(dir.to_path_buf()));
    }

    let entries = std::fs::read_dir(dir).map_err(|e| {
        NormalizerError::Io(format!("Failed to read directory '{}': {}", dir.display(), e))
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let entry = entry?;
        if is_csv_name(&entry.file_name().to_string_lossy()) {
            files.push(entry.path());
        }
    }
    Ok(files)
}

/// Aggregate every statement in `dir` into one table
///
/// # Errors
///
/// Returns [`NormalizerError::DirectoryNotFound`] or
/// [`NormalizerError::NoCsvFiles`]; per-file failures are not errors.
pub fn aggregate_directory(
    dir: impl AsRef<Path>,
    spec: &FormulaSpecification,
) -> NormalizerResult<BatchResult> {
    let dir = dir.as_ref();
    let files = find_csv_files(dir)?;
    if files.is_empty() {
        return Err(NormalizerError::NoCsvFiles(dir.to_path_buf()));
    }

    let mut table = ConsolidatedTable::new(spec);
    let mut failed = Vec::new();

    for path in &files {
        let filename = display_name(path);
        info!("Processing file: {}...", filename);

        let items = match load_statement(path) {
            Ok(loaded) => Some(loaded.items),
            Err(e) => {
                error!("{}", e);
                failed.push(FailedFile {
                    filename: filename.clone(),
                    reason: e.to_string(),
                });
                None
            }
        };

        table.push(transform_statement(&filename, items.as_ref(), spec));
    }

    info!(
        processed = table.len(),
        failed = failed.len(),
        "Successfully processed {} CSV file(s)",
        table.len()
    );

    Ok(BatchResult { table, failed })
}
