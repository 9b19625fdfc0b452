//! CLI command handler for directory batch processing
//!
//! Aggregates every statement in a directory into one consolidated CSV and
//! prints a preview of the first rows.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::display::format_table_preview;
use crate::error::NormalizerResult;
use crate::export::{ensure_csv_extension, write_table_file};
use crate::models::FormulaSpecification;
use crate::services::aggregate_directory;

/// Arguments for the batch command
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Directory containing the statement CSV files
    pub directory: PathBuf,
    /// Output CSV file name (".csv" is appended if missing)
    #[arg(short, long)]
    pub output: Option<String>,
    /// Number of rows to show in the preview
    #[arg(long)]
    pub preview: Option<usize>,
}

/// Handle the batch command, returning the path written
pub fn handle_batch_command(
    spec: &FormulaSpecification,
    settings: &Settings,
    args: &BatchArgs,
) -> NormalizerResult<PathBuf> {
    let result = aggregate_directory(&args.directory, spec)?;

    let output_name = args
        .output
        .as_deref()
        .unwrap_or(&settings.default_output_filename);
    let output_path = ensure_csv_extension(output_name);

    write_table_file(&result.table, &settings.currency_symbol, &output_path)?;

    let preview_rows = args.preview.unwrap_or(settings.preview_rows);
    println!("Processed Data Preview (First {} rows)", preview_rows);
    println!(
        "{}",
        format_table_preview(&result.table, &settings.currency_symbol, preview_rows)
    );
    println!();
    println!(
        "Successfully processed {} CSV file(s).",
        result.processed()
    );
    if !result.failed.is_empty() {
        println!("  Zeroed (failed to load): {}", result.failed.len());
        for failed in &result.failed {
            println!("    {}: {}", failed.filename, failed.reason);
        }
    }
    println!("Saved consolidated table to '{}'", output_path.display());

    Ok(output_path)
}
