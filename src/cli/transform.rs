//! CLI command handler for single-file transformation
//!
//! Loads one statement, applies the formula specification and writes a
//! one-row CSV.

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::NormalizerResult;
use crate::export::write_table_file;
use crate::models::{ConsolidatedTable, FormulaSpecification};
use crate::services::loader::{display_name, load_statement};
use crate::services::transform_statement;

/// Arguments for the transform command
#[derive(Args, Debug)]
pub struct TransformArgs {
    /// Path to the input CSV file (e.g., input.csv)
    pub input: PathBuf,
    /// Path for the output CSV file (e.g., output.csv)
    pub output: PathBuf,
}

/// Handle the transform command
///
/// Unlike batch mode, a file that cannot be loaded aborts the command and no
/// output is written.
pub fn handle_transform_command(
    spec: &FormulaSpecification,
    settings: &Settings,
    args: &TransformArgs,
) -> NormalizerResult<()> {
    let loaded = load_statement(&args.input)?;

    let mut table = ConsolidatedTable::new(spec);
    table.push(transform_statement(
        &display_name(&args.input),
        Some(&loaded.items),
        spec,
    ));

    write_table_file(&table, &settings.currency_symbol, &args.output)?;

    println!(
        "Successfully transformed data and saved to '{}'",
        args.output.display()
    );
    if !loaded.skipped.is_empty() {
        println!("  Skipped rows: {}", loaded.skipped.len());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_transform_writes_single_row() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("march.csv");
        let output = temp_dir.path().join("out.csv");
        std::fs::write(&input, "Net Income,\"$1,500.00\"\nTotal Cash,20\n").unwrap();

        let args = TransformArgs {
            input,
            output: output.clone(),
        };
        handle_transform_command(&FormulaSpecification::standard(), &Settings::default(), &args)
            .unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Filename,Total Operating Income"));
        assert!(lines[1].starts_with("march.csv,$0.00,$0.00,$0.00,$1500.00,$20.00,"));
    }

    #[test]
    fn test_missing_input_writes_nothing() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.csv");
        let args = TransformArgs {
            input: temp_dir.path().join("missing.csv"),
            output: output.clone(),
        };

        let err = handle_transform_command(
            &FormulaSpecification::standard(),
            &Settings::default(),
            &args,
        )
        .unwrap_err();

        assert!(err.is_load_error());
        assert!(!output.exists());
    }
}
