//! Export module for the statement normalizer
//!
//! The consolidated table is written as CSV, either to any writer or to an
//! in-memory string.

pub mod csv;

pub use csv::{ensure_csv_extension, table_to_csv_string, write_table_csv, write_table_file};
