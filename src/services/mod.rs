//! Business logic layer
//!
//! - `loader`: reads one statement file into line items
//! - `transform`: turns line items into an output row
//! - `batch`: aggregates a directory of statements into one table

pub mod batch;
pub mod loader;
pub mod transform;

pub use batch::{aggregate_directory, find_csv_files, BatchResult, FailedFile};
pub use loader::{load_statement, parse_statement, LoadedStatement, SkippedRow};
pub use transform::transform_statement;
