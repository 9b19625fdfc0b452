//! Core data models for the statement normalizer
//!
//! - `money`: monetary value parsing and currency rendering
//! - `line_items`: per-file label -> amount mapping
//! - `formula`: the declarative formula specification and its evaluator
//! - `table`: output rows and the consolidated table

pub mod formula;
pub mod line_items;
pub mod money;
pub mod table;

pub use formula::{Formula, FormulaEntry, FormulaSpecification};
pub use line_items::LineItems;
pub use money::{format_currency, parse_monetary_value, RawValue};
pub use table::{ConsolidatedTable, StatementRow, FILENAME_HEADER};
