//! Statement transformation
//!
//! Applies every formula of a [`FormulaSpecification`] to one statement and
//! produces a [`StatementRow`]. A statement that failed to load still yields a
//! full-width row of zeros.

use crate::models::{FormulaSpecification, LineItems, StatementRow};

/// Build the output row for one source file
///
/// `items` is `None` when the source could not be loaded.
pub fn transform_statement(
    filename: &str,
    items: Option<&LineItems>,
    spec: &FormulaSpecification,
) -> StatementRow {
    let values = match items {
        Some(items) => spec
            .entries()
            .iter()
            .map(|entry| entry.formula.evaluate(items))
            .collect(),
        None => vec![0.0; spec.len()],
    };

    StatementRow {
        filename: filename.to_string(),
        values,
    }
}
