//! Consolidated table display formatting
//!
//! Renders a preview of the first rows of a batch result for the terminal.

use tabled::builder::Builder;
use tabled::settings::Style;

use crate::models::ConsolidatedTable;

/// Format the first `max_rows` rows of the table
pub fn format_table_preview(
    table: &ConsolidatedTable,
    currency_symbol: &str,
    max_rows: usize,
) -> String {
    if table.is_empty() {
        return "No data to preview.".to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(table.headers().iter().cloned());
    for row in table.rows().iter().take(max_rows) {
        builder.push_record(row.formatted(currency_symbol));
    }

    let mut rendered = builder.build();
    rendered.with(Style::rounded());

    let mut output = rendered.to_string();
    if table.len() > max_rows {
        output.push_str(&format!("\n  ... and {} more", table.len() - max_rows));
    }
    output
}
