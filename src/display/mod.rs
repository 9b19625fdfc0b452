//! Display formatting for terminal output
//!
//! Provides table previews and the formula listing.

pub mod formulas;
pub mod table;

pub use formulas::format_formula_list;
pub use table::format_table_preview;
