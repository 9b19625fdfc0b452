//! Declarative field-mapping formulas
//!
//! Each canonical output column is produced by one [`Formula`] applied to a
//! statement's [`LineItems`]. The set of formula kinds is closed, so a
//! subtraction always carries exactly one minuend and one subtrahend.

use std::fmt;

use super::line_items::LineItems;

/// How one output column is derived from source line items
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Formula {
    /// Copy a single line item unchanged
    Direct { key: String },
    /// Add up every listed line item
    Sum { keys: Vec<String> },
    /// `minuend - subtrahend`
    Subtract { minuend: String, subtrahend: String },
}

impl Formula {
    /// Build a direct mapping
    pub fn direct(key: impl Into<String>) -> Self {
        Self::Direct { key: key.into() }
    }

    /// Build a sum over the given keys
    pub fn sum<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Sum {
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a subtraction
    pub fn subtract(minuend: impl Into<String>, subtrahend: impl Into<String>) -> Self {
        Self::Subtract {
            minuend: minuend.into(),
            subtrahend: subtrahend.into(),
        }
    }

    /// Evaluate against a statement; absent keys count as `0.0`
    pub fn evaluate(&self, items: &LineItems) -> f64 {
        match self {
            Formula::Direct { key } => items.amount(key),
            Formula::Sum { keys } => keys.iter().fold(0.0, |acc, key| acc + items.amount(key)),
            Formula::Subtract {
                minuend,
                subtrahend,
            } => items.amount(minuend) - items.amount(subtrahend),
        }
    }

    /// Short name of the formula kind
    pub fn kind(&self) -> &'static str {
        match self {
            Formula::Direct { .. } => "direct",
            Formula::Sum { .. } => "sum",
            Formula::Subtract { .. } => "subtract",
        }
    }

    /// Source keys in declaration order
    pub fn source_keys(&self) -> Vec<&str> {
        match self {
            Formula::Direct { key } => vec![key.as_str()],
            Formula::Sum { keys } => keys.iter().map(String::as_str).collect(),
            Formula::Subtract {
                minuend,
                subtrahend,
            } => vec![minuend.as_str(), subtrahend.as_str()],
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let separator = match self {
            Formula::Subtract { .. } => " - ",
            _ => " + ",
        };
        let keys: Vec<String> = self.source_keys().into_iter().map(title_case).collect();
        write!(f, "{}", keys.join(separator))
    }
}

/// One output column of the canonical table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaEntry {
    /// Column header in the output table
    pub output_header: String,
    /// How the column value is computed
    pub formula: Formula,
}

impl FormulaEntry {
    pub fn new(output_header: impl Into<String>, formula: Formula) -> Self {
        Self {
            output_header: output_header.into(),
            formula,
        }
    }
}

/// Ordered list of formula entries; entry order is output column order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaSpecification {
    entries: Vec<FormulaEntry>,
}

impl FormulaSpecification {
    /// Create a specification from explicit entries
    pub fn new(entries: Vec<FormulaEntry>) -> Self {
        Self { entries }
    }

    /// The income-statement and balance-sheet mapping used for
    /// property-management exports
    pub fn standard() -> Self {
        Self::new(vec![
            FormulaEntry::new(
                "Total Operating Income",
                Formula::direct("total operating income"),
            ),
            FormulaEntry::new(
                "Total Operating Expense",
                Formula::direct("total operating expense"),
            ),
            FormulaEntry::new(
                "Net Operating Income",
                Formula::direct("noi - net operating income"),
            ),
            FormulaEntry::new("Net Income", Formula::direct("net income")),
            FormulaEntry::new(
                "Total Current Assets",
                Formula::sum(["total cash", "total other current assets"]),
            ),
            FormulaEntry::new("Interest Expense", Formula::direct("mortgage interest")),
            FormulaEntry::new("Total Assets", Formula::direct("total assets")),
            // Header spellings match the downstream workbook columns
            FormulaEntry::new(
                "Total Current Liabilites",
                Formula::subtract("total liabilities", "total security deposits"),
            ),
            FormulaEntry::new(
                "Total Long-Term Liabilites",
                Formula::direct("total security deposits"),
            ),
            FormulaEntry::new(
                "Capital Contributions",
                Formula::sum([
                    "owner contribution",
                    "owner contribution - owner 1",
                    "owner contribution - owner 2",
                ]),
            ),
            FormulaEntry::new(
                "Capital Distributions",
                Formula::sum([
                    "owner distribution - owner 1",
                    "owner distribution - owner 2",
                ]),
            ),
            FormulaEntry::new(
                "Retained Earnings",
                Formula::direct("calculated retained earnings"),
            ),
            FormulaEntry::new("Total Owners' Equity", Formula::direct("total capital")),
        ])
    }

    /// Entries in column order
    pub fn entries(&self) -> &[FormulaEntry] {
        &self.entries
    }

    /// Output headers in column order
    pub fn headers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.output_header.as_str())
    }

    /// Number of formula columns
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Capitalize the first letter of every alphabetic run ("noi - net" -> "Noi - Net")
fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_alpha = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if prev_alpha {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            prev_alpha = true;
        } else {
            out.push(c);
            prev_alpha = false;
        }
    }
    out
}
