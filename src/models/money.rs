//! Monetary value parsing and rendering
//!
//! Statement exports carry amounts as loosely formatted text ("$1,234.56",
//! " 1234.56 ", "-$50"). Parsing never fails: anything that cannot be read as
//! a number becomes `0.0`.

/// A raw cell value before it is interpreted as an amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawValue<'a> {
    /// Already numeric
    Number(f64),
    /// Free-form text such as "$1,234.56"
    Text(&'a str),
    /// No usable value at all
    Missing,
}

impl From<f64> for RawValue<'_> {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

impl From<i64> for RawValue<'_> {
    fn from(value: i64) -> Self {
        RawValue::Number(value as f64)
    }
}

impl<'a> From<&'a str> for RawValue<'a> {
    fn from(value: &'a str) -> Self {
        RawValue::Text(value)
    }
}

impl<'a> From<Option<&'a str>> for RawValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(RawValue::Missing, RawValue::Text)
    }
}

/// Convert a raw value into an amount
///
/// Text has every `$`, `,` and whitespace character removed before parsing.
///
/// # Examples
/// ```
/// use normalizer::models::parse_monetary_value;
/// assert_eq!(parse_monetary_value("$1,234.56"), 1234.56);
/// assert_eq!(parse_monetary_value("abc"), 0.0);
/// ```
pub fn parse_monetary_value<'a>(value: impl Into<RawValue<'a>>) -> f64 {
    match value.into() {
        RawValue::Number(n) => n,
        RawValue::Text(text) => {
            let cleaned: String = text
                .chars()
                .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
                .collect();
            cleaned.parse::<f64>().unwrap_or(0.0)
        }
        RawValue::Missing => 0.0,
    }
}

/// Render an amount as `<symbol><amount>` with exactly two decimals
///
/// The sign follows the symbol (`$-5.00`) and no thousands separators are used.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    format!("{}{:.2}", symbol, amount)
}
