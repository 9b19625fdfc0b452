//! Formula specification display formatting

use crate::models::FormulaSpecification;

/// Format the formula list, one numbered line per output column
pub fn format_formula_list(spec: &FormulaSpecification) -> String {
    spec.entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            format!(
                "{}. {}  <-  {} ({})",
                i + 1,
                entry.output_header,
                entry.formula,
                entry.formula.kind()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_formula_list() {
        let output = format_formula_list(&FormulaSpecification::standard());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(
            lines[0],
            "1. Total Operating Income  <-  Total Operating Income (direct)"
        );
        assert_eq!(
            lines[4],
            "5. Total Current Assets  <-  Total Cash + Total Other Current Assets (sum)"
        );
        assert_eq!(
            lines[7],
            "8. Total Current Liabilites  <-  Total Liabilities - Total Security Deposits (subtract)"
        );
    }
}
