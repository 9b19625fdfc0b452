//! Line-item mapping loaded from one statement file
//!
//! Labels are normalized to trimmed lowercase so that "Total Assets" and
//! "  total assets" address the same entry.

use std::collections::HashMap;

/// Normalized label -> amount mapping for a single statement
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineItems {
    items: HashMap<String, f64>,
}

impl LineItems {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a free-text label into its lookup form
    pub fn normalize_label(label: &str) -> String {
        label.trim().to_lowercase()
    }

    /// Insert an amount under the normalized label
    ///
    /// A later duplicate label overwrites the earlier amount.
    pub fn insert(&mut self, label: &str, amount: f64) {
        self.items.insert(Self::normalize_label(label), amount);
    }

    /// Look up a label, if present
    pub fn get(&self, label: &str) -> Option<f64> {
        self.items.get(&Self::normalize_label(label)).copied()
    }

    /// Look up a label, defaulting to `0.0` when absent
    pub fn amount(&self, label: &str) -> f64 {
        self.get(label).unwrap_or(0.0)
    }

    /// Number of distinct labels
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no labels were loaded
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, f64)> for LineItems {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut items = LineItems::new();
        for (label, amount) in iter {
            items.insert(label, amount);
        }
        items
    }
}
