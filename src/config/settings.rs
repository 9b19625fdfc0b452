//! User settings for the statement normalizer
//!
//! Manages display and output preferences. The formula mapping itself is not
//! a setting; see [`crate::models::FormulaSpecification::standard`].

use serde::{Deserialize, Serialize};

use super::paths::NormalizerPaths;
use crate::error::NormalizerError;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol prefixed to every rendered amount
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Number of rows shown in the batch preview table
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Output file name used by `batch` when none is given
    #[serde(default = "default_output_filename")]
    pub default_output_filename: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_preview_rows() -> usize {
    5
}

fn default_output_filename() -> String {
    "consolidated_output.csv".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            preview_rows: default_preview_rows(),
            default_output_filename: default_output_filename(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &NormalizerPaths) -> Result<Self, NormalizerError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                NormalizerError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                NormalizerError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &NormalizerPaths) -> Result<(), NormalizerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            NormalizerError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            NormalizerError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
