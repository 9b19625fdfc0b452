//! Path management for the statement normalizer
//!
//! Resolves where the user settings file lives.
//!
//! ## Path Resolution Order
//!
//! 1. `NORMALIZER_CONFIG_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/statement-normalizer` or `~/.config/statement-normalizer`
//! 3. Windows: `%APPDATA%\statement-normalizer`

use std::path::PathBuf;

use crate::error::NormalizerError;

const APP_DIR_NAME: &str = "statement-normalizer";

/// Manages all paths used by the normalizer
#[derive(Debug, Clone)]
pub struct NormalizerPaths {
    /// Base directory for configuration
    base_dir: PathBuf,
}

impl NormalizerPaths {
    /// Create a new NormalizerPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home or config directory can be determined.
    pub fn new() -> Result<Self, NormalizerError> {
        let base_dir = if let Ok(custom) = std::env::var("NORMALIZER_CONFIG_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create NormalizerPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the config directory exists
    pub fn ensure_directories(&self) -> Result<(), NormalizerError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            NormalizerError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

/// Resolve the default config directory based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, NormalizerError> {
    let config_base = match std::env::var("XDG_CONFIG_HOME") {
        Ok(xdg) => PathBuf::from(xdg),
        Err(_) => {
            let home = std::env::var("HOME").map_err(|_| {
                NormalizerError::Config("HOME environment variable not set".into())
            })?;
            PathBuf::from(home).join(".config")
        }
    };
    Ok(config_base.join(APP_DIR_NAME))
}

/// Resolve the default config directory based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, NormalizerError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| NormalizerError::Config("Could not determine APPDATA directory".into()))?;
    Ok(PathBuf::from(appdata).join(APP_DIR_NAME))
}
