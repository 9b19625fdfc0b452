//! Custom error types for the statement normalizer
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions. Per-record problems (unparseable amounts,
//! short rows) never reach this type; they are absorbed where they occur.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// The main error type for normalizer operations
#[derive(Error, Debug)]
pub enum NormalizerError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// An input statement could not be opened, decoded or parsed
    #[error("Failed to load '{}': {}", .path.display(), .reason)]
    Load { path: PathBuf, reason: String },

    /// The batch input directory is missing or is not a directory
    #[error("Input directory '{}' not found or is not a directory", .0.display())]
    DirectoryNotFound(PathBuf),

    /// The batch input directory has no `.csv` entries
    #[error("No CSV files found in directory '{}'", .0.display())]
    NoCsvFiles(PathBuf),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl NormalizerError {
    /// Create a load error for the given file
    pub fn load(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Load {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Check if this is a per-file load failure
    pub fn is_load_error(&self) -> bool {
        matches!(self, Self::Load { .. })
    }

    /// Check if this error aborts a whole batch run
    pub fn is_directory_error(&self) -> bool {
        matches!(self, Self::DirectoryNotFound(_) | Self::NoCsvFiles(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for NormalizerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for NormalizerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<csv::Error> for NormalizerError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for normalizer operations
pub type NormalizerResult<T> = Result<T, NormalizerError>;
