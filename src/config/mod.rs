//! Configuration module for the statement normalizer
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::NormalizerPaths;
pub use settings::Settings;
