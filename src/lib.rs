//! Statement normalizer - canonical tables from accounting CSV exports
//!
//! This library turns loosely structured, two-column (label, amount) exports
//! from property-management accounting systems into a fixed set of canonical
//! columns, using a small declarative formula specification.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Amount parsing, line items, formulas and output tables
//! - `services`: Loading, transformation and directory aggregation
//! - `export`: CSV serialization
//! - `display`: Terminal formatting
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use normalizer::models::FormulaSpecification;
//! use normalizer::services::aggregate_directory;
//!
//! let spec = FormulaSpecification::standard();
//! let result = aggregate_directory("statements/", &spec)?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;

pub use error::{NormalizerError, NormalizerResult};
