//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod batch;
pub mod transform;

pub use batch::{handle_batch_command, BatchArgs};
pub use transform::{handle_transform_command, TransformArgs};
