//! CLI tool for inspecting and growing hash-ring partition maps.
//!
//! Provides commands for:
//! - Building an initial partition map
//! - Growing a map one node at a time
//! - Locating replica positions for a record identifier
//! - Printing even-split boundaries
//! - Verifying the coverage invariant of a built map

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::CliConfig;
