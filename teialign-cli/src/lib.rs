//! teialign CLI library
//!
//! Command implementations, configuration file handling, summary output and
//! progress reporting for the `teialign` binary.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
