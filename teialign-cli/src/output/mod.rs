//! Run summary output

use anyhow::Result;
use teialign_engine::RunSummary;

/// Trait for summary formatters
pub trait OutputFormatter: Send + Sync {
    /// Format one run summary
    fn format_summary(&mut self, summary: &RunSummary) -> Result<()>;

    /// Finalize output
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonFormatter;
pub use text::TextFormatter;
