//! JSON summary formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use teialign_engine::RunSummary;

/// JSON formatter - writes the summary as one pretty-printed object
pub struct JsonFormatter<W: Write> {
    writer: W,
}

/// Serialized form of a run summary
#[derive(Debug, Serialize)]
pub struct SummaryData<'a> {
    /// All counters
    #[serde(flatten)]
    pub summary: &'a RunSummary,
    /// Share of rows that received a label
    pub match_rate: f64,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_summary(&mut self, summary: &RunSummary) -> Result<()> {
        let data = SummaryData {
            summary,
            match_rate: summary.match_rate(),
        };
        serde_json::to_writer_pretty(&mut self.writer, &data)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
