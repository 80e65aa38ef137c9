//! Plain text summary formatter

use super::OutputFormatter;
use anyhow::Result;
use std::io::{self, Write};
use teialign_engine::{DestinationReport, RunSummary};

/// Human-readable summary, one fact per line
pub struct TextFormatter<W: Write> {
    writer: W,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn destination(&mut self, name: &str, report: Option<&DestinationReport>) -> Result<()> {
        if let Some(report) = report {
            writeln!(
                self.writer,
                "{name:<11} {} documents, {} lines -> {}",
                report.documents, report.lines, report.target
            )?;
        }
        Ok(())
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_summary(&mut self, summary: &RunSummary) -> Result<()> {
        let w = &mut self.writer;
        writeln!(
            w,
            "Documents:  {} found, {} processed, {} missing raw, {} malformed markup, {} unreadable",
            summary.documents_found,
            summary.documents_processed,
            summary.missing_raw,
            summary.malformed_markup,
            summary.unreadable
        )?;
        writeln!(
            w,
            "Rows:       {} total, {} matched, {} unmatched, {} malformed ({:.1}% labeled)",
            summary.rows_total,
            summary.rows_matched,
            summary.rows_unmatched,
            summary.rows_malformed,
            summary.match_rate() * 100.0
        )?;
        if summary.unbalanced > 0 || summary.tokens_discarded > 0 {
            writeln!(
                w,
                "Markup:     {} documents with unclosed scopes, {} unlabeled tokens discarded",
                summary.unbalanced, summary.tokens_discarded
            )?;
        }
        self.destination("Training:", summary.outputs.training.as_ref())?;
        self.destination("Evaluation:", summary.outputs.evaluation.as_ref())?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use teialign_engine::SinkReport;

    #[test]
    fn test_text_summary() {
        let summary = RunSummary {
            documents_found: 3,
            documents_processed: 2,
            missing_raw: 1,
            rows_total: 10,
            rows_matched: 8,
            rows_unmatched: 2,
            outputs: SinkReport {
                training: Some(DestinationReport {
                    target: "train.txt".to_string(),
                    documents: 2,
                    lines: 8,
                }),
                evaluation: None,
            },
            ..RunSummary::default()
        };

        let mut formatter = TextFormatter::new(Vec::new());
        formatter.format_summary(&summary).unwrap();
        formatter.finish().unwrap();
        let text = String::from_utf8(formatter.into_inner()).unwrap();

        assert!(text.contains("3 found, 2 processed, 1 missing raw"));
        assert!(text.contains("(80.0% labeled)"));
        assert!(text.contains("Training:   2 documents, 8 lines -> train.txt"));
        assert!(!text.contains("Evaluation:"));
        assert!(!text.contains("Markup:"));
    }
}
