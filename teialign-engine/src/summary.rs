//! End-of-run summary

use serde::Serialize;

use crate::document::DocumentStats;
use crate::error::DocumentError;
use crate::sink::SinkReport;

/// Counters accumulated over a pipeline run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunSummary {
    /// Markup documents discovered
    pub documents_found: usize,
    /// Documents aligned and written
    pub documents_processed: usize,
    /// Documents skipped because their raw file is missing
    pub missing_raw: usize,
    /// Documents skipped because their markup is not well-formed
    pub malformed_markup: usize,
    /// Documents skipped because a file could not be read
    pub unreadable: usize,
    /// Processed documents that left scopes open
    pub unbalanced: usize,
    /// Well-formed raw rows seen
    pub rows_total: usize,
    /// Rows that received a label
    pub rows_matched: usize,
    /// Rows without a match
    pub rows_unmatched: usize,
    /// Raw lines with too few columns
    pub rows_malformed: usize,
    /// Content tokens outside any recognized scope
    pub tokens_discarded: usize,
    /// What was written where
    pub outputs: SinkReport,
}

impl RunSummary {
    /// Start a summary for `documents_found` documents
    pub fn new(documents_found: usize) -> Self {
        Self {
            documents_found,
            ..Self::default()
        }
    }

    /// Account for a processed document
    pub fn record_document(&mut self, stats: &DocumentStats) {
        self.documents_processed += 1;
        if stats.unclosed_scopes > 0 {
            self.unbalanced += 1;
        }
        self.rows_total += stats.rows;
        self.rows_matched += stats.matched;
        self.rows_unmatched += stats.unmatched;
        self.rows_malformed += stats.malformed_rows;
        self.tokens_discarded += stats.discarded_tokens;
    }

    /// Account for a skipped document
    pub fn record_failure(&mut self, error: &DocumentError) {
        match error {
            DocumentError::MissingRaw { .. } => self.missing_raw += 1,
            DocumentError::Markup { .. } => self.malformed_markup += 1,
            DocumentError::Read { .. } => self.unreadable += 1,
        }
    }

    /// Documents skipped for any reason
    pub fn documents_skipped(&self) -> usize {
        self.missing_raw + self.malformed_markup + self.unreadable
    }

    /// Share of rows that received a label (0 when there were no rows)
    pub fn match_rate(&self) -> f64 {
        if self.rows_total == 0 {
            0.0
        } else {
            self.rows_matched as f64 / self.rows_total as f64
        }
    }
}
