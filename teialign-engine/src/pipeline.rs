//! Corpus pipeline
//!
//! Discovery, per-document processing and routing for a whole run. Each
//! document is isolated: missing raw files and malformed markup are logged,
//! counted and skipped, while output failures end the run.

use log::{debug, info, warn};

use crate::config::PipelineConfig;
use crate::corpus::{Corpus, CorpusEntry};
use crate::document::{DocumentProcessor, DocumentResult};
use crate::error::Result;
use crate::executor::executor_for;
use crate::sink::OutputSinks;
use crate::splitter::Splitter;
use crate::summary::RunSummary;

/// Validated pipeline ready to run
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
}

impl Pipeline {
    /// Create a pipeline from a configuration
    pub fn new(config: PipelineConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration in use
    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Markup documents this run would process, in processing order
    pub fn discover(&self) -> Result<Vec<CorpusEntry>> {
        Corpus::new(&self.config.markup_dir, &self.config.raw_dir).discover()
    }

    /// Run over the whole corpus
    pub fn run(&self) -> Result<RunSummary> {
        self.run_with_observer(|_| {})
    }

    /// Run over the whole corpus, calling `observer` after each document
    pub fn run_with_observer<F>(&self, observer: F) -> Result<RunSummary>
    where
        F: FnMut(&CorpusEntry),
    {
        let entries = self.discover()?;
        self.run_entries(&entries, observer)
    }

    /// Run over already discovered entries
    pub fn run_entries<F>(&self, entries: &[CorpusEntry], mut observer: F) -> Result<RunSummary>
    where
        F: FnMut(&CorpusEntry),
    {
        let config = &self.config;
        info!(
            "processing {} markup documents from {}",
            entries.len(),
            config.markup_dir.display()
        );

        let executor = executor_for(config.execution_mode, config.threads, config.batch_size)?;
        debug!("execution mode: {:?}", executor.mode());
        let processor = DocumentProcessor::new(config.extractor.clone(), config.aligner.clone());

        let (mut summary, outputs) = OutputSinks::scoped(
            config.training_output.as_deref(),
            config.evaluation_output.as_deref(),
            |sinks| {
                let mut splitter = Splitter::new(sinks.targets(), config.split_ratio, config.seed);
                let mut summary = RunSummary::new(entries.len());

                executor.run(entries, &processor, &mut |entry: &CorpusEntry, result: DocumentResult| {
                    let outcome = match result {
                        Ok(output) => {
                            let destination = splitter.route();
                            debug!("{} -> {destination}", output.name);
                            sinks.write_document(destination, &output.lines)?;

                            info!(
                                "{}: {}/{} rows labeled",
                                output.name, output.stats.matched, output.stats.rows
                            );
                            if output.stats.unclosed_scopes > 0 {
                                warn!(
                                    "{}: {} scopes left open",
                                    output.name, output.stats.unclosed_scopes
                                );
                            }
                            summary.record_document(&output.stats);
                            Ok(())
                        }
                        Err(err) => {
                            warn!("skipping {}: {err}", entry.name);
                            summary.record_failure(&err);
                            Ok(())
                        }
                    };
                    observer(entry);
                    outcome
                })?;

                Ok(summary)
            },
        )?;

        summary.outputs = outputs;
        info!(
            "done: {} processed, {} skipped, {}/{} rows labeled",
            summary.documents_processed,
            summary.documents_skipped(),
            summary.rows_matched,
            summary.rows_total
        );
        Ok(summary)
    }
}
