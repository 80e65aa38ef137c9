//! Output destinations
//!
//! [`OutputSinks`] owns the training and evaluation writers for a whole run.
//! Documents are appended in processing order, one physical line per
//! labeled raw line, with a blank line closing each non-empty document so
//! the downstream trainer sees one sequence per document.

use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use teialign_core::OutputLine;

use crate::error::{EngineError, Result};
use crate::splitter::{Destination, SplitTargets};

/// What was written to one destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DestinationReport {
    /// Destination path or name
    pub target: String,
    /// Documents routed here
    pub documents: usize,
    /// Lines written
    pub lines: usize,
}

/// What was written to each configured destination
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SinkReport {
    /// Training destination
    pub training: Option<DestinationReport>,
    /// Evaluation destination
    pub evaluation: Option<DestinationReport>,
}

#[derive(Debug)]
struct Sink<W: Write> {
    writer: W,
    report: DestinationReport,
}

impl<W: Write> Sink<W> {
    fn new(target: String, writer: W) -> Self {
        Self {
            writer,
            report: DestinationReport {
                target,
                ..DestinationReport::default()
            },
        }
    }

    fn write_document(&mut self, lines: &[OutputLine]) -> Result<()> {
        for line in lines {
            writeln!(self.writer, "{line}").map_err(|e| self.io_error(e))?;
        }
        if !lines.is_empty() {
            writeln!(self.writer).map_err(|e| self.io_error(e))?;
        }
        self.report.documents += 1;
        self.report.lines += lines.len();
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush().map_err(|e| self.io_error(e))
    }

    fn io_error(&self, source: std::io::Error) -> EngineError {
        EngineError::Io {
            target: self.report.target.clone(),
            source,
        }
    }
}

/// Training and/or evaluation writers for one run
#[derive(Debug)]
pub struct OutputSinks<W: Write = BufWriter<File>> {
    training: Option<Sink<W>>,
    evaluation: Option<Sink<W>>,
}

impl OutputSinks<BufWriter<File>> {
    /// Create (truncate) the configured output files
    pub fn create(training: Option<&Path>, evaluation: Option<&Path>) -> Result<Self> {
        let open = |path: &Path| -> Result<Sink<BufWriter<File>>> {
            let file = File::create(path).map_err(|source| EngineError::Io {
                target: path.display().to_string(),
                source,
            })?;
            Ok(Sink::new(path.display().to_string(), BufWriter::new(file)))
        };

        let training = training.map(open).transpose()?;
        let evaluation = evaluation.map(open).transpose()?;
        Self::from_sinks(training, evaluation)
    }

    /// Open the outputs, run `body`, then flush and close them.
    ///
    /// The outputs are finished whether or not `body` succeeds; an error
    /// from `body` takes precedence over a flush error.
    pub fn scoped<T, F>(
        training: Option<&Path>,
        evaluation: Option<&Path>,
        body: F,
    ) -> Result<(T, SinkReport)>
    where
        F: FnOnce(&mut Self) -> Result<T>,
    {
        let mut sinks = Self::create(training, evaluation)?;
        let outcome = body(&mut sinks);
        let finished = sinks.finish();
        match (outcome, finished) {
            (Ok(value), Ok(report)) => Ok((value, report)),
            (Err(err), _) | (Ok(_), Err(err)) => Err(err),
        }
    }
}

impl<W: Write> OutputSinks<W> {
    /// Wrap arbitrary writers, e.g. in-memory buffers
    pub fn from_writers(training: Option<W>, evaluation: Option<W>) -> Result<Self> {
        Self::from_sinks(
            training.map(|w| Sink::new(Destination::Training.to_string(), w)),
            evaluation.map(|w| Sink::new(Destination::Evaluation.to_string(), w)),
        )
    }

    fn from_sinks(training: Option<Sink<W>>, evaluation: Option<Sink<W>>) -> Result<Self> {
        if training.is_none() && evaluation.is_none() {
            return Err(EngineError::Config(
                "at least one of the training or evaluation outputs is required".into(),
            ));
        }
        Ok(Self {
            training,
            evaluation,
        })
    }

    /// Which destinations exist
    pub fn targets(&self) -> SplitTargets {
        match (&self.training, &self.evaluation) {
            (Some(_), Some(_)) => SplitTargets::Both,
            (None, Some(_)) => SplitTargets::EvaluationOnly,
            _ => SplitTargets::TrainingOnly,
        }
    }

    /// Append one document's lines to `destination`
    pub fn write_document(&mut self, destination: Destination, lines: &[OutputLine]) -> Result<()> {
        let sink = match destination {
            Destination::Training => self.training.as_mut(),
            Destination::Evaluation => self.evaluation.as_mut(),
        };
        match sink {
            Some(sink) => sink.write_document(lines),
            None => Err(EngineError::Config(format!(
                "no {destination} output is configured"
            ))),
        }
    }

    /// Flush every writer and report what was written
    pub fn finish(mut self) -> Result<SinkReport> {
        let training = self.training.as_mut().map(Sink::flush).transpose();
        let evaluation = self.evaluation.as_mut().map(Sink::flush).transpose();
        training?;
        evaluation?;

        Ok(SinkReport {
            training: self.training.map(|sink| sink.report),
            evaluation: self.evaluation.map(|sink| sink.report),
        })
    }
}
