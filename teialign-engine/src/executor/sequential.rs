//! Sequential execution strategy

use crate::{
    corpus::CorpusEntry,
    document::DocumentProcessor,
    error::Result,
    executor::{Consumer, ExecutionMode, Executor},
};

/// Sequential single-threaded executor
#[derive(Debug, Clone)]
pub struct SequentialExecutor;

impl Executor for SequentialExecutor {
    fn run(
        &self,
        entries: &[CorpusEntry],
        processor: &DocumentProcessor,
        consume: &mut Consumer<'_>,
    ) -> Result<()> {
        for entry in entries {
            consume(entry, processor.process(entry))?;
        }
        Ok(())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }
}
