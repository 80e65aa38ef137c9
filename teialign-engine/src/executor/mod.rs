//! Execution strategies for corpus processing
//!
//! Executors process documents and hand each result to a single consumer
//! callback in corpus order. The consumer (the writer) is never called
//! concurrently, so output files need no further synchronization.

use crate::{
    corpus::CorpusEntry,
    document::{DocumentProcessor, DocumentResult},
    error::Result,
};

#[cfg(feature = "parallel")]
pub mod parallel;
pub mod sequential;

// Re-export executors
#[cfg(feature = "parallel")]
pub use parallel::ParallelExecutor;
pub use sequential::SequentialExecutor;

/// Execution mode selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionMode {
    /// One document at a time on the calling thread
    #[default]
    Sequential,
    /// Documents processed on a worker pool, results merged in order
    Parallel,
}

/// Receives each document's result, in corpus order
pub type Consumer<'a> = dyn FnMut(&CorpusEntry, DocumentResult) -> Result<()> + 'a;

/// Trait for execution strategies
pub trait Executor: Send + Sync {
    /// Process `entries` and feed every result to `consume` in order.
    ///
    /// An error returned by `consume` stops the run.
    fn run(
        &self,
        entries: &[CorpusEntry],
        processor: &DocumentProcessor,
        consume: &mut Consumer<'_>,
    ) -> Result<()>;

    /// Get the execution mode
    fn mode(&self) -> ExecutionMode;
}

/// Build the executor for `mode`.
///
/// Without the `parallel` feature, parallel mode falls back to sequential.
pub fn executor_for(
    mode: ExecutionMode,
    threads: Option<usize>,
    batch_size: usize,
) -> Result<Box<dyn Executor>> {
    match mode {
        ExecutionMode::Sequential => Ok(Box::new(SequentialExecutor)),
        #[cfg(feature = "parallel")]
        ExecutionMode::Parallel => Ok(Box::new(ParallelExecutor::new(threads, batch_size)?)),
        #[cfg(not(feature = "parallel"))]
        ExecutionMode::Parallel => {
            let _ = (threads, batch_size);
            log::warn!("parallel feature disabled, processing sequentially");
            Ok(Box::new(SequentialExecutor))
        }
    }
}
