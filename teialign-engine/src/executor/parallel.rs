//! Parallel execution strategy

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::{
    corpus::CorpusEntry,
    document::{DocumentProcessor, DocumentResult},
    error::{EngineError, Result},
    executor::{Consumer, ExecutionMode, Executor},
};

/// Parallel multi-threaded executor.
///
/// Documents are processed batch by batch on a rayon pool. Each batch is
/// collected in corpus order before its results reach the consumer, which
/// keeps memory bounded and output identical to sequential execution.
#[derive(Debug)]
pub struct ParallelExecutor {
    pool: ThreadPool,
    batch_size: usize,
}

impl ParallelExecutor {
    /// Create a new parallel executor (None = all available threads)
    pub fn new(threads: Option<usize>, batch_size: usize) -> Result<Self> {
        let mut builder = ThreadPoolBuilder::new();
        if let Some(threads) = threads {
            builder = builder.num_threads(threads);
        }
        let pool = builder
            .build()
            .map_err(|e| EngineError::ThreadPool(e.to_string()))?;

        Ok(Self {
            pool,
            batch_size: batch_size.max(1),
        })
    }

    /// Worker threads in the pool
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }
}

impl Executor for ParallelExecutor {
    fn run(
        &self,
        entries: &[CorpusEntry],
        processor: &DocumentProcessor,
        consume: &mut Consumer<'_>,
    ) -> Result<()> {
        for batch in entries.chunks(self.batch_size) {
            let results: Vec<DocumentResult> = self.pool.install(|| {
                batch
                    .par_iter()
                    .map(|entry| processor.process(entry))
                    .collect()
            });

            for (entry, result) in batch.iter().zip(results) {
                consume(entry, result)?;
            }
        }
        Ok(())
    }

    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Parallel
    }
}
