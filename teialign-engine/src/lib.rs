//! Corpus orchestration for teialign
//!
//! Discovers markup/raw document pairs, aligns each document with
//! [`teialign_core`], and routes the labeled lines to training or
//! evaluation output.
//!
//! ```no_run
//! use teialign_engine::{Pipeline, PipelineConfig};
//! use std::path::PathBuf;
//!
//! let config = PipelineConfig::builder()
//!     .corpus_root("corpus")
//!     .training_output(Some(PathBuf::from("train.txt")))
//!     .evaluation_output(Some(PathBuf::from("eval.txt")))
//!     .seed(Some(42))
//!     .build()?;
//! let summary = Pipeline::new(config)?.run()?;
//! println!("{} documents processed", summary.documents_processed);
//! # Ok::<(), teialign_engine::EngineError>(())
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod corpus;
pub mod document;
pub mod error;
pub mod executor;
pub mod pipeline;
pub mod sink;
pub mod splitter;
pub mod summary;

// Re-export key types
pub use config::{defaults, PipelineConfig, PipelineConfigBuilder};
pub use corpus::{Corpus, CorpusEntry};
pub use document::{DocumentOutput, DocumentProcessor, DocumentResult, DocumentStats};
pub use error::{DocumentError, EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use pipeline::Pipeline;
pub use sink::{DestinationReport, OutputSinks, SinkReport};
pub use splitter::{Destination, SplitTargets, Splitter};
pub use summary::RunSummary;

// Re-export from core for convenience
pub use teialign_core::{Normalization, StructuralLabel};
