//! Layered error types
//!
//! [`EngineError`] is fatal for a run. [`DocumentError`] is scoped to one
//! document: the pipeline logs and counts it, then moves on.

use std::io;
use std::path::PathBuf;
use teialign_core::CoreError;
use thiserror::Error;

/// Run-level errors
#[derive(Error, Debug)]
pub enum EngineError {
    /// Configuration rejected by validation
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Corpus directories could not be listed
    #[error("corpus error: {0}")]
    Corpus(String),

    /// Output destination could not be opened, written or flushed
    #[error("I/O error on {target}: {source}")]
    Io {
        /// Destination path or name
        target: String,
        /// Underlying failure
        source: io::Error,
    },

    /// Worker pool could not be built
    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

/// Document-level errors
#[derive(Error, Debug)]
pub enum DocumentError {
    /// No raw token file next to the markup document
    #[error("raw file does not exist: {}", path.display())]
    MissingRaw {
        /// Expected raw file location
        path: PathBuf,
    },

    /// Markup or raw file could not be read as UTF-8 text
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// File being read
        path: PathBuf,
        /// Underlying failure
        source: io::Error,
    },

    /// Markup is not well-formed
    #[error("malformed markup in {}: {source}", path.display())]
    Markup {
        /// Markup file
        path: PathBuf,
        /// Parser diagnostic
        source: CoreError,
    },
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;
