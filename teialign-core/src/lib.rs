//! Structural label extraction and raw-stream alignment
//!
//! This crate turns hand-annotated monograph markup into a token-level
//! labeled sequence and re-aligns that sequence against an independently
//! tokenized raw stream of the same document, so that raw tokens receive
//! structural labels usable as sequence-labeling training data.
//!
//! # Architecture
//!
//! - [`tokenizer`]: boundary splitting of buffered text
//! - [`tag_stack`]: stack of open structural scopes
//! - [`extractor`] / [`markup`]: markup events to [`LabeledToken`]s
//! - [`raw`]: raw two-column token rows
//! - [`aligner`]: bounded forward-search alignment with bookmark recovery
//!
//! # Example
//!
//! ```rust
//! use teialign_core::{align, extract_labels, AlignerOptions, ExtractorOptions, RawDocument};
//!
//! let extraction = extract_labels(
//!     "<text><title>Hello World</title></text>",
//!     &ExtractorOptions::default(),
//! )
//! .unwrap();
//!
//! let raw = RawDocument::parse("header\nHello hello\nWorld world\n");
//! let alignment = align(&extraction.tokens, &raw.rows, &AlignerOptions::default());
//!
//! assert_eq!(alignment.lines[0].to_string(), "Hello hello I-<title>");
//! assert_eq!(alignment.lines[1].to_string(), "World world <title>");
//! ```

#![warn(missing_docs)]

pub mod aligner;
pub mod error;
pub mod extractor;
pub mod label;
pub mod markup;
pub mod raw;
pub mod tag_stack;
pub mod tokenizer;
pub mod types;

pub use aligner::{
    align, Aligner, AlignerOptions, Alignment, Normalization, RowOutcome, DEFAULT_BLOCK_START_HINT,
    DEFAULT_PAGE_START_HINT,
};
pub use error::{CoreError, Result};
pub use extractor::{Extraction, ExtractorOptions, LabelExtractor};
pub use label::StructuralLabel;
pub use markup::extract_labels;
pub use raw::{RawDocument, RawRow, RawRowError};
pub use tag_stack::TagStack;
pub use tokenizer::{tokenize, PunctuationSet, Token};
pub use types::{LabeledToken, Marker, OutputLine};
