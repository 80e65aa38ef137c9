//! Single-document processing: extract, read raw rows, align

use std::fs;
use std::path::Path;
use teialign_core::{
    align, extract_labels, AlignerOptions, ExtractorOptions, OutputLine, RawDocument,
};

use crate::corpus::CorpusEntry;
use crate::error::DocumentError;

/// Per-document counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DocumentStats {
    /// Labeled tokens extracted from the markup (markers included)
    pub labeled_tokens: usize,
    /// Content tokens dropped for lack of an active label
    pub discarded_tokens: usize,
    /// Scopes left open at the end of the markup
    pub unclosed_scopes: usize,
    /// Well-formed raw rows
    pub rows: usize,
    /// Rows that received a label
    pub matched: usize,
    /// Rows without a match
    pub unmatched: usize,
    /// Raw lines with too few columns
    pub malformed_rows: usize,
}

/// Aligned output of one document
#[derive(Debug, Clone)]
pub struct DocumentOutput {
    /// Markup file name
    pub name: String,
    /// Labeled raw lines
    pub lines: Vec<OutputLine>,
    /// Counters
    pub stats: DocumentStats,
}

/// Outcome of processing one document
pub type DocumentResult = Result<DocumentOutput, DocumentError>;

/// Runs the extract/align steps for corpus entries
#[derive(Debug, Clone, Default)]
pub struct DocumentProcessor {
    extractor: ExtractorOptions,
    aligner: AlignerOptions,
}

impl DocumentProcessor {
    /// Create a processor
    pub fn new(extractor: ExtractorOptions, aligner: AlignerOptions) -> Self {
        Self { extractor, aligner }
    }

    /// Process one corpus entry
    pub fn process(&self, entry: &CorpusEntry) -> DocumentResult {
        if !entry.raw_path.is_file() {
            return Err(DocumentError::MissingRaw {
                path: entry.raw_path.clone(),
            });
        }

        let markup = read_text(&entry.markup_path)?;
        let extraction = extract_labels(&markup, &self.extractor).map_err(|source| {
            DocumentError::Markup {
                path: entry.markup_path.clone(),
                source,
            }
        })?;

        let raw = RawDocument::parse_bytes(&read_bytes(&entry.raw_path)?);
        let alignment = align(&extraction.tokens, &raw.rows, &self.aligner);

        Ok(DocumentOutput {
            name: entry.name.clone(),
            stats: DocumentStats {
                labeled_tokens: extraction.tokens.len(),
                discarded_tokens: extraction.discarded_tokens,
                unclosed_scopes: extraction.unclosed_scopes,
                rows: raw.rows.len(),
                matched: alignment.matched,
                unmatched: alignment.unmatched,
                malformed_rows: raw.malformed.len(),
            },
            lines: alignment.lines,
        })
    }
}

fn read_text(path: &Path) -> Result<String, DocumentError> {
    fs::read_to_string(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })
}

// Raw files are decoded per line by `RawDocument::parse_bytes`.
fn read_bytes(path: &Path) -> Result<Vec<u8>, DocumentError> {
    fs::read(path).map_err(|source| DocumentError::Read {
        path: path.to_path_buf(),
        source,
    })
}
