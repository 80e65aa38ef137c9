//! Raw two-column token streams
//!
//! A raw file starts with a header line, followed by one line per physical
//! token. The first two whitespace-separated columns are two independent
//! readings of the token; later columns may carry layout hints such as
//! `BLOCKSTART` or `PAGESTART`.

use thiserror::Error;

/// One physical token of the raw stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRow {
    /// First reading
    pub first: String,
    /// Second reading
    pub second: String,
    /// The whole original line
    pub line: String,
}

/// Why a raw line could not become a [`RawRow`]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RawRowError {
    /// Fewer than two columns
    #[error("expected at least 2 columns, found {found}")]
    TooFewColumns {
        /// Columns present on the line
        found: usize,
    },

    /// Line bytes are not UTF-8
    #[error("invalid UTF-8 after {valid_up_to} bytes")]
    InvalidUtf8 {
        /// Length of the valid prefix
        valid_up_to: usize,
    },
}

impl RawRow {
    /// Parse a single raw line
    pub fn parse(line: &str) -> Result<Self, RawRowError> {
        let mut columns = line.split_whitespace();
        match (columns.next(), columns.next()) {
            (Some(first), Some(second)) => Ok(Self {
                first: first.to_string(),
                second: second.to_string(),
                line: line.to_string(),
            }),
            (first, _) => Err(RawRowError::TooFewColumns {
                found: usize::from(first.is_some()),
            }),
        }
    }

    /// Whether the line text contains `hint`
    pub fn has_hint(&self, hint: &str) -> bool {
        !hint.is_empty() && self.line.contains(hint)
    }
}

/// Parsed raw file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawDocument {
    /// Well-formed rows in file order
    pub rows: Vec<RawRow>,
    /// Lines rejected for having too few columns, as (line number, error)
    pub malformed: Vec<(usize, RawRowError)>,
}

impl RawDocument {
    /// Parse raw file content.
    ///
    /// The first line is a header and is skipped. Blank lines are ignored.
    /// Line numbers in `malformed` are 1-based file line numbers.
    pub fn parse(content: &str) -> Self {
        Self::parse_bytes(content.as_bytes())
    }

    /// Parse raw file bytes.
    ///
    /// Each line is decoded on its own; a line that is not UTF-8 is
    /// recorded in `malformed` and the rest of the file is kept.
    pub fn parse_bytes(content: &[u8]) -> Self {
        let mut document = RawDocument::default();

        for (idx, line) in content.split(|&b| b == b'\n').enumerate().skip(1) {
            let number = idx + 1;
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            let line = match std::str::from_utf8(line) {
                Ok(line) => line,
                Err(err) => {
                    document.malformed.push((
                        number,
                        RawRowError::InvalidUtf8 {
                            valid_up_to: err.valid_up_to(),
                        },
                    ));
                    continue;
                }
            };

            if line.trim().is_empty() {
                continue;
            }
            match RawRow::parse(line) {
                Ok(row) => document.rows.push(row),
                Err(err) => document.malformed.push((number, err)),
            }
        }

        document
    }
}
