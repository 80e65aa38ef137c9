//! Corpus discovery
//!
//! Pairs every markup document with its raw token file: the raw file has
//! the markup file's name minus the TEI suffix and lives in the raw
//! directory. Whether the raw file actually exists is checked when the
//! document is processed, so a missing one only skips that document.

use std::fs;
use std::path::PathBuf;

use crate::error::{EngineError, Result};

/// Recognized markup suffixes, longest first
pub const TEI_SUFFIXES: [&str; 2] = [".tei.xml", ".tei"];

/// One markup document and its expected raw file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusEntry {
    /// Markup file name
    pub name: String,
    /// Markup file location
    pub markup_path: PathBuf,
    /// Expected raw file location
    pub raw_path: PathBuf,
}

/// Pair of markup and raw directories
#[derive(Debug, Clone)]
pub struct Corpus {
    markup_dir: PathBuf,
    raw_dir: PathBuf,
}

impl Corpus {
    /// Create a corpus over the given directories
    pub fn new(markup_dir: impl Into<PathBuf>, raw_dir: impl Into<PathBuf>) -> Self {
        Self {
            markup_dir: markup_dir.into(),
            raw_dir: raw_dir.into(),
        }
    }

    /// List markup documents sorted by file name
    pub fn discover(&self) -> Result<Vec<CorpusEntry>> {
        let dir = fs::read_dir(&self.markup_dir).map_err(|e| {
            EngineError::Corpus(format!(
                "cannot list markup directory {}: {e}",
                self.markup_dir.display()
            ))
        })?;

        let mut entries = Vec::new();
        for item in dir {
            let item = item.map_err(|e| {
                EngineError::Corpus(format!(
                    "cannot read entry in {}: {e}",
                    self.markup_dir.display()
                ))
            })?;

            let path = item.path();
            if !path.is_file() {
                continue;
            }
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(stem) = strip_tei_suffix(name) else {
                continue;
            };

            entries.push(CorpusEntry {
                name: name.to_string(),
                raw_path: self.raw_dir.join(stem),
                markup_path: path.clone(),
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}

/// Strip a TEI suffix from a markup file name.
///
/// Returns None for names without a TEI suffix or with nothing left.
pub fn strip_tei_suffix(name: &str) -> Option<&str> {
    TEI_SUFFIXES
        .iter()
        .find_map(|suffix| name.strip_suffix(suffix))
        .filter(|stem| !stem.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_strip_tei_suffix() {
        assert_eq!(strip_tei_suffix("book1.tei.xml"), Some("book1"));
        assert_eq!(strip_tei_suffix("book1.tei"), Some("book1"));
        assert_eq!(strip_tei_suffix("book1.xml"), None);
        assert_eq!(strip_tei_suffix(".tei"), None);
        assert_eq!(strip_tei_suffix("a.b.training.monograph.tei.xml"), Some("a.b.training.monograph"));
    }

    #[test]
    fn test_discover_pairs_and_sorts() {
        let root = TempDir::new().unwrap();
        let tei = root.path().join("tei");
        let raw = root.path().join("raw");
        fs::create_dir_all(&tei).unwrap();
        fs::create_dir_all(&raw).unwrap();

        fs::write(tei.join("b.tei.xml"), "<tei/>").unwrap();
        fs::write(tei.join("a.tei"), "<tei/>").unwrap();
        fs::write(tei.join("notes.txt"), "ignored").unwrap();
        fs::create_dir(tei.join("nested.tei")).unwrap();

        let entries = Corpus::new(&tei, &raw).discover().unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["a.tei", "b.tei.xml"]);
        assert_eq!(entries[0].raw_path, raw.join("a"));
        assert_eq!(entries[1].raw_path, raw.join("b"));
    }

    #[test]
    fn test_discover_missing_directory() {
        let corpus = Corpus::new("/nonexistent/tei", "/nonexistent/raw");
        let err = corpus.discover().unwrap_err();
        assert!(err.to_string().contains("cannot list markup directory"));
    }
}
