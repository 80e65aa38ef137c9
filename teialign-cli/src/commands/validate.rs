//! Validate command implementation

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use teialign_core::{extract_labels, ExtractorOptions, PunctuationSet};

use crate::error::CliError;
use crate::input::resolve_patterns;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Markup files or patterns (supports glob)
    #[arg(value_name = "FILE/PATTERN", required = true)]
    pub patterns: Vec<String>,

    /// Punctuation delimiters used for token counts
    #[arg(long, value_name = "CHARS")]
    pub punctuation: Option<String>,

    /// Print one JSON object per file instead of text
    #[arg(long)]
    pub json: bool,
}

/// Validation outcome of one markup file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileReport {
    /// Markup file
    pub path: PathBuf,
    /// Labeled content tokens
    pub content_tokens: usize,
    /// Layout markers
    pub markers: usize,
    /// Content tokens outside any recognized scope
    pub discarded_tokens: usize,
    /// Scopes never closed
    pub unclosed_scopes: usize,
    /// Read or parse failure
    pub error: Option<String>,
}

impl FileReport {
    /// Whether the file could be parsed
    pub fn is_valid(&self) -> bool {
        self.error.is_none()
    }
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let options = self.extractor_options();
        let files = resolve_patterns(&self.patterns)?;

        let mut failures = 0;
        for path in &files {
            let report = check_file(path, &options);
            if !report.is_valid() {
                failures += 1;
            }
            if self.json {
                println!("{}", serde_json::to_string(&report)?);
            } else {
                print_report(&report);
            }
        }

        if failures > 0 {
            return Err(CliError::ValidationFailed(failures).into());
        }
        Ok(())
    }

    fn extractor_options(&self) -> ExtractorOptions {
        ExtractorOptions {
            punctuation: self
                .punctuation
                .as_deref()
                .map(PunctuationSet::new)
                .unwrap_or_default(),
        }
    }
}

/// Parse one markup file and collect its counters
pub fn check_file(path: &Path, options: &ExtractorOptions) -> FileReport {
    let mut report = FileReport {
        path: path.to_path_buf(),
        content_tokens: 0,
        markers: 0,
        discarded_tokens: 0,
        unclosed_scopes: 0,
        error: None,
    };

    let markup = match fs::read_to_string(path) {
        Ok(markup) => markup,
        Err(e) => {
            report.error = Some(format!("cannot read file: {e}"));
            return report;
        }
    };

    match extract_labels(&markup, options) {
        Ok(extraction) => {
            report.content_tokens = extraction.content_tokens();
            report.markers = extraction.tokens.len() - report.content_tokens;
            report.discarded_tokens = extraction.discarded_tokens;
            report.unclosed_scopes = extraction.unclosed_scopes;
        }
        Err(e) => report.error = Some(e.to_string()),
    }
    report
}

fn print_report(report: &FileReport) {
    let path = report.path.display();
    match &report.error {
        Some(error) => println!("✗ {path}: {error}"),
        None => {
            println!(
                "✓ {path}: {} tokens, {} markers, {} discarded",
                report.content_tokens, report.markers, report.discarded_tokens
            );
            if report.unclosed_scopes > 0 {
                println!("  warning: {} unclosed scope(s)", report.unclosed_scopes);
            }
        }
    }
}
