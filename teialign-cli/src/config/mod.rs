//! Configuration file support
//!
//! An optional TOML file supplies defaults for `align`; command-line flags
//! override whatever it sets.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use teialign_core::Normalization;
use teialign_engine::defaults;

/// CLI configuration structure
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Corpus location
    #[serde(default)]
    pub corpus: CorpusConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Alignment tuning
    #[serde(default)]
    pub alignment: AlignmentConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

impl CliConfig {
    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }
}

/// Corpus directories
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CorpusConfig {
    /// Corpus root holding `tei/` and `raw/`
    pub root: Option<PathBuf>,

    /// Markup directory, overrides `root`
    pub markup: Option<PathBuf>,

    /// Raw directory, overrides `root`
    pub raw: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Training output file
    pub training: Option<PathBuf>,

    /// Evaluation output file
    pub evaluation: Option<PathBuf>,

    /// Share of documents routed to training
    pub split_ratio: f64,

    /// Seed for the split draw
    pub seed: Option<u64>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            training: None,
            evaluation: None,
            split_ratio: defaults::SPLIT_RATIO,
            seed: None,
        }
    }
}

/// Alignment tuning
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct AlignmentConfig {
    /// Tokens examined per raw row (unset = unbounded)
    pub scan_window: Option<usize>,

    /// Comparison normalization
    pub normalization: NormalizationMode,

    /// Block-start hint in raw lines
    pub block_start_hint: Option<String>,

    /// Page-start hint in raw lines
    pub page_start_hint: Option<String>,

    /// Punctuation delimiters for markup tokenization
    pub punctuation: Option<String>,
}

/// Performance-related configuration
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct PerformanceConfig {
    /// Process documents on a worker pool
    pub parallel: bool,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,

    /// Documents per parallel batch
    pub batch_size: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            worker_threads: 0,
            batch_size: defaults::PARALLEL_BATCH,
        }
    }
}

/// Text comparison used when matching raw rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum NormalizationMode {
    /// Compare text as is
    Exact,
    /// Ignore whitespace
    #[default]
    RemoveWhitespace,
    /// Ignore whitespace and letter case
    CaseFold,
}

impl From<NormalizationMode> for Normalization {
    fn from(mode: NormalizationMode) -> Self {
        match mode {
            NormalizationMode::Exact => Normalization::Exact,
            NormalizationMode::RemoveWhitespace => Normalization::RemoveWhitespace,
            NormalizationMode::CaseFold => Normalization::CaseFold,
        }
    }
}
