//! Pipeline configuration

use std::path::{Path, PathBuf};
use teialign_core::{AlignerOptions, ExtractorOptions, Normalization, PunctuationSet};

use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;

/// Default configuration constants
pub mod defaults {
    /// Share of documents routed to training when both outputs exist
    pub const SPLIT_RATIO: f64 = 0.8;

    /// Documents handed to the worker pool per batch in parallel mode
    pub const PARALLEL_BATCH: usize = 64;

    /// Markup sub-directory of a corpus root
    pub const MARKUP_SUBDIR: &str = "tei";

    /// Raw sub-directory of a corpus root
    pub const RAW_SUBDIR: &str = "raw";
}

/// Everything a pipeline run needs
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Directory of `.tei` / `.tei.xml` markup files
    pub markup_dir: PathBuf,
    /// Directory of raw two-column token files
    pub raw_dir: PathBuf,
    /// Training output file
    pub training_output: Option<PathBuf>,
    /// Evaluation output file
    pub evaluation_output: Option<PathBuf>,
    /// Probability of routing a document to training when both outputs exist
    pub split_ratio: f64,
    /// Seed for the split draw (None = entropy)
    pub seed: Option<u64>,
    /// Extraction settings
    pub extractor: ExtractorOptions,
    /// Alignment settings
    pub aligner: AlignerOptions,
    /// Execution strategy
    pub execution_mode: ExecutionMode,
    /// Worker threads for parallel execution (None = all available)
    pub threads: Option<usize>,
    /// Documents per parallel batch
    pub batch_size: usize,
}

impl PipelineConfig {
    /// Create a configuration builder
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.training_output.is_none() && self.evaluation_output.is_none() {
            return Err(EngineError::Config(
                "at least one of the training or evaluation outputs is required".into(),
            ));
        }

        if let (Some(training), Some(evaluation)) = (&self.training_output, &self.evaluation_output)
        {
            if training == evaluation {
                return Err(EngineError::Config(
                    "training and evaluation outputs must be different files".into(),
                ));
            }
        }

        if !(0.0..=1.0).contains(&self.split_ratio) {
            return Err(EngineError::Config(format!(
                "split ratio must be within [0, 1], got {}",
                self.split_ratio
            )));
        }

        if self.aligner.scan_window == Some(0) {
            return Err(EngineError::Config(
                "scan window must be greater than 0".into(),
            ));
        }

        if self.threads == Some(0) {
            return Err(EngineError::Config(
                "threads must be greater than 0".into(),
            ));
        }

        if self.batch_size == 0 {
            return Err(EngineError::Config(
                "batch size must be greater than 0".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`PipelineConfig`]
#[derive(Debug, Default)]
pub struct PipelineConfigBuilder {
    markup_dir: Option<PathBuf>,
    raw_dir: Option<PathBuf>,
    training_output: Option<PathBuf>,
    evaluation_output: Option<PathBuf>,
    split_ratio: Option<f64>,
    seed: Option<u64>,
    punctuation: Option<String>,
    scan_window: Option<usize>,
    normalization: Option<Normalization>,
    block_start_hint: Option<String>,
    page_start_hint: Option<String>,
    execution_mode: Option<ExecutionMode>,
    threads: Option<usize>,
    batch_size: Option<usize>,
}

impl PipelineConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `<root>/tei` and `<root>/raw` as the corpus directories
    pub fn corpus_root(self, root: impl AsRef<Path>) -> Self {
        let root = root.as_ref();
        self.markup_dir(root.join(defaults::MARKUP_SUBDIR))
            .raw_dir(root.join(defaults::RAW_SUBDIR))
    }

    /// Set the markup directory
    pub fn markup_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.markup_dir = Some(dir.into());
        self
    }

    /// Set the raw directory
    pub fn raw_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.raw_dir = Some(dir.into());
        self
    }

    /// Set the training output file
    pub fn training_output(mut self, path: Option<PathBuf>) -> Self {
        self.training_output = path;
        self
    }

    /// Set the evaluation output file
    pub fn evaluation_output(mut self, path: Option<PathBuf>) -> Self {
        self.evaluation_output = path;
        self
    }

    /// Set the split ratio
    pub fn split_ratio(mut self, ratio: f64) -> Self {
        self.split_ratio = Some(ratio);
        self
    }

    /// Fix the split seed
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Replace the punctuation delimiters
    pub fn punctuation(mut self, punctuation: impl Into<String>) -> Self {
        self.punctuation = Some(punctuation.into());
        self
    }

    /// Bound the per-row scan (None = to the end of the sequence)
    pub fn scan_window(mut self, window: Option<usize>) -> Self {
        self.scan_window = window;
        self
    }

    /// Set the comparison normalization
    pub fn normalization(mut self, normalization: Normalization) -> Self {
        self.normalization = Some(normalization);
        self
    }

    /// Set the block-start hint
    pub fn block_start_hint(mut self, hint: impl Into<String>) -> Self {
        self.block_start_hint = Some(hint.into());
        self
    }

    /// Set the page-start hint
    pub fn page_start_hint(mut self, hint: impl Into<String>) -> Self {
        self.page_start_hint = Some(hint.into());
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.execution_mode = Some(mode);
        self
    }

    /// Set the worker thread count (None = all available)
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.threads = count;
        self
    }

    /// Set the parallel batch size
    pub fn batch_size(mut self, size: usize) -> Self {
        self.batch_size = Some(size);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<PipelineConfig> {
        let markup_dir = self
            .markup_dir
            .ok_or_else(|| EngineError::Config("markup directory is required".into()))?;
        let raw_dir = self
            .raw_dir
            .ok_or_else(|| EngineError::Config("raw directory is required".into()))?;

        let extractor = ExtractorOptions {
            punctuation: self
                .punctuation
                .as_deref()
                .map(PunctuationSet::new)
                .unwrap_or_default(),
        };

        let mut aligner = AlignerOptions {
            scan_window: self.scan_window,
            ..AlignerOptions::default()
        };
        if let Some(normalization) = self.normalization {
            aligner.normalization = normalization;
        }
        if let Some(hint) = self.block_start_hint {
            aligner.block_start_hint = hint;
        }
        if let Some(hint) = self.page_start_hint {
            aligner.page_start_hint = hint;
        }

        let config = PipelineConfig {
            markup_dir,
            raw_dir,
            training_output: self.training_output,
            evaluation_output: self.evaluation_output,
            split_ratio: self.split_ratio.unwrap_or(defaults::SPLIT_RATIO),
            seed: self.seed,
            extractor,
            aligner,
            execution_mode: self.execution_mode.unwrap_or_default(),
            threads: self.threads,
            batch_size: self.batch_size.unwrap_or(defaults::PARALLEL_BATCH),
        };

        config.validate()?;
        Ok(config)
    }
}
