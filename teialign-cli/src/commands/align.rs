//! Align command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use teialign_engine::{ExecutionMode, Pipeline, PipelineConfig};

use crate::config::{CliConfig, NormalizationMode};
use crate::error::CliError;
use crate::output::{JsonFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the align command
#[derive(Debug, Args)]
pub struct AlignArgs {
    /// Corpus root containing `tei/` and `raw/`
    #[arg(long, value_name = "DIR")]
    pub corpus: Option<PathBuf>,

    /// Markup directory (overrides the corpus root)
    #[arg(long, value_name = "DIR")]
    pub markup: Option<PathBuf>,

    /// Raw token directory (overrides the corpus root)
    #[arg(long, value_name = "DIR")]
    pub raw: Option<PathBuf>,

    /// Training output file
    #[arg(long, value_name = "FILE")]
    pub train: Option<PathBuf>,

    /// Evaluation output file
    #[arg(long, value_name = "FILE")]
    pub eval: Option<PathBuf>,

    /// Share of documents routed to training when both outputs are given
    #[arg(long, value_name = "RATIO")]
    pub split_ratio: Option<f64>,

    /// Seed for the split draw (reproducible output)
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Tokens examined per raw row
    #[arg(long, value_name = "TOKENS")]
    pub scan_window: Option<usize>,

    /// Text comparison used for matching
    #[arg(long, value_enum)]
    pub normalization: Option<NormalizationMode>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process documents on a worker pool
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads (implies --parallel)
    #[arg(short = 't', long, value_name = "COUNT")]
    pub threads: Option<usize>,

    /// Summary format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported summary formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Text,
    /// JSON object
    Json,
}

impl AlignArgs {
    /// Execute the align command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting corpus alignment");
        log::debug!("Arguments: {self:?}");

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let pipeline = Pipeline::new(self.pipeline_config(&file_config)?)?;

        let entries = pipeline.discover()?;
        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_documents(entries.len() as u64);

        let summary = pipeline
            .run_entries(&entries, |entry| progress.document_completed(&entry.name))
            .context("Alignment failed")?;
        progress.finish();

        let mut formatter: Box<dyn OutputFormatter> = match self.format {
            OutputFormat::Text => Box::new(TextFormatter::stdout()),
            OutputFormat::Json => Box::new(JsonFormatter::new(std::io::stdout())),
        };
        formatter.format_summary(&summary)?;
        formatter.finish()?;

        Ok(())
    }

    /// Merge the command line over the configuration file
    pub fn pipeline_config(&self, file: &CliConfig) -> Result<PipelineConfig> {
        let mut builder = PipelineConfig::builder();

        if let Some(root) = self.corpus.as_ref().or(file.corpus.root.as_ref()) {
            builder = builder.corpus_root(root);
        } else if (self.markup.is_none() && file.corpus.markup.is_none())
            || (self.raw.is_none() && file.corpus.raw.is_none())
        {
            return Err(CliError::ConfigError(
                "no corpus given: use --corpus, or both --markup and --raw".to_string(),
            )
            .into());
        }
        if let Some(markup) = self.markup.as_ref().or(file.corpus.markup.as_ref()) {
            builder = builder.markup_dir(markup);
        }
        if let Some(raw) = self.raw.as_ref().or(file.corpus.raw.as_ref()) {
            builder = builder.raw_dir(raw);
        }

        let alignment = &file.alignment;
        if let Some(punctuation) = &alignment.punctuation {
            builder = builder.punctuation(punctuation.as_str());
        }
        if let Some(hint) = &alignment.block_start_hint {
            builder = builder.block_start_hint(hint.as_str());
        }
        if let Some(hint) = &alignment.page_start_hint {
            builder = builder.page_start_hint(hint.as_str());
        }

        let performance = &file.performance;
        let configured_threads = self
            .threads
            .or((performance.worker_threads > 0).then_some(performance.worker_threads));
        let parallel = self.parallel || self.threads.is_some() || performance.parallel;
        let (mode, threads) = if parallel {
            let threads = configured_threads.unwrap_or_else(num_cpus::get);
            log::info!("Parallel processing with {threads} threads");
            (ExecutionMode::Parallel, Some(threads))
        } else {
            (ExecutionMode::Sequential, None)
        };

        let config = builder
            .training_output(self.train.clone().or_else(|| file.output.training.clone()))
            .evaluation_output(self.eval.clone().or_else(|| file.output.evaluation.clone()))
            .split_ratio(self.split_ratio.unwrap_or(file.output.split_ratio))
            .seed(self.seed.or(file.output.seed))
            .scan_window(self.scan_window.or(alignment.scan_window))
            .normalization(self.normalization.unwrap_or(alignment.normalization).into())
            .execution_mode(mode)
            .threads(threads)
            .batch_size(performance.batch_size)
            .build()?;

        Ok(config)
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::Path;
    use teialign_core::Normalization;

    #[derive(Debug, Parser)]
    struct TestCli {
        #[command(flatten)]
        args: AlignArgs,
    }

    fn parse(args: &[&str]) -> AlignArgs {
        let mut argv = vec!["align"];
        argv.extend_from_slice(args);
        TestCli::parse_from(argv).args
    }

    #[test]
    fn test_corpus_shorthand() {
        let args = parse(&["--corpus", "data", "--train", "train.txt"]);
        let config = args.pipeline_config(&CliConfig::default()).unwrap();

        assert_eq!(config.markup_dir, Path::new("data").join("tei"));
        assert_eq!(config.raw_dir, Path::new("data").join("raw"));
        assert_eq!(config.training_output, Some(PathBuf::from("train.txt")));
        assert_eq!(config.evaluation_output, None);
        assert_eq!(config.execution_mode, ExecutionMode::Sequential);
    }

    #[test]
    fn test_explicit_directories() {
        let args = parse(&["--markup", "m", "--raw", "r", "--eval", "eval.txt"]);
        let config = args.pipeline_config(&CliConfig::default()).unwrap();
        assert_eq!(config.markup_dir, PathBuf::from("m"));
        assert_eq!(config.raw_dir, PathBuf::from("r"));
    }

    #[test]
    fn test_missing_corpus_is_rejected() {
        let args = parse(&["--markup", "m", "--train", "train.txt"]);
        let err = args.pipeline_config(&CliConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_outputs_are_rejected() {
        let args = parse(&["--corpus", "data"]);
        assert!(args.pipeline_config(&CliConfig::default()).is_err());
    }

    #[test]
    fn test_flags_override_file() {
        let mut file = CliConfig::default();
        file.corpus.root = Some(PathBuf::from("from-file"));
        file.output.training = Some(PathBuf::from("file-train.txt"));
        file.output.split_ratio = 0.5;
        file.output.seed = Some(1);
        file.alignment.scan_window = Some(10);

        let args = parse(&[
            "--train",
            "cli-train.txt",
            "--seed",
            "9",
            "--normalization",
            "case-fold",
        ]);
        let config = args.pipeline_config(&file).unwrap();

        assert_eq!(config.markup_dir, Path::new("from-file").join("tei"));
        assert_eq!(config.training_output, Some(PathBuf::from("cli-train.txt")));
        assert_eq!(config.split_ratio, 0.5);
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.aligner.scan_window, Some(10));
        assert_eq!(config.aligner.normalization, Normalization::CaseFold);
    }

    #[test]
    fn test_threads_imply_parallel() {
        let args = parse(&["--corpus", "data", "--train", "t.txt", "--threads", "3"]);
        let config = args.pipeline_config(&CliConfig::default()).unwrap();
        assert_eq!(config.execution_mode, ExecutionMode::Parallel);
        assert_eq!(config.threads, Some(3));
    }

    #[test]
    fn test_parallel_defaults_to_all_cores() {
        let args = parse(&["--corpus", "data", "--train", "t.txt", "--parallel"]);
        let config = args.pipeline_config(&CliConfig::default()).unwrap();
        assert_eq!(config.threads, Some(num_cpus::get()));
    }

    #[test]
    fn test_invalid_ratio_is_rejected() {
        let args = parse(&["--corpus", "data", "--train", "t.txt", "--split-ratio", "1.5"]);
        assert!(args.pipeline_config(&CliConfig::default()).is_err());
    }
}
