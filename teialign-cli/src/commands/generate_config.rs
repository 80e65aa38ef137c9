//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::path::PathBuf;
use teialign_core::{DEFAULT_BLOCK_START_HINT, DEFAULT_PAGE_START_HINT};
use teialign_engine::defaults;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        fs::write(&self.output, template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template written to {}", self.output.display());
        println!();
        println!("Next steps:");
        println!("1. Set the corpus location and output files");
        println!("2. Run the alignment:");
        println!("   teialign align --config {}", self.output.display());

        Ok(())
    }
}

/// Commented configuration template
pub fn template() -> String {
    format!(
        r#"# teialign configuration

[corpus]
# Corpus root holding tei/ (markup) and raw/ (raw token files)
root = "corpus"
# Or point at the two directories separately:
# markup = "corpus/tei"
# raw = "corpus/raw"

[output]
# At least one of training / evaluation is required
training = "train.txt"
# evaluation = "eval.txt"
# Share of documents routed to training when both outputs are set
split_ratio = {split_ratio}
# Fix the seed to make the split reproducible
# seed = 42

[alignment]
# Tokens examined per raw row; unbounded when unset
# scan_window = 500
# exact | remove-whitespace | case-fold
normalization = "remove-whitespace"
block_start_hint = "{block}"
page_start_hint = "{page}"
# Punctuation delimiters for markup tokenization
# punctuation = ".,;:!?()"

[performance]
parallel = false
# Worker threads, 0 = all cores
worker_threads = 0
batch_size = {batch}
"#,
        split_ratio = defaults::SPLIT_RATIO,
        block = DEFAULT_BLOCK_START_HINT,
        page = DEFAULT_PAGE_START_HINT,
        batch = defaults::PARALLEL_BATCH,
    )
}
