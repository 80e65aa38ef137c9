//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use teialign_core::StructuralLabel;

pub mod align;
pub mod generate_config;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Align a corpus and write labeled training/evaluation data
    Align(align::AlignArgs),

    /// Check markup files for well-formedness and scope balance
    Validate(validate::ValidateArgs),

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the structural labels recognized in markup
    Labels,

    /// List available summary formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Align(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                for line in subcommand.entries() {
                    println!("{line}");
                }
                Ok(())
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the subcommand
    pub fn entries(&self) -> Vec<String> {
        match self {
            ListCommands::Labels => StructuralLabel::ALL
                .iter()
                .map(|label| label.tag_name().to_string())
                .collect(),
            ListCommands::Formats => vec![
                "text - human-readable run summary".to_string(),
                "json - run summary as a JSON object".to_string(),
            ],
        }
    }
}
