//! CLI command implementations

use crate::output::OutputFormat;
use anyhow::Result;
use clap::Subcommand;
use std::process::ExitCode;
use swearjar_api::{EmbeddedDictionaries, NO_LANGUAGE};
use swearjar_core::DictionarySource;

pub mod check;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Check text files and print their redacted form
    Check(check::CheckArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Validate a dictionary file
    Validate(validate::ValidateArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available base languages
    Languages,

    /// List available output formats
    Formats,
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> Result<ExitCode> {
        match self {
            Commands::Check(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute();
                Ok(ExitCode::SUCCESS)
            }
            Commands::Validate(args) => {
                args.execute()?;
                Ok(ExitCode::SUCCESS)
            }
        }
    }
}

impl ListCommands {
    /// Lines printed by the subcommand
    pub fn lines(&self) -> Vec<String> {
        match self {
            ListCommands::Languages => {
                let mut lines: Vec<String> = EmbeddedDictionaries
                    .codes()
                    .into_iter()
                    .filter_map(EmbeddedDictionaries::get)
                    .map(|d| format!("{:<8} {}", d.code(), d.name()))
                    .collect();
                lines.push(format!("{:<8} No base dictionary", NO_LANGUAGE));
                lines
            }
            ListCommands::Formats => OutputFormat::describe_all()
                .iter()
                .map(|(name, description)| format!("{name:<8} {description}"))
                .collect(),
        }
    }

    fn execute(&self) {
        for line in self.lines() {
            println!("{line}");
        }
    }
}
