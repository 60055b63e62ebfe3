//! Validate command implementation

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;
use swearjar_core::Dictionary;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to dictionary file to validate
    #[arg(short = 'd', long, value_name = "FILE", required = true)]
    pub dictionary: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating dictionary: {}", self.dictionary.display());

        match Dictionary::from_file(&self.dictionary) {
            Ok(dictionary) => {
                println!("✓ Dictionary is valid!");
                println!("  Code: {}", dictionary.code());
                println!("  Name: {}", dictionary.name());
                println!("  Terms: {}", dictionary.profanity().len());
                println!("  Ignore phrases: {}", dictionary.ignore().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Dictionary is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}
