//! swearjar command-line tool

use clap::Parser;
use std::process::ExitCode;
use swearjar_cli::commands::Commands;

/// Detect and redact profanity in text files
#[derive(Debug, Parser)]
#[command(name = "swearjar", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Exit status for errors; 1 is reserved for `check --fail-on-match`
const ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command.execute() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(ERROR_EXIT)
        }
    }
}
