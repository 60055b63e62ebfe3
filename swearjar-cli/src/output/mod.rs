//! Output formatting module

use anyhow::Result;
use serde::{Deserialize, Serialize};
use swearjar_api::{Analysis, TextBlock};

/// Analysis of a single input file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// Path as given on the command line
    pub file: String,
    /// Matches and cleaned text
    pub analysis: Analysis,
    /// Clean and flagged blocks, computed only for formats that render them
    #[serde(skip)]
    pub blocks: Option<Vec<TextBlock>>,
}

impl FileReport {
    /// Number of matches in the file
    pub fn match_count(&self) -> usize {
        self.analysis.matches.len()
    }
}

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output the report of one file
    fn format_file(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Cleaned text
    #[default]
    Text,
    /// JSON array of per-file analyses
    Json,
    /// Markdown with flagged runs emphasized
    Markdown,
}

impl OutputFormat {
    /// All formats with a short description
    pub fn describe_all() -> [(&'static str, &'static str); 3] {
        [
            ("text", "Cleaned text"),
            ("json", "Array of { file, analysis } objects with match positions"),
            ("markdown", "Blocks with flagged runs emphasized and a summary footer"),
        ]
    }

    /// Whether the formatter needs text blocks
    pub fn needs_blocks(&self) -> bool {
        matches!(self, OutputFormat::Markdown)
    }
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
