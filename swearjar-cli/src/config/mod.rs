//! Configuration module

use crate::error::CliError;
use crate::output::OutputFormat;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use swearjar_api::{MatchTemplate, ReplaceDirection};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Filter configuration
    #[serde(default)]
    pub filter: FilterConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

impl CliConfig {
    /// Parse a TOML configuration
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()).into())
    }

    /// Read and parse a TOML configuration file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }
}

/// Filter-related configuration; unset options keep the filter defaults
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct FilterConfig {
    /// Base language: dictionary code or `none`
    pub language: Option<String>,

    /// Additional forbidden terms
    pub terms: Vec<String>,

    /// Additional ignore phrases
    pub ignore: Vec<String>,

    /// Replacement string
    pub replace_string: Option<String>,

    /// Fraction of each match to replace
    pub replace_ratio: Option<f64>,

    /// Which end keeps original characters
    pub replace_direction: Option<ReplaceDirection>,

    /// Whole-word, partial or a custom template
    pub match_template: Option<MatchTemplate>,

    /// Match symbols literally
    pub ignore_symbols: Option<bool>,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: OutputFormat,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: OutputFormat::Text,
            pretty_json: true,
        }
    }
}
