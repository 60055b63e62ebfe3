//! Check command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{
    FileReport, JsonFormatter, MarkdownFormatter, OutputFormat, OutputFormatter, TextFormatter,
};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::Args;
use rayon::prelude::*;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use swearjar_api::{Filter, FilterBuilder, Input, MatchTemplate, ReplaceDirection};

/// Base language used when neither the command line nor the config sets one
pub const DEFAULT_LANGUAGE: &str = "en";

/// Arguments for the check command
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Base language dictionary, or `none` for custom terms only
    #[arg(short, long, value_name = "CODE")]
    pub language: Option<String>,

    /// Additional forbidden terms
    #[arg(short, long = "terms", value_name = "TERM", value_delimiter = ',')]
    pub terms: Vec<String>,

    /// File with one forbidden term per line
    #[arg(long, value_name = "FILE")]
    pub terms_file: Option<PathBuf>,

    /// Phrases that suppress a match found inside them
    #[arg(long, value_name = "PHRASE", value_delimiter = ',')]
    pub ignore: Vec<String>,

    /// String cycled over redacted characters
    #[arg(long, value_name = "STRING")]
    pub replace_string: Option<String>,

    /// Fraction of each match to redact (0.0 - 1.0)
    #[arg(long, value_name = "RATIO")]
    pub ratio: Option<f64>,

    /// LTR keeps the end of a match, RTL keeps its start
    #[arg(long, value_name = "LTR|RTL")]
    pub direction: Option<ReplaceDirection>,

    /// whole-word, partial, or a custom pattern containing {0}
    #[arg(long, value_name = "TEMPLATE")]
    pub template: Option<MatchTemplate>,

    /// Match symbols literally instead of folding look-alikes
    #[arg(long)]
    pub literal: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "SWEARJAR_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of worker threads (default: number of CPUs)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Exit with status 1 when any file contains a match
    #[arg(long)]
    pub fail_on_match: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CheckArgs {
    /// Execute the check command
    pub fn execute(&self) -> Result<ExitCode> {
        // Initialize logging based on verbosity
        self.init_logging()?;

        log::info!("Starting profanity check");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let filter = self.build_filter(&config)?;
        log::info!(
            "Filtering with {} terms and {} ignore phrases",
            filter.profanity().len(),
            filter.ignore().len()
        );

        let files = resolve_patterns(&self.input)?;
        let format = self.format.unwrap_or(config.output.default_format);
        let reports = self.check_files(&filter, &files, format)?;

        let mut formatter = self.formatter(format, config.output.pretty_json, files.len() > 1)?;
        for report in &reports {
            formatter.format_file(report)?;
        }
        formatter.finish()?;

        let flagged = reports.iter().filter(|r| r.analysis.profanity).count();
        log::info!("{flagged} of {} files contain matches", reports.len());

        if self.fail_on_match && flagged > 0 {
            Ok(ExitCode::from(1))
        } else {
            Ok(ExitCode::SUCCESS)
        }
    }

    /// Merge config file values and command-line flags into a filter
    pub fn build_filter(&self, config: &CliConfig) -> Result<Filter> {
        let file = &config.filter;

        let language = self
            .language
            .clone()
            .or_else(|| file.language.clone())
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let mut terms = file.terms.clone();
        terms.extend(self.terms.iter().cloned());
        if let Some(path) = &self.terms_file {
            terms.extend(FileReader::read_terms(path)?);
        }

        let mut ignore = file.ignore.clone();
        ignore.extend(self.ignore.iter().cloned());

        let mut builder = FilterBuilder::new()
            .base_language(language)
            .profanity(terms)
            .ignore(ignore);

        if let Some(replace_string) = self.replace_string.clone().or(file.replace_string.clone()) {
            builder = builder.replace_string(replace_string);
        }
        if let Some(ratio) = self.ratio.or(file.replace_ratio) {
            builder = builder.replace_ratio(ratio);
        }
        if let Some(direction) = self.direction.or(file.replace_direction) {
            builder = builder.replace_direction(direction);
        }
        if let Some(template) = self.template.clone().or(file.match_template.clone()) {
            builder = builder.match_template(template);
        }
        if self.literal || file.ignore_symbols.unwrap_or(false) {
            builder = builder.ignore_symbols(true);
        }

        builder
            .build()
            .map_err(|e| CliError::FilterError(e.to_string()).into())
    }

    fn check_files(
        &self,
        filter: &Filter,
        files: &[PathBuf],
        format: OutputFormat,
    ) -> Result<Vec<FileReport>> {
        let threads = self.threads.unwrap_or_else(num_cpus::get).max(1);
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .context("Failed to create worker pool")?;
        log::debug!("Checking {} files on {threads} threads", files.len());

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        // Collecting into a Vec keeps the input order
        let reports = pool.install(|| {
            files
                .par_iter()
                .map(|path| {
                    let report = check_file(filter, path, format.needs_blocks())?;
                    progress.file_completed(&report.file);
                    Ok(report)
                })
                .collect::<Result<Vec<_>>>()
        });

        progress.finish();
        reports
    }

    fn formatter(
        &self,
        format: OutputFormat,
        pretty_json: bool,
        headers: bool,
    ) -> Result<Box<dyn OutputFormatter>> {
        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        Ok(match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, headers)),
            OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty_json)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
        })
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
            // A logger may already be installed when running in-process
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }

        Ok(())
    }
}

fn check_file(filter: &Filter, path: &Path, with_blocks: bool) -> Result<FileReport> {
    let input = Input::file(path);
    let file = input.name().into_owned();

    let analysis = filter
        .analyze_input(input)
        .with_context(|| format!("Failed to check file: {file}"))?;
    let blocks = with_blocks.then(|| analysis.blocks());

    Ok(FileReport {
        file,
        analysis,
        blocks,
    })
}
