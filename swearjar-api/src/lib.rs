//! Public API for swearjar profanity filtering
//!
//! A [`Filter`] holds a resolved term list, ignore list and match options so
//! the same configuration can be applied to many texts. Filters are
//! immutable; use [`Filter::to_builder`] to derive a reconfigured one.

#![warn(missing_docs)]

pub mod config;
pub mod dto;
pub mod error;

use error::Result;
use swearjar_core::{DictionarySource, NoDictionaries};

// Re-export key types
pub use config::{FilterBuilder, NO_LANGUAGE};
pub use dto::Input;
pub use error::ApiError;
pub use swearjar_core::{
    Analysis, Dictionary, EmbeddedDictionaries, MatchConfig, MatchRecord, MatchTemplate,
    ReplaceDirection, TextBlock,
};

/// Profanity filter with a fixed configuration
#[derive(Debug, Clone)]
pub struct Filter {
    profanity: Vec<String>,
    config: MatchConfig,
    builder: FilterBuilder,
}

impl Filter {
    /// Create a builder
    pub fn builder() -> FilterBuilder {
        FilterBuilder::new()
    }

    /// Filter using the embedded dictionary for `code`
    pub fn with_language(code: &str) -> Result<Self> {
        FilterBuilder::new().base_language(code).build()
    }

    /// Filter using only the given terms
    pub fn with_terms<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        FilterBuilder::new().profanity(terms).build()
    }

    pub(crate) fn from_parts(
        profanity: Vec<String>,
        config: MatchConfig,
        builder: FilterBuilder,
    ) -> Self {
        Self {
            profanity,
            config,
            builder,
        }
    }

    /// Analyze text and report every match
    pub fn analyze(&self, text: &str) -> Result<Analysis> {
        if self.profanity.is_empty() {
            return Ok(Analysis::unchanged(text));
        }
        let analysis =
            swearjar_core::analyze_with(text, &self.profanity, &self.config, self.no_source())?;
        Ok(analysis)
    }

    /// Redacted copy of `text`
    pub fn get_safe(&self, text: &str) -> Result<String> {
        if self.profanity.is_empty() {
            return Ok(text.to_string());
        }
        let cleaned = swearjar_core::get_safe_text_with(
            text,
            &self.profanity,
            &self.config,
            self.no_source(),
        )?;
        Ok(cleaned)
    }

    /// Split `text` into alternating clean and flagged blocks.
    ///
    /// When the text was already analyzed, [`Analysis::blocks`] gives the
    /// same result without matching again.
    pub fn get_blocks(&self, text: &str) -> Result<Vec<TextBlock>> {
        if self.profanity.is_empty() {
            return Ok(Analysis::unchanged(text).blocks());
        }
        let blocks = swearjar_core::get_text_blocks_with(
            text,
            &self.profanity,
            &self.config,
            self.no_source(),
        )?;
        Ok(blocks)
    }

    /// Read `input` and analyze its text.
    ///
    /// Read and decoding failures name the source; see [`Input::name`].
    pub fn analyze_input(&self, input: Input) -> Result<Analysis> {
        let name = input.name().into_owned();
        let text = input.read_text()?;
        let analysis = self.analyze(&text)?;
        log::debug!("{name}: {} matches", analysis.matches.len());
        Ok(analysis)
    }

    /// Analyze text and serialize the result as JSON
    #[cfg(feature = "serde")]
    pub fn analyze_json(&self, text: &str, pretty: bool) -> Result<String> {
        let analysis = self.analyze(text)?;
        let json = if pretty {
            serde_json::to_string_pretty(&analysis)?
        } else {
            serde_json::to_string(&analysis)?
        };
        Ok(json)
    }

    /// Effective forbidden terms, base language first
    pub fn profanity(&self) -> &[String] {
        &self.profanity
    }

    /// Effective ignore phrases, base language first
    pub fn ignore(&self) -> &[String] {
        &self.config.ignore
    }

    /// Effective match options
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Base language code, `None` when built without one
    pub fn base_language(&self) -> Option<&str> {
        self.builder.base_language.as_deref()
    }

    /// Builder holding the settings this filter was built from
    pub fn to_builder(&self) -> FilterBuilder {
        self.builder.clone()
    }

    // Lists are already resolved
    fn no_source(&self) -> &'static dyn DictionarySource {
        &NoDictionaries
    }
}

// Convenience functions

/// Analyze text against `terms` with default options
pub fn analyze_text<S: AsRef<str>>(text: &str, terms: &[S]) -> Result<Analysis> {
    Ok(swearjar_core::analyze(text, terms, &MatchConfig::default())?)
}

/// Redact text against `terms` with default options
pub fn get_safe_text<S: AsRef<str>>(text: &str, terms: &[S]) -> Result<String> {
    Ok(swearjar_core::get_safe_text(
        text,
        terms,
        &MatchConfig::default(),
    )?)
}

/// Analyze text with the embedded dictionary for `code`
pub fn analyze_text_with_language(text: &str, code: &str) -> Result<Analysis> {
    Filter::with_language(code)?.analyze(text)
}
