//! Per-call match configuration

use crate::replace::{clamp_ratio, Redactor, ReplaceDirection, DEFAULT_REPLACEMENT};
use crate::template::MatchTemplate;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Replacement string
    pub const REPLACE_STRING: &str = super::DEFAULT_REPLACEMENT;

    /// Fraction of each match that is replaced
    pub const REPLACE_RATIO: f64 = 1.0;
}

/// Configuration resolved by the caller and passed to every engine call.
///
/// The value is never mutated by the engine; build a new one to change
/// behavior between calls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Phrases that suppress a forbidden term found inside them
    pub ignore: Vec<String>,
    /// String cycled over redacted characters
    pub replace_string: String,
    /// Fraction of each match to redact, clamped to `[0, 1]`
    pub replace_ratio: f64,
    /// Template used to locate terms
    pub match_template: MatchTemplate,
    /// Which end keeps original characters when `replace_ratio < 1`
    pub replace_direction: ReplaceDirection,
    /// Match literally, without homoglyph folding
    pub ignore_symbols: bool,
    /// Dictionary whose terms and ignore phrases are appended to the caller's
    pub dictionary: Option<String>,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            ignore: Vec::new(),
            replace_string: defaults::REPLACE_STRING.to_string(),
            replace_ratio: defaults::REPLACE_RATIO,
            match_template: MatchTemplate::default(),
            replace_direction: ReplaceDirection::default(),
            ignore_symbols: false,
            dictionary: None,
        }
    }
}

impl MatchConfig {
    /// Set the ignore phrases
    pub fn with_ignore<I, S>(mut self, ignore: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = ignore.into_iter().map(Into::into).collect();
        self
    }

    /// Set the replacement string
    pub fn with_replace_string(mut self, replace_string: impl Into<String>) -> Self {
        self.replace_string = replace_string.into();
        self
    }

    /// Set the replacement ratio
    pub fn with_replace_ratio(mut self, ratio: f64) -> Self {
        self.replace_ratio = ratio;
        self
    }

    /// Set the replacement direction
    pub fn with_replace_direction(mut self, direction: ReplaceDirection) -> Self {
        self.replace_direction = direction;
        self
    }

    /// Set the match template
    pub fn with_match_template(mut self, template: MatchTemplate) -> Self {
        self.match_template = template;
        self
    }

    /// Disable (`true`) or enable (`false`) homoglyph folding
    pub fn with_ignore_symbols(mut self, ignore_symbols: bool) -> Self {
        self.ignore_symbols = ignore_symbols;
        self
    }

    /// Append a named dictionary
    pub fn with_dictionary(mut self, code: impl Into<String>) -> Self {
        self.dictionary = Some(code.into());
        self
    }

    /// Ratio actually applied
    pub fn effective_ratio(&self) -> f64 {
        clamp_ratio(self.replace_ratio)
    }

    /// Redactor for this configuration
    pub fn redactor(&self) -> Redactor<'_> {
        Redactor::new(
            &self.replace_string,
            self.replace_ratio,
            self.replace_direction,
        )
    }
}
