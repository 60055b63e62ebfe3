//! Filter configuration builder

use crate::error::{ApiError, Result};
use crate::Filter;
use std::fmt;
use std::sync::Arc;
use swearjar_core::{
    DictionarySource, EmbeddedDictionaries, MatchConfig, MatchTemplate, ReplaceDirection,
};

/// Base language value that disables the built-in dictionaries
pub const NO_LANGUAGE: &str = "none";

/// Builder for [`Filter`]
///
/// Terms and ignore phrases of the base language come first; the caller's
/// lists are appended to them.
#[derive(Clone)]
pub struct FilterBuilder {
    pub(crate) base_language: Option<String>,
    pub(crate) profanity: Vec<String>,
    pub(crate) ignore: Vec<String>,
    pub(crate) config: MatchConfig,
    pub(crate) dictionaries: Arc<dyn DictionarySource>,
}

impl Default for FilterBuilder {
    fn default() -> Self {
        Self {
            base_language: None,
            profanity: Vec::new(),
            ignore: Vec::new(),
            config: MatchConfig::default(),
            dictionaries: Arc::new(EmbeddedDictionaries),
        }
    }
}

impl fmt::Debug for FilterBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterBuilder")
            .field("base_language", &self.base_language)
            .field("profanity", &self.profanity)
            .field("ignore", &self.ignore)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl FilterBuilder {
    /// Create a builder without a base language
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base language: a dictionary code or `"none"`
    pub fn base_language(mut self, language: impl Into<String>) -> Self {
        let language = language.into();
        self.base_language = if language.eq_ignore_ascii_case(NO_LANGUAGE) {
            None
        } else {
            Some(language)
        };
        self
    }

    /// Replace the caller's forbidden terms
    pub fn profanity<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.profanity = terms.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the caller's ignore phrases
    pub fn ignore<I, S>(mut self, phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignore = phrases.into_iter().map(Into::into).collect();
        self
    }

    /// Set the replacement string
    pub fn replace_string(mut self, replace_string: impl Into<String>) -> Self {
        self.config.replace_string = replace_string.into();
        self
    }

    /// Set the replacement ratio
    pub fn replace_ratio(mut self, ratio: f64) -> Self {
        self.config.replace_ratio = ratio;
        self
    }

    /// Set the replacement direction
    pub fn replace_direction(mut self, direction: ReplaceDirection) -> Self {
        self.config.replace_direction = direction;
        self
    }

    /// Set the match template
    pub fn match_template(mut self, template: MatchTemplate) -> Self {
        self.config.match_template = template;
        self
    }

    /// Match symbols literally instead of folding them
    pub fn ignore_symbols(mut self, ignore_symbols: bool) -> Self {
        self.config.ignore_symbols = ignore_symbols;
        self
    }

    /// Take every match option from `config`.
    ///
    /// The ignore list of `config` is appended to the caller's ignore
    /// phrases and `config.dictionary` becomes the base language.
    pub fn match_config(mut self, config: MatchConfig) -> Self {
        let MatchConfig {
            ignore,
            replace_string,
            replace_ratio,
            match_template,
            replace_direction,
            ignore_symbols,
            dictionary,
        } = config;

        self.ignore.extend(ignore);
        if let Some(code) = dictionary {
            self = self.base_language(code);
        }
        self.config = MatchConfig {
            ignore: Vec::new(),
            replace_string,
            replace_ratio,
            match_template,
            replace_direction,
            ignore_symbols,
            dictionary: None,
        };
        self
    }

    /// Source used to resolve the base language
    pub fn dictionaries(mut self, source: Arc<dyn DictionarySource>) -> Self {
        self.dictionaries = source;
        self
    }

    /// Resolve the base language and build the filter
    pub fn build(self) -> Result<Filter> {
        let (mut profanity, mut ignore) = match self.base_language.as_deref() {
            Some(code) if code.trim().is_empty() => {
                return Err(ApiError::Config(
                    "base language must be a dictionary code or \"none\"".to_string(),
                ));
            }
            Some(code) => {
                let dictionary = self.dictionaries.require(code)?;
                (dictionary.profanity().to_vec(), dictionary.ignore().to_vec())
            }
            None => {
                if self.profanity.is_empty() {
                    log::warn!(
                        "no profanity list provided and no base language selected; no filtering will be done"
                    );
                }
                (Vec::new(), Vec::new())
            }
        };

        profanity.extend(self.profanity.iter().cloned());
        ignore.extend(self.ignore.iter().cloned());

        let mut config = self.config.clone();
        config.ignore = ignore;
        config.dictionary = None;

        Ok(Filter::from_parts(profanity, config, self))
    }
}
