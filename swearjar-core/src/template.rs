//! Match templates and pattern compilation
//!
//! A template is a regular expression containing the `{0}` placeholder. The
//! placeholder is replaced by the escaped term and the result is compiled
//! case-insensitively.

use crate::error::{CoreError, Result};
use fancy_regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Placeholder substituted by the term
pub const PLACEHOLDER: &str = "{0}";

/// Matches the term only as a full word.
///
/// Left boundary: start of text, whitespace or an opening bracket/quote.
/// Right boundary: end of text, whitespace, a closing bracket/quote or
/// sentence punctuation. Both boundaries are zero-width.
pub const WHOLE_WORD_TEMPLATE: &str = r#"(?:^|(?<=[\s\[({"'])){0}(?=$|[\s\])}!?.,;:"'])"#;

/// Matches the term anywhere, including inside longer words
pub const PARTIAL_TEMPLATE: &str = "{0}";

/// How a term is located in text
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum MatchTemplate {
    /// `bad` matches `bad` and `[bad]` but not `badger`
    #[default]
    WholeWord,
    /// `bad` matches inside `badminton`
    Partial,
    /// Caller template containing `{0}`
    Custom(String),
}

impl MatchTemplate {
    /// Template source with the `{0}` placeholder
    pub fn as_str(&self) -> &str {
        match self {
            MatchTemplate::WholeWord => WHOLE_WORD_TEMPLATE,
            MatchTemplate::Partial => PARTIAL_TEMPLATE,
            MatchTemplate::Custom(template) => template,
        }
    }

    /// Compile the template for a term
    pub fn compile(&self, term: &str) -> Result<Pattern> {
        Pattern::new(self.as_str(), term)
    }
}

impl fmt::Display for MatchTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchTemplate::WholeWord => write!(f, "whole-word"),
            MatchTemplate::Partial => write!(f, "partial"),
            MatchTemplate::Custom(template) => write!(f, "{template}"),
        }
    }
}

impl FromStr for MatchTemplate {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "whole-word" | "whole_word" | "full-word" | "fullword" => Ok(MatchTemplate::WholeWord),
            "partial" => Ok(MatchTemplate::Partial),
            custom if custom.contains(PLACEHOLDER) => Ok(MatchTemplate::Custom(custom.to_string())),
            other => Err(CoreError::Config(format!(
                "match template `{other}` is neither `whole-word`, `partial` nor a template containing {PLACEHOLDER}"
            ))),
        }
    }
}

impl TryFrom<String> for MatchTemplate {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<MatchTemplate> for String {
    fn from(template: MatchTemplate) -> Self {
        template.to_string()
    }
}

/// A compiled, case-insensitive search pattern for one term
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
    template: String,
    term: String,
}

impl Pattern {
    /// Substitute the escaped term into `template` and compile it
    pub fn new(template: &str, term: &str) -> Result<Self> {
        let source = format!(
            "(?i){}",
            template.replace(PLACEHOLDER, &fancy_regex::escape(term))
        );
        let regex = Regex::new(&source).map_err(|e| CoreError::Pattern {
            template: template.to_string(),
            term: term.to_string(),
            source: Box::new(e),
        })?;

        Ok(Self {
            regex,
            template: template.to_string(),
            term: term.to_string(),
        })
    }

    /// Byte spans of all non-overlapping, non-empty matches in `haystack`
    pub fn find_spans(&self, haystack: &str) -> Result<Vec<(usize, usize)>> {
        let mut spans = Vec::new();
        for found in self.regex.find_iter(haystack) {
            let found = found.map_err(|e| CoreError::Pattern {
                template: self.template.clone(),
                term: self.term.clone(),
                source: Box::new(e),
            })?;
            if found.start() < found.end() {
                spans.push((found.start(), found.end()));
            }
        }
        Ok(spans)
    }
}
