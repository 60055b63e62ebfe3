//! Core error types

use thiserror::Error;

/// Errors raised by the matching engine and dictionary loading
#[derive(Debug, Error)]
pub enum CoreError {
    /// A match template (or the term substituted into it) did not compile,
    /// or the compiled pattern failed while scanning
    #[error("invalid pattern for '{term}' (template `{template}`): {source}")]
    Pattern {
        /// Template the pattern was built from
        template: String,
        /// Term substituted into the template
        term: String,
        /// Underlying regex error
        #[source]
        source: Box<fancy_regex::Error>,
    },

    /// Requested dictionary is not provided by the dictionary source
    #[error("unknown dictionary: {0}")]
    UnknownDictionary(String),

    /// Dictionary data could not be parsed or is inconsistent
    #[error("dictionary error: {0}")]
    Dictionary(String),

    /// Configuration value could not be parsed
    #[error("invalid configuration: {0}")]
    Config(String),

    /// I/O error while reading dictionary files
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
