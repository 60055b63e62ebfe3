//! API error types

use std::string::FromUtf8Error;
use swearjar_core::CoreError;
use thiserror::Error;

/// API-level errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// Matching engine or dictionary error
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An input source could not be read
    #[error("failed to read {name}: {source}")]
    Read {
        /// Source name
        name: String,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An input source is not valid UTF-8
    #[error("{name} is not valid UTF-8: {source}")]
    Encoding {
        /// Source name
        name: String,
        /// Underlying decoding error
        #[source]
        source: FromUtf8Error,
    },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Serialization error
    #[cfg(feature = "serde")]
    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

/// Result type for API operations
pub type Result<T> = std::result::Result<T, ApiError>;
