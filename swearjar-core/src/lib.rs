//! Rule-based profanity matching and redaction
//!
//! Given a list of forbidden terms and a body of text, the engine reports every
//! match with its position, produces a redacted copy of the text and can split
//! the text into alternating clean and flagged blocks for highlighting.
//!
//! # Pipeline
//!
//! - **Normalization**: lower-case and strip diacritics, one char per char
//! - **Symbol folding**: map homoglyphs such as `4`, `@` or `α` to Latin letters
//! - **Matching**: compile each term through a whole-word, partial or custom template
//! - **Ignore filtering**: drop matches covered by a whitelisted phrase
//! - **Overlap resolution**: leftmost, then longest, then first term wins
//! - **Redaction**: partial replacement with ratio and direction control
//!
//! Offsets are always reported against the original text.
//!
//! # Example
//!
//! ```rust
//! use swearjar_core::{analyze, MatchConfig, ReplaceDirection};
//!
//! let config = MatchConfig::default()
//!     .with_replace_ratio(0.5)
//!     .with_replace_direction(ReplaceDirection::Rtl);
//!
//! let analysis = analyze("test b4d word", &["bad"], &config).unwrap();
//! assert!(analysis.profanity);
//! assert_eq!(analysis.cleaned, "test b** word");
//! assert_eq!(analysis.matches[0].start, 5);
//! ```

pub mod blocks;
pub mod config;
pub mod dictionary;
pub mod engine;
pub mod error;
pub mod ignore;
pub mod matcher;
pub mod normalize;
pub mod replace;
pub mod symbols;
pub mod template;
pub mod types;

pub use config::MatchConfig;
pub use dictionary::{Dictionary, DictionarySource, EmbeddedDictionaries, NoDictionaries};
pub use engine::{
    analyze, analyze_with, get_safe_text, get_safe_text_with, get_text_blocks,
    get_text_blocks_with,
};
pub use error::{CoreError, Result};
pub use replace::ReplaceDirection;
pub use template::MatchTemplate;
pub use types::{Analysis, Candidate, MatchRecord, TextBlock};
