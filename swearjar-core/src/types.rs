//! Match and analysis result types

use serde::{Deserialize, Serialize};

/// A forbidden term found in the original text.
///
/// `start..end` is a byte range into the original text and always lies on
/// char boundaries; `char_start..char_end` is the same span in chars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// Forbidden term as supplied by the caller
    pub term: String,
    /// Byte offset of the first matched char
    pub start: usize,
    /// Byte offset one past the last matched char
    pub end: usize,
    /// Char offset of the first matched char
    pub char_start: usize,
    /// Char offset one past the last matched char
    pub char_end: usize,
}

impl Candidate {
    /// Whether two spans share at least one byte
    pub fn overlaps(&self, other: &Candidate) -> bool {
        self.start < other.end && other.start < self.end
    }

    pub(crate) fn into_record(self, replacement: String) -> MatchRecord {
        MatchRecord {
            term: self.term,
            start: self.start,
            end: self.end,
            char_start: self.char_start,
            char_end: self.char_end,
            replacement,
        }
    }
}

/// A reported match together with its redacted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Forbidden term as supplied by the caller
    pub term: String,
    /// Byte offset into the original text
    pub start: usize,
    /// Byte offset one past the match in the original text
    pub end: usize,
    /// Char offset into the original text
    pub char_start: usize,
    /// Char offset one past the match
    pub char_end: usize,
    /// Cleaned text occupying the same char span
    pub replacement: String,
}

/// Result of analyzing one text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Analysis {
    /// Input text
    pub original: String,
    /// Redacted text
    pub cleaned: String,
    /// True iff `matches` is non-empty
    pub profanity: bool,
    /// Matches ordered by strictly ascending `start`
    pub matches: Vec<MatchRecord>,
}

impl Analysis {
    /// Result for text that was not filtered
    pub fn unchanged(text: &str) -> Self {
        Self {
            original: text.to_string(),
            cleaned: text.to_string(),
            profanity: false,
            matches: Vec::new(),
        }
    }

    /// Terms that matched, in match order
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(|m| m.term.as_str())
    }

    /// Split the analyzed text into clean and flagged blocks without
    /// matching it again
    pub fn blocks(&self) -> Vec<TextBlock> {
        crate::blocks::analysis_blocks(self)
    }
}

/// A maximal run of either flagged or untouched text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Block text after redaction
    pub text: String,
    /// Block text before redaction
    pub original: String,
    /// Whether the block is a flagged run
    pub profanity: bool,
}
