//! Position-accurate redaction
//!
//! A span of `L` chars has `ceil(L * ratio)` chars replaced. The direction
//! decides which end of the span keeps its original characters.

use crate::error::CoreError;
use crate::types::Candidate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Replacement used when the configured string is empty
pub const DEFAULT_REPLACEMENT: &str = "*";

/// Which end of a partially redacted span keeps the original characters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ReplaceDirection {
    /// Replace from the left, keep the trailing characters
    #[serde(rename = "LTR", alias = "ltr")]
    Ltr,
    /// Keep the leading characters, replace towards the right
    #[default]
    #[serde(rename = "RTL", alias = "rtl")]
    Rtl,
}

impl fmt::Display for ReplaceDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReplaceDirection::Ltr => write!(f, "LTR"),
            ReplaceDirection::Rtl => write!(f, "RTL"),
        }
    }
}

impl FromStr for ReplaceDirection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "LTR" => Ok(ReplaceDirection::Ltr),
            "RTL" => Ok(ReplaceDirection::Rtl),
            _ => Err(CoreError::Config(format!(
                "replace direction must be LTR or RTL, got `{s}`"
            ))),
        }
    }
}

/// Clamp a replacement ratio into `[0, 1]`; NaN means full replacement
pub fn clamp_ratio(ratio: f64) -> f64 {
    if ratio.is_nan() {
        1.0
    } else {
        ratio.clamp(0.0, 1.0)
    }
}

/// Cycle `replacement` and truncate it to exactly `count` chars
pub fn fill(replacement: &str, count: usize) -> String {
    let replacement = if replacement.is_empty() {
        DEFAULT_REPLACEMENT
    } else {
        replacement
    };
    replacement.chars().cycle().take(count).collect()
}

/// Applies the replacement rule to matched spans
#[derive(Debug, Clone)]
pub struct Redactor<'a> {
    replacement: &'a str,
    ratio: f64,
    direction: ReplaceDirection,
}

impl<'a> Redactor<'a> {
    /// Create a redactor; the ratio is clamped
    pub fn new(replacement: &'a str, ratio: f64, direction: ReplaceDirection) -> Self {
        Self {
            replacement,
            ratio: clamp_ratio(ratio),
            direction,
        }
    }

    /// Redacted form of a single matched span
    pub fn redact_span(&self, span: &str) -> String {
        let length = span.chars().count();
        let replaced = ((length as f64 * self.ratio).ceil() as usize).min(length);
        let kept = length - replaced;
        let replacement = fill(self.replacement, replaced);

        match self.direction {
            ReplaceDirection::Rtl => span.chars().take(kept).chain(replacement.chars()).collect(),
            ReplaceDirection::Ltr => replacement.chars().chain(span.chars().skip(replaced)).collect(),
        }
    }

    /// Redact `text` at the given spans.
    ///
    /// `matches` must be sorted by `start` and non-overlapping. Returns the
    /// cleaned text and the replacement of every span, in order.
    pub fn redact(&self, text: &str, matches: &[Candidate]) -> (String, Vec<String>) {
        let mut cleaned = String::with_capacity(text.len());
        let mut replacements = Vec::with_capacity(matches.len());
        let mut cursor = 0;

        for m in matches {
            debug_assert!(m.start >= cursor, "matches must be ordered and disjoint");
            cleaned.push_str(&text[cursor..m.start]);
            let replacement = self.redact_span(&text[m.start..m.end]);
            cleaned.push_str(&replacement);
            replacements.push(replacement);
            cursor = m.end;
        }
        cleaned.push_str(&text[cursor..]);

        (cleaned, replacements)
    }
}
