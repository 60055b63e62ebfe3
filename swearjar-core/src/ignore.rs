//! False-positive suppression
//!
//! A candidate is discarded when an ignore phrase containing its term occurs
//! as a whole word in the original text and that occurrence covers the
//! candidate's span.

use crate::error::Result;
use crate::template::MatchTemplate;
use crate::types::Candidate;
use std::collections::HashMap;

/// Ignore phrases with lazily computed occurrence spans
#[derive(Debug)]
pub struct IgnoreFilter<'a> {
    text: &'a str,
    phrases: Vec<(&'a str, String)>,
    occurrences: HashMap<usize, Vec<(usize, usize)>>,
}

impl<'a> IgnoreFilter<'a> {
    /// Filter for `text`; empty phrases are dropped
    pub fn new<S: AsRef<str>>(text: &'a str, phrases: &'a [S]) -> Self {
        let phrases = phrases
            .iter()
            .map(AsRef::as_ref)
            .filter(|phrase| !phrase.is_empty())
            .map(|phrase| (phrase, phrase.to_lowercase()))
            .collect();

        Self {
            text,
            phrases,
            occurrences: HashMap::new(),
        }
    }

    /// Whether some ignore phrase covers the candidate
    pub fn is_ignored(&mut self, candidate: &Candidate) -> Result<bool> {
        let term = candidate.term.to_lowercase();

        for index in 0..self.phrases.len() {
            if !self.phrases[index].1.contains(&term) {
                continue;
            }
            let covered = self
                .occurrences_of(index)?
                .iter()
                .any(|&(start, end)| start <= candidate.start && candidate.end <= end);
            if covered {
                return Ok(true);
            }
        }

        Ok(false)
    }

    /// Keep only candidates not covered by an ignore phrase
    pub fn retain(&mut self, candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
        if self.phrases.is_empty() {
            return Ok(candidates);
        }

        let mut kept = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            if self.is_ignored(&candidate)? {
                log::debug!(
                    "ignoring '{}' at {}..{}",
                    candidate.term,
                    candidate.start,
                    candidate.end
                );
            } else {
                kept.push(candidate);
            }
        }
        Ok(kept)
    }

    fn occurrences_of(&mut self, index: usize) -> Result<&[(usize, usize)]> {
        if !self.occurrences.contains_key(&index) {
            // Ignore phrases always use whole-word boundaries on the original text
            let spans = MatchTemplate::WholeWord
                .compile(self.phrases[index].0)?
                .find_spans(self.text)?;
            self.occurrences.insert(index, spans);
        }
        Ok(self
            .occurrences
            .get(&index)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{find_candidates, PreparedText};

    fn filtered(text: &str, terms: &[&str], ignore: &[&str]) -> Vec<String> {
        let prepared = PreparedText::new(text, false);
        let candidates = find_candidates(&prepared, terms, &MatchTemplate::Partial).unwrap();
        IgnoreFilter::new(text, ignore)
            .retain(candidates)
            .unwrap()
            .into_iter()
            .map(|c| text[c.start..c.end].to_string())
            .collect()
    }

    #[test]
    fn test_ignored_phrase_suppresses_match() {
        assert!(filtered("check out my badge", &["bad"], &["badge"]).is_empty());
    }

    #[test]
    fn test_match_outside_ignored_phrase_is_kept() {
        assert_eq!(
            filtered("I won a badminton badge", &["bad"], &["badge"]),
            vec!["bad"]
        );
    }

    #[test]
    fn test_phrase_not_containing_term_is_not_considered() {
        assert_eq!(filtered("badge", &["bad"], &["good"]), vec!["bad"]);
    }

    #[test]
    fn test_phrase_must_be_a_whole_word() {
        // "badges" is not a whole-word occurrence of "badge"
        assert_eq!(filtered("badges", &["bad"], &["badge"]), vec!["bad"]);
    }

    #[test]
    fn test_any_covering_phrase_discards() {
        assert!(filtered("nothingness", &["nothing"], &["nothings", "nothingness"]).is_empty());
    }

    #[test]
    fn test_containment_is_case_insensitive() {
        assert!(filtered("My BADGE", &["Bad"], &["badge"]).is_empty());
    }

    #[test]
    fn test_empty_ignore_list_keeps_everything() {
        let none: [&str; 0] = [];
        assert_eq!(filtered("bad bad", &["bad"], &none), vec!["bad", "bad"]);
    }
}
