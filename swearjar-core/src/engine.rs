//! Analysis entry points
//!
//! Every call runs the same pipeline: resolve the effective term and ignore
//! lists, prepare the text views, collect candidates, drop ignored and
//! overlapping ones, then redact or split into blocks.

use crate::blocks::split_blocks;
use crate::config::MatchConfig;
use crate::dictionary::{DictionarySource, EmbeddedDictionaries};
use crate::error::Result;
use crate::ignore::IgnoreFilter;
use crate::matcher::{find_candidates, resolve_overlaps, PreparedText};
use crate::types::{Analysis, Candidate, TextBlock};

/// Term and ignore lists after the configured dictionary was appended
struct Lists<'a> {
    terms: Vec<&'a str>,
    ignore: Vec<&'a str>,
}

fn resolve_lists<'a, S: AsRef<str>>(
    terms: &'a [S],
    config: &'a MatchConfig,
    source: &'a dyn DictionarySource,
) -> Result<Option<Lists<'a>>> {
    let mut lists = Lists {
        terms: terms.iter().map(AsRef::as_ref).collect(),
        ignore: config.ignore.iter().map(String::as_str).collect(),
    };

    match config.dictionary.as_deref() {
        Some(code) => {
            let dictionary = source.require(code)?;
            lists
                .terms
                .extend(dictionary.profanity().iter().map(String::as_str));
            lists
                .ignore
                .extend(dictionary.ignore().iter().map(String::as_str));
        }
        None if lists.terms.is_empty() => {
            log::warn!(
                "no profanity terms and no dictionary configured; text is returned unfiltered"
            );
            return Ok(None);
        }
        None => {}
    }

    Ok(Some(lists))
}

/// Final ordered, non-overlapping matches for `text`
fn final_matches(text: &str, lists: &Lists<'_>, config: &MatchConfig) -> Result<Vec<Candidate>> {
    let prepared = PreparedText::new(text, !config.ignore_symbols);
    let candidates = find_candidates(&prepared, &lists.terms, &config.match_template)?;
    let found = candidates.len();

    let candidates = IgnoreFilter::new(text, &lists.ignore).retain(candidates)?;
    let matches = resolve_overlaps(candidates);

    log::debug!(
        "{} terms, {} ignore phrases: {} candidates, {} matches",
        lists.terms.len(),
        lists.ignore.len(),
        found,
        matches.len()
    );
    Ok(matches)
}

/// Analyze `text` using the embedded dictionaries
pub fn analyze<S: AsRef<str>>(text: &str, terms: &[S], config: &MatchConfig) -> Result<Analysis> {
    analyze_with(text, terms, config, &EmbeddedDictionaries)
}

/// Analyze `text`, resolving `config.dictionary` against `source`.
///
/// With no terms and no dictionary the text is returned unchanged and a
/// warning is logged.
pub fn analyze_with<S: AsRef<str>>(
    text: &str,
    terms: &[S],
    config: &MatchConfig,
    source: &dyn DictionarySource,
) -> Result<Analysis> {
    let Some(lists) = resolve_lists(terms, config, source)? else {
        return Ok(Analysis::unchanged(text));
    };

    let matches = final_matches(text, &lists, config)?;
    let (cleaned, replacements) = config.redactor().redact(text, &matches);

    let matches: Vec<_> = matches
        .into_iter()
        .zip(replacements)
        .map(|(candidate, replacement)| candidate.into_record(replacement))
        .collect();

    Ok(Analysis {
        original: text.to_string(),
        cleaned,
        profanity: !matches.is_empty(),
        matches,
    })
}

/// Redacted copy of `text` using the embedded dictionaries
pub fn get_safe_text<S: AsRef<str>>(text: &str, terms: &[S], config: &MatchConfig) -> Result<String> {
    get_safe_text_with(text, terms, config, &EmbeddedDictionaries)
}

/// Redacted copy of `text`
pub fn get_safe_text_with<S: AsRef<str>>(
    text: &str,
    terms: &[S],
    config: &MatchConfig,
    source: &dyn DictionarySource,
) -> Result<String> {
    let Some(lists) = resolve_lists(terms, config, source)? else {
        return Ok(text.to_string());
    };

    let matches = final_matches(text, &lists, config)?;
    Ok(config.redactor().redact(text, &matches).0)
}

/// Alternating clean and flagged blocks using the embedded dictionaries
pub fn get_text_blocks<S: AsRef<str>>(
    text: &str,
    terms: &[S],
    config: &MatchConfig,
) -> Result<Vec<TextBlock>> {
    get_text_blocks_with(text, terms, config, &EmbeddedDictionaries)
}

/// Alternating clean and flagged blocks
pub fn get_text_blocks_with<S: AsRef<str>>(
    text: &str,
    terms: &[S],
    config: &MatchConfig,
    source: &dyn DictionarySource,
) -> Result<Vec<TextBlock>> {
    let redactor = config.redactor();
    let Some(lists) = resolve_lists(terms, config, source)? else {
        return Ok(split_blocks(text, &[], &redactor));
    };

    let matches = final_matches(text, &lists, config)?;
    Ok(split_blocks(text, &matches, &redactor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::{Dictionary, NoDictionaries};
    use crate::error::CoreError;
    use crate::template::MatchTemplate;
    use std::collections::HashMap;

    #[test]
    fn test_analyze_basic() {
        let analysis = analyze("test bad word", &["bad"], &MatchConfig::default()).unwrap();
        assert!(analysis.profanity);
        assert_eq!(analysis.cleaned, "test *** word");
        assert_eq!(analysis.matches.len(), 1);
        assert_eq!(analysis.matches[0].replacement, "***");
    }

    #[test]
    fn test_no_terms_returns_input() {
        let none: [&str; 0] = [];
        let analysis = analyze("what the hell", &none, &MatchConfig::default()).unwrap();
        assert_eq!(analysis, Analysis::unchanged("what the hell"));
    }

    #[test]
    fn test_dictionary_terms_are_appended() {
        let none: [&str; 0] = [];
        let config = MatchConfig::default().with_dictionary("en");
        let analysis = analyze("oh shit", &none, &config).unwrap();
        assert_eq!(analysis.cleaned, "oh ****");
    }

    #[test]
    fn test_dictionary_ignore_phrases_are_appended() {
        let config = MatchConfig::default()
            .with_dictionary("en")
            .with_match_template(MatchTemplate::Partial);
        let safe = get_safe_text("first class", &["ass"], &config).unwrap();
        assert_eq!(safe, "first class");
    }

    #[test]
    fn test_unknown_dictionary_is_an_error() {
        let config = MatchConfig::default().with_dictionary("xx");
        let result = analyze_with("text", &["bad"], &config, &NoDictionaries);
        assert!(matches!(result, Err(CoreError::UnknownDictionary(_))));
    }

    #[test]
    fn test_custom_source() {
        let mut source = HashMap::new();
        source.insert(
            "pets".to_string(),
            Dictionary::new("pets", "Pets", vec!["cat".to_string()], Vec::new()),
        );
        let none: [&str; 0] = [];
        let config = MatchConfig::default().with_dictionary("pets");

        let safe = get_safe_text_with("my cat", &none, &config, &source).unwrap();
        assert_eq!(safe, "my ***");
    }

    #[test]
    fn test_blocks_without_terms_cover_text() {
        let none: [&str; 0] = [];
        let blocks = get_text_blocks("fine", &none, &MatchConfig::default()).unwrap();
        assert_eq!(blocks.len(), 1);
        assert!(!blocks[0].profanity);
        assert_eq!(blocks[0].original, "fine");
    }

    #[test]
    fn test_invalid_template_is_an_error() {
        let config =
            MatchConfig::default().with_match_template(MatchTemplate::Custom("({0}".to_string()));
        let result = analyze("bad", &["bad"], &config);
        assert!(matches!(result, Err(CoreError::Pattern { .. })));
    }
}
