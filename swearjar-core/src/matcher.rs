//! Match engine
//!
//! Scans the normalized text (and, when folding is enabled, the folded text)
//! for every forbidden term. Offsets found on the derived texts are
//! translated back to the original text through char indices, which all
//! three texts share.

use crate::error::Result;
use crate::normalize::{normalize, CharOffsets};
use crate::symbols::fold;
use crate::template::{MatchTemplate, Pattern};
use crate::types::Candidate;

/// A derived text searched in place of the original
#[derive(Debug)]
struct View {
    text: String,
    offsets: CharOffsets,
}

impl View {
    fn new(text: String) -> Self {
        let offsets = CharOffsets::new(&text);
        Self { text, offsets }
    }
}

/// Original text together with its normalized and folded views
#[derive(Debug)]
pub struct PreparedText<'a> {
    original: &'a str,
    original_offsets: CharOffsets,
    normalized: View,
    folded: Option<View>,
}

impl<'a> PreparedText<'a> {
    /// Normalize `original` and, if `fold_symbols`, fold it as well
    pub fn new(original: &'a str, fold_symbols: bool) -> Self {
        let normalized = normalize(original);
        let folded = fold_symbols.then(|| View::new(fold(&normalized)));

        Self {
            original,
            original_offsets: CharOffsets::new(original),
            normalized: View::new(normalized),
            folded,
        }
    }

    /// Homoglyph-folded view, if folding is enabled
    pub fn folded(&self) -> Option<&str> {
        self.folded.as_ref().map(|view| view.text.as_str())
    }

    /// Translate a byte span of `view` into a candidate on the original text
    fn candidate(&self, view: &View, term: &str, start: usize, end: usize) -> Option<Candidate> {
        let char_start = view.offsets.char_index(start)?;
        let char_end = view.offsets.char_index(end)?;

        Some(Candidate {
            term: term.to_string(),
            start: self.original_offsets.byte_offset(char_start)?,
            end: self.original_offsets.byte_offset(char_end)?,
            char_start,
            char_end,
        })
    }
}

/// Collect match candidates for every term, sorted ascending by `start`.
///
/// A match on the folded view is only added when the same term has no
/// candidate with the identical span from the normalized view. Folded
/// matches are also searched with only the term itself folded, so that
/// symbols around it (`b@d!`) keep their boundary meaning.
pub fn find_candidates<S: AsRef<str>>(
    prepared: &PreparedText<'_>,
    terms: &[S],
    template: &MatchTemplate,
) -> Result<Vec<Candidate>> {
    let mut candidates = Vec::new();

    for term in terms {
        let term = term.as_ref();
        if term.is_empty() {
            continue;
        }

        let normalized_term = normalize(term);
        let pattern = template.compile(&normalized_term)?;
        let first = candidates.len();
        collect(prepared, &prepared.normalized, &pattern, term, &mut candidates)?;

        if let Some(folded) = &prepared.folded {
            let folded_term = fold(&normalized_term);
            let folded_pattern = if folded_term == normalized_term {
                pattern
            } else {
                template.compile(&folded_term)?
            };

            let mut folded_candidates = Vec::new();
            collect(prepared, folded, &folded_pattern, term, &mut folded_candidates)?;
            collect_in_context(
                prepared,
                folded,
                &folded_term,
                &folded_pattern,
                term,
                &mut folded_candidates,
            )?;
            for candidate in folded_candidates {
                let known = candidates[first..]
                    .iter()
                    .any(|c| c.start == candidate.start && c.end == candidate.end);
                if !known {
                    candidates.push(candidate);
                }
            }
        }
    }

    // Stable: candidates with equal starts keep discovery (term) order
    candidates.sort_by_key(|c| c.start);
    Ok(candidates)
}

fn collect(
    prepared: &PreparedText<'_>,
    view: &View,
    pattern: &Pattern,
    term: &str,
    out: &mut Vec<Candidate>,
) -> Result<()> {
    for (start, end) in pattern.find_spans(&view.text)? {
        if let Some(candidate) = prepared.candidate(view, term, start, end) {
            out.push(candidate);
        }
    }
    Ok(())
}

/// Match `pattern` against the normalized text with only the folded
/// occurrences of the term spliced in.
///
/// Every occurrence of `folded_term` on the folded view that folding
/// actually changed is substituted into a copy of the normalized text; a
/// match of the template covering that occurrence becomes a candidate. The
/// copy has the same char count as the original, so offsets translate the
/// same way as for the other views.
fn collect_in_context(
    prepared: &PreparedText<'_>,
    folded: &View,
    folded_term: &str,
    pattern: &Pattern,
    term: &str,
    out: &mut Vec<Candidate>,
) -> Result<()> {
    let normalized = &prepared.normalized;
    let locator = MatchTemplate::Partial.compile(folded_term)?;

    for (start, end) in locator.find_spans(&folded.text)? {
        let Some((splice_start, splice_end)) = folded
            .offsets
            .char_index(start)
            .zip(folded.offsets.char_index(end))
            .and_then(|(from, to)| {
                normalized
                    .offsets
                    .byte_offset(from)
                    .zip(normalized.offsets.byte_offset(to))
            })
        else {
            continue;
        };

        let occurrence = &folded.text[start..end];
        if normalized.text[splice_start..splice_end] == *occurrence {
            continue;
        }

        let spliced = View::new(format!(
            "{}{}{}",
            &normalized.text[..splice_start],
            occurrence,
            &normalized.text[splice_end..]
        ));
        let occurrence_end = splice_start + occurrence.len();

        for (found_start, found_end) in pattern.find_spans(&spliced.text)? {
            if found_start > splice_start {
                break;
            }
            if found_end >= occurrence_end {
                if let Some(candidate) = prepared.candidate(&spliced, term, found_start, found_end) {
                    out.push(candidate);
                }
            }
        }
    }
    Ok(())
}

/// Drop candidates that overlap an earlier kept candidate.
///
/// Leftmost start wins; on equal starts the longer span wins; on identical
/// spans the earlier term wins. The result is strictly ascending by `start`.
pub fn resolve_overlaps(mut candidates: Vec<Candidate>) -> Vec<Candidate> {
    candidates.sort_by(|a, b| a.start.cmp(&b.start).then(b.end.cmp(&a.end)));

    let mut resolved: Vec<Candidate> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        match resolved.last() {
            Some(last) if candidate.overlaps(last) => {
                log::trace!(
                    "dropping '{}' at {}..{}: overlaps '{}' at {}..{}",
                    candidate.term,
                    candidate.start,
                    candidate.end,
                    last.term,
                    last.start,
                    last.end
                );
            }
            _ => resolved.push(candidate),
        }
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(candidates: &[Candidate]) -> Vec<(usize, usize)> {
        candidates.iter().map(|c| (c.start, c.end)).collect()
    }

    #[test]
    fn test_positions_across_terms() {
        let text = "test bad word. this is another b4d one. this is a worst one!";
        let prepared = PreparedText::new(text, true);
        let found = find_candidates(&prepared, &["bad", "worst"], &MatchTemplate::WholeWord)
            .unwrap();

        assert_eq!(spans(&found), vec![(5, 8), (31, 34), (50, 55)]);
        assert_eq!(found[2].term, "worst");
    }

    #[test]
    fn test_fold_stable_match_is_not_counted_twice() {
        let prepared = PreparedText::new("a bad b4d b@d", true);
        let found = find_candidates(&prepared, &["bad"], &MatchTemplate::WholeWord).unwrap();
        assert_eq!(spans(&found), vec![(2, 5), (6, 9), (10, 13)]);
    }

    #[test]
    fn test_without_folding_symbols_are_literal() {
        let prepared = PreparedText::new("a bad b4d b@d", false);
        assert!(prepared.folded().is_none());
        let found = find_candidates(&prepared, &["bad"], &MatchTemplate::WholeWord).unwrap();
        assert_eq!(spans(&found), vec![(2, 5)]);
    }

    #[test]
    fn test_offsets_map_to_original_bytes() {
        let text = "très BÀD, ok";
        let prepared = PreparedText::new(text, true);
        let found = find_candidates(&prepared, &["bad"], &MatchTemplate::WholeWord).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].start..found[0].end], "BÀD");
        assert_eq!((found[0].char_start, found[0].char_end), (5, 8));
    }

    #[test]
    fn test_accented_term_matches_plain_text() {
        let prepared = PreparedText::new("un desgracado", true);
        let found =
            find_candidates(&prepared, &["desgraçado"], &MatchTemplate::WholeWord).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].term, "desgraçado");
    }

    #[test]
    fn test_folded_term_matches_folded_text() {
        let text = "we need to match $Уmβ0|§";
        let prepared = PreparedText::new(text, true);
        let found = find_candidates(&prepared, &["symbols"], &MatchTemplate::WholeWord).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].start..found[0].end], "$Уmβ0|§");
    }

    #[test]
    fn test_symbol_after_folded_word_is_a_boundary() {
        let text = "so B@D! and b4d| too";
        let prepared = PreparedText::new(text, true);
        let found = find_candidates(&prepared, &["bad"], &MatchTemplate::WholeWord).unwrap();

        assert_eq!(spans(&found), vec![(3, 6)]);
        assert_eq!(&text[found[0].start..found[0].end], "B@D");
    }

    #[test]
    fn test_folded_word_inside_longer_word_is_rejected() {
        let prepared = PreparedText::new("b4dger and emb@d", true);
        let found = find_candidates(&prepared, &["bad"], &MatchTemplate::WholeWord).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_folded_match_with_custom_template() {
        let text = "see [b@d] here";
        let prepared = PreparedText::new(text, true);
        let template = MatchTemplate::Custom(r"\[{0}\]".to_string());
        let found = find_candidates(&prepared, &["bad"], &template).unwrap();

        assert_eq!(found.len(), 1);
        assert_eq!(&text[found[0].start..found[0].end], "[b@d]");
    }

    #[test]
    fn test_empty_terms_are_skipped() {
        let prepared = PreparedText::new("anything", true);
        let found = find_candidates(&prepared, &["", "any"], &MatchTemplate::Partial).unwrap();
        assert_eq!(spans(&found), vec![(0, 3)]);
    }

    #[test]
    fn test_resolve_overlaps_prefers_leftmost_then_longest() {
        let prepared = PreparedText::new("badder", false);
        let found =
            find_candidates(&prepared, &["adder", "bad", "badd"], &MatchTemplate::Partial)
                .unwrap();
        let resolved = resolve_overlaps(found);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].term, "badd");
    }

    #[test]
    fn test_resolve_overlaps_identical_span_keeps_first_term() {
        let prepared = PreparedText::new("bad", false);
        let found = find_candidates(&prepared, &["bad", "BAD"], &MatchTemplate::Partial).unwrap();
        let resolved = resolve_overlaps(found);

        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved[0].term, "bad");
    }

    #[test]
    fn test_resolve_overlaps_keeps_adjacent_spans() {
        let prepared = PreparedText::new("badbad", false);
        let found = find_candidates(&prepared, &["bad"], &MatchTemplate::Partial).unwrap();
        assert_eq!(spans(&resolve_overlaps(found)), vec![(0, 3), (3, 6)]);
    }
}
