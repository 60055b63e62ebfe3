//! Segmentation into flagged and untouched runs

use crate::replace::Redactor;
use crate::types::{Analysis, Candidate, TextBlock};

/// Split `text` into alternating clean and flagged blocks.
///
/// `matches` must be sorted by `start` and non-overlapping. Adjacent matches
/// are coalesced so that no two consecutive blocks share a flag.
pub fn split_blocks(text: &str, matches: &[Candidate], redactor: &Redactor<'_>) -> Vec<TextBlock> {
    assemble(
        text,
        matches.len(),
        matches
            .iter()
            .map(|m| (m.start, m.end, redactor.redact_span(&text[m.start..m.end]))),
    )
}

/// Blocks of an analysis, reusing the replacements it already computed
pub fn analysis_blocks(analysis: &Analysis) -> Vec<TextBlock> {
    assemble(
        &analysis.original,
        analysis.matches.len(),
        analysis
            .matches
            .iter()
            .map(|m| (m.start, m.end, m.replacement.clone())),
    )
}

fn assemble(
    text: &str,
    count: usize,
    spans: impl Iterator<Item = (usize, usize, String)>,
) -> Vec<TextBlock> {
    let mut blocks: Vec<TextBlock> = Vec::with_capacity(count * 2 + 1);
    let mut cursor = 0;

    for (start, end, cleaned) in spans {
        if start > cursor {
            let gap = &text[cursor..start];
            blocks.push(TextBlock {
                text: gap.to_string(),
                original: gap.to_string(),
                profanity: false,
            });
        }

        let original = &text[start..end];
        match blocks.last_mut() {
            Some(last) if last.profanity => {
                last.text.push_str(&cleaned);
                last.original.push_str(original);
            }
            _ => blocks.push(TextBlock {
                text: cleaned,
                original: original.to_string(),
                profanity: true,
            }),
        }
        cursor = end;
    }

    if cursor < text.len() {
        let tail = &text[cursor..];
        blocks.push(TextBlock {
            text: tail.to_string(),
            original: tail.to_string(),
            profanity: false,
        });
    }

    blocks
}
