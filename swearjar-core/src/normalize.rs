//! Length-preserving text normalization
//!
//! Every input character maps to exactly one output character, so a char
//! index computed on the normalized text is valid on the original text.

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Lower-case a character and strip its diacritics.
///
/// Characters whose canonical decomposition is not "base + combining marks"
/// (Hangul syllables, for instance) are only lower-cased.
#[inline]
pub fn normalize_char(ch: char) -> char {
    if ch.is_ascii() {
        return ch.to_ascii_lowercase();
    }

    let lower = ch.to_lowercase().next().unwrap_or(ch);
    let mut decomposed = std::iter::once(lower).nfd();
    let base = decomposed.next().unwrap_or(lower);
    if decomposed.all(is_combining_mark) {
        base
    } else {
        lower
    }
}

/// Normalize a whole string, one char per char.
pub fn normalize(text: &str) -> String {
    text.chars().map(normalize_char).collect()
}

/// Byte offset of every char boundary in a string.
///
/// Used to translate match offsets between the original, normalized and
/// folded texts, which share char indices but not byte offsets.
#[derive(Debug, Clone)]
pub(crate) struct CharOffsets {
    starts: Vec<usize>,
}

impl CharOffsets {
    pub(crate) fn new(text: &str) -> Self {
        let mut starts: Vec<usize> = text.char_indices().map(|(i, _)| i).collect();
        starts.push(text.len());
        Self { starts }
    }

    /// Char index of a byte offset that lies on a char boundary
    #[inline]
    pub(crate) fn char_index(&self, byte_offset: usize) -> Option<usize> {
        self.starts.binary_search(&byte_offset).ok()
    }

    /// Byte offset of a char index (the text length for one past the end)
    #[inline]
    pub(crate) fn byte_offset(&self, char_index: usize) -> Option<usize> {
        self.starts.get(char_index).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_accents_and_uppercase() {
        assert_eq!(normalize("THis is á tést!"), "this is a test!");
    }

    #[test]
    fn test_preserves_char_count() {
        let samples = ["Ångström", "İstanbul", "ÇAÇA", "naïve café", "한국어", "ǅemal"];
        for sample in samples {
            assert_eq!(
                normalize(sample).chars().count(),
                sample.chars().count(),
                "length changed for {sample}"
            );
        }
    }

    #[test]
    fn test_dotted_capital_i() {
        // Lower-cases to "i" followed by a combining dot
        assert_eq!(normalize_char('İ'), 'i');
    }

    #[test]
    fn test_hangul_is_not_decomposed() {
        assert_eq!(normalize("한국"), "한국");
    }

    #[test]
    fn test_symbols_pass_through() {
        assert_eq!(normalize("b@d $tuff!"), "b@d $tuff!");
    }

    #[test]
    fn test_char_offsets_translation() {
        let offsets = CharOffsets::new("aé b");
        assert_eq!(offsets.char_index(0), Some(0));
        assert_eq!(offsets.char_index(1), Some(1));
        assert_eq!(offsets.char_index(2), None);
        assert_eq!(offsets.char_index(3), Some(2));
        assert_eq!(offsets.byte_offset(4), Some(5));
        assert_eq!(offsets.byte_offset(5), None);
    }
}
