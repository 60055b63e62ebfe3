//! Homoglyph and leetspeak folding
//!
//! Maps lookalike characters (digits, punctuation, Cyrillic and Greek
//! homoglyphs, accented variants) onto a canonical Latin letter. Folding is
//! one char per char and idempotent.

use std::collections::HashMap;
use std::sync::OnceLock;

/// Canonical letter and the characters folded onto it.
///
/// `i` and `l` are visually close, both fold to `i`.
pub const SYMBOL_GROUPS: &[(char, &str)] = &[
    ('a', "a@4∆^αλΔàáâãäåāăǎǟǡǻȁȃạảấầẩẫậắằẳẵặ"),
    ('b', "b8ƀɓбБвЪЬβ"),
    ('e', "e3εèéêëēĕėęěɛέеЕёξ"),
    ('i', "i1!|lІї"),
    ('o', "o0όοσօФωоОӦӧ"),
    ('s', "s5$śŝşšș§"),
    ('t', "t7+τţťțŧтТ"),
    ('u', "uυμùúûüũūŭůűųưǔǖǘǚǜȕȗứừửữự"),
    ('x', "x×хХ"),
    ('y', "y¥ýÿŷƴȳẏẙỳỵỷỹγУу"),
    ('z', "z2ƶȥźżžẑẓẕ"),
];

static TABLE: OnceLock<SymbolTable> = OnceLock::new();

/// Fold lookup with an ASCII fast path
#[derive(Debug)]
struct SymbolTable {
    /// Target for chars 0-127, `0` when unmapped
    ascii: [u8; 128],
    non_ascii: HashMap<char, char>,
}

impl SymbolTable {
    fn build() -> Self {
        let mut ascii = [0u8; 128];
        let mut non_ascii = HashMap::new();

        for &(target, sources) in SYMBOL_GROUPS {
            for source in sources.chars() {
                // Lookup is case-insensitive; the first group to claim a char keeps it
                let variants = std::iter::once(source)
                    .chain(single(source.to_lowercase()))
                    .chain(single(source.to_uppercase()));
                for ch in variants {
                    if ch.is_ascii() {
                        let slot = &mut ascii[ch as usize];
                        if *slot == 0 {
                            *slot = target as u8;
                        }
                    } else {
                        non_ascii.entry(ch).or_insert(target);
                    }
                }
            }
        }

        Self { ascii, non_ascii }
    }

    #[inline]
    fn fold(&self, ch: char) -> char {
        if ch.is_ascii() {
            match self.ascii[ch as usize] {
                0 => ch,
                target => target as char,
            }
        } else {
            self.non_ascii.get(&ch).copied().unwrap_or(ch)
        }
    }
}

/// Case mappings that expand to several chars have no single-char variant
fn single(mut mapping: impl Iterator<Item = char>) -> Option<char> {
    let first = mapping.next()?;
    mapping.next().is_none().then_some(first)
}

fn table() -> &'static SymbolTable {
    TABLE.get_or_init(SymbolTable::build)
}

/// Fold a single character
#[inline]
pub fn fold_char(ch: char) -> char {
    table().fold(ch)
}

/// Fold every character of a string
pub fn fold(text: &str) -> String {
    let table = table();
    text.chars().map(|ch| table.fold(ch)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_folds_symbols_and_l_to_i() {
        assert_eq!(
            fold("this is a b@d t3st! c0ll"),
            "this is a bad testi coii"
        );
    }

    #[test]
    fn test_folds_foreign_homoglyphs() {
        assert_eq!(fold("$уmβ0|§"), "symbois");
        assert_eq!(fold("bαd"), "bad");
    }

    #[test]
    fn test_case_insensitive_lookup() {
        // Only the upper-case Cyrillic form is listed
        assert_eq!(fold_char('ф'), 'o');
        assert_eq!(fold_char('B'), 'b');
        assert_eq!(fold_char('L'), 'i');
    }

    #[test]
    fn test_unmapped_chars_pass_through() {
        assert_eq!(fold("hello world?"), "heiio worid?");
        assert_eq!(fold_char('q'), 'q');
        assert_eq!(fold_char('日'), '日');
    }

    #[test]
    fn test_groups_are_disjoint() {
        let mut owner: HashMap<char, char> = HashMap::new();
        for &(target, sources) in SYMBOL_GROUPS {
            for ch in sources.chars() {
                if let Some(previous) = owner.insert(ch, target) {
                    assert_eq!(previous, target, "{ch} claimed by {previous} and {target}");
                }
            }
        }
    }

    #[test]
    fn test_targets_fold_to_themselves() {
        for &(target, _) in SYMBOL_GROUPS {
            assert_eq!(fold_char(target), target);
        }
    }
}
