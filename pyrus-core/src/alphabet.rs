//! Character tables for Cyrillic segmentation
//!
//! All lookups are allocation-free and operate on single `char`s of
//! NFKD-normalized text.

/// Combining acute accent (stress mark)
pub const COMBINING_ACUTE: char = '\u{0301}';

/// Combining breve, as in decomposed `й`
pub const COMBINING_BREVE: char = '\u{0306}';

/// Combining diaeresis, as in decomposed `ё`
pub const COMBINING_DIAERESIS: char = '\u{0308}';

/// Plain ASCII hyphen-minus
pub const HYPHEN: char = '-';

/// En-dash, folded into [`HYPHEN`] during normalization
pub const EN_DASH: char = '\u{2013}';

/// Hyphen as a token string
pub const HYPHEN_STR: &str = "-";

/// Check whether `ch` is a letter of the Russian alphabet
///
/// Covers `А`..`я` plus `Ё`/`ё`. Decomposed text only carries the base
/// letters, but the precomposed forms are accepted so the check also works
/// on raw input.
#[inline]
pub fn is_cyrillic(ch: char) -> bool {
    matches!(ch, '\u{0410}'..='\u{044F}' | '\u{0401}' | '\u{0451}')
}

/// Check whether `ch` is one of the combining marks kept inside words
#[inline]
pub fn is_combining_mark(ch: char) -> bool {
    matches!(ch, COMBINING_ACUTE | COMBINING_BREVE | COMBINING_DIAERESIS)
}

/// Check whether `ch` belongs to the segmentation alphabet class
#[inline]
pub fn is_alphabet_char(ch: char) -> bool {
    is_cyrillic(ch) || is_combining_mark(ch)
}

/// Check whether `ch` is removed when building canonical text
///
/// Only the stress mark is stripped; breve and diaeresis distinguish
/// separate letters.
#[inline]
pub fn is_accent_mark(ch: char) -> bool {
    ch == COMBINING_ACUTE
}

/// Check whether a token starts with a Cyrillic letter
#[inline]
pub fn starts_with_cyrillic(token: &str) -> bool {
    token.chars().next().is_some_and(is_cyrillic)
}

/// Remove stress marks from `text`
pub fn strip_accents(text: &str) -> String {
    text.chars().filter(|&ch| !is_accent_mark(ch)).collect()
}
