//! Text normalization ahead of segmentation

use crate::alphabet::{is_accent_mark, EN_DASH, HYPHEN};
use unicode_normalization::UnicodeNormalization;

/// Canonicalize raw text for segmentation
///
/// En-dashes become plain hyphens, then the result is NFKD-decomposed so
/// that stress marks, breves and diaereses appear as separate combining
/// characters after their base letter.
pub fn normalize(text: &str) -> String {
    text.chars()
        .map(|ch| if ch == EN_DASH { HYPHEN } else { ch })
        .nfkd()
        .collect()
}

/// Lowercase already-normalized text and drop its stress marks
///
/// This is the form used for lexicon keys and lexicon queries.
pub fn canonical_form(normalized: &str) -> String {
    normalized
        .chars()
        .filter(|&ch| !is_accent_mark(ch))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Normalize then canonicalize arbitrary text
pub fn canonicalize(text: &str) -> String {
    canonical_form(&normalize(text))
}
