//! Splitting normalized text into alphabet and non-alphabet runs

use crate::alphabet::is_alphabet_char;

/// Split `text` into maximal runs of alphabet-class and other characters
///
/// Runs alternate between the two classes and no run is empty, so joining
/// the returned tokens reproduces `text` exactly.
pub fn segment(text: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut start = 0;
    let mut current: Option<bool> = None;

    for (idx, ch) in text.char_indices() {
        let class = is_alphabet_char(ch);
        match current {
            Some(prev) if prev != class => {
                tokens.push(text[start..idx].to_string());
                start = idx;
            }
            _ => {}
        }
        current = Some(class);
    }

    if start < text.len() {
        tokens.push(text[start..].to_string());
    }

    tokens
}
