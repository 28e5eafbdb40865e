//! Output formatting module

use anyhow::Result;
use pyrus_core::Word;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Start the words of a new input file
    fn begin_file(&mut self, name: &str) -> Result<()>;

    /// Format and output a single word
    fn format_word(&mut self, word: &Word) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

/// Text shown for a word, optionally without stress marks
pub(crate) fn display_text(word: &Word, strip_accents: bool) -> String {
    word.text(strip_accents, false)
}

/// Make whitespace visible on a single line
pub(crate) fn escape_whitespace(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '\n' => escaped.push_str("\\n"),
            '\t' => escaped.push_str("\\t"),
            '\r' => escaped.push_str("\\r"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
