//! Typed word units produced by the parser

use crate::alphabet::{self, starts_with_cyrillic};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Classification of a parsed word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    /// Unclassified (default-constructed word)
    #[default]
    None,
    /// Single Cyrillic word
    Word,
    /// Cyrillic words joined by a hyphen, e.g. `кто-то`
    HyphenatedWord,
    /// Multi-word expression found in the lexicon
    Mwe,
    /// Punctuation, digits, foreign script
    Other,
    /// Whitespace-only run
    Whitespace,
}

impl WordType {
    /// Every variant, in code order
    pub const ALL: [WordType; 6] = [
        WordType::None,
        WordType::Word,
        WordType::HyphenatedWord,
        WordType::Mwe,
        WordType::Other,
        WordType::Whitespace,
    ];

    /// Stable numeric code used in structured output
    pub fn code(self) -> u8 {
        match self {
            WordType::None => 0,
            WordType::Word => 1,
            WordType::HyphenatedWord => 2,
            WordType::Mwe => 3,
            WordType::Other => 4,
            WordType::Whitespace => 5,
        }
    }

    /// Lowercase name
    pub fn as_str(self) -> &'static str {
        match self {
            WordType::None => "none",
            WordType::Word => "word",
            WordType::HyphenatedWord => "hyphenated_word",
            WordType::Mwe => "mwe",
            WordType::Other => "other",
            WordType::Whitespace => "whitespace",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WordType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_ascii_lowercase().replace('-', "_");
        WordType::ALL
            .into_iter()
            .find(|t| t.as_str() == lowered || t.code().to_string() == lowered)
            .ok_or_else(|| crate::Error::InvalidInput(format!("unknown word type: {s}")))
    }
}

/// Token storage; most words hold one to three tokens
pub type Tokens = SmallVec<[String; 3]>;

/// A typed run of tokens
///
/// Joining the tokens reproduces exactly the slice of normalized text the
/// word covers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    tokens: Tokens,
    word_type: WordType,
}

/// Serializable view of a [`Word`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordData {
    /// Type name
    #[serde(rename = "type")]
    pub word_type: WordType,
    /// Numeric type code
    pub code: u8,
    /// Tokens in order
    pub tokens: Vec<String>,
}

impl Word {
    /// Create a word from a single token
    pub fn new(token: impl Into<String>, word_type: WordType) -> Self {
        let mut tokens = Tokens::new();
        tokens.push(token.into());
        Self { tokens, word_type }
    }

    /// Create a word from a token list
    pub fn from_tokens<I, S>(tokens: I, word_type: WordType) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            word_type,
        }
    }

    /// Joined text, optionally without stress marks and ASCII punctuation
    pub fn text(&self, strip_accents: bool, strip_punctuation: bool) -> String {
        let mut text = self.tokens.concat();
        if strip_accents {
            text = alphabet::strip_accents(&text);
        }
        if strip_punctuation {
            text.retain(|ch| !ch.is_ascii_punctuation());
        }
        text
    }

    /// Text without stress marks
    pub fn canonical_text(&self) -> String {
        self.text(true, false)
    }

    /// Number of tokens
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    /// Tokens in order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Word classification
    pub fn word_type(&self) -> WordType {
        self.word_type
    }

    /// Whether the word starts with a Cyrillic letter
    pub fn is_cyrillic(&self) -> bool {
        self.tokens
            .first()
            .is_some_and(|token| starts_with_cyrillic(token))
    }

    /// Structured view for inspection and serialization
    pub fn data(&self) -> WordData {
        WordData {
            word_type: self.word_type,
            code: self.word_type.code(),
            tokens: self.tokens.to_vec(),
        }
    }

    pub(crate) fn push_token(&mut self, token: String) {
        self.tokens.push(token);
    }

    pub(crate) fn set_type(&mut self, word_type: WordType) {
        self.word_type = word_type;
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            f.write_str(token)?;
        }
        Ok(())
    }
}

impl From<WordData> for Word {
    fn from(data: WordData) -> Self {
        Self::from_tokens(data.tokens, data.word_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_word() {
        let word = Word::default();
        assert_eq!(word.word_type(), WordType::None);
        assert_eq!(word.token_count(), 0);
        assert_eq!(word.to_string(), "");
    }

    #[test]
    fn test_text_joins_tokens() {
        let word = Word::from_tokens(["кто", "-", "то"], WordType::HyphenatedWord);
        assert_eq!(word.text(false, false), "кто-то");
        assert_eq!(word.to_string(), "кто-то");
        assert_eq!(word.token_count(), 3);
    }

    #[test]
    fn test_canonical_text_strips_acute_only() {
        let word = Word::new("мо\u{0301}и\u{0306}", WordType::Word);
        assert_eq!(word.canonical_text(), "мои\u{0306}");
        assert_eq!(word.text(true, false), word.canonical_text());
        assert_eq!(word.text(false, false), "мо\u{0301}и\u{0306}");
    }

    #[test]
    fn test_strip_punctuation() {
        let word = Word::from_tokens(["кто", "-", "то"], WordType::HyphenatedWord);
        assert_eq!(word.text(false, true), "ктото");
        assert_eq!(word.text(true, true), "ктото");

        let other = Word::new("«», !", WordType::Other);
        assert_eq!(other.text(false, true), "«» ");
    }

    #[test]
    fn test_data_view() {
        let word = Word::from_tokens(["добрый", " ", "день"], WordType::Mwe);
        let data = word.data();

        assert_eq!(data.word_type, WordType::Mwe);
        assert_eq!(data.code, 3);
        assert_eq!(data.tokens, vec!["добрый", " ", "день"]);
        assert_eq!(Word::from(data), word);
    }

    #[test]
    fn test_word_type_codes() {
        let codes: Vec<u8> = WordType::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_word_type_from_str() {
        assert_eq!("mwe".parse::<WordType>().unwrap(), WordType::Mwe);
        assert_eq!(
            "Hyphenated-Word".parse::<WordType>().unwrap(),
            WordType::HyphenatedWord
        );
        assert_eq!("5".parse::<WordType>().unwrap(), WordType::Whitespace);
        assert!("noun".parse::<WordType>().is_err());
    }

    #[test]
    fn test_is_cyrillic() {
        assert!(Word::new("Мир", WordType::Word).is_cyrillic());
        assert!(!Word::new("world", WordType::Other).is_cyrillic());
        assert!(!Word::default().is_cyrillic());
    }
}
