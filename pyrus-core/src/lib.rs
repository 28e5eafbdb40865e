//! Cyrillic word segmentation with multi-word expression recognition
//!
//! Raw text goes through three stages:
//! - **Normalization**: en-dashes become hyphens, then NFKD decomposition
//!   separates stress marks and other diacritics from their base letters.
//! - **Segmentation**: the normalized text is split into alternating runs of
//!   Cyrillic letters (with their combining marks) and everything else.
//! - **Classification**: runs are grouped into typed [`Word`]s. Hyphenated
//!   compounds are joined, and sequences found in the expression lexicon are
//!   merged greedily, longest entry first.
//!
//! Joining the text of every returned word reproduces the normalized input.
//!
//! # Example
//!
//! ```rust
//! use pyrus_core::{normalize, Parser, WordType};
//!
//! let mut parser = Parser::new();
//! parser.insert_mwe("добрый день");
//!
//! let words = parser.parse("Добрый день, кто-то!");
//! assert_eq!(words[0].word_type(), WordType::Mwe);
//! // Output is NFKD: `й` comes back as `и` + U+0306
//! assert_eq!(words[0].to_string(), normalize("Добрый день"));
//! assert_eq!(words[1].word_type(), WordType::Other);
//! assert_eq!(words[2].word_type(), WordType::HyphenatedWord);
//! assert_eq!(words[2].tokens(), &["кто", "-", "то"]);
//! ```

pub mod alphabet;
pub mod classifier;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod normalizer;
pub mod parser;
pub mod segmenter;
pub mod word;

pub use classifier::Classifier;
pub use config::{LexiconConfig, ParserConfig, ParserConfigBuilder, TypeTagPolicy};
pub use error::{Error, Result};
pub use lexicon::Lexicon;
pub use normalizer::{canonical_form, canonicalize, normalize};
pub use parser::{Parser, ParserBuilder};
pub use segmenter::segment;
pub use word::{Word, WordData, WordType};
