//! Parser facade: normalize, segment, classify

use crate::classifier::Classifier;
use crate::config::{ParserConfig, TypeTagPolicy};
use crate::error::Result;
use crate::lexicon::Lexicon;
use crate::normalizer::normalize;
use crate::segmenter::segment;
use crate::word::Word;
use std::fs::File;
use std::io::Read;

/// Main entry point for word segmentation
///
/// Owns the expression lexicon. Populate it with [`Parser::insert_mwe`] or
/// [`Parser::insert_mwes`] before parsing; `parse` only reads it, so a fully
/// populated parser can be shared between threads by reference.
#[derive(Debug, Clone, Default)]
pub struct Parser {
    lexicon: Lexicon,
    policy: TypeTagPolicy,
}

impl Parser {
    /// Create a parser with an empty lexicon and default tagging
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from configuration, loading every lexicon source
    pub fn with_config(config: &ParserConfig) -> Result<Self> {
        let mut parser = Self {
            lexicon: Lexicon::new(),
            policy: config.type_tags,
        };

        parser.insert_mwes(&config.lexicon.entries);
        for path in &config.lexicon.files {
            let file = File::open(path).map_err(|e| {
                crate::Error::Configuration(format!(
                    "Failed to open lexicon {}: {e}",
                    path.display()
                ))
            })?;
            parser.load_mwes(file)?;
        }

        log::debug!(
            "parser ready: {} expressions, {:?} type tags",
            parser.lexicon.len(),
            parser.policy
        );
        Ok(parser)
    }

    /// Create a parser builder
    pub fn builder() -> ParserBuilder {
        ParserBuilder::default()
    }

    /// Add a multi-word expression
    pub fn insert_mwe(&mut self, expression: &str) {
        self.lexicon.insert(expression);
    }

    /// Add several multi-word expressions
    pub fn insert_mwes<I, S>(&mut self, expressions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.lexicon.insert_all(expressions);
    }

    /// Add expressions from a reader, one per line
    pub fn load_mwes<R: Read>(&mut self, reader: R) -> Result<usize> {
        self.lexicon.load(reader)
    }

    /// The expression lexicon
    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    /// The tagging policy
    pub fn type_tags(&self) -> TypeTagPolicy {
        self.policy
    }

    /// Normalize raw text
    pub fn preprocess(&self, text: &str) -> String {
        normalize(text)
    }

    /// Split normalized text into tokens
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        segment(text)
    }

    /// Classify tokens into words
    pub fn classify<I>(&self, tokens: I) -> Vec<Word>
    where
        I: IntoIterator<Item = String>,
    {
        Classifier::new(&self.lexicon, self.policy).classify(tokens)
    }

    /// Parse text into words
    ///
    /// The words' joined text equals the normalized input.
    pub fn parse(&self, text: &str) -> Vec<Word> {
        let normalized = self.preprocess(text);
        let tokens = self.tokenize(&normalized);
        self.classify(tokens)
    }

    /// Parse raw bytes, rejecting anything that is not UTF-8 text
    pub fn parse_bytes(&self, bytes: &[u8]) -> Result<Vec<Word>> {
        let text = std::str::from_utf8(bytes)?;
        Ok(self.parse(text))
    }
}

/// Fluent builder for [`Parser`]
#[derive(Debug, Default)]
pub struct ParserBuilder {
    parser: Parser,
}

impl ParserBuilder {
    /// Set the tagging policy
    pub fn type_tags(mut self, policy: TypeTagPolicy) -> Self {
        self.parser.policy = policy;
        self
    }

    /// Add an expression
    pub fn mwe(mut self, expression: &str) -> Self {
        self.parser.insert_mwe(expression);
        self
    }

    /// Add several expressions
    pub fn mwes<I, S>(mut self, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parser.insert_mwes(expressions);
        self
    }

    /// Finish building
    pub fn build(self) -> Parser {
        self.parser
    }
}
