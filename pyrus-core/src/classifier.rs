//! Token classification and multi-word expression matching
//!
//! The classifier consumes the segmenter's tokens left to right as a queue.
//! Each popped token starts a new [`Word`]. Cyrillic words look ahead for a
//! hyphenated continuation or, failing that, for the longest lexicon
//! expression they begin.

use crate::alphabet::{starts_with_cyrillic, HYPHEN_STR};
use crate::config::TypeTagPolicy;
use crate::lexicon::Lexicon;
use crate::normalizer::canonical_form;
use crate::word::{Word, WordType};
use std::collections::VecDeque;

/// Whitespace for tagging purposes
///
/// Unicode `White_Space` plus the ASCII information separators
/// U+001C..U+001F, which plain-text tooling treats as line breaks.
fn is_whitespace_char(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\u{1c}'..='\u{1f}')
}

/// Check whether a token consists only of whitespace
fn is_whitespace_only(token: &str) -> bool {
    !token.is_empty() && token.chars().all(is_whitespace_char)
}

/// Turns a token stream into typed words
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    lexicon: &'a Lexicon,
    policy: TypeTagPolicy,
}

impl<'a> Classifier<'a> {
    /// Create a classifier reading from `lexicon`
    pub fn new(lexicon: &'a Lexicon, policy: TypeTagPolicy) -> Self {
        Self { lexicon, policy }
    }

    /// Classify `tokens` into words
    ///
    /// Every token ends up in exactly one word, in order, so the words'
    /// joined text equals the joined tokens.
    pub fn classify<I>(&self, tokens: I) -> Vec<Word>
    where
        I: IntoIterator<Item = String>,
    {
        let mut queue: VecDeque<String> = tokens.into_iter().collect();
        let mut words = Vec::with_capacity(queue.len());

        while let Some(token) = queue.pop_front() {
            let word = if starts_with_cyrillic(&token) {
                let mut word = Word::new(token, WordType::Word);
                if queue.front().is_some_and(|next| next == HYPHEN_STR) {
                    self.join_hyphenated(&mut queue, &mut word);
                } else {
                    self.extend_mwe(&mut queue, &mut word);
                }
                word
            } else if is_whitespace_only(&token) {
                Word::new(token, self.tag(WordType::Whitespace))
            } else {
                Word::new(token, WordType::Other)
            };

            words.push(word);
        }

        words
    }

    /// Type actually assigned for a corrected-only tag
    fn tag(&self, intended: WordType) -> WordType {
        match (self.policy, intended) {
            (TypeTagPolicy::Corrected, _) => intended,
            (TypeTagPolicy::Legacy, WordType::HyphenatedWord) => WordType::Word,
            (TypeTagPolicy::Legacy, WordType::Whitespace) => WordType::Other,
            (TypeTagPolicy::Legacy, _) => intended,
        }
    }

    /// Absorb a hyphen and, if present, the Cyrillic token after it
    ///
    /// The caller has already seen the hyphen at the queue front.
    fn join_hyphenated(&self, queue: &mut VecDeque<String>, word: &mut Word) {
        let Some(hyphen) = queue.pop_front() else {
            return;
        };
        word.push_token(hyphen);
        word.set_type(self.tag(WordType::HyphenatedWord));

        if queue.front().is_some_and(|next| starts_with_cyrillic(next)) {
            if let Some(next) = queue.pop_front() {
                word.push_token(next);
            }
        }
    }

    /// Greedily extend `word` into a lexicon expression
    ///
    /// Tokens are peeked, not popped, while the canonical candidate is still
    /// a proper prefix of some expression. The continuation check runs before
    /// the exact check, so an expression that is itself a prefix of a longer
    /// one keeps extending. On an exact hit every peeked token is moved into
    /// the word; on a miss the queue is left untouched and the word stays a
    /// plain word, even if a shorter exact match was passed on the way.
    fn extend_mwe(&self, queue: &mut VecDeque<String>, word: &mut Word) -> bool {
        if self.lexicon.is_empty() {
            return false;
        }

        let mut candidate = canonical_form(&word.text(false, false));

        for lookahead in 0..queue.len() {
            candidate.push_str(&canonical_form(&queue[lookahead]));

            if self.lexicon.has_continuation(&candidate) {
                continue;
            }

            if self.lexicon.has_exact(&candidate) {
                for token in queue.drain(..=lookahead) {
                    word.push_token(token);
                }
                word.set_type(WordType::Mwe);
                log::trace!("matched expression {:?}", candidate);
                return true;
            }

            break;
        }

        false
    }
}
