//! Multi-word expression store
//!
//! A compact character trie holding canonicalized expressions. Nodes live in
//! one contiguous vector and reference their children by index, so lookups
//! never allocate.

use crate::error::Result;
use crate::normalizer::canonicalize;
use std::collections::HashMap;
use std::io::Read;

/// Trie node using array indices instead of pointers
#[derive(Debug, Clone, Default)]
struct TrieNode {
    /// Child nodes: char -> node index
    children: HashMap<char, u32>,
    /// Whether this node marks the end of a stored expression
    is_end: bool,
}

/// Prefix tree over canonical multi-word expressions
///
/// Keys are stored by membership only. Queries expect input that is already
/// in canonical form and do no further normalization: pass raw text through
/// [`crate::normalizer::canonicalize`] first, or use
/// [`crate::normalizer::canonical_form`] on text that is already NFKD.
#[derive(Debug, Clone)]
pub struct Lexicon {
    nodes: Vec<TrieNode>,
    len: usize,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexicon {
    /// Create an empty lexicon
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode::default()],
            len: 0,
        }
    }

    /// Insert an expression
    ///
    /// The expression is normalized, lowercased and stripped of stress marks
    /// before storage. Inserting the same expression twice is a no-op.
    pub fn insert(&mut self, expression: &str) {
        let key = canonicalize(expression);
        let mut current_idx = 0u32;

        for ch in key.chars() {
            let node = &self.nodes[current_idx as usize];
            current_idx = if let Some(&child_idx) = node.children.get(&ch) {
                child_idx
            } else {
                let new_idx = self.nodes.len() as u32;
                self.nodes.push(TrieNode::default());
                self.nodes[current_idx as usize]
                    .children
                    .insert(ch, new_idx);
                new_idx
            };
        }

        let node = &mut self.nodes[current_idx as usize];
        if !node.is_end {
            node.is_end = true;
            self.len += 1;
        }
    }

    /// Insert every expression from an iterator
    pub fn insert_all<I, S>(&mut self, expressions: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for expression in expressions {
            self.insert(expression.as_ref());
        }
    }

    /// Load expressions from a reader, one per line
    ///
    /// Blank lines and lines starting with `#` are skipped. Returns the
    /// number of lines inserted.
    pub fn load<R: Read>(&mut self, mut reader: R) -> Result<usize> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes)?;
        let content = String::from_utf8(bytes)?;

        let mut inserted = 0;
        for line in content.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            self.insert(line);
            inserted += 1;
        }

        log::debug!(
            "loaded {} expressions, lexicon now holds {}",
            inserted,
            self.len
        );
        Ok(inserted)
    }

    /// Walk the trie along `key`, returning the node reached
    fn find(&self, key: &str) -> Option<&TrieNode> {
        let mut current_idx = 0u32;
        for ch in key.chars() {
            current_idx = *self.nodes[current_idx as usize].children.get(&ch)?;
        }
        Some(&self.nodes[current_idx as usize])
    }

    /// True if some stored key starts with `prefix` (or equals it)
    pub fn has_prefix(&self, prefix: &str) -> bool {
        match self.find(prefix) {
            // The root exists even when empty; an empty prefix only counts
            // when something is stored.
            Some(node) => node.is_end || !node.children.is_empty(),
            None => false,
        }
    }

    /// True if some stored key is strictly longer than `prefix` and starts with it
    pub fn has_continuation(&self, prefix: &str) -> bool {
        self.find(prefix)
            .is_some_and(|node| !node.children.is_empty())
    }

    /// True if `key` is stored exactly
    pub fn has_exact(&self, key: &str) -> bool {
        self.find(key).is_some_and(|node| node.is_end)
    }

    /// Number of stored expressions
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing has been inserted
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every stored expression
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    /// Stored keys in lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = String> {
        let mut keys = Vec::with_capacity(self.len);
        let mut path = String::new();
        self.collect_keys(0, &mut path, &mut keys);
        keys.into_iter()
    }

    fn collect_keys(&self, idx: u32, path: &mut String, keys: &mut Vec<String>) {
        let node = &self.nodes[idx as usize];
        if node.is_end {
            keys.push(path.clone());
        }

        let mut children: Vec<(&char, &u32)> = node.children.iter().collect();
        children.sort_unstable_by_key(|(ch, _)| **ch);
        for (&ch, &child) in children {
            path.push(ch);
            self.collect_keys(child, path, keys);
            path.pop();
        }
    }
}

impl<S: AsRef<str>> FromIterator<S> for Lexicon {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut lexicon = Self::new();
        lexicon.insert_all(iter);
        lexicon
    }
}

impl<S: AsRef<str>> Extend<S> for Lexicon {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.insert_all(iter);
    }
}
