//! Parser configuration

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// How hyphenated and whitespace words are tagged
///
/// `Legacy` reproduces the historical tagging where hyphenated words stay
/// [`WordType::Word`](crate::WordType::Word) and whitespace runs stay
/// [`WordType::Other`](crate::WordType::Other). `Corrected` gives them
/// their own types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeTagPolicy {
    /// Tag hyphenated words and whitespace runs with their own types
    #[default]
    Corrected,
    /// Leave them as `Word` / `Other`
    Legacy,
}

/// Lexicon sources applied when a parser is built
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexiconConfig {
    /// Inline expressions
    pub entries: Vec<String>,
    /// Files with one expression per line
    pub files: Vec<PathBuf>,
}

/// Parser configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParserConfig {
    /// Tagging policy for hyphenated and whitespace words
    #[serde(default)]
    pub type_tags: TypeTagPolicy,

    /// Lexicon sources
    #[serde(default)]
    pub lexicon: LexiconConfig,
}

/// On-disk layout: parser settings live under `[parser]`
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    parser: ParserSection,
    #[serde(default)]
    lexicon: LexiconConfig,
}

#[derive(Debug, Default, Deserialize)]
struct ParserSection {
    #[serde(default)]
    type_tags: TypeTagPolicy,
}

impl ParserConfig {
    /// Create a configuration builder
    pub fn builder() -> ParserConfigBuilder {
        ParserConfigBuilder::default()
    }

    /// Parse a TOML document
    ///
    /// Relative lexicon file paths are kept as written.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: ConfigFile = toml::from_str(content)
            .map_err(|e| Error::Configuration(format!("Failed to parse config: {e}")))?;

        Ok(Self {
            type_tags: file.parser.type_tags,
            lexicon: file.lexicon,
        })
    }

    /// Load a TOML file
    ///
    /// Relative lexicon file paths are resolved against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Configuration(format!("Failed to read {}: {e}", path.display()))
        })?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.resolve_relative_to(base);
        }

        Ok(config)
    }

    /// Join relative lexicon file paths onto `base`
    pub fn resolve_relative_to(&mut self, base: &Path) {
        for file in &mut self.lexicon.files {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }
}

/// Fluent builder for [`ParserConfig`]
#[derive(Debug, Default)]
pub struct ParserConfigBuilder {
    config: ParserConfig,
}

impl ParserConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tagging policy
    pub fn type_tags(mut self, policy: TypeTagPolicy) -> Self {
        self.config.type_tags = policy;
        self
    }

    /// Add an inline expression
    pub fn entry(mut self, expression: impl Into<String>) -> Self {
        self.config.lexicon.entries.push(expression.into());
        self
    }

    /// Add inline expressions
    pub fn entries<I, S>(mut self, expressions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config
            .lexicon
            .entries
            .extend(expressions.into_iter().map(Into::into));
        self
    }

    /// Add a lexicon file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.lexicon.files.push(path.into());
        self
    }

    /// Finish the configuration
    pub fn build(self) -> ParserConfig {
        self.config
    }
}
