//! Configuration module
//!
//! A single TOML file configures both the parser (`[parser]`, `[lexicon]`)
//! and the CLI output (`[output]`).

use crate::error::CliError;
use anyhow::Result;
use pyrus_core::ParserConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Default)]
pub struct CliConfig {
    /// Parser and lexicon configuration
    pub parser: ParserConfig,

    /// Output configuration
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,

    /// Show text without stress marks
    pub strip_accents: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
            strip_accents: false,
        }
    }
}

/// The `[output]` table; other tables are read by the parser
#[derive(Debug, Default, Deserialize)]
struct OutputSection {
    #[serde(default)]
    output: OutputConfig,
}

impl CliConfig {
    /// Load configuration from a TOML file
    ///
    /// Relative lexicon file paths are resolved against the file's directory.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;

        let mut config = Self::from_toml_str(&content)?;
        if let Some(base) = path.parent() {
            config.parser.resolve_relative_to(base);
        }

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let parser = ParserConfig::from_toml_str(content)
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        let section: OutputSection =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;

        Ok(Self {
            parser,
            output: section.output,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrus_core::TypeTagPolicy;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = CliConfig::default();
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
        assert!(!config.output.strip_accents);
        assert_eq!(config.parser.type_tags, TypeTagPolicy::Corrected);
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pyrus.toml");
        fs::write(
            &path,
            r#"
[parser]
type_tags = "legacy"

[lexicon]
entries = ["в общем"]

[output]
default_format = "json"
pretty_json = false
"#,
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(config.parser.type_tags, TypeTagPolicy::Legacy);
        assert_eq!(config.parser.lexicon.entries, vec!["в общем"]);
        assert_eq!(config.output.default_format, "json");
        assert!(!config.output.pretty_json);
        assert!(!config.output.strip_accents);
    }

    #[test]
    fn test_load_resolves_lexicon_files() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pyrus.toml");
        fs::write(
            &path,
            "[lexicon]\nfiles = [\"mwe.txt\", \"/abs/mwe.txt\"]\n\n[output]\nstrip_accents = true\n",
        )
        .unwrap();

        let config = CliConfig::load(&path).unwrap();
        assert_eq!(
            config.parser.lexicon.files,
            vec![
                temp_dir.path().join("mwe.txt"),
                std::path::PathBuf::from("/abs/mwe.txt")
            ]
        );
        assert!(config.output.strip_accents);
    }

    #[test]
    fn test_from_toml_str_keeps_relative_paths() {
        let config = CliConfig::from_toml_str("[lexicon]\nfiles = [\"mwe.txt\"]\n").unwrap();
        assert_eq!(
            config.parser.lexicon.files,
            vec![std::path::PathBuf::from("mwe.txt")]
        );
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_invalid_output_section() {
        let err = CliConfig::from_toml_str("[output]\npretty_json = \"yes\"\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CliConfig::load(Path::new("/nonexistent/pyrus.toml")).unwrap_err();
        assert!(err.to_string().starts_with("Configuration error"));
    }
}
