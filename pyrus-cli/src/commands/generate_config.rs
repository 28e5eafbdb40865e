//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

/// Commented template covering every configuration key
pub const TEMPLATE: &str = r#"# Pyrus configuration

[parser]
# How hyphenated words and whitespace runs are tagged:
#   "corrected" - hyphenated_word / whitespace
#   "legacy"    - word / other, matching older output
type_tags = "corrected"

[lexicon]
# Multi-word expressions, matched case-insensitively and ignoring stress marks
entries = [
    # "тем не менее",
]

# Files with one expression per line ('#' starts a comment line).
# Relative paths are resolved against this file's directory.
files = []

[output]
# text, json or markdown
default_format = "text"
pretty_json = true
# Show words without stress marks
strip_accents = false
"#;

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        std::fs::write(&self.output, TEMPLATE)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("Configuration template written to {}", self.output.display());
        println!("Use it with: pyrus parse -i input.txt --config {}", self.output.display());
        Ok(())
    }
}
