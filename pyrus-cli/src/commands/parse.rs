//! Parse command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use pyrus_core::{Parser, TypeTagPolicy};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the parse command
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Multi-word expression to recognize (repeatable)
    #[arg(long, value_name = "EXPR")]
    pub mwe: Vec<String>,

    /// File with one multi-word expression per line (repeatable)
    #[arg(short = 'm', long, value_name = "FILE")]
    pub mwe_file: Vec<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "PYRUS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Keep hyphenated words as `word` and whitespace as `other`
    #[arg(long)]
    pub legacy_type_tags: bool,

    /// Show words without stress marks
    #[arg(long)]
    pub strip_accents: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `type<TAB>text` line per word
    Text,
    /// JSON array of files with structured words
    Json,
    /// Markdown numbered list of words
    Markdown,
}

impl ParseArgs {
    /// Execute the parse command
    pub fn execute(&self) -> Result<()> {
        self.init_logging();

        log::info!("Starting text parsing");
        log::debug!("Arguments: {:?}", self);

        let config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };

        let parser = self.build_parser(&config)?;
        log::info!("Lexicon holds {} expressions", parser.lexicon().len());

        let files = resolve_patterns(&self.input)?;
        let format = self.resolve_format(&config)?;
        let strip_accents = self.strip_accents || config.output.strip_accents;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };

        let mut formatter: Box<dyn OutputFormatter> = match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer, strip_accents)),
            OutputFormat::Json => Box::new(JsonFormatter::new(
                writer,
                config.output.pretty_json,
                strip_accents,
            )),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer, strip_accents)),
        };

        let mut progress = ProgressReporter::new(self.quiet);
        progress.init_files(files.len() as u64);

        for path in &files {
            let name = path.display().to_string();
            let words = FileReader::parse_file(&parser, path)?;
            log::debug!("{}: {} words", name, words.len());

            formatter.begin_file(&name)?;
            for word in &words {
                formatter.format_word(word)?;
            }
            progress.file_completed(&name, words.len());
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Build the parser from config file values and command-line overrides
    fn build_parser(&self, config: &CliConfig) -> Result<Parser> {
        let mut parser_config = config.parser.clone();
        if self.legacy_type_tags {
            parser_config.type_tags = TypeTagPolicy::Legacy;
        }
        parser_config.lexicon.entries.extend(self.mwe.iter().cloned());
        parser_config
            .lexicon
            .files
            .extend(self.mwe_file.iter().cloned());

        Parser::with_config(&parser_config).context("Failed to build parser")
    }

    /// Command-line format wins over the config file default
    fn resolve_format(&self, config: &CliConfig) -> Result<OutputFormat> {
        if let Some(format) = self.format {
            return Ok(format);
        }

        OutputFormat::from_str(&config.output.default_format, true).map_err(|_| {
            CliError::ConfigError(format!(
                "unknown output format '{}'",
                config.output.default_format
            ))
            .into()
        })
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        // A logger may already be installed when running in-process
        let _ = env_logger::Builder::from_env(
            env_logger::Env::default().default_filter_or(log_level),
        )
        .try_init();
    }
}
