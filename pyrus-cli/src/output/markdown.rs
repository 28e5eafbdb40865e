//! Markdown output formatter

use super::{display_text, OutputFormatter};
use anyhow::Result;
use pyrus_core::{Word, WordType};
use std::io::Write;

/// Markdown formatter - outputs non-whitespace words as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    strip_accents: bool,
    file_count: usize,
    word_count: usize,
    total_words: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, strip_accents: bool) -> Self {
        Self {
            writer,
            strip_accents,
            file_count: 0,
            word_count: 0,
            total_words: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn begin_file(&mut self, name: &str) -> Result<()> {
        if self.file_count > 0 {
            writeln!(self.writer)?;
        }
        self.file_count += 1;
        self.word_count = 0;
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn format_word(&mut self, word: &Word) -> Result<()> {
        if matches!(word.word_type(), WordType::Whitespace) || word.to_string().trim().is_empty()
        {
            return Ok(());
        }

        self.word_count += 1;
        self.total_words += 1;
        writeln!(
            self.writer,
            "{}. `{}` *{}*",
            self.word_count,
            display_text(word, self.strip_accents).trim(),
            word.word_type()
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.total_words)?;
        self.writer.flush()?;
        Ok(())
    }
}
