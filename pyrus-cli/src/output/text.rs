//! Plain text output formatter

use super::{display_text, escape_whitespace, OutputFormatter};
use anyhow::Result;
use pyrus_core::Word;
use std::io::Write;

/// Plain text formatter - outputs one `type<TAB>text` line per word
pub struct TextFormatter<W: Write> {
    writer: W,
    strip_accents: bool,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, strip_accents: bool) -> Self {
        Self {
            writer,
            strip_accents,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn begin_file(&mut self, name: &str) -> Result<()> {
        writeln!(self.writer, "# {name}")?;
        Ok(())
    }

    fn format_word(&mut self, word: &Word) -> Result<()> {
        let text = escape_whitespace(&display_text(word, self.strip_accents));
        writeln!(self.writer, "{}\t{}", word.word_type(), text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pyrus_core::Parser;

    #[test]
    fn test_text_lines() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, false);
            formatter.begin_file("sample.txt").unwrap();
            for word in Parser::new().parse("кто-то\nпришёл") {
                formatter.format_word(&word).unwrap();
            }
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines[0], "# sample.txt");
        assert_eq!(lines[1], "hyphenated_word\tкто-то");
        assert_eq!(lines[2], "whitespace\t\\n");
        assert_eq!(lines[3], "word\tприше\u{0308}л");
    }

    #[test]
    fn test_strip_accents() {
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, true);
            for word in Parser::new().parse("моло\u{0301}ко") {
                formatter.format_word(&word).unwrap();
            }
            formatter.finish().unwrap();
        }

        assert_eq!(String::from_utf8(buffer).unwrap(), "word\tмолоко\n");
    }
}
