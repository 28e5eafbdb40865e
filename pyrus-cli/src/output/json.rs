//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use pyrus_core::{Word, WordData};
use serde::{Deserialize, Serialize};
use std::io::Write;

/// JSON formatter - outputs one entry per file with its words
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    strip_accents: bool,
    files: Vec<FileData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct FileData {
    /// Source file name
    pub file: String,
    /// Parsed words in order
    pub words: Vec<WordData>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool, strip_accents: bool) -> Self {
        Self {
            writer,
            pretty,
            strip_accents,
            files: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn begin_file(&mut self, name: &str) -> Result<()> {
        self.files.push(FileData {
            file: name.to_string(),
            words: Vec::new(),
        });
        Ok(())
    }

    fn format_word(&mut self, word: &Word) -> Result<()> {
        let mut data = word.data();
        if self.strip_accents {
            for token in &mut data.tokens {
                *token = pyrus_core::alphabet::strip_accents(token);
            }
        }

        match self.files.last_mut() {
            Some(file) => file.words.push(data),
            None => self.files.push(FileData {
                file: String::new(),
                words: vec![data],
            }),
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.files)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.files)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
