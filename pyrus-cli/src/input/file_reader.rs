//! File reading utilities

use crate::error::CliError;
use anyhow::{Context, Result};
use pyrus_core::{Parser, Word};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Reads input files and hands them to the parser
pub struct FileReader;

impl FileReader {
    /// Read a file as raw bytes
    pub fn read_bytes(path: &Path) -> Result<Vec<u8>> {
        match fs::read(path) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                Err(CliError::FileNotFound(path.display().to_string()).into())
            }
            Err(e) => {
                Err(e).with_context(|| format!("Failed to read file: {}", path.display()))
            }
        }
    }

    /// Read a file and parse it into words
    ///
    /// Files that are not UTF-8 are rejected with [`CliError::InvalidInput`].
    pub fn parse_file(parser: &Parser, path: &Path) -> Result<Vec<Word>> {
        let bytes = Self::read_bytes(path)?;
        parser.parse_bytes(&bytes).map_err(|e| {
            CliError::InvalidInput(format!("{}: {e}", path.display())).into()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::TempDir;

    #[test]
    fn test_parse_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "Привет, мир!").unwrap();

        let words = FileReader::parse_file(&Parser::new(), &file_path).unwrap();
        assert_eq!(words.len(), 4);
    }

    #[test]
    fn test_read_nonexistent_file() {
        let path = Path::new("/nonexistent/file.txt");
        let err = FileReader::read_bytes(path).unwrap_err();
        assert_eq!(err.to_string(), "File not found: /nonexistent/file.txt");
    }

    #[test]
    fn test_parse_file_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("binary.bin");
        fs::write(&file_path, [0xd0, 0x9f, 0xff, 0xfe]).unwrap();

        let err = FileReader::parse_file(&Parser::new(), &file_path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_empty_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("empty.txt");
        File::create(&file_path).unwrap();

        let words = FileReader::parse_file(&Parser::new(), &file_path).unwrap();
        assert!(words.is_empty());
    }
}
