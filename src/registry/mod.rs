//! Name registry - the ordered list of names loaded from a text file.
//!
//! One name per line. Surrounding whitespace on each line is ignored and
//! blank lines are dropped. The order of the file is kept as-is, duplicates
//! included.

use std::io::ErrorKind;
use std::path::Path;

use crate::{NameFindError, Result};

/// Ordered, immutable list of names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameRegistry {
    names: Vec<String>,
}

impl NameRegistry {
    /// Parse newline-delimited text into a registry.
    pub fn parse(text: &str) -> Self {
        let names = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    /// Load names from a UTF-8 text file.
    ///
    /// # Errors
    /// * `FileMissing` if the path does not exist
    /// * `ReadError` for any other I/O failure, including invalid UTF-8
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => NameFindError::FileMissing {
                path: path.to_path_buf(),
            },
            _ => NameFindError::ReadError {
                path: path.to_path_buf(),
                source: e,
            },
        })?;

        let registry = Self::parse(&text);
        tracing::info!("Loaded {} names from {:?}", registry.len(), path);
        Ok(registry)
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_parse_skips_blank_lines() {
        let registry = NameRegistry::parse("Alice\n\nBob\n  \nCarl");
        assert_eq!(registry.names(), ["Alice", "Bob", "Carl"]);
    }

    #[test]
    fn test_parse_trims_and_handles_crlf() {
        let registry = NameRegistry::parse("  Alice  \r\n\tBob\r\n\r\n");
        assert_eq!(registry.names(), ["Alice", "Bob"]);
    }

    #[test]
    fn test_parse_keeps_duplicates_in_order() {
        let registry = NameRegistry::parse("Bob\nAlice\nBob");
        assert_eq!(registry.names(), ["Bob", "Alice", "Bob"]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(NameRegistry::parse("").is_empty());
        assert!(NameRegistry::parse("\n  \n\t\n").is_empty());
    }

    #[test]
    fn test_load_file() {
        let temp_dir = std::env::temp_dir().join("namefind_test_registry_load");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let path = temp_dir.join("names.txt");
        fs::write(&path, "王小明\n\n李大同\n  \nAlice\n").unwrap();

        let registry = NameRegistry::load(&path).unwrap();
        assert_eq!(registry.names(), ["王小明", "李大同", "Alice"]);

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_load_empty_file() {
        let temp_dir = std::env::temp_dir().join("namefind_test_registry_empty");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let path = temp_dir.join("names.txt");
        fs::write(&path, "").unwrap();

        let registry = NameRegistry::load(&path).unwrap();
        assert!(registry.is_empty());

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_load_missing_file() {
        let path = std::env::temp_dir()
            .join("namefind_test_registry_missing")
            .join("names.txt");

        let result = NameRegistry::load(&path);
        assert!(matches!(result, Err(NameFindError::FileMissing { .. })));
    }

    #[test]
    fn test_load_invalid_utf8() {
        let temp_dir = std::env::temp_dir().join("namefind_test_registry_utf8");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let path = temp_dir.join("names.txt");
        fs::write(&path, [b'A', 0xff, 0xfe, b'\n']).unwrap();

        let result = NameRegistry::load(&path);
        assert!(matches!(result, Err(NameFindError::ReadError { .. })));

        let _ = fs::remove_dir_all(&temp_dir);
    }

    #[test]
    fn test_load_directory_is_read_error() {
        let temp_dir = std::env::temp_dir().join("namefind_test_registry_dir");
        let _ = fs::remove_dir_all(&temp_dir);
        fs::create_dir_all(&temp_dir).unwrap();

        let result = NameRegistry::load(&temp_dir);
        assert!(matches!(result, Err(NameFindError::ReadError { .. })));

        let _ = fs::remove_dir_all(&temp_dir);
    }
}
