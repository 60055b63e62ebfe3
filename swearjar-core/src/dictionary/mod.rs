//! Pluggable word lists
//!
//! A dictionary pairs a list of forbidden terms with the ignore phrases that
//! commonly trigger false positives for them. The engine never reads
//! dictionaries itself; it asks a [`DictionarySource`] passed in by the
//! caller.

mod embedded;

pub use embedded::EmbeddedDictionaries;

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// A named word list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dictionary {
    pub metadata: DictionaryMetadata,
    pub words: WordLists,
}

/// Dictionary identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DictionaryMetadata {
    pub code: String,
    pub name: String,
}

/// Terms and false-positive phrases
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordLists {
    pub profanity: Vec<String>,
    #[serde(default)]
    pub ignore: Vec<String>,
}

impl Dictionary {
    /// Build a dictionary in code
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        profanity: Vec<String>,
        ignore: Vec<String>,
    ) -> Self {
        Self {
            metadata: DictionaryMetadata {
                code: code.into(),
                name: name.into(),
            },
            words: WordLists { profanity, ignore },
        }
    }

    /// Parse and validate a TOML dictionary
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let dictionary: Dictionary = toml::from_str(toml_str)
            .map_err(|e| CoreError::Dictionary(format!("failed to parse dictionary: {e}")))?;
        dictionary.validate()?;
        Ok(dictionary)
    }

    /// Read, parse and validate a TOML dictionary file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| match e {
            CoreError::Dictionary(msg) => {
                CoreError::Dictionary(format!("{}: {msg}", path.display()))
            }
            other => other,
        })
    }

    /// Check that the code is set and no entry is blank
    pub fn validate(&self) -> Result<()> {
        if self.metadata.code.trim().is_empty() {
            return Err(CoreError::Dictionary("code must not be empty".to_string()));
        }

        let blank = |list: &[String]| list.iter().position(|w| w.trim().is_empty());
        if let Some(index) = blank(&self.words.profanity) {
            return Err(CoreError::Dictionary(format!(
                "{}: profanity entry {index} is blank",
                self.metadata.code
            )));
        }
        if let Some(index) = blank(&self.words.ignore) {
            return Err(CoreError::Dictionary(format!(
                "{}: ignore entry {index} is blank",
                self.metadata.code
            )));
        }

        Ok(())
    }

    /// Dictionary code, e.g. `en`
    pub fn code(&self) -> &str {
        &self.metadata.code
    }

    /// Human readable name
    pub fn name(&self) -> &str {
        &self.metadata.name
    }

    /// Forbidden terms
    pub fn profanity(&self) -> &[String] {
        &self.words.profanity
    }

    /// False-positive phrases
    pub fn ignore(&self) -> &[String] {
        &self.words.ignore
    }
}

/// Source of dictionaries keyed by code
pub trait DictionarySource: Send + Sync {
    /// Look up a dictionary by code
    fn dictionary(&self, code: &str) -> Option<&Dictionary>;

    /// Available codes, sorted
    fn codes(&self) -> Vec<&str>;

    /// Look up a dictionary, failing on unknown codes
    fn require(&self, code: &str) -> Result<&Dictionary> {
        self.dictionary(code)
            .ok_or_else(|| CoreError::UnknownDictionary(code.to_string()))
    }
}

/// A source without any dictionary
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDictionaries;

impl DictionarySource for NoDictionaries {
    fn dictionary(&self, _code: &str) -> Option<&Dictionary> {
        None
    }

    fn codes(&self) -> Vec<&str> {
        Vec::new()
    }
}

impl DictionarySource for HashMap<String, Dictionary> {
    fn dictionary(&self, code: &str) -> Option<&Dictionary> {
        self.get(code)
    }

    fn codes(&self) -> Vec<&str> {
        let mut codes: Vec<&str> = self.keys().map(String::as_str).collect();
        codes.sort_unstable();
        codes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const SAMPLE: &str = r#"
        [metadata]
        code = "test"
        name = "Test"

        [words]
        profanity = ["bad", "worse"]
        ignore = ["badge"]
    "#;

    #[test]
    fn test_parse_dictionary() {
        let dictionary = Dictionary::from_toml_str(SAMPLE).unwrap();
        assert_eq!(dictionary.code(), "test");
        assert_eq!(dictionary.name(), "Test");
        assert_eq!(dictionary.profanity(), ["bad", "worse"]);
        assert_eq!(dictionary.ignore(), ["badge"]);
    }

    #[test]
    fn test_ignore_list_is_optional() {
        let dictionary = Dictionary::from_toml_str(
            r#"
            [metadata]
            code = "x"
            name = "X"

            [words]
            profanity = ["bad"]
            "#,
        )
        .unwrap();
        assert!(dictionary.ignore().is_empty());
    }

    #[test]
    fn test_rejects_empty_code() {
        let result = Dictionary::from_toml_str(&SAMPLE.replace("\"test\"", "\"\""));
        assert!(matches!(result, Err(CoreError::Dictionary(_))));
    }

    #[test]
    fn test_rejects_blank_terms() {
        let result = Dictionary::from_toml_str(&SAMPLE.replace("\"worse\"", "\"  \""));
        match result {
            Err(CoreError::Dictionary(msg)) => assert!(msg.contains("profanity entry 1")),
            other => panic!("Expected Dictionary error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_malformed_toml() {
        assert!(matches!(
            Dictionary::from_toml_str("[metadata"),
            Err(CoreError::Dictionary(_))
        ));
    }

    #[test]
    fn test_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{SAMPLE}").unwrap();

        let dictionary = Dictionary::from_file(file.path()).unwrap();
        assert_eq!(dictionary.code(), "test");
    }

    #[test]
    fn test_from_missing_file() {
        assert!(matches!(
            Dictionary::from_file("/nonexistent/dictionary.toml"),
            Err(CoreError::Io(_))
        ));
    }

    #[test]
    fn test_no_dictionaries() {
        assert!(NoDictionaries.dictionary("en").is_none());
        assert!(matches!(
            NoDictionaries.require("en"),
            Err(CoreError::UnknownDictionary(code)) if code == "en"
        ));
    }

    #[test]
    fn test_hash_map_source() {
        let mut source = HashMap::new();
        source.insert(
            "zz".to_string(),
            Dictionary::new("zz", "Zed", vec!["bad".to_string()], Vec::new()),
        );
        source.insert(
            "aa".to_string(),
            Dictionary::new("aa", "Ay", vec!["worse".to_string()], Vec::new()),
        );

        assert_eq!(source.codes(), vec!["aa", "zz"]);
        assert_eq!(source.require("zz").unwrap().profanity(), ["bad"]);
    }
}
