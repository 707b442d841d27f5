//! Configuration for building a place-name extractor.
//!
//! A [`GazetteerConfig`] describes where the catalog and stopwords come from
//! and how catalog labels are cleaned. It can be written as JSON; missing
//! fields take their defaults.
//!
//! # Examples
//!
//! ```
//! use stednavn::config::GazetteerConfig;
//!
//! let config = GazetteerConfig::from_json_str(r#"{ "language_tag": "@sv" }"#).unwrap();
//! assert_eq!(config.language_tag, "@sv");
//! assert_eq!(config.label_column, "?placeLabel");
//! assert!(config.exclude_stopwords);
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, StednavnError};
use crate::gazetteer::catalog::{
    DEFAULT_DISAMBIGUATION_MARKER, DEFAULT_LABEL_COLUMN, DEFAULT_LANGUAGE_TAG,
};
use crate::gazetteer::source::TextEncoding;

/// Settings for building and running an extractor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GazetteerConfig {
    /// Tab-separated catalog export.
    pub catalog_path: Option<PathBuf>,
    /// Stopword file, one word per line. No stopwords if unset.
    pub stopwords_path: Option<PathBuf>,
    /// Header of the catalog column holding the labels.
    pub label_column: String,
    /// Suffix marking labels in the target language.
    pub language_tag: String,
    /// Labels are truncated at the first occurrence of this marker.
    pub disambiguation_marker: String,
    /// Whether stopwords are removed from the dictionary.
    pub exclude_stopwords: bool,
    /// Encoding of input text files.
    pub encoding: TextEncoding,
    /// Maximum accepted size of an input text in bytes.
    pub max_text_len: Option<usize>,
}

impl Default for GazetteerConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            stopwords_path: None,
            label_column: DEFAULT_LABEL_COLUMN.to_string(),
            language_tag: DEFAULT_LANGUAGE_TAG.to_string(),
            disambiguation_marker: DEFAULT_DISAMBIGUATION_MARKER.to_string(),
            exclude_stopwords: true,
            encoding: TextEncoding::Utf8,
            max_text_len: None,
        }
    }
}

impl GazetteerConfig {
    /// Load a configuration from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| StednavnError::source_unavailable(path.display().to_string(), e))?;
        Self::from_json_str(&content)
    }

    /// Parse and validate a configuration from JSON.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: GazetteerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the settings can produce a meaningful dictionary.
    pub fn validate(&self) -> Result<()> {
        if self.language_tag.is_empty() {
            return Err(StednavnError::invalid_config(
                "language_tag must not be empty",
            ));
        }
        if self.disambiguation_marker.is_empty() {
            return Err(StednavnError::invalid_config(
                "disambiguation_marker must not be empty",
            ));
        }
        if self.label_column.is_empty() {
            return Err(StednavnError::invalid_config(
                "label_column must not be empty",
            ));
        }
        if self.max_text_len == Some(0) {
            return Err(StednavnError::invalid_config(
                "max_text_len must be greater than zero",
            ));
        }
        Ok(())
    }
}
