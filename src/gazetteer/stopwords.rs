//! Stopword set.
//!
//! Common words that happen to also be place names ("By", "Ende", "Have")
//! would flood the output if they stayed in the dictionary. A
//! [`StopwordSet`] lists the words that must never become dictionary entries.
//!
//! # Examples
//!
//! ```
//! use stednavn::gazetteer::stopwords::StopwordSet;
//!
//! let stopwords = StopwordSet::from_words(vec!["og", "i", "have"]);
//! assert!(stopwords.contains("have"));
//! assert!(!stopwords.contains("Ribe"));
//! ```

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::Arc;

use log::debug;

use crate::error::{Result, StednavnError};

/// An immutable set of words excluded from the dictionary.
///
/// Cloning is cheap: the underlying set is shared.
#[derive(Clone, Debug, Default)]
pub struct StopwordSet {
    words: Arc<HashSet<String>>,
}

impl StopwordSet {
    /// Create an empty stopword set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a stopword set from an existing set of words.
    pub fn with_words(words: HashSet<String>) -> Self {
        StopwordSet {
            words: Arc::new(words),
        }
    }

    /// Create a stopword set from a list of words, taken verbatim.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::with_words(words.into_iter().map(|s| s.into()).collect())
    }

    /// Read one stopword per line. Lines are trimmed and blank lines skipped.
    pub fn from_reader<R: BufRead>(reader: R) -> std::io::Result<Self> {
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line?;
            let word = line.trim();
            if !word.is_empty() {
                words.insert(word.to_string());
            }
        }
        Ok(Self::with_words(words))
    }

    /// Load a stopword file, one word per line, UTF-8 encoded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .map_err(|e| StednavnError::source_unavailable(path.display().to_string(), e))?;

        let stopwords = Self::from_reader(BufReader::new(file)).map_err(|e| {
            if e.kind() == std::io::ErrorKind::InvalidData {
                StednavnError::decoding(format!(
                    "stopword file '{}' is not valid UTF-8: {e}",
                    path.display()
                ))
            } else {
                StednavnError::source_unavailable(path.display().to_string(), e)
            }
        })?;

        debug!(
            "Loaded {} stopwords from '{}'",
            stopwords.len(),
            path.display()
        );
        Ok(stopwords)
    }

    /// Check if a word is a stopword. Comparison is exact.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Get the number of stopwords.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stopword set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate over the stopwords in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for StopwordSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_words(iter)
    }
}
