//! Catalog normalization and loading.
//!
//! A catalog is the raw list of candidate labels exported from a geographic
//! knowledge base. For Danish place names the labels come from a Wikidata
//! query such as:
//!
//! ```text
//! SELECT ?place ?placeLabel WHERE {
//!    ?place wdt:P17 wd:Q35 .
//!    ?place wdt:P625 ?geo .
//!    SERVICE wikibase:label { bd:serviceParam wikibase:language "da" . }
//! }
//! ```
//!
//! Each label carries a language tag (`"Ribe@da"`) and may carry a
//! disambiguation suffix (`"Ribe (sogn)@da"`). The [`CatalogNormalizer`]
//! keeps labels in the target language, strips tag and suffix, and drops
//! stopwords.
//!
//! # Examples
//!
//! ```
//! use stednavn::gazetteer::catalog::CatalogNormalizer;
//! use stednavn::gazetteer::stopwords::StopwordSet;
//!
//! let normalizer = CatalogNormalizer::new(StopwordSet::from_words(vec!["By"]));
//! let names = normalizer.normalize(vec!["Ribe (sogn)@da", "Ribe@en", "By@da"]);
//! assert_eq!(names, vec!["Ribe".to_string()]);
//! ```

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::ReaderBuilder;
use log::debug;

use crate::config::GazetteerConfig;
use crate::error::{Result, StednavnError};
use crate::gazetteer::stopwords::StopwordSet;

/// Language tag of Danish labels in a Wikidata export.
pub const DEFAULT_LANGUAGE_TAG: &str = "@da";

/// Marker that introduces a Wikidata-style disambiguation suffix.
pub const DEFAULT_DISAMBIGUATION_MARKER: &str = " (";

/// Header of the label column in a Wikidata SPARQL TSV export.
pub const DEFAULT_LABEL_COLUMN: &str = "?placeLabel";

/// What happened to a single label during normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOutcome<'a> {
    /// The label yields this place name.
    Accepted(&'a str),
    /// The label lacks the target language tag.
    Untagged,
    /// The cleaned label is a stopword.
    Stopword,
    /// Nothing is left after cleaning.
    Empty,
}

/// Counters collected while normalizing a catalog.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CatalogStats {
    pub accepted: usize,
    pub untagged: usize,
    pub stopped: usize,
    pub empty: usize,
}

impl CatalogStats {
    /// Total number of labels seen.
    pub fn total(&self) -> usize {
        self.accepted + self.untagged + self.stopped + self.empty
    }
}

/// Turns raw catalog labels into place names.
#[derive(Clone, Debug)]
pub struct CatalogNormalizer {
    language_tag: String,
    disambiguation_marker: String,
    stopwords: StopwordSet,
    exclude_stopwords: bool,
}

impl CatalogNormalizer {
    /// Create a normalizer for Danish labels that excludes `stopwords`.
    pub fn new(stopwords: StopwordSet) -> Self {
        CatalogNormalizer {
            language_tag: DEFAULT_LANGUAGE_TAG.to_string(),
            disambiguation_marker: DEFAULT_DISAMBIGUATION_MARKER.to_string(),
            stopwords,
            exclude_stopwords: true,
        }
    }

    /// Create a normalizer using the label settings of `config`.
    pub fn from_config(config: &GazetteerConfig, stopwords: StopwordSet) -> Self {
        Self::new(stopwords)
            .with_language_tag(config.language_tag.clone())
            .with_disambiguation_marker(config.disambiguation_marker.clone())
            .exclude_stopwords(config.exclude_stopwords)
    }

    /// Set the language tag suffix a label must end with.
    pub fn with_language_tag<S: Into<String>>(mut self, tag: S) -> Self {
        self.language_tag = tag.into();
        self
    }

    /// Set the marker at which a label is truncated.
    pub fn with_disambiguation_marker<S: Into<String>>(mut self, marker: S) -> Self {
        self.disambiguation_marker = marker.into();
        self
    }

    /// Set whether stopwords are removed from the output.
    pub fn exclude_stopwords(mut self, exclude: bool) -> Self {
        self.exclude_stopwords = exclude;
        self
    }

    /// Get the language tag.
    pub fn language_tag(&self) -> &str {
        &self.language_tag
    }

    /// Get the stopword set.
    pub fn stopwords(&self) -> &StopwordSet {
        &self.stopwords
    }

    /// Clean a single label.
    pub fn clean_label<'a>(&self, label: &'a str) -> LabelOutcome<'a> {
        let Some(name) = label.strip_suffix(self.language_tag.as_str()) else {
            return LabelOutcome::Untagged;
        };

        let name = match name.find(self.disambiguation_marker.as_str()) {
            Some(index) if !self.disambiguation_marker.is_empty() => &name[..index],
            _ => name,
        };

        if name.is_empty() {
            LabelOutcome::Empty
        } else if self.exclude_stopwords && self.stopwords.contains(name) {
            LabelOutcome::Stopword
        } else {
            LabelOutcome::Accepted(name)
        }
    }

    /// Normalize a sequence of labels into place names, in input order.
    pub fn normalize<I, S>(&self, labels: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.normalize_with_stats(labels).0
    }

    /// Like [`normalize`](Self::normalize), also returning counters.
    pub fn normalize_with_stats<I, S>(&self, labels: I) -> (Vec<String>, CatalogStats)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = Vec::new();
        let mut stats = CatalogStats::default();

        for label in labels {
            match self.clean_label(label.as_ref()) {
                LabelOutcome::Accepted(name) => {
                    stats.accepted += 1;
                    names.push(name.to_string());
                }
                LabelOutcome::Untagged => stats.untagged += 1,
                LabelOutcome::Stopword => stats.stopped += 1,
                LabelOutcome::Empty => stats.empty += 1,
            }
        }

        debug!(
            "Normalized {} catalog labels: {} accepted, {} untagged, {} stopwords, {} empty",
            stats.total(),
            stats.accepted,
            stats.untagged,
            stats.stopped,
            stats.empty
        );
        (names, stats)
    }
}

/// Read the label column of a tab-separated catalog with a header row.
pub fn read_labels<R: Read>(reader: R, column: &str) -> Result<Vec<String>> {
    read_labels_named(reader, column, "catalog")
}

/// Load the label column of a tab-separated catalog file.
pub fn load_labels<P: AsRef<Path>>(path: P, column: &str) -> Result<Vec<String>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| StednavnError::source_unavailable(path.display().to_string(), e))?;
    let labels = read_labels_named(file, column, &path.display().to_string())?;
    debug!("Loaded {} labels from '{}'", labels.len(), path.display());
    Ok(labels)
}

fn read_labels_named<R: Read>(reader: R, column: &str, source_name: &str) -> Result<Vec<String>> {
    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader
        .headers()
        .map_err(|e| csv_error(source_name, e))?;
    let index = headers
        .iter()
        .position(|header| header == column)
        .ok_or_else(|| {
            StednavnError::source_unavailable(source_name, format!("missing column '{column}'"))
        })?;

    let mut labels = Vec::new();
    for record in csv_reader.records() {
        let record = record.map_err(|e| csv_error(source_name, e))?;
        if let Some(label) = record.get(index) {
            labels.push(label.to_string());
        }
    }
    Ok(labels)
}

fn csv_error(source_name: &str, error: csv::Error) -> StednavnError {
    match error.kind() {
        csv::ErrorKind::Utf8 { .. } => {
            StednavnError::decoding(format!("catalog '{source_name}' is not valid UTF-8: {error}"))
        }
        _ => StednavnError::source_unavailable(source_name, error),
    }
}
