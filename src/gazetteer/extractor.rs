//! Place-name extraction.
//!
//! An [`Extractor`] owns a compiled [`PlaceMatcher`] and a [`TextNormalizer`].
//! Extraction normalizes the text, runs the matcher and returns the matched
//! names in order of occurrence. Extraction from an in-memory string cannot
//! fail; reading from a reader or a file can.
//!
//! # Examples
//!
//! ```
//! use stednavn::gazetteer::dictionary::Dictionary;
//! use stednavn::gazetteer::extractor::Extractor;
//!
//! let extractor = Extractor::new(Dictionary::new(vec!["Odense", "Fyn"])).unwrap();
//! let names = extractor.extract("We drove from Odense to Fyn yesterday.");
//! assert_eq!(names, vec!["Odense", "Fyn"]);
//! ```

use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::analysis::normalizer::TextNormalizer;
use crate::config::GazetteerConfig;
use crate::error::{Result, StednavnError};
use crate::gazetteer::catalog::{self, CatalogNormalizer};
use crate::gazetteer::dictionary::Dictionary;
use crate::gazetteer::matcher::PlaceMatcher;
use crate::gazetteer::source::{self, TextEncoding};
use crate::gazetteer::stopwords::StopwordSet;

/// A place name found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaceMatch {
    /// The matched name, as it appears in the normalized text.
    pub name: String,
    /// Dictionary rank of the name.
    pub rank: usize,
    /// Byte offsets in the normalized text.
    pub start: usize,
    pub end: usize,
    /// Byte offsets in the raw input text.
    pub original_start: usize,
    pub original_end: usize,
}

/// Extracts place names from text.
///
/// Cloning shares the compiled matcher.
#[derive(Clone, Debug)]
pub struct Extractor {
    matcher: Arc<PlaceMatcher>,
    normalizer: TextNormalizer,
    max_text_len: Option<usize>,
}

impl Extractor {
    /// Compile `dictionary` and create an extractor with the default normalizer.
    pub fn new(dictionary: Dictionary) -> Result<Self> {
        Self::from_matcher(Arc::new(PlaceMatcher::new(dictionary)?))
    }

    /// Create an extractor around an already compiled matcher.
    pub fn from_matcher(matcher: Arc<PlaceMatcher>) -> Result<Self> {
        Ok(Extractor {
            matcher,
            normalizer: TextNormalizer::new()?,
            max_text_len: None,
        })
    }

    /// Normalize raw catalog labels, then compile them.
    pub fn from_labels<I, S>(labels: I, normalizer: &CatalogNormalizer) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(Dictionary::from_catalog(labels, normalizer))
    }

    /// Load the catalog and stopwords named in `config` and build an extractor.
    pub fn from_config(config: &GazetteerConfig) -> Result<Self> {
        config.validate()?;
        let catalog_path = config
            .catalog_path
            .as_ref()
            .ok_or_else(|| StednavnError::invalid_config("catalog_path is required"))?;

        let stopwords = match &config.stopwords_path {
            Some(path) => StopwordSet::load(path)?,
            None => StopwordSet::new(),
        };
        let labels = catalog::load_labels(catalog_path, &config.label_column)?;
        let normalizer = CatalogNormalizer::from_config(config, stopwords);

        Ok(Self::from_labels(labels, &normalizer)?.with_max_text_len(config.max_text_len))
    }

    /// Replace the text normalizer.
    pub fn with_normalizer(mut self, normalizer: TextNormalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Reject texts read from a source when they exceed `limit` bytes.
    pub fn with_max_text_len(mut self, limit: Option<usize>) -> Self {
        self.max_text_len = limit;
        self
    }

    pub fn matcher(&self) -> &Arc<PlaceMatcher> {
        &self.matcher
    }

    pub fn dictionary(&self) -> &Dictionary {
        self.matcher.dictionary()
    }

    pub fn normalizer(&self) -> &TextNormalizer {
        &self.normalizer
    }

    /// Extract place names from `text`, in order of occurrence.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let normalized = self.normalizer.normalize(text);
        self.matcher.find_names(normalized.text())
    }

    /// Extract place names from `text` together with their offsets.
    pub fn extract_matches(&self, text: &str) -> Vec<PlaceMatch> {
        let normalized = self.normalizer.normalize(text);
        let normalized_text = normalized.text();

        self.matcher
            .find_iter(normalized_text)
            .into_iter()
            .map(|span| PlaceMatch {
                name: normalized_text[span.start..span.end].to_string(),
                rank: span.rank,
                start: span.start,
                end: span.end,
                original_start: normalized.original_offset(span.start),
                original_end: normalized.original_offset(span.end),
            })
            .collect()
    }

    /// Extract from many texts in parallel. Results follow the input order.
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.extract(text.as_ref()))
            .collect()
    }

    /// Read `reader` to the end, decode it and extract place names.
    pub fn extract_from_reader<R: Read>(
        &self,
        reader: R,
        encoding: TextEncoding,
    ) -> Result<Vec<String>> {
        let text = source::read_text(reader, encoding)?;
        self.check_len(&text)?;
        Ok(self.extract(&text))
    }

    /// Read and decode a file and extract place names.
    pub fn extract_from_path<P: AsRef<Path>>(
        &self,
        path: P,
        encoding: TextEncoding,
    ) -> Result<Vec<String>> {
        let text = self.read_path(path.as_ref(), encoding)?;
        Ok(self.extract(&text))
    }

    /// Read and decode a file and extract place names with offsets.
    pub fn extract_matches_from_path<P: AsRef<Path>>(
        &self,
        path: P,
        encoding: TextEncoding,
    ) -> Result<Vec<PlaceMatch>> {
        let text = self.read_path(path.as_ref(), encoding)?;
        Ok(self.extract_matches(&text))
    }

    fn read_path(&self, path: &Path, encoding: TextEncoding) -> Result<String> {
        let text = source::read_text_file(path, encoding)?;
        self.check_len(&text)?;
        debug!("Read {} bytes from '{}'", text.len(), path.display());
        Ok(text)
    }

    fn check_len(&self, text: &str) -> Result<()> {
        match self.max_text_len {
            Some(limit) if text.len() > limit => Err(StednavnError::TextTooLong {
                len: text.len(),
                limit,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, Write};

    use super::*;

    fn extractor(names: &[&str]) -> Extractor {
        Extractor::new(Dictionary::new(names.iter().copied())).unwrap()
    }

    #[test]
    fn test_end_to_end() {
        let extractor = extractor(&["Odense", "Fyn"]);
        assert_eq!(
            extractor.extract("We drove from Odense to Fyn yesterday."),
            vec!["Odense", "Fyn"]
        );
    }

    #[test]
    fn test_wrapped_name_is_matched_as_one_unit() {
        let extractor = extractor(&["Nykøbing Falster", "Nykøbing", "Falster"]);
        assert_eq!(
            extractor.extract("Han boede i Nykøbing\nFalster i mange år."),
            vec!["Nykøbing Falster"]
        );
        assert_eq!(
            extractor.extract("Han boede i Nykøbing\r\n   Falster."),
            vec!["Nykøbing Falster"]
        );
    }

    #[test]
    fn test_paragraph_break_separates_names() {
        let extractor = extractor(&["Nykøbing Falster", "Nykøbing", "Falster"]);
        assert_eq!(
            extractor.extract("Nykøbing\n\nFalster"),
            vec!["Nykøbing", "Falster"]
        );
    }

    #[test]
    fn test_stopword_never_returned() {
        let normalizer = CatalogNormalizer::new(StopwordSet::from_words(vec!["Have"]));
        let extractor = Extractor::from_labels(vec!["Have@da", "Sorø@da"], &normalizer).unwrap();
        assert_eq!(extractor.extract("Have ved Sorø og Have"), vec!["Sorø"]);
    }

    #[test]
    fn test_untagged_label_never_returned() {
        let normalizer = CatalogNormalizer::new(StopwordSet::new());
        let extractor =
            Extractor::from_labels(vec!["Ribe (sogn)@da", "Vejle@en", "Vejle"], &normalizer)
                .unwrap();
        assert_eq!(extractor.dictionary().names(), &["Ribe"]);
        assert_eq!(extractor.extract("Ribe og Vejle"), vec!["Ribe"]);
    }

    #[test]
    fn test_empty_dictionary() {
        let extractor = Extractor::new(Dictionary::default()).unwrap();
        assert!(extractor.extract("Odense og Fyn").is_empty());
        assert!(extractor.extract("").is_empty());
    }

    #[test]
    fn test_extract_matches_offsets() {
        let extractor = extractor(&["Aarhus C", "Ry"]);
        let raw = "Fra   Aarhus\r\nC til Ry";
        let matches = extractor.extract_matches(raw);

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "Aarhus C");
        assert_eq!(matches[0].rank, 0);
        assert_eq!((matches[0].start, matches[0].end), (4, 12));
        assert_eq!(
            &raw[matches[0].original_start..matches[0].original_end],
            "Aarhus\r\nC"
        );
        assert_eq!(matches[1].name, "Ry");
        assert_eq!(&raw[matches[1].original_start..matches[1].original_end], "Ry");
    }

    #[test]
    fn test_extract_batch_keeps_order() {
        let extractor = extractor(&["Ribe", "Vejle", "Skive"]);
        let texts = vec!["Ribe", "ingen steder", "Skive og Vejle", "Ribe Ribe"];
        let results = extractor.extract_batch(&texts);
        assert_eq!(
            results,
            vec![
                vec!["Ribe".to_string()],
                vec![],
                vec!["Skive".to_string(), "Vejle".to_string()],
                vec!["Ribe".to_string(), "Ribe".to_string()],
            ]
        );
    }

    #[test]
    fn test_extract_from_reader() {
        let extractor = extractor(&["Køge"]);
        let names = extractor
            .extract_from_reader(Cursor::new(b"Til K\xf8ge.".to_vec()), TextEncoding::Latin1)
            .unwrap();
        assert_eq!(names, vec!["Køge"]);

        let result =
            extractor.extract_from_reader(Cursor::new(b"Til K\xf8ge.".to_vec()), TextEncoding::Utf8);
        assert!(matches!(result, Err(StednavnError::Decoding(_))));

        // The matcher is still usable after a decoding failure
        assert_eq!(extractor.extract("Køge"), vec!["Køge"]);
    }

    #[test]
    fn test_max_text_len() {
        let extractor = extractor(&["Ry"]).with_max_text_len(Some(5));
        let result = extractor.extract_from_reader(Cursor::new("Ry og Ry"), TextEncoding::Utf8);
        assert!(matches!(
            result,
            Err(StednavnError::TextTooLong { len: 8, limit: 5 })
        ));

        let names = extractor
            .extract_from_reader(Cursor::new("Ry"), TextEncoding::Utf8)
            .unwrap();
        assert_eq!(names, vec!["Ry"]);
    }

    #[test]
    fn test_extract_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Vi kørte fra Odense\ntil Fyn.").unwrap();
        file.flush().unwrap();

        let extractor = extractor(&["Odense", "Fyn"]);
        let names = extractor
            .extract_from_path(file.path(), TextEncoding::Utf8)
            .unwrap();
        assert_eq!(names, vec!["Odense", "Fyn"]);

        let matches = extractor
            .extract_matches_from_path(file.path(), TextEncoding::Utf8)
            .unwrap();
        assert_eq!(matches[1].original_start, 25);
    }

    #[test]
    fn test_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let catalog_path = dir.path().join("stednavne.tsv");
        let stopwords_path = dir.path().join("stopwords-da.txt");
        std::fs::write(
            &catalog_path,
            "?place\t?placeLabel\nQ1\tAarhus@da\nQ2\tAarhus C (bydel)@da\nQ3\tHave@da\n",
        )
        .unwrap();
        std::fs::write(&stopwords_path, "have\nHave\n").unwrap();

        let config = GazetteerConfig {
            catalog_path: Some(catalog_path),
            stopwords_path: Some(stopwords_path),
            max_text_len: Some(1024),
            ..GazetteerConfig::default()
        };
        let extractor = Extractor::from_config(&config).unwrap();
        assert_eq!(extractor.dictionary().names(), &["Aarhus C", "Aarhus"]);
        assert_eq!(extractor.extract("Have i Aarhus C"), vec!["Aarhus C"]);
    }

    #[test]
    fn test_from_config_requires_catalog() {
        let result = Extractor::from_config(&GazetteerConfig::default());
        assert!(matches!(result, Err(StednavnError::InvalidConfig(_))));
    }

    #[test]
    fn test_clone_shares_matcher() {
        let extractor = extractor(&["Ry"]);
        let cloned = extractor.clone();
        assert!(Arc::ptr_eq(extractor.matcher(), cloned.matcher()));
    }
}
