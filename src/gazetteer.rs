//! Gazetteer: building a place-name dictionary and matching it against text.
//!
//! The pipeline runs leaf-first:
//!
//! 1. [`stopwords::StopwordSet`] - words that must never become entries
//! 2. [`catalog::CatalogNormalizer`] - raw labels to clean place names
//! 3. [`dictionary::Dictionary`] - names ordered by match precedence
//! 4. [`matcher::PlaceMatcher`] - the compiled automaton
//! 5. [`extractor::Extractor`] - normalization plus matching
//!
//! # Examples
//!
//! ```
//! use stednavn::gazetteer::{CatalogNormalizer, Extractor, StopwordSet};
//!
//! let labels = vec!["Aarhus@da", "Aarhus C (bydel)@da", "By@da", "Aarhus@en"];
//! let normalizer = CatalogNormalizer::new(StopwordSet::from_words(vec!["By"]));
//! let extractor = Extractor::from_labels(labels, &normalizer).unwrap();
//!
//! assert_eq!(extractor.extract("By og Aarhus C"), vec!["Aarhus C"]);
//! ```

pub mod catalog;
pub mod dictionary;
pub mod extractor;
pub mod matcher;
pub mod shared;
pub mod source;
pub mod stopwords;

pub use catalog::{CatalogNormalizer, CatalogStats, LabelOutcome};
pub use dictionary::Dictionary;
pub use extractor::{Extractor, PlaceMatch};
pub use matcher::{MatchSpan, PlaceMatcher};
pub use shared::SharedExtractor;
pub use source::TextEncoding;
pub use stopwords::StopwordSet;
