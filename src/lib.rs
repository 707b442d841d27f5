//! # Stednavn
//!
//! Extraction of known place names from free-form text.
//!
//! A dictionary of place names is built from a catalog of labels (for example
//! a Wikidata export of Danish places), compiled into an automaton, and
//! matched against text after light normalization.
//!
//! ## Features
//!
//! - Language-tag filtering and disambiguation stripping of catalog labels
//! - Stopword exclusion
//! - Whole-word, longest-match matching with literal place names
//! - Line-wrap joining so names broken across lines are still found
//! - Offsets of every match in both normalized and raw text
//! - Immutable, shareable extractors with atomic replacement

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod gazetteer;

pub mod prelude {
    pub use crate::config::GazetteerConfig;
    pub use crate::error::{Result, StednavnError};
    pub use crate::gazetteer::{
        CatalogNormalizer, Dictionary, Extractor, PlaceMatch, PlaceMatcher, SharedExtractor,
        StopwordSet, TextEncoding,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
