//! Text analysis module for Stednavn.
//!
//! This module provides the normalization that raw text goes through before
//! it is matched against the gazetteer: char filters and the
//! [`normalizer::TextNormalizer`] that chains them.

pub mod char_filter;
pub mod normalizer;

pub use normalizer::{NormalizedText, TextNormalizer};
