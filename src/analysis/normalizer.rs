//! Text normalization applied before place-name matching.
//!
//! The [`TextNormalizer`] runs a chain of [`CharFilter`]s over raw input text.
//! The default chain is:
//!
//! 1. Line endings: `"\r\n"` becomes `"\n"`
//! 2. Line joining: a line feed that ends a non-empty line becomes a space
//! 3. Space collapsing: runs of spaces become one space
//!
//! Each filter's transformations are kept in the resulting
//! [`NormalizedText`], so offsets of matches found in the normalized text can
//! be mapped back to the raw input.
//!
//! # Examples
//!
//! ```
//! use stednavn::analysis::normalizer::TextNormalizer;
//!
//! let normalizer = TextNormalizer::new().unwrap();
//! let normalized = normalizer.normalize("Turen gik til Nykøbing\r\nFalster  i går.");
//! assert_eq!(normalized.text(), "Turen gik til Nykøbing Falster i går.");
//! ```

use std::sync::Arc;

use crate::analysis::char_filter::line_join::LineJoinCharFilter;
use crate::analysis::char_filter::pattern_replace::PatternReplaceCharFilter;
use crate::analysis::char_filter::{CharFilter, Transformation};
use crate::error::Result;

/// Prepares raw text for matching by applying char filters in order.
#[derive(Clone)]
pub struct TextNormalizer {
    char_filters: Vec<Arc<dyn CharFilter>>,
}

impl TextNormalizer {
    /// Create a normalizer with the default filter chain.
    pub fn new() -> Result<Self> {
        Ok(Self::empty()
            .add_char_filter(Arc::new(PatternReplaceCharFilter::line_endings()?))
            .add_char_filter(Arc::new(LineJoinCharFilter::new()))
            .add_char_filter(Arc::new(PatternReplaceCharFilter::collapse_spaces()?)))
    }

    /// Create a normalizer without any filters. Its output equals its input.
    pub fn empty() -> Self {
        TextNormalizer {
            char_filters: Vec::new(),
        }
    }

    /// Add a char filter to the end of the chain.
    pub fn add_char_filter(mut self, char_filter: Arc<dyn CharFilter>) -> Self {
        self.char_filters.push(char_filter);
        self
    }

    /// Get the char filters used by this normalizer.
    pub fn char_filters(&self) -> &[Arc<dyn CharFilter>] {
        &self.char_filters
    }

    /// Normalize `text`. Never fails, including for empty input.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let mut filtered_text = text.to_string();
        let mut filter_transformations = Vec::with_capacity(self.char_filters.len());

        for char_filter in &self.char_filters {
            let (new_text, transformations) = char_filter.filter(&filtered_text);
            filtered_text = new_text;
            filter_transformations.push(transformations);
        }

        NormalizedText {
            text: filtered_text,
            filter_transformations,
        }
    }
}

impl std::fmt::Debug for TextNormalizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TextNormalizer")
            .field(
                "char_filters",
                &self
                    .char_filters
                    .iter()
                    .map(|f| f.name())
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// The output of [`TextNormalizer::normalize`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedText {
    text: String,
    /// One list per applied filter, in application order
    filter_transformations: Vec<Vec<Transformation>>,
}

impl NormalizedText {
    /// The normalized text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume and return the normalized text.
    pub fn into_text(self) -> String {
        self.text
    }

    /// Map a byte offset in the normalized text back to the raw input.
    pub fn original_offset(&self, offset: usize) -> usize {
        // Final -> Filter N -> ... -> Filter 1 -> Original
        self.filter_transformations
            .iter()
            .rev()
            .fold(offset, |offset, transformations| {
                correct_offset(offset, transformations)
            })
    }
}

/// Maps an offset in a filter's output back to its input using its transformations.
fn correct_offset(offset: usize, transformations: &[Transformation]) -> usize {
    let mut corrected = offset as isize;
    // Transformations are ordered by position
    for t in transformations {
        let original_len = (t.original_end - t.original_start) as isize;
        let new_len = (t.new_end - t.new_start) as isize;

        if offset >= t.new_end {
            corrected += original_len - new_len;
        } else if offset >= t.new_start {
            // Strictly inside a replacement: interpolate
            if new_len == 0 {
                return t.original_start;
            }
            let offset_in_new = (offset - t.new_start) as isize;
            return t.original_start + (offset_in_new * original_len / new_len) as usize;
        } else {
            break;
        }
    }
    corrected as usize
}
