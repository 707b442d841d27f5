//! Char filter implementations for text normalization.
//!
//! This module provides filters that pre-process the raw input text before it
//! is handed to the place-name matcher. Every filter reports the edits it made
//! so that offsets in the filtered text can be mapped back to the input.
//!
//! # Available Filters
//!
//! - [`pattern_replace::PatternReplaceCharFilter`] - Regex-based replacement
//! - [`line_join::LineJoinCharFilter`] - Rejoins lines broken by hard wraps
//!
//! # Examples
//!
//! ```
//! use stednavn::analysis::char_filter::CharFilter;
//! use stednavn::analysis::char_filter::line_join::LineJoinCharFilter;
//!
//! let filter = LineJoinCharFilter::new();
//! let (output, _) = filter.filter("Nykøbing\nFalster");
//! assert_eq!(output, "Nykøbing Falster");
//! ```

/// Represents a change in the text, mapping a range in the original text
/// to a range in the new text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transformation {
    pub original_start: usize,
    pub original_end: usize,
    pub new_start: usize,
    pub new_end: usize,
}

impl Transformation {
    pub fn new(
        original_start: usize,
        original_end: usize,
        new_start: usize,
        new_end: usize,
    ) -> Self {
        Self {
            original_start,
            original_end,
            new_start,
            new_end,
        }
    }
}

/// Trait for character filters that transform text before matching.
///
/// Implementations return the modified text along with the list of
/// length-changing edits, ordered by position.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    ///
    /// # Returns
    ///
    /// A tuple containing:
    /// - The filtered text.
    /// - A vector of `Transformation`s describing changes made.
    fn filter(&self, input: &str) -> (String, Vec<Transformation>);

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod line_join;
pub mod pattern_replace;
