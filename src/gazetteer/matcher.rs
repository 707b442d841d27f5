//! Whole-word, longest-match place-name matcher.
//!
//! The [`PlaceMatcher`] compiles a [`Dictionary`] into an Aho-Corasick
//! automaton. Names are matched as literals, so punctuation such as `-`, `'`,
//! `.` or `(` has no special meaning.
//!
//! # Matching rules
//!
//! - **Boundary**: a match must not have a word character (Unicode
//!   alphanumeric or `_`) directly before or after it. "Ry" is not found
//!   inside "Ryanair".
//! - **Precedence**: among the names that match at the same start position
//!   and satisfy the boundary rule, the one with the lowest dictionary rank
//!   wins, i.e. the longest. If the longest candidate fails the boundary rule a
//!   shorter one may still match: with "Aarhus" and "Aarhus C" in the
//!   dictionary, "Aarhus Centrum" yields "Aarhus".
//! - **Scan order**: matches are reported left to right and never overlap.
//!   After a match, scanning resumes at its end.
//!
//! # Examples
//!
//! ```
//! use stednavn::gazetteer::dictionary::Dictionary;
//! use stednavn::gazetteer::matcher::PlaceMatcher;
//!
//! let matcher = PlaceMatcher::new(Dictionary::new(vec!["Aarhus", "Aarhus C"])).unwrap();
//! let text = "Toget til Aarhus C er forsinket.";
//! let spans = matcher.find_iter(text);
//! assert_eq!(spans.len(), 1);
//! assert_eq!(&text[spans[0].start..spans[0].end], "Aarhus C");
//! ```

use std::collections::BTreeMap;

use aho_corasick::{AhoCorasick, MatchKind};
use log::{debug, warn};

use crate::error::{Result, StednavnError};
use crate::gazetteer::dictionary::Dictionary;

/// A match found by [`PlaceMatcher::find_iter`], as byte offsets into the
/// searched text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    /// Dictionary rank of the matched name.
    pub rank: usize,
    pub start: usize,
    pub end: usize,
}

/// Compiled, immutable matcher over a dictionary.
#[derive(Clone, Debug)]
pub struct PlaceMatcher {
    automaton: AhoCorasick,
    dictionary: Dictionary,
}

impl PlaceMatcher {
    /// Compile `dictionary` into a matcher.
    ///
    /// An empty dictionary compiles to a matcher that never matches.
    pub fn new(dictionary: Dictionary) -> Result<Self> {
        debug_assert!(dictionary.is_ordered());

        if dictionary.is_empty() {
            warn!("Place-name dictionary is empty; no place names will be matched");
        }

        // Standard semantics are required for overlapping search
        let automaton = AhoCorasick::builder()
            .match_kind(MatchKind::Standard)
            .build(dictionary.names())
            .map_err(|e| {
                StednavnError::compilation(format!(
                    "failed to build automaton over {} place names: {e}",
                    dictionary.len()
                ))
            })?;

        debug!(
            "Compiled place-name automaton: {} patterns, {} bytes",
            automaton.patterns_len(),
            automaton.memory_usage()
        );

        Ok(PlaceMatcher {
            automaton,
            dictionary,
        })
    }

    /// The dictionary this matcher was compiled from.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    /// The name for a span returned by this matcher.
    pub fn name(&self, span: &MatchSpan) -> &str {
        self.dictionary.get(span.rank).unwrap_or_default()
    }

    /// Find all non-overlapping whole-word matches in `text`, left to right.
    pub fn find_iter(&self, text: &str) -> Vec<MatchSpan> {
        if self.dictionary.is_empty() || text.is_empty() {
            return Vec::new();
        }

        // Best candidate per start position
        let mut candidates: BTreeMap<usize, MatchSpan> = BTreeMap::new();
        for m in self.automaton.find_overlapping_iter(text) {
            let span = MatchSpan {
                rank: m.pattern().as_usize(),
                start: m.start(),
                end: m.end(),
            };
            if span.start == span.end || !is_word_bounded(text, span.start, span.end) {
                continue;
            }
            candidates
                .entry(span.start)
                .and_modify(|best| {
                    if span.rank < best.rank {
                        *best = span;
                    }
                })
                .or_insert(span);
        }

        let mut spans = Vec::new();
        let mut cursor = 0;
        for (start, span) in candidates {
            if start >= cursor {
                cursor = span.end;
                spans.push(span);
            }
        }
        spans
    }

    /// Find all matches and return the matched names.
    pub fn find_names(&self, text: &str) -> Vec<String> {
        self.find_iter(text)
            .into_iter()
            .map(|span| text[span.start..span.end].to_string())
            .collect()
    }

    /// Check whether `text` contains at least one match.
    pub fn is_match(&self, text: &str) -> bool {
        !self.find_iter(text).is_empty()
    }
}

/// Word characters: Unicode alphanumerics and underscore.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Check that `text[start..end]` has no word character on either side.
fn is_word_bounded(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(is_word_char) && !after.is_some_and(is_word_char)
}
