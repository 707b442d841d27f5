//! Line-join char filter.
//!
//! Hard-wrapped text splits multi-word place names across lines
//! ("Nykøbing\nFalster"). This filter replaces a line feed with a space unless
//! the line feed starts a line itself, i.e. it sits at the very beginning of
//! the text or directly follows another line feed. A paragraph break
//! `"\n\n"` therefore becomes `" \n"`: the first feed ends a non-empty line and
//! is joined, the second one starts a line and is kept.

use super::{CharFilter, Transformation};

/// A char filter that rejoins hard-wrapped lines.
#[derive(Clone, Debug, Default)]
pub struct LineJoinCharFilter;

impl LineJoinCharFilter {
    /// Create a new line-join char filter.
    pub fn new() -> Self {
        LineJoinCharFilter
    }
}

impl CharFilter for LineJoinCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut previous: Option<char> = None;

        for c in input.chars() {
            let starts_line = previous.is_none_or(|p| p == '\n');
            if c == '\n' && !starts_line {
                output.push(' ');
            } else {
                output.push(c);
            }
            previous = Some(c);
        }

        // '\n' and ' ' are both one byte, so offsets never move
        (output, Vec::new())
    }

    fn name(&self) -> &'static str {
        "line_join"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn join(input: &str) -> String {
        LineJoinCharFilter::new().filter(input).0
    }

    #[test]
    fn test_single_wrap_is_joined() {
        assert_eq!(join("Nykøbing\nFalster"), "Nykøbing Falster");
        assert_eq!(join("Ribe\n"), "Ribe ");
    }

    #[test]
    fn test_paragraph_break_is_kept() {
        assert_eq!(join("Ribe\n\nVejle"), "Ribe \nVejle");
        assert_eq!(join("Ribe\n\n\nVejle"), "Ribe \n\nVejle");
    }

    #[test]
    fn test_leading_line_feed_is_kept() {
        assert_eq!(join("\nRibe"), "\nRibe");
        assert_eq!(join("\n\nRibe\nVejle"), "\n\nRibe Vejle");
    }

    #[test]
    fn test_no_transformations_recorded() {
        let (output, transformations) = LineJoinCharFilter::new().filter("a\nb\n\nc");
        assert_eq!(output.len(), "a\nb\n\nc".len());
        assert!(transformations.is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(join(""), "");
    }
}
