use regex::Regex;

use super::{CharFilter, Transformation};
use crate::error::{Result, StednavnError};

/// A char filter that replaces every match of a regex pattern with a fixed string.
pub struct PatternReplaceCharFilter {
    pattern: Regex,
    replacement: String,
    name: &'static str,
}

impl PatternReplaceCharFilter {
    /// Create a new pattern replace char filter.
    pub fn new(pattern: &str, replacement: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(pattern).map_err(|e| {
                StednavnError::analysis(format!("Invalid char filter pattern '{pattern}': {e}"))
            })?,
            replacement: replacement.to_string(),
            name: "pattern_replace",
        })
    }

    /// Unify `\r\n` line terminators to a single `\n`.
    pub fn line_endings() -> Result<Self> {
        Ok(Self::new(r"\r\n", "\n")?.with_name("line_endings"))
    }

    /// Collapse runs of space characters into a single space.
    pub fn collapse_spaces() -> Result<Self> {
        Ok(Self::new(" {2,}", " ")?.with_name("collapse_spaces"))
    }

    fn with_name(mut self, name: &'static str) -> Self {
        self.name = name;
        self
    }

    /// The source of the underlying pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl std::fmt::Debug for PatternReplaceCharFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PatternReplaceCharFilter")
            .field("pattern", &self.pattern.as_str())
            .field("replacement", &self.replacement)
            .finish()
    }
}

impl CharFilter for PatternReplaceCharFilter {
    fn filter(&self, input: &str) -> (String, Vec<Transformation>) {
        let mut output = String::with_capacity(input.len());
        let mut transformations = Vec::new();
        let mut last_match_end = 0;

        for m in self.pattern.find_iter(input) {
            let match_start = m.start();
            let match_end = m.end();

            output.push_str(&input[last_match_end..match_start]);

            let replacement_start = output.len();
            output.push_str(&self.replacement);
            let replacement_end = output.len();

            // Same-length replacements keep offsets aligned
            if match_end - match_start != replacement_end - replacement_start {
                transformations.push(Transformation::new(
                    match_start,
                    match_end,
                    replacement_start,
                    replacement_end,
                ));
            }

            last_match_end = match_end;
        }

        output.push_str(&input[last_match_end..]);

        (output, transformations)
    }

    fn name(&self) -> &'static str {
        self.name
    }
}
