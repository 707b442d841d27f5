//! Ordered place-name dictionary.
//!
//! The position of a name in the dictionary is its *rank*, and rank is
//! precedence: when several names match at the same text position, the one
//! with the lowest rank wins. Names are ordered by descending character
//! length with a stable sort, so lower rank means longer, and among equally
//! long names the one supplied first.

use std::cmp::Reverse;

use crate::gazetteer::catalog::CatalogNormalizer;

/// Place names in match-precedence order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Dictionary {
    names: Vec<String>,
}

impl Dictionary {
    /// Create a dictionary, ordering `names` longest first.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut names: Vec<String> = names.into_iter().map(Into::into).collect();
        names.sort_by_key(|name| Reverse(name.chars().count()));
        Dictionary { names }
    }

    /// Normalize raw catalog labels and build a dictionary from the result.
    pub fn from_catalog<I, S>(labels: I, normalizer: &CatalogNormalizer) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(normalizer.normalize(labels))
    }

    /// The names in precedence order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// The name with the given rank.
    pub fn get(&self, rank: usize) -> Option<&str> {
        self.names.get(rank).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Check the ordering invariant: character lengths never increase.
    pub fn is_ordered(&self) -> bool {
        self.names
            .windows(2)
            .all(|pair| pair[0].chars().count() >= pair[1].chars().count())
    }
}

impl<S: Into<String>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
