//! Naive question search.
//!
//! A question matches when the query is a case-insensitive substring of its
//! title or body, or equals one of its tag names ignoring case. No ranking.

use super::question::Question;

/// A normalized search query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery {
    needle: String,
}

impl SearchQuery {
    /// Lowercase the raw query. Whitespace is significant.
    pub fn parse(raw: &str) -> Self {
        Self {
            needle: raw.to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// An empty query matches every question.
    pub fn matches(&self, question: &Question) -> bool {
        question.title().to_lowercase().contains(&self.needle)
            || question.body().to_lowercase().contains(&self.needle)
            || question.has_tag(&self.needle)
    }
}
