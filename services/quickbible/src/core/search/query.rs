//! Query preprocessing for verse search.
//!
//! Two modes are selected by surface syntax:
//! - a query wrapped in a matching pair of quotes is a phrase and must
//!   appear verbatim (case-insensitively) in the verse text
//! - anything else is split on whitespace and every term must appear,
//!   in any order
//!
//! Curly quotes are normalized to straight quotes before the check,
//! so `“Jesus wept”` and `"Jesus wept"` behave the same.

use serde::Serialize;

/// A parsed search query with lower-cased needles
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchQuery {
    /// Exact substring match
    Phrase { phrase: String },
    /// All terms must be present
    Terms { terms: Vec<String> },
}

impl SearchQuery {
    /// Parse a raw query string
    ///
    /// # Examples
    ///
    /// ```
    /// use quickbible::core::search::SearchQuery;
    ///
    /// assert_eq!(
    ///     SearchQuery::parse("\u{201C}Jesus wept\u{201D}"),
    ///     SearchQuery::Phrase { phrase: "jesus wept".to_string() }
    /// );
    /// assert_eq!(
    ///     SearchQuery::parse("  Jesus   wept "),
    ///     SearchQuery::Terms { terms: vec!["jesus".to_string(), "wept".to_string()] }
    /// );
    /// ```
    pub fn parse(raw: &str) -> Self {
        let normalized = normalize_quotes(raw.trim());

        match strip_matching_quotes(&normalized) {
            Some(inner) => SearchQuery::Phrase {
                phrase: inner.to_lowercase(),
            },
            None => SearchQuery::Terms {
                terms: normalized
                    .to_lowercase()
                    .split_whitespace()
                    .map(str::to_string)
                    .collect(),
            },
        }
    }

    /// Whether the query can match anything at all
    pub fn is_empty(&self) -> bool {
        match self {
            SearchQuery::Phrase { phrase } => phrase.is_empty(),
            SearchQuery::Terms { terms } => terms.is_empty(),
        }
    }

    /// Test against already lower-cased verse text
    pub fn matches(&self, folded_text: &str) -> bool {
        match self {
            SearchQuery::Phrase { phrase } => folded_text.contains(phrase.as_str()),
            SearchQuery::Terms { terms } => terms.iter().all(|t| folded_text.contains(t.as_str())),
        }
    }
}

/// Replace curly single and double quotes with straight ones
pub fn normalize_quotes(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            _ => c,
        })
        .collect()
}

/// Inner text if `s` is wrapped in the same straight quote on both ends
fn strip_matching_quotes(s: &str) -> Option<&str> {
    let quote = s.chars().next().filter(|c| *c == '"' || *c == '\'')?;
    if s.len() < 2 || !s.ends_with(quote) {
        return None;
    }
    Some(&s[1..s.len() - 1])
}
