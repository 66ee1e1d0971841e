//! Keyword and phrase search over the verse corpus.
//!
//! Search is a linear scan over pre-folded (lower-cased) verse text.
//! Results come back in corpus order; there is no relevance ranking.

mod page;
mod query;

pub use page::SearchPage;
pub use query::{normalize_quotes, SearchQuery};

use crate::core::corpus::Corpus;
use crate::core::types::Verse;

/// All verses matching `query`, in corpus order
pub fn search<'a>(corpus: &'a Corpus, query: &SearchQuery) -> Vec<&'a Verse> {
    if query.is_empty() {
        return Vec::new();
    }

    corpus
        .folded()
        .filter(|(_, text)| query.matches(text))
        .map(|(verse, _)| verse)
        .collect()
}
