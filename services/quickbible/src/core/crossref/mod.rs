//! Cross-reference index.
//!
//! Maps a source verse to the verses (or ranges) it points at, ranked
//! by community votes. Lists are sorted once, after the whole file is
//! loaded, and never re-sorted.

pub mod abbrev;
pub mod loader;

use std::collections::HashMap;

pub use loader::{load_cross_references, parse_cross_references, parse_ref_part, AbbrevRef};

use crate::core::types::{CrossReference, VerseRef};

/// Source verse → vote-ranked targets
#[derive(Debug, Clone, Default)]
pub struct CrossReferenceIndex {
    entries: HashMap<VerseRef, Vec<CrossReference>>,
    edges: usize,
}

impl CrossReferenceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an edge; call [`finalize`](Self::finalize) once all are in
    pub(crate) fn push(&mut self, source: VerseRef, target: CrossReference) {
        self.entries.entry(source).or_default().push(target);
        self.edges += 1;
    }

    /// Sort every list by votes descending; ties keep insertion order
    pub(crate) fn finalize(&mut self) {
        for list in self.entries.values_mut() {
            list.sort_by(|a, b| b.votes.cmp(&a.votes));
        }
    }

    /// Targets for a canonical source verse, empty if none
    pub fn get(&self, book: &str, chapter: u32, verse: u32) -> &[CrossReference] {
        self.entries
            .get(&VerseRef::new(book, chapter, verse))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of distinct source verses
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total number of edges across all sources
    pub fn edges(&self) -> usize {
        self.edges
    }

    /// Iterate over (source, targets) pairs in arbitrary order
    pub fn iter(&self) -> impl Iterator<Item = (&VerseRef, &[CrossReference])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}
