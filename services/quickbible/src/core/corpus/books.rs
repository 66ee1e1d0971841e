//! Canonical book list and book-name resolution.
//!
//! Book order is the order of first appearance in the corpus source
//! and doubles as the 1-based book ID used for audio links. Names are
//! resolved by exact case-insensitive match first, then by the first
//! book (in canonical order) whose name contains the input.

use std::collections::HashMap;

use crate::core::types::ResolvedBook;

/// Ordered canonical book names plus a lower-cased normalization map
#[derive(Debug, Clone, Default)]
pub struct BookIndex {
    names: Vec<String>,
    normalized: HashMap<String, usize>,
}

impl BookIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a book name, returning its 0-based position
    ///
    /// A name already registered (case-insensitively) keeps its
    /// original position.
    pub(crate) fn insert(&mut self, name: &str) -> usize {
        let key = name.to_lowercase();
        if let Some(&idx) = self.normalized.get(&key) {
            return idx;
        }

        let idx = self.names.len();
        self.names.push(name.to_string());
        self.normalized.insert(key, idx);
        idx
    }

    /// Canonical names in book-ID order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// 0-based position of an exact canonical name
    pub(crate) fn position_exact(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    /// Resolve a user-supplied book name
    ///
    /// Returns `None` for empty input or when neither the exact nor the
    /// substring strategy finds a book.
    pub fn resolve(&self, input: &str) -> Option<ResolvedBook<'_>> {
        let needle = input.trim().to_lowercase();
        if needle.is_empty() {
            return None;
        }

        let idx = match self.normalized.get(&needle) {
            Some(&idx) => idx,
            None => self
                .names
                .iter()
                .position(|name| name.to_lowercase().contains(&needle))?,
        };

        Some(ResolvedBook {
            id: idx + 1,
            name: &self.names[idx],
        })
    }
}

impl<S: AsRef<str>> FromIterator<S> for BookIndex {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut index = BookIndex::new();
        for name in iter {
            index.insert(name.as_ref());
        }
        index
    }
}
