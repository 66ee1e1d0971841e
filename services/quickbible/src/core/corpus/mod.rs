//! Verse corpus and its loader.
//!
//! The corpus is an ordered `Vec<Verse>`: book order (first appearance
//! in the source), then chapter, then verse, exactly as encountered
//! while parsing. Next/previous navigation walks this sequence, so the
//! order is part of the contract rather than an accident of insertion.
//!
//! A position index keyed by (book position, chapter, verse) keeps
//! exact lookups O(1) while preserving first-match semantics when the
//! source repeats an entry.

pub mod books;
pub mod loader;

use std::collections::HashMap;

pub use books::BookIndex;
pub use loader::{load_corpus, parse_corpus, parse_verse_entry};

use crate::core::types::Verse;

type VerseKey = (usize, u32, u32);

/// Loaded verses plus the canonical book list
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    books: BookIndex,
    verses: Vec<Verse>,
    folded: Vec<String>,
    positions: HashMap<VerseKey, usize>,
}

impl Corpus {
    /// Create an empty corpus
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a book and return its 0-based position
    pub(crate) fn add_book(&mut self, name: &str) -> usize {
        self.books.insert(name)
    }

    /// Append a verse for a registered book
    pub(crate) fn push_verse(&mut self, book_pos: usize, chapter: u32, verse: u32, text: &str) {
        let Some(book) = self.books.names().get(book_pos) else {
            return;
        };

        let idx = self.verses.len();
        self.positions
            .entry((book_pos, chapter, verse))
            .or_insert(idx);
        self.folded.push(text.to_lowercase());
        self.verses.push(Verse {
            book: book.clone(),
            chapter,
            verse,
            text: text.to_string(),
        });
    }

    pub fn books(&self) -> &BookIndex {
        &self.books
    }

    /// All verses in corpus order
    pub fn verses(&self) -> &[Verse] {
        &self.verses
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    /// Verses paired with their lower-cased text
    pub(crate) fn folded(&self) -> impl Iterator<Item = (&Verse, &str)> {
        self.verses
            .iter()
            .zip(self.folded.iter().map(String::as_str))
    }

    /// Position of the first verse with this exact identity
    pub fn position(&self, book: &str, chapter: u32, verse: u32) -> Option<usize> {
        let book_pos = self.books.position_exact(book)?;
        self.positions.get(&(book_pos, chapter, verse)).copied()
    }

    pub fn get(&self, idx: usize) -> Option<&Verse> {
        self.verses.get(idx)
    }
}
