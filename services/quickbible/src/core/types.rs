//! Core data types for the QuickBible engine.
//!
//! This module defines the records produced by the loaders and
//! returned by the query engine: verses, verse references,
//! cross-references and load statistics.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single addressable verse of the corpus
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    /// Canonical book name
    pub book: String,

    /// Chapter number (1-based position within the book)
    pub chapter: u32,

    /// Verse number as written in the source
    pub verse: u32,

    /// Verse text
    pub text: String,
}

impl Verse {
    /// Check whether this verse has the given identity
    pub fn is(&self, book: &str, chapter: u32, verse: u32) -> bool {
        self.book == book && self.chapter == chapter && self.verse == verse
    }
}

impl fmt::Display for Verse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// A (book, chapter, verse) triple without text
///
/// Displays as `"<Book> <Chapter>:<Verse>"`, the same form used for
/// cross-reference source keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VerseRef {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseRef {
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }
}

impl fmt::Display for VerseRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// A weighted link from a source verse to a target verse or range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossReference {
    /// Human-readable target, ranges collapsed (e.g. "John 1:1-3")
    pub display: String,

    /// Start of the target, used for deep links
    pub link: VerseRef,

    /// Community votes (may be negative)
    pub votes: i64,
}

impl CrossReference {
    /// Deep-link token for the target start (`Book_Name_C_V`)
    pub fn link_token(&self) -> String {
        crate::core::links::link_token(&self.link.book, self.link.chapter, self.link.verse)
    }
}

/// A book resolved to its canonical identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedBook<'a> {
    /// 1-based position in canonical order
    pub id: usize,

    /// Canonical book name
    pub name: &'a str,
}

/// Statistics from a single loader run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadStats {
    /// Records added to the in-memory structure
    pub accepted: usize,

    /// Records skipped as malformed or unresolvable
    pub skipped: usize,

    /// Load duration in milliseconds
    pub duration_ms: u64,
}

/// Summary of the loaded corpus and cross-reference index
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusInfo {
    pub books: usize,
    pub verses: usize,
    pub cross_reference_sources: usize,
    pub cross_reference_edges: usize,
    pub corpus_stats: LoadStats,
    pub cross_reference_stats: LoadStats,
    pub loaded_at: DateTime<Utc>,
}

/// Audio link for a chapter span
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioLink {
    pub url: String,
    pub book: String,
    pub chapter: u32,
    pub start_verse: u32,
    pub end_verse: u32,
}
