//! Read-only query engine over the loaded corpus and cross references.
//!
//! `BibleService` is built once at startup and then only read. Every
//! query is synchronous and side-effect free, so a single instance can
//! be shared behind an `Arc` by any number of callers.
//!
//! "Not found" is always an `Option::None` or an empty collection,
//! never an error.

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use std::path::Path;

use crate::core::config::{Config, LinksConfig};
use crate::core::corpus::{self, Corpus};
use crate::core::crossref::{self, CrossReferenceIndex};
use crate::core::links;
use crate::core::search::{self, SearchPage, SearchQuery};
use crate::core::types::{AudioLink, CorpusInfo, CrossReference, LoadStats, ResolvedBook, Verse};

/// Returned by [`BibleService::random_verse`] when nothing is loaded
static EMPTY_CORPUS_VERSE: Lazy<Verse> = Lazy::new(|| Verse {
    book: "Error".to_string(),
    chapter: 1,
    verse: 1,
    text: "No verses loaded.".to_string(),
});

/// Scripture lookup, search and cross-reference service
#[derive(Debug)]
pub struct BibleService {
    corpus: Corpus,
    cross_refs: CrossReferenceIndex,
    links: LinksConfig,
    corpus_stats: LoadStats,
    cross_reference_stats: LoadStats,
    loaded_at: DateTime<Utc>,
}

impl BibleService {
    /// Build from already-loaded structures
    pub fn new(corpus: Corpus, cross_refs: CrossReferenceIndex, links: LinksConfig) -> Self {
        Self {
            corpus,
            cross_refs,
            links,
            corpus_stats: LoadStats::default(),
            cross_reference_stats: LoadStats::default(),
            loaded_at: Utc::now(),
        }
    }

    /// Load both sources, degrading to empty structures on failure
    ///
    /// Neither a missing corpus nor a missing cross-reference file
    /// aborts startup. An empty corpus is logged at warn level since
    /// every query then comes back empty.
    pub fn load(bible_path: &Path, cross_references_path: &Path, links: LinksConfig) -> Self {
        let (corpus, corpus_stats) = match corpus::load_corpus(bible_path) {
            Ok(loaded) => loaded,
            Err(e) => {
                tracing::error!("Failed to load corpus from {:?}: {}", bible_path, e);
                (Corpus::new(), LoadStats::default())
            }
        };

        if corpus.is_empty() {
            tracing::warn!(
                "Corpus is empty; all verse lookups and searches will return nothing"
            );
        }

        let (cross_refs, cross_reference_stats) =
            match crossref::load_cross_references(cross_references_path) {
                Ok(loaded) => loaded,
                Err(e) if e.is_not_found() => {
                    tracing::warn!(
                        "{:?} not found; cross references will be empty",
                        cross_references_path
                    );
                    (CrossReferenceIndex::new(), LoadStats::default())
                }
                Err(e) => {
                    tracing::error!(
                        "Failed to load cross references from {:?}: {}",
                        cross_references_path,
                        e
                    );
                    (CrossReferenceIndex::new(), LoadStats::default())
                }
            };

        Self {
            corpus,
            cross_refs,
            links,
            corpus_stats,
            cross_reference_stats,
            loaded_at: Utc::now(),
        }
    }

    /// Load using the paths and link settings from `config`
    pub fn from_config(config: &Config) -> Self {
        Self::load(
            &config.corpus.bible_path,
            &config.corpus.cross_references_path,
            config.links.clone(),
        )
    }

    pub fn is_empty(&self) -> bool {
        self.corpus.is_empty()
    }

    /// Canonical book names in book-ID order
    pub fn books(&self) -> &[String] {
        self.corpus.books().names()
    }

    /// All verses in corpus order
    pub fn verses(&self) -> &[Verse] {
        self.corpus.verses()
    }

    /// Resolve a user-supplied book name to its canonical identity
    pub fn resolve_book(&self, name: &str) -> Option<ResolvedBook<'_>> {
        self.corpus.books().resolve(name)
    }

    /// 1-based book ID for a user-supplied book name
    pub fn book_id(&self, name: &str) -> Option<usize> {
        self.resolve_book(name).map(|b| b.id)
    }

    /// Look up a single verse
    pub fn get_verse(&self, book: &str, chapter: u32, verse: u32) -> Option<&Verse> {
        let book = self.resolve_book(book)?;
        let idx = self.corpus.position(book.name, chapter, verse)?;
        self.corpus.get(idx)
    }

    /// Keyword or quoted-phrase search, results in corpus order
    pub fn search(&self, query: &str) -> Vec<&Verse> {
        search::search(&self.corpus, &SearchQuery::parse(query))
    }

    /// One page of [`search`](Self::search) results
    pub fn search_page(&self, query: &str, page: usize, page_size: usize) -> SearchPage<'_> {
        SearchPage::from_results(self.search(query), page, page_size)
    }

    /// Uniformly random verse, or a sentinel when the corpus is empty
    pub fn random_verse(&self) -> &Verse {
        self.random_verse_with(&mut rand::thread_rng())
    }

    /// [`random_verse`](Self::random_verse) with a caller-supplied RNG
    pub fn random_verse_with<R: Rng>(&self, rng: &mut R) -> &Verse {
        let verses = self.corpus.verses();
        if verses.is_empty() {
            return &EMPTY_CORPUS_VERSE;
        }
        &verses[rng.gen_range(0..verses.len())]
    }

    /// Verse following `v` in corpus order
    pub fn next_verse(&self, v: &Verse) -> Option<&Verse> {
        let idx = self.corpus.position(&v.book, v.chapter, v.verse)?;
        self.corpus.get(idx + 1)
    }

    /// Verse preceding `v` in corpus order
    pub fn previous_verse(&self, v: &Verse) -> Option<&Verse> {
        let idx = self.corpus.position(&v.book, v.chapter, v.verse)?;
        self.corpus.get(idx.checked_sub(1)?)
    }

    /// Highest verse number loaded for a chapter
    pub fn chapter_last_verse(&self, book: &str, chapter: u32) -> Option<u32> {
        let book = self.resolve_book(book)?;
        self.corpus
            .verses()
            .iter()
            .filter(|v| v.book == book.name && v.chapter == chapter)
            .map(|v| v.verse)
            .max()
    }

    /// BibleHub page for a verse
    pub fn biblehub_url(&self, book: &str, chapter: u32, verse: u32) -> Option<String> {
        let book = self.resolve_book(book)?;
        Some(links::biblehub_url(
            &self.links.biblehub_base_url,
            book.name,
            chapter,
            verse,
        ))
    }

    /// Audio stream from `start_verse` (default 1) to the chapter's end
    pub fn audio_url(&self, book: &str, chapter: u32, start_verse: Option<u32>) -> Option<AudioLink> {
        let resolved = self.resolve_book(book)?;
        let end_verse = self.chapter_last_verse(resolved.name, chapter)?;
        let start_verse = start_verse.unwrap_or(1);
        if start_verse == 0 || start_verse > end_verse {
            return None;
        }

        Some(AudioLink {
            url: links::audio_url(
                &self.links.audio_base_url,
                resolved.id,
                chapter,
                start_verse,
                end_verse,
            ),
            book: resolved.name.to_string(),
            chapter,
            start_verse,
            end_verse,
        })
    }

    /// Vote-ranked cross references for a verse, empty if none
    pub fn cross_references(&self, book: &str, chapter: u32, verse: u32) -> &[CrossReference] {
        match self.resolve_book(book) {
            Some(book) => self.cross_refs.get(book.name, chapter, verse),
            None => &[],
        }
    }

    /// Summary of what was loaded
    pub fn info(&self) -> CorpusInfo {
        CorpusInfo {
            books: self.corpus.books().len(),
            verses: self.corpus.len(),
            cross_reference_sources: self.cross_refs.len(),
            cross_reference_edges: self.cross_refs.edges(),
            corpus_stats: self.corpus_stats.clone(),
            cross_reference_stats: self.cross_reference_stats.clone(),
            loaded_at: self.loaded_at,
        }
    }
}
