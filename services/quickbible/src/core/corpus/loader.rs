//! XML corpus loader.
//!
//! Expected shape (attributes are ignored):
//!
//! ```text
//! <bible>
//!   <book>
//!     <h>Genesis</h>
//!     <c>
//!       <v>1. In the beginning God created the heavens and the earth.</v>
//!       ...
//!     </c>
//!   </book>
//! </bible>
//! ```
//!
//! Chapter numbers are the 1-based position of `<c>` within its book.
//! Verse numbers come from the leading token of each `<v>` entry.
//! Malformed entries are skipped and counted, never fatal.

use std::fs;
use std::path::Path;
use std::time::Instant;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::core::corpus::Corpus;
use crate::core::error::{BibleError, Result};
use crate::core::types::LoadStats;

/// Element roles inside the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tag {
    Bible,
    Book,
    Name,
    Chapter,
    Verse,
    Other,
}

impl Tag {
    fn classify(parent: Option<Tag>, name: &[u8]) -> Tag {
        match (parent, name) {
            (None, b"bible") => Tag::Bible,
            (Some(Tag::Bible), b"book") => Tag::Book,
            (Some(Tag::Book), b"h") => Tag::Name,
            (Some(Tag::Book), b"c") => Tag::Chapter,
            (Some(Tag::Chapter), b"v") => Tag::Verse,
            _ => Tag::Other,
        }
    }
}

/// A verse entry as read from the document
enum RawEntry {
    Text(String),
    /// `<v>` carrying nested markup or undecodable text
    Malformed,
}

/// A `<book>` collected until its closing tag
#[derive(Default)]
struct PendingBook {
    name: String,
    chapters: Vec<Vec<RawEntry>>,
}

/// Load the corpus from an XML file
///
/// # Errors
///
/// Returns an error if the file cannot be read or the document does
/// not have the `bible → book → c → v` shape.
pub fn load_corpus(path: &Path) -> Result<(Corpus, LoadStats)> {
    let start = Instant::now();
    tracing::info!("Loading corpus from {:?}", path);

    let xml = fs::read_to_string(path)?;
    let (corpus, mut stats) = parse_corpus(&xml)?;
    stats.duration_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Loaded {} verses from {} books ({} skipped) in {}ms",
        corpus.len(),
        corpus.books().len(),
        stats.skipped,
        stats.duration_ms
    );

    Ok((corpus, stats))
}

/// Parse an XML corpus document held in memory
pub fn parse_corpus(xml: &str) -> Result<(Corpus, LoadStats)> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut parser = CorpusParser::default();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = parser.open(e.name().as_ref());
                parser.stack.push(tag);
            }
            Event::Empty(e) => {
                let tag = parser.open(e.name().as_ref());
                parser.close(tag);
            }
            Event::End(_) => {
                if let Some(tag) = parser.stack.pop() {
                    parser.close(tag);
                }
            }
            Event::Text(t) => match t.unescape() {
                Ok(text) => parser.text(&text),
                Err(e) => parser.undecodable(&String::from_utf8_lossy(&t), e),
            },
            Event::CData(c) => parser.text(&String::from_utf8_lossy(&c)),
            Event::Eof => break,
            _ => {}
        }
    }

    if !parser.saw_root {
        return Err(BibleError::CorpusLoad(
            "document root is not <bible>".to_string(),
        ));
    }
    if parser.books_seen == 0 {
        return Err(BibleError::CorpusLoad(
            "document contains no <book> elements".to_string(),
        ));
    }

    Ok((parser.corpus, parser.stats))
}

/// Streaming parser state
#[derive(Default)]
struct CorpusParser {
    corpus: Corpus,
    stats: LoadStats,
    stack: Vec<Tag>,
    saw_root: bool,
    books_seen: usize,
    book: Option<PendingBook>,
    verse_buf: String,
    verse_malformed: bool,
}

impl CorpusParser {
    fn inside_verse(&self) -> bool {
        self.stack.contains(&Tag::Verse)
    }

    /// Handle an opening (or empty) element and return its role
    fn open(&mut self, name: &[u8]) -> Tag {
        let tag = Tag::classify(self.stack.last().copied(), name);
        match tag {
            Tag::Bible => self.saw_root = true,
            Tag::Book => self.book = Some(PendingBook::default()),
            Tag::Chapter => {
                if let Some(book) = self.book.as_mut() {
                    book.chapters.push(Vec::new());
                }
            }
            Tag::Verse => {
                self.verse_buf.clear();
                self.verse_malformed = false;
            }
            Tag::Other if self.inside_verse() => self.verse_malformed = true,
            _ => {}
        }
        tag
    }

    fn close(&mut self, tag: Tag) {
        match tag {
            Tag::Verse => {
                let entry = if self.verse_malformed {
                    RawEntry::Malformed
                } else {
                    RawEntry::Text(std::mem::take(&mut self.verse_buf))
                };
                if let Some(chapter) = self.book.as_mut().and_then(|b| b.chapters.last_mut()) {
                    chapter.push(entry);
                }
            }
            Tag::Book => {
                self.books_seen += 1;
                if let Some(pending) = self.book.take() {
                    flush_book(pending, &mut self.corpus, &mut self.stats);
                }
            }
            _ => {}
        }
    }

    /// Text whose entities could not be resolved
    ///
    /// A verse carrying it is skipped; elsewhere the raw text is kept.
    fn undecodable(&mut self, raw: &str, err: quick_xml::Error) {
        if self.inside_verse() {
            tracing::debug!("Undecodable verse text {:?}: {}", raw, err);
            self.verse_malformed = true;
        } else {
            self.text(raw);
        }
    }

    fn text(&mut self, text: &str) {
        match self.stack.last() {
            Some(Tag::Name) => {
                if let Some(book) = self.book.as_mut() {
                    book.name.push_str(text);
                }
            }
            Some(Tag::Verse) => self.verse_buf.push_str(text),
            Some(Tag::Other) if self.inside_verse() => self.verse_malformed = true,
            _ => {}
        }
    }
}

fn flush_book(pending: PendingBook, corpus: &mut Corpus, stats: &mut LoadStats) {
    let name = pending.name.trim();
    let entries: usize = pending.chapters.iter().map(Vec::len).sum();

    if name.is_empty() {
        tracing::warn!("Skipping <book> without a name ({} verse entries)", entries);
        stats.skipped += entries;
        return;
    }

    let book_pos = corpus.add_book(name);

    for (chapter_idx, chapter) in pending.chapters.iter().enumerate() {
        let chapter_num = (chapter_idx + 1) as u32;

        for entry in chapter {
            let parsed = match entry {
                RawEntry::Text(raw) => parse_verse_entry(raw),
                RawEntry::Malformed => None,
            };

            match parsed {
                Some((verse_num, text)) => {
                    corpus.push_verse(book_pos, chapter_num, verse_num, text);
                    stats.accepted += 1;
                }
                None => {
                    tracing::debug!("Skipping malformed verse entry in {} {}", name, chapter_num);
                    stats.skipped += 1;
                }
            }
        }
    }
}

/// Split a raw `"<number>[punct] <text>"` entry
///
/// Returns `None` when there is no whitespace separator or when the
/// leading token, with trailing punctuation stripped, is not a
/// positive integer.
pub fn parse_verse_entry(raw: &str) -> Option<(u32, &str)> {
    let (number, text) = raw.trim().split_once(char::is_whitespace)?;
    let number = number.trim_end_matches(|c: char| c.is_ascii_punctuation());
    let verse: u32 = number.parse().ok()?;
    if verse == 0 {
        return None;
    }
    Some((verse, text.trim_start()))
}
