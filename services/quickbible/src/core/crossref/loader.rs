//! Tab-delimited cross-reference loader.
//!
//! Each line is `source<TAB>target<TAB>votes`, where references use the
//! `Abbr.Chapter.Verse` form and targets may be ranges
//! (`Abbr.C.V-Abbr.C.V`):
//!
//! ```text
//! Gen.1.1	Ps.121.2	62
//! Gen.1.1	John.1.1-John.1.3	354
//! ```
//!
//! Lines that do not resolve are skipped and counted.

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::core::crossref::abbrev;
use crate::core::crossref::CrossReferenceIndex;
use crate::core::error::Result;
use crate::core::types::{CrossReference, LoadStats, VerseRef};

/// A reference parsed from the abbreviated `Abbr.C.V` form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbbrevRef {
    /// Canonical book name
    pub book: &'static str,
    pub chapter: u32,
    pub verse: u32,
}

impl AbbrevRef {
    fn to_verse_ref(self) -> VerseRef {
        VerseRef::new(self.book, self.chapter, self.verse)
    }

    fn display(&self) -> String {
        format!("{} {}:{}", self.book, self.chapter, self.verse)
    }
}

/// Parse a single `Abbr.Chapter.Verse` reference
///
/// Components beyond the third are ignored.
pub fn parse_ref_part(part: &str) -> Option<AbbrevRef> {
    let mut fields = part.trim().split('.');
    let book = abbrev::expand(fields.next()?)?;
    let chapter = fields.next()?.parse().ok()?;
    let verse = fields.next()?.parse().ok()?;
    Some(AbbrevRef {
        book,
        chapter,
        verse,
    })
}

/// Collapse a target range into its display form
fn display_range(start: &AbbrevRef, end: Option<&AbbrevRef>) -> String {
    match end {
        Some(end) if end.book == start.book && end.chapter == start.chapter => format!(
            "{} {}:{}-{}",
            start.book, start.chapter, start.verse, end.verse
        ),
        Some(end) if end.book == start.book => format!(
            "{} {}:{}-{}:{}",
            start.book, start.chapter, start.verse, end.chapter, end.verse
        ),
        Some(end) => format!("{} - {}", start.display(), end.display()),
        None => start.display(),
    }
}

/// Parse one line into its source key and target entry
fn parse_line(line: &str) -> Option<(VerseRef, CrossReference)> {
    let mut fields = line.split('\t');
    let (from, to, votes) = (fields.next()?, fields.next()?, fields.next()?);

    let source_start = from.split('-').next()?;
    let source = parse_ref_part(source_start)?;

    let (target_start, target_end) = match to.split_once('-') {
        Some((start, end)) => (start, Some(end)),
        None => (to, None),
    };
    let target = parse_ref_part(target_start)?;

    let end = target_end.and_then(|raw| {
        let parsed = parse_ref_part(raw);
        if parsed.is_none() {
            tracing::debug!("Unparseable range end '{}', showing start only", raw);
        }
        parsed
    });

    let votes: i64 = votes.trim().parse().ok()?;

    Some((
        source.to_verse_ref(),
        CrossReference {
            display: display_range(&target, end.as_ref()),
            link: target.to_verse_ref(),
            votes,
        },
    ))
}

/// Build an index from the file contents
pub fn parse_cross_references(data: &str) -> (CrossReferenceIndex, LoadStats) {
    let mut index = CrossReferenceIndex::new();
    let mut stats = LoadStats::default();

    for line in data.lines() {
        let line = line.trim_end_matches('\r');
        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some((source, target)) => {
                index.push(source, target);
                stats.accepted += 1;
            }
            None => {
                tracing::debug!("Skipping cross-reference line: {:?}", line);
                stats.skipped += 1;
            }
        }
    }

    index.finalize();
    (index, stats)
}

/// Load the cross-reference file
///
/// # Errors
///
/// Returns an error only if the file cannot be read; bad lines are
/// skipped.
pub fn load_cross_references(path: &Path) -> Result<(CrossReferenceIndex, LoadStats)> {
    let start = Instant::now();
    tracing::info!("Loading cross references from {:?}", path);

    let data = fs::read_to_string(path)?;
    let (index, mut stats) = parse_cross_references(&data);
    stats.duration_ms = start.elapsed().as_millis() as u64;

    tracing::info!(
        "Loaded {} cross-reference connections for {} verses ({} skipped) in {}ms",
        stats.accepted,
        index.len(),
        stats.skipped,
        stats.duration_ms
    );

    Ok((index, stats))
}
