//! External link and deep-link token construction.
//!
//! - BibleHub pages: `<base>/<slug>/<chapter>-<verse>.htm`
//! - Audio streams: `<base>/<BBCCCVVV>-<BBCCCVVV>` (book ID, chapter,
//!   verse, zero padded)
//! - Deep-link tokens: `Book_Name_Chapter_Verse`, optionally prefixed
//!   with `/v_` by chat front ends

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::types::VerseRef;

pub const DEFAULT_BIBLEHUB_BASE_URL: &str = "https://biblehub.com";
pub const DEFAULT_AUDIO_BASE_URL: &str = "https://audio.esv.org/hw/mq";

/// Prefix chat front ends put in front of link tokens
pub const LINK_COMMAND_PREFIX: &str = "/v_";

static LINK_TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"^(?:{})?([A-Za-z0-9_]+?)_(\d+)_(\d+)$",
        regex::escape(LINK_COMMAND_PREFIX)
    ))
    .unwrap()
});

/// BibleHub slug for a canonical book name
///
/// # Examples
///
/// ```
/// use quickbible::core::links::biblehub_slug;
///
/// assert_eq!(biblehub_slug("1 Corinthians"), "1_corinthians");
/// assert_eq!(biblehub_slug("Song of Solomon"), "songs");
/// ```
pub fn biblehub_slug(canonical_name: &str) -> String {
    let slug = canonical_name.to_lowercase();
    if slug == "song of solomon" {
        return "songs".to_string();
    }
    slug.replace(' ', "_")
}

/// BibleHub page URL for a verse
pub fn biblehub_url(base_url: &str, canonical_name: &str, chapter: u32, verse: u32) -> String {
    format!(
        "{}/{}/{}-{}.htm",
        base_url.trim_end_matches('/'),
        biblehub_slug(canonical_name),
        chapter,
        verse
    )
}

/// Numeric `BBCCCVVV` audio identifier
pub fn audio_id(book_id: usize, chapter: u32, verse: u32) -> String {
    format!("{book_id:02}{chapter:03}{verse:03}")
}

/// Audio stream URL covering `start_verse..=end_verse` of one chapter
pub fn audio_url(
    base_url: &str,
    book_id: usize,
    chapter: u32,
    start_verse: u32,
    end_verse: u32,
) -> String {
    format!(
        "{}/{}-{}",
        base_url.trim_end_matches('/'),
        audio_id(book_id, chapter, start_verse),
        audio_id(book_id, chapter, end_verse)
    )
}

/// Deep-link token for a canonical reference
pub fn link_token(canonical_name: &str, chapter: u32, verse: u32) -> String {
    format!("{}_{}_{}", canonical_name.replace(' ', "_"), chapter, verse)
}

/// Decompose a deep-link token, with or without the `/v_` prefix
///
/// The book part has underscores turned back into spaces; it is not
/// resolved against the corpus.
pub fn parse_link_token(token: &str) -> Option<VerseRef> {
    let caps = LINK_TOKEN_PATTERN.captures(token.trim())?;
    let book = caps[1].replace('_', " ");
    let chapter = caps[2].parse().ok()?;
    let verse = caps[3].parse().ok()?;
    Some(VerseRef::new(book, chapter, verse))
}
