//! Parsing of typed references
//!
//! Users type references as `Book Chapter:Verse` ("John 3:16",
//! "1 Corinthians 13:4", "song of solomon 2:1") or paste a deep-link
//! token ("1_Corinthians_13_4", "/v_John_3_16"). Chapter-only forms
//! ("Psalms 23") are accepted where a verse is optional.
//!
//! Book names are returned as typed; resolution against the corpus
//! happens in the query engine.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::error::{BibleError, Result};
use crate::core::links;
use crate::core::types::VerseRef;

static REFERENCE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d?\s?[A-Za-z][A-Za-z\s]*?)\s+(\d+)(?::(\d+))?$").unwrap()
});

/// A typed reference whose verse may be omitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedReference {
    pub book: String,
    pub chapter: u32,
    pub verse: Option<u32>,
}

impl ParsedReference {
    /// Require a verse number, as every single-verse command does
    pub fn into_verse_ref(self) -> Result<VerseRef> {
        match self.verse {
            Some(verse) => Ok(VerseRef::new(self.book, self.chapter, verse)),
            None => Err(BibleError::InvalidReference(format!(
                "'{} {}' has no verse; use the form 'Book Chapter:Verse'",
                self.book, self.chapter
            ))),
        }
    }
}

/// Parse `Book Chapter[:Verse]` or a deep-link token
pub fn parse_reference(input: &str) -> Result<ParsedReference> {
    let input = input.trim();

    if let Some(r) = links::parse_link_token(input) {
        return Ok(ParsedReference {
            book: r.book,
            chapter: r.chapter,
            verse: Some(r.verse),
        });
    }

    let caps = REFERENCE_PATTERN.captures(input).ok_or_else(|| {
        BibleError::InvalidReference(format!(
            "'{input}' is not a reference; use the form 'Book Chapter:Verse'"
        ))
    })?;

    let book = caps[1].split_whitespace().collect::<Vec<_>>().join(" ");
    let chapter = parse_number(&caps[2], input)?;
    let verse = caps
        .get(3)
        .map(|m| parse_number(m.as_str(), input))
        .transpose()?;

    Ok(ParsedReference {
        book,
        chapter,
        verse,
    })
}

/// Parse a reference that must name a single verse
pub fn parse_verse_reference(input: &str) -> Result<VerseRef> {
    parse_reference(input)?.into_verse_ref()
}

fn parse_number(digits: &str, input: &str) -> Result<u32> {
    digits
        .parse()
        .ok()
        .filter(|n| *n > 0)
        .ok_or_else(|| BibleError::InvalidReference(format!("'{input}' has an invalid number")))
}
