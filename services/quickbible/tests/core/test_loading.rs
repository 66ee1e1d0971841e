// Integration tests for corpus and cross-reference loading

use crate::common::{assert_stats, load_test_bible, TestData, BIBLE_XML, CROSS_REFERENCES_TSV};
use quickbible::core::bible::BibleService;
use quickbible::core::corpus::load_corpus;
use quickbible::core::crossref::load_cross_references;

#[test]
fn test_corpus_loads_in_canonical_order() {
    let (bible, _data) = load_test_bible();

    assert_eq!(
        bible.books(),
        &[
            "Genesis",
            "Song of Solomon",
            "John",
            "1 Corinthians",
            "2 Corinthians",
            "1 John"
        ]
    );
    assert_eq!(bible.verses().len(), 18);
    assert_eq!(bible.verses()[0].to_string(), "Genesis 1:1");
    assert_eq!(bible.verses()[17].to_string(), "1 John 4:8");
}

#[test]
fn test_corpus_load_stats_count_malformed_entries() {
    let data = TestData::standard();
    let (corpus, stats) = load_corpus(&data.bible_path).unwrap();

    assert_eq!(corpus.len(), 18);
    assert_stats(&stats, 18, 1);
}

#[test]
fn test_chapters_numbered_by_position() {
    let (bible, _data) = load_test_bible();

    let v = bible.get_verse("Song of Solomon", 4, 1).unwrap();
    assert_eq!(v.text, "Behold, you are beautiful, my love.");
    assert!(bible.get_verse("Song of Solomon", 1, 1).is_none());

    let v = bible.get_verse("John", 11, 35).unwrap();
    assert_eq!(v.text, "Jesus wept.");
}

#[test]
fn test_xml_entities_are_unescaped() {
    let (bible, _data) = load_test_bible();
    let v = bible.get_verse("Genesis", 1, 3).unwrap();
    assert_eq!(v.text, "God said, \"Let there be light,\" and there was light.");
}

#[test]
fn test_cross_reference_load_stats() {
    let data = TestData::standard();
    let (index, stats) = load_cross_references(&data.cross_references_path).unwrap();

    // Header, unknown book and unparseable votes are skipped
    assert_stats(&stats, 8, 3);
    assert_eq!(index.len(), 3);
    assert_eq!(index.edges(), 8);
}

#[test]
fn test_info_reports_both_sources() {
    let (bible, _data) = load_test_bible();
    let info = bible.info();

    assert_eq!(info.books, 6);
    assert_eq!(info.verses, 18);
    assert_eq!(info.cross_reference_sources, 3);
    assert_eq!(info.cross_reference_edges, 8);
    assert_stats(&info.corpus_stats, 18, 1);
    assert_stats(&info.cross_reference_stats, 8, 3);
}

#[test]
fn test_missing_cross_references_still_serves_verses() {
    let data = TestData::with_contents(Some(BIBLE_XML), None);
    let bible = BibleService::from_config(&data.config());

    assert!(!bible.is_empty());
    assert!(bible.get_verse("John", 3, 16).is_some());
    assert!(bible.cross_references("John", 3, 16).is_empty());
}

#[test]
fn test_missing_corpus_still_loads_cross_references() {
    let data = TestData::with_contents(None, Some(CROSS_REFERENCES_TSV));
    let bible = BibleService::from_config(&data.config());

    assert!(bible.is_empty());
    assert!(bible.books().is_empty());
    // Cross references are keyed by canonical name, not by the corpus
    assert_eq!(bible.info().cross_reference_edges, 8);
}

#[test]
fn test_malformed_corpus_degrades_to_empty() {
    let data = TestData::with_contents(Some("<library><shelf/></library>"), None);
    assert!(load_corpus(&data.bible_path).is_err());

    let bible = BibleService::from_config(&data.config());
    assert!(bible.is_empty());
    assert_eq!(bible.random_verse().book, "Error");
}

#[test]
fn test_unclosed_xml_is_an_error() {
    let data = TestData::with_contents(Some("<bible><book><h>Jude</h><c><v>1 Jude"), None);
    // Either a parse error or an empty document, never a panic
    match load_corpus(&data.bible_path) {
        Ok((corpus, _)) => assert!(corpus.is_empty()),
        Err(e) => assert!(!e.is_bad_request()),
    }
}
