// Integration tests for search functionality

use crate::common::{load_test_bible, references};

#[test]
fn test_search_terms_any_order() {
    let (bible, _data) = load_test_bible();

    let results = bible.search("wept jesus");
    assert_eq!(references(&results), vec!["John 11:33", "John 11:35"]);
}

#[test]
fn test_quoted_phrase_is_subset_of_terms() {
    let (bible, _data) = load_test_bible();

    let phrase = bible.search("\"Jesus wept\"");
    let terms = bible.search("Jesus wept");

    assert_eq!(references(&phrase), vec!["John 11:35"]);
    assert!(phrase.iter().all(|v| terms.contains(v)));
    assert!(terms.len() > phrase.len());
}

#[test]
fn test_curly_quotes_select_phrase_mode() {
    let (bible, _data) = load_test_bible();

    let curly = bible.search("\u{201C}jesus wept\u{201D}");
    assert_eq!(references(&curly), vec!["John 11:35"]);
}

#[test]
fn test_search_is_case_insensitive_substring() {
    let (bible, _data) = load_test_bible();

    // "love" also matches "loved"
    let results = bible.search("LOVE");
    assert_eq!(
        references(&results),
        vec![
            "Song of Solomon 4:1",
            "John 3:16",
            "1 Corinthians 13:4",
            "1 Corinthians 13:13",
            "1 John 4:8"
        ]
    );
}

#[test]
fn test_search_results_in_corpus_order() {
    let (bible, _data) = load_test_bible();

    let results = bible.search("beginning");
    assert_eq!(
        references(&results),
        vec!["Genesis 1:1", "John 1:1", "John 1:2"]
    );
}

#[test]
fn test_empty_queries_return_nothing() {
    let (bible, _data) = load_test_bible();

    assert!(bible.search("").is_empty());
    assert!(bible.search("   ").is_empty());
    assert!(bible.search("\"\"").is_empty());
    assert!(bible.search("zerubbabel").is_empty());
}

#[test]
fn test_search_pages() {
    let (bible, _data) = load_test_bible();

    let first = bible.search_page("love", 1, 2);
    assert_eq!(first.total_results, 5);
    assert_eq!(first.total_pages, 3);
    assert_eq!(references(&first.verses), vec!["Song of Solomon 4:1", "John 3:16"]);
    assert!(first.has_next());
    assert!(!first.has_previous());

    let last = bible.search_page("love", 3, 2);
    assert_eq!(references(&last.verses), vec!["1 John 4:8"]);
    assert!(!last.has_next());
}

#[test]
fn test_search_page_out_of_range_is_clamped() {
    let (bible, _data) = load_test_bible();

    let page = bible.search_page("love", 99, 2);
    assert_eq!(page.page, 3);

    let page = bible.search_page("love", 0, 2);
    assert_eq!(page.page, 1);

    let empty = bible.search_page("zerubbabel", 1, 5);
    assert_eq!(empty.total_results, 0);
    assert_eq!(empty.total_pages, 1);
    assert!(empty.verses.is_empty());
}
