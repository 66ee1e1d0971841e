//! Tests for the search CLI command

use crate::common::{create_test_services, TestData};
use quickbible::cli::commands::search::{execute, SearchArgs};
use quickbible::cli::OutputFormat;
use quickbible::core::services::Services;
use std::sync::Arc;

fn args(query: &str, page: usize, page_size: Option<usize>) -> SearchArgs {
    SearchArgs {
        query: query.split(' ').map(str::to_string).collect(),
        page,
        page_size,
    }
}

/// Test keyword search (human format)
#[tokio::test]
async fn test_search_human() {
    let (services, _data) = create_test_services();

    let result = execute(args("love", 1, None), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "search should succeed: {result:?}");
}

/// Test phrase search (JSON format)
#[tokio::test]
async fn test_search_phrase_json() {
    let (services, _data) = create_test_services();

    let result = execute(
        args("\"Jesus wept\"", 1, None),
        &services,
        OutputFormat::Json,
    )
    .await;
    assert!(result.is_ok(), "phrase search should succeed: {result:?}");
}

/// Test a later page with an explicit page size
#[tokio::test]
async fn test_search_pagination() {
    let (services, _data) = create_test_services();

    let result = execute(args("love", 2, Some(2)), &services, OutputFormat::Human).await;
    assert!(result.is_ok());

    // Past the end is clamped, not an error
    let result = execute(args("love", 50, Some(2)), &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// No matches is a normal outcome
#[tokio::test]
async fn test_search_no_results() {
    let (services, _data) = create_test_services();

    let result = execute(args("zerubbabel", 1, None), &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

/// An empty phrase has nothing to search for
#[tokio::test]
async fn test_search_empty_phrase_rejected() {
    let (services, _data) = create_test_services();

    let result = execute(args("\"\"", 1, None), &services, OutputFormat::Human).await;
    let err = result.expect_err("empty phrase should be rejected");
    assert!(err.to_string().contains("Invalid query"));
}

/// Queries longer than search.max_query_length are rejected
#[tokio::test]
async fn test_search_query_too_long() {
    let data = TestData::standard();
    let mut config = data.config();
    config.search.max_query_length = 10;
    let services = Arc::new(Services::new(config));

    let result = execute(
        args("for god so loved the world", 1, None),
        &services,
        OutputFormat::Human,
    )
    .await;
    let err = result.expect_err("long query should be rejected");
    assert!(err.to_string().contains("longer than 10"));

    let result = execute(args("loved", 1, None), &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}
