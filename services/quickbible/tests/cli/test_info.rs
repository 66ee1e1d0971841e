//! Tests for get-server-info, show-config and list-books CLI commands
//!
//! These are simple commands that display configuration and load information.

use crate::common::{create_empty_services, create_test_services};
use quickbible::cli::commands::books::{execute as execute_books, BooksArgs};
use quickbible::cli::commands::config::{execute as execute_config, ConfigArgs};
use quickbible::cli::commands::info::{execute as execute_info, InfoArgs};
use quickbible::cli::OutputFormat;

// =============================================================================
// get-server-info tests
// =============================================================================

/// Test getting server info (human format)
#[tokio::test]
async fn test_server_info_human() {
    let (services, _data) = create_test_services();

    let args = InfoArgs { detailed: false };
    let result = execute_info(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Get server info should succeed");
}

/// Test getting server info (JSON format)
#[tokio::test]
async fn test_server_info_json() {
    let (services, _data) = create_test_services();

    let args = InfoArgs { detailed: true };
    let result = execute_info(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Get server info (JSON) should succeed");
}

/// Test detailed info with nothing loaded
#[tokio::test]
async fn test_server_info_empty() {
    let (services, _data) = create_empty_services();

    let args = InfoArgs { detailed: true };
    let result = execute_info(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

// =============================================================================
// show-config tests
// =============================================================================

/// Test showing config (human format)
#[tokio::test]
async fn test_show_config_human() {
    let (services, _data) = create_test_services();

    let args = ConfigArgs { all: false };
    let result = execute_config(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "Show config should succeed");
}

/// Test showing config with directories (JSON format)
#[tokio::test]
async fn test_show_config_all_json() {
    let (services, _data) = create_test_services();

    let args = ConfigArgs { all: true };
    let result = execute_config(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "Show config (JSON) should succeed");
}

// =============================================================================
// list-books tests
// =============================================================================

#[tokio::test]
async fn test_list_books() {
    let (services, _data) = create_test_services();

    let args = BooksArgs { matching: None };
    let result = execute_books(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_books_matching_json() {
    let (services, _data) = create_test_services();

    let args = BooksArgs {
        matching: Some("cor".to_string()),
    };
    let result = execute_books(args, &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_list_books_empty_corpus() {
    let (services, _data) = create_empty_services();

    let args = BooksArgs { matching: None };
    let result = execute_books(args, &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}
