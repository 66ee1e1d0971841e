//! Tests for the cross-references and audio CLI commands

use crate::common::{create_empty_services, create_test_services};
use quickbible::cli::commands::audio::{execute as execute_audio, AudioArgs};
use quickbible::cli::commands::references::{execute, ReferencesArgs};
use quickbible::cli::commands::verse::VerseArgs;
use quickbible::cli::OutputFormat;

fn args(reference: &str, limit: Option<usize>) -> ReferencesArgs {
    ReferencesArgs {
        verse: VerseArgs {
            reference: vec![reference.to_string()],
        },
        limit,
    }
}

fn audio(reference: &str) -> AudioArgs {
    AudioArgs {
        reference: vec![reference.to_string()],
    }
}

// =============================================================================
// cross-references tests
// =============================================================================

#[tokio::test]
async fn test_cross_references_human() {
    let (services, _data) = create_test_services();

    let result = execute(args("John 3:16", None), &services, OutputFormat::Human).await;
    assert!(result.is_ok(), "cross-references should succeed: {result:?}");
}

#[tokio::test]
async fn test_cross_references_limited_json() {
    let (services, _data) = create_test_services();

    let result = execute(args("Genesis 1:1", Some(1)), &services, OutputFormat::Json).await;
    assert!(result.is_ok());
}

/// A verse without cross references is not an error
#[tokio::test]
async fn test_cross_references_none() {
    let (services, _data) = create_test_services();

    let result = execute(args("John 1:3", None), &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_cross_references_unknown_verse() {
    let (services, _data) = create_test_services();

    let result = execute(args("Jude 1:1", None), &services, OutputFormat::Human).await;
    assert!(result.is_err());
}

// =============================================================================
// audio tests
// =============================================================================

#[tokio::test]
async fn test_audio_whole_chapter() {
    let (services, _data) = create_test_services();

    let result = execute_audio(audio("John 11"), &services, OutputFormat::Json).await;
    assert!(result.is_ok(), "audio should succeed: {result:?}");
}

#[tokio::test]
async fn test_audio_from_verse() {
    let (services, _data) = create_test_services();

    let result = execute_audio(audio("John 3:16"), &services, OutputFormat::Human).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_audio_unknown_book() {
    let (services, _data) = create_test_services();

    let err = execute_audio(audio("Tobit 1"), &services, OutputFormat::Human)
        .await
        .expect_err("unknown book should fail");
    assert!(err.to_string().contains("Book 'Tobit' not found"));
}

#[tokio::test]
async fn test_audio_missing_chapter() {
    let (services, _data) = create_test_services();

    let err = execute_audio(audio("John 2"), &services, OutputFormat::Human)
        .await
        .expect_err("empty chapter should fail");
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_audio_start_past_chapter_end() {
    let (services, _data) = create_test_services();

    let err = execute_audio(audio("John 3:99"), &services, OutputFormat::Human)
        .await
        .expect_err("start past the chapter's end should fail");
    assert!(err.to_string().contains("not found"));
}

#[tokio::test]
async fn test_audio_empty_corpus() {
    let (services, _data) = create_empty_services();

    let result = execute_audio(audio("John 3"), &services, OutputFormat::Human).await;
    assert!(result.is_err());
}
