// Test helper functions

use super::fixtures::TestData;
use quickbible::core::bible::BibleService;
use quickbible::core::services::Services;
use quickbible::core::types::{LoadStats, Verse};
use std::sync::Arc;

/// Load the standard fixtures into services
///
/// The returned `TestData` owns the temp directory; keep it alive for
/// the duration of the test.
#[allow(dead_code)] // Used in integration tests
pub fn create_test_services() -> (Arc<Services>, TestData) {
    let data = TestData::standard();
    let services = Arc::new(Services::new(data.config()));
    (services, data)
}

/// Load the standard fixtures into a bare query engine
#[allow(dead_code)] // Used in integration tests
pub fn load_test_bible() -> (BibleService, TestData) {
    let data = TestData::standard();
    let bible = BibleService::from_config(&data.config());
    (bible, data)
}

/// Services over a data directory with no corpus and no cross references
#[allow(dead_code)] // Used in integration tests
pub fn create_empty_services() -> (Arc<Services>, TestData) {
    let data = TestData::with_contents(None, None);
    let services = Arc::new(Services::new(data.config()));
    (services, data)
}

/// References of a verse list, for compact assertions
#[allow(dead_code)] // Used in integration tests
pub fn references(verses: &[&Verse]) -> Vec<String> {
    verses.iter().map(|v| v.to_string()).collect()
}

/// Assert that load stats add up
#[allow(dead_code)] // Used in integration tests
pub fn assert_stats(stats: &LoadStats, accepted: usize, skipped: usize) {
    assert_eq!(
        stats.accepted, accepted,
        "Expected {accepted} accepted records, got {}",
        stats.accepted
    );
    assert_eq!(
        stats.skipped, skipped,
        "Expected {skipped} skipped records, got {}",
        stats.skipped
    );
}
