//! Test support shared by the tournament crate's unit and integration tests:
//! one-time logging setup, float assertions and proptest configuration.

pub mod float;
pub mod logging;

use proptest::prelude::ProptestConfig;

/// Proptest configuration honouring `PROPTEST_CASES` (default 32).
pub fn proptest_config() -> ProptestConfig {
    let cases: u32 = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(32)
        .max(1);
    ProptestConfig {
        // Integration tests run without regression files
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}
