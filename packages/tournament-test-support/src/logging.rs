//! Test logging for the tournament crate.
//!
//! The library's unit tests install this through a `ctor` hook in `lib.rs`;
//! each integration test binary calls [`init`] from `tests/support`. Scoring
//! and movement events are emitted at `debug` (scored boards, built or
//! cached movements) and `warn` (rejected submissions, boards with only
//! averaged results), so `TEST_LOG=tournament=debug` shows a full scoring
//! trace while the default stays quiet.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "warn";

/// Installs the test subscriber once per process. Safe to call from every
/// test.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        // Another subscriber may already be global in this binary
        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}
