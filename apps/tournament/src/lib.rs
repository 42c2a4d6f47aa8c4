#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Duplicate-pairs Tichu tournaments: movement schedules, score validation
//! and standings.

pub mod config;
pub mod domain;
pub mod errors;
pub mod movements;
pub mod report;
pub mod telemetry;

// Re-exports for public API
pub use domain::{
    calculate, group_into_boards, max_rounds, AvgKind, Board, BoardScoreLine, Call, Calls,
    HandResult, RankBy, ScoreValue, Seat, TeamSummary,
};
pub use errors::{ErrorCode, TournamentError};
pub use movements::{
    boards_per_round_from_total, Movement, MovementCache, MovementKey, MovementVersion, Round,
};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    tournament_test_support::logging::init();
}
