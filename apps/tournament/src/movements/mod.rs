//! Movement engine: the catalog of supported schedules, the per-pair view of
//! a schedule and the memo that shares built movements.

pub mod cache;
pub mod catalog;
mod patterns;
pub mod schedule;

#[cfg(test)]
mod tests_movements;

pub use cache::MovementCache;
pub use catalog::{
    boards_per_round_from_total, supported_keys, BoardsPerRound, MovementKey, MovementVersion,
};
pub use schedule::{Movement, Position, Round, TableAssignment};
