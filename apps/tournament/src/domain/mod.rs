//! Domain layer: score validation, board scoring and ranking.
//!
//! Everything here is pure: validated values in, plain data out.

pub mod board;
pub mod calls;
pub mod hand_result;
pub mod ranking;
pub mod score;
pub mod summary;

#[cfg(test)]
mod tests_board;
#[cfg(test)]
mod tests_calls;
#[cfg(test)]
mod tests_ranking;

// Re-exports for ergonomics
pub use board::{group_into_boards, Board, BoardScoreLine};
pub use calls::{Call, Calls, Seat, Side};
pub use hand_result::HandResult;
pub use ranking::{calculate, max_rounds, order_by, RankBy};
pub use score::{AvgKind, ScoreValue};
pub use summary::TeamSummary;
