//! Error type shared by the movement engine and the scoring calculator.
//!
//! The type is HTTP-agnostic. An outer layer maps each variant to a 4xx
//! response using [`TournamentError::code`].

use thiserror::Error;

use super::error_code::ErrorCode;
use crate::domain::calls::Seat;
use crate::movements::catalog::MovementVersion;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TournamentError {
    #[error(
        "no movement available for {pair_count} pairs with {hands_per_round} hands per round \
         over {round_count} rounds ({version})"
    )]
    Configuration {
        pair_count: u32,
        hands_per_round: u32,
        round_count: u32,
        version: MovementVersion,
    },

    #[error("unknown movement version id {0}")]
    UnknownVersion(u32),

    #[error("pair {pair_no} is not part of a {pair_count} pair movement")]
    UnknownPair { pair_no: u32, pair_count: u32 },

    #[error("invalid call value {call:?} from {seat}")]
    InvalidCall { call: String, seat: Seat },

    #[error("invalid score: for board no: {board_no}, pairs: {ns_pair} and {ew_pair}")]
    InvalidScore {
        board_no: u32,
        ns_pair: u32,
        ew_pair: u32,
    },

    #[error("invalid board {board_no}: {detail}")]
    InvalidBoard { board_no: u32, detail: String },

    #[error("pair {pair_no} has more than one result for board {board_no}")]
    DuplicateResult { board_no: u32, pair_no: u32 },
}

impl TournamentError {
    pub fn invalid_board(board_no: u32, detail: impl Into<String>) -> Self {
        Self::InvalidBoard {
            board_no,
            detail: detail.into(),
        }
    }

    /// Stable code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            TournamentError::Configuration { .. } => ErrorCode::ConfigurationError,
            TournamentError::UnknownVersion(_) => ErrorCode::UnknownMovementVersion,
            TournamentError::UnknownPair { .. } => ErrorCode::UnknownPair,
            TournamentError::InvalidCall { .. } => ErrorCode::InvalidCall,
            TournamentError::InvalidScore { .. } => ErrorCode::InvalidScore,
            TournamentError::InvalidBoard { .. } => ErrorCode::InvalidBoard,
            TournamentError::DuplicateResult { .. } => ErrorCode::DuplicateResult,
        }
    }

    /// Whether the failure was caused by caller input (maps to a 4xx).
    pub fn is_client_error(&self) -> bool {
        match self {
            TournamentError::Configuration { .. }
            | TournamentError::UnknownVersion(_)
            | TournamentError::UnknownPair { .. }
            | TournamentError::InvalidCall { .. }
            | TournamentError::InvalidScore { .. }
            | TournamentError::InvalidBoard { .. }
            | TournamentError::DuplicateResult { .. } => true,
        }
    }
}
