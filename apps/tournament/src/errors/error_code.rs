//! Error codes exposed to callers of the tournament core.
//!
//! All error codes are SCREAMING_SNAKE_CASE and are the strings an outer
//! HTTP layer is expected to echo back in its problem responses.

use core::fmt;

/// Centralized error codes for tournament failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Movement lookup
    /// No catalog entry for the requested size configuration
    ConfigurationError,
    /// Stored legacy discriminator has no known meaning
    UnknownMovementVersion,
    /// Pair number outside the movement
    UnknownPair,

    // Score submission
    /// Seat call outside the call vocabulary
    InvalidCall,
    /// No out-order reconciles the claimed scores and calls
    InvalidScore,

    // Scoring input integrity
    /// Board built from inconsistent hand results
    InvalidBoard,
    /// The same pair scored twice on one board
    DuplicateResult,
}

impl ErrorCode {
    /// Returns the canonical SCREAMING_SNAKE_CASE string for this error code.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::ConfigurationError => "CONFIGURATION_ERROR",
            Self::UnknownMovementVersion => "UNKNOWN_MOVEMENT_VERSION",
            Self::UnknownPair => "UNKNOWN_PAIR",
            Self::InvalidCall => "INVALID_CALL",
            Self::InvalidScore => "INVALID_SCORE",
            Self::InvalidBoard => "INVALID_BOARD",
            Self::DuplicateResult => "DUPLICATE_RESULT",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
