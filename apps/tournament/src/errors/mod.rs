//! Error handling for the tournament core.

pub mod domain;
pub mod error_code;

pub use domain::TournamentError;
pub use error_code::ErrorCode;
