//! Reading submitted hands and rendering results for people and tools.

mod csv_out;
mod input;
mod movement;
mod results;
mod text;

use thiserror::Error;

use crate::errors::TournamentError;

pub use csv_out::write_csv;
pub use input::{parse_hands, read_hands, HandRecord};
pub use movement::{MovementReport, PairPlan};
pub use results::{PairStanding, ResultsReport, ScoredHand, SitOutBonus};
pub use text::TextReport;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed hand input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Tournament(#[from] TournamentError),
}
