use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::ReportError;
use crate::domain::calls::CallsRecord;
use crate::domain::{Calls, HandResult, ScoreValue};
use crate::errors::TournamentError;

/// One submitted hand as it arrives on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandRecord {
    pub board_no: u32,
    pub ns_pair: u32,
    pub ew_pair: u32,
    pub ns_score: ScoreValue,
    pub ew_score: ScoreValue,
    #[serde(default)]
    pub calls: CallsRecord,
}

impl HandRecord {
    pub fn into_hand_result(self) -> Result<HandResult, TournamentError> {
        let calls = Calls::try_from(self.calls)?;
        HandResult::new(
            self.board_no,
            self.ns_pair,
            self.ew_pair,
            self.ns_score,
            self.ew_score,
            calls,
        )
    }
}

/// Parses a JSON array of hand records. Fails on the first invalid hand.
pub fn parse_hands(reader: impl Read) -> Result<Vec<HandResult>, ReportError> {
    let records: Vec<HandRecord> = serde_json::from_reader(reader)?;
    records
        .into_iter()
        .map(|record| record.into_hand_result().map_err(ReportError::from))
        .collect()
}

pub fn read_hands(path: &Path) -> Result<Vec<HandResult>, ReportError> {
    let file = File::open(path)?;
    parse_hands(BufReader::new(file))
}
