use serde::Serialize;

use crate::errors::TournamentError;
use crate::movements::{Movement, MovementKey, Round};

/// One pair's view of a movement.
#[derive(Debug, Serialize)]
pub struct PairPlan<'a> {
    pub pair_no: u32,
    pub rounds: &'a [Round],
    pub unplayed_boards: &'a [u32],
    pub suggested_prep: &'a [u32],
}

#[derive(Debug, Serialize)]
pub struct MovementReport<'a> {
    #[serde(flatten)]
    pub key: MovementKey,
    pub max_board: u32,
    pub pairs: Vec<PairPlan<'a>>,
}

impl<'a> MovementReport<'a> {
    /// All pairs, or only `pair_no` when given.
    pub fn new(movement: &'a Movement, pair_no: Option<u32>) -> Result<Self, TournamentError> {
        let pair_numbers: Vec<u32> = match pair_no {
            Some(p) => vec![p],
            None => (1..=movement.pair_count()).collect(),
        };
        let pairs = pair_numbers
            .into_iter()
            .map(|p| {
                Ok(PairPlan {
                    pair_no: p,
                    rounds: movement.pair_schedule(p)?,
                    unplayed_boards: movement.unplayed_boards(p),
                    suggested_prep: movement.suggested_prep(p),
                })
            })
            .collect::<Result<Vec<_>, TournamentError>>()?;
        Ok(Self {
            key: movement.key(),
            max_board: movement.max_board(),
            pairs,
        })
    }
}
