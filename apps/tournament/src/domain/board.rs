//! Per-board scoring: match points, relative points and aggressiveness
//! points for every result on one board.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use serde::Serialize;
use tracing::{debug, warn};

use super::calls::{Call, Side};
use super::hand_result::HandResult;
use crate::errors::TournamentError;

/// Scores awarded to both sides of one hand result.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BoardScoreLine {
    pub hand_result: HandResult,
    pub ns_mps: f64,
    pub ew_mps: f64,
    pub ns_rps: f64,
    pub ew_rps: f64,
    pub ns_aps: f64,
    pub ew_aps: f64,
}

/// All results submitted for one board number.
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    board_no: u32,
    hand_results: Vec<HandResult>,
}

impl Board {
    /// Every result must carry `board_no` and no pair may appear twice.
    pub fn new(board_no: u32, hand_results: Vec<HandResult>) -> Result<Self, TournamentError> {
        let mut pairs = HashSet::new();
        for hr in &hand_results {
            if hr.board_no() != board_no {
                return Err(TournamentError::invalid_board(
                    board_no,
                    format!("result for board {} submitted to this board", hr.board_no()),
                ));
            }
            if hr.ns_pair() == hr.ew_pair() {
                return Err(TournamentError::invalid_board(
                    board_no,
                    format!("pair {} cannot play against itself", hr.ns_pair()),
                ));
            }
            for pair_no in [hr.ns_pair(), hr.ew_pair()] {
                if !pairs.insert(pair_no) {
                    return Err(TournamentError::DuplicateResult { board_no, pair_no });
                }
            }
        }
        Ok(Self {
            board_no,
            hand_results,
        })
    }

    pub fn board_no(&self) -> u32 {
        self.board_no
    }

    pub fn hand_results(&self) -> &[HandResult] {
        &self.hand_results
    }

    /// Scores every result, best NS match points first.
    ///
    /// Averaged results do not take part in the comparison; they receive a
    /// fixed share of the best score achieved by a real result instead.
    pub fn score_board(&self) -> Vec<BoardScoreLine> {
        let played: Vec<(&HandResult, i32)> = self
            .hand_results
            .iter()
            .filter_map(|hr| hr.diff().map(|diff| (hr, diff)))
            .collect();
        let num_played = played.len();
        if num_played == 0 && !self.hand_results.is_empty() {
            warn!(board_no = self.board_no, "board has only averaged results");
        }

        let avg_diff = if num_played == 0 {
            0.0
        } else {
            played.iter().map(|(_, diff)| f64::from(*diff)).sum::<f64>() / num_played as f64
        };
        let ns_counts = CallCounts::tally(&self.hand_results, Side::NorthSouth);
        let ew_counts = CallCounts::tally(&self.hand_results, Side::EastWest);

        let mut lines: Vec<BoardScoreLine> = played
            .iter()
            .map(|&(hr, diff)| {
                let ns_total: f64 = self
                    .hand_results
                    .iter()
                    .map(|other| mp_comparison(diff, other.diff()))
                    .sum();
                let ew_total: f64 = self
                    .hand_results
                    .iter()
                    .map(|other| 1.0 - mp_comparison(diff, other.diff()))
                    .sum();
                let margin = f64::from(diff) - avg_diff;
                BoardScoreLine {
                    hand_result: hr.clone(),
                    ns_mps: ns_total - 0.5,
                    ew_mps: ew_total - 0.5,
                    ns_rps: log_rps(margin),
                    ew_rps: log_rps(-margin),
                    ns_aps: ns_counts.aggressiveness(hr, num_played),
                    ew_aps: ew_counts.aggressiveness(hr, num_played),
                }
            })
            .collect();

        let peak_rps = lines
            .iter()
            .flat_map(|l| [l.ns_rps, l.ew_rps])
            .reduce(f64::max)
            .unwrap_or(0.0);
        let peak_ns_mps = lines.iter().map(|l| l.ns_mps).fold(0.0, f64::max);
        let peak_ew_mps = lines.iter().map(|l| l.ew_mps).fold(0.0, f64::max);

        for hr in &self.hand_results {
            let Some((ns_kind, ew_kind)) = hr.adjusted() else {
                continue;
            };
            lines.push(BoardScoreLine {
                hand_result: hr.clone(),
                ns_mps: peak_ns_mps * ns_kind.mps_fraction(),
                ew_mps: peak_ew_mps * ew_kind.mps_fraction(),
                ns_rps: peak_rps * ns_kind.rps_fraction(),
                ew_rps: peak_rps * ew_kind.rps_fraction(),
                ns_aps: 0.0,
                ew_aps: 0.0,
            });
        }

        lines.sort_by(|a, b| b.ns_mps.partial_cmp(&a.ns_mps).unwrap_or(Ordering::Equal));
        debug!(
            board_no = self.board_no,
            played = num_played,
            averaged = self.hand_results.len() - num_played,
            "scored board"
        );
        lines
    }
}

/// Groups validated results into boards, ordered by board number.
pub fn group_into_boards(
    hand_results: impl IntoIterator<Item = HandResult>,
) -> Result<Vec<Board>, TournamentError> {
    let mut by_board: BTreeMap<u32, Vec<HandResult>> = BTreeMap::new();
    for hr in hand_results {
        by_board.entry(hr.board_no()).or_default().push(hr);
    }
    by_board
        .into_iter()
        .map(|(board_no, results)| Board::new(board_no, results))
        .collect()
}

/// 1 for a win, 0.5 for a tie, 0 for a loss. Averaged results count as ties.
fn mp_comparison(current: i32, other: Option<i32>) -> f64 {
    match other {
        None => 0.5,
        Some(other) if current < other => 0.0,
        Some(other) if current == other => 0.5,
        Some(_) => 1.0,
    }
}

/// Diminishing-returns transform of a margin, symmetric around zero.
fn log_rps(margin: f64) -> f64 {
    if margin > 0.0 {
        margin.ln_1p()
    } else {
        -(-margin).ln_1p()
    }
}

/// Board-wide count of results where one side called Tichu or Grand Tichu.
struct CallCounts {
    side: Side,
    grand_tichus: usize,
    tichus: usize,
}

impl CallCounts {
    fn tally(results: &[HandResult], side: Side) -> Self {
        let count = |call| {
            results
                .iter()
                .filter(|hr| hr.calls().side_called(side, call))
                .count()
        };
        Self {
            side,
            grand_tichus: count(Call::GrandTichu),
            tichus: count(Call::Tichu),
        }
    }

    /// Rewards a bold call by how many other results on the board did not
    /// make the same call.
    fn aggressiveness(&self, hr: &HandResult, num_played: usize) -> f64 {
        let n = num_played as f64;
        let gt = self.grand_tichus as f64;
        let t = self.tichus as f64;
        if hr.calls().side_called(self.side, Call::GrandTichu) {
            (n - gt) * 2.0 - t
        } else if hr.calls().side_called(self.side, Call::Tichu) {
            n - gt - t
        } else {
            0.0
        }
    }
}
