//! Tournament-wide aggregation and the three rank orderings.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::board::Board;
use super::summary::{BoardScores, TeamSummary};
use crate::errors::TournamentError;

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum RankBy {
    /// Match points, ties broken by relative points.
    MatchPoints,
    /// Relative points, ties broken by match points.
    RelativePoints,
    /// Aggressiveness points, ties broken by match points.
    Aggressiveness,
}

fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

fn compare(a: &TeamSummary, b: &TeamSummary, rank_by: RankBy) -> Ordering {
    match rank_by {
        RankBy::MatchPoints => desc(a.mps, b.mps).then_with(|| desc(a.rps, b.rps)),
        RankBy::RelativePoints => desc(a.rps, b.rps).then_with(|| desc(a.mps, b.mps)),
        RankBy::Aggressiveness => desc(a.aps, b.aps).then_with(|| desc(a.mps, b.mps)),
    }
}

/// Stable sort, best first.
pub fn order_by(summaries: &mut [TeamSummary], rank_by: RankBy) {
    summaries.sort_by(|a, b| compare(a, b, rank_by));
}

/// Scores every board, totals each pair, normalises for sit-outs and
/// ranks the pairs three ways. The result is ordered by `mp_rank`.
///
/// Each ordering starts from ascending pair number, so pairs tied on both
/// keys keep that order.
pub fn calculate(
    boards: &[Board],
    num_rounds: usize,
) -> Result<Vec<TeamSummary>, TournamentError> {
    let mut summaries: BTreeMap<u32, TeamSummary> = BTreeMap::new();
    for board in boards {
        let board_no = board.board_no();
        for line in board.score_board() {
            let hr = &line.hand_result;
            let sides = [
                (
                    hr.ns_pair(),
                    BoardScores {
                        mps: line.ns_mps,
                        rps: line.ns_rps,
                        aps: line.ns_aps,
                    },
                ),
                (
                    hr.ew_pair(),
                    BoardScores {
                        mps: line.ew_mps,
                        rps: line.ew_rps,
                        aps: line.ew_aps,
                    },
                ),
            ];
            for (pair_no, scores) in sides {
                let summary = summaries
                    .entry(pair_no)
                    .or_insert_with(|| TeamSummary::new(pair_no));
                if !summary.record_board(board_no, scores) {
                    return Err(TournamentError::DuplicateResult { board_no, pair_no });
                }
            }
        }
    }

    let mut ranked: Vec<TeamSummary> = summaries.into_values().collect();
    for summary in &mut ranked {
        summary.update_sit_out_bonuses(num_rounds);
    }

    for rank_by in [RankBy::Aggressiveness, RankBy::RelativePoints, RankBy::MatchPoints] {
        ranked.sort_by_key(|ts| ts.team_no);
        order_by(&mut ranked, rank_by);
        for (i, summary) in ranked.iter_mut().enumerate() {
            let rank = i + 1;
            match rank_by {
                RankBy::MatchPoints => summary.mp_rank = rank,
                RankBy::RelativePoints => summary.rp_rank = rank,
                RankBy::Aggressiveness => summary.ap_rank = rank,
            }
        }
    }
    debug!(
        pairs = ranked.len(),
        boards = boards.len(),
        num_rounds,
        "calculated standings"
    );
    Ok(ranked)
}

/// Most boards any single pair has a result on.
pub fn max_rounds(boards: &[Board]) -> usize {
    let mut counts: HashMap<u32, usize> = HashMap::new();
    for hr in boards.iter().flat_map(|b| b.hand_results()) {
        *counts.entry(hr.ns_pair()).or_insert(0) += 1;
        *counts.entry(hr.ew_pair()).or_insert(0) += 1;
    }
    counts.into_values().max().unwrap_or(0)
}
