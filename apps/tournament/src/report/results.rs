use serde::Serialize;

use crate::domain::{calculate, Board, BoardScoreLine, Calls, ScoreValue, TeamSummary};
use crate::errors::TournamentError;

/// Share of a pair's totals that came from sit-out normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SitOutBonus {
    pub mps: f64,
    pub rps: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PairStanding {
    pub pair_no: u32,
    pub mps: f64,
    pub rps: f64,
    pub aps: f64,
    pub mp_rank: usize,
    pub rp_rank: usize,
    pub ap_rank: usize,
    pub boards_played: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sit_out_bonus: Option<SitOutBonus>,
}

/// A submitted hand together with the scores both sides earned on it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredHand {
    pub board_no: u32,
    pub ns_pair: u32,
    pub ew_pair: u32,
    pub ns_score: ScoreValue,
    pub ew_score: ScoreValue,
    pub calls: Calls,
    pub ns_mps: f64,
    pub ew_mps: f64,
    pub ns_rps: f64,
    pub ew_rps: f64,
    pub ns_aps: f64,
    pub ew_aps: f64,
}

impl From<BoardScoreLine> for ScoredHand {
    fn from(line: BoardScoreLine) -> Self {
        let hr = &line.hand_result;
        Self {
            board_no: hr.board_no(),
            ns_pair: hr.ns_pair(),
            ew_pair: hr.ew_pair(),
            ns_score: hr.ns_score(),
            ew_score: hr.ew_score(),
            calls: *hr.calls(),
            ns_mps: line.ns_mps,
            ew_mps: line.ew_mps,
            ns_rps: line.ns_rps,
            ew_rps: line.ew_rps,
            ns_aps: line.ns_aps,
            ew_aps: line.ew_aps,
        }
    }
}

/// Full results of a scoring run.
///
/// `hands` are grouped by board number and, within a board, ordered best
/// NS match points first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultsReport {
    pub num_rounds: usize,
    pub pair_summaries: Vec<PairStanding>,
    pub hands: Vec<ScoredHand>,
    #[serde(skip)]
    pub summaries: Vec<TeamSummary>,
}

impl ResultsReport {
    pub fn build(boards: &[Board], num_rounds: usize) -> Result<Self, TournamentError> {
        let summaries = calculate(boards, num_rounds)?;
        let pair_summaries = summaries
            .iter()
            .map(|ts| PairStanding {
                pair_no: ts.team_no,
                mps: ts.mps,
                rps: ts.rps,
                aps: ts.aps,
                mp_rank: ts.mp_rank,
                rp_rank: ts.rp_rank,
                ap_rank: ts.ap_rank,
                boards_played: ts.boards_played(),
                sit_out_bonus: ts
                    .sit_out_bonus(num_rounds)
                    .map(|(mps, rps)| SitOutBonus { mps, rps }),
            })
            .collect();

        let mut sorted: Vec<&Board> = boards.iter().collect();
        sorted.sort_by_key(|b| b.board_no());
        let hands = sorted
            .into_iter()
            .flat_map(|b| b.score_board())
            .map(ScoredHand::from)
            .collect();

        Ok(Self {
            num_rounds,
            pair_summaries,
            hands,
            summaries,
        })
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Hands of one board, in score order.
    pub fn board_hands(&self, board_no: u32) -> impl Iterator<Item = &ScoredHand> {
        self.hands.iter().filter(move |h| h.board_no == board_no)
    }

    /// Board numbers in ascending order.
    pub fn board_numbers(&self) -> Vec<u32> {
        let mut numbers: Vec<u32> = self.hands.iter().map(|h| h.board_no).collect();
        numbers.dedup();
        numbers
    }
}
