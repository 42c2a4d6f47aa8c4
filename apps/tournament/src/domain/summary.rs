//! Per-pair totals across all boards of a tournament.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub team_no: u32,
    pub mps: f64,
    pub rps: f64,
    pub aps: f64,
    pub board_mps: BTreeMap<u32, f64>,
    pub board_rps: BTreeMap<u32, f64>,
    pub board_aps: BTreeMap<u32, f64>,
    pub mp_rank: usize,
    pub rp_rank: usize,
    pub ap_rank: usize,
}

/// Scores one pair earned on one board.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct BoardScores {
    pub mps: f64,
    pub rps: f64,
    pub aps: f64,
}

impl TeamSummary {
    pub fn new(team_no: u32) -> Self {
        Self {
            team_no,
            mps: 0.0,
            rps: 0.0,
            aps: 0.0,
            board_mps: BTreeMap::new(),
            board_rps: BTreeMap::new(),
            board_aps: BTreeMap::new(),
            mp_rank: 0,
            rp_rank: 0,
            ap_rank: 0,
        }
    }

    /// Adds one board's scores. Returns false, leaving the summary
    /// untouched, if the board was already recorded for this pair.
    pub fn record_board(&mut self, board_no: u32, scores: BoardScores) -> bool {
        if self.board_mps.contains_key(&board_no) {
            return false;
        }
        self.mps += scores.mps;
        self.rps += scores.rps;
        self.aps += scores.aps;
        self.board_mps.insert(board_no, scores.mps);
        self.board_rps.insert(board_no, scores.rps);
        self.board_aps.insert(board_no, scores.aps);
        true
    }

    pub fn boards_played(&self) -> usize {
        self.board_mps.len()
    }

    /// Scales totals up for a pair that played fewer than `num_rounds`
    /// boards, so sitting out is not penalised.
    pub fn update_sit_out_bonuses(&mut self, num_rounds: usize) {
        let played = self.boards_played();
        if played == 0 || played >= num_rounds {
            return;
        }
        let factor = num_rounds as f64 / played as f64;
        self.mps *= factor;
        self.rps *= factor;
        self.aps *= factor;
    }

    /// The (mps, rps) added by [`Self::update_sit_out_bonuses`], if any.
    ///
    /// Only meaningful after normalisation has been applied.
    pub fn sit_out_bonus(&self, num_rounds: usize) -> Option<(f64, f64)> {
        let played = self.boards_played();
        if played == 0 || played >= num_rounds {
            return None;
        }
        let share = played as f64 / num_rounds as f64;
        Some((self.mps - self.mps * share, self.rps - self.rps * share))
    }
}
