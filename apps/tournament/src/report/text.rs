use std::fmt;

use super::results::ResultsReport;

/// Human-readable rendering of a [`ResultsReport`].
pub struct TextReport<'a>(pub &'a ResultsReport);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.0;
        for board_no in report.board_numbers() {
            writeln!(f, "Board no {board_no}")?;
            writeln!(
                f,
                "{:>7} {:>7}  {:<12} {:>8} {:>8} {:>7} {:>7} {:>7} {:>7}",
                "NS Pair", "EW Pair", "Calls", "NS Score", "EW Score", "NS MPs", "EW MPs",
                "NS RPs", "EW RPs"
            )?;
            for hand in report.board_hands(board_no) {
                writeln!(
                    f,
                    "{:>7} {:>7}  {:<12} {:>8} {:>8} {:>7.1} {:>7.1} {:>7.2} {:>7.2}",
                    hand.ns_pair,
                    hand.ew_pair,
                    hand.calls.to_string(),
                    hand.ns_score.to_string(),
                    hand.ew_score.to_string(),
                    hand.ns_mps,
                    hand.ew_mps,
                    hand.ns_rps,
                    hand.ew_rps
                )?;
            }
            writeln!(f)?;
        }

        writeln!(f, "Standings over {} rounds", report.num_rounds)?;
        writeln!(
            f,
            "{:>5} {:>5} {:>8} {:>8} {:>6} {:>8} {:>8}",
            "Place", "Pair", "MPs", "RPs", "APs", "RP Rank", "AP Rank"
        )?;
        for standing in &report.pair_summaries {
            writeln!(
                f,
                "{:>5} {:>5} {:>8.1} {:>8.2} {:>6.1} {:>8} {:>8}",
                standing.mp_rank,
                standing.pair_no,
                standing.mps,
                standing.rps,
                standing.aps,
                standing.rp_rank,
                standing.ap_rank
            )?;
        }

        for (standing, summary) in report.pair_summaries.iter().zip(&report.summaries) {
            writeln!(f)?;
            writeln!(
                f,
                "Place {}. Team {}: MPs {:.1} RPs {:.2}",
                standing.mp_rank, standing.pair_no, standing.mps, standing.rps
            )?;
            for (board_no, mps) in &summary.board_mps {
                let rps = summary.board_rps.get(board_no).copied().unwrap_or_default();
                writeln!(f, "{board_no:>14} {mps:>7.1} {rps:>7.2}")?;
            }
            if let Some(bonus) = standing.sit_out_bonus {
                writeln!(f, "{:>14} {:>7.1} {:>7.2}", "Sit-out Bonus", bonus.mps, bonus.rps)?;
            }
        }
        Ok(())
    }
}
