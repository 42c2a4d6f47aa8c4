use std::io::Write;

use super::results::ResultsReport;
use super::ReportError;

const BOARD_NO: &str = "Board No";
const SIT_OUT_BONUS: &str = "Sit-out Bonus";

/// Writes per-board score lines followed by a per-pair breakdown.
///
/// Sections have different widths, so the writer is flexible.
pub fn write_csv<W: Write>(report: &ResultsReport, writer: W) -> Result<(), ReportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer);

    csv_writer.write_record([
        BOARD_NO, "NS Team", "EW Team", "Calls", "NS Score", "EW Score", "NS MPs", "EW MPs",
        "NS RPs", "EW RPs", "NS APs", "EW APs",
    ])?;
    for board_no in report.board_numbers() {
        csv_writer.write_record([format!("Board {board_no}")])?;
        for hand in report.board_hands(board_no) {
            csv_writer.write_record([
                String::new(),
                hand.ns_pair.to_string(),
                hand.ew_pair.to_string(),
                hand.calls.to_string(),
                hand.ns_score.to_string(),
                hand.ew_score.to_string(),
                format!("{:.1}", hand.ns_mps),
                format!("{:.1}", hand.ew_mps),
                format!("{:.2}", hand.ns_rps),
                format!("{:.2}", hand.ew_rps),
                hand.ns_aps.to_string(),
                hand.ew_aps.to_string(),
            ])?;
        }
    }

    csv_writer.write_record([""])?;
    csv_writer.write_record([BOARD_NO, "MPs", "RPs", "APs"])?;
    for (standing, summary) in report.pair_summaries.iter().zip(&report.summaries) {
        csv_writer.write_record([format!(
            "Place {}. Team {}: MPs {:.1} RPs {:.2}",
            standing.mp_rank, standing.pair_no, standing.mps, standing.rps
        )])?;
        for (board_no, mps) in &summary.board_mps {
            let rps = summary.board_rps.get(board_no).copied().unwrap_or_default();
            let aps = summary.board_aps.get(board_no).copied().unwrap_or_default();
            csv_writer.write_record([
                board_no.to_string(),
                format!("{mps:.1}"),
                format!("{rps:.2}"),
                aps.to_string(),
            ])?;
        }
        if let Some(bonus) = standing.sit_out_bonus {
            csv_writer.write_record([
                SIT_OUT_BONUS.to_string(),
                format!("{:.1}", bonus.mps),
                format!("{:.2}", bonus.rps),
            ])?;
        }
    }
    csv_writer.flush()?;
    Ok(())
}
