use crate::domain::board::{group_into_boards, Board};
use crate::domain::test_prelude::{assert_approx, avg, hand};
use crate::errors::TournamentError;

fn mixed_board() -> Board {
    Board::new(
        1,
        vec![
            hand(1, 1, 2, 400, 0, &[("N", "GT")]),
            hand(1, 3, 4, 160, 40, &[("N", "T")]),
            hand(1, 5, 6, 100, 0, &[]),
            hand(1, 7, 8, 70, -70, &[("E", "T")]),
            avg(1, 9, 10, "AVG", "AVG--"),
            avg(1, 11, 12, "AVG++", "AVG-"),
            avg(1, 13, 14, "AVG+", "AVG+"),
        ],
    )
    .unwrap()
}

#[test]
fn lines_are_sorted_by_ns_match_points() {
    let lines = mixed_board().score_board();
    assert_eq!(lines.len(), 7);
    for pair in lines.windows(2) {
        assert!(pair[0].ns_mps >= pair[1].ns_mps);
    }
    assert_eq!(lines[0].hand_result.ns_pair(), 1);
    assert_approx(lines[0].ns_mps, 4.5);
    assert_approx(lines[0].ew_mps, 1.5);
}

#[test]
fn averaged_lines_count_as_ties_for_real_results() {
    let lines = mixed_board().score_board();
    let line = lines
        .iter()
        .find(|l| l.hand_result.ns_pair() == 7)
        .unwrap();
    // Beats 5-6, loses to 1-2 and 3-4, ties with three averaged results.
    assert_approx(line.ns_mps, 3.5);
    assert_approx(line.ew_mps, 2.5);
    assert_approx(line.ns_rps, -3.9318);
    assert_approx(line.ew_rps, 3.9318);
    assert_approx(line.ew_aps, 3.0);
}

#[test]
fn averaged_lines_take_a_share_of_the_peaks() {
    let lines = mixed_board().score_board();
    let find = |ns_pair| {
        lines
            .iter()
            .find(|l| l.hand_result.ns_pair() == ns_pair)
            .unwrap()
    };

    let plus_plus = find(11);
    assert_approx(plus_plus.ns_mps, 4.5 * 0.8);
    assert_approx(plus_plus.ew_mps, 4.5 * 0.4);
    assert_approx(plus_plus.ns_rps, 3.2111);
    assert_approx(plus_plus.ew_rps, -1.0704);

    let plain = find(9);
    assert_approx(plain.ns_mps, 2.25);
    assert_approx(plain.ew_mps, 0.9);
    assert_approx(plain.ns_rps, 0.0);
    assert_approx(plain.ew_rps, -3.2111);
    assert_approx(plain.ns_aps, 0.0);
}

#[test]
fn aggressiveness_counts_calls_on_the_whole_board() {
    let board = Board::new(
        1,
        vec![
            hand(1, 1, 2, 400, 0, &[("N", "GT")]),
            hand(1, 3, 4, 150, 50, &[("N", "T")]),
            hand(1, 5, 6, 100, 0, &[]),
            hand(1, 7, 8, 70, -70, &[("E", "T")]),
        ],
    )
    .unwrap();
    let lines = board.score_board();
    let find = |ns_pair| {
        lines
            .iter()
            .find(|l| l.hand_result.ns_pair() == ns_pair)
            .unwrap()
    };
    assert_approx(find(1).ns_aps, 5.0);
    assert_approx(find(3).ns_aps, 2.0);
    assert_approx(find(5).ns_aps, 0.0);
    assert_approx(find(7).ew_aps, 3.0);
    assert_approx(find(7).ns_aps, 0.0);
}

#[test]
fn board_with_only_averages_scores_zero() {
    let board = Board::new(
        4,
        vec![avg(4, 1, 2, "AVG++", "AVG--"), avg(4, 3, 4, "AVG", "AVG")],
    )
    .unwrap();
    for line in board.score_board() {
        assert_eq!(line.ns_mps, 0.0);
        assert_eq!(line.ew_mps, 0.0);
        assert_eq!(line.ns_rps, 0.0);
        assert_eq!(line.ew_rps, 0.0);
    }
}

#[test]
fn single_result_board() {
    let board = Board::new(2, vec![hand(2, 1, 2, 60, 40, &[])]).unwrap();
    let lines = board.score_board();
    assert_eq!(lines.len(), 1);
    assert_approx(lines[0].ns_mps, 0.0);
    assert_approx(lines[0].ew_mps, 0.0);
    assert_approx(lines[0].ns_rps, 0.0);
}

#[test]
fn board_rejects_pair_seen_twice() {
    let err = Board::new(
        3,
        vec![hand(3, 1, 2, 60, 40, &[]), hand(3, 2, 5, 60, 40, &[])],
    )
    .unwrap_err();
    assert_eq!(
        err,
        TournamentError::DuplicateResult {
            board_no: 3,
            pair_no: 2,
        }
    );
}

#[test]
fn board_rejects_foreign_and_self_matches() {
    let err = Board::new(3, vec![hand(4, 1, 2, 60, 40, &[])]).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidBoard { board_no: 3, .. }));

    let err = Board::new(3, vec![hand(3, 6, 6, 60, 40, &[])]).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidBoard { board_no: 3, .. }));
}

#[test]
fn grouping_orders_boards_by_number() {
    let boards = group_into_boards(vec![
        hand(2, 1, 2, 60, 40, &[]),
        hand(1, 1, 2, 60, 40, &[]),
        hand(2, 3, 4, 100, 0, &[]),
    ])
    .unwrap();
    assert_eq!(boards.len(), 2);
    assert_eq!(boards[0].board_no(), 1);
    assert_eq!(boards[1].board_no(), 2);
    assert_eq!(boards[1].hand_results().len(), 2);

    let dup = group_into_boards(vec![hand(1, 1, 2, 60, 40, &[]), hand(1, 1, 3, 60, 40, &[])]);
    assert!(dup.is_err());
}
