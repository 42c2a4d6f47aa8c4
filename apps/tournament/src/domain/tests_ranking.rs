use crate::domain::board::Board;
use crate::domain::ranking::{calculate, max_rounds, order_by, RankBy};
use crate::domain::summary::{BoardScores, TeamSummary};
use crate::domain::test_prelude::{assert_approx, avg, hand};

fn two_board_event() -> Vec<Board> {
    vec![
        Board::new(
            1,
            vec![
                hand(1, 1, 2, 400, 0, &[("N", "GT")]),
                hand(1, 3, 4, 150, 50, &[("N", "T")]),
                hand(1, 5, 6, 100, 0, &[]),
                hand(1, 7, 8, 70, -70, &[("E", "T")]),
            ],
        )
        .unwrap(),
        Board::new(
            2,
            vec![
                hand(2, 1, 3, 400, 0, &[("N", "GT")]),
                hand(2, 2, 7, 120, 80, &[("N", "T")]),
                hand(2, 4, 8, 300, 0, &[("N", "T")]),
                hand(2, 6, 5, 0, 300, &[("E", "T")]),
            ],
        )
        .unwrap(),
    ]
}

fn by_team(summaries: &[TeamSummary], team_no: u32) -> &TeamSummary {
    summaries.iter().find(|s| s.team_no == team_no).unwrap()
}

#[test]
fn totals_and_match_point_order() {
    let summaries = calculate(&two_board_event(), 2).unwrap();
    let order: Vec<u32> = summaries.iter().map(|s| s.team_no).collect();
    assert_eq!(order, vec![1, 4, 7, 5, 6, 8, 2, 3]);

    let expected = [
        (1, 6.0, 11.0486, 9.0),
        (4, 4.5, 9.7066, 1.0),
        (7, 4.0, 0.434, 0.0),
        (5, 3.5, 1.5642, 3.0),
        (6, 2.5, -1.5642, 0.0),
        (8, 2.0, -1.4236, 3.0),
        (2, 1.0, -9.638, 1.0),
        (3, 0.5, -10.1277, 2.0),
    ];
    for (summary, (team_no, mps, rps, aps)) in summaries.iter().zip(expected) {
        assert_eq!(summary.team_no, team_no);
        assert_approx(summary.mps, mps);
        assert_approx(summary.rps, rps);
        assert_approx(summary.aps, aps);
    }
    for (i, summary) in summaries.iter().enumerate() {
        assert_eq!(summary.mp_rank, i + 1);
    }
}

#[test]
fn relative_and_aggressiveness_ranks_are_independent() {
    let summaries = calculate(&two_board_event(), 2).unwrap();
    let ranks: Vec<(u32, usize, usize)> = [1, 4, 7, 5, 6, 8, 2, 3]
        .into_iter()
        .map(|t| {
            let s = by_team(&summaries, t);
            (t, s.rp_rank, s.ap_rank)
        })
        .collect();
    assert_eq!(
        ranks,
        vec![
            (1, 1, 1),
            (4, 2, 5),
            (7, 4, 7),
            (5, 3, 2),
            (6, 6, 8),
            (8, 5, 3),
            (2, 7, 6),
            (3, 8, 4),
        ]
    );
}

#[test]
fn averaged_results_flow_into_totals() {
    let board = Board::new(
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
    .unwrap();
    let summaries = calculate(&[board], 1).unwrap();
    let order: Vec<u32> = summaries.iter().map(|s| s.team_no).collect();
    assert_eq!(order, vec![1, 6, 11, 4, 7, 13, 14, 8, 3, 9, 12, 5, 2, 10]);

    assert_approx(by_team(&summaries, 11).mps, 3.6);
    assert_approx(by_team(&summaries, 10).mps, 0.9);
    assert_approx(by_team(&summaries, 10).rps, -3.2111);
    assert_approx(by_team(&summaries, 13).rps, 1.0704);
    assert_eq!(by_team(&summaries, 13).rp_rank, 6);
    assert_eq!(by_team(&summaries, 14).rp_rank, 7);
    assert_eq!(by_team(&summaries, 8).ap_rank, 2);
}

#[test]
fn tied_match_points_break_on_relative_points() {
    let board = Board::new(
        6,
        vec![
            hand(6, 11, 4, 70, -170, &[("W", "GT")]),
            hand(6, 6, 9, 180, 20, &[("N", "T")]),
            avg(6, 5, 10, "AVG", "AVG"),
            hand(6, 1, 3, 15, 85, &[]),
            hand(6, 8, 7, -35, 235, &[("S", "T"), ("E", "GT")]),
        ],
    )
    .unwrap();
    let summaries = calculate(&[board], 1).unwrap();
    let order: Vec<u32> = summaries.iter().map(|s| s.team_no).collect();
    assert_eq!(order, vec![7, 11, 6, 3, 5, 10, 1, 9, 4, 8]);
    assert_approx(by_team(&summaries, 7).rps, 5.656);
    assert_approx(by_team(&summaries, 5).mps, 1.75);
    assert_approx(by_team(&summaries, 4).aps, 4.0);
    assert_eq!(by_team(&summaries, 4).ap_rank, 2);
}

#[test]
fn sit_out_pairs_are_scaled_to_full_rounds() {
    let summaries = calculate(&two_board_event(), 3).unwrap();
    let top = by_team(&summaries, 1);
    assert_approx(top.mps, 9.0);
    assert_approx(top.rps, 16.5729);
    assert_approx(top.aps, 13.5);
    assert_eq!(top.boards_played(), 2);
    let (mp_bonus, rp_bonus) = top.sit_out_bonus(3).unwrap();
    assert_approx(mp_bonus, 3.0);
    assert_approx(rp_bonus, 16.5729 / 3.0);

    // Per-board breakdown is not scaled.
    assert_approx(top.board_mps[&1], 3.0);
    assert!(top.sit_out_bonus(2).is_none());
}

#[test]
fn calculate_does_not_modify_boards() {
    let boards = two_board_event();
    let before = boards.clone();
    let first = calculate(&boards, 2).unwrap();
    let second = calculate(&boards, 2).unwrap();
    assert_eq!(boards, before);
    assert_eq!(first, second);
}

#[test]
fn empty_event_has_no_standings() {
    assert!(calculate(&[], 7).unwrap().is_empty());
    assert_eq!(max_rounds(&[]), 0);
}

#[test]
fn max_rounds_counts_boards_per_pair() {
    let mut boards = two_board_event();
    boards.push(Board::new(3, vec![hand(3, 1, 5, 60, 40, &[])]).unwrap());
    assert_eq!(max_rounds(&boards), 3);
}

#[test]
fn summary_refuses_the_same_board_twice() {
    let mut summary = TeamSummary::new(4);
    let scores = BoardScores {
        mps: 1.0,
        rps: 0.5,
        aps: 0.0,
    };
    assert!(summary.record_board(1, scores));
    assert!(!summary.record_board(1, scores));
    assert_approx(summary.mps, 1.0);
    assert_eq!(summary.boards_played(), 1);
}

#[test]
fn order_by_is_stable_for_full_ties() {
    let mut summaries: Vec<TeamSummary> = (1..=3).map(TeamSummary::new).collect();
    summaries[2].aps = 2.0;
    order_by(&mut summaries, RankBy::Aggressiveness);
    let order: Vec<u32> = summaries.iter().map(|s| s.team_no).collect();
    assert_eq!(order, vec![3, 1, 2]);
}
