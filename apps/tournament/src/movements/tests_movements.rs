use std::collections::BTreeSet;
use std::sync::Arc;

use serde_json::json;

use crate::errors::{ErrorCode, TournamentError};
use crate::movements::{
    boards_per_round_from_total, supported_keys, BoardsPerRound, Movement, MovementCache,
    MovementKey, MovementVersion, Position,
};

fn five_pairs() -> Movement {
    Movement::build(MovementKey::new(5, 4, 5)).unwrap()
}

#[test]
fn five_pair_schedule_from_pair_one() {
    let movement = five_pairs();
    assert_eq!(movement.round_count(), 5);
    assert_eq!(movement.max_board(), 20);

    let rounds = movement.pair_schedule(1).unwrap();
    assert_eq!(rounds.len(), 5);
    assert!(rounds[0].is_sit_out());

    let second = rounds[1].table.as_ref().unwrap();
    assert_eq!(second.table_no, 2);
    assert_eq!(second.position, Position::North);
    assert_eq!(second.opponent, 2);
    assert_eq!(second.boards, vec![5, 6, 7, 8]);
    assert!(!second.relay);

    let third = rounds[2].table.as_ref().unwrap();
    assert_eq!(third.position, Position::East);
    assert_eq!(third.opponent, 5);
    assert_eq!(third.boards, vec![13, 14, 15, 16]);
    assert!(third.relay);
    assert_eq!(rounds[2].position_label().as_deref(), Some("2E"));
    assert!(rounds[2].plays_board(13));
    assert!(!rounds[2].plays_board(5));
    assert!(!rounds[0].plays_board(1));
}

#[test]
fn rounds_serialize_like_the_player_view() {
    let movement = five_pairs();
    let rounds = movement.pair_schedule(1).unwrap();
    assert_eq!(serde_json::to_value(&rounds[0]).unwrap(), json!({"round": 1}));
    assert_eq!(
        serde_json::to_value(&rounds[2]).unwrap(),
        json!({
            "round": 3,
            "position": "2E",
            "hands": [13, 14, 15, 16],
            "opponent": 5,
            "relay_table": true
        })
    );
}

#[test]
fn players_for_board_reads_north_side_once() {
    let movement = five_pairs();
    assert_eq!(movement.players_for_board(13), vec![(2, 4), (5, 1)]);
    assert_eq!(movement.players_for_board(1), vec![(3, 4), (5, 2)]);
    assert!(movement.players_for_board(21).is_empty());
}

#[test]
fn matchups_are_directional() {
    let movement = five_pairs();
    assert!(movement.is_valid_matchup(13, 5, 1));
    assert!(!movement.is_valid_matchup(13, 1, 5));
    assert!(!movement.is_valid_matchup(1, 5, 1));
    assert!(!movement.is_valid_matchup(13, 9, 1));
}

#[test]
fn unplayed_and_prep_for_five_pairs() {
    let movement = five_pairs();
    assert_eq!(movement.unplayed_boards(1), &[1, 2, 3, 4]);
    assert_eq!(movement.unplayed_boards(2), &[17, 18, 19, 20]);
    assert_eq!(movement.suggested_prep(4), &[5, 6, 7, 8]);
    assert!(movement.unplayed_boards(42).is_empty());
    assert!(movement.suggested_prep(0).is_empty());
}

#[test]
fn prep_spreads_boards_across_pairs() {
    let movement = Movement::build(MovementKey::new(7, 2, 7)).unwrap();
    assert_eq!(movement.unplayed_boards(1), &[1, 2]);
    let expected: [&[u32]; 7] = [
        &[1, 2],
        &[3, 4],
        &[7, 8],
        &[11, 12],
        &[5, 6],
        &[9, 10],
        &[13, 14],
    ];
    for (pair_no, boards) in (1..=7).zip(expected) {
        assert_eq!(movement.suggested_prep(pair_no), boards, "pair {pair_no}");
    }
}

#[test]
fn everyone_plays_every_board_in_six_pairs() {
    let movement = Movement::build(MovementKey::new(6, 3, 5)).unwrap();
    assert_eq!(movement.max_board(), 15);
    for pair_no in 1..=6 {
        assert!(movement.unplayed_boards(pair_no).is_empty());
        assert!(movement.suggested_prep(pair_no).is_empty());
    }
}

#[test]
fn unknown_pair_is_rejected() {
    let movement = five_pairs();
    for pair_no in [0, 6] {
        let err = movement.pair_schedule(pair_no).unwrap_err();
        assert_eq!(
            err,
            TournamentError::UnknownPair {
                pair_no,
                pair_count: 5,
            }
        );
        assert_eq!(err.code(), ErrorCode::UnknownPair);
    }
}

#[test]
fn missing_configuration_is_a_configuration_error() {
    let err = Movement::build(MovementKey::new(4, 4, 5)).unwrap_err();
    assert_eq!(err.code(), ErrorCode::ConfigurationError);

    let err = Movement::build(MovementKey::new(7, 3, 7).with_version(MovementVersion::Legacy1))
        .unwrap_err();
    assert!(matches!(
        err,
        TournamentError::Configuration {
            version: MovementVersion::Legacy1,
            ..
        }
    ));
}

#[test]
fn legacy_schedule_differs_from_current() {
    let current = Movement::build(MovementKey::new(7, 2, 7)).unwrap();
    let legacy =
        Movement::build(MovementKey::new(7, 2, 7).with_version(MovementVersion::Legacy1)).unwrap();
    assert_eq!(legacy.round_count(), current.round_count());
    let differs = (1..=7).any(|p| current.pair_schedule(p).ok() != legacy.pair_schedule(p).ok());
    assert!(differs);
}

#[test]
fn legacy_ids() {
    assert_eq!(
        MovementVersion::from_legacy_id(None),
        Ok(MovementVersion::Current)
    );
    assert_eq!(
        MovementVersion::from_legacy_id(Some(1)),
        Ok(MovementVersion::Legacy1)
    );
    assert_eq!(
        MovementVersion::from_legacy_id(Some(2)),
        Err(TournamentError::UnknownVersion(2))
    );
    assert_eq!(MovementVersion::Legacy1.legacy_id(), Some(1));
}

#[test]
fn cache_shares_one_instance_per_key() {
    let cache = MovementCache::new();
    assert!(cache.is_empty());
    let a = cache.create_movement(8, 2, 6, None).unwrap();
    let b = cache.create_movement(8, 2, 6, None).unwrap();
    assert!(Arc::ptr_eq(&a, &b));

    let c = cache.create_movement(8, 3, 6, None).unwrap();
    assert!(!Arc::ptr_eq(&a, &c));
    assert_eq!(cache.len(), 2);

    assert!(cache.create_movement(8, 2, 6, Some(3)).is_err());
    assert!(cache.create_movement(13, 2, 6, None).is_err());
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert!(cache.get(&MovementKey::new(8, 2, 6)).is_none());
}

#[test]
fn separate_caches_build_identical_movements() {
    let first = MovementCache::new().create_movement(10, 3, 7, None).unwrap();
    let second = MovementCache::default().create_movement(10, 3, 7, None).unwrap();
    assert_eq!(*first, *second);
}

#[test]
fn total_boards_lookup() {
    assert_eq!(
        boards_per_round_from_total(12, 21),
        Some(BoardsPerRound {
            hands_per_round: 3,
            round_count: 6,
        })
    );
    assert_eq!(boards_per_round_from_total(12, 20), None);
    assert_eq!(boards_per_round_from_total(4, 20), None);

    let key = MovementKey::for_tournament(9, 27, MovementVersion::Current).unwrap();
    assert_eq!(key, MovementKey::new(9, 3, 8));
    assert!(MovementKey::for_tournament(9, 26, MovementVersion::Current).is_err());
}

#[test]
fn every_total_board_choice_has_a_schedule() {
    let keys: BTreeSet<(u32, u32, u32)> = supported_keys()
        .map(|k| (k.pair_count, k.hands_per_round, k.round_count))
        .collect();
    for pair_count in 1..=16 {
        for total in 1..=40 {
            let Some(bpr) = boards_per_round_from_total(pair_count, total) else {
                continue;
            };
            assert!(
                keys.contains(&(pair_count, bpr.hands_per_round, bpr.round_count)),
                "{pair_count} pairs / {total} boards"
            );
            let key = MovementKey::new(pair_count, bpr.hands_per_round, bpr.round_count);
            let movement = Movement::build(key).unwrap();
            assert_eq!(movement.max_board(), total);
        }
    }
}
