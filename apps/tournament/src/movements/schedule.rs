//! A realized movement: every pair's rounds plus the derived preparation
//! hints.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use tracing::debug;

use super::catalog::{self, MovementKey};
use super::patterns::Pattern;
use crate::errors::TournamentError;

/// Seat a pair takes at its table.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub enum Position {
    North,
    East,
}

impl Position {
    pub const fn letter(self) -> &'static str {
        match self {
            Position::North => "N",
            Position::East => "E",
        }
    }
}

/// Where a pair plays in a round it is not sitting out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableAssignment {
    pub table_no: u32,
    pub position: Position,
    pub opponent: u32,
    pub boards: Vec<u32>,
    /// The boards are shared with another table this round.
    pub relay: bool,
}

impl TableAssignment {
    /// Table and seat as shown to players, e.g. `3N`.
    pub fn position_label(&self) -> String {
        format!("{}{}", self.table_no, self.position.letter())
    }
}

/// One round seen from a single pair. `table` is `None` for a sit-out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Round {
    pub round_no: u32,
    pub table: Option<TableAssignment>,
}

impl Round {
    pub fn is_sit_out(&self) -> bool {
        self.table.is_none()
    }

    pub fn position_label(&self) -> Option<String> {
        self.table.as_ref().map(TableAssignment::position_label)
    }

    pub fn plays_board(&self, board_no: u32) -> bool {
        self.table
            .as_ref()
            .is_some_and(|t| t.boards.contains(&board_no))
    }
}

impl Serialize for Round {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some(table) = &self.table else {
            let mut map = serializer.serialize_map(Some(1))?;
            map.serialize_entry("round", &self.round_no)?;
            return map.end();
        };
        let mut map = serializer.serialize_map(Some(5))?;
        map.serialize_entry("round", &self.round_no)?;
        map.serialize_entry("position", &table.position_label())?;
        map.serialize_entry("hands", &table.boards)?;
        map.serialize_entry("opponent", &table.opponent)?;
        map.serialize_entry("relay_table", &table.relay)?;
        map.end()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Movement {
    key: MovementKey,
    rounds: BTreeMap<u32, Vec<Round>>,
    max_board: u32,
    unplayed: BTreeMap<u32, Vec<u32>>,
    prep: BTreeMap<u32, Vec<u32>>,
}

impl Movement {
    /// Builds the movement registered for `key`.
    pub fn build(key: MovementKey) -> Result<Self, TournamentError> {
        let pattern = catalog::lookup(&key)?;
        let movement = Self::from_pattern(key, pattern);
        debug!(
            pair_count = key.pair_count,
            hands_per_round = key.hands_per_round,
            round_count = key.round_count,
            version = %key.version,
            max_board = movement.max_board,
            "built movement"
        );
        Ok(movement)
    }

    fn from_pattern(key: MovementKey, pattern: Pattern) -> Self {
        let hands = key.hands_per_round;
        let mut rounds: BTreeMap<u32, Vec<Round>> = (1..=key.pair_count)
            .map(|pair_no| (pair_no, Vec::with_capacity(pattern.len())))
            .collect();

        for (round_no, tables) in (1u32..).zip(pattern.iter()) {
            for pair_rounds in rounds.values_mut() {
                pair_rounds.push(Round {
                    round_no,
                    table: None,
                });
            }
            for (table_no, &(ns_pair, ew_pair, set)) in (1u32..).zip(tables.iter()) {
                let relay = tables.iter().filter(|&&(_, _, s)| s == set).count() > 1;
                let boards: Vec<u32> = ((set - 1) * hands + 1..=set * hands).collect();
                for (pair_no, position, opponent) in [
                    (ns_pair, Position::North, ew_pair),
                    (ew_pair, Position::East, ns_pair),
                ] {
                    if let Some(round) = rounds.get_mut(&pair_no).and_then(|r| r.last_mut()) {
                        round.table = Some(TableAssignment {
                            table_no,
                            position,
                            opponent,
                            boards: boards.clone(),
                            relay,
                        });
                    }
                }
            }
        }

        let mut movement = Self {
            key,
            rounds,
            max_board: 0,
            unplayed: BTreeMap::new(),
            prep: BTreeMap::new(),
        };
        movement.compute_unplayed();
        movement.compute_prep();
        movement
    }

    fn compute_unplayed(&mut self) {
        let played: BTreeMap<u32, BTreeSet<u32>> = self
            .rounds
            .iter()
            .map(|(&pair_no, rounds)| {
                let boards = rounds
                    .iter()
                    .filter_map(|r| r.table.as_ref())
                    .flat_map(|t| t.boards.iter().copied())
                    .collect();
                (pair_no, boards)
            })
            .collect();
        self.max_board = played
            .values()
            .filter_map(|boards| boards.last().copied())
            .max()
            .unwrap_or(0);
        for (pair_no, boards) in played {
            if boards.is_empty() {
                continue;
            }
            let missing: Vec<u32> = (1..=self.max_board)
                .filter(|b| !boards.contains(b))
                .collect();
            if !missing.is_empty() {
                self.unplayed.insert(pair_no, missing);
            }
        }
    }

    /// Round-robin over the pairs: in pass `i` each pair claims the first
    /// board from position `i` on of its unplayed list that nobody holds yet.
    fn compute_prep(&mut self) {
        let passes = self.unplayed.values().map(Vec::len).max().unwrap_or(0);
        let mut claimed = HashSet::new();
        for i in 0..passes {
            for pair_no in 1..=self.key.pair_count {
                let Some(unplayed) = self.unplayed.get(&pair_no) else {
                    continue;
                };
                if let Some(&board) = unplayed.iter().skip(i).find(|b| !claimed.contains(*b)) {
                    claimed.insert(board);
                    self.prep.entry(pair_no).or_default().push(board);
                }
            }
        }
    }

    pub fn key(&self) -> MovementKey {
        self.key
    }

    pub fn pair_count(&self) -> u32 {
        self.key.pair_count
    }

    pub fn round_count(&self) -> usize {
        self.rounds.get(&1).map_or(0, Vec::len)
    }

    /// Highest board number anyone plays.
    pub fn max_board(&self) -> u32 {
        self.max_board
    }

    /// The rounds of `pair_no`, in round order.
    pub fn pair_schedule(&self, pair_no: u32) -> Result<&[Round], TournamentError> {
        self.rounds
            .get(&pair_no)
            .map(Vec::as_slice)
            .ok_or(TournamentError::UnknownPair {
                pair_no,
                pair_count: self.key.pair_count,
            })
    }

    /// Every pair with its rounds, by ascending pair number.
    pub fn schedules(&self) -> impl Iterator<Item = (u32, &[Round])> {
        self.rounds.iter().map(|(&p, r)| (p, r.as_slice()))
    }

    /// `(ns_pair, ew_pair)` for every table that plays `board_no`, read from
    /// the North side of each table.
    pub fn players_for_board(&self, board_no: u32) -> Vec<(u32, u32)> {
        self.rounds
            .iter()
            .flat_map(|(&pair_no, rounds)| {
                rounds
                    .iter()
                    .filter_map(|r| r.table.as_ref())
                    .filter(move |t| {
                        t.position == Position::North && t.boards.contains(&board_no)
                    })
                    .map(move |t| (pair_no, t.opponent))
            })
            .collect()
    }

    /// Whether `ns_pair` hosts `ew_pair` on `board_no` in this movement.
    pub fn is_valid_matchup(&self, board_no: u32, ns_pair: u32, ew_pair: u32) -> bool {
        self.rounds.get(&ns_pair).is_some_and(|rounds| {
            rounds
                .iter()
                .filter(|r| r.plays_board(board_no))
                .filter_map(|r| r.table.as_ref())
                .any(|t| t.position == Position::North && t.opponent == ew_pair)
        })
    }

    /// Boards in `1..=max_board` that `pair_no` never plays.
    pub fn unplayed_boards(&self, pair_no: u32) -> &[u32] {
        self.unplayed
            .get(&pair_no)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Boards `pair_no` is asked to prepare for the event.
    pub fn suggested_prep(&self, pair_no: u32) -> &[u32] {
        self.prep.get(&pair_no).map(Vec::as_slice).unwrap_or(&[])
    }
}
