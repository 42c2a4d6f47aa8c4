//! Closed catalog of supported tournament sizes.
//!
//! A size is looked up, never synthesized: every entry points at one of the
//! embedded schedules in [`super::patterns`], each checked for fairness when it
//! was added.

use std::fmt;

use serde::Serialize;

use super::patterns::{self, Pattern};
use crate::errors::TournamentError;

/// Distinguishes historical schedules that share a size with the current one.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementVersion {
    #[default]
    Current,
    Legacy1,
}

impl MovementVersion {
    /// Converts the stored integer discriminator.
    pub fn from_legacy_id(id: Option<u32>) -> Result<Self, TournamentError> {
        match id {
            None => Ok(MovementVersion::Current),
            Some(1) => Ok(MovementVersion::Legacy1),
            Some(other) => Err(TournamentError::UnknownVersion(other)),
        }
    }

    pub const fn legacy_id(self) -> Option<u32> {
        match self {
            MovementVersion::Current => None,
            MovementVersion::Legacy1 => Some(1),
        }
    }
}

impl fmt::Display for MovementVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MovementVersion::Current => f.write_str("current"),
            MovementVersion::Legacy1 => f.write_str("legacy 1"),
        }
    }
}

/// Boards per round and rounds to play, as chosen for a tournament size.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct BoardsPerRound {
    pub hands_per_round: u32,
    pub round_count: u32,
}

/// Translates a director's (pairs, total boards) choice into the catalog's
/// terms. `None` when no schedule exists for that combination.
pub fn boards_per_round_from_total(
    pair_count: u32,
    total_boards: u32,
) -> Option<BoardsPerRound> {
    let (hands_per_round, round_count) = match (pair_count, total_boards) {
        (12, 21) => (3, 6),
        (12, 18) => (3, 5),
        (12, 14) => (2, 6),
        (11, 14) => (2, 7),
        (11, 21) => (3, 7),
        (11, 16) => (2, 6),
        (11, 24) => (3, 6),
        (10, 24) => (3, 7),
        (10, 16) => (2, 7),
        (9, 18) => (2, 8),
        (9, 27) => (3, 8),
        (9, 14) => (2, 7),
        (9, 21) => (3, 7),
        (8, 16) => (2, 6),
        (8, 24) => (3, 6),
        (7, 14) => (2, 7),
        (7, 21) => (3, 7),
        (6, 15) => (3, 5),
        (6, 20) => (4, 5),
        (5, 20) => (4, 5),
        _ => return None,
    };
    Some(BoardsPerRound {
        hands_per_round,
        round_count,
    })
}

/// Identifies one movement: the size of the event plus the schedule version.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize)]
pub struct MovementKey {
    pub pair_count: u32,
    pub hands_per_round: u32,
    pub round_count: u32,
    pub version: MovementVersion,
}

impl MovementKey {
    pub const fn new(pair_count: u32, hands_per_round: u32, round_count: u32) -> Self {
        Self {
            pair_count,
            hands_per_round,
            round_count,
            version: MovementVersion::Current,
        }
    }

    pub const fn with_version(self, version: MovementVersion) -> Self {
        Self { version, ..self }
    }

    /// Key for a tournament described by its pair count and total boards.
    pub fn for_tournament(
        pair_count: u32,
        total_boards: u32,
        version: MovementVersion,
    ) -> Result<Self, TournamentError> {
        let bpr = boards_per_round_from_total(pair_count, total_boards).ok_or(
            TournamentError::Configuration {
                pair_count,
                hands_per_round: 0,
                round_count: 0,
                version,
            },
        )?;
        Ok(Self::new(pair_count, bpr.hands_per_round, bpr.round_count).with_version(version))
    }
}

struct CatalogEntry {
    key: MovementKey,
    pattern: Pattern,
}

const fn entry(
    pair_count: u32,
    hands_per_round: u32,
    round_count: u32,
    pattern: Pattern,
) -> CatalogEntry {
    CatalogEntry {
        key: MovementKey::new(pair_count, hands_per_round, round_count),
        pattern,
    }
}

const fn legacy(
    pair_count: u32,
    hands_per_round: u32,
    round_count: u32,
    pattern: Pattern,
) -> CatalogEntry {
    CatalogEntry {
        key: MovementKey::new(pair_count, hands_per_round, round_count)
            .with_version(MovementVersion::Legacy1),
        pattern,
    }
}

static CATALOG: &[CatalogEntry] = &[
    entry(5, 4, 5, patterns::FIVE_PAIRS_FIVE_ROUNDS),
    entry(6, 3, 5, patterns::SIX_PAIRS_FIVE_ROUNDS),
    entry(6, 4, 5, patterns::SIX_PAIRS_FIVE_ROUNDS),
    entry(7, 2, 7, patterns::SEVEN_PAIRS_SEVEN_ROUNDS),
    entry(7, 3, 7, patterns::SEVEN_PAIRS_SEVEN_ROUNDS),
    legacy(7, 2, 7, patterns::SEVEN_PAIRS_SEVEN_ROUNDS_LEGACY),
    entry(8, 2, 6, patterns::EIGHT_PAIRS_SIX_ROUNDS),
    entry(8, 3, 6, patterns::EIGHT_PAIRS_SIX_ROUNDS),
    entry(9, 2, 7, patterns::NINE_PAIRS_SEVEN_ROUNDS),
    entry(9, 3, 7, patterns::NINE_PAIRS_SEVEN_ROUNDS),
    entry(9, 2, 8, patterns::NINE_PAIRS_EIGHT_ROUNDS),
    entry(9, 3, 8, patterns::NINE_PAIRS_EIGHT_ROUNDS),
    entry(10, 2, 7, patterns::TEN_PAIRS_SEVEN_ROUNDS),
    entry(10, 3, 7, patterns::TEN_PAIRS_SEVEN_ROUNDS),
    legacy(10, 3, 7, patterns::TEN_PAIRS_SEVEN_ROUNDS_LEGACY),
    entry(11, 2, 6, patterns::ELEVEN_PAIRS_SIX_ROUNDS),
    entry(11, 3, 6, patterns::ELEVEN_PAIRS_SIX_ROUNDS),
    entry(11, 2, 7, patterns::ELEVEN_PAIRS_SEVEN_ROUNDS),
    entry(11, 3, 7, patterns::ELEVEN_PAIRS_SEVEN_ROUNDS),
    entry(12, 3, 5, patterns::TWELVE_PAIRS_FIVE_ROUNDS),
    entry(12, 2, 6, patterns::TWELVE_PAIRS_SIX_ROUNDS),
    entry(12, 3, 6, patterns::TWELVE_PAIRS_SIX_ROUNDS),
];

/// Every key the catalog can serve.
pub fn supported_keys() -> impl Iterator<Item = MovementKey> {
    CATALOG.iter().map(|e| e.key)
}

pub(super) fn lookup(key: &MovementKey) -> Result<Pattern, TournamentError> {
    CATALOG
        .iter()
        .find(|e| e.key == *key)
        .map(|e| e.pattern)
        .ok_or(TournamentError::Configuration {
            pair_count: key.pair_count,
            hands_per_round: key.hands_per_round,
            round_count: key.round_count,
            version: key.version,
        })
}
