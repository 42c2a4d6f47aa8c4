//! Embedded schedules.
//!
//! Each round lists its tables in table order as `(ns_pair, ew_pair, board_set)`.
//! Pairs missing from a round sit out. Board set `k` holds the `k`-th run of
//! `hands_per_round` consecutive boards.
//!
//! Where the table slots (tables times rounds) do not divide evenly by the
//! number of sets, some sets are played at one more table than others. The
//! affected schedules say so on their constant.

pub(super) type Pattern = &'static [&'static [(u32, u32, u32)]];

/// 5 pairs, 5 rounds, 5 board sets.
pub(super) const FIVE_PAIRS_FIVE_ROUNDS: Pattern = &[
    &[(2, 3, 3), (4, 5, 5)],
    &[(3, 4, 1), (1, 2, 2)],
    &[(2, 4, 4), (5, 1, 4)],
    &[(3, 5, 2), (1, 4, 3)],
    &[(5, 2, 1), (1, 3, 5)],
];

/// 6 pairs, 5 rounds, 5 board sets.
pub(super) const SIX_PAIRS_FIVE_ROUNDS: Pattern = &[
    &[(2, 4, 3), (3, 5, 4), (1, 6, 5)],
    &[(2, 3, 2), (5, 1, 3), (4, 6, 4)],
    &[(1, 3, 1), (4, 5, 1), (6, 2, 1)],
    &[(5, 6, 2), (1, 2, 4), (3, 4, 5)],
    &[(4, 1, 2), (6, 3, 3), (2, 5, 5)],
];

/// 7 pairs, 7 rounds, 7 board sets.
pub(super) const SEVEN_PAIRS_SEVEN_ROUNDS: Pattern = &[
    &[(3, 4, 2), (1, 2, 3), (5, 7, 5)],
    &[(2, 7, 1), (4, 6, 3), (3, 5, 7)],
    &[(2, 5, 4), (6, 7, 6), (1, 4, 7)],
    &[(4, 5, 1), (6, 1, 4), (2, 3, 6)],
    &[(3, 6, 1), (7, 1, 2), (4, 2, 5)],
    &[(7, 3, 3), (5, 1, 6), (6, 2, 7)],
    &[(5, 6, 2), (7, 4, 4), (1, 3, 5)],
];

/// 7 pairs, 7 rounds, 7 board sets.
pub(super) const SEVEN_PAIRS_SEVEN_ROUNDS_LEGACY: Pattern = &[
    &[(4, 5, 4), (1, 6, 5), (2, 7, 6)],
    &[(7, 1, 1), (2, 4, 2), (3, 6, 3)],
    &[(4, 7, 3), (3, 2, 5), (5, 6, 6)],
    &[(1, 3, 2), (5, 7, 5), (6, 2, 7)],
    &[(2, 5, 1), (7, 3, 4), (1, 4, 7)],
    &[(6, 7, 2), (5, 1, 3), (3, 4, 6)],
    &[(4, 6, 1), (1, 2, 4), (3, 5, 7)],
];

/// 8 pairs, 6 rounds, 8 board sets.
pub(super) const EIGHT_PAIRS_SIX_ROUNDS: Pattern = &[
    &[(1, 4, 2), (6, 8, 5), (3, 7, 7), (2, 5, 8)],
    &[(1, 2, 1), (3, 6, 3), (4, 7, 4), (5, 8, 6)],
    &[(8, 4, 1), (5, 3, 2), (2, 6, 7), (7, 1, 8)],
    &[(4, 5, 3), (2, 3, 5), (6, 7, 6), (8, 1, 7)],
    &[(7, 5, 1), (8, 2, 2), (1, 6, 4), (3, 4, 6)],
    &[(7, 2, 3), (3, 8, 4), (5, 1, 5), (4, 6, 8)],
];

/// 9 pairs, 7 rounds, 7 board sets.
pub(super) const NINE_PAIRS_SEVEN_ROUNDS: Pattern = &[
    &[(7, 8, 3), (1, 6, 4), (2, 9, 5), (3, 4, 6)],
    &[(4, 9, 1), (1, 7, 2), (5, 3, 3), (6, 8, 7)],
    &[(3, 1, 1), (8, 5, 2), (2, 4, 3), (9, 7, 7)],
    &[(9, 1, 3), (4, 8, 4), (6, 3, 5), (5, 2, 6)],
    &[(2, 3, 2), (5, 9, 4), (8, 1, 5), (7, 6, 6)],
    &[(8, 2, 1), (6, 9, 2), (3, 7, 4), (4, 5, 7)],
    &[(5, 6, 1), (7, 4, 5), (9, 8, 6), (1, 2, 7)],
];

/// 9 pairs, 8 rounds, 9 board sets.
///
/// 32 table slots over 9 sets: sets 1, 3, 4 and 5 are played at 3 tables,
/// the rest at 4.
pub(super) const NINE_PAIRS_EIGHT_ROUNDS: Pattern = &[
    &[(2, 4, 1), (8, 9, 5), (1, 3, 7), (5, 6, 8)],
    &[(7, 5, 2), (9, 2, 3), (3, 6, 6), (4, 8, 9)],
    &[(1, 4, 3), (6, 9, 4), (7, 8, 7), (3, 5, 9)],
    &[(9, 3, 2), (6, 7, 5), (4, 5, 6), (2, 1, 8)],
    &[(8, 1, 2), (2, 3, 4), (4, 6, 7), (7, 9, 9)],
    &[(5, 9, 1), (6, 2, 2), (1, 7, 4), (3, 8, 8)],
    &[(5, 8, 3), (3, 4, 5), (2, 7, 6), (1, 6, 9)],
    &[(8, 6, 1), (9, 1, 6), (5, 2, 7), (4, 7, 8)],
];

/// 10 pairs, 7 rounds, 8 board sets.
///
/// 35 table slots over 8 sets: sets 1 to 5 are played at 4 tables, sets 6
/// to 8 at 5.
pub(super) const TEN_PAIRS_SEVEN_ROUNDS: Pattern = &[
    &[(4, 7, 1), (2, 3, 3), (8, 9, 5), (5, 6, 6), (1, 10, 8)],
    &[(10, 5, 2), (9, 1, 4), (3, 7, 6), (6, 2, 7), (4, 8, 8)],
    &[(1, 2, 2), (9, 4, 3), (3, 10, 5), (5, 8, 7), (7, 6, 8)],
    &[(1, 5, 1), (6, 8, 2), (7, 10, 4), (2, 4, 6), (3, 9, 7)],
    &[(8, 10, 1), (7, 9, 2), (6, 1, 3), (4, 3, 4), (2, 5, 5)],
    &[(3, 6, 1), (5, 7, 3), (8, 1, 6), (10, 4, 7), (9, 2, 8)],
    &[(2, 8, 4), (4, 6, 5), (10, 9, 6), (1, 7, 7), (5, 3, 8)],
];

/// 10 pairs, 7 rounds, 7 board sets.
pub(super) const TEN_PAIRS_SEVEN_ROUNDS_LEGACY: Pattern = &[
    &[(1, 7, 1), (2, 10, 1), (3, 9, 2), (4, 6, 3), (5, 8, 7)],
    &[(8, 4, 1), (9, 5, 1), (10, 1, 2), (6, 2, 5), (7, 3, 7)],
    &[(7, 8, 2), (2, 5, 4), (4, 10, 5), (1, 3, 6), (6, 9, 6)],
    &[(2, 7, 3), (9, 1, 3), (3, 8, 5), (5, 4, 6), (10, 6, 7)],
    &[(5, 6, 2), (3, 4, 4), (8, 1, 4), (7, 10, 6), (9, 2, 7)],
    &[(6, 3, 1), (4, 2, 2), (8, 10, 3), (1, 5, 5), (7, 9, 5)],
    &[(3, 5, 3), (6, 7, 4), (10, 9, 4), (2, 8, 6), (1, 4, 7)],
];

/// 11 pairs, 6 rounds, 8 board sets.
///
/// 30 table slots over 8 sets: sets 1 and 5 are played at 3 tables, the
/// rest at 4.
pub(super) const ELEVEN_PAIRS_SIX_ROUNDS: Pattern = &[
    &[(2, 6, 2), (3, 8, 3), (1, 5, 6), (7, 11, 7), (4, 10, 8)],
    &[(2, 4, 1), (5, 7, 2), (6, 3, 4), (10, 1, 5), (9, 11, 8)],
    &[(4, 7, 3), (3, 2, 5), (11, 6, 6), (1, 9, 7), (8, 5, 8)],
    &[(6, 10, 1), (11, 1, 3), (5, 4, 4), (7, 9, 6), (8, 2, 7)],
    &[(1, 4, 2), (9, 2, 4), (8, 11, 5), (10, 3, 6), (6, 7, 8)],
    &[(3, 11, 1), (9, 10, 2), (2, 5, 3), (1, 8, 4), (4, 6, 7)],
];

/// 11 pairs, 7 rounds, 7 board sets.
pub(super) const ELEVEN_PAIRS_SEVEN_ROUNDS: Pattern = &[
    &[(4, 9, 1), (10, 11, 2), (5, 7, 3), (2, 3, 5), (1, 8, 6)],
    &[(8, 10, 3), (11, 5, 4), (6, 1, 5), (9, 2, 6), (3, 7, 7)],
    &[(3, 5, 1), (7, 9, 2), (6, 10, 4), (8, 11, 5), (1, 4, 7)],
    &[(11, 6, 1), (2, 1, 2), (9, 3, 4), (4, 10, 6), (5, 8, 7)],
    &[(7, 8, 1), (4, 5, 2), (2, 6, 3), (3, 11, 6), (10, 9, 7)],
    &[(10, 2, 1), (6, 8, 2), (11, 4, 3), (1, 7, 4), (5, 9, 5)],
    &[(1, 3, 3), (8, 4, 4), (7, 10, 5), (5, 6, 6), (2, 11, 7)],
];

/// 12 pairs, 5 rounds, 6 board sets.
pub(super) const TWELVE_PAIRS_FIVE_ROUNDS: Pattern = &[
    &[(8, 10, 1), (1, 9, 2), (6, 12, 3), (4, 7, 4), (3, 5, 5), (2, 11, 6)],
    &[(12, 2, 1), (3, 6, 2), (9, 4, 3), (5, 10, 4), (7, 11, 5), (1, 8, 6)],
    &[(7, 1, 1), (10, 4, 2), (11, 5, 3), (8, 12, 4), (2, 6, 5), (9, 3, 6)],
    &[(5, 6, 1), (2, 8, 2), (1, 3, 3), (11, 9, 4), (4, 12, 5), (10, 7, 6)],
    &[(3, 11, 1), (12, 7, 2), (10, 2, 3), (6, 1, 4), (8, 9, 5), (4, 5, 6)],
];

/// 12 pairs, 6 rounds, 7 board sets.
///
/// 36 table slots over 7 sets: set 6 is played at 6 tables, the rest at 5.
pub(super) const TWELVE_PAIRS_SIX_ROUNDS: Pattern = &[
    &[(11, 12, 1), (1, 10, 2), (2, 6, 4), (4, 7, 5), (3, 8, 6), (5, 9, 7)],
    &[(10, 3, 1), (6, 4, 3), (7, 1, 4), (8, 5, 5), (9, 11, 6), (12, 2, 7)],
    &[(4, 8, 1), (5, 11, 2), (2, 3, 3), (9, 10, 4), (1, 6, 5), (7, 12, 6)],
    &[(8, 7, 2), (1, 9, 3), (3, 12, 4), (11, 2, 5), (6, 5, 6), (10, 4, 7)],
    &[(2, 9, 1), (12, 6, 2), (5, 10, 3), (8, 11, 4), (4, 1, 6), (3, 7, 7)],
    &[(1, 5, 1), (3, 4, 2), (7, 11, 3), (9, 12, 5), (10, 2, 6), (6, 8, 7)],
];
